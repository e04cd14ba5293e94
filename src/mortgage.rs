//! Level-payment mortgage model
//!
//! Only the payment formula and the outstanding balance at sale are modelled;
//! there is no month-by-month amortization schedule.

use log::warn;

use crate::annuity;

/// A fixed-rate, level-payment mortgage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mortgage {
    /// Amount borrowed
    pub principal: f64,
    /// Annual nominal rate in percent
    pub annual_rate_pct: f64,
    /// Term in years
    pub term_years: u32,
}

impl Mortgage {
    pub fn new(principal: f64, annual_rate_pct: f64, term_years: u32) -> Self {
        Self {
            principal,
            annual_rate_pct,
            term_years,
        }
    }

    /// Nominal annual rate divided by 12
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_pct / 100.0 / 12.0
    }

    pub fn term_months(&self) -> u32 {
        self.term_years * 12
    }

    pub fn monthly_payment(&self) -> f64 {
        annuity::level_payment(self.principal, self.monthly_rate(), self.term_months())
    }

    /// Principal still owed after `months` payments
    pub fn balance_after(&self, months: u32) -> f64 {
        annuity::remaining_balance(
            self.principal,
            self.monthly_rate(),
            self.term_months(),
            months,
        )
    }

    /// Total of the payments made during the first `months` months
    pub fn total_paid(&self, months: u32) -> f64 {
        self.monthly_payment() * months.min(self.term_months()) as f64
    }

    /// Net equity the buyer realises when selling after `stay_years`
    ///
    /// Home value minus the outstanding balance, never more than the home value.
    pub fn sale_equity(&self, future_home_value: f64, stay_years: u32) -> f64 {
        let equity = future_home_value - self.balance_after(stay_years * 12);
        // Only reachable with a negative outstanding balance, which validated
        // assumptions never produce
        if equity > future_home_value {
            warn!(
                "sale equity {:.2} exceeds home value {:.2}; clamping",
                equity, future_home_value
            );
            return future_home_value;
        }
        equity
    }
}
