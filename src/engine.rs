//! Comparison engine: runs the full buy vs rent pipeline for one set of assumptions

use log::debug;
use serde::Serialize;

use crate::annuity;
use crate::assumptions::Assumptions;
use crate::error::{ensure_finite, Result};
use crate::ledger::{
    build_buy_ledger, build_rent_ledger, reconcile, BuyRow, BuyTotals, InvestmentLedger,
    RentRow, RentTotals,
};
use crate::mortgage::Mortgage;
use crate::projection::YearlyProjection;

/// Closed-form figures for the whole stay, before any monthly rounding
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadlineFigures {
    pub down_payment: f64,
    pub mortgage_amount: f64,
    pub monthly_mortgage: f64,
    /// Payments made during the stay, capped at the mortgage term
    pub total_mortgage: f64,
    /// Property value in the final year of the stay
    pub future_home_value: f64,
    /// Home value minus outstanding balance at sale
    pub sale_equity: f64,
    pub buying_cost: f64,
    pub selling_cost: f64,
    pub total_maintenance: f64,
    pub monthly_rent: f64,
    pub total_rent: f64,
    pub rent_deposit: f64,
}

impl HeadlineFigures {
    pub fn compute(assumptions: &Assumptions, mortgage: &Mortgage) -> Result<Self> {
        let a = assumptions;
        let appreciation = a.property_appreciation_pct / 100.0;

        let down_payment = a.property_value * a.down_payment_pct / 100.0;
        let future_home_value = a.property_value
            * annuity::growth_factor(appreciation, a.stay_years as f64 - 1.0);
        let monthly_rent = a.property_value * a.rental_yield_pct / 100.0 / 12.0;

        let figures = Self {
            down_payment,
            mortgage_amount: mortgage.principal,
            monthly_mortgage: ensure_finite(mortgage.monthly_payment(), "monthly mortgage payment")?,
            total_mortgage: mortgage.total_paid(a.total_months()),
            future_home_value: ensure_finite(future_home_value, "future home value")?,
            sale_equity: ensure_finite(
                mortgage.sale_equity(future_home_value, a.stay_years),
                "sale equity",
            )?,
            buying_cost: a.property_value * a.legal_fee_pct / 100.0,
            selling_cost: future_home_value * a.legal_fee_pct / 100.0,
            total_maintenance: ensure_finite(
                annuity::geometric_sum(
                    a.property_value * a.maintenance_rate_pct / 100.0,
                    appreciation,
                    a.stay_years,
                ),
                "total maintenance",
            )?,
            monthly_rent,
            total_rent: ensure_finite(
                annuity::geometric_sum(monthly_rent * 12.0, a.rent_increase_pct / 100.0, a.stay_years),
                "total rent",
            )?,
            rent_deposit: monthly_rent * a.rent_deposit_months as f64,
        };
        Ok(figures)
    }
}

/// Which scenario comes out ahead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Buy,
    Rent,
    Even,
}

/// Complete result of one comparison run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub assumptions: Assumptions,
    pub headline: HeadlineFigures,
    pub projection: YearlyProjection,
    pub buy: Vec<BuyRow>,
    pub rent: Vec<RentRow>,
    pub buy_investment: InvestmentLedger,
    pub rent_investment: InvestmentLedger,
    pub buy_totals: BuyTotals,
    pub rent_totals: RentTotals,
}

impl Comparison {
    /// Sum of the buy ledger's final totals
    pub fn buy_total(&self) -> f64 {
        self.buy_totals.total
    }

    /// Sum of the rent ledger's final totals
    pub fn rent_total(&self) -> f64 {
        self.rent_totals.total
    }

    /// `buy - rent`; positive favours buying
    pub fn difference(&self) -> f64 {
        self.buy_total() - self.rent_total()
    }

    pub fn verdict(&self) -> Verdict {
        let diff = self.difference();
        if diff > 0.0 {
            Verdict::Buy
        } else if diff < 0.0 {
            Verdict::Rent
        } else {
            Verdict::Even
        }
    }

    /// Plain-text summary of the outcome
    pub fn analysis(&self) -> String {
        let lead = match self.verdict() {
            Verdict::Buy => "Buying comes out ahead",
            Verdict::Rent => "Renting comes out ahead",
            Verdict::Even => "Both options come out even",
        };
        format!(
            "Based on the inputs provided, the total value of the buying option at the end of {} years was {}, \
             compared to the total rent value of {}. {} by {}.",
            self.assumptions.stay_years,
            format_amount(self.buy_total()),
            format_amount(self.rent_total()),
            lead,
            format_amount(self.difference().abs()),
        )
    }
}

/// Whole currency units with thousands separators
pub fn format_amount(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if rounded < 0 {
        out.insert(0, '-');
    }
    out
}

/// Runs the pipeline for one validated set of assumptions
#[derive(Debug, Clone)]
pub struct ComparisonEngine {
    assumptions: Assumptions,
}

impl ComparisonEngine {
    /// Validate and take ownership of the assumptions
    pub fn new(assumptions: Assumptions) -> Result<Self> {
        assumptions.validate()?;
        Ok(Self { assumptions })
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    pub fn mortgage(&self) -> Mortgage {
        let a = &self.assumptions;
        let principal = a.property_value - a.property_value * a.down_payment_pct / 100.0;
        Mortgage::new(principal, a.mortgage_rate_pct, a.mortgage_years)
    }

    /// Build projection, both ledgers and both side investments
    pub fn run(&self) -> Result<Comparison> {
        let a = &self.assumptions;
        let mortgage = self.mortgage();
        let headline = HeadlineFigures::compute(a, &mortgage)?;
        let projection = YearlyProjection::build(a);

        let buy = build_buy_ledger(a, &projection, &mortgage, headline.future_home_value);
        let rent = build_rent_ledger(a, &projection);
        let reconciled = reconcile(&buy, &rent, a.investment_return_pct);

        let buy_totals = BuyTotals::from_rows(&reconciled.buy);
        let rent_totals = RentTotals::from_rows(&reconciled.rent);
        ensure_finite(buy_totals.total, "buy ledger total")?;
        ensure_finite(rent_totals.total, "rent ledger total")?;

        debug!(
            "comparison over {} months: buy {:.0}, rent {:.0}",
            a.total_months(),
            buy_totals.total,
            rent_totals.total
        );

        Ok(Comparison {
            assumptions: a.clone(),
            headline,
            projection,
            buy: reconciled.buy,
            rent: reconciled.rent,
            buy_investment: reconciled.buy_investment,
            rent_investment: reconciled.rent_investment,
            buy_totals,
            rent_totals,
        })
    }
}

/// Validate and run in one step
pub fn compare(assumptions: &Assumptions) -> Result<Comparison> {
    ComparisonEngine::new(assumptions.clone())?.run()
}
