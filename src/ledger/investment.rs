//! Compounding side-investment ledger

use serde::Serialize;

use crate::annuity::{monthly_equivalent_rate, round_to};

/// One month of a side investment
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct InvestmentRow {
    pub month: u32,
    /// Signed ledger entry; negative means cash locked into the investment
    pub investment: f64,
    /// Return earned on the previous month's capital, in cents
    pub interest: f64,
    /// Running balance after interest and this month's contribution
    pub capital: f64,
}

impl InvestmentRow {
    /// Amount added to the pot this month
    pub fn contribution(&self) -> f64 {
        -self.investment
    }
}

/// Sequential fold of contributions into a compounding balance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvestmentLedger {
    rows: Vec<InvestmentRow>,
}

impl InvestmentLedger {
    /// Compound `entries` (one per month, month 1 first) at `annual_return_pct`
    ///
    /// Capital starts at the first contribution. Every later month adds
    /// interest on the previous balance, rounded to cents, then that month's
    /// contribution.
    pub fn compound(entries: &[f64], annual_return_pct: f64) -> Self {
        let rate = monthly_equivalent_rate(annual_return_pct / 100.0);
        let mut rows: Vec<InvestmentRow> = Vec::with_capacity(entries.len());

        for (idx, &investment) in entries.iter().enumerate() {
            let month = idx as u32 + 1;
            let row = match rows.last() {
                None => InvestmentRow {
                    month,
                    investment,
                    interest: 0.0,
                    capital: -investment,
                },
                Some(prev) => {
                    let interest = round_to(prev.capital * rate, 2);
                    InvestmentRow {
                        month,
                        investment,
                        interest,
                        capital: prev.capital + interest - investment,
                    }
                }
            };
            rows.push(row);
        }

        Self { rows }
    }

    pub fn rows(&self) -> &[InvestmentRow] {
        &self.rows
    }

    /// Capital at the terminal month
    pub fn ending_capital(&self) -> f64 {
        self.rows.last().map(|r| r.capital).unwrap_or(0.0)
    }

    pub fn total_contributions(&self) -> f64 {
        self.rows.iter().map(InvestmentRow::contribution).sum()
    }

    pub fn total_interest(&self) -> f64 {
        self.rows.iter().map(|r| r.interest).sum()
    }
}
