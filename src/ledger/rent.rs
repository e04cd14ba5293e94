//! Rent scenario ledger

use serde::Serialize;

use super::{final_total, year_of_month, LedgerRow};
use crate::annuity::round_to;
use crate::assumptions::Assumptions;
use crate::projection::{YearRow, YearlyProjection};

/// One month of the rent scenario
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RentRow {
    pub month: u32,
    pub year: u32,
    /// Paid at month 1, returned at the terminal month
    pub deposit: f64,
    pub rent: f64,
    pub investment: f64,
    #[serde(rename = "Investment_Capital")]
    pub investment_capital: f64,
    pub total: f64,
}

impl LedgerRow for RentRow {
    fn month(&self) -> u32 {
        self.month
    }

    fn cash_flow(&self) -> f64 {
        self.deposit + self.rent
    }

    fn with_investment(&self, investment: f64, investment_capital: f64) -> Self {
        Self {
            investment,
            investment_capital,
            total: final_total(self.cash_flow(), investment, investment_capital),
            ..self.clone()
        }
    }
}

/// Build the pre-investment rent ledger
pub fn build_rent_ledger(assumptions: &Assumptions, projection: &YearlyProjection) -> Vec<RentRow> {
    let last_month = assumptions.total_months();
    let monthly_rent = projection.year(1).map_or(0.0, |row| row.annual_rent / 12.0);
    let deposit = round_to(monthly_rent * assumptions.rent_deposit_months as f64, 0);

    (1..=last_month)
        .map(|month| {
            let year = year_of_month(month);
            let mut row = RentRow {
                month,
                year,
                deposit: 0.0,
                rent: -projection.year(year).map_or(0.0, YearRow::monthly_rent),
                investment: 0.0,
                investment_capital: 0.0,
                total: 0.0,
            };
            if month == 1 {
                row.deposit -= deposit;
            }
            if month == last_month {
                row.deposit += deposit;
            }
            row.total = row.cash_flow();
            row
        })
        .collect()
}

/// Column sums over a whole rent ledger
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RentTotals {
    pub deposit: f64,
    pub rent: f64,
    pub investment: f64,
    #[serde(rename = "Investment_Capital")]
    pub investment_capital: f64,
    pub total: f64,
}

impl RentTotals {
    pub fn from_rows(rows: &[RentRow]) -> Self {
        rows.iter().fold(Self::default(), |mut acc, row| {
            acc.deposit += row.deposit;
            acc.rent += row.rent;
            acc.investment += row.investment;
            acc.investment_capital += row.investment_capital;
            acc.total += row.total;
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(a: &Assumptions) -> Vec<RentRow> {
        build_rent_ledger(a, &YearlyProjection::build(a))
    }

    #[test]
    fn test_deposit_paid_and_returned() {
        let rows = build(&Assumptions::default());
        assert_eq!(rows.len(), 120);
        assert_eq!(rows[0].deposit, -2_083.0);
        assert_eq!(rows[0].rent, -1_042.0);
        assert_eq!(rows[0].total, -3_125.0);
        assert_eq!(rows[1].deposit, 0.0);

        let last = rows.last().unwrap();
        assert_eq!(last.deposit, 2_083.0);
        assert_eq!(last.total, 838.0);
        assert_eq!(RentTotals::from_rows(&rows).deposit, 0.0);
    }

    #[test]
    fn test_rent_steps_up_yearly() {
        let rows = build(&Assumptions::default());
        assert_eq!(rows[11].rent, -1_042.0);
        // 12,750 / 12 = 1,062.5 rounds to even
        assert_eq!(rows[12].rent, -1_062.0);
        assert!(rows.windows(2).all(|w| w[1].rent <= w[0].rent));
    }

    #[test]
    fn test_no_deposit() {
        let a = Assumptions { rent_deposit_months: 0, ..Default::default() };
        let rows = build(&a);
        assert!(rows.iter().all(|r| r.deposit == 0.0));
    }

    #[test]
    fn test_empty_stay_builds_no_rows() {
        let a = Assumptions { stay_years: 0, ..Default::default() };
        assert!(build(&a).is_empty());
    }
}
