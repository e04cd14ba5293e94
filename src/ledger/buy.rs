//! Buy scenario ledger

use serde::Serialize;

use super::{final_total, year_of_month, LedgerRow};
use crate::annuity::round_to;
use crate::assumptions::Assumptions;
use crate::mortgage::Mortgage;
use crate::projection::{YearRow, YearlyProjection};

/// One month of the buy scenario
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BuyRow {
    pub month: u32,
    pub year: u32,
    #[serde(rename = "Down_Payment")]
    pub down_payment: f64,
    /// Purchase fee at month 1, selling fee at the terminal month
    #[serde(rename = "Legal_Fees")]
    pub legal_fees: f64,
    pub mortgage: f64,
    pub maintenance: f64,
    /// Net equity realised at the terminal month
    pub sale: f64,
    pub investment: f64,
    #[serde(rename = "Investment_Capital")]
    pub investment_capital: f64,
    pub total: f64,
}

impl LedgerRow for BuyRow {
    fn month(&self) -> u32 {
        self.month
    }

    fn cash_flow(&self) -> f64 {
        self.down_payment + self.legal_fees + self.mortgage + self.maintenance + self.sale
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

/// Build the pre-investment buy ledger
///
/// `total` holds the sum of the native components until the reconciler
/// fills in the investment columns.
pub fn build_buy_ledger(
    assumptions: &Assumptions,
    projection: &YearlyProjection,
    mortgage: &Mortgage,
    future_home_value: f64,
) -> Vec<BuyRow> {
    let last_month = assumptions.total_months();
    let down_payment = assumptions.property_value * assumptions.down_payment_pct / 100.0;
    let buying_cost = assumptions.property_value * assumptions.legal_fee_pct / 100.0;
    let selling_cost = future_home_value * assumptions.legal_fee_pct / 100.0;
    let payment = round_to(-mortgage.monthly_payment(), 0);
    let sale = round_to(mortgage.sale_equity(future_home_value, assumptions.stay_years), 0);

    (1..=last_month)
        .map(|month| {
            let year = year_of_month(month);
            let first = month == 1;
            let terminal = month == last_month;

            let mut legal_fees = 0.0;
            if first {
                legal_fees += round_to(-buying_cost, 0);
            }
            if terminal {
                legal_fees += round_to(-selling_cost, 0);
            }

            let mut row = BuyRow {
                month,
                year,
                down_payment: if first { round_to(-down_payment, 0) } else { 0.0 },
                legal_fees,
                mortgage: if year <= assumptions.mortgage_years { payment } else { 0.0 },
                maintenance: -projection.year(year).map_or(0.0, YearRow::monthly_maintenance),
                sale: if terminal { sale } else { 0.0 },
                investment: 0.0,
                investment_capital: 0.0,
                total: 0.0,
            };
            row.total = row.cash_flow();
            row
        })
        .collect()
}

/// Column sums over a whole buy ledger
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BuyTotals {
    #[serde(rename = "Down_Payment")]
    pub down_payment: f64,
    #[serde(rename = "Legal_Fees")]
    pub legal_fees: f64,
    pub mortgage: f64,
    pub maintenance: f64,
    pub sale: f64,
    pub investment: f64,
    #[serde(rename = "Investment_Capital")]
    pub investment_capital: f64,
    pub total: f64,
}

impl BuyTotals {
    pub fn from_rows(rows: &[BuyRow]) -> Self {
        rows.iter().fold(Self::default(), |mut acc, row| {
            acc.down_payment += row.down_payment;
            acc.legal_fees += row.legal_fees;
            acc.mortgage += row.mortgage;
            acc.maintenance += row.maintenance;
            acc.sale += row.sale;
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

    fn build(a: &Assumptions) -> Vec<BuyRow> {
        let projection = YearlyProjection::build(a);
        let principal = a.property_value * (1.0 - a.down_payment_pct / 100.0);
        let mortgage = Mortgage::new(principal, a.mortgage_rate_pct, a.mortgage_years);
        let future = a.property_value * (1.0 + a.property_appreciation_pct / 100.0).powi(a.stay_years as i32 - 1);
        build_buy_ledger(a, &projection, &mortgage, future)
    }

    fn scenario() -> Assumptions {
        Assumptions {
            property_appreciation_pct: 2.0,
            maintenance_rate_pct: 0.5,
            ..Default::default()
        }
    }

    #[test]
    fn test_first_month() {
        let rows = build(&scenario());
        assert_eq!(rows.len(), 120);
        let first = &rows[0];
        assert_eq!(first.down_payment, -25_000.0);
        assert_eq!(first.legal_fees, -2_500.0);
        assert_eq!(first.mortgage, -1_612.0);
        assert_eq!(first.maintenance, -104.0);
        assert_eq!(first.sale, 0.0);
        assert_eq!(first.total, -29_216.0);
    }

    #[test]
    fn test_regular_month() {
        let rows = build(&scenario());
        assert_eq!(rows[1].total, -1_716.0);
        assert_eq!(rows[1].down_payment, 0.0);
        assert_eq!(rows[1].legal_fees, 0.0);
    }

    #[test]
    fn test_terminal_month() {
        let rows = build(&scenario());
        let last = rows.last().unwrap();
        assert_eq!(last.month, 120);
        assert_eq!(last.year, 10);
        // Selling fee on the appreciated value, purchase fee stays in month 1
        assert_eq!(last.legal_fees, -2_988.0);
        assert_eq!(last.sale, 153_577.0);
        assert_eq!(last.total, 148_853.0);
    }

    #[test]
    fn test_stay_equal_to_term_pays_every_month() {
        let a = Assumptions { stay_years: 20, mortgage_years: 20, ..Default::default() };
        let rows = build(&a);
        assert_eq!(rows.len(), 240);
        assert!(rows.iter().all(|r| r.mortgage < 0.0));
    }

    #[test]
    fn test_stay_beyond_term_stops_payments() {
        let a = Assumptions { stay_years: 15, mortgage_years: 10, ..Default::default() };
        let rows = build(&a);
        for row in &rows {
            if row.year > 10 {
                assert_eq!(row.mortgage, 0.0, "month {}", row.month);
            } else {
                assert!(row.mortgage < 0.0, "month {}", row.month);
            }
        }
        // Paid off: the whole appreciated value is realised
        let last = rows.last().unwrap();
        let future = 250_000.0 * 1.06_f64.powi(14);
        assert_eq!(last.sale, future.round_ties_even());
    }

    #[test]
    fn test_column_totals() {
        let rows = build(&scenario());
        let totals = BuyTotals::from_rows(&rows);
        assert_eq!(totals.down_payment, -25_000.0);
        assert_eq!(totals.legal_fees, -2_500.0 - 2_988.0);
        assert_eq!(totals.mortgage, -1_612.0 * 120.0);
        assert_eq!(totals.sale, 153_577.0);
    }

    #[test]
    fn test_empty_stay_builds_no_rows() {
        let a = Assumptions { stay_years: 0, ..Default::default() };
        assert!(build(&a).is_empty());
    }
}
