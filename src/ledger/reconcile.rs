//! Cross-investment reconciliation between the buy and rent ledgers
//!
//! Each month the cheaper scenario invests the difference in outflow, so both
//! paths spend the same nominal amount. The buy side and the rent side each
//! get their own compounding ledger.

use log::debug;
use serde::Serialize;

use super::investment::InvestmentLedger;
use super::{BuyRow, LedgerRow, RentRow};
use crate::annuity::round_to;

/// Scenario that invests a given month's surplus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InvestingSide {
    Buy,
    Rent,
}

impl InvestingSide {
    /// Ledger entry this side books for a month with residual `invest`
    ///
    /// `invest` is the buy cash flow minus the rent cash flow. Negative means
    /// buying cost more, so renting invests; positive means the opposite.
    pub fn entry(self, invest: f64) -> f64 {
        match self {
            InvestingSide::Rent if invest < 0.0 => invest,
            InvestingSide::Buy if invest > 0.0 => -invest,
            _ => 0.0,
        }
    }
}

/// Final ledgers with their investment columns filled in
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reconciled {
    pub buy: Vec<BuyRow>,
    pub rent: Vec<RentRow>,
    pub buy_investment: InvestmentLedger,
    pub rent_investment: InvestmentLedger,
}

/// Monthly excess-cash residual `buy - rent` from pre-investment cash flows
pub fn residuals(buy: &[BuyRow], rent: &[RentRow]) -> Vec<f64> {
    buy.iter()
        .zip(rent)
        .map(|(b, r)| {
            debug_assert_eq!(b.month(), r.month());
            b.cash_flow() - r.cash_flow()
        })
        .collect()
}

/// Run both side investments and produce the final ledgers
///
/// The terminal month's residual is never invested: both scenarios end that
/// month, so the entry is forced to zero on both sides.
pub fn reconcile(buy: &[BuyRow], rent: &[RentRow], annual_return_pct: f64) -> Reconciled {
    let invest = residuals(buy, rent);
    let last = invest.len().saturating_sub(1);

    let entries_for = |side: InvestingSide| -> Vec<f64> {
        invest
            .iter()
            .enumerate()
            .map(|(idx, &residual)| if idx == last { 0.0 } else { side.entry(residual) })
            .collect()
    };

    let buy_investment = InvestmentLedger::compound(&entries_for(InvestingSide::Buy), annual_return_pct);
    let rent_investment = InvestmentLedger::compound(&entries_for(InvestingSide::Rent), annual_return_pct);

    debug!(
        "reconciled {} months: buy capital {:.2}, rent capital {:.2}",
        invest.len(),
        buy_investment.ending_capital(),
        rent_investment.ending_capital()
    );

    Reconciled {
        buy: apply(buy, &buy_investment),
        rent: apply(rent, &rent_investment),
        buy_investment,
        rent_investment,
    }
}

fn apply<R: LedgerRow>(rows: &[R], investment: &InvestmentLedger) -> Vec<R> {
    let last = rows.len().saturating_sub(1);
    let ending_capital = round_to(investment.ending_capital(), 0);

    rows.iter()
        .zip(investment.rows())
        .enumerate()
        .map(|(idx, (row, inv))| {
            let capital = if idx == last { ending_capital } else { 0.0 };
            row.with_investment(round_to(inv.investment, 0), capital)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::Assumptions;
    use crate::ledger::{build_buy_ledger, build_rent_ledger};
    use crate::mortgage::Mortgage;
    use crate::projection::YearlyProjection;
    use approx::assert_relative_eq;

    fn run(a: &Assumptions) -> Reconciled {
        let projection = YearlyProjection::build(a);
        let principal = a.property_value * (1.0 - a.down_payment_pct / 100.0);
        let mortgage = Mortgage::new(principal, a.mortgage_rate_pct, a.mortgage_years);
        let future = a.property_value
            * (1.0 + a.property_appreciation_pct / 100.0).powf(a.stay_years as f64 - 1.0);
        let buy = build_buy_ledger(a, &projection, &mortgage, future);
        let rent = build_rent_ledger(a, &projection);
        reconcile(&buy, &rent, a.investment_return_pct)
    }

    fn scenario() -> Assumptions {
        Assumptions {
            property_appreciation_pct: 2.0,
            maintenance_rate_pct: 0.5,
            ..Default::default()
        }
    }

    #[test]
    fn test_side_entries() {
        assert_eq!(InvestingSide::Rent.entry(-500.0), -500.0);
        assert_eq!(InvestingSide::Rent.entry(500.0), 0.0);
        assert_eq!(InvestingSide::Buy.entry(500.0), -500.0);
        assert_eq!(InvestingSide::Buy.entry(-500.0), 0.0);
        assert_eq!(InvestingSide::Buy.entry(0.0), 0.0);
    }

    #[test]
    fn test_rent_side_invests_when_buying_costs_more() {
        let r = run(&scenario());
        // Month 1: buy -29,216 vs rent -3,125
        assert_eq!(r.rent_investment.rows()[0].investment, -26_091.0);
        assert_eq!(r.rent_investment.rows()[0].capital, 26_091.0);
        assert_eq!(r.buy_investment.rows()[0].investment, 0.0);
        assert_eq!(r.rent[0].investment, -26_091.0);
        assert_eq!(r.rent[0].total, -3_125.0 - 26_091.0);
    }

    #[test]
    fn test_terminal_entry_is_zero() {
        let r = run(&scenario());
        let last_rent = r.rent_investment.rows().last().unwrap();
        let last_buy = r.buy_investment.rows().last().unwrap();
        assert_eq!(last_rent.investment, 0.0);
        assert_eq!(last_buy.investment, 0.0);
        // The terminal residual is large and positive (sale proceeds)
        let invest = residuals(&r.buy, &r.rent);
        assert!(invest.last().copied().unwrap() > 0.0);
    }

    #[test]
    fn test_only_one_side_invests_each_month() {
        let r = run(&scenario());
        for (b, rr) in r.buy_investment.rows().iter().zip(r.rent_investment.rows()) {
            assert!(b.investment == 0.0 || rr.investment == 0.0, "month {}", b.month);
        }
    }

    #[test]
    fn test_capital_only_on_terminal_row() {
        let r = run(&scenario());
        let last = r.rent.len() - 1;
        for (idx, row) in r.rent.iter().enumerate() {
            if idx != last {
                assert_eq!(row.investment_capital, 0.0);
            }
        }
        assert_relative_eq!(r.rent[last].investment_capital, 161_771.0, epsilon = 1.0);
        assert_eq!(r.buy[last].investment_capital, 0.0);
    }

    #[test]
    fn test_final_totals_include_investment() {
        let r = run(&scenario());
        for row in &r.rent {
            assert_eq!(
                row.total,
                (row.deposit + row.rent + row.investment + row.investment_capital).round_ties_even()
            );
        }
        for row in &r.buy {
            assert_eq!(
                row.total,
                (row.cash_flow() + row.investment + row.investment_capital).round_ties_even()
            );
        }
    }
}
