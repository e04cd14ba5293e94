//! Monthly cash-flow ledgers for the buy and rent scenarios
//!
//! Sign convention: outflows are negative, inflows positive. Cash components
//! are whole currency units; investment interest is carried in cents.

mod buy;
mod investment;
mod reconcile;
mod rent;

pub use buy::{build_buy_ledger, BuyRow, BuyTotals};
pub use investment::{InvestmentLedger, InvestmentRow};
pub use reconcile::{reconcile, residuals, InvestingSide, Reconciled};
pub use rent::{build_rent_ledger, RentRow, RentTotals};

use crate::annuity::round_to;

/// Behaviour shared by the buy and rent rows
pub trait LedgerRow: Clone {
    /// 1-indexed month of the stay
    fn month(&self) -> u32;

    /// Sum of the scenario's own cash-flow components, excluding investment
    fn cash_flow(&self) -> f64;

    /// Copy with the investment columns set and the total recomputed
    fn with_investment(&self, investment: f64, investment_capital: f64) -> Self;
}

/// Year of the stay a month falls in (`ceil(month / 12)`)
pub fn year_of_month(month: u32) -> u32 {
    month.div_ceil(12)
}

/// Final total of a row once its investment columns are known
pub(crate) fn final_total(cash_flow: f64, investment: f64, investment_capital: f64) -> f64 {
    round_to(cash_flow + investment + investment_capital, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_of_month() {
        assert_eq!(year_of_month(1), 1);
        assert_eq!(year_of_month(12), 1);
        assert_eq!(year_of_month(13), 2);
        assert_eq!(year_of_month(120), 10);
    }
}
