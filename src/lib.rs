//! Buy versus rent cash-flow comparison
//!
//! Builds two parallel monthly ledgers for buying and renting the same
//! property over a fixed stay. Whichever scenario is cheaper in a given month
//! invests the difference at an assumed return, so both paths spend the same
//! nominal amount and their totals can be compared directly.
//!
//! ```no_run
//! use buy_vs_rent::{compare, Assumptions};
//!
//! let comparison = compare(&Assumptions::default())?;
//! println!("{}", comparison.analysis());
//! # Ok::<(), buy_vs_rent::BuyRentError>(())
//! ```

pub mod annuity;
pub mod assumptions;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod mortgage;
pub mod projection;
pub mod report;
pub mod sensitivity;
pub mod service;

pub use assumptions::{AssumptionField, Assumptions};
pub use engine::{compare, Comparison, ComparisonEngine, HeadlineFigures, Verdict};
pub use error::{BuyRentError, Result};
pub use sensitivity::{inclusive_range, sweep, SensitivitySweep, SweepPoint};
