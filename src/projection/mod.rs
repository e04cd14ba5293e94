//! Forward projection of property value, rent and maintenance

mod yearly;

pub use yearly::{YearRow, YearlyProjection};
