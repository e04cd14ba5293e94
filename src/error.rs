//! Error types for the comparison pipeline

use thiserror::Error;

use crate::assumptions::AssumptionField;

/// Errors raised while validating inputs or running a comparison
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuyRentError {
    /// An assumption lies outside its domain; nothing is computed
    #[error("invalid assumption `{field}` = {value}: {reason}")]
    InvalidAssumption {
        field: AssumptionField,
        value: f64,
        reason: &'static str,
    },

    /// A field name that does not match any assumption
    #[error("unknown assumption field `{0}`")]
    UnknownField(String),

    /// A sweep range that cannot be enumerated
    #[error("invalid sweep range [{start}, {end}] step {step}: {reason}")]
    InvalidRange {
        start: f64,
        end: f64,
        step: f64,
        reason: &'static str,
    },

    /// A computed figure came out NaN or infinite
    #[error("non-finite result while computing {context}")]
    ArithmeticDegenerate { context: &'static str },
}

pub type Result<T> = std::result::Result<T, BuyRentError>;

impl BuyRentError {
    pub(crate) fn invalid(field: AssumptionField, value: f64, reason: &'static str) -> Self {
        BuyRentError::InvalidAssumption { field, value, reason }
    }

    /// The offending field, when the error is tied to one
    pub fn field(&self) -> Option<AssumptionField> {
        match self {
            BuyRentError::InvalidAssumption { field, .. } => Some(*field),
            _ => None,
        }
    }
}

/// Reject non-finite intermediate figures
pub(crate) fn ensure_finite(value: f64, context: &'static str) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(BuyRentError::ArithmeticDegenerate { context })
    }
}
