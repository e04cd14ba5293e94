//! Single-parameter sensitivity sweeps
//!
//! Each candidate value is a fully independent run of the comparison
//! pipeline, so candidates are evaluated in parallel.

use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::assumptions::{AssumptionField, Assumptions};
use crate::engine::compare;
use crate::error::{BuyRentError, Result};

/// Largest number of candidates a closed range may expand to
pub const MAX_SWEEP_CANDIDATES: usize = 10_000;

/// Aggregates of one sweep run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    /// Candidate value of the varied field
    pub value: f64,
    pub buy_total: f64,
    pub rent_total: f64,
    /// `buy_total - rent_total`
    pub difference: f64,
}

/// Results of a sweep in candidate order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivitySweep {
    pub field: AssumptionField,
    pub points: Vec<SweepPoint>,
}

impl SensitivitySweep {
    /// Candidate at which buying gains the most relative to renting
    pub fn best_for_buying(&self) -> Option<&SweepPoint> {
        self.points
            .iter()
            .max_by(|a, b| a.difference.total_cmp(&b.difference))
    }

    /// First adjacent pair of candidates between which the verdict flips
    pub fn break_even_bracket(&self) -> Option<(&SweepPoint, &SweepPoint)> {
        self.points
            .windows(2)
            .find(|w| w[0].difference.signum() != w[1].difference.signum())
            .map(|w| (&w[0], &w[1]))
    }
}

/// Re-run the pipeline once per candidate, varying only `field`
///
/// Fails on the first candidate that produces invalid assumptions; no
/// partial results are returned.
pub fn sweep(base: &Assumptions, field: AssumptionField, values: &[f64]) -> Result<SensitivitySweep> {
    info!("sweeping {} over {} candidates", field, values.len());

    let points = values
        .par_iter()
        .map(|&value| {
            let assumptions = base.with_field(field, value)?;
            let comparison = compare(&assumptions)?;
            Ok(SweepPoint {
                value,
                buy_total: comparison.buy_total(),
                rent_total: comparison.rent_total(),
                difference: comparison.difference(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(SensitivitySweep { field, points })
}

/// Candidates of the closed range `[start, end]` spaced by `step`
///
/// The end point is included when it lies on the grid (within float noise).
pub fn inclusive_range(start: f64, end: f64, step: f64) -> Result<Vec<f64>> {
    let invalid = |reason| BuyRentError::InvalidRange { start, end, step, reason };

    if !start.is_finite() || !end.is_finite() || !step.is_finite() {
        return Err(invalid("bounds and step must be finite"));
    }
    if step <= 0.0 {
        return Err(invalid("step must be positive"));
    }
    if start > end {
        return Err(invalid("start must not exceed end"));
    }

    let intervals = ((end - start) / step + 1e-9).floor();
    if !intervals.is_finite() || intervals >= MAX_SWEEP_CANDIDATES as f64 {
        return Err(invalid("too many candidates"));
    }

    let count = intervals as usize + 1;
    Ok((0..count).map(|i| start + step * i as f64).collect())
}
