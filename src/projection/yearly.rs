//! Year-by-year property value, rent and maintenance series

use serde::Serialize;

use crate::annuity::round_to;
use crate::assumptions::Assumptions;

/// One projected year
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearRow {
    /// Year of the stay, starting at 1
    pub year: u32,
    pub property_value: f64,
    pub annual_rent: f64,
    /// Maintenance for the year, rounded to cents
    pub annual_maintenance: f64,
}

impl YearRow {
    /// Maintenance charged in each month of this year
    pub fn monthly_maintenance(&self) -> f64 {
        round_to(self.annual_maintenance / 12.0, 0)
    }

    /// Rent charged in each month of this year
    pub fn monthly_rent(&self) -> f64 {
        round_to(self.annual_rent / 12.0, 0)
    }
}

/// Ordered yearly series covering the whole stay
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyProjection {
    rows: Vec<YearRow>,
}

impl YearlyProjection {
    /// Compound year 1 inputs forward one year at a time
    pub fn build(assumptions: &Assumptions) -> Self {
        let appreciation = assumptions.property_appreciation_pct / 100.0;
        let rent_increase = assumptions.rent_increase_pct / 100.0;
        let maintenance_rate = assumptions.maintenance_rate_pct / 100.0;

        let mut property_value = assumptions.property_value;
        let mut annual_rent = assumptions.property_value * assumptions.rental_yield_pct / 100.0;

        let mut rows = Vec::with_capacity(assumptions.stay_years as usize);
        for year in 1..=assumptions.stay_years {
            if year > 1 {
                property_value *= 1.0 + appreciation;
                annual_rent *= 1.0 + rent_increase;
            }
            rows.push(YearRow {
                year,
                property_value,
                annual_rent,
                annual_maintenance: round_to(property_value * maintenance_rate, 2),
            });
        }

        Self { rows }
    }

    pub fn rows(&self) -> &[YearRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row for a 1-indexed year; years past the end use the last row
    ///
    /// `None` only for an empty projection.
    pub fn year(&self, year: u32) -> Option<&YearRow> {
        let idx = (year as usize).saturating_sub(1);
        self.rows.get(idx).or_else(|| self.rows.last())
    }

    /// Property value in the final year of the stay
    pub fn final_property_value(&self) -> f64 {
        self.rows.last().map(|r| r.property_value).unwrap_or(0.0)
    }
}
