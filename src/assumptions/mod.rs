//! Scenario assumptions shared by the buy and rent paths
//!
//! All percentages are annual rates in percent units (6.0 means 6%).
//! Missing fields in a JSON document fall back to the calculator defaults.

mod field;

pub use field::AssumptionField;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BuyRentError, Result};

/// Upper bound on the holding period; keeps each run to at most 1200 months
pub const MAX_STAY_YEARS: u32 = 100;

/// Upper bound on the mortgage term; keeps the payment count well inside `u32`
pub const MAX_MORTGAGE_YEARS: u32 = 100;

/// Upper bound on the rent deposit
pub const MAX_DEPOSIT_MONTHS: u32 = 24;

/// Immutable input record for one comparison run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assumptions {
    /// Purchase price, also the base for the year 1 rent
    #[serde(default = "default_property_value")]
    pub property_value: f64,

    /// Holding period in years
    #[serde(default = "default_stay_years")]
    pub stay_years: u32,

    #[serde(default = "default_down_payment_pct")]
    pub down_payment_pct: f64,

    #[serde(default = "default_mortgage_rate_pct")]
    pub mortgage_rate_pct: f64,

    /// Mortgage term in years; payments stop after it even if the stay continues
    #[serde(default = "default_mortgage_years")]
    pub mortgage_years: u32,

    #[serde(default = "default_property_appreciation_pct")]
    pub property_appreciation_pct: f64,

    /// Charged on the purchase price at month 1 and on the sale price at the terminal month
    #[serde(default = "default_legal_fee_pct")]
    pub legal_fee_pct: f64,

    /// Annual maintenance as a percentage of that year's property value
    #[serde(default = "default_maintenance_rate_pct")]
    pub maintenance_rate_pct: f64,

    /// Year 1 annual rent as a percentage of the property value
    #[serde(default = "default_rental_yield_pct")]
    pub rental_yield_pct: f64,

    /// Annual return earned by whichever side invests its monthly surplus
    #[serde(default = "default_investment_return_pct")]
    pub investment_return_pct: f64,

    #[serde(default = "default_rent_increase_pct")]
    pub rent_increase_pct: f64,

    /// Deposit paid at month 1 and returned at the terminal month, in months of rent
    #[serde(default = "default_rent_deposit_months")]
    pub rent_deposit_months: u32,
}

fn default_property_value() -> f64 { 250_000.0 }
fn default_stay_years() -> u32 { 10 }
fn default_down_payment_pct() -> f64 { 10.0 }
fn default_mortgage_rate_pct() -> f64 { 6.0 }
fn default_mortgage_years() -> u32 { 20 }
fn default_property_appreciation_pct() -> f64 { 6.0 }
fn default_legal_fee_pct() -> f64 { 1.0 }
fn default_maintenance_rate_pct() -> f64 { 1.0 }
fn default_rental_yield_pct() -> f64 { 5.0 }
fn default_investment_return_pct() -> f64 { 8.0 }
fn default_rent_increase_pct() -> f64 { 2.0 }
fn default_rent_deposit_months() -> u32 { 2 }

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            property_value: default_property_value(),
            stay_years: default_stay_years(),
            down_payment_pct: default_down_payment_pct(),
            mortgage_rate_pct: default_mortgage_rate_pct(),
            mortgage_years: default_mortgage_years(),
            property_appreciation_pct: default_property_appreciation_pct(),
            legal_fee_pct: default_legal_fee_pct(),
            maintenance_rate_pct: default_maintenance_rate_pct(),
            rental_yield_pct: default_rental_yield_pct(),
            investment_return_pct: default_investment_return_pct(),
            rent_increase_pct: default_rent_increase_pct(),
            rent_deposit_months: default_rent_deposit_months(),
        }
    }
}

impl Assumptions {
    /// Parse from a JSON document, filling missing fields with defaults
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Load from a JSON file on disk
    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let assumptions = Self::from_json_str(&text)
            .map_err(|e| anyhow::anyhow!("failed to parse {}: {e}", path.display()))?;
        Ok(assumptions)
    }

    /// Number of monthly ledger rows
    pub fn total_months(&self) -> u32 {
        self.stay_years * 12
    }

    /// Check every field against its domain; the first violation wins
    pub fn validate(&self) -> Result<()> {
        use AssumptionField as F;

        for field in AssumptionField::ALL {
            let value = self.field_value(field);
            if !value.is_finite() {
                return Err(BuyRentError::invalid(field, value, "must be a finite number"));
            }
        }

        if self.property_value <= 0.0 {
            return Err(BuyRentError::invalid(F::PropertyValue, self.property_value, "must be greater than zero"));
        }
        if self.stay_years < 1 || self.stay_years > MAX_STAY_YEARS {
            return Err(BuyRentError::invalid(F::StayYears, self.stay_years as f64, "must be between 1 and 100 years"));
        }
        if self.mortgage_years < 1 || self.mortgage_years > MAX_MORTGAGE_YEARS {
            return Err(BuyRentError::invalid(F::MortgageYears, self.mortgage_years as f64, "must be between 1 and 100 years"));
        }
        if !(0.0..=100.0).contains(&self.down_payment_pct) {
            return Err(BuyRentError::invalid(F::DownPaymentPct, self.down_payment_pct, "must be between 0 and 100"));
        }
        if self.rent_deposit_months > MAX_DEPOSIT_MONTHS {
            return Err(BuyRentError::invalid(F::RentDepositMonths, self.rent_deposit_months as f64, "must be at most 24 months"));
        }

        let non_negative = [
            (F::LegalFeePct, self.legal_fee_pct),
            (F::MaintenanceRatePct, self.maintenance_rate_pct),
            (F::RentalYieldPct, self.rental_yield_pct),
        ];
        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(BuyRentError::invalid(field, value, "must not be negative"));
            }
        }

        // (1 + r) must stay positive for every compounding rate
        let growth_rates = [
            (F::MortgageRatePct, self.mortgage_rate_pct),
            (F::PropertyAppreciationPct, self.property_appreciation_pct),
            (F::InvestmentReturnPct, self.investment_return_pct),
            (F::RentIncreasePct, self.rent_increase_pct),
        ];
        for (field, value) in growth_rates {
            if value <= -100.0 {
                return Err(BuyRentError::invalid(field, value, "must be greater than -100%"));
            }
        }

        Ok(())
    }

    /// Read one field as a float
    pub fn field_value(&self, field: AssumptionField) -> f64 {
        match field {
            AssumptionField::PropertyValue => self.property_value,
            AssumptionField::StayYears => self.stay_years as f64,
            AssumptionField::DownPaymentPct => self.down_payment_pct,
            AssumptionField::MortgageRatePct => self.mortgage_rate_pct,
            AssumptionField::MortgageYears => self.mortgage_years as f64,
            AssumptionField::PropertyAppreciationPct => self.property_appreciation_pct,
            AssumptionField::LegalFeePct => self.legal_fee_pct,
            AssumptionField::MaintenanceRatePct => self.maintenance_rate_pct,
            AssumptionField::RentalYieldPct => self.rental_yield_pct,
            AssumptionField::InvestmentReturnPct => self.investment_return_pct,
            AssumptionField::RentIncreasePct => self.rent_increase_pct,
            AssumptionField::RentDepositMonths => self.rent_deposit_months as f64,
        }
    }

    /// Copy with one field replaced
    ///
    /// Integral fields reject fractional or negative values. The result is
    /// not validated; callers run [`Assumptions::validate`] before computing.
    pub fn with_field(&self, field: AssumptionField, value: f64) -> Result<Self> {
        let whole = if field.is_integral() { whole_number(field, value)? } else { 0 };
        let mut next = self.clone();
        match field {
            AssumptionField::PropertyValue => next.property_value = value,
            AssumptionField::StayYears => next.stay_years = whole,
            AssumptionField::DownPaymentPct => next.down_payment_pct = value,
            AssumptionField::MortgageRatePct => next.mortgage_rate_pct = value,
            AssumptionField::MortgageYears => next.mortgage_years = whole,
            AssumptionField::PropertyAppreciationPct => next.property_appreciation_pct = value,
            AssumptionField::LegalFeePct => next.legal_fee_pct = value,
            AssumptionField::MaintenanceRatePct => next.maintenance_rate_pct = value,
            AssumptionField::RentalYieldPct => next.rental_yield_pct = value,
            AssumptionField::InvestmentReturnPct => next.investment_return_pct = value,
            AssumptionField::RentIncreasePct => next.rent_increase_pct = value,
            AssumptionField::RentDepositMonths => next.rent_deposit_months = whole,
        }
        Ok(next)
    }
}

fn whole_number(field: AssumptionField, value: f64) -> Result<u32> {
    if !value.is_finite() || value.fract() != 0.0 || value < 0.0 || value > u32::MAX as f64 {
        return Err(BuyRentError::invalid(field, value, "must be a non-negative whole number"));
    }
    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let a = Assumptions::default();
        assert!(a.validate().is_ok());
        assert_eq!(a.total_months(), 120);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let a = Assumptions::from_json_str(r#"{ "property_value": 400000, "stay_years": 5 }"#).unwrap();
        assert_eq!(a.property_value, 400_000.0);
        assert_eq!(a.stay_years, 5);
        assert_eq!(a.mortgage_years, 20);
        assert_eq!(a.investment_return_pct, 8.0);
    }

    #[test]
    fn test_zero_stay_rejected() {
        let a = Assumptions { stay_years: 0, ..Default::default() };
        let err = a.validate().unwrap_err();
        assert_eq!(err.field(), Some(AssumptionField::StayYears));
    }

    #[test]
    fn test_zero_mortgage_term_rejected() {
        let a = Assumptions { mortgage_years: 0, ..Default::default() };
        assert_eq!(a.validate().unwrap_err().field(), Some(AssumptionField::MortgageYears));
    }

    #[test]
    fn test_oversized_mortgage_term_rejected() {
        let a = Assumptions { mortgage_years: 400_000_000, ..Default::default() };
        assert_eq!(a.validate().unwrap_err().field(), Some(AssumptionField::MortgageYears));

        let a = Assumptions { mortgage_years: MAX_MORTGAGE_YEARS, ..Default::default() };
        assert!(a.validate().is_ok());
    }

    #[test]
    fn test_rate_at_minus_hundred_rejected() {
        let a = Assumptions { mortgage_rate_pct: -100.0, ..Default::default() };
        assert_eq!(a.validate().unwrap_err().field(), Some(AssumptionField::MortgageRatePct));

        let a = Assumptions { mortgage_rate_pct: -1.0, ..Default::default() };
        assert!(a.validate().is_ok());
    }

    #[test]
    fn test_non_positive_property_value_rejected() {
        let a = Assumptions { property_value: 0.0, ..Default::default() };
        assert_eq!(a.validate().unwrap_err().field(), Some(AssumptionField::PropertyValue));
    }

    #[test]
    fn test_nan_rejected() {
        let a = Assumptions { rental_yield_pct: f64::NAN, ..Default::default() };
        assert_eq!(a.validate().unwrap_err().field(), Some(AssumptionField::RentalYieldPct));
    }

    #[test]
    fn test_with_field() {
        let base = Assumptions::default();
        let a = base.with_field(AssumptionField::MortgageRatePct, 4.5).unwrap();
        assert_eq!(a.mortgage_rate_pct, 4.5);
        assert_eq!(base.mortgage_rate_pct, 6.0);

        let a = base.with_field(AssumptionField::StayYears, 15.0).unwrap();
        assert_eq!(a.stay_years, 15);
        assert_eq!(a.field_value(AssumptionField::StayYears), 15.0);
    }

    #[test]
    fn test_with_field_rejects_fractional_years() {
        let err = Assumptions::default()
            .with_field(AssumptionField::MortgageYears, 12.5)
            .unwrap_err();
        assert_eq!(err.field(), Some(AssumptionField::MortgageYears));
    }

    #[test]
    fn test_with_field_whole_numbers_follow_is_integral() {
        let base = Assumptions::default();
        for field in AssumptionField::ALL {
            let result = base.with_field(field, 2.5);
            assert_eq!(result.is_err(), field.is_integral(), "{field}");
            if field.is_integral() {
                assert_eq!(base.with_field(field, 3.0).unwrap().field_value(field), 3.0);
            }
        }
    }
}
