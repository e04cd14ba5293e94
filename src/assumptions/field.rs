//! Name-addressed access to individual assumptions
//!
//! Used by CLI overrides and by the sensitivity sweep, which vary one field at
//! a time while holding the rest fixed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BuyRentError;

/// One scalar input of [`super::Assumptions`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssumptionField {
    PropertyValue,
    StayYears,
    DownPaymentPct,
    MortgageRatePct,
    MortgageYears,
    PropertyAppreciationPct,
    LegalFeePct,
    MaintenanceRatePct,
    RentalYieldPct,
    InvestmentReturnPct,
    RentIncreasePct,
    RentDepositMonths,
}

impl AssumptionField {
    pub const ALL: [AssumptionField; 12] = [
        AssumptionField::PropertyValue,
        AssumptionField::StayYears,
        AssumptionField::DownPaymentPct,
        AssumptionField::MortgageRatePct,
        AssumptionField::MortgageYears,
        AssumptionField::PropertyAppreciationPct,
        AssumptionField::LegalFeePct,
        AssumptionField::MaintenanceRatePct,
        AssumptionField::RentalYieldPct,
        AssumptionField::InvestmentReturnPct,
        AssumptionField::RentIncreasePct,
        AssumptionField::RentDepositMonths,
    ];

    /// snake_case name, matching the serde representation
    pub fn name(self) -> &'static str {
        match self {
            AssumptionField::PropertyValue => "property_value",
            AssumptionField::StayYears => "stay_years",
            AssumptionField::DownPaymentPct => "down_payment_pct",
            AssumptionField::MortgageRatePct => "mortgage_rate_pct",
            AssumptionField::MortgageYears => "mortgage_years",
            AssumptionField::PropertyAppreciationPct => "property_appreciation_pct",
            AssumptionField::LegalFeePct => "legal_fee_pct",
            AssumptionField::MaintenanceRatePct => "maintenance_rate_pct",
            AssumptionField::RentalYieldPct => "rental_yield_pct",
            AssumptionField::InvestmentReturnPct => "investment_return_pct",
            AssumptionField::RentIncreasePct => "rent_increase_pct",
            AssumptionField::RentDepositMonths => "rent_deposit_months",
        }
    }

    /// Whether the field only accepts whole numbers
    pub fn is_integral(self) -> bool {
        matches!(
            self,
            AssumptionField::StayYears
                | AssumptionField::MortgageYears
                | AssumptionField::RentDepositMonths
        )
    }
}

impl fmt::Display for AssumptionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AssumptionField {
    type Err = BuyRentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_").to_ascii_lowercase();
        AssumptionField::ALL
            .iter()
            .copied()
            .find(|field| field.name() == wanted)
            .ok_or_else(|| BuyRentError::UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for field in AssumptionField::ALL {
            assert_eq!(field.name().parse::<AssumptionField>().unwrap(), field);
        }
    }

    #[test]
    fn test_parse_accepts_kebab_case() {
        assert_eq!(
            "mortgage-rate-pct".parse::<AssumptionField>().unwrap(),
            AssumptionField::MortgageRatePct
        );
    }

    #[test]
    fn test_unknown_field() {
        let err = "interest".parse::<AssumptionField>().unwrap_err();
        assert_eq!(err, BuyRentError::UnknownField("interest".to_string()));
    }

    #[test]
    fn test_serde_name_matches_display() {
        let json = serde_json::to_string(&AssumptionField::RentDepositMonths).unwrap();
        assert_eq!(json, "\"rent_deposit_months\"");
    }
}
