//! Request/response layer for the HTTP handler
//!
//! Transport-free so the same code path serves the Lambda binary and tests.

use serde::{Deserialize, Serialize};

use crate::assumptions::{AssumptionField, Assumptions};
use crate::engine::{compare, Comparison, HeadlineFigures, Verdict};
use crate::error::Result;
use crate::ledger::{BuyRow, BuyTotals, RentRow, RentTotals};
use crate::sensitivity::{sweep, SensitivitySweep};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepRequest {
    pub field: AssumptionField,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComparisonRequest {
    /// Missing fields fall back to the calculator defaults
    pub assumptions: Assumptions,
    pub sweep: Option<SweepRequest>,
    /// Include the monthly ledgers in the response
    pub include_ledgers: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResponse {
    pub buy_total: f64,
    pub rent_total: f64,
    pub difference: f64,
    pub verdict: Verdict,
    pub analysis: String,
    pub headline: HeadlineFigures,
    pub buy_totals: BuyTotals,
    pub rent_totals: RentTotals,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buy_ledger: Option<Vec<BuyRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rent_ledger: Option<Vec<RentRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sweep: Option<SensitivitySweep>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ComparisonResponse {
    fn from_comparison(comparison: Comparison, include_ledgers: bool) -> Self {
        Self {
            buy_total: comparison.buy_total(),
            rent_total: comparison.rent_total(),
            difference: comparison.difference(),
            verdict: comparison.verdict(),
            analysis: comparison.analysis(),
            headline: comparison.headline,
            buy_totals: comparison.buy_totals,
            rent_totals: comparison.rent_totals,
            buy_ledger: include_ledgers.then_some(comparison.buy),
            rent_ledger: include_ledgers.then_some(comparison.rent),
            sweep: None,
        }
    }
}

/// Run the baseline comparison and, if asked, a sweep around it
pub fn handle(request: &ComparisonRequest) -> Result<ComparisonResponse> {
    let comparison = compare(&request.assumptions)?;
    let mut response = ComparisonResponse::from_comparison(comparison, request.include_ledgers);

    if let Some(sweep_request) = &request.sweep {
        response.sweep = Some(sweep(
            &request.assumptions,
            sweep_request.field,
            &sweep_request.values,
        )?);
    }

    Ok(response)
}

/// Parse a JSON body and handle it; errors come back as display strings
pub fn handle_json(body: &[u8]) -> std::result::Result<ComparisonResponse, String> {
    let request: ComparisonRequest = if body.iter().all(u8::is_ascii_whitespace) {
        ComparisonRequest::default()
    } else {
        serde_json::from_slice(body).map_err(|e| format!("Invalid JSON payload: {e}"))?
    };
    handle(&request).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_uses_defaults() {
        let response = handle_json(b"").unwrap();
        assert_eq!(response.verdict, Verdict::Buy);
        assert!(response.buy_ledger.is_none());
        assert!(response.sweep.is_none());
    }

    #[test]
    fn test_partial_assumptions_and_sweep() {
        let body = br#"{
            "assumptions": { "property_appreciation_pct": 2, "maintenance_rate_pct": 0.5 },
            "sweep": { "field": "mortgage_rate_pct", "values": [4, 6, 8] },
            "includeLedgers": true
        }"#;
        let response = handle_json(body).unwrap();
        assert_eq!(response.verdict, Verdict::Rent);
        assert_eq!(response.buy_ledger.as_ref().unwrap().len(), 120);
        assert_eq!(response.sweep.as_ref().unwrap().points.len(), 3);
    }

    #[test]
    fn test_invalid_assumption_reports_field() {
        let body = br#"{ "assumptions": { "stay_years": 0 } }"#;
        let err = handle_json(body).unwrap_err();
        assert!(err.contains("stay_years"), "{err}");
    }

    #[test]
    fn test_malformed_json() {
        let err = handle_json(b"{ not json").unwrap_err();
        assert!(err.starts_with("Invalid JSON payload"));
    }

    #[test]
    fn test_unknown_sweep_field_rejected() {
        let body = br#"{ "sweep": { "field": "interest", "values": [1] } }"#;
        assert!(handle_json(body).is_err());
    }
}
