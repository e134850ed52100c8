use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;
use std::str::FromStr;

use naija_tax_core::{format, pit, thresholds};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Amounts cross the boundary as decimal strings to avoid f64 rounding.
fn parse_amount(field: &str, raw: &str) -> NapiResult<Decimal> {
    Decimal::from_str(raw.trim())
        .map_err(|e| to_napi_error(format!("{field}: '{raw}' is not a decimal amount ({e})")))
}

// ---------------------------------------------------------------------------
// Personal income tax
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_pit(input_json: String) -> NapiResult<String> {
    let input: pit::PitInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = pit::calculate_pit(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn calculate_pit_with_bands(input_json: String, bands_json: String) -> NapiResult<String> {
    let input: pit::PitInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let bands: Vec<pit::TaxBand> = serde_json::from_str(&bands_json).map_err(to_napi_error)?;
    let output = pit::calculate_pit_with_bands(&input, &bands).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// Returns a JSON array of messages; empty when the inputs are valid.
#[napi]
pub fn validate_pit_inputs(input_json: String) -> NapiResult<String> {
    let input: pit::PitInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    serde_json::to_string(&pit::validate_pit_inputs(&input)).map_err(to_napi_error)
}

#[napi]
pub fn pit_bands() -> NapiResult<String> {
    serde_json::to_string(&pit::PIT_BANDS).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Turnover thresholds
// ---------------------------------------------------------------------------

#[napi]
pub fn check_vat_threshold(turnover: String) -> NapiResult<String> {
    let turnover = parse_amount("turnover", &turnover)?;
    let output = thresholds::check_vat_threshold(turnover).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn determine_cit_rate(turnover: String) -> NapiResult<String> {
    let turnover = parse_amount("turnover", &turnover)?;
    let output = thresholds::determine_cit_rate(turnover).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

#[napi]
pub fn format_naira(amount: String) -> NapiResult<String> {
    let amount = parse_amount("amount", &amount)?;
    Ok(format::format_naira(amount))
}
