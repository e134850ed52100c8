use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Naira amounts. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.15 = 15%). Never as percentages.
pub type Rate = Decimal;

pub const JURISDICTION: &str = "NG";
pub const CURRENCY: &str = "NGN";

/// Envelope returned by every engine computation.
///
/// `result` is the tax answer; the remaining fields describe how it was
/// reached and carry soft warnings that did not stop the calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub jurisdiction: String,
    pub currency: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Wrap a result in the standard envelope, timing from `started`.
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    started: Instant,
    result: T,
) -> ComputationOutput<T> {
    let assumptions = serde_json::to_value(assumptions).unwrap_or(serde_json::Value::Null);
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions,
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            jurisdiction: JURISDICTION.to_string(),
            currency: CURRENCY.to_string(),
            computation_time_us: u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX),
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
