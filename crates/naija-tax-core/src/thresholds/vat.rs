use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::require_turnover;
use crate::format::format_grouped;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::TaxEngineResult;

/// Annual turnover at which VAT registration becomes mandatory
pub const VAT_REGISTRATION_THRESHOLD: Money = dec!(100_000_000);
/// Share of the threshold from which a business is "approaching" it
pub const VAT_APPROACHING_RATIO: Rate = dec!(0.80);
/// Standard VAT rate
pub const VAT_RATE: Rate = dec!(0.075);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VatStatus {
    Exempt,
    Approaching,
    Mandatory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VatCheckResult {
    pub turnover: Money,
    pub threshold: Money,
    pub status: VatStatus,
    /// Distance to the threshold, reported only while approaching it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_headroom: Option<Money>,
    pub vat_rate: Rate,
    pub message: String,
}

/// Classify annual turnover against the VAT registration threshold.
///
/// Below 80% of the threshold is exempt, from 80% up to (not including) the
/// threshold is approaching, and the threshold itself is mandatory.
pub fn check_vat_threshold(turnover: Money) -> TaxEngineResult<ComputationOutput<VatCheckResult>> {
    let start = Instant::now();
    require_turnover(turnover)?;

    let approaching_from = VAT_REGISTRATION_THRESHOLD * VAT_APPROACHING_RATIO;

    let (status, remaining_headroom, message) = if turnover >= VAT_REGISTRATION_THRESHOLD {
        (
            VatStatus::Mandatory,
            None,
            "Turnover meets the VAT registration threshold; VAT registration is mandatory"
                .to_string(),
        )
    } else if turnover >= approaching_from {
        let headroom = VAT_REGISTRATION_THRESHOLD - turnover;
        (
            VatStatus::Approaching,
            Some(headroom),
            format!(
                "Approaching the VAT registration threshold: {} remaining before registration becomes mandatory",
                format_grouped(headroom)
            ),
        )
    } else {
        (
            VatStatus::Exempt,
            None,
            "Turnover is below the VAT registration threshold; registration is not required"
                .to_string(),
        )
    };

    let output = VatCheckResult {
        turnover,
        threshold: VAT_REGISTRATION_THRESHOLD,
        status,
        remaining_headroom,
        vat_rate: VAT_RATE,
        message,
    };

    Ok(with_metadata(
        "VAT registration threshold classification",
        &serde_json::json!({
            "turnover": turnover.to_string(),
            "threshold": VAT_REGISTRATION_THRESHOLD.to_string(),
            "approaching_from": approaching_from.to_string(),
        }),
        Vec::new(),
        start,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    fn status(turnover: Money) -> VatStatus {
        check_vat_threshold(turnover).unwrap().result.status
    }

    #[test]
    fn test_vat_zero_turnover_exempt() {
        assert_eq!(status(Decimal::ZERO), VatStatus::Exempt);
    }

    #[test]
    fn test_vat_just_below_approaching() {
        let r = check_vat_threshold(dec!(79_999_999)).unwrap().result;
        assert_eq!(r.status, VatStatus::Exempt);
        assert_eq!(r.remaining_headroom, None);
    }

    #[test]
    fn test_vat_approaching_reports_headroom() {
        let r = check_vat_threshold(dec!(80_000_000)).unwrap().result;
        assert_eq!(r.status, VatStatus::Approaching);
        assert_eq!(r.remaining_headroom, Some(dec!(20_000_000)));
        assert!(r.message.contains("20,000,000 remaining"));
    }

    #[test]
    fn test_vat_fraction_below_threshold_still_approaching() {
        let r = check_vat_threshold(dec!(99_999_999.50)).unwrap().result;
        assert_eq!(r.status, VatStatus::Approaching);
        assert_eq!(r.remaining_headroom, Some(dec!(0.50)));
        assert!(r.message.contains("0.5 remaining"));
    }

    #[test]
    fn test_vat_threshold_is_mandatory() {
        assert_eq!(status(dec!(100_000_000)), VatStatus::Mandatory);
        assert_eq!(status(dec!(750_000_000)), VatStatus::Mandatory);
    }

    #[test]
    fn test_vat_negative_turnover_rejected() {
        assert!(check_vat_threshold(dec!(-1)).is_err());
    }

    #[test]
    fn test_vat_status_serialises_lowercase() {
        let json = serde_json::to_string(&VatStatus::Approaching).unwrap();
        assert_eq!(json, "\"approaching\"");
    }
}
