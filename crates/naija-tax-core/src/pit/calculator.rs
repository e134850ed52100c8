use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::bands::{allocate_bands, validate_band_table, BandBreakdown, TaxBand, PIT_BANDS};
use super::reliefs::{calculate_rent_relief, resolve_nhf_deduction};
use super::validation::{require_calculable, MAX_REALISTIC_GROSS_INCOME};
use crate::error::TaxEngineError;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::TaxEngineResult;

pub const PIT_DISCLAIMER: &str = "This is an estimate for educational purposes only and \
     is not an official tax assessment. Consult a qualified tax professional or the \
     relevant tax authority for your actual liability.";

/// Declared annual figures for one personal income tax calculation.
///
/// `None` means "not provided". Every figure except gross income then
/// counts as zero, apart from NHF which falls back to the statutory 2.5%.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitInput {
    /// Annual gross income (required)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annual_gross_income: Option<Money>,
    /// Annual rent paid on the taxpayer's residence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annual_rent: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pension_contributions: Option<Money>,
    /// Declared National Housing Fund contributions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nhf_contributions: Option<Money>,
    /// National Health Insurance Scheme contributions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nhis_contributions: Option<Money>,
    /// Life insurance premiums paid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub life_insurance: Option<Money>,
    /// Interest paid on a loan for an owner-occupied residence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub housing_loan_interest: Option<Money>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitResult {
    pub gross_income: Money,
    pub rent_relief: Money,
    pub pension_contributions: Money,
    pub nhf_deduction: Money,
    pub nhis_contributions: Money,
    pub life_insurance: Money,
    pub housing_loan_interest: Money,
    pub total_deductions: Money,
    /// Gross income less all deductions, floored at zero
    pub chargeable_income: Money,
    pub estimated_tax: Money,
    /// Chargeable income does not exceed the tax-free band
    pub is_exempt: bool,
    /// Estimated tax as a percentage of gross income (12.5 = 12.5%)
    pub effective_rate: Decimal,
    /// Rate of the highest band reached
    pub marginal_rate: Rate,
    pub monthly_tax: Money,
    pub net_annual_income: Money,
    pub band_breakdown: Vec<BandBreakdown>,
    pub disclaimer: String,
}

/// Estimate personal income tax on the Nigeria Tax Act 2025 schedule.
pub fn calculate_pit(input: &PitInput) -> TaxEngineResult<ComputationOutput<PitResult>> {
    run_pit(input, &PIT_BANDS)
}

/// Estimate personal income tax on a caller-supplied band schedule.
///
/// The schedule is checked with [`validate_band_table`] before use.
pub fn calculate_pit_with_bands(
    input: &PitInput,
    bands: &[TaxBand],
) -> TaxEngineResult<ComputationOutput<PitResult>> {
    validate_band_table(bands)?;
    run_pit(input, bands)
}

fn run_pit(input: &PitInput, bands: &[TaxBand]) -> TaxEngineResult<ComputationOutput<PitResult>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let gross_income = require_calculable(input)?;

    if gross_income > MAX_REALISTIC_GROSS_INCOME {
        warnings.push(format!(
            "Gross income of {gross_income} exceeds the {MAX_REALISTIC_GROSS_INCOME} \
             sanity ceiling; verify the figure"
        ));
    }

    // --- Reliefs and deductions ---
    let rent_relief = calculate_rent_relief(input.annual_rent.unwrap_or_default())?;
    let pension_contributions = input.pension_contributions.unwrap_or_default();
    let nhf_deduction = resolve_nhf_deduction(input.nhf_contributions, gross_income);
    let nhis_contributions = input.nhis_contributions.unwrap_or_default();
    let life_insurance = input.life_insurance.unwrap_or_default();
    let housing_loan_interest = input.housing_loan_interest.unwrap_or_default();

    let total_deductions = [
        rent_relief,
        pension_contributions,
        nhf_deduction,
        nhis_contributions,
        life_insurance,
        housing_loan_interest,
    ]
    .into_iter()
    .try_fold(Decimal::ZERO, |acc, d| acc.checked_add(d))
    .ok_or_else(|| {
        TaxEngineError::invalid("total_deductions", "sum of deductions exceeds the supported range")
    })?;

    if total_deductions > gross_income {
        warnings.push(format!(
            "Total deductions ({total_deductions}) exceed gross income ({gross_income}); \
             chargeable income floored at zero"
        ));
    }

    let chargeable_income = (gross_income - total_deductions).max(Decimal::ZERO);
    log::debug!(
        "PIT: gross {gross_income}, deductions {total_deductions}, chargeable {chargeable_income}"
    );

    // --- Progressive bands ---
    let allocation = allocate_bands(chargeable_income, bands);
    let estimated_tax = allocation.total_tax;

    // An unbounded first band is tax-free for every income
    let is_exempt = bands
        .first()
        .map_or(true, |b| b.upper_limit.map_or(true, |u| chargeable_income <= u));

    let effective_rate = if gross_income.is_zero() {
        Decimal::ZERO
    } else {
        estimated_tax / gross_income * dec!(100)
    };

    let monthly_tax = (estimated_tax / dec!(12))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    let output = PitResult {
        gross_income,
        rent_relief,
        pension_contributions,
        nhf_deduction,
        nhis_contributions,
        life_insurance,
        housing_loan_interest,
        total_deductions,
        chargeable_income,
        estimated_tax,
        is_exempt,
        effective_rate,
        marginal_rate: allocation.marginal_rate(),
        monthly_tax,
        net_annual_income: gross_income - estimated_tax,
        band_breakdown: allocation.breakdown,
        disclaimer: PIT_DISCLAIMER.to_string(),
    };

    let nhf_source = if input.nhf_contributions.is_some() {
        "declared"
    } else {
        "statutory_2.5pct"
    };

    Ok(with_metadata(
        "Progressive PIT: reliefs and deductions, chargeable income, marginal band allocation",
        &serde_json::json!({
            "input": input,
            "bands": bands,
            "nhf_source": nhf_source,
        }),
        warnings,
        start,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn gross(amount: Money) -> PitInput {
        PitInput {
            annual_gross_income: Some(amount),
            ..PitInput::default()
        }
    }

    #[test]
    fn test_low_income_fully_exempt() {
        let out = calculate_pit(&gross(dec!(500_000))).unwrap();
        let r = out.result;
        assert_eq!(r.nhf_deduction, dec!(12_500));
        assert_eq!(r.chargeable_income, dec!(487_500));
        assert_eq!(r.estimated_tax, Decimal::ZERO);
        assert!(r.is_exempt);
        assert_eq!(r.band_breakdown.len(), 1);
        assert_eq!(r.effective_rate, Decimal::ZERO);
    }

    #[test]
    fn test_rent_and_nhf_reference_case() {
        let input = PitInput {
            annual_rent: Some(dec!(1_000_000)),
            ..gross(dec!(5_000_000))
        };
        let r = calculate_pit(&input).unwrap().result;
        assert_eq!(r.rent_relief, dec!(200_000));
        assert_eq!(r.nhf_deduction, dec!(125_000));
        assert_eq!(r.total_deductions, dec!(325_000));
        assert_eq!(r.chargeable_income, dec!(4_675_000));
        assert_eq!(r.estimated_tax, dec!(631_500));
        assert_eq!(r.effective_rate, dec!(12.63));
        assert_eq!(r.marginal_rate, dec!(0.18));
        assert_eq!(r.monthly_tax, dec!(52_625));
        assert_eq!(r.net_annual_income, dec!(4_368_500));
        assert!(!r.is_exempt);

        let taxes: Vec<Money> = r.band_breakdown.iter().map(|b| b.tax_amount_in_band).collect();
        assert_eq!(taxes, vec![dec!(0), dec!(330_000), dec!(301_500)]);
    }

    #[test]
    fn test_zero_gross_income() {
        let r = calculate_pit(&gross(Decimal::ZERO)).unwrap().result;
        assert_eq!(r.chargeable_income, Decimal::ZERO);
        assert!(r.band_breakdown.is_empty());
        assert!(r.is_exempt);
        assert_eq!(r.effective_rate, Decimal::ZERO);
        assert_eq!(r.marginal_rate, Decimal::ZERO);
    }

    #[test]
    fn test_missing_gross_income_is_an_error() {
        let err = calculate_pit(&PitInput::default()).unwrap_err();
        match err {
            TaxEngineError::InvalidInput { field, .. } => assert_eq!(field, "annual_gross_income"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_negative_gross_income_is_an_error() {
        assert!(calculate_pit(&gross(dec!(-1))).is_err());
    }

    #[test]
    fn test_negative_rent_is_an_error() {
        let input = PitInput {
            annual_rent: Some(dec!(-100)),
            ..gross(dec!(1_000_000))
        };
        assert!(calculate_pit(&input).is_err());
    }

    #[test]
    fn test_all_deductions_summed() {
        let input = PitInput {
            annual_gross_income: Some(dec!(10_000_000)),
            annual_rent: Some(dec!(3_000_000)),
            pension_contributions: Some(dec!(800_000)),
            nhf_contributions: Some(dec!(100_000)),
            nhis_contributions: Some(dec!(50_000)),
            life_insurance: Some(dec!(120_000)),
            housing_loan_interest: Some(dec!(430_000)),
        };
        let r = calculate_pit(&input).unwrap().result;
        assert_eq!(r.rent_relief, dec!(500_000));
        assert_eq!(r.total_deductions, dec!(2_000_000));
        assert_eq!(r.chargeable_income, dec!(8_000_000));
        // 2,200,000 * 15% + 5,000,000 * 18%
        assert_eq!(r.estimated_tax, dec!(1_230_000));
    }

    #[test]
    fn test_declared_zero_nhf_skips_default() {
        let input = PitInput {
            nhf_contributions: Some(Decimal::ZERO),
            ..gross(dec!(4_000_000))
        };
        let r = calculate_pit(&input).unwrap().result;
        assert_eq!(r.nhf_deduction, Decimal::ZERO);
        assert_eq!(r.chargeable_income, dec!(4_000_000));
    }

    #[test]
    fn test_deductions_push_below_exemption() {
        // Gross above 800k, but deductions bring chargeable income under it
        let input = PitInput {
            pension_contributions: Some(dec!(150_000)),
            ..gross(dec!(900_000))
        };
        let r = calculate_pit(&input).unwrap().result;
        assert_eq!(r.chargeable_income, dec!(727_500));
        assert!(r.is_exempt);
        assert_eq!(r.estimated_tax, Decimal::ZERO);
    }

    #[test]
    fn test_excess_deductions_floor_at_zero_with_warning() {
        let input = PitInput {
            pension_contributions: Some(dec!(2_000_000)),
            ..gross(dec!(1_000_000))
        };
        let out = calculate_pit(&input).unwrap();
        assert_eq!(out.result.chargeable_income, Decimal::ZERO);
        assert!(out.result.is_exempt);
        assert!(out.warnings.iter().any(|w| w.contains("floored at zero")));
    }

    #[test]
    fn test_unrealistic_income_warns_but_computes() {
        let out = calculate_pit(&gross(dec!(200_000_000))).unwrap();
        assert!(out.result.estimated_tax > Decimal::ZERO);
        assert!(out.warnings.iter().any(|w| w.contains("sanity ceiling")));
    }

    #[test]
    fn test_disclaimer_always_present() {
        let r = calculate_pit(&gross(dec!(1))).unwrap().result;
        assert_eq!(r.disclaimer, PIT_DISCLAIMER);
    }

    #[test]
    fn test_custom_bands_used_for_exemption_threshold() {
        let bands = vec![
            TaxBand::new(Some(dec!(1_000)), dec!(0), "free"),
            TaxBand::new(None, dec!(0.10), "flat"),
        ];
        let input = PitInput {
            nhf_contributions: Some(Decimal::ZERO),
            ..gross(dec!(3_000))
        };
        let r = calculate_pit_with_bands(&input, &bands).unwrap().result;
        assert_eq!(r.estimated_tax, dec!(200));
        assert!(!r.is_exempt);
    }

    #[test]
    fn test_single_unbounded_free_band_is_exempt() {
        let bands = vec![TaxBand::new(None, dec!(0), "all free")];
        let r = calculate_pit_with_bands(&gross(dec!(5_000_000)), &bands)
            .unwrap()
            .result;
        assert_eq!(r.estimated_tax, Decimal::ZERO);
        assert!(r.is_exempt);
    }

    #[test]
    fn test_deduction_sum_overflow_is_an_error() {
        let input = PitInput {
            pension_contributions: Some(dec!(50_000_000_000_000_000_000_000_000_000)),
            life_insurance: Some(dec!(50_000_000_000_000_000_000_000_000_000)),
            ..gross(dec!(1_000_000))
        };
        assert!(crate::pit::validate_pit_inputs(&input).is_empty());
        match calculate_pit(&input) {
            Err(TaxEngineError::InvalidInput { field, .. }) => assert_eq!(field, "total_deductions"),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(out) => panic!("overflowing deductions produced a result: {:?}", out.result),
        }
    }

    #[test]
    fn test_invalid_custom_bands_rejected() {
        let bands = vec![TaxBand::new(Some(dec!(1_000)), dec!(0), "only")];
        assert!(calculate_pit_with_bands(&gross(dec!(3_000)), &bands).is_err());
    }

    #[test]
    fn test_input_deserialises_with_missing_fields() {
        let input: PitInput =
            serde_json::from_str(r#"{"annual_gross_income": "5000000", "annual_rent": 1000000}"#)
                .unwrap();
        assert_eq!(input.annual_gross_income, Some(dec!(5_000_000)));
        assert_eq!(input.annual_rent, Some(dec!(1_000_000)));
        assert_eq!(input.nhf_contributions, None);
    }
}
