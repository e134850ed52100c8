use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::calculator::PitInput;
use crate::error::TaxEngineError;
use crate::format::format_naira;
use crate::types::Money;
use crate::TaxEngineResult;

/// Gross income above this is flagged as unrealistic. A sanity check on the
/// figure entered, not a statutory limit.
pub const MAX_REALISTIC_GROSS_INCOME: Money = dec!(100_000_000);

/// Collect every problem with a set of PIT inputs as readable messages.
///
/// An empty vector means the inputs are valid. All problems are reported so
/// a form can highlight them together.
pub fn validate_pit_inputs(input: &PitInput) -> Vec<String> {
    let mut errors: Vec<String> = Vec::new();

    match input.annual_gross_income {
        None => errors.push("Annual gross income is required".to_string()),
        Some(gross) if gross < Decimal::ZERO => {
            errors.push("Annual gross income cannot be negative".to_string())
        }
        Some(gross) if gross > MAX_REALISTIC_GROSS_INCOME => errors.push(format!(
            "Annual gross income above {} looks unrealistic; please check the figure",
            format_naira(MAX_REALISTIC_GROSS_INCOME)
        )),
        Some(_) => {}
    }

    for (_, label, value) in optional_figures(input) {
        if matches!(value, Some(v) if v < Decimal::ZERO) {
            errors.push(format!("{label} cannot be negative"));
        }
    }

    errors
}

/// Hard checks applied before any calculation; returns the gross income.
///
/// Missing or negative gross income, or any negative optional figure, is an
/// error. The realism ceiling is not enforced here.
pub(crate) fn require_calculable(input: &PitInput) -> TaxEngineResult<Money> {
    let gross = input.annual_gross_income.ok_or_else(|| {
        TaxEngineError::invalid("annual_gross_income", "Annual gross income is required")
    })?;
    if gross < Decimal::ZERO {
        return Err(TaxEngineError::invalid(
            "annual_gross_income",
            format!("Annual gross income cannot be negative, got {gross}"),
        ));
    }

    for (field, label, value) in optional_figures(input) {
        if let Some(v) = value {
            if v < Decimal::ZERO {
                return Err(TaxEngineError::invalid(
                    field,
                    format!("{label} cannot be negative, got {v}"),
                ));
            }
        }
    }

    Ok(gross)
}

fn optional_figures(input: &PitInput) -> [(&'static str, &'static str, Option<Money>); 6] {
    [
        ("annual_rent", "Annual rent", input.annual_rent),
        (
            "pension_contributions",
            "Pension contributions",
            input.pension_contributions,
        ),
        ("nhf_contributions", "NHF contributions", input.nhf_contributions),
        (
            "nhis_contributions",
            "NHIS contributions",
            input.nhis_contributions,
        ),
        ("life_insurance", "Life insurance premiums", input.life_insurance),
        (
            "housing_loan_interest",
            "Housing loan interest",
            input.housing_loan_interest,
        ),
    ]
}
