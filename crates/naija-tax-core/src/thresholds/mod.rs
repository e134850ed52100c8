pub mod cit;
pub mod vat;

pub use cit::{determine_cit_rate, CitCategory, CitCheckResult};
pub use vat::{check_vat_threshold, VatCheckResult, VatStatus};

use rust_decimal::Decimal;

use crate::error::TaxEngineError;
use crate::types::Money;
use crate::TaxEngineResult;

fn require_turnover(turnover: Money) -> TaxEngineResult<()> {
    if turnover < Decimal::ZERO {
        return Err(TaxEngineError::invalid(
            "turnover",
            format!("Turnover cannot be negative, got {turnover}"),
        ));
    }
    Ok(())
}
