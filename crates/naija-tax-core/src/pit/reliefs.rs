use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::TaxEngineError;
use crate::types::{Money, Rate};
use crate::TaxEngineResult;

/// Share of annual rent allowed as relief
pub const RENT_RELIEF_RATE: Rate = dec!(0.20);
/// Rent relief never exceeds this amount
pub const RENT_RELIEF_CAP: Money = dec!(500_000);
/// Statutory National Housing Fund contribution as a share of gross income
pub const NHF_RATE: Rate = dec!(0.025);

/// Rent relief: 20% of annual rent, capped at ₦500,000.
pub fn calculate_rent_relief(annual_rent: Money) -> TaxEngineResult<Money> {
    if annual_rent < Decimal::ZERO {
        return Err(TaxEngineError::invalid(
            "annual_rent",
            "Annual rent cannot be negative",
        ));
    }
    Ok((annual_rent * RENT_RELIEF_RATE).min(RENT_RELIEF_CAP))
}

/// Statutory NHF deduction (2.5% of gross income).
pub fn calculate_nhf_deduction(gross_income: Money) -> Money {
    gross_income * NHF_RATE
}

/// The NHF figure that enters the deduction total.
///
/// A declared contribution always wins, including a declared zero; the
/// statutory default applies only when nothing was declared.
pub fn resolve_nhf_deduction(declared: Option<Money>, gross_income: Money) -> Money {
    match declared {
        Some(amount) => amount,
        None => calculate_nhf_deduction(gross_income),
    }
}
