use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::error::TaxEngineError;
use crate::types::{Money, Rate};
use crate::TaxEngineResult;

/// A slice of chargeable income taxed at a single marginal rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBand {
    /// Cumulative income ceiling of the band; `None` for the final, unbounded band
    pub upper_limit: Option<Money>,
    /// Marginal rate applied to income falling inside the band
    pub rate: Rate,
    pub label: Cow<'static, str>,
}

impl TaxBand {
    pub const fn new(upper_limit: Option<Money>, rate: Rate, label: &'static str) -> Self {
        TaxBand {
            upper_limit,
            rate,
            label: Cow::Borrowed(label),
        }
    }
}

/// Income up to this amount sits in the zero-rate band.
pub const TAX_FREE_THRESHOLD: Money = dec!(800_000);

/// Nigeria Tax Act 2025 personal income tax schedule.
pub const PIT_BANDS: [TaxBand; 6] = [
    TaxBand::new(Some(TAX_FREE_THRESHOLD), dec!(0), "First ₦800,000 (0%)"),
    TaxBand::new(Some(dec!(3_000_000)), dec!(0.15), "Next ₦2,200,000 (15%)"),
    TaxBand::new(Some(dec!(12_000_000)), dec!(0.18), "Next ₦9,000,000 (18%)"),
    TaxBand::new(Some(dec!(25_000_000)), dec!(0.21), "Next ₦13,000,000 (21%)"),
    TaxBand::new(Some(dec!(50_000_000)), dec!(0.23), "Next ₦25,000,000 (23%)"),
    TaxBand::new(None, dec!(0.25), "Above ₦50,000,000 (25%)"),
];

/// Income and tax attributed to one band during a single calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandBreakdown {
    pub band_label: String,
    pub rate: Rate,
    pub taxable_amount_in_band: Money,
    pub tax_amount_in_band: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandAllocation {
    pub total_tax: Money,
    /// One entry per band that received income, ascending band order
    pub breakdown: Vec<BandBreakdown>,
}

impl BandAllocation {
    /// Rate of the highest band that received income, zero when nothing was taxable.
    pub fn marginal_rate(&self) -> Rate {
        self.breakdown
            .last()
            .map(|b| b.rate)
            .unwrap_or(Decimal::ZERO)
    }
}

/// Partition `chargeable_income` across `bands` and tax each slice at its
/// marginal rate.
///
/// Bands are walked in order; iteration stops once the income is exhausted,
/// so untouched bands never appear in the breakdown. Income exactly at a
/// ceiling falls entirely in the lower band.
pub fn allocate_bands(chargeable_income: Money, bands: &[TaxBand]) -> BandAllocation {
    let mut remaining = chargeable_income;
    let mut previous_limit = Decimal::ZERO;
    let mut total_tax = Decimal::ZERO;
    let mut breakdown: Vec<BandBreakdown> = Vec::new();

    for band in bands {
        if remaining <= Decimal::ZERO {
            break;
        }

        let taxable_in_band = match band.upper_limit {
            Some(upper) => remaining.min(upper - previous_limit),
            None => remaining,
        };
        let tax_in_band = taxable_in_band * band.rate;

        if taxable_in_band > Decimal::ZERO {
            log::debug!(
                "Band '{}': taxable {} at {} = {}",
                band.label,
                taxable_in_band,
                band.rate,
                tax_in_band
            );
            breakdown.push(BandBreakdown {
                band_label: band.label.to_string(),
                rate: band.rate,
                taxable_amount_in_band: taxable_in_band,
                tax_amount_in_band: tax_in_band,
            });
            total_tax += tax_in_band;
            remaining -= taxable_in_band;
        }

        if let Some(upper) = band.upper_limit {
            previous_limit = upper;
        }
    }

    BandAllocation {
        total_tax,
        breakdown,
    }
}

/// Check that a band table partitions [0, ∞) contiguously.
///
/// Ceilings must strictly increase, only the last band may be unbounded (and
/// it must be), every rate lies in [0, 1] and the first band is tax-free.
pub fn validate_band_table(bands: &[TaxBand]) -> TaxEngineResult<()> {
    let Some(first) = bands.first() else {
        return Err(TaxEngineError::invalid(
            "bands",
            "Band table must contain at least one band",
        ));
    };
    if !first.rate.is_zero() {
        return Err(TaxEngineError::invalid(
            "bands[0].rate",
            format!("First band must be tax-free, got rate {}", first.rate),
        ));
    }

    let mut previous_limit = Decimal::ZERO;
    let last_index = bands.len() - 1;
    for (i, band) in bands.iter().enumerate() {
        if band.rate < Decimal::ZERO || band.rate > Decimal::ONE {
            return Err(TaxEngineError::invalid(
                &format!("bands[{i}].rate"),
                format!("Rate must be between 0 and 1, got {}", band.rate),
            ));
        }
        match band.upper_limit {
            Some(upper) if i == last_index => {
                return Err(TaxEngineError::invalid(
                    &format!("bands[{i}].upper_limit"),
                    format!("Final band must be unbounded, got ceiling {upper}"),
                ));
            }
            Some(upper) => {
                if upper <= previous_limit {
                    return Err(TaxEngineError::invalid(
                        &format!("bands[{i}].upper_limit"),
                        format!(
                            "Ceilings must strictly increase: {upper} does not exceed {previous_limit}"
                        ),
                    ));
                }
                previous_limit = upper;
            }
            None if i != last_index => {
                return Err(TaxEngineError::invalid(
                    &format!("bands[{i}].upper_limit"),
                    "Only the final band may be unbounded",
                ));
            }
            None => {}
        }
    }
    Ok(())
}
