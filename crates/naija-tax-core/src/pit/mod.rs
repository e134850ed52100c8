pub mod bands;
pub mod calculator;
pub mod reliefs;
pub mod validation;

pub use bands::{allocate_bands, validate_band_table, BandAllocation, BandBreakdown, TaxBand, PIT_BANDS};
pub use calculator::{calculate_pit, calculate_pit_with_bands, PitInput, PitResult, PIT_DISCLAIMER};
pub use reliefs::{calculate_nhf_deduction, calculate_rent_relief, resolve_nhf_deduction};
pub use validation::validate_pit_inputs;
