pub mod error;
pub mod format;
pub mod types;

#[cfg(feature = "pit")]
pub mod pit;

#[cfg(feature = "thresholds")]
pub mod thresholds;

pub use error::TaxEngineError;
pub use types::*;

/// Standard result type for all tax engine operations
pub type TaxEngineResult<T> = Result<T, TaxEngineError>;
