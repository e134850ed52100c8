pub mod format;
pub mod pit;
pub mod thresholds;
