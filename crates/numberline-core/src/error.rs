// File: crates/numberline-core/src/error.rs
// Summary: Error type for domain validation, drawable-area checks and config parsing.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AxisError {
    #[error("domain bounds must be finite, got [{min}, {max}]")]
    NonFiniteDomain { min: f64, max: f64 },
    #[error("domain min must be strictly less than max, got [{min}, {max}]")]
    EmptyDomain { min: f64, max: f64 },
    #[error("drawable width is not positive ({0} px); retry after layout")]
    NoDrawableWidth(f64),
    #[error("invalid numberline config: {0}")]
    Config(#[from] serde_json::Error),
}
