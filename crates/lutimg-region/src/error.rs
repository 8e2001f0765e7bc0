//! Error types for lutimg-region

use thiserror::Error;

/// Errors that can occur during region growing and segmentation
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] lutimg_core::Error),

    /// Invalid seed position
    #[error("invalid seed position: ({u}, {v})")]
    InvalidSeed { u: u32, v: u32 },

    /// Fill label is not a populated LUT index
    #[error("invalid fill label {label}: LUT holds {colors} colors")]
    InvalidLabel { label: u16, colors: u16 },

    /// The recursive variant exceeded its depth ceiling
    #[error("recursion depth limit {limit} exceeded")]
    RecursionLimit { limit: u32 },
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
