//! Error types for lutimg-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Out-of-bounds pixel access is deliberately *not* represented here:
//! it is a programmer error checked with `debug_assert!`, not a
//! recoverable condition.

use thiserror::Error;

/// lutimg core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The look-up table has reached its fixed capacity
    #[error("LUT full: capacity {capacity} exhausted")]
    LutFull { capacity: usize },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for lutimg core operations
pub type Result<T> = std::result::Result<T, Error>;
