//! I/O error types
//!
//! Provides a unified error type for the PBM/PPM codecs. Loaders are
//! defensive: any malformed header or short body fails the whole
//! operation, and no partially built image is ever returned.

use thiserror::Error;

/// Error type for raster file I/O.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, write failure, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file data is structurally invalid
    #[error("invalid image data: {0}")]
    InvalidData(String),

    /// PBM output requires a two-color image
    #[error("PBM requires a two-color image, got {colors} colors")]
    NotBilevel { colors: u16 },

    /// An error from the core library (e.g. LUT exhaustion)
    #[error("core error: {0}")]
    Core(#[from] lutimg_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
