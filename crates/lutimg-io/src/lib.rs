//! lutimg-io - Raster file codecs
//!
//! Two netpbm formats cover the engine's needs:
//!
//! - **PBM (P4)** - binary, bit-packed, two-color images only
//! - **PPM (P3)** - ASCII RGB triplets, arbitrary indexed images
//!
//! Loaders are defensive: a malformed header or truncated body aborts
//! the whole load with [`IoError::InvalidData`] rather than returning
//! a partially built image. Writers emit the current LUT/pixel state
//! and may leave a partial file behind on failure.
//!
//! # Examples
//!
//! ```
//! use lutimg_core::Image;
//! use lutimg_io::{read_pbm, write_pbm};
//! use std::io::Cursor;
//!
//! let mut img = Image::new(8, 2).unwrap();
//! img.set_pixel(3, 1, 1);
//!
//! let mut buf = Vec::new();
//! write_pbm(&img, &mut buf).unwrap();
//! let back = read_pbm(Cursor::new(buf)).unwrap();
//! assert!(back.equal(&img));
//! ```

pub mod error;
pub mod pbm;
pub mod ppm;
mod scan;

pub use error::{IoError, IoResult};
pub use pbm::{load_pbm, read_pbm, save_pbm, write_pbm};
pub use ppm::{load_ppm, read_ppm, save_ppm, write_ppm};
