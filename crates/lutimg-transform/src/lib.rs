//! lutimg-transform - Geometric transformations
//!
//! Orthogonal (90/180 degree clockwise) rotations of indexed rasters.
//! Transforms are pure at the raster level: they return a fresh image
//! and never touch the source's pixel matrix or LUT.
//!
//! # Examples
//!
//! ```
//! use lutimg_core::Image;
//! use lutimg_transform::rotate_90_cw;
//!
//! let img = Image::new(4, 3).unwrap();
//! let rot = rotate_90_cw(&img).unwrap();
//! assert_eq!((rot.width(), rot.height()), (3, 4));
//! ```

pub mod error;
pub mod rotate;

pub use error::{TransformError, TransformResult};
pub use rotate::{rotate_90_cw, rotate_180_cw};
