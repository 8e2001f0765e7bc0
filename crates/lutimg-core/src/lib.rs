//! lutimg-core - Core data structures for the lutimg raster engine
//!
//! A color-indexed raster stores one small integer label per pixel; a
//! bounded look-up table ([`Lut`]) maps each label to an RGB triplet.
//! This crate owns that data model:
//!
//! - [`Rgb`] / [`ColorSequence`] - colors and the deterministic
//!   generated-color sequence
//! - [`Lut`] - the fixed-capacity, append-only color table
//! - [`Image`] - the raster itself: lifecycle, synthetic generators,
//!   pixel access, comparison, console dump
//!
//! Region growing, segmentation, geometric transforms, and file codecs
//! live in the sibling crates `lutimg-region`, `lutimg-transform`, and
//! `lutimg-io`.
//!
//! # Examples
//!
//! ```
//! use lutimg_core::{Image, Rgb};
//!
//! let img = Image::new_chess(6, 6, 3, Rgb::new(0, 0, 255)).unwrap();
//! assert_eq!(img.colors(), 3);
//! assert_eq!(img.decode_pixel(0, 0), Rgb::new(0, 0, 255));
//! ```

pub mod color;
pub mod error;
pub mod image;
pub mod lut;

pub use color::{ColorSequence, Rgb};
pub use error::{Error, Result};
pub use image::Image;
pub use lut::{BACKGROUND, LUT_CAPACITY, Label, Lut};
