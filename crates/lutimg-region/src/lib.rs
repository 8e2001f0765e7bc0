//! lutimg-region - Region growing and segmentation
//!
//! This crate provides:
//!
//! - **Frontier containers** - the coordinate stack and queue backing
//!   the iterative traversals
//! - **Region growing** - three interchangeable flood-fill variants
//!   (recursive, explicit-stack, queue) sharing one contract
//! - **Segmentation** - labeling every background region of a raster
//!   with its own generated color
//!
//! # Examples
//!
//! ## Growing a single region
//!
//! ```
//! use lutimg_core::Image;
//! use lutimg_region::fill_with_queue;
//!
//! let mut img = Image::new(4, 4).unwrap();
//! let count = fill_with_queue(&mut img, 0, 0, 1).unwrap();
//! assert_eq!(count, 16); // the whole background is one region
//! assert_eq!(img.get_pixel(3, 3), 1);
//! ```
//!
//! ## Segmenting an image
//!
//! ```
//! use lutimg_core::{Image, Rgb};
//! use lutimg_region::{FillStrategy, segment};
//!
//! let mut img = Image::new_chess(150, 120, 30, Rgb::BLACK).unwrap();
//! let regions = segment(&mut img, FillStrategy::default()).unwrap();
//! assert_eq!(regions, 10);
//! ```

pub mod error;
pub mod fill;
pub mod frontier;
pub mod segment;

// Re-export core types
pub use lutimg_core;

pub use error::{RegionError, RegionResult};
pub use fill::{
    FillStrategy, MAX_RECURSION_DEPTH, fill_recursive, fill_with_queue, fill_with_stack,
};
pub use frontier::{Coord, CoordQueue, CoordStack};
pub use segment::segment;
