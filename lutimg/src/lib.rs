//! lutimg - a color-indexed raster engine
//!
//! Every pixel stores a small integer label; a bounded look-up table
//! maps each label to an RGB triplet. On top of that representation
//! the workspace provides region growing (three flood-fill variants),
//! whole-image segmentation, structural comparison by decoded color,
//! orthogonal rotation, and PBM/PPM codecs.
//!
//! This crate is a facade re-exporting the member crates:
//!
//! - [`lutimg_core`] - `Image`, `Lut`, `Rgb`, comparison, generators
//! - [`lutimg_region`] - fill strategies, frontier containers,
//!   segmentation
//! - [`lutimg_transform`] - 90/180 degree clockwise rotation
//! - [`lutimg_io`] - PBM (P4) and PPM (P3) codecs
//!
//! # Examples
//!
//! ```
//! use lutimg::{FillStrategy, Image, Rgb, segment};
//!
//! let mut img = Image::new_chess(150, 120, 30, Rgb::BLACK).unwrap();
//! let regions = segment(&mut img, FillStrategy::Queue).unwrap();
//! assert_eq!(regions, 10);
//! ```

pub use lutimg_core::{
    BACKGROUND, ColorSequence, Error, Image, LUT_CAPACITY, Label, Lut, Result, Rgb,
};
pub use lutimg_io::{
    IoError, IoResult, load_pbm, load_ppm, read_pbm, read_ppm, save_pbm, save_ppm, write_pbm,
    write_ppm,
};
pub use lutimg_region::{
    Coord, CoordQueue, CoordStack, FillStrategy, MAX_RECURSION_DEPTH, RegionError, RegionResult,
    fill_recursive, fill_with_queue, fill_with_stack, segment,
};
pub use lutimg_transform::{TransformError, TransformResult, rotate_90_cw, rotate_180_cw};
