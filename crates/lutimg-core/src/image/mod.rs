//! Image - the indexed raster container
//!
//! An `Image` stores one small integer label per pixel plus a bounded
//! look-up table mapping labels to RGB; full RGB values are never stored
//! per pixel. Labels are kept in a single contiguous row-major buffer
//! rather than an array of row pointers.
//!
//! # Coordinates
//!
//! `u` is the column index, `v` the row index. [`Image::is_valid_pixel`]
//! is the predicate every traversal must consult before indexing; the
//! pixel accessors themselves treat out-of-bounds coordinates as a
//! programmer error, not a recoverable condition.
//!
//! # Ownership
//!
//! An `Image` exclusively owns its label buffer and its LUT. `Clone` is
//! a deep copy; no pixel or LUT slot is ever shared between two images.

mod compare;

use crate::color::{ColorSequence, Rgb};
use crate::error::{Error, Result};
use crate::lut::{LUT_CAPACITY, Label, Lut};
use std::io::Write;

/// Indexed raster image
///
/// # Examples
///
/// ```
/// use lutimg_core::{Image, Rgb};
///
/// let mut img = Image::new(4, 4).unwrap();
/// assert_eq!(img.colors(), 2); // white + black
/// let red = img.alloc_color(Rgb::new(255, 0, 0)).unwrap();
/// img.set_pixel(0, 0, red);
/// assert_eq!(img.decode_pixel(0, 0), Rgb::new(255, 0, 0));
/// ```
#[derive(Debug, Clone)]
pub struct Image {
    width: u32,
    height: u32,
    /// Row-major, `width * height` entries, every entry `< lut.len()`.
    labels: Vec<Label>,
    lut: Lut,
}

impl Image {
    /// Create a new image with every pixel set to the white background.
    ///
    /// The LUT is seeded with white at label 0 and black at label 1.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let len = width as usize * height as usize;
        Ok(Self {
            width,
            height,
            labels: vec![0; len],
            lut: Lut::new(),
        })
    }

    /// Create an image with a chess pattern of `color` squares on the
    /// white background, square edge `edge`.
    ///
    /// The square containing pixel (0, 0) carries `color`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for zero dimensions and
    /// [`Error::InvalidParameter`] for a zero edge.
    pub fn new_chess(width: u32, height: u32, edge: u32, color: Rgb) -> Result<Self> {
        if edge == 0 {
            return Err(Error::InvalidParameter("chess edge must be > 0".into()));
        }
        let mut img = Self::new(width, height)?;
        let label = img.lut.alloc(color)?;
        for v in 0..height {
            let tile_v = v / edge;
            for u in 0..width {
                let tile_u = u / edge;
                if (tile_u + tile_v) % 2 == 0 {
                    img.labels[(v * width + u) as usize] = label;
                }
            }
        }
        Ok(img)
    }

    /// Create an image tiled with the full generated palette.
    ///
    /// The LUT is filled to capacity with the deterministic color
    /// sequence; tiles of edge `edge` cycle through all labels in
    /// row-major tile order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for zero dimensions and
    /// [`Error::InvalidParameter`] for a zero edge.
    pub fn new_palette(width: u32, height: u32, edge: u32) -> Result<Self> {
        if edge == 0 {
            return Err(Error::InvalidParameter("palette edge must be > 0".into()));
        }
        let mut img = Self::new(width, height)?;
        let mut seq = ColorSequence::new();
        while img.lut.len() < LUT_CAPACITY {
            img.lut.alloc(seq.next_color())?;
        }
        let wtiles = width / edge;
        for v in 0..height {
            let tile_v = v / edge;
            for u in 0..width {
                let tile_u = u / edge;
                let label = ((tile_v * wtiles + tile_u) as usize % LUT_CAPACITY) as Label;
                img.labels[(v * width + u) as usize] = label;
            }
        }
        Ok(img)
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of populated LUT entries (always at least 2).
    #[inline]
    pub fn colors(&self) -> u16 {
        self.lut.len() as u16
    }

    /// The image's look-up table.
    #[inline]
    pub fn lut(&self) -> &Lut {
        &self.lut
    }

    /// Check whether coordinates (u, v) fall inside the image.
    ///
    /// Pure and total: any integer pair is a valid input. `u` is the
    /// column index, `v` the row index.
    #[inline]
    pub fn is_valid_pixel(&self, u: i64, v: i64) -> bool {
        0 <= u && u < i64::from(self.width) && 0 <= v && v < i64::from(self.height)
    }

    #[inline]
    fn index(&self, u: u32, v: u32) -> usize {
        v as usize * self.width as usize + u as usize
    }

    /// Get the label stored at (u, v).
    ///
    /// Out-of-bounds coordinates are a programmer error, checked in
    /// debug builds.
    #[inline]
    pub fn get_pixel(&self, u: u32, v: u32) -> Label {
        debug_assert!(
            self.is_valid_pixel(i64::from(u), i64::from(v)),
            "pixel ({u}, {v}) out of bounds for {}x{} image",
            self.width,
            self.height
        );
        self.labels[self.index(u, v)]
    }

    /// Store `label` at (u, v).
    ///
    /// The coordinates must be in bounds and `label` must be a
    /// populated LUT index; both are programmer errors, checked in
    /// debug builds.
    #[inline]
    pub fn set_pixel(&mut self, u: u32, v: u32, label: Label) {
        debug_assert!(
            self.is_valid_pixel(i64::from(u), i64::from(v)),
            "pixel ({u}, {v}) out of bounds for {}x{} image",
            self.width,
            self.height
        );
        debug_assert!(
            usize::from(label) < self.lut.len(),
            "label {label} not populated in LUT of {} colors",
            self.lut.len()
        );
        let idx = self.index(u, v);
        self.labels[idx] = label;
    }

    /// Decode the pixel at (u, v) to its RGB color.
    #[inline]
    pub fn decode_pixel(&self, u: u32, v: u32) -> Rgb {
        self.lut.colors()[usize::from(self.get_pixel(u, v))]
    }

    /// Return the label for `color`, allocating a LUT entry if needed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LutFull`] when a new color no longer fits.
    pub fn alloc_color(&mut self, color: Rgb) -> Result<Label> {
        self.lut.alloc(color)
    }

    /// Replace this image's LUT with a verbatim copy of `src`'s.
    ///
    /// Used by transforms that rebuild the pixel matrix from `src`; the
    /// caller must only store labels drawn from `src` afterwards so the
    /// label-in-range invariant keeps holding.
    pub fn clone_lut_from(&mut self, src: &Image) {
        self.lut = src.lut.clone();
    }

    /// Write the raw label matrix and the LUT to `writer` (for
    /// debugging and console dumps).
    pub fn write_raw_dump(&self, writer: &mut impl Write) -> Result<()> {
        writeln!(writer, "width = {} height = {}", self.width, self.height)?;
        writeln!(writer, "num_colors = {}", self.colors())?;
        writeln!(writer, "RAW image")?;
        for v in 0..self.height {
            for u in 0..self.width {
                write!(writer, "{:2}", self.get_pixel(u, v))?;
            }
            writeln!(writer)?;
        }
        writeln!(writer, "LUT:")?;
        for (i, color) in self.lut.colors().iter().enumerate() {
            writeln!(
                writer,
                "{:3} -> ({:3},{:3},{:3})",
                i, color.r, color.g, color.b
            )?;
        }
        writeln!(writer)?;
        Ok(())
    }
}
