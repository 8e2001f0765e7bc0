//! Look-up table mapping pixel labels to RGB colors
//!
//! The LUT is fixed-capacity and append-only: colors are never removed
//! or reordered, so a label handed out once stays valid for the lifetime
//! of its image. Lookup and dedupe use a linear scan of the populated
//! prefix, which is close to optimal at this capacity.

use crate::color::Rgb;
use crate::error::{Error, Result};

/// Fixed LUT capacity shared by every image.
pub const LUT_CAPACITY: usize = 1000;

/// A pixel label: an index into the LUT, not a color value itself.
pub type Label = u16;

/// The background label, always mapped to white.
pub const BACKGROUND: Label = 0;

/// Fixed-capacity, append-only color table.
///
/// A fresh LUT always holds white at index 0 and black at index 1.
#[derive(Debug, Clone)]
pub struct Lut {
    colors: Vec<Rgb>,
}

impl Lut {
    /// Create a LUT seeded with the two fixed colors.
    pub fn new() -> Self {
        let mut colors = Vec::with_capacity(16);
        colors.push(Rgb::WHITE);
        colors.push(Rgb::BLACK);
        Self { colors }
    }

    /// Number of populated entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// A LUT is never empty; present for API completeness.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Maximum number of entries.
    #[inline]
    pub fn capacity(&self) -> usize {
        LUT_CAPACITY
    }

    /// Get the color at `label`, or `None` if the entry is unpopulated.
    pub fn get(&self, label: Label) -> Option<Rgb> {
        self.colors.get(usize::from(label)).copied()
    }

    /// All populated entries, in allocation order.
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Find the label for `color`, scanning the populated prefix.
    ///
    /// Returns the first match; entries are deduplicated on allocation,
    /// so at most one match exists.
    pub fn find(&self, color: Rgb) -> Option<Label> {
        self.colors
            .iter()
            .position(|&c| c == color)
            .map(|i| i as Label)
    }

    /// Return the label for `color`, appending a new entry if absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LutFull`] if the color is new and the table has
    /// reached [`LUT_CAPACITY`].
    pub fn alloc(&mut self, color: Rgb) -> Result<Label> {
        if let Some(label) = self.find(color) {
            return Ok(label);
        }
        if self.colors.len() >= LUT_CAPACITY {
            return Err(Error::LutFull {
                capacity: LUT_CAPACITY,
            });
        }
        let label = self.colors.len() as Label;
        self.colors.push(color);
        Ok(label)
    }
}

impl Default for Lut {
    fn default() -> Self {
        Self::new()
    }
}
