//! Structural image comparison
//!
//! Two images are compared by decoded color, not by raw label: the same
//! RGB color may sit at different LUT indices in different images, and
//! such images must still compare equal when every pixel decodes the
//! same.

use super::Image;

impl Image {
    /// Check whether `self` and `other` represent the same image.
    ///
    /// Dimensions and color counts must match exactly, the two LUTs
    /// must hold the same set of colors (order-independent), and every
    /// pixel pair must decode to the same RGB value. Short-circuits on
    /// the first mismatch.
    pub fn equal(&self, other: &Image) -> bool {
        if self.width != other.width
            || self.height != other.height
            || self.colors() != other.colors()
        {
            return false;
        }

        // Same color set, regardless of label assignment
        for &color in self.lut.colors() {
            if other.lut.find(color).is_none() {
                return false;
            }
        }

        for v in 0..self.height {
            for u in 0..self.width {
                if self.decode_pixel(u, v) != other.decode_pixel(u, v) {
                    return false;
                }
            }
        }
        true
    }

    /// Negation of [`Image::equal`].
    pub fn different(&self, other: &Image) -> bool {
        !self.equal(other)
    }
}

impl PartialEq for Image {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Image, Rgb};

    #[test]
    fn test_equal_fresh_images() {
        let a = Image::new(3, 3).unwrap();
        let b = Image::new(3, 3).unwrap();
        assert!(a.equal(&b));
        assert!(!a.different(&b));
        assert_eq!(a, b);
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = Image::new(3, 3).unwrap();
        let b = Image::new(3, 4).unwrap();
        assert!(a.different(&b));
    }

    #[test]
    fn test_color_count_mismatch() {
        let a = Image::new(2, 2).unwrap();
        let mut b = Image::new(2, 2).unwrap();
        b.alloc_color(Rgb::new(1, 2, 3)).unwrap();
        assert!(a.different(&b));
    }

    #[test]
    fn test_pixel_mismatch() {
        let a = Image::new(2, 2).unwrap();
        let mut b = Image::new(2, 2).unwrap();
        b.set_pixel(1, 0, 1);
        assert!(a.different(&b));
    }

    #[test]
    fn test_equal_across_label_assignment() {
        // Same palette, same decoded pixels, swapped label assignment.
        let red = Rgb::new(200, 0, 0);
        let green = Rgb::new(0, 200, 0);

        let mut a = Image::new(2, 1).unwrap();
        let ar = a.alloc_color(red).unwrap();
        let ag = a.alloc_color(green).unwrap();
        a.set_pixel(0, 0, ar);
        a.set_pixel(1, 0, ag);

        let mut b = Image::new(2, 1).unwrap();
        let bg = b.alloc_color(green).unwrap();
        let br = b.alloc_color(red).unwrap();
        b.set_pixel(0, 0, br);
        b.set_pixel(1, 0, bg);

        assert_ne!(ar, br); // labels differ...
        assert!(a.equal(&b)); // ...images do not
    }

    #[test]
    fn test_same_palette_different_pixels() {
        let red = Rgb::new(200, 0, 0);
        let mut a = Image::new(2, 1).unwrap();
        let la = a.alloc_color(red).unwrap();
        a.set_pixel(0, 0, la);

        let mut b = Image::new(2, 1).unwrap();
        let lb = b.alloc_color(red).unwrap();
        b.set_pixel(1, 0, lb);

        assert!(a.different(&b));
    }
}
