//! RGB colors and the deterministic color sequence
//!
//! Colors are 24-bit RGB triplets. The packed form `0xRRGGBB` is the
//! wire/LUT representation; the component form is what most call sites
//! work with.

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    /// Red component
    pub r: u8,
    /// Green component
    pub g: u8,
    /// Blue component
    pub b: u8,
}

impl Rgb {
    /// White, the background color of every freshly created image.
    pub const WHITE: Rgb = Rgb {
        r: 0xFF,
        g: 0xFF,
        b: 0xFF,
    };

    /// Black, always present at LUT index 1.
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    /// Create a color from components.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a grayscale color.
    pub fn gray(value: u8) -> Self {
        Self::new(value, value, value)
    }

    /// Unpack a `0xRRGGBB` value. Bits above 24 are ignored.
    pub fn from_packed(packed: u32) -> Self {
        Self {
            r: (packed >> 16) as u8,
            g: (packed >> 8) as u8,
            b: packed as u8,
        }
    }

    /// Pack into a `0xRRGGBB` value.
    pub fn packed(self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }
}

/// Additive step of the generated color sequence, modulo the RGB space.
///
/// The exact value is not load-bearing; what matters is that the sequence
/// starting from black does not revisit white (the background color) for
/// far more draws than a LUT can ever hold.
const COLOR_STEP: u32 = 7639;

/// Deterministic pseudo-random color sequence.
///
/// Starts at black; each step adds [`COLOR_STEP`] modulo 2^24. Used by
/// the palette generator and by segmentation to assign a fresh color to
/// every discovered region. Two sequences always produce the same colors
/// in the same order.
#[derive(Debug, Clone, Default)]
pub struct ColorSequence {
    state: u32,
}

impl ColorSequence {
    /// Create a sequence positioned before its first color.
    pub fn new() -> Self {
        Self {
            state: Rgb::BLACK.packed(),
        }
    }

    /// Advance and return the next generated color.
    pub fn next_color(&mut self) -> Rgb {
        self.state = (self.state + COLOR_STEP) & 0x00FF_FFFF;
        Rgb::from_packed(self.state)
    }
}

impl Iterator for ColorSequence {
    type Item = Rgb;

    fn next(&mut self) -> Option<Rgb> {
        Some(self.next_color())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_roundtrip() {
        let c = Rgb::new(0x12, 0x34, 0x56);
        assert_eq!(c.packed(), 0x123456);
        assert_eq!(Rgb::from_packed(0x123456), c);
        assert_eq!(Rgb::WHITE.packed(), 0xFFFFFF);
        assert_eq!(Rgb::BLACK.packed(), 0x000000);
    }

    #[test]
    fn test_gray() {
        assert_eq!(Rgb::gray(0x80), Rgb::new(0x80, 0x80, 0x80));
    }

    #[test]
    fn test_sequence_deterministic() {
        let mut a = ColorSequence::new();
        let mut b = ColorSequence::new();
        for _ in 0..100 {
            assert_eq!(a.next_color(), b.next_color());
        }
    }

    #[test]
    fn test_sequence_first_color() {
        let mut seq = ColorSequence::new();
        assert_eq!(seq.next_color().packed(), COLOR_STEP);
    }

    #[test]
    fn test_sequence_avoids_background() {
        // A LUT holds at most 1000 colors; the sequence must not produce
        // white (or wrap back to black) within that horizon.
        let mut seq = ColorSequence::new();
        for _ in 0..1000 {
            let c = seq.next_color();
            assert_ne!(c, Rgb::WHITE);
            assert_ne!(c, Rgb::BLACK);
        }
    }
}
