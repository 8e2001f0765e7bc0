//! Orthogonal rotations
//!
//! Clockwise 90 and 180 degree rotations. Both produce a fresh image
//! with the LUT copied verbatim and leave the source raster completely
//! unmodified.

use crate::error::TransformResult;
use lutimg_core::Image;

/// Rotate 90 degrees clockwise.
///
/// The output swaps the dimensions: `width = img.height()`,
/// `height = img.width()`. Source pixel `(u, v)` lands in destination
/// column `height - 1 - v`, destination row `u`. The LUT and color
/// count carry over unchanged.
pub fn rotate_90_cw(img: &Image) -> TransformResult<Image> {
    let w = img.width();
    let h = img.height();

    let mut out = Image::new(h, w)?;
    out.clone_lut_from(img);

    for v in 0..h {
        for u in 0..w {
            out.set_pixel(h - 1 - v, u, img.get_pixel(u, v));
        }
    }
    Ok(out)
}

/// Rotate 180 degrees clockwise.
///
/// Two 90 degree passes; the intermediate image is dropped before
/// returning.
pub fn rotate_180_cw(img: &Image) -> TransformResult<Image> {
    let quarter = rotate_90_cw(img)?;
    rotate_90_cw(&quarter)
}
