//! Image segmentation
//!
//! Labels every disconnected background-colored area with its own
//! generated color by sweeping the raster and growing a region from
//! each background pixel still present.

use crate::error::RegionResult;
use crate::fill::FillStrategy;
use lutimg_core::{BACKGROUND, ColorSequence, Image};

/// Label each background region with a distinct generated color.
///
/// Scans pixels in row-major order. Whenever a pixel still carries the
/// background label, the next color is drawn from a fresh
/// [`ColorSequence`], allocated in the LUT, and the chosen `strategy`
/// grows the whole region from that pixel - so the outer scan never
/// revisits it. All three strategies produce the same region count and,
/// since the sequence is deterministic, the same color assignment.
///
/// Returns the number of regions discovered.
///
/// # Errors
///
/// Propagates LUT exhaustion (more regions than free LUT entries) and
/// any fill error, such as the recursive strategy's depth ceiling.
pub fn segment(img: &mut Image, strategy: FillStrategy) -> RegionResult<u32> {
    let mut colors = ColorSequence::new();
    let mut regions = 0;

    for v in 0..img.height() {
        for u in 0..img.width() {
            if img.get_pixel(u, v) != BACKGROUND {
                continue;
            }
            let label = img.alloc_color(colors.next_color())?;
            strategy.fill(img, u, v, label)?;
            regions += 1;
        }
    }
    Ok(regions)
}
