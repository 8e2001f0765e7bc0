//! Region growing - three flood-fill variants under one contract
//!
//! Given a seed pixel, each variant relabels the maximal 4-connected
//! (von Neumann neighborhood) component of pixels carrying the seed's
//! label and returns the number of pixels relabeled. The variants
//! differ only in traversal mechanics:
//!
//! - [`fill_recursive`] - depth-first on the call stack, with
//!   look-ahead neighbor validation and a bounded depth ceiling
//! - [`fill_with_stack`] - depth-first over an explicit [`CoordStack`],
//!   validating coordinates at pop time
//! - [`fill_with_queue`] - breadth-first over a [`CoordQueue`], same
//!   pop-time discipline
//!
//! The final labeled set is identical across variants; only the
//! labeling order differs. [`FillStrategy`] selects a variant as a
//! plain value, which is how segmentation injects its algorithm.

use crate::error::{RegionError, RegionResult};
use crate::frontier::{Coord, CoordQueue, CoordStack};
use lutimg_core::{Image, Label};

/// Depth ceiling for [`fill_recursive`].
///
/// The recursive variant's depth grows with the component's pixel count
/// along its exploration path, so large regions would otherwise
/// overflow the native call stack. Hitting the ceiling returns
/// [`RegionError::RecursionLimit`]; the iterative variants have no such
/// limit and are the ones to use outside comparative study.
pub const MAX_RECURSION_DEPTH: u32 = 4096;

/// Initial frontier capacity for the iterative variants.
const FRONTIER_CAPACITY: usize = 1024;

/// Region-growing algorithm selector.
///
/// Passed by value to [`segment`](crate::segment) and usable directly
/// via [`FillStrategy::fill`]. The queue (breadth-first) variant is the
/// default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillStrategy {
    /// Call-stack recursion with a bounded depth ceiling
    Recursive,
    /// Explicit-stack depth-first traversal
    Stack,
    /// Queue-based breadth-first traversal
    #[default]
    Queue,
}

impl FillStrategy {
    /// Run the selected variant.
    pub fn fill(self, img: &mut Image, u: u32, v: u32, label: Label) -> RegionResult<u32> {
        match self {
            FillStrategy::Recursive => fill_recursive(img, u, v, label),
            FillStrategy::Stack => fill_with_stack(img, u, v, label),
            FillStrategy::Queue => fill_with_queue(img, u, v, label),
        }
    }
}

/// Shared precondition checks: the seed must be in bounds and the fill
/// label must be a populated LUT index. Runs before any mutation.
fn check_seed(img: &Image, u: u32, v: u32, label: Label) -> RegionResult<()> {
    if !img.is_valid_pixel(i64::from(u), i64::from(v)) {
        return Err(RegionError::InvalidSeed { u, v });
    }
    if label >= img.colors() {
        return Err(RegionError::InvalidLabel {
            label,
            colors: img.colors(),
        });
    }
    Ok(())
}

/// Region growing by call-stack recursion.
///
/// Each neighbor's bounds and background match are checked *before*
/// recursing (look-ahead), so the recursion itself never sees an
/// invalid coordinate. Retained for comparative study against the
/// iterative variants.
///
/// # Errors
///
/// - [`RegionError::InvalidSeed`] / [`RegionError::InvalidLabel`] on a
///   bad seed or label, before any mutation
/// - [`RegionError::RecursionLimit`] once the depth reaches
///   [`MAX_RECURSION_DEPTH`]; the region is left partially relabeled in
///   that case
pub fn fill_recursive(img: &mut Image, u: u32, v: u32, label: Label) -> RegionResult<u32> {
    check_seed(img, u, v, label)?;
    let background = img.get_pixel(u, v);
    if background == label {
        return Ok(0);
    }
    fill_recursive_inner(img, i64::from(u), i64::from(v), background, label, 0)
}

fn fill_recursive_inner(
    img: &mut Image,
    u: i64,
    v: i64,
    background: Label,
    label: Label,
    depth: u32,
) -> RegionResult<u32> {
    if depth >= MAX_RECURSION_DEPTH {
        return Err(RegionError::RecursionLimit {
            limit: MAX_RECURSION_DEPTH,
        });
    }

    img.set_pixel(u as u32, v as u32, label);
    let mut labeled = 1;

    for (nu, nv) in [(u + 1, v), (u - 1, v), (u, v + 1), (u, v - 1)] {
        if img.is_valid_pixel(nu, nv) && img.get_pixel(nu as u32, nv as u32) == background {
            labeled += fill_recursive_inner(img, nu, nv, background, label, depth + 1)?;
        }
    }
    Ok(labeled)
}

/// Region growing over an explicit LIFO stack (depth-first order).
///
/// Neighbors are pushed unconditionally, including coordinates outside
/// the image; each popped coordinate is validated and color-checked
/// before labeling. A coordinate may therefore sit in the frontier more
/// than once, but each pixel is labeled at most once.
///
/// # Errors
///
/// [`RegionError::InvalidSeed`] / [`RegionError::InvalidLabel`] on a
/// bad seed or label, before any mutation.
pub fn fill_with_stack(img: &mut Image, u: u32, v: u32, label: Label) -> RegionResult<u32> {
    check_seed(img, u, v, label)?;
    let background = img.get_pixel(u, v);
    if background == label {
        return Ok(0);
    }

    let mut frontier = CoordStack::with_capacity(FRONTIER_CAPACITY);
    frontier.push(Coord::new(i64::from(u), i64::from(v)));
    let mut labeled = 0;

    while let Some(c) = frontier.pop() {
        if !img.is_valid_pixel(c.u, c.v) {
            continue;
        }
        let (cu, cv) = (c.u as u32, c.v as u32);
        if img.get_pixel(cu, cv) != background {
            continue;
        }
        img.set_pixel(cu, cv, label);
        labeled += 1;

        frontier.push(Coord::new(c.u + 1, c.v));
        frontier.push(Coord::new(c.u - 1, c.v));
        frontier.push(Coord::new(c.u, c.v + 1));
        frontier.push(Coord::new(c.u, c.v - 1));
    }
    Ok(labeled)
}

/// Region growing over a FIFO queue (breadth-first order).
///
/// Same pop-time validation discipline as [`fill_with_stack`]; only the
/// labeling order differs, never the final labeled set.
///
/// # Errors
///
/// [`RegionError::InvalidSeed`] / [`RegionError::InvalidLabel`] on a
/// bad seed or label, before any mutation.
pub fn fill_with_queue(img: &mut Image, u: u32, v: u32, label: Label) -> RegionResult<u32> {
    check_seed(img, u, v, label)?;
    let background = img.get_pixel(u, v);
    if background == label {
        return Ok(0);
    }

    let mut frontier = CoordQueue::with_capacity(FRONTIER_CAPACITY);
    frontier.enqueue(Coord::new(i64::from(u), i64::from(v)));
    let mut labeled = 0;

    while let Some(c) = frontier.dequeue() {
        if !img.is_valid_pixel(c.u, c.v) {
            continue;
        }
        let (cu, cv) = (c.u as u32, c.v as u32);
        if img.get_pixel(cu, cv) != background {
            continue;
        }
        img.set_pixel(cu, cv, label);
        labeled += 1;

        frontier.enqueue(Coord::new(c.u + 1, c.v));
        frontier.enqueue(Coord::new(c.u - 1, c.v));
        frontier.enqueue(Coord::new(c.u, c.v + 1));
        frontier.enqueue(Coord::new(c.u, c.v - 1));
    }
    Ok(labeled)
}
