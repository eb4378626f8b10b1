//! Perpendicular distance simplification.
//!
//! ## Purpose
//!
//! Tests each interior point against the segment bridging its two neighbors:
//! a point closer than `tol` to that segment carries little shape information
//! and is dropped. Dropping a point immediately promotes its successor, so a
//! single pass removes at most every other point (at most 50% reduction).
//! The repeated variant runs additional passes over its own output until the
//! requested pass budget is spent or a pass stops reducing.
//!
//! ## Design notes
//!
//! * The repeated variant alternates a [`SwapBuffer`] pair for intermediate
//!   passes and writes the final pass straight to the caller's sink; no pass
//!   output is copied unless the run stalls early.
//! * A stalled pass (no reduction) is detected by comparing coordinate
//!   counts, at which point the stalled output is forwarded as the result.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::math::vector::segment_distance2;
use crate::primitives::buffer::SwapBuffer;
use crate::primitives::cursor::{copy_all, PointSeq};
use crate::primitives::numeric::Coordinate;

/// Simplifies a polyline with a single perpendicular-distance pass.
///
/// Appends the surviving coordinates to `sink` and returns the number of
/// coordinates written. Invalid input (a coordinate count that is not a
/// multiple of `DIM`, fewer than 3 points, or a non-positive tolerance) is
/// copied unchanged; `DIM == 0` writes nothing.
pub fn perpendicular_distance<const DIM: usize, C: Coordinate>(
    coords: &[C],
    tol: C,
    sink: &mut Vec<C>,
) -> usize {
    if DIM == 0 {
        return 0;
    }
    let point_count = coords.len() / DIM;
    if coords.len() % DIM != 0 || point_count < 3 || !(tol > C::zero()) {
        return copy_all(coords, sink);
    }

    let tol2 = (tol * tol).to_calc();
    let start = sink.len();
    let seq = PointSeq::<C, DIM>::new(coords);
    let end = point_count;

    let mut p0 = 0;
    let mut p1 = 1;
    let mut p2 = 2;

    seq.push_point(p0, sink);
    while p2 != end {
        if segment_distance2::<DIM, C>(seq.point(p0), seq.point(p2), seq.point(p1)) < tol2 {
            // p1 is dropped; its successor is kept and becomes the new base.
            seq.push_point(p2, sink);
            p0 = p2;
            p1 += 2;
            if p1 >= end {
                break;
            }
            p2 = p1 + 1;
        } else {
            seq.push_point(p1, sink);
            p0 = p1;
            p1 = p2;
            p2 += 1;
        }
    }
    // The last point survives when the loop ended between tests.
    if p1 < end {
        seq.push_point(p1, sink);
    }

    sink.len() - start
}

/// Simplifies a polyline with up to `repeat` perpendicular-distance passes.
///
/// Each pass consumes the previous pass output; the run ends early when a
/// pass yields no further reduction. Appends the surviving coordinates to
/// `sink` and returns the number of coordinates written. Invalid input
/// (including `repeat < 1`) is copied unchanged; `DIM == 0` writes nothing.
pub fn perpendicular_distance_repeated<const DIM: usize, C: Coordinate>(
    coords: &[C],
    tol: C,
    repeat: usize,
    sink: &mut Vec<C>,
) -> usize {
    if DIM == 0 {
        return 0;
    }
    let point_count = coords.len() / DIM;
    if coords.len() % DIM != 0 || point_count < 3 || repeat < 1 || !(tol > C::zero()) {
        return copy_all(coords, sink);
    }
    if repeat == 1 {
        return perpendicular_distance::<DIM, C>(coords, tol, sink);
    }

    let mut buffer = SwapBuffer::with_capacity(coords.len());

    // First pass reads the caller's input.
    let mut count = perpendicular_distance::<DIM, C>(coords, tol, buffer.front_mut());
    let mut remaining = repeat - 1;
    if count == coords.len() {
        return copy_all(buffer.front(), sink);
    }

    // Intermediate passes alternate between the two scratch slots.
    while remaining > 1 {
        let (input, output) = buffer.parts();
        let written = perpendicular_distance::<DIM, C>(input, tol, output);
        if written == count {
            return copy_all(buffer.back(), sink);
        }
        count = written;
        buffer.swap();
        remaining -= 1;
    }

    // Final pass writes straight to the caller's sink.
    perpendicular_distance::<DIM, C>(buffer.front(), tol, sink)
}
