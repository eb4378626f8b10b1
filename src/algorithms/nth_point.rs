//! Nth point decimation.
//!
//! ## Purpose
//!
//! The simplest and fastest routine in the crate: keep the first point, every
//! nth point after it, and the last point. Purely index-based, so the result
//! ignores geometry entirely; useful as a cheap preprocessing step or a
//! baseline to compare the distance-based routines against.
//!
//! ## Edge cases
//!
//! * The advance towards the end of the polyline is clamped, so the final
//!   point is always emitted exactly once, even when the step does not divide
//!   the point count.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::cursor::{copy_all, PointCursor, PointSeq};
use crate::primitives::numeric::Coordinate;

/// Simplifies a polyline by keeping the first, last, and each nth point.
///
/// Appends the surviving coordinates to `sink` and returns the number of
/// coordinates written. Invalid input (a coordinate count that is not a
/// multiple of `DIM`, fewer than 3 points, or `n < 2`) is copied unchanged;
/// `DIM == 0` writes nothing.
pub fn nth_point<const DIM: usize, C: Coordinate>(
    coords: &[C],
    n: usize,
    sink: &mut Vec<C>,
) -> usize {
    if DIM == 0 {
        return 0;
    }
    let point_count = coords.len() / DIM;
    if coords.len() % DIM != 0 || point_count < 3 || n < 2 {
        return copy_all(coords, sink);
    }

    let start = sink.len();
    let seq = PointSeq::<C, DIM>::new(coords);
    let mut cursor = PointCursor::at(seq, 0);

    cursor.push_to(sink);
    while cursor.advance(n) > 0 {
        cursor.push_to(sink);
    }

    sink.len() - start
}
