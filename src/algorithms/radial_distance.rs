//! Radial distance simplification.
//!
//! ## Purpose
//!
//! A brute-force O(n) routine that collapses point clusters: a point survives
//! only when it lies at least `tol` away from the last surviving point. Also
//! serves as the preprocessing step of Douglas-Peucker, where it strips
//! successive near-duplicate points before the expensive recursive split.
//!
//! ## Design notes
//!
//! * The radial test is a plain point-to-point distance, so it runs entirely
//!   in the coordinate type; no promotion is needed.
//! * The final point is appended unconditionally, which keeps the endpoint
//!   invariant even when it sits within `tol` of the last key.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::math::vector::point_distance2;
use crate::primitives::cursor::{copy_all, PointSeq};
use crate::primitives::numeric::Coordinate;

/// Simplifies a polyline by dropping points radially close to their
/// predecessor key.
///
/// Appends the surviving coordinates to `sink` and returns the number of
/// coordinates written. Invalid input (a coordinate count that is not a
/// multiple of `DIM`, fewer than 3 points, or a non-positive tolerance) is
/// copied unchanged; `DIM == 0` writes nothing.
pub fn radial_distance<const DIM: usize, C: Coordinate>(
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

    let tol2 = tol * tol;
    let start = sink.len();
    let seq = PointSeq::<C, DIM>::new(coords);

    seq.push_point(0, sink);
    let mut key = 0;
    for index in 1..point_count - 1 {
        if point_distance2::<DIM, C>(seq.point(key), seq.point(index)) >= tol2 {
            key = index;
            seq.push_point(index, sink);
        }
    }
    seq.push_point(point_count - 1, sink);

    sink.len() - start
}
