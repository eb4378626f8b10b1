//! Reumann-Witkam simplification.
//!
//! ## Purpose
//!
//! Slides a corridor along the polyline: the current key and its immediate
//! successor define an infinite line, and points are consumed while they stay
//! within `tol` of that line. The point before the first violator becomes the
//! new key, and the corridor is redefined through it and the violator.
//!
//! ## Design notes
//!
//! * The corridor is bounded by an infinite line, not a segment, so a point
//!   far beyond the defining pair can still fall inside the corridor. Opheim
//!   adds the radial constraint that closes this gap.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::math::vector::line_distance2;
use crate::primitives::cursor::{copy_all, PointSeq};
use crate::primitives::numeric::Coordinate;

/// Simplifies a polyline by dropping points inside a sliding line corridor.
///
/// Appends the surviving coordinates to `sink` and returns the number of
/// coordinates written. Invalid input (a coordinate count that is not a
/// multiple of `DIM`, fewer than 3 points, or a non-positive tolerance) is
/// copied unchanged; `DIM == 0` writes nothing.
pub fn reumann_witkam<const DIM: usize, C: Coordinate>(
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

    // The line through p0 and p1 bounds the corridor.
    let mut p0 = 0;
    let mut p1 = 1;
    let mut pj = 1;

    seq.push_point(p0, sink);
    for j in 2..point_count {
        let pi = pj;
        pj = j;
        if line_distance2::<DIM, C>(seq.point(p0), seq.point(p1), seq.point(pj)) < tol2 {
            continue;
        }
        // pj left the corridor; the point before it becomes the new key.
        seq.push_point(pi, sink);
        p0 = pi;
        p1 = pj;
    }
    seq.push_point(pj, sink);

    sink.len() - start
}
