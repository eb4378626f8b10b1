//! Opheim simplification.
//!
//! ## Purpose
//!
//! A constrained version of Reumann-Witkam. From the current key, the last
//! point within `min_tol` (radially) defines the direction of a ray; points
//! are then consumed while they stay within `max_tol` of the key and within
//! `min_tol` of the ray. The radial bound keeps the corridor from swallowing
//! distant points that happen to line up with it.
//!
//! ## Design notes
//!
//! * While every candidate stays within `min_tol` of the key the ray remains
//!   undefined and points are consumed by the radial test alone; a polyline
//!   that ends in that state emits only its final point after the loop.
//! * Both radial tests run in the coordinate type; only the ray distance is
//!   promoted.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::math::vector::{point_distance2, ray_distance2};
use crate::primitives::cursor::{copy_all, PointSeq};
use crate::primitives::numeric::Coordinate;

/// Simplifies a polyline by dropping points inside a radially constrained
/// ray corridor.
///
/// Appends the surviving coordinates to `sink` and returns the number of
/// coordinates written. Invalid input (a coordinate count that is not a
/// multiple of `DIM`, fewer than 3 points, or a non-positive tolerance on
/// either bound) is copied unchanged; `DIM == 0` writes nothing.
pub fn opheim<const DIM: usize, C: Coordinate>(
    coords: &[C],
    min_tol: C,
    max_tol: C,
    sink: &mut Vec<C>,
) -> usize {
    if DIM == 0 {
        return 0;
    }
    let point_count = coords.len() / DIM;
    if coords.len() % DIM != 0
        || point_count < 3
        || !(min_tol > C::zero())
        || !(max_tol > C::zero())
    {
        return copy_all(coords, sink);
    }

    let min_tol2 = min_tol * min_tol;
    let max_tol2 = max_tol * max_tol;
    let ray_tol2 = min_tol2.to_calc();
    let start = sink.len();
    let seq = PointSeq::<C, DIM>::new(coords);

    // r0 is the current key; r1 defines the ray direction once chosen.
    let mut r0 = 0;
    let mut r1 = 0;
    let mut ray_defined = false;
    let mut pj = 1;

    seq.push_point(r0, sink);
    for j in 2..point_count {
        let pi = pj;
        pj = j;

        if !ray_defined {
            if point_distance2::<DIM, C>(seq.point(r0), seq.point(pj)) < min_tol2 {
                continue;
            }
            r1 = pi;
            ray_defined = true;
        }

        if point_distance2::<DIM, C>(seq.point(r0), seq.point(pj)) < max_tol2
            && ray_distance2::<DIM, C>(seq.point(r0), seq.point(r1), seq.point(pj)) < ray_tol2
        {
            continue;
        }
        // pj violated a bound; the point before it becomes the new key.
        seq.push_point(pi, sink);
        r0 = pi;
        ray_defined = false;
    }
    seq.push_point(pj, sink);

    sink.len() - start
}
