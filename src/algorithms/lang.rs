//! Lang simplification.
//!
//! ## Purpose
//!
//! Walks a fixed-size search window along the polyline. The window's
//! endpoints define a segment; if every intermediate point stays within
//! `tol` of that segment the window collapses to its endpoints, otherwise
//! the window shrinks by one point and the test repeats. Larger look-ahead
//! values remove more points at the cost of more distance evaluations.
//!
//! ## Design notes
//!
//! * The window is expressed with two [`PointCursor`]s: the end cursor
//!   advances by up to `look_ahead` points (clamped at the final point) and
//!   retreats one point after a failed test.
//! * A two-point window has no intermediate points and always validates, so
//!   the walk is guaranteed to make progress.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::{Float, Zero};

// Internal dependencies
use crate::math::vector::segment_distance2;
use crate::primitives::cursor::{copy_all, PointCursor, PointSeq};
use crate::primitives::numeric::Coordinate;

/// Simplifies a polyline with the Lang fixed-window search.
///
/// Appends the surviving coordinates to `sink` and returns the number of
/// coordinates written. Invalid input (a coordinate count that is not a
/// multiple of `DIM`, fewer than 3 points, a non-positive tolerance, or
/// `look_ahead < 2`) is copied unchanged; `DIM == 0` writes nothing.
pub fn lang<const DIM: usize, C: Coordinate>(
    coords: &[C],
    tol: C,
    look_ahead: usize,
    sink: &mut Vec<C>,
) -> usize {
    if DIM == 0 {
        return 0;
    }
    let point_count = coords.len() / DIM;
    if coords.len() % DIM != 0 || point_count < 3 || look_ahead < 2 || !(tol > C::zero()) {
        return copy_all(coords, sink);
    }

    let tol2 = (tol * tol).to_calc();
    let start = sink.len();
    let seq = PointSeq::<C, DIM>::new(coords);

    let mut current = PointCursor::at(seq, 0);
    let mut next = current;
    let mut moved = next.advance(look_ahead);

    current.push_to(sink);
    while moved > 0 {
        // Worst intermediate deviation from the window's bounding segment.
        let mut d2 = C::Calc::zero();
        for index in current.index() + 1..next.index() {
            d2 = d2.max(segment_distance2::<DIM, C>(
                current.point(),
                next.point(),
                seq.point(index),
            ));
            if d2 >= tol2 {
                break;
            }
        }
        if d2 < tol2 {
            current = next;
            current.push_to(sink);
            moved = next.advance(look_ahead);
        } else {
            next.retreat(1);
        }
    }

    sink.len() - start
}
