//! Per-vertex squared positional error computation.
//!
//! ## Purpose
//!
//! Given an original polyline and a simplification claimed to be a vertex
//! subsequence of it, this module recovers one squared error per original
//! vertex: the squared perpendicular distance to the simplification segment
//! that locally replaces it. A vertex shared by both polylines reports zero.
//!
//! ## Design notes
//!
//! * **Lock-step walk**: Matching relies on exact coordinate equality, which
//!   holds by construction when the simplification came from this crate's
//!   algorithms applied to the same input.
//! * **Incremental output**: When a later simplification vertex never
//!   matches, everything scanned up to that point has already been written.
//!   The partial data is kept for diagnosis, and the returned validity flag
//!   is the authoritative verdict.
//!
//! ## Invariants
//!
//! * On a valid run, exactly one error is emitted per original vertex.
//! * Entry validation failures emit nothing and report invalid.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Zero;

// Internal dependencies
use crate::math::vector::{points_equal, segment_distance2};
use crate::primitives::cursor::PointSeq;
use crate::primitives::numeric::Coordinate;

/// Computes squared positional errors of `simplification` against `original`.
///
/// Appends one squared error per matched original vertex to `sink` and
/// returns the number of errors written together with the validity flag.
/// The run is invalid when either slice is not a whole number of points,
/// either polyline has fewer than 2 points, the simplification has more
/// points than the original, the first points differ, or a simplification
/// vertex is never found among the original vertices. Only the last
/// condition leaves partial output behind; the others write nothing.
pub fn positional_errors2<const DIM: usize, C: Coordinate>(
    original: &[C],
    simplification: &[C],
    sink: &mut Vec<C::Calc>,
) -> (usize, bool) {
    if DIM == 0 {
        return (0, false);
    }
    let original_count = original.len() / DIM;
    let simplified_count = simplification.len() / DIM;
    if original.len() % DIM != 0
        || simplification.len() % DIM != 0
        || original_count < 2
        || simplified_count < 2
        || simplified_count > original_count
    {
        return (0, false);
    }

    let orig = PointSeq::<C, DIM>::new(original);
    let simp = PointSeq::<C, DIM>::new(simplification);
    if !points_equal::<DIM, C>(orig.point(0), simp.point(0)) {
        return (0, false);
    }

    let start = sink.len();
    let mut o = 0;
    for s in 1..simplified_count {
        // Scan originals up to the vertex matching simp[s]; each one in
        // between contributes its distance to the bracketing segment. The
        // matched vertex of the previous segment leads the scan and
        // contributes its zero here.
        while o < original_count && !points_equal::<DIM, C>(orig.point(o), simp.point(s)) {
            sink.push(segment_distance2::<DIM, C>(
                simp.point(s - 1),
                simp.point(s),
                orig.point(o),
            ));
            o += 1;
        }
    }

    // The final simplification vertex contributes its own zero, but only
    // when the walk actually reached it.
    let valid = o < original_count;
    if valid {
        sink.push(C::Calc::zero());
    }

    (sink.len() - start, valid)
}
