//! Douglas-Peucker simplification.
//!
//! ## Purpose
//!
//! The classic global-error routine, in two variants. The tolerance variant
//! recursively splits the polyline at the interior point farthest from the
//! segment bounding each sub-polyline, keeping points that deviate by at
//! least `tol`. The count variant runs the same split greedily until a
//! requested number of points survives, always expanding the sub-polyline
//! with the globally worst deviation.
//!
//! ## Design notes
//!
//! * Recursion is never expressed through the call stack: the tolerance
//!   variant drives an explicit `Vec` stack, the count variant a
//!   `BinaryHeap` ordered by squared key distance.
//! * The tolerance variant first applies radial-distance preprocessing with
//!   the same tolerance, which strips successive near-duplicates that would
//!   otherwise force the deepest splits. The count variant skips the
//!   preprocessing because it must control the output size exactly.
//! * A key candidate initialized at the sub-polyline's last index encodes
//!   "no interior point"; the acceptance test `index != last` filters it.
//!
//! ## Edge cases
//!
//! * Ties during a key scan move the key to the later point.
//! * Equal-distance heap entries pop in an unspecified order.
//! * For the count variant, `count >= point_count` is invalid input and
//!   copies the polyline unchanged; `count == 2` yields the endpoints.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::collections::BinaryHeap;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::collections::BinaryHeap;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::Zero;

// Internal dependencies
use crate::algorithms::radial_distance::radial_distance;
use crate::math::vector::segment_distance2;
use crate::primitives::buffer::Slot;
use crate::primitives::cursor::{copy_all, PointSeq};
use crate::primitives::numeric::Coordinate;

// ============================================================================
// Work records
// ============================================================================

/// A contiguous point-index range awaiting a split decision.
#[derive(Debug, Clone, Copy)]
struct SubPoly {
    first: usize,
    last: usize,
}

/// A candidate key: the interior point farthest from its bounding segment.
#[derive(Debug, Clone, Copy)]
struct KeyInfo<A> {
    index: usize,
    dist2: A,
}

/// Heap entry for the count variant: a sub-polyline bundled with its key.
#[derive(Debug, Clone, Copy)]
struct RankedSubPoly<A> {
    first: usize,
    last: usize,
    key: KeyInfo<A>,
}

impl<A: PartialOrd> PartialEq for RankedSubPoly<A> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<A: PartialOrd> Eq for RankedSubPoly<A> {}

impl<A: PartialOrd> PartialOrd for RankedSubPoly<A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<A: PartialOrd> Ord for RankedSubPoly<A> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Only the squared distance ranks entries; incomparable values
        // (NaN) collapse to equality rather than poisoning the heap.
        self.key
            .dist2
            .partial_cmp(&other.key.dist2)
            .unwrap_or(Ordering::Equal)
    }
}

// ============================================================================
// Key search
// ============================================================================

/// Finds the interior point of `[first, last]` farthest from the segment
/// between its endpoints.
///
/// Returns `index == last` with distance zero when the range has no interior
/// points. A later point at the same distance replaces an earlier one.
fn find_key<const DIM: usize, C: Coordinate>(
    seq: &PointSeq<'_, C, DIM>,
    first: usize,
    last: usize,
) -> KeyInfo<C::Calc> {
    let mut key = KeyInfo {
        index: last,
        dist2: C::Calc::zero(),
    };
    for index in first + 1..last {
        let d2 = segment_distance2::<DIM, C>(seq.point(first), seq.point(last), seq.point(index));
        if d2 < key.dist2 {
            continue;
        }
        key.index = index;
        key.dist2 = d2;
    }
    key
}

// ============================================================================
// Tolerance variant
// ============================================================================

/// Simplifies a polyline with Douglas-Peucker to a distance tolerance.
///
/// Appends the surviving coordinates to `sink` and returns the number of
/// coordinates written. Invalid input (a coordinate count that is not a
/// multiple of `DIM`, fewer than 3 points, or a non-positive tolerance) is
/// copied unchanged; `DIM == 0` writes nothing.
pub fn douglas_peucker<const DIM: usize, C: Coordinate>(
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

    // Radial-distance preprocessing with the same tolerance.
    let mut reduced = Slot::new(coords.len());
    radial_distance::<DIM, C>(coords, tol, &mut reduced);

    let seq = PointSeq::<C, DIM>::new(&reduced);
    let reduced_count = seq.point_count();
    let tol2 = (tol * tol).to_calc();

    let mut keys = vec![false; reduced_count];
    keys[0] = true;
    keys[reduced_count - 1] = true;

    let mut stack: Vec<SubPoly> = Vec::with_capacity(reduced_count);
    stack.push(SubPoly {
        first: 0,
        last: reduced_count - 1,
    });
    while let Some(sub) = stack.pop() {
        let key = find_key::<DIM, C>(&seq, sub.first, sub.last);
        if key.index != sub.last && tol2 < key.dist2 {
            keys[key.index] = true;
            stack.push(SubPoly {
                first: key.index,
                last: sub.last,
            });
            stack.push(SubPoly {
                first: sub.first,
                last: key.index,
            });
        }
    }

    let start = sink.len();
    for index in 0..reduced_count {
        if keys[index] {
            seq.push_point(index, sink);
        }
    }
    sink.len() - start
}

// ============================================================================
// Count variant
// ============================================================================

/// Simplifies a polyline with Douglas-Peucker to an exact point count.
///
/// Appends the surviving coordinates to `sink` and returns the number of
/// coordinates written. Invalid input (a coordinate count that is not a
/// multiple of `DIM`, fewer than 3 points, `count < 2`, or
/// `count >= point_count`) is copied unchanged; `DIM == 0` writes nothing.
pub fn douglas_peucker_count<const DIM: usize, C: Coordinate>(
    coords: &[C],
    count: usize,
    sink: &mut Vec<C>,
) -> usize {
    if DIM == 0 {
        return 0;
    }
    let point_count = coords.len() / DIM;
    if coords.len() % DIM != 0 || point_count < 3 || count < 2 || count >= point_count {
        return copy_all(coords, sink);
    }

    let seq = PointSeq::<C, DIM>::new(coords);
    let mut keys = vec![false; point_count];
    keys[0] = true;
    keys[point_count - 1] = true;
    let mut key_count = 2;

    if count > 2 {
        let mut queue: BinaryHeap<RankedSubPoly<C::Calc>> = BinaryHeap::with_capacity(count);
        let key = find_key::<DIM, C>(&seq, 0, point_count - 1);
        queue.push(RankedSubPoly {
            first: 0,
            last: point_count - 1,
            key,
        });

        // Always expand the sub-polyline with the worst deviation.
        while let Some(sub) = queue.pop() {
            if sub.key.index == sub.last {
                continue;
            }
            keys[sub.key.index] = true;
            key_count += 1;
            if key_count == count {
                break;
            }
            let left = find_key::<DIM, C>(&seq, sub.first, sub.key.index);
            queue.push(RankedSubPoly {
                first: sub.first,
                last: sub.key.index,
                key: left,
            });
            let right = find_key::<DIM, C>(&seq, sub.key.index, sub.last);
            queue.push(RankedSubPoly {
                first: sub.key.index,
                last: sub.last,
                key: right,
            });
        }
    }

    let start = sink.len();
    for index in 0..point_count {
        if keys[index] {
            seq.push_point(index, sink);
        }
    }
    sink.len() - start
}
