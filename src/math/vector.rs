//! N-dimensional vector arithmetic and squared-distance functions.
//!
//! ## Purpose
//!
//! This module implements the geometric kernel shared by every simplification
//! algorithm: elementwise vector arithmetic over `DIM`-dimensional points and
//! the four squared-distance measures (point, infinite line, ray, segment).
//!
//! ## Design notes
//!
//! * **Squared distances**: All distance functions return squared values so
//!   callers compare against a squared tolerance and no square root is ever
//!   taken on a hot path.
//! * **Type promotion**: Projection math divides, so line/ray/segment
//!   distances run in `C::Calc`. Point-to-point distance only adds and
//!   multiplies and therefore stays in the coordinate type.
//! * **Degenerate geometry**: A zero-length line direction forces the
//!   projection fraction to zero, which collapses the line distance to the
//!   distance from its first defining point.
//!
//! ## Invariants
//!
//! * All point parameters hold at least `DIM` coordinates.
//! * Ray and segment clamping happens before any division: a projection
//!   behind the origin is answered with a point distance, never a negative
//!   fraction.

// External dependencies
use num_traits::{Float, Zero};

// Internal dependencies
use crate::primitives::numeric::Coordinate;

// ============================================================================
// Elementwise arithmetic
// ============================================================================

/// Adds a calculation-typed vector to a point, yielding the translated point.
#[inline]
pub fn add<const DIM: usize, C: Coordinate>(p: &[C], v: &[C::Calc; DIM]) -> [C::Calc; DIM] {
    let mut out = [C::Calc::zero(); DIM];
    for d in 0..DIM {
        out[d] = p[d].to_calc() + v[d];
    }
    out
}

/// The vector from `p1` to `p2` in the calculation type.
#[inline]
pub fn subtract<const DIM: usize, C: Coordinate>(p1: &[C], p2: &[C]) -> [C::Calc; DIM] {
    let mut out = [C::Calc::zero(); DIM];
    for d in 0..DIM {
        out[d] = p2[d].to_calc() - p1[d].to_calc();
    }
    out
}

/// Scales a vector in place.
#[inline]
pub fn multiply<const DIM: usize, A: Float>(v: &mut [A; DIM], value: A) {
    for coord in v.iter_mut() {
        *coord = *coord * value;
    }
}

/// Dot product of two vectors.
#[inline]
pub fn dot<const DIM: usize, A: Float>(v1: &[A; DIM], v2: &[A; DIM]) -> A {
    let mut sum = A::zero();
    for d in 0..DIM {
        sum = sum + v1[d] * v2[d];
    }
    sum
}

/// Exact coordinate-wise equality of two points.
#[inline]
pub fn points_equal<const DIM: usize, C: Coordinate>(p1: &[C], p2: &[C]) -> bool {
    for d in 0..DIM {
        if p1[d] != p2[d] {
            return false;
        }
    }
    true
}

// ============================================================================
// Squared distances
// ============================================================================

/// Squared distance between two points, in the coordinate type.
#[inline]
pub fn point_distance2<const DIM: usize, C: Coordinate>(p1: &[C], p2: &[C]) -> C {
    let mut d2 = C::zero();
    for d in 0..DIM {
        let diff = p1[d] - p2[d];
        d2 = d2 + diff * diff;
    }
    d2
}

/// Squared distance from `p` to the infinite line through `l1` and `l2`.
#[inline]
pub fn line_distance2<const DIM: usize, C: Coordinate>(l1: &[C], l2: &[C], p: &[C]) -> C::Calc {
    // v spans the line, w reaches from its origin to p.
    let mut v = subtract::<DIM, C>(l1, l2);
    let w = subtract::<DIM, C>(l1, p);

    let cv = dot(&v, &v);
    let cw = dot(&w, &v);

    // A degenerate line keeps the projection at l1.
    let fraction = if cv == C::Calc::zero() {
        C::Calc::zero()
    } else {
        cw / cv
    };

    multiply(&mut v, fraction);
    let proj = add::<DIM, C>(l1, &v);
    projected_distance2::<DIM, C>(&proj, p)
}

/// Squared distance from `p` to the ray from `r1` through `r2`.
#[inline]
pub fn ray_distance2<const DIM: usize, C: Coordinate>(r1: &[C], r2: &[C], p: &[C]) -> C::Calc {
    let mut v = subtract::<DIM, C>(r1, r2);
    let w = subtract::<DIM, C>(r1, p);

    let cw = dot(&w, &v);
    if cw <= C::Calc::zero() {
        // p projects behind the ray origin.
        return point_distance2::<DIM, C>(p, r1).to_calc();
    }

    let cv = dot(&v, &v);
    let fraction = if cv == C::Calc::zero() {
        C::Calc::zero()
    } else {
        cw / cv
    };

    multiply(&mut v, fraction);
    let proj = add::<DIM, C>(r1, &v);
    projected_distance2::<DIM, C>(&proj, p)
}

/// Squared distance from `p` to the segment between `s1` and `s2`.
#[inline]
pub fn segment_distance2<const DIM: usize, C: Coordinate>(s1: &[C], s2: &[C], p: &[C]) -> C::Calc {
    let mut v = subtract::<DIM, C>(s1, s2);
    let w = subtract::<DIM, C>(s1, p);

    let cw = dot(&w, &v);
    if cw <= C::Calc::zero() {
        // p projects before the segment start.
        return point_distance2::<DIM, C>(p, s1).to_calc();
    }

    let cv = dot(&v, &v);
    if cv <= cw {
        // p projects past the segment end.
        return point_distance2::<DIM, C>(p, s2).to_calc();
    }

    // Here cv > cw > 0, so the division is well defined.
    let fraction = cw / cv;
    multiply(&mut v, fraction);
    let proj = add::<DIM, C>(s1, &v);
    projected_distance2::<DIM, C>(&proj, p)
}

/// Squared distance between a projected (calculation-typed) point and a
/// coordinate-typed point.
#[inline]
fn projected_distance2<const DIM: usize, C: Coordinate>(proj: &[C::Calc; DIM], p: &[C]) -> C::Calc {
    let mut d2 = C::Calc::zero();
    for d in 0..DIM {
        let diff = proj[d] - p[d].to_calc();
        d2 = d2 + diff * diff;
    }
    d2
}
