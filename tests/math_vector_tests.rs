#![cfg(feature = "dev")]
//! Tests for vector arithmetic and squared-distance functions.
//!
//! These tests verify the geometric kernel shared by all simplification
//! algorithms:
//! - Elementwise vector arithmetic over flat coordinate slices
//! - Squared point, line, ray, and segment distances
//! - Clamping behavior for projections outside a ray or segment
//! - Degenerate geometry (zero-length defining vectors)
//!
//! ## Test Organization
//!
//! 1. **Elementwise Arithmetic** - add, subtract, multiply, dot, equality
//! 2. **Point Distance** - squared distance in the coordinate type
//! 3. **Line Distance** - distance to an infinite line
//! 4. **Ray Distance** - distance to a half-infinite ray
//! 5. **Segment Distance** - distance with two-sided clamping

use approx::assert_abs_diff_eq;

use polysimp::internals::math::vector::{
    add, dot, line_distance2, multiply, point_distance2, points_equal, ray_distance2,
    segment_distance2, subtract,
};

// ============================================================================
// Elementwise Arithmetic Tests
// ============================================================================

/// Test vector subtraction between points.
///
/// Verifies that subtract yields the vector from the first to the second
/// point, in the calculation type.
#[test]
fn test_subtract_basic() {
    let p1 = [1.0f64, 2.0];
    let p2 = [4.0f64, 6.0];

    let v = subtract::<2, f64>(&p1, &p2);

    assert_eq!(v, [3.0, 4.0]);
}

/// Test point translation by a vector.
#[test]
fn test_add_translates_point() {
    let p = [1.0f64, 1.0];
    let v = [2.5f64, -0.5];

    let out = add::<2, f64>(&p, &v);

    assert_eq!(out, [3.5, 0.5]);
}

/// Test in-place scaling.
#[test]
fn test_multiply_scales_in_place() {
    let mut v = [3.0f64, 4.0];

    multiply(&mut v, 0.5);

    assert_eq!(v, [1.5, 2.0]);
}

/// Test the dot product.
///
/// Verifies the dot product of a vector with itself equals its squared
/// length.
#[test]
fn test_dot_product() {
    let v1 = [3.0f64, 4.0];
    let v2 = [1.0f64, 2.0];

    assert_abs_diff_eq!(dot(&v1, &v1), 25.0, epsilon = 1e-12);
    assert_abs_diff_eq!(dot(&v1, &v2), 11.0, epsilon = 1e-12);
}

/// Test exact point equality.
///
/// Verifies that equality is coordinate-wise and exact.
#[test]
fn test_points_equal() {
    let a = [1.0f64, 2.0, 3.0];
    let b = [1.0f64, 2.0, 3.0];
    let c = [1.0f64, 2.0, 3.0 + 1e-12];

    assert!(points_equal::<3, f64>(&a, &b));
    assert!(!points_equal::<3, f64>(&a, &c));
}

/// Test integer subtraction promotes to the calculation type.
#[test]
fn test_subtract_integer_coordinates() {
    let p1 = [0i32, 0];
    let p2 = [3i32, 4];

    let v = subtract::<2, i32>(&p1, &p2);

    // i32 promotes to f64
    assert_eq!(v, [3.0f64, 4.0]);
}

// ============================================================================
// Point Distance Tests
// ============================================================================

/// Test squared point-to-point distance.
///
/// Verifies the 3-4-5 triangle in f64 and that the result stays in the
/// coordinate type.
#[test]
fn test_point_distance2_f64() {
    let p1 = [0.0f64, 0.0];
    let p2 = [3.0f64, 4.0];

    let d2: f64 = point_distance2::<2, f64>(&p1, &p2);

    assert_abs_diff_eq!(d2, 25.0, epsilon = 1e-12);
}

/// Test squared distance with integer coordinates.
///
/// Verifies that no promotion happens for the point distance.
#[test]
fn test_point_distance2_i32() {
    let p1 = [0i32, 0];
    let p2 = [3i32, 4];

    let d2: i32 = point_distance2::<2, i32>(&p1, &p2);

    assert_eq!(d2, 25);
}

/// Test squared distance in three dimensions.
#[test]
fn test_point_distance2_3d() {
    let p1 = [1.0f64, 2.0, 3.0];
    let p2 = [2.0f64, 4.0, 5.0];

    assert_abs_diff_eq!(point_distance2::<3, f64>(&p1, &p2), 9.0, epsilon = 1e-12);
}

/// Test zero distance between identical points.
#[test]
fn test_point_distance2_identical() {
    let p = [7.5f64, -2.5];

    assert_eq!(point_distance2::<2, f64>(&p, &p), 0.0);
}

// ============================================================================
// Line Distance Tests
// ============================================================================

/// Test perpendicular distance to a horizontal line.
#[test]
fn test_line_distance2_interior() {
    let l1 = [0.0f64, 0.0];
    let l2 = [10.0f64, 0.0];
    let p = [5.0f64, 3.0];

    assert_abs_diff_eq!(line_distance2::<2, f64>(&l1, &l2, &p), 9.0, epsilon = 1e-12);
}

/// Test that a line extends beyond its defining points.
///
/// Verifies that the projection is not clamped: a point past the second
/// defining point measures against the infinite line.
#[test]
fn test_line_distance2_beyond_endpoints() {
    let l1 = [0.0f64, 0.0];
    let l2 = [10.0f64, 0.0];

    let past_end = [15.0f64, 2.0];
    let before_start = [-3.0f64, 1.0];

    assert_abs_diff_eq!(
        line_distance2::<2, f64>(&l1, &l2, &past_end),
        4.0,
        epsilon = 1e-12
    );
    assert_abs_diff_eq!(
        line_distance2::<2, f64>(&l1, &l2, &before_start),
        1.0,
        epsilon = 1e-12
    );
}

/// Test a degenerate line whose defining points coincide.
///
/// Verifies that the distance collapses to the point distance from the
/// first defining point.
#[test]
fn test_line_distance2_degenerate() {
    let l = [2.0f64, 2.0];
    let p = [5.0f64, 6.0];

    assert_abs_diff_eq!(line_distance2::<2, f64>(&l, &l, &p), 25.0, epsilon = 1e-12);
}

/// Test line distance with integer coordinates.
///
/// Verifies that the division-heavy projection promotes to f64.
#[test]
fn test_line_distance2_integer_promotes() {
    let l1 = [0i32, 0];
    let l2 = [4i32, 0];
    let p = [1i32, 3];

    let d2: f64 = line_distance2::<2, i32>(&l1, &l2, &p);

    assert_abs_diff_eq!(d2, 9.0, epsilon = 1e-12);
}

// ============================================================================
// Ray Distance Tests
// ============================================================================

/// Test perpendicular distance to a ray for an interior projection.
#[test]
fn test_ray_distance2_interior() {
    let r1 = [0.0f64, 0.0];
    let r2 = [10.0f64, 0.0];
    let p = [5.0f64, 3.0];

    assert_abs_diff_eq!(ray_distance2::<2, f64>(&r1, &r2, &p), 9.0, epsilon = 1e-12);
}

/// Test that a ray extends past its second defining point.
#[test]
fn test_ray_distance2_extends_forward() {
    let r1 = [0.0f64, 0.0];
    let r2 = [10.0f64, 0.0];
    let p = [15.0f64, 2.0];

    assert_abs_diff_eq!(ray_distance2::<2, f64>(&r1, &r2, &p), 4.0, epsilon = 1e-12);
}

/// Test clamping behind the ray origin.
///
/// Verifies that a point projecting behind the origin measures against the
/// origin itself.
#[test]
fn test_ray_distance2_behind_origin() {
    let r1 = [0.0f64, 0.0];
    let r2 = [10.0f64, 0.0];
    let p = [-5.0f64, 2.0];

    // Point distance to the origin: 25 + 4
    assert_abs_diff_eq!(ray_distance2::<2, f64>(&r1, &r2, &p), 29.0, epsilon = 1e-12);
}

// ============================================================================
// Segment Distance Tests
// ============================================================================

/// Test perpendicular distance for a projection inside the segment.
#[test]
fn test_segment_distance2_interior() {
    let s1 = [0.0f64, 0.0];
    let s2 = [10.0f64, 0.0];
    let p = [5.0f64, 3.0];

    assert_abs_diff_eq!(
        segment_distance2::<2, f64>(&s1, &s2, &p),
        9.0,
        epsilon = 1e-12
    );
}

/// Test clamping at both segment ends.
///
/// Verifies that projections outside the segment measure against the
/// nearest endpoint.
#[test]
fn test_segment_distance2_clamps_both_ends() {
    let s1 = [0.0f64, 0.0];
    let s2 = [10.0f64, 0.0];

    // Projects before the start: distance to s1 is 25 + 4
    let before = [-5.0f64, 2.0];
    assert_abs_diff_eq!(
        segment_distance2::<2, f64>(&s1, &s2, &before),
        29.0,
        epsilon = 1e-12
    );

    // Projects past the end: distance to s2 is 25 + 4
    let past = [15.0f64, 2.0];
    assert_abs_diff_eq!(
        segment_distance2::<2, f64>(&s1, &s2, &past),
        29.0,
        epsilon = 1e-12
    );
}

/// Test the boundary projection directly above the segment start.
///
/// Verifies that a zero projection parameter clamps to the start without
/// dividing.
#[test]
fn test_segment_distance2_at_start_boundary() {
    let s1 = [0.0f64, 0.0];
    let s2 = [10.0f64, 0.0];
    let p = [0.0f64, 5.0];

    assert_abs_diff_eq!(
        segment_distance2::<2, f64>(&s1, &s2, &p),
        25.0,
        epsilon = 1e-12
    );
}

/// Test a degenerate segment whose endpoints coincide.
#[test]
fn test_segment_distance2_degenerate() {
    let s = [1.0f64, 1.0];
    let p = [4.0f64, 5.0];

    assert_abs_diff_eq!(segment_distance2::<2, f64>(&s, &s, &p), 25.0, epsilon = 1e-12);
}

/// Test segment distance in three dimensions.
#[test]
fn test_segment_distance2_3d() {
    let s1 = [0.0f64, 0.0, 0.0];
    let s2 = [2.0f64, 0.0, 0.0];
    let p = [1.0f64, 1.0, 1.0];

    assert_abs_diff_eq!(
        segment_distance2::<3, f64>(&s1, &s2, &p),
        2.0,
        epsilon = 1e-12
    );
}

/// Test that segment, ray, and line distances agree for interior
/// projections.
#[test]
fn test_distance_measures_agree_interior() {
    let a = [0.0f64, 0.0];
    let b = [8.0f64, 4.0];
    let p = [3.0f64, 3.0];

    let line = line_distance2::<2, f64>(&a, &b, &p);
    let ray = ray_distance2::<2, f64>(&a, &b, &p);
    let segment = segment_distance2::<2, f64>(&a, &b, &p);

    assert_abs_diff_eq!(line, ray, epsilon = 1e-12);
    assert_abs_diff_eq!(ray, segment, epsilon = 1e-12);
}
