#![cfg(feature = "dev")]
//! Tests for Lang simplification.
//!
//! These tests verify the fixed-window look-ahead search:
//! - Full windows collapse to their endpoints when all intermediates fit
//! - Windows shrink point by point after a failed test
//! - A two-point window always validates, guaranteeing progress
//!
//! ## Test Organization
//!
//! 1. **Window Walk** - known reductions
//! 2. **Window Shrinking** - spike handling
//! 3. **Invalid Input** - copy-through behavior

use polysimp::internals::algorithms::lang::lang;

/// A 10-point polyline along the x axis with unit spacing.
fn line_10() -> Vec<f64> {
    (0..10).flat_map(|i| [i as f64, 0.0]).collect()
}

// ============================================================================
// Window Walk Tests
// ============================================================================

/// Test full-window collapses on a collinear polyline.
///
/// Verifies the kept indices for look_ahead=4 over 10 points: 0, 4, 8 and
/// the clamped final window at 9.
#[test]
fn test_lang_collinear_look_ahead_4() {
    let coords = line_10();
    let mut sink = Vec::new();

    let written = lang::<2, f64>(&coords, 1.0, 4, &mut sink);

    assert_eq!(written, 8);
    assert_eq!(sink, vec![0.0, 0.0, 4.0, 0.0, 8.0, 0.0, 9.0, 0.0]);
}

/// Test that a generous look-ahead collapses the whole line.
#[test]
fn test_lang_look_ahead_covers_input() {
    let coords = line_10();
    let mut sink = Vec::new();

    let written = lang::<2, f64>(&coords, 1.0, 20, &mut sink);

    assert_eq!(written, 4);
    assert_eq!(sink, vec![0.0, 0.0, 9.0, 0.0]);
}

/// Test the minimal look-ahead.
///
/// A window of two has no intermediate points, so every point survives.
#[test]
fn test_lang_look_ahead_2_collinear() {
    let coords = [0.0f64, 0.0, 1.0, 0.0, 2.0, 0.0, 3.0, 0.0];
    let mut sink = Vec::new();

    let written = lang::<2, f64>(&coords, 1.0, 2, &mut sink);

    // Windows of two step 0 -> 2 -> 3 with no failures
    assert_eq!(written, 6);
    assert_eq!(sink, vec![0.0, 0.0, 2.0, 0.0, 3.0, 0.0]);
}

// ============================================================================
// Window Shrinking Tests
// ============================================================================

/// Test window shrinking around a spike.
///
/// The spike at index 3 forces two windows to shrink to their smallest
/// size before the walk can pass it.
#[test]
fn test_lang_spike_shrinks_window() {
    // y = [0, 0, 0, 5, 0, 0, 0, 0] with unit x spacing
    let coords = [
        0.0f64, 0.0, 1.0, 0.0, 2.0, 0.0, 3.0, 5.0, 4.0, 0.0, 5.0, 0.0, 6.0, 0.0, 7.0, 0.0,
    ];
    let mut sink = Vec::new();

    let written = lang::<2, f64>(&coords, 1.0, 3, &mut sink);

    // Kept indices: 0, 2, 3, 5, 7
    assert_eq!(written, 10);
    assert_eq!(
        sink,
        vec![0.0, 0.0, 2.0, 0.0, 3.0, 5.0, 5.0, 0.0, 7.0, 0.0]
    );
}

/// Test that a huge tolerance collapses every window fully.
#[test]
fn test_lang_tolerance_dominates() {
    let coords = [
        0.0f64, 0.0, 1.0, 0.0, 2.0, 0.0, 3.0, 5.0, 4.0, 0.0, 5.0, 0.0, 6.0, 0.0, 7.0, 0.0,
    ];
    let mut sink = Vec::new();

    let written = lang::<2, f64>(&coords, 100.0, 3, &mut sink);

    // Kept indices: 0, 3, 6, 7
    assert_eq!(written, 8);
    assert_eq!(sink, vec![0.0, 0.0, 3.0, 5.0, 6.0, 0.0, 7.0, 0.0]);
}

// ============================================================================
// Invalid Input Tests
// ============================================================================

/// Test that a look-ahead below 2 copies unchanged.
#[test]
fn test_lang_look_ahead_too_small() {
    let coords = line_10();
    let mut sink = Vec::new();

    let written = lang::<2, f64>(&coords, 1.0, 1, &mut sink);

    assert_eq!(written, coords.len());
    assert_eq!(sink, coords);
}

/// Test that a non-positive tolerance copies unchanged.
#[test]
fn test_lang_invalid_tolerance() {
    let coords = line_10();
    let mut sink = Vec::new();

    let written = lang::<2, f64>(&coords, -1.0, 4, &mut sink);

    assert_eq!(written, coords.len());
    assert_eq!(sink, coords);
}

/// Test that fewer than three points copy unchanged.
#[test]
fn test_lang_too_few_points() {
    let coords = [0.0f64, 0.0, 1.0, 1.0];
    let mut sink = Vec::new();

    let written = lang::<2, f64>(&coords, 1.0, 4, &mut sink);

    assert_eq!(written, 4);
    assert_eq!(sink, coords);
}

/// Test that a partial point copies unchanged.
#[test]
fn test_lang_incomplete_point() {
    let coords = [0.0f64, 0.0, 1.0, 0.0, 2.0];
    let mut sink = Vec::new();

    let written = lang::<2, f64>(&coords, 1.0, 4, &mut sink);

    assert_eq!(written, 5);
    assert_eq!(sink, coords);
}

/// Test that a zero dimension writes nothing.
#[test]
fn test_lang_zero_dimension() {
    let coords = [0.0f64, 0.0, 1.0, 0.0];
    let mut sink = Vec::new();

    assert_eq!(lang::<0, f64>(&coords, 1.0, 4, &mut sink), 0);
    assert!(sink.is_empty());
}
