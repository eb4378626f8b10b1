#![cfg(feature = "dev")]
//! Tests for the simplification result type.
//!
//! These tests verify the container returned by a simplification run:
//! - Point access over the flat coordinate layout
//! - The reduction ratio
//! - Optional error and statistics payloads
//! - The human-readable summary, including table elision
//!
//! ## Test Organization
//!
//! 1. **Query Tests** - point access, reduction, payload flags
//! 2. **Display Tests** - formatted summary output

use approx::assert_abs_diff_eq;

use polysimp::internals::engine::executor::Algorithm;
use polysimp::internals::engine::output::SimplifyResult;
use polysimp::internals::evaluation::statistics::ErrorStatistics;

/// A plain result with no error analysis attached.
fn bare_result(coords: Vec<f64>, dimension: usize, input_points: usize) -> SimplifyResult<f64> {
    let output_points = coords.len() / dimension;
    SimplifyResult {
        coords,
        dimension,
        input_points,
        output_points,
        algorithm: Algorithm::DouglasPeucker,
        squared_errors: None,
        statistics: None,
    }
}

// ============================================================================
// Query Tests
// ============================================================================

/// Test indexed point access.
///
/// Verifies that `point` reslices the flat storage by dimension.
#[test]
fn test_result_point_access() {
    let result = bare_result(vec![0.0, 0.0, 80.0, 0.0, 90.0, 5.0, 100.0, 0.0], 2, 11);

    assert_eq!(result.output_points, 4);
    assert_eq!(result.point(0), &[0.0, 0.0]);
    assert_eq!(result.point(2), &[90.0, 5.0]);
    assert_eq!(result.point(3), &[100.0, 0.0]);
}

/// Test point iteration.
#[test]
fn test_result_points_iterator() {
    let result = bare_result(vec![0.0, 0.0, 1.0, 1.0, 1.0, 2.0, 0.0, 0.0, 3.0], 3, 5);

    let points: Vec<&[f64]> = result.points().collect();
    assert_eq!(points.len(), 3);
    assert_eq!(points[0], &[0.0, 0.0, 1.0]);
    assert_eq!(points[1], &[1.0, 1.0, 2.0]);
    assert_eq!(points[2], &[0.0, 0.0, 3.0]);
}

/// Test the reduction ratio.
///
/// Verifies the removed fraction, the all-kept case, and the guarded
/// zero-input case.
#[test]
fn test_result_reduction() {
    let result = bare_result(vec![0.0, 0.0, 80.0, 0.0, 90.0, 5.0, 100.0, 0.0], 2, 11);
    assert_abs_diff_eq!(result.reduction(), 7.0 / 11.0, epsilon = 1e-12);

    let unchanged = bare_result(vec![0.0, 0.0, 1.0, 0.0], 2, 2);
    assert_eq!(unchanged.reduction(), 0.0);

    let empty = bare_result(Vec::new(), 2, 0);
    assert_eq!(empty.reduction(), 0.0);
}

/// Test the optional payload flags.
#[test]
fn test_result_payload_flags() {
    let bare = bare_result(vec![0.0, 0.0, 1.0, 0.0], 2, 3);
    assert!(!bare.has_errors());
    assert!(!bare.has_statistics());

    let mut analyzed = bare_result(vec![0.0, 0.0, 2.0, 0.0], 2, 3);
    analyzed.squared_errors = Some(vec![0.0, 1.0, 0.0]);
    analyzed.statistics = Some(ErrorStatistics::zeroed());
    assert!(analyzed.has_errors());
    assert!(analyzed.has_statistics());
    assert_eq!(analyzed.squared_errors.as_deref(), Some(&[0.0, 1.0, 0.0][..]));
}

// ============================================================================
// Display Tests
// ============================================================================

/// Test the summary block.
///
/// Verifies the header lines and the fixed-precision point table for a
/// small result.
#[test]
fn test_result_display_summary() {
    let result = bare_result(vec![0.0, 0.0, 80.0, 0.0, 90.0, 5.0, 100.0, 0.0], 2, 11);

    let text = format!("{result}");

    assert!(text.contains("Summary:"));
    assert!(text.contains("  Algorithm:     douglas_peucker"));
    assert!(text.contains("  Dimension:     2"));
    assert!(text.contains("  Input points:  11"));
    assert!(text.contains("  Output points: 4"));
    assert!(text.contains("  Reduction:     63.6%"));
    assert!(text.contains("Simplified Points:"));
    assert!(text.contains("     0     0.000000     0.000000"));
    assert!(text.contains("     2    90.000000     5.000000"));
    assert!(!text.contains("..."));
}

/// Test that attached statistics are printed between the summary and the
/// point table.
#[test]
fn test_result_display_with_statistics() {
    let mut result = bare_result(vec![0.0, 0.0, 2.0, 0.0], 2, 3);
    result.statistics = Some(ErrorStatistics {
        max: 1.0,
        sum: 1.0,
        mean: 1.0 / 3.0,
        std_dev: 2.0f64.sqrt() / 3.0,
    });

    let text = format!("{result}");

    assert!(text.contains("Positional error statistics:"));
    assert!(text.contains("  Max:     1.000000"));

    let stats_at = text.find("Positional error statistics:").unwrap();
    let table_at = text.find("Simplified Points:").unwrap();
    assert!(stats_at < table_at);
}

/// Test table elision on long results.
///
/// Verifies that only ten rows from each end are printed, joined with an
/// ellipsis row, and that interior rows are dropped.
#[test]
fn test_result_display_elides_long_tables() {
    let coords: Vec<f64> = (0..30).flat_map(|i| [i as f64, 0.0]).collect();
    let result = bare_result(coords, 2, 60);

    let text = format!("{result}");

    assert!(text.contains("   ..."));
    // Last row of the leading edge and first row of the trailing edge
    assert!(text.contains("     9     9.000000     0.000000"));
    assert!(text.contains("    20    20.000000     0.000000"));
    assert!(text.contains("    29    29.000000     0.000000"));
    // Interior rows are elided
    assert!(!text.contains("    10    10.000000"));
    assert!(!text.contains("    19    19.000000"));
}

/// Test that a twenty-point result still prints in full.
#[test]
fn test_result_display_preview_boundary() {
    let coords: Vec<f64> = (0..20).flat_map(|i| [i as f64, 0.0]).collect();
    let result = bare_result(coords, 2, 20);

    let text = format!("{result}");

    assert!(!text.contains("..."));
    assert!(text.contains("    10    10.000000     0.000000"));
}
