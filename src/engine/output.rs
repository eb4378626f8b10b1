//! Output types and result structures for simplification runs.
//!
//! ## Purpose
//!
//! This module defines the `SimplifyResult` struct which encapsulates the
//! output of a simplification run: the surviving coordinates, point counts,
//! the algorithm used, and optional positional error analysis.
//!
//! ## Design notes
//!
//! * **Memory Efficiency**: Optional outputs use `Option<Vec<_>>`.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//! * **Flat storage**: Coordinates stay in the same flat layout as the
//!   input; `points()` reslices them on demand.
//!
//! ## Key concepts
//!
//! * **Optional Outputs**: Errors and statistics are only populated when
//!   requested through the builder, and only when the error scan succeeded.
//! * **Counts**: Input and output point counts are always recorded, so the
//!   reduction is available without re-deriving it from slice lengths.
//!
//! ## Invariants
//!
//! * `coords.len() == output_points * dimension`.
//! * `output_points <= input_points`.
//! * A populated `squared_errors` has exactly `input_points` entries.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not validate result consistency (responsibility of the
//!   engine).
//! * This module does not provide serialization/deserialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::engine::executor::Algorithm;
use crate::evaluation::statistics::ErrorStatistics;
use crate::primitives::numeric::Coordinate;

// ============================================================================
// Result Structure
// ============================================================================

/// Output of a simplification run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimplifyResult<T: Coordinate> {
    /// Surviving coordinates in the input's flat layout.
    pub coords: Vec<T>,

    /// Coordinates per point.
    pub dimension: usize,

    /// Number of points in the input polyline.
    pub input_points: usize,

    /// Number of points in the simplification.
    pub output_points: usize,

    /// Algorithm that produced this result.
    pub algorithm: Algorithm,

    /// Squared positional error of each input point, when requested and the
    /// error scan succeeded.
    pub squared_errors: Option<Vec<T::Calc>>,

    /// Rollup statistics over the positional errors, when requested and the
    /// error scan succeeded.
    pub statistics: Option<ErrorStatistics<T::Calc>>,
}

impl<T: Coordinate> SimplifyResult<T> {
    // ========================================================================
    // Constants
    // ========================================================================

    /// Largest point count printed without elision.
    const PREVIEW_LIMIT: usize = 20;

    /// Points shown at each end of an elided table.
    const PREVIEW_EDGE: usize = 10;

    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Coordinates of one output point.
    pub fn point(&self, index: usize) -> &[T] {
        &self.coords[index * self.dimension..(index + 1) * self.dimension]
    }

    /// Iterator over the output points as coordinate slices.
    pub fn points(&self) -> impl Iterator<Item = &[T]> {
        self.coords.chunks(self.dimension)
    }

    /// Fraction of input points removed, in `[0, 1]`.
    pub fn reduction(&self) -> f64 {
        if self.input_points == 0 {
            return 0.0;
        }
        1.0 - self.output_points as f64 / self.input_points as f64
    }

    /// Check if per-point squared errors were computed.
    pub fn has_errors(&self) -> bool {
        self.squared_errors.is_some()
    }

    /// Check if error statistics were computed.
    pub fn has_statistics(&self) -> bool {
        self.statistics.is_some()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Coordinate + Display> Display for SimplifyResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Algorithm:     {}", self.algorithm)?;
        writeln!(f, "  Dimension:     {}", self.dimension)?;
        writeln!(f, "  Input points:  {}", self.input_points)?;
        writeln!(f, "  Output points: {}", self.output_points)?;
        writeln!(f, "  Reduction:     {:.1}%", self.reduction() * 100.0)?;
        writeln!(f)?;

        if let Some(stats) = &self.statistics {
            writeln!(f, "{}", stats)?;
        }

        writeln!(f, "Simplified Points:")?;

        // Show first and last rows if more than the preview limit
        let n = self.output_points;
        let show_all = n <= Self::PREVIEW_LIMIT;
        let rows_to_show: Vec<usize> = if show_all {
            (0..n).collect()
        } else {
            (0..Self::PREVIEW_EDGE)
                .chain(n - Self::PREVIEW_EDGE..n)
                .collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            // Add ellipsis if we skipped rows
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>6}", "...")?;
            }
            prev_idx = idx;

            write!(f, "{:>6}", idx)?;
            for coord in self.point(idx) {
                write!(f, " {:>12.6}", coord)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
