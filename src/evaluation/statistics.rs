//! Rollup statistics over positional errors.
//!
//! ## Purpose
//!
//! This module condenses the per-vertex squared errors of a simplification
//! run into a single summary: the maximum, sum, mean, and standard deviation
//! of the actual (non-squared) positional errors.
//!
//! ## Design notes
//!
//! * **Accumulator-based**: Statistics are folded through a small running
//!   state so the error list never has to be retained for a second pass.
//! * **Actual distances**: Errors are square-rooted once on entry to the
//!   accumulator; all rollups describe real distances, not squared ones.
//! * **Population variance**: The standard deviation divides by the full
//!   error count, matching a descriptive summary of the whole polyline
//!   rather than a sample estimate.
//!
//! ## Invariants
//!
//! * All fields are non-negative.
//! * An invalid or empty error computation yields all-zero statistics.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::evaluation::positional::positional_errors2;
use crate::primitives::numeric::Coordinate;

// ============================================================================
// Statistics Structure
// ============================================================================

/// Summary statistics over the positional errors of one simplification.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorStatistics<T> {
    /// Largest single positional error.
    pub max: T,

    /// Sum of all positional errors.
    pub sum: T,

    /// Mean positional error.
    pub mean: T,

    /// Population standard deviation of the positional errors.
    pub std_dev: T,
}

impl<T: Float> ErrorStatistics<T> {
    /// Statistics of an empty or invalid error set.
    pub fn zeroed() -> Self {
        Self {
            max: T::zero(),
            sum: T::zero(),
            mean: T::zero(),
            std_dev: T::zero(),
        }
    }
}

/// Cumulative state for folding positional errors into statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsState<T> {
    /// Number of errors recorded.
    pub n: usize,
    /// Largest error seen so far.
    pub max: T,
    /// Sum of errors.
    pub sum: T,
    /// Sum of squared errors.
    pub sum_sq: T,
}

impl<T: Float> Default for StatisticsState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> StatisticsState<T> {
    /// Create a new, empty statistics state.
    pub fn new() -> Self {
        Self {
            n: 0,
            max: T::zero(),
            sum: T::zero(),
            sum_sq: T::zero(),
        }
    }

    /// Record one positional error (an actual distance, not squared).
    pub fn record(&mut self, error: T) {
        self.n += 1;
        self.max = self.max.max(error);
        self.sum = self.sum + error;
        self.sum_sq = self.sum_sq + error * error;
    }

    /// Compute final statistics from the accumulated state.
    pub fn finalize(&self) -> ErrorStatistics<T> {
        if self.n == 0 {
            return ErrorStatistics::zeroed();
        }

        let n_t = T::from(self.n).unwrap_or(T::one());
        let mean = self.sum / n_t;

        // Population variance: E[x^2] - mean^2, clamped against rounding.
        let variance = (self.sum_sq / n_t - mean * mean).max(T::zero());

        ErrorStatistics {
            max: self.max,
            sum: self.sum,
            mean,
            std_dev: variance.sqrt(),
        }
    }
}

// ============================================================================
// Statistics Computation
// ============================================================================

/// Computes positional error statistics of `simplification` against
/// `original`.
///
/// Runs the squared error computation, square-roots each error, and folds
/// the results. When the error computation reports the pair invalid, the
/// partial errors are discarded and zeroed statistics are returned together
/// with the `false` flag.
pub fn positional_error_statistics<const DIM: usize, C: Coordinate>(
    original: &[C],
    simplification: &[C],
) -> (ErrorStatistics<C::Calc>, bool) {
    let mut errors2 = Vec::new();
    let (_, valid) = positional_errors2::<DIM, C>(original, simplification, &mut errors2);
    if !valid {
        return (ErrorStatistics::zeroed(), false);
    }

    let mut state = StatisticsState::new();
    for &error2 in &errors2 {
        state.record(error2.sqrt());
    }

    (state.finalize(), true)
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for ErrorStatistics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Positional error statistics:")?;
        writeln!(f, "  Max:     {:.6}", self.max)?;
        writeln!(f, "  Sum:     {:.6}", self.sum)?;
        writeln!(f, "  Mean:    {:.6}", self.mean)?;
        writeln!(f, "  Std dev: {:.6}", self.std_dev)?;

        Ok(())
    }
}
