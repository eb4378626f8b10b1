//! High-level API for polyline simplification.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for the crate.
//! It implements a fluent builder pattern for selecting a simplification
//! algorithm and its parameters, and a configured `Simplifier` that runs the
//! algorithm over flat coordinate slices of any dimension.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder; the algorithm defaults to Douglas-Peucker.
//! * **Validated**: Parameters are checked once in `build()`, so a built
//!   `Simplifier` can be reused across polylines without revalidation.
//! * **Type-Safe**: Generic over coordinate types; the point dimension is a
//!   const generic on `simplify`, chosen at the call site.
//!
//! ## Key concepts
//!
//! * **Configuration Flow**: Builder pattern ending in `.build()`.
//! * **Error analysis**: `return_errors()` and `return_statistics()` attach
//!   positional error data to results.
//! * **Free functions**: The per-algorithm functions are re-exported here
//!   for callers that want sink-based output without the builder.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SimplifyBuilder`] via `Simplify::new()`.
//! 2. Chain configuration methods (`.algorithm()`, `.tolerance()`, etc.).
//! 3. Call `.build()` to validate and obtain a [`Simplifier`].
//! 4. Call `.simplify::<DIM>(&coords)` for each polyline.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{Executor, Method, SimplifyConfig};
use crate::engine::validator::Validator;
use crate::evaluation::statistics::StatisticsState;

// Publicly re-exported types
pub use crate::algorithms::douglas_peucker::{douglas_peucker, douglas_peucker_count};
pub use crate::algorithms::lang::lang;
pub use crate::algorithms::nth_point::nth_point;
pub use crate::algorithms::opheim::opheim;
pub use crate::algorithms::perpendicular::{
    perpendicular_distance, perpendicular_distance_repeated,
};
pub use crate::algorithms::radial_distance::radial_distance;
pub use crate::algorithms::reumann_witkam::reumann_witkam;
pub use crate::engine::executor::Algorithm;
pub use crate::engine::output::SimplifyResult;
pub use crate::evaluation::positional::positional_errors2;
pub use crate::evaluation::statistics::{positional_error_statistics, ErrorStatistics};
pub use crate::primitives::errors::SimplifyError;
pub use crate::primitives::numeric::Coordinate;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring polyline simplification.
#[derive(Debug, Clone)]
pub struct SimplifyBuilder<T> {
    /// Selected algorithm (defaults to Douglas-Peucker).
    pub algorithm: Option<Algorithm>,

    /// Distance tolerance (most algorithms).
    pub tolerance: Option<T>,

    /// Opheim minimum tolerance (ray corridor width).
    pub min_tolerance: Option<T>,

    /// Opheim maximum tolerance (radial bound per key).
    pub max_tolerance: Option<T>,

    /// Nth-point step.
    pub step: Option<usize>,

    /// Lang look-ahead window size.
    pub look_ahead: Option<usize>,

    /// Perpendicular-distance pass count.
    pub repeat: Option<usize>,

    /// Douglas-Peucker target point count.
    pub count: Option<usize>,

    /// Include per-point squared errors in results.
    pub return_errors: Option<bool>,

    /// Include error statistics in results.
    pub return_statistics: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Coordinate> Default for SimplifyBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Coordinate> SimplifyBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            algorithm: None,
            tolerance: None,
            min_tolerance: None,
            max_tolerance: None,
            step: None,
            look_ahead: None,
            repeat: None,
            count: None,
            return_errors: None,
            return_statistics: None,
            duplicate_param: None,
        }
    }

    /// Select the simplification algorithm.
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        if self.algorithm.is_some() {
            self.duplicate_param = Some("algorithm");
        }
        self.algorithm = Some(algorithm);
        self
    }

    /// Set the distance tolerance.
    pub fn tolerance(mut self, tolerance: T) -> Self {
        if self.tolerance.is_some() {
            self.duplicate_param = Some("tolerance");
        }
        self.tolerance = Some(tolerance);
        self
    }

    /// Set the Opheim minimum tolerance.
    pub fn min_tolerance(mut self, tolerance: T) -> Self {
        if self.min_tolerance.is_some() {
            self.duplicate_param = Some("min_tolerance");
        }
        self.min_tolerance = Some(tolerance);
        self
    }

    /// Set the Opheim maximum tolerance.
    pub fn max_tolerance(mut self, tolerance: T) -> Self {
        if self.max_tolerance.is_some() {
            self.duplicate_param = Some("max_tolerance");
        }
        self.max_tolerance = Some(tolerance);
        self
    }

    /// Set the nth-point step.
    pub fn step(mut self, step: usize) -> Self {
        if self.step.is_some() {
            self.duplicate_param = Some("step");
        }
        self.step = Some(step);
        self
    }

    /// Set the Lang look-ahead window size.
    pub fn look_ahead(mut self, look_ahead: usize) -> Self {
        if self.look_ahead.is_some() {
            self.duplicate_param = Some("look_ahead");
        }
        self.look_ahead = Some(look_ahead);
        self
    }

    /// Set the perpendicular-distance pass count (defaults to 1).
    pub fn repeat(mut self, repeat: usize) -> Self {
        if self.repeat.is_some() {
            self.duplicate_param = Some("repeat");
        }
        self.repeat = Some(repeat);
        self
    }

    /// Set the Douglas-Peucker target point count.
    pub fn count(mut self, count: usize) -> Self {
        if self.count.is_some() {
            self.duplicate_param = Some("count");
        }
        self.count = Some(count);
        self
    }

    /// Include per-point squared positional errors in results.
    pub fn return_errors(mut self) -> Self {
        self.return_errors = Some(true);
        self
    }

    /// Include positional error statistics in results.
    pub fn return_statistics(mut self) -> Self {
        self.return_statistics = Some(true);
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Validate the configuration and build a [`Simplifier`].
    pub fn build(self) -> Result<Simplifier<T>, SimplifyError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Resolve the algorithm and its parameters
        let config = SimplifyConfig {
            algorithm: self.algorithm.unwrap_or_default(),
            tolerance: self.tolerance,
            min_tolerance: self.min_tolerance,
            max_tolerance: self.max_tolerance,
            step: self.step,
            look_ahead: self.look_ahead,
            repeat: self.repeat,
            count: self.count,
        };
        let method = Validator::resolve_method(&config)?;

        Ok(Simplifier {
            method,
            return_errors: self.return_errors.unwrap_or(false),
            return_statistics: self.return_statistics.unwrap_or(false),
        })
    }
}

// ============================================================================
// Simplifier
// ============================================================================

/// A validated, reusable simplification model.
pub struct Simplifier<T: Coordinate> {
    method: Method<T>,
    return_errors: bool,
    return_statistics: bool,
}

impl<T: Coordinate> Simplifier<T> {
    /// Simplify a polyline of `DIM`-dimensional points.
    ///
    /// `coords` is a flat slice, `DIM` scalars per point. Input the algorithm
    /// contract treats as degenerate (fewer than 3 points, or a parameter out
    /// of range relative to the input size, such as a Douglas-Peucker count
    /// of at least the input point count) is returned unchanged.
    pub fn simplify<const DIM: usize>(
        &self,
        coords: &[T],
    ) -> Result<SimplifyResult<T>, SimplifyError> {
        Validator::validate_input(coords, DIM)?;

        let input_points = coords.len() / DIM;
        let mut output = Vec::with_capacity(coords.len());
        let written = Executor::run::<DIM, T>(&self.method, coords, &mut output);
        let output_points = written / DIM;

        // Optional positional error analysis against the original. The scan
        // can only fail here if the input repeats points exactly; in that
        // case both outputs stay None.
        let mut squared_errors = None;
        let mut statistics = None;
        if self.return_errors || self.return_statistics {
            let mut errors = Vec::with_capacity(input_points);
            let (_, valid) = positional_errors2::<DIM, T>(coords, &output, &mut errors);
            if valid {
                if self.return_statistics {
                    let mut state = StatisticsState::new();
                    for &error2 in &errors {
                        state.record(error2.sqrt());
                    }
                    statistics = Some(state.finalize());
                }
                if self.return_errors {
                    squared_errors = Some(errors);
                }
            }
        }

        Ok(SimplifyResult {
            coords: output,
            dimension: DIM,
            input_points,
            output_points,
            algorithm: self.method.algorithm(),
            squared_errors,
            statistics,
        })
    }
}
