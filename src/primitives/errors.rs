//! Error types for simplification operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions reported by the high-level API:
//! structural problems with the input polyline and configuration mistakes in
//! the builder. The core algorithms themselves never error; malformed input
//! there degrades to an unchanged copy by contract.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (e.g., the coordinate
//!   count that failed to divide by the dimension).
//! * **No-std**: Built entirely on `core`; `std::error::Error` is implemented
//!   when the `std` feature is enabled.
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty slices, zero dimension, partial points.
//! 2. **Parameter validation**: Out-of-range tolerances, steps, and counts.
//! 3. **Builder misuse**: Missing or repeated parameters.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for simplification operations.
#[derive(Debug, Clone, PartialEq)]
pub enum SimplifyError {
    /// Input slice is empty; simplification requires at least one point.
    EmptyInput,

    /// Point dimension must be at least 1.
    ZeroDimension,

    /// Coordinate count must be a whole number of points.
    IncompletePoint {
        /// Number of coordinates provided.
        coord_count: usize,
        /// Coordinates per point.
        dimension: usize,
    },

    /// The selected algorithm needs a parameter that was never set.
    MissingParameter {
        /// Name of the algorithm.
        algorithm: &'static str,
        /// Name of the missing parameter.
        parameter: &'static str,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// Distance tolerance must be positive.
    InvalidTolerance(f64),

    /// Opheim minimum tolerance must be positive.
    InvalidMinTolerance(f64),

    /// Opheim maximum tolerance must be positive.
    InvalidMaxTolerance(f64),

    /// Nth-point step must be at least 2.
    InvalidStep(usize),

    /// Lang look-ahead must be at least 2.
    InvalidLookAhead(usize),

    /// Perpendicular-distance repeat count must be at least 1.
    InvalidRepeat(usize),

    /// Douglas-Peucker target point count must be at least 2.
    InvalidCount(usize),
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SimplifyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input polyline is empty"),
            Self::ZeroDimension => write!(f, "Point dimension must be at least 1"),
            Self::IncompletePoint {
                coord_count,
                dimension,
            } => {
                write!(
                    f,
                    "Incomplete point: {coord_count} coordinates is not a multiple of dimension {dimension}"
                )
            }
            Self::MissingParameter {
                algorithm,
                parameter,
            } => {
                write!(f, "Algorithm '{algorithm}' requires parameter '{parameter}'")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {tol} (must be > 0)")
            }
            Self::InvalidMinTolerance(tol) => {
                write!(f, "Invalid min_tolerance: {tol} (must be > 0)")
            }
            Self::InvalidMaxTolerance(tol) => {
                write!(f, "Invalid max_tolerance: {tol} (must be > 0)")
            }
            Self::InvalidStep(step) => {
                write!(f, "Invalid step: {step} (must be at least 2)")
            }
            Self::InvalidLookAhead(look_ahead) => {
                write!(f, "Invalid look_ahead: {look_ahead} (must be at least 2)")
            }
            Self::InvalidRepeat(repeat) => {
                write!(f, "Invalid repeat: {repeat} (must be at least 1)")
            }
            Self::InvalidCount(count) => {
                write!(f, "Invalid count: {count} (must be at least 2)")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SimplifyError {}
