//! Execution engine for polyline simplification.
//!
//! ## Purpose
//!
//! This module provides the types that bridge configuration and algorithms.
//! `Algorithm` names the available routines, `SimplifyConfig` carries the raw
//! builder parameters, `Method` is the validated form with every required
//! parameter present, and `Executor` dispatches a `Method` to the matching
//! algorithm function.
//!
//! ## Design notes
//!
//! * **Resolved before run**: `Method` is produced by the validator, so
//!   dispatch never has to unwrap optional parameters.
//! * **Static dispatch**: The `Method` match is the only branching between
//!   the public API and the per-point loops; the algorithms themselves are
//!   monomorphized over dimension and coordinate type.
//!
//! ## Invariants
//!
//! * Every `Method` value satisfies its algorithm's parameter range.
//! * `Executor::run` appends to the sink and never reads existing content.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not compute positional errors (handled by `evaluation`).
//! * This module does not provide public-facing result formatting.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::algorithms::douglas_peucker::{douglas_peucker, douglas_peucker_count};
use crate::algorithms::lang::lang;
use crate::algorithms::nth_point::nth_point;
use crate::algorithms::opheim::opheim;
use crate::algorithms::perpendicular::perpendicular_distance_repeated;
use crate::algorithms::radial_distance::radial_distance;
use crate::algorithms::reumann_witkam::reumann_witkam;
use crate::primitives::numeric::Coordinate;

// ============================================================================
// Algorithm Selection
// ============================================================================

/// Available simplification algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Keep the first, last, and every nth point.
    NthPoint,

    /// Keep points at least a radial distance apart from the last key.
    RadialDistance,

    /// Drop interior points close to the segment joining their neighbors.
    PerpendicularDistance,

    /// Keep points that leave the corridor around the current key's line.
    ReumannWitkam,

    /// Reumann-Witkam with an additional radial bound per key.
    Opheim,

    /// Collapse look-ahead windows onto their bounding segment.
    Lang,

    /// Recursive splitting at the point farthest from the bounding segment.
    DouglasPeucker,

    /// Douglas-Peucker variant producing a fixed number of points.
    DouglasPeuckerCount,
}

impl Algorithm {
    /// Stable lowercase name, used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NthPoint => "nth_point",
            Self::RadialDistance => "radial_distance",
            Self::PerpendicularDistance => "perpendicular_distance",
            Self::ReumannWitkam => "reumann_witkam",
            Self::Opheim => "opheim",
            Self::Lang => "lang",
            Self::DouglasPeucker => "douglas_peucker",
            Self::DouglasPeuckerCount => "douglas_peucker_count",
        }
    }
}

impl Default for Algorithm {
    fn default() -> Self {
        Self::DouglasPeucker
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Raw configuration for a simplification run.
///
/// Collected by the builder; which fields are required depends on the
/// algorithm. The validator turns this into a [`Method`].
#[derive(Debug, Clone)]
pub struct SimplifyConfig<T> {
    /// Selected algorithm.
    pub algorithm: Algorithm,

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

    /// Perpendicular-distance pass count (defaults to 1).
    pub repeat: Option<usize>,

    /// Douglas-Peucker target point count.
    pub count: Option<usize>,
}

impl<T> Default for SimplifyConfig<T> {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            tolerance: None,
            min_tolerance: None,
            max_tolerance: None,
            step: None,
            look_ahead: None,
            repeat: None,
            count: None,
        }
    }
}

// ============================================================================
// Resolved Method
// ============================================================================

/// A validated algorithm selection with all required parameters present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Method<T> {
    /// Nth-point decimation with step `n >= 2`.
    NthPoint {
        /// Keep every nth point.
        step: usize,
    },

    /// Radial distance with `tolerance > 0`.
    RadialDistance {
        /// Minimum distance between consecutive keys.
        tolerance: T,
    },

    /// Perpendicular distance with `tolerance > 0`, applied `repeat` times.
    PerpendicularDistance {
        /// Maximum point-to-segment distance for a drop.
        tolerance: T,
        /// Number of passes, `>= 1`.
        repeat: usize,
    },

    /// Reumann-Witkam with `tolerance > 0`.
    ReumannWitkam {
        /// Corridor half-width around the key line.
        tolerance: T,
    },

    /// Opheim with both tolerances positive.
    Opheim {
        /// Ray corridor width and ray-definition radius.
        min_tolerance: T,
        /// Radial bound from the current key.
        max_tolerance: T,
    },

    /// Lang with `tolerance > 0` and `look_ahead >= 2`.
    Lang {
        /// Maximum point-to-segment distance inside a window.
        tolerance: T,
        /// Initial window size in points.
        look_ahead: usize,
    },

    /// Douglas-Peucker with `tolerance > 0`.
    DouglasPeucker {
        /// Split threshold on point-to-segment distance.
        tolerance: T,
    },

    /// Fixed-size Douglas-Peucker with `count >= 2`.
    DouglasPeuckerCount {
        /// Number of points to keep, endpoints included.
        count: usize,
    },
}

impl<T> Method<T> {
    /// The algorithm this method resolves.
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::NthPoint { .. } => Algorithm::NthPoint,
            Self::RadialDistance { .. } => Algorithm::RadialDistance,
            Self::PerpendicularDistance { .. } => Algorithm::PerpendicularDistance,
            Self::ReumannWitkam { .. } => Algorithm::ReumannWitkam,
            Self::Opheim { .. } => Algorithm::Opheim,
            Self::Lang { .. } => Algorithm::Lang,
            Self::DouglasPeucker { .. } => Algorithm::DouglasPeucker,
            Self::DouglasPeuckerCount { .. } => Algorithm::DouglasPeuckerCount,
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Dispatches a resolved method to the matching algorithm.
pub struct Executor;

impl Executor {
    /// Run `method` over `coords`, appending surviving coordinates to `sink`.
    ///
    /// Returns the number of coordinates written. Input that the algorithm
    /// contract treats as degenerate (fewer than 3 points, a parameter out
    /// of range relative to the input size) is copied through unchanged.
    pub fn run<const DIM: usize, C: Coordinate>(
        method: &Method<C>,
        coords: &[C],
        sink: &mut Vec<C>,
    ) -> usize {
        match *method {
            Method::NthPoint { step } => nth_point::<DIM, C>(coords, step, sink),
            Method::RadialDistance { tolerance } => {
                radial_distance::<DIM, C>(coords, tolerance, sink)
            }
            Method::PerpendicularDistance { tolerance, repeat } => {
                perpendicular_distance_repeated::<DIM, C>(coords, tolerance, repeat, sink)
            }
            Method::ReumannWitkam { tolerance } => {
                reumann_witkam::<DIM, C>(coords, tolerance, sink)
            }
            Method::Opheim {
                min_tolerance,
                max_tolerance,
            } => opheim::<DIM, C>(coords, min_tolerance, max_tolerance, sink),
            Method::Lang {
                tolerance,
                look_ahead,
            } => lang::<DIM, C>(coords, tolerance, look_ahead, sink),
            Method::DouglasPeucker { tolerance } => {
                douglas_peucker::<DIM, C>(coords, tolerance, sink)
            }
            Method::DouglasPeuckerCount { count } => {
                douglas_peucker_count::<DIM, C>(coords, count, sink)
            }
        }
    }
}
