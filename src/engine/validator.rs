//! Input and configuration validation.
//!
//! ## Purpose
//!
//! This module checks polyline structure and builder parameters before an
//! algorithm runs. Structural checks reject input the API cannot interpret
//! at all; parameter resolution turns a raw `SimplifyConfig` into a
//! `Method` with every required value present and in range.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Strict at the API boundary**: The core algorithms degrade malformed
//!   input to an unchanged copy; the validator instead reports it, so
//!   builder users get an error rather than a silent no-op.
//!
//! ## Key concepts
//!
//! * **Structural checks**: Non-empty input, positive dimension, whole
//!   points.
//! * **Parameter bounds**: Positive tolerances, `step >= 2`,
//!   `look_ahead >= 2`, `repeat >= 1`, `count >= 2`.
//!
//! ## Invariants
//!
//! * A `Method` returned by `resolve_method` satisfies its algorithm's
//!   parameter table.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not run algorithms or transform input data.
//! * This module does not provide automatic correction of invalid inputs.

// Internal dependencies
use crate::engine::executor::{Algorithm, Method, SimplifyConfig};
use crate::primitives::errors::SimplifyError;
use crate::primitives::numeric::Coordinate;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for simplification configuration and input data.
///
/// Provides static methods returning `Result<(), SimplifyError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate the structure of an input polyline.
    pub fn validate_input<C: Coordinate>(
        coords: &[C],
        dimension: usize,
    ) -> Result<(), SimplifyError> {
        // Check 1: Positive dimension
        if dimension == 0 {
            return Err(SimplifyError::ZeroDimension);
        }

        // Check 2: Non-empty input
        if coords.is_empty() {
            return Err(SimplifyError::EmptyInput);
        }

        // Check 3: Whole number of points
        if coords.len() % dimension != 0 {
            return Err(SimplifyError::IncompletePoint {
                coord_count: coords.len(),
                dimension,
            });
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate a distance tolerance.
    ///
    /// The negated comparison also rejects NaN tolerances.
    pub fn validate_tolerance<T: Coordinate>(tol: T) -> Result<(), SimplifyError> {
        if !(tol > T::zero()) {
            return Err(SimplifyError::InvalidTolerance(
                tol.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the Opheim minimum tolerance.
    pub fn validate_min_tolerance<T: Coordinate>(tol: T) -> Result<(), SimplifyError> {
        if !(tol > T::zero()) {
            return Err(SimplifyError::InvalidMinTolerance(
                tol.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the Opheim maximum tolerance.
    pub fn validate_max_tolerance<T: Coordinate>(tol: T) -> Result<(), SimplifyError> {
        if !(tol > T::zero()) {
            return Err(SimplifyError::InvalidMaxTolerance(
                tol.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the nth-point step.
    pub fn validate_step(step: usize) -> Result<(), SimplifyError> {
        if step < 2 {
            return Err(SimplifyError::InvalidStep(step));
        }
        Ok(())
    }

    /// Validate the Lang look-ahead window size.
    pub fn validate_look_ahead(look_ahead: usize) -> Result<(), SimplifyError> {
        if look_ahead < 2 {
            return Err(SimplifyError::InvalidLookAhead(look_ahead));
        }
        Ok(())
    }

    /// Validate the perpendicular-distance pass count.
    pub fn validate_repeat(repeat: usize) -> Result<(), SimplifyError> {
        if repeat < 1 {
            return Err(SimplifyError::InvalidRepeat(repeat));
        }
        Ok(())
    }

    /// Validate the Douglas-Peucker target point count.
    pub fn validate_count(count: usize) -> Result<(), SimplifyError> {
        if count < 2 {
            return Err(SimplifyError::InvalidCount(count));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), SimplifyError> {
        if let Some(param) = duplicate_param {
            return Err(SimplifyError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }

    // ========================================================================
    // Method Resolution
    // ========================================================================

    /// Resolve a raw configuration into a validated method.
    ///
    /// Requires every parameter the selected algorithm consumes, rejects
    /// out-of-range values, and fills in defaults (`repeat = 1`). Parameters
    /// set for a different algorithm are ignored.
    pub fn resolve_method<T: Coordinate>(
        config: &SimplifyConfig<T>,
    ) -> Result<Method<T>, SimplifyError> {
        let missing = |parameter: &'static str| SimplifyError::MissingParameter {
            algorithm: config.algorithm.name(),
            parameter,
        };

        match config.algorithm {
            Algorithm::NthPoint => {
                let step = config.step.ok_or_else(|| missing("step"))?;
                Self::validate_step(step)?;
                Ok(Method::NthPoint { step })
            }
            Algorithm::RadialDistance => {
                let tolerance = config.tolerance.ok_or_else(|| missing("tolerance"))?;
                Self::validate_tolerance(tolerance)?;
                Ok(Method::RadialDistance { tolerance })
            }
            Algorithm::PerpendicularDistance => {
                let tolerance = config.tolerance.ok_or_else(|| missing("tolerance"))?;
                Self::validate_tolerance(tolerance)?;
                let repeat = config.repeat.unwrap_or(1);
                Self::validate_repeat(repeat)?;
                Ok(Method::PerpendicularDistance { tolerance, repeat })
            }
            Algorithm::ReumannWitkam => {
                let tolerance = config.tolerance.ok_or_else(|| missing("tolerance"))?;
                Self::validate_tolerance(tolerance)?;
                Ok(Method::ReumannWitkam { tolerance })
            }
            Algorithm::Opheim => {
                let min_tolerance = config
                    .min_tolerance
                    .ok_or_else(|| missing("min_tolerance"))?;
                Self::validate_min_tolerance(min_tolerance)?;
                let max_tolerance = config
                    .max_tolerance
                    .ok_or_else(|| missing("max_tolerance"))?;
                Self::validate_max_tolerance(max_tolerance)?;
                Ok(Method::Opheim {
                    min_tolerance,
                    max_tolerance,
                })
            }
            Algorithm::Lang => {
                let tolerance = config.tolerance.ok_or_else(|| missing("tolerance"))?;
                Self::validate_tolerance(tolerance)?;
                let look_ahead = config.look_ahead.ok_or_else(|| missing("look_ahead"))?;
                Self::validate_look_ahead(look_ahead)?;
                Ok(Method::Lang {
                    tolerance,
                    look_ahead,
                })
            }
            Algorithm::DouglasPeucker => {
                let tolerance = config.tolerance.ok_or_else(|| missing("tolerance"))?;
                Self::validate_tolerance(tolerance)?;
                Ok(Method::DouglasPeucker { tolerance })
            }
            Algorithm::DouglasPeuckerCount => {
                let count = config.count.ok_or_else(|| missing("count"))?;
                Self::validate_count(count)?;
                Ok(Method::DouglasPeuckerCount { count })
            }
        }
    }
}
