//! # polysimp — Polyline Simplification for Rust
//!
//! Generic n-dimensional polyline simplification and positional error
//! evaluation for **Rust**, from embedded targets to servers.
//!
//! ## What is polyline simplification?
//!
//! A polyline is a sequence of vertices connected by straight segments: a
//! GPS trace, a digitized coastline, a sensor trajectory. Simplification
//! removes vertices while keeping the shape of the line, trading fidelity
//! for size. This crate implements the classic simplification algorithms:
//!
//! - **Nth point** — keep every nth vertex (fast, crude)
//! - **Radial distance** — drop vertices within a tolerance of the last kept vertex
//! - **Perpendicular distance** — drop vertices close to the local segment,
//!   optionally repeated for a stronger reduction
//! - **Reumann-Witkam** — corridor along the current direction
//! - **Opheim** — corridor constrained by a minimum and a maximum tolerance
//! - **Lang** — look-ahead search over fixed-size windows
//! - **Douglas-Peucker** — global distance-based refinement (best quality)
//! - **Douglas-Peucker by count** — refine until a vertex budget is met
//!
//! All routines are generic over the coordinate scalar (integer or float)
//! and over the dimension, so the same code simplifies 2D map traces and
//! 5D feature curves.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use polysimp::prelude::*;
//!
//! // A sawtooth polyline: 11 points, two scalars per point.
//! let polyline = vec![
//!     0.0, 0.0, 10.0, 1.0, 20.0, 0.0, 30.0, 2.0, 40.0, 0.0, 50.0, 3.0,
//!     60.0, 0.0, 70.0, 4.0, 80.0, 0.0, 90.0, 5.0, 100.0, 0.0,
//! ];
//!
//! // Build the model
//! let model = Simplify::new()
//!     .algorithm(DouglasPeucker)
//!     .tolerance(4.1)
//!     .build()?;
//!
//! // Simplify the polyline; the const parameter is the dimension
//! let result = model.simplify::<2>(&polyline)?;
//!
//! assert_eq!(result.input_points, 11);
//! assert_eq!(result.output_points, 4);
//! println!("{}", result);
//! # Result::<(), SimplifyError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Algorithm:     douglas_peucker
//!   Dimension:     2
//!   Input points:  11
//!   Output points: 4
//!   Reduction:     63.6%
//!
//! Simplified Points:
//!      0     0.000000     0.000000
//!      1    80.000000     0.000000
//!      2    90.000000     5.000000
//!      3   100.000000     0.000000
//! ```
//!
//! ### Low-Level Routines
//!
//! Every algorithm is also exposed as a free function that writes into a
//! caller-supplied sink, for callers that manage their own buffers:
//!
//! ```rust
//! use polysimp::prelude::*;
//!
//! let polyline = vec![0.0, 0.0, 10.0, 0.0, 20.0, 0.0, 30.0, 0.0];
//! let mut simplified: Vec<f64> = Vec::new();
//!
//! let written = nth_point::<2, f64>(&polyline, 2, &mut simplified);
//!
//! assert_eq!(written, 6);
//! assert_eq!(simplified, vec![0.0, 0.0, 20.0, 0.0, 30.0, 0.0]);
//! ```
//!
//! ### Positional Error Analysis
//!
//! Ask the builder for squared positional errors or summary statistics to
//! judge how far the simplification strays from the original:
//!
//! ```rust
//! use polysimp::prelude::*;
//!
//! let polyline = vec![0.0, 0.0, 1.0, 0.9, 2.0, 0.0, 3.0, 1.1, 4.0, 0.0];
//!
//! let model = Simplify::new()
//!     .algorithm(PerpendicularDistance)
//!     .tolerance(2.0)
//!     .return_statistics()
//!     .build()?;
//!
//! let result = model.simplify::<2>(&polyline)?;
//! if let Some(stats) = &result.statistics {
//!     println!("{}", stats);
//! }
//! # Result::<(), SimplifyError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! The `simplify` method returns a `Result<SimplifyResult<T>, SimplifyError>`.
//!
//! - **`Ok(SimplifyResult<T>)`**: Contains the simplified polyline and any
//!   requested error analysis.
//! - **`Err(SimplifyError)`**: Indicates a failure (e.g., a missing
//!   parameter, an incomplete final point).
//!
//! The `?` operator is idiomatic, but you can also handle results
//! explicitly:
//!
//! ```rust
//! use polysimp::prelude::*;
//!
//! let result = Simplify::<f64>::new()
//!     .algorithm(Lang)
//!     .tolerance(1.0)
//!     .build();
//!
//! match result {
//!     Ok(_) => unreachable!("lang requires a look_ahead window"),
//!     Err(e) => println!("configuration error: {}", e),
//! }
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments for embedded devices and
//! resource-constrained systems. Disable default features to remove the
//! standard library dependency:
//!
//! ```toml
//! [dependencies]
//! polysimp = { version = "0.1", default-features = false }
//! ```
//!
//! The full API, including the builder and the error analysis, is
//! available without `std`.
//!
//! **Tips for embedded/no_std usage:**
//! - Use `f32` coordinates instead of `f64` to reduce memory footprint
//! - Pre-allocate sinks with `Vec::with_capacity` and reuse them across runs
//! - Prefer the single-pass algorithms (radial distance, Reumann-Witkam)
//!   when latency matters more than quality
//!
//! ## References
//!
//! - Douglas, D. H. and Peucker, T. K. (1973). "Algorithms for the reduction
//!   of the number of points required to represent a digitized line or its
//!   caricature"
//! - Lang, T. (1969). "Rules for the robot draughtsmen"
//! - Opheim, H. (1982). "Fast data reduction of a digitized curve"
//! - Reumann, K. and Witkam, A. P. M. (1974). "Optimizing curve segmentation
//!   in computer graphics"
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure vector and distance functions.
mod math;

// Layer 3: Algorithms - core simplification routines.
mod algorithms;

// Layer 4: Evaluation - positional error analysis.
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
mod engine;

// High-level fluent API for polyline simplification.
mod api;

// Standard simplification prelude.
pub mod prelude {
    pub use crate::api::{
        douglas_peucker, douglas_peucker_count, lang, nth_point, opheim,
        perpendicular_distance, perpendicular_distance_repeated, positional_error_statistics,
        positional_errors2, radial_distance, reumann_witkam, Algorithm,
        Algorithm::{
            DouglasPeucker, DouglasPeuckerCount, Lang, NthPoint, Opheim, PerpendicularDistance,
            RadialDistance, ReumannWitkam,
        },
        Coordinate, ErrorStatistics, SimplifyBuilder as Simplify, SimplifyError, SimplifyResult,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
