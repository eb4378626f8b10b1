//! Layer 3: Algorithms
//!
//! This layer implements the eight polyline simplification routines. Each
//! routine appends the surviving points of its input polyline to an output
//! sink; the engine layer orchestrates them behind the fluent API, but every
//! routine is also callable directly.
//!
//! All routines share one entry contract: a zero dimension produces an empty
//! output, and a malformed slice, a too-short polyline, or an out-of-range
//! parameter produces an unchanged copy of the input.

// Index-based decimation (keep every nth point).
pub mod nth_point;

// Distance to the previously kept point.
pub mod radial_distance;

// Distance to the segment bridging each point's neighbors.
pub mod perpendicular;

// Corridor around the line through the current key.
pub mod reumann_witkam;

// Radially constrained corridor around a ray from the current key.
pub mod opheim;

// Fixed-size search window with shrink-on-failure.
pub mod lang;

// Recursive global error splitting, by tolerance or by target count.
pub mod douglas_peucker;
