//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer quantifies how far a simplification strays from its original
//! polyline:
//! - Per-vertex squared positional errors
//! - Rollup statistics (max, sum, mean, standard deviation)
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Per-vertex squared positional error computation.
pub mod positional;

/// Statistics over positional errors.
pub mod statistics;
