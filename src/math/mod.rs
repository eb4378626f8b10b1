//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure vector mathematics used throughout the crate:
//! - Elementwise point/vector arithmetic
//! - Squared distances from a point to a point, line, ray, or segment
//!
//! These are reusable building blocks with no algorithm-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// N-dimensional vector arithmetic and squared-distance functions.
pub mod vector;
