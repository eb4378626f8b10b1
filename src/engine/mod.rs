//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer turns a validated configuration into a simplification run. It
//! resolves builder parameters into a concrete method, dispatches to the
//! matching algorithm, and packages the output together with optional error
//! analysis into a result type.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Algorithm selection and dispatch.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for simplification runs.
pub mod output;
