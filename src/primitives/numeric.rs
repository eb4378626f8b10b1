//! Coordinate scalar abstraction.
//!
//! ## Purpose
//!
//! This module defines the numeric contract for polyline coordinates. A
//! polyline is stored as a flat slice of scalars, and every algorithm in the
//! crate is generic over that scalar type: `f64` for geographic work, `f32`
//! for rendering pipelines, integral types for quantized or device
//! coordinates.
//!
//! ## Design notes
//!
//! * **Promotion**: Distance computations that divide (line, ray, and segment
//!   projections) run in an associated floating-point type and therefore stay
//!   exact enough for integral inputs. Purely additive computations
//!   (point-to-point distance) stay in the coordinate type itself.
//! * **Unsigned types**: Not supported. Coordinate differences are signed;
//!   an unsigned scalar would underflow on the first subtraction.
//!
//! ## Key concepts
//!
//! * **Coordinate**: the scalar stored in a polyline.
//! * **Calc**: the promoted type used for division-bearing math.

// External dependencies
use core::fmt::{Debug, Display};
use num_traits::{Float, Num, NumCast, Zero};

// ============================================================================
// Coordinate trait
// ============================================================================

/// Numeric contract for polyline coordinate scalars.
///
/// Implemented for `f32`, `f64`, `i8`, `i16`, `i32`, and `i64`. Floating
/// point types promote to themselves; narrow integral types promote to `f32`
/// and wide ones to `f64`.
pub trait Coordinate: Copy + PartialOrd + Num + NumCast {
    /// Promoted floating-point type used for division-bearing math.
    type Calc: Float + Debug + Display;

    /// Converts this coordinate to the calculation type.
    ///
    /// The conversion cannot fail for the supported implementations; the
    /// zero fallback exists only to keep the cast total.
    #[inline]
    fn to_calc(self) -> Self::Calc {
        <Self::Calc as NumCast>::from(self).unwrap_or_else(Self::Calc::zero)
    }
}

impl Coordinate for f32 {
    type Calc = f32;

    #[inline]
    fn to_calc(self) -> f32 {
        self
    }
}

impl Coordinate for f64 {
    type Calc = f64;

    #[inline]
    fn to_calc(self) -> f64 {
        self
    }
}

impl Coordinate for i8 {
    type Calc = f32;
}

impl Coordinate for i16 {
    type Calc = f32;
}

impl Coordinate for i32 {
    type Calc = f64;
}

impl Coordinate for i64 {
    type Calc = f64;
}
