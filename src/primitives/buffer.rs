//! Scratch buffer management for simplification passes.
//!
//! ## Purpose
//!
//! This module provides the temporary storage used by algorithms that
//! materialize an intermediate polyline: the Douglas-Peucker preprocessing
//! step and the repeated perpendicular-distance passes. Buffers are allocated
//! once per call, sized to the input, and dropped on every exit path.
//!
//! ## Design notes
//!
//! * **Exclusive ownership**: Every buffer belongs to exactly one call; the
//!   routines here are reentrant because nothing is shared or cached.
//! * **Capacity reuse**: A pass output never exceeds its input, so one
//!   up-front reservation covers all passes of a repeated run.
//!
//! ## Key concepts
//!
//! * **Slot**: A reusable vector wrapper with capacity management.
//! * **SwapBuffer**: A front/back pair of slots for multi-pass algorithms;
//!   the output of one pass becomes the input of the next by swapping.

// Feature-gated dependencies
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::mem;
use core::ops::{Deref, DerefMut};

// ============================================================================
// Slot - Unified Vector Abstraction
// ============================================================================

/// A reusable vector slot with capacity management.
#[derive(Debug, Clone)]
pub struct Slot<T>(Vec<T>);

impl<T> Slot<T> {
    /// Create a new slot with the given initial capacity.
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Clear the slot (sets length to 0, preserves capacity).
    #[inline]
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Get a reference to the underlying vector.
    #[inline]
    pub fn as_vec(&self) -> &Vec<T> {
        &self.0
    }

    /// Get a mutable reference to the underlying vector.
    #[inline]
    pub fn as_vec_mut(&mut self) -> &mut Vec<T> {
        &mut self.0
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> Deref for Slot<T> {
    type Target = Vec<T>;
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Slot<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> From<Vec<T>> for Slot<T> {
    fn from(v: Vec<T>) -> Self {
        Self(v)
    }
}

// ============================================================================
// SwapBuffer - Alternating Pass Storage
// ============================================================================

/// A pair of slots for algorithms that run multiple reduction passes.
///
/// Each pass reads the front slot and writes the back slot; `swap` then
/// promotes the pass output to be the next input without copying.
#[derive(Debug, Clone)]
pub struct SwapBuffer<T> {
    front: Slot<T>,
    back: Slot<T>,
}

impl<T> SwapBuffer<T> {
    /// Create a buffer pair, each side reserved for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            front: Slot::new(capacity),
            back: Slot::new(capacity),
        }
    }

    /// The current pass input.
    #[inline]
    pub fn front(&self) -> &[T] {
        &self.front
    }

    /// Mutable access to the pass input slot (used to seed the first pass).
    #[inline]
    pub fn front_mut(&mut self) -> &mut Vec<T> {
        self.front.as_vec_mut()
    }

    /// The most recent pass output.
    #[inline]
    pub fn back(&self) -> &[T] {
        &self.back
    }

    /// Split borrow: pass input alongside a cleared pass output.
    #[inline]
    pub fn parts(&mut self) -> (&[T], &mut Vec<T>) {
        self.back.clear();
        (&self.front.0, &mut self.back.0)
    }

    /// Promote the back slot to be the next pass input.
    #[inline]
    pub fn swap(&mut self) {
        mem::swap(&mut self.front, &mut self.back);
    }
}
