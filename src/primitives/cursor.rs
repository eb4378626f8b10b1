//! Point-wise traversal over flat coordinate storage.
//!
//! ## Purpose
//!
//! This module views a flat coordinate slice as a sequence of points, `DIM`
//! scalars at a time, and provides the traversal operations the
//! simplification algorithms are defined in terms of: random access by point
//! index, clamped multi-point advancement, and single-point retreat.
//!
//! ## Design notes
//!
//! * **Clamping**: `PointCursor::advance` never moves past the final point;
//!   it reports how far it actually moved so callers can detect the end of
//!   the sequence.
//! * **Copying**: Points are forwarded to output sinks by coordinate slice,
//!   so a copy is a single `extend_from_slice`.
//!
//! ## Invariants
//!
//! * The wrapped slice length is a multiple of `DIM` and `DIM` is nonzero;
//!   callers validate both before constructing a sequence.
//! * A cursor index always addresses an existing point.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// ============================================================================
// Whole-input copy
// ============================================================================

/// Copies every coordinate to the sink and returns the count copied.
///
/// This is the universal fallback for invalid input: the algorithms answer
/// malformed slices and out-of-range parameters with an unchanged copy, which
/// must work even when the slice is not a whole number of points.
#[inline]
pub fn copy_all<C: Copy>(coords: &[C], sink: &mut Vec<C>) -> usize {
    sink.extend_from_slice(coords);
    coords.len()
}

// ============================================================================
// Point sequence
// ============================================================================

/// A flat coordinate slice viewed as a sequence of `DIM`-dimensional points.
#[derive(Debug, Clone, Copy)]
pub struct PointSeq<'a, C, const DIM: usize> {
    coords: &'a [C],
}

impl<'a, C: Copy, const DIM: usize> PointSeq<'a, C, DIM> {
    /// Wraps a coordinate slice.
    pub fn new(coords: &'a [C]) -> Self {
        debug_assert!(DIM > 0, "point dimension must be nonzero");
        debug_assert!(
            coords.len() % DIM == 0,
            "coordinate count must be a multiple of the dimension"
        );
        Self { coords }
    }

    /// Number of whole points in the sequence.
    #[inline]
    pub fn point_count(&self) -> usize {
        self.coords.len() / DIM
    }

    /// The coordinates of the point at `index`.
    #[inline]
    pub fn point(&self, index: usize) -> &'a [C] {
        &self.coords[index * DIM..(index + 1) * DIM]
    }

    /// Appends the point at `index` to the sink.
    #[inline]
    pub fn push_point(&self, index: usize, sink: &mut Vec<C>) {
        sink.extend_from_slice(self.point(index));
    }
}

// ============================================================================
// Point cursor
// ============================================================================

/// A movable position within a [`PointSeq`].
///
/// Expresses the traversal the window-based algorithms need: advance by up to
/// `n` points, clamped to the end of the sequence, and step back after a
/// failed search window.
#[derive(Debug, Clone, Copy)]
pub struct PointCursor<'a, C, const DIM: usize> {
    seq: PointSeq<'a, C, DIM>,
    index: usize,
}

impl<'a, C: Copy, const DIM: usize> PointCursor<'a, C, DIM> {
    /// Creates a cursor positioned at `index`.
    pub fn at(seq: PointSeq<'a, C, DIM>, index: usize) -> Self {
        debug_assert!(index < seq.point_count(), "cursor index out of range");
        Self { seq, index }
    }

    /// The current point index.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The coordinates of the current point.
    #[inline]
    pub fn point(&self) -> &'a [C] {
        self.seq.point(self.index)
    }

    /// Number of points after the current one.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.seq.point_count() - 1 - self.index
    }

    /// Moves forward by up to `n` points, clamped to the final point.
    ///
    /// Returns the number of points actually moved; zero means the cursor
    /// already sat on the final point.
    #[inline]
    pub fn advance(&mut self, n: usize) -> usize {
        let moved = n.min(self.remaining());
        self.index += moved;
        moved
    }

    /// Moves backward by up to `n` points, clamped to the first point.
    ///
    /// Returns the number of points actually moved.
    #[inline]
    pub fn retreat(&mut self, n: usize) -> usize {
        let moved = n.min(self.index);
        self.index -= moved;
        moved
    }

    /// Appends the current point to the sink.
    #[inline]
    pub fn push_to(&self, sink: &mut Vec<C>) {
        self.seq.push_point(self.index, sink);
    }
}
