#![cfg(feature = "dev")]
//! Tests for scratch buffer management.
//!
//! These tests verify the temporary storage used by multi-pass algorithms:
//! - Slot capacity and clearing behavior
//! - SwapBuffer front/back alternation
//! - Split borrows for read-one-write-other passes
//!
//! ## Test Organization
//!
//! 1. **Slot** - construction, clearing, vector access
//! 2. **SwapBuffer** - pass alternation

use polysimp::internals::primitives::buffer::{Slot, SwapBuffer};

// ============================================================================
// Slot Tests
// ============================================================================

/// Test slot construction with reserved capacity.
#[test]
fn test_slot_new_capacity() {
    let slot: Slot<f64> = Slot::new(16);

    assert!(slot.is_empty());
    assert!(slot.capacity() >= 16);
}

/// Test that clearing preserves capacity.
#[test]
fn test_slot_clear_preserves_capacity() {
    let mut slot: Slot<f64> = Slot::new(8);
    slot.as_vec_mut().extend_from_slice(&[1.0, 2.0, 3.0]);
    let capacity = slot.capacity();

    slot.clear();

    assert!(slot.is_empty());
    assert_eq!(slot.capacity(), capacity);
}

/// Test deref access to the underlying vector.
#[test]
fn test_slot_deref() {
    let mut slot: Slot<i32> = Slot::default();
    slot.push(1);
    slot.push(2);

    assert_eq!(slot.len(), 2);
    assert_eq!(slot.as_vec().as_slice(), &[1, 2]);
    assert_eq!(&slot[..], &[1, 2]);
}

/// Test conversion from an existing vector.
#[test]
fn test_slot_from_vec() {
    let slot: Slot<f64> = vec![1.0, 2.0].into();

    assert_eq!(&slot[..], &[1.0, 2.0]);
}

// ============================================================================
// SwapBuffer Tests
// ============================================================================

/// Test seeding the first pass input.
#[test]
fn test_swap_buffer_seed_front() {
    let mut buffer: SwapBuffer<f64> = SwapBuffer::with_capacity(8);
    buffer.front_mut().extend_from_slice(&[1.0, 2.0]);

    assert_eq!(buffer.front(), &[1.0, 2.0]);
    assert!(buffer.back().is_empty());
}

/// Test the split borrow used by reduction passes.
///
/// Verifies that parts() exposes the front as input and a cleared back as
/// output.
#[test]
fn test_swap_buffer_parts() {
    let mut buffer: SwapBuffer<f64> = SwapBuffer::with_capacity(4);
    buffer.front_mut().extend_from_slice(&[1.0, 2.0, 3.0]);

    {
        let (input, output) = buffer.parts();
        assert_eq!(input, &[1.0, 2.0, 3.0]);
        assert!(output.is_empty());
        output.push(input[0]);
        output.push(input[2]);
    }

    assert_eq!(buffer.back(), &[1.0, 3.0]);
}

/// Test that parts() clears stale pass output.
#[test]
fn test_swap_buffer_parts_clears_back() {
    let mut buffer: SwapBuffer<f64> = SwapBuffer::with_capacity(4);
    buffer.front_mut().push(1.0);

    {
        let (_, output) = buffer.parts();
        output.push(5.0);
    }
    buffer.swap();

    // The stale output from the previous pass must not leak into this one.
    let (input, output) = buffer.parts();
    assert_eq!(input, &[5.0]);
    assert!(output.is_empty());
}

/// Test pass promotion through swapping.
///
/// Verifies that the output of one pass becomes the input of the next.
#[test]
fn test_swap_buffer_swap_promotes() {
    let mut buffer: SwapBuffer<i32> = SwapBuffer::with_capacity(4);
    buffer.front_mut().extend_from_slice(&[1, 2, 3]);

    {
        let (_, output) = buffer.parts();
        output.extend_from_slice(&[1, 3]);
    }
    buffer.swap();

    assert_eq!(buffer.front(), &[1, 3]);
    assert_eq!(buffer.back(), &[1, 2, 3]);
}
