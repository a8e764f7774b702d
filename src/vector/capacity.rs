//! The Vector capacity.
//!
//! Assembles the growth policy, and the computation of the memory layout of a given capacity.

use super::root::{cmp, mem};

use super::allocator::Layout;
use super::failure::{Failure, Result};

/// The capacity of the first allocation made by appending to an empty `Vector`.
pub const INITIAL_CAPACITY: usize = 4;

//  Returns the capacity to grow to, when appending to a full buffer of `capacity` slots.
//
//  Doubling guarantees an amortized O(1) append. The result saturates, the allocation then fails with
//  `BytesOverflow`.
pub fn next_capacity(capacity: usize) -> usize {
    if capacity == 0 {
        INITIAL_CAPACITY
    } else {
        capacity.saturating_mul(2)
    }
}

//  Returns the capacity to grow to, when inserting `extra` values into a buffer of `length` values out of `capacity`
//  slots.
//
//  #   Errors
//
//  Returns `ElementsOverflow` if `length + extra` overflows.
pub fn grown_capacity(length: usize, capacity: usize, extra: usize) -> Result<usize> {
    let required = length.checked_add(extra).ok_or(Failure::ElementsOverflow)?;

    Ok(cmp::max(next_capacity(capacity), required))
}

//  Computes the layout for a given capacity.
//
//  #   Errors
//
//  Returns `BytesOverflow` if the necessary size overflows, or exceeds `isize::MAX`.
pub fn allocation_layout<T>(capacity: usize) -> Result<Layout> {
    let size = mem::size_of::<T>();
    let alignment = mem::align_of::<T>();

    let bytes = capacity.checked_mul(size).ok_or(Failure::BytesOverflow)?;

    Layout::from_size_align(bytes, alignment).map_err(|_| Failure::BytesOverflow)
}
