//! The buffer descriptor of the Vector.

use super::root::{marker, mem, ptr, slice};

/// VectorCore
///
/// The descriptor of a buffer: where the allocation starts, how many values are live, and how many slots were
/// allocated. It performs no allocation nor destruction, and is pure bookkeeping.
///
/// Invariants:
///
/// -   `[first, last)` holds live values.
/// -   `[last, limit)` is allocated, but uninitialized.
/// -   When `first` is null, nothing is allocated and both length and capacity are 0.
pub struct VectorCore<T> {
    first: *mut T,
    length: usize,
    capacity: usize,
    _marker: marker::PhantomData<T>,
}

impl<T> VectorCore<T> {
    /// Creates an empty descriptor, describing no allocation.
    pub const fn new() -> Self {
        Self { first: ptr::null_mut(), length: 0, capacity: 0, _marker: marker::PhantomData }
    }

    /// Creates a descriptor for a fresh allocation of `capacity` slots, none of which is initialized.
    ///
    /// #   Safety
    ///
    /// -   Assumes that `first` points to an allocation of `capacity` slots, or is null if `capacity` is 0.
    pub unsafe fn from_allocation(first: *mut T, capacity: usize) -> Self {
        debug_assert!(first.is_null() == (capacity == 0));

        Self { first, length: 0, capacity, _marker: marker::PhantomData }
    }

    /// Returns a pointer to the start of the allocation.
    pub fn first(&self) -> *mut T { self.first }

    /// Returns a pointer past the last live value.
    pub fn last(&self) -> *mut T { self.first.wrapping_add(self.length) }

    /// Returns a pointer past the end of the allocation.
    pub fn limit(&self) -> *mut T { self.first.wrapping_add(self.capacity) }

    /// Returns a pointer to the slot at `index`, which may be uninitialized.
    ///
    /// #   Safety
    ///
    /// -   Assumes that `index <= capacity`.
    pub unsafe fn at(&self, index: usize) -> *mut T {
        debug_assert!(index <= self.capacity);

        if index == 0 {
            return self.first;
        }

        //  Safety:
        //  -   `index` is within the allocation, per pre-conditions.
        unsafe { self.first.add(index) }
    }

    /// Returns whether the descriptor refers to an allocation.
    pub fn is_allocated(&self) -> bool { !self.first.is_null() }

    /// Returns the number of live values.
    pub fn len(&self) -> usize { self.length }

    /// Returns the number of allocated slots.
    pub fn capacity(&self) -> usize { self.capacity }

    /// Returns the number of allocated, but uninitialized, slots.
    pub fn residual(&self) -> usize { self.capacity - self.length }

    /// Returns whether there is no live value.
    pub fn is_empty(&self) -> bool { self.length == 0 }

    /// Returns whether every allocated slot holds a live value.
    pub fn is_full(&self) -> bool { self.length == self.capacity }

    /// Sets the number of live values.
    ///
    /// #   Safety
    ///
    /// -   Assumes that `length <= capacity`.
    /// -   Assumes that the first `length` slots are initialized.
    pub unsafe fn set_len(&mut self, length: usize) {
        debug_assert!(length <= self.capacity);

        self.length = length;
    }

    /// Resets the descriptor, forgetting about the allocation and its values.
    pub fn reset(&mut self) { *self = Self::new(); }

    /// Takes the descriptor, leaving an empty one in its place.
    pub fn take(&mut self) -> Self { mem::replace(self, Self::new()) }

    /// Swaps the descriptors.
    pub fn swap(&mut self, other: &mut Self) { mem::swap(self, other); }

    /// Returns the live values.
    pub fn as_slice(&self) -> &[T] {
        if self.first.is_null() {
            return &[];
        }

        //  Safety:
        //  -   `[first, last)` holds live values, per invariants.
        unsafe { slice::from_raw_parts(self.first, self.length) }
    }

    /// Returns the live values.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        if self.first.is_null() {
            return &mut [];
        }

        //  Safety:
        //  -   `[first, last)` holds live values, per invariants.
        //  -   Exclusive access, per `&mut self`.
        unsafe { slice::from_raw_parts_mut(self.first, self.length) }
    }
}

impl<T> Default for VectorCore<T> {
    fn default() -> Self { Self::new() }
}
