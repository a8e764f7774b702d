//! Uninitialized memory algorithms.
//!
//! These algorithms bridge raw storage and live values: they construct values into uninitialized memory, or destroy
//! values while leaving their memory allocated. Construction and destruction are delegated to the `Allocator` hooks.
//!
//! When constructing a value panics, the values constructed so far by the algorithm are destroyed before the panic
//! resumes, so that the destination contains no live value afterwards. The destination memory itself is never
//! released, this is left to the caller.
//!
//! Moving values is a bitwise relocation, which cannot fail: `uninitialized_move` has nothing to roll back.

use super::root::{mem, ptr};

use super::allocator::Allocator;

/// Clones each value of `source` into the uninitialized memory starting at `result`.
///
/// Returns a pointer past the last value constructed.
///
/// #   Panics
///
/// If a clone panics, the values already constructed are destroyed before resuming the panic.
///
/// #   Safety
///
/// -   Assumes that `[result, result + source.len())` is valid for writes, and uninitialized.
pub unsafe fn uninitialized_copy<T, A>(allocator: &A, source: &[T], result: *mut T) -> *mut T
where
    T: Clone,
    A: Allocator,
{
    let mut partial = PartialConstruction::new(allocator, result);

    for value in source {
        //  Safety:
        //  -   `partial.current` is within the destination, per pre-conditions.
        unsafe { partial.construct(value.clone()) };
    }

    partial.complete()
}

/// Relocates the values of `[first, last)` into the uninitialized memory starting at `result`.
///
/// Returns a pointer past the last value relocated. Afterwards, `[first, last)` is uninitialized.
///
/// The ranges may overlap.
///
/// #   Safety
///
/// -   Assumes that `[first, last)` is a range of initialized values.
/// -   Assumes that `[result, result + (last - first))` is valid for writes.
pub unsafe fn uninitialized_move<T>(first: *mut T, last: *mut T, result: *mut T) -> *mut T {
    //  Safety:
    //  -   Both pointers are within the same range, per pre-conditions.
    let count = unsafe { distance(first, last) };

    if count == 0 {
        return result;
    }

    //  Safety:
    //  -   The source is initialized, and the destination writable, per pre-conditions.
    unsafe {
        ptr::copy(first, result, count);
        result.add(count)
    }
}

/// Initializes each slot of `[first, last)` with a clone of `value`.
///
/// #   Panics
///
/// If a clone panics, the values already constructed are destroyed before resuming the panic.
///
/// #   Safety
///
/// -   Assumes that `[first, last)` is valid for writes, and uninitialized.
pub unsafe fn uninitialized_fill<T, A>(allocator: &A, first: *mut T, last: *mut T, value: &T)
where
    T: Clone,
    A: Allocator,
{
    //  Safety:
    //  -   Both pointers are within the same range, per pre-conditions.
    let count = unsafe { distance(first, last) };

    //  Safety:
    //  -   Forwarding.
    unsafe { uninitialized_fill_n(allocator, first, count, value) };
}

/// Initializes each slot of `[first, first + n)` with a clone of `value`.
///
/// Returns `first + n`.
///
/// #   Panics
///
/// If a clone panics, the values already constructed are destroyed before resuming the panic.
///
/// #   Safety
///
/// -   Assumes that `[first, first + n)` is valid for writes, and uninitialized.
pub unsafe fn uninitialized_fill_n<T, A>(allocator: &A, first: *mut T, n: usize, value: &T) -> *mut T
where
    T: Clone,
    A: Allocator,
{
    let mut partial = PartialConstruction::new(allocator, first);

    for _ in 0..n {
        //  Safety:
        //  -   `partial.current` is within the destination, per pre-conditions.
        unsafe { partial.construct(value.clone()) };
    }

    partial.complete()
}

/// Destroys the values of `[first, last)`, leaving the memory uninitialized.
///
/// The caller is expected to update its bookkeeping prior to calling this function: should a destructor panic, the
/// values following it in the range are leaked, never dropped twice.
///
/// #   Safety
///
/// -   Assumes that `[first, last)` is a range of initialized values, which are not used afterwards.
pub unsafe fn destroy<T, A>(allocator: &A, first: *mut T, last: *mut T)
where
    A: Allocator,
{
    if !mem::needs_drop::<T>() {
        return;
    }

    let mut current = first;

    while current != last {
        //  Safety:
        //  -   `current` is within `[first, last)`, per pre-conditions.
        unsafe {
            allocator.destroy(current);
            current = current.add(1);
        }
    }
}

//  Returns the number of values in `[first, last)`.
//
//  #   Safety
//
//  -   Assumes that `first` and `last` are within, or one past, the same allocation, with `first <= last`.
pub(crate) unsafe fn distance<T>(first: *const T, last: *const T) -> usize {
    if first == last {
        return 0;
    }

    debug_assert!(first < last);

    //  Safety:
    //  -   Both pointers belong to the same allocation, per pre-conditions.
    unsafe { last.offset_from(first) as usize }
}

//
//  Implementation Details
//

//  A partially constructed range of values.
//
//  Unless completed, destroys the values constructed so far on drop.
struct PartialConstruction<'a, T, A: Allocator> {
    allocator: &'a A,
    first: *mut T,
    current: *mut T,
}

impl<'a, T, A: Allocator> PartialConstruction<'a, T, A> {
    fn new(allocator: &'a A, first: *mut T) -> Self {
        Self { allocator, first, current: first }
    }

    //  Constructs a value at `current`, and advances.
    //
    //  #   Safety
    //
    //  -   Assumes that `current` is valid for writes, and uninitialized.
    unsafe fn construct(&mut self, value: T) {
        //  Safety:
        //  -   Forwarding.
        unsafe {
            self.allocator.construct(self.current, value);
            self.current = self.current.add(1);
        }
    }

    //  Completes the construction, returning a pointer past the last value.
    fn complete(self) -> *mut T {
        let current = self.current;
        mem::forget(self);
        current
    }
}

impl<'a, T, A: Allocator> Drop for PartialConstruction<'a, T, A> {
    fn drop(&mut self) {
        //  Safety:
        //  -   `[first, current)` was constructed by this instance.
        unsafe { destroy(self.allocator, self.first, self.current) };
    }
}
