//! The resource owner of the Vector.
//!
//! The `VectorBase` owns exactly one allocation, or none, and implements the primitives manipulating it: growth,
//! relocation, and the shifting of values to open or close gaps.

use super::root::{cmp, mem, ops, ptr};

use super::allocator::Allocator;
use super::capacity;
use super::core::VectorCore;
use super::failure::{Failure, Result};
use super::memory;

/// VectorBase
///
/// The owner of a buffer of values of type `T`, allocated by an allocator of type `A` which it refers to.
///
/// The allocator is never replaced after construction. Buffers are only exchanged, rather than their values, between
/// bases whose allocators are equal.
///
/// On drop, the live values are destroyed and the buffer is released.
pub struct VectorBase<'a, T, A: Allocator> {
    allocator: &'a A,
    core: VectorCore<T>,
}

impl<'a, T, A: Allocator> VectorBase<'a, T, A> {
    /// Creates an empty instance; no memory is allocated.
    ///
    /// #   Panics
    ///
    /// Panics if `T` is zero-sized.
    pub fn new(allocator: &'a A) -> Self {
        if mem::size_of::<T>() == 0 {
            panic_zero_sized_element();
        }

        Self { allocator, core: VectorCore::new() }
    }

    /// Creates an empty instance, with exactly `capacity` slots allocated.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated.
    pub fn with_capacity(capacity: usize, allocator: &'a A) -> Result<Self> {
        let mut result = Self::new(allocator);
        result.core = result.allocate_core(capacity)?;

        Ok(result)
    }

    /// Creates an instance holding the values of `source`, which is left empty.
    ///
    /// If `allocator` equals the allocator of `source`, the buffer of `source` is transferred. Otherwise, a buffer of
    /// exactly `source.len()` slots is allocated from `allocator`, and the values are relocated into it; `source`
    /// retains its own, now empty, buffer.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated, leaving `source` unchanged.
    pub fn take_from(source: &mut VectorBase<'_, T, A>, allocator: &'a A) -> Result<Self> {
        let mut result = Self::new(allocator);

        if allocator.equals(source.allocator) {
            result.core = source.core.take();
        } else {
            result.core = result.allocate_core(source.len())?;

            //  Safety:
            //  -   `result` has exactly `source.len()` uninitialized slots.
            unsafe { result.move_at_end(source) };
        }

        Ok(result)
    }

    /// Returns the allocator.
    pub fn allocator(&self) -> &'a A { self.allocator }

    /// Returns the descriptor of the buffer.
    pub fn core(&self) -> &VectorCore<T> { &self.core }

    /// Allocates memory for `n` values, returning a pointer to the first.
    ///
    /// No memory is allocated if `n` is 0, a null pointer is returned instead.
    ///
    /// #   Errors
    ///
    /// Returns `BytesOverflow` if the size of the allocation overflows, and `OutOfMemory` if the allocator fails.
    pub fn allocate(&self, n: usize) -> Result<*mut T> {
        if n == 0 {
            return Ok(ptr::null_mut());
        }

        let layout = capacity::allocation_layout::<T>(n)?;

        //  Safety:
        //  -   The size of the layout is non-zero, as `n` is non-zero and `T` is not zero-sized.
        let pointer = unsafe { self.allocator.allocate(layout) };

        if pointer.is_null() {
            log::debug!("Failed to allocate {} values, {} bytes", n, layout.size());
            return Err(Failure::OutOfMemory);
        }

        Ok(pointer as *mut T)
    }

    /// Deallocates the memory for `n` values pointed to by `pointer`.
    ///
    /// #   Safety
    ///
    /// -   Assumes that `pointer` was obtained from `self.allocate(n)`, or is null.
    /// -   Assumes that no live value remains in the memory.
    pub unsafe fn deallocate(&self, pointer: *mut T, n: usize) {
        if pointer.is_null() || n == 0 {
            return;
        }

        let layout = match capacity::allocation_layout::<T>(n) {
            Ok(layout) => layout,
            Err(_) => {
                debug_assert!(false, "{} values succeeded in allocation!", n);
                return;
            },
        };

        //  Safety:
        //  -   The pointer and layout match those of the allocation.
        unsafe { self.allocator.deallocate(pointer as *mut u8, layout) };
    }

    /// Returns whether there is no live value.
    pub fn is_empty(&self) -> bool { self.core.is_empty() }

    /// Returns whether every allocated slot holds a live value.
    pub fn is_full(&self) -> bool { self.core.is_full() }

    /// Returns the number of live values.
    pub fn len(&self) -> usize { self.core.len() }

    /// Returns the number of allocated slots.
    pub fn capacity(&self) -> usize { self.core.capacity() }

    /// Returns the number of allocated, but uninitialized, slots.
    pub fn residual(&self) -> usize { self.core.residual() }

    /// Returns the capacity to grow to when appending to a full buffer: 4 at first, then doubling.
    pub fn next_capacity(&self) -> usize { capacity::next_capacity(self.capacity()) }

    /// Returns the live values.
    pub fn as_slice(&self) -> &[T] { self.core.as_slice() }

    /// Returns the live values.
    pub fn as_mut_slice(&mut self) -> &mut [T] { self.core.as_mut_slice() }

    /// Exchanges the buffers of `self` and `other`.
    ///
    /// #   Panics
    ///
    /// Panics if the allocators of `self` and `other` are not equal.
    pub fn swap(&mut self, other: &mut Self) {
        assert!(
            self.allocator.equals(other.allocator),
            "Cannot swap buffers of unequal allocators"
        );

        self.core.swap(&mut other.core);
    }

    /// Destroys all live values, retaining the buffer.
    pub fn clear(&mut self) { self.truncate(0); }

    /// Destroys the live values past the first `length`, if any, retaining the buffer.
    ///
    /// Should a destructor panic, the remaining values are leaked.
    pub fn truncate(&mut self, length: usize) {
        let current = self.len();

        if length >= current {
            return;
        }

        //  Pre-pooping our pants in case a Drop panics.
        //
        //  Safety:
        //  -   `length` is less than the current length.
        unsafe { self.core.set_len(length) };

        //  Safety:
        //  -   `[length, current)` holds live values, no longer accounted for.
        unsafe { memory::destroy(self.allocator, self.core.at(length), self.core.at(current)) };
    }

    /// Removes the last value, and returns it, if any.
    pub fn pop(&mut self) -> Option<T> {
        let length = self.len().checked_sub(1)?;

        //  Safety:
        //  -   The value at `length` is live, and no longer accounted for.
        unsafe {
            self.core.set_len(length);
            Some(ptr::read(self.core.at(length)))
        }
    }

    /// Relocates the values into a new buffer of exactly `capacity` slots.
    ///
    /// If `capacity` is less than the current length, the values past `capacity` are destroyed first.
    ///
    /// #   Errors
    ///
    /// Returns an error if the new buffer cannot be allocated, leaving the instance unchanged.
    pub fn relocate(&mut self, capacity: usize) -> Result<()> {
        //  Released on drop, should destroying the overflow panic.
        let mut buffer = VectorBase::with_capacity(capacity, self.allocator)?;

        log::trace!(
            "Relocating {} values from capacity {} to capacity {}",
            cmp::min(self.len(), capacity), self.capacity(), capacity
        );

        self.truncate(capacity);

        //  Safety:
        //  -   `buffer` has `capacity` uninitialized slots, and `self.len() <= capacity`.
        unsafe { buffer.move_at_end(self) };

        //  `buffer` now holds the former, empty, buffer.
        self.core.swap(&mut buffer.core);

        Ok(())
    }

    /// Shifts the values at and after `position` to the right by `n` slots, opening a gap.
    ///
    /// Afterwards, `[position, position + n)` is uninitialized, yet accounted for in `len()`.
    ///
    /// #   Safety
    ///
    /// -   Assumes that `position <= len()`.
    /// -   Assumes that `residual() >= n`.
    /// -   Assumes that the gap is filled with `n` values by the caller before any other use of the instance,
    ///     including dropping it.
    pub unsafe fn shift_right(&mut self, position: usize, n: usize) {
        let length = self.len();

        debug_assert!(position <= length);
        debug_assert!(self.residual() >= n);

        //  The tail `[position, length)` is relocated to `[position + n, length + n)` at once: the part landing in
        //  uninitialized memory, and the part landing over the former tail.
        //
        //  Safety:
        //  -   The tail holds live values, and its destination is within the buffer, per pre-conditions.
        unsafe {
            memory::uninitialized_move(self.core.at(position), self.core.at(length), self.core.at(position + n));
            self.core.set_len(length + n);
        }
    }

    /// Shifts the values after `last` to the left, over `first`, erasing the values of `[first, last)`.
    ///
    /// Should a destructor panic, the remaining values of `[first, last)` are leaked, and the values after `last` are
    /// still shifted.
    ///
    /// #   Panics
    ///
    /// Panics if `first > last`, or `last > len()`.
    pub fn shift_left(&mut self, first: usize, last: usize) {
        let length = self.len();

        assert!(first <= last, "Invalid range: {} > {}", first, last);
        assert!(last <= length, "Out of bounds: {} > {}", last, length);

        if first == last {
            return;
        }

        let allocator = self.allocator;

        //  Safety:
        //  -   `first` is less than the current length.
        unsafe { self.core.set_len(first) };

        let tail = Tail { core: &mut self.core, from: last, to: first, count: length - last };

        //  Safety:
        //  -   `[first, last)` holds live values, no longer accounted for.
        unsafe { memory::destroy(allocator, tail.core.at(first), tail.core.at(last)) };
    }

    /// Inserts `value` at `position`, shifting the values after it to the right.
    ///
    /// Returns `position`.
    ///
    /// #   Panics
    ///
    /// Panics if `position > len()`, or if the instance is full.
    pub fn insert(&mut self, position: usize, value: T) -> usize {
        self.insert_in_place(position, Single(Some(value)))
    }

    /// Inserts clones of the values of `source` at `position`, shifting the values after it to the right.
    ///
    /// Returns `position`.
    ///
    /// Should a clone panic, the instance is left unchanged.
    ///
    /// #   Panics
    ///
    /// Panics if `position > len()`, or if `residual() < source.len()`.
    pub fn range_insert(&mut self, position: usize, source: &[T]) -> usize
    where
        T: Clone,
    {
        self.insert_in_place(position, Clones(source))
    }

    /// Inserts `n` clones of `value` at `position`, shifting the values after it to the right.
    ///
    /// Returns `position`.
    ///
    /// Should a clone panic, the instance is left unchanged.
    ///
    /// #   Panics
    ///
    /// Panics if `position > len()`, or if `residual() < n`.
    pub fn fill_insert(&mut self, position: usize, n: usize, value: &T) -> usize
    where
        T: Clone,
    {
        self.insert_in_place(position, Copies { value, count: n })
    }

    /// Appends clones of the values of `source`.
    ///
    /// #   Panics
    ///
    /// Panics if `residual() < source.len()`.
    pub fn copy_at_end(&mut self, source: &[T])
    where
        T: Clone,
    {
        let length = self.len();
        self.insert_in_place(length, Clones(source));
    }

    /// Appends `n` clones of `value`.
    ///
    /// #   Panics
    ///
    /// Panics if `residual() < n`.
    pub fn fill_at_end(&mut self, n: usize, value: &T)
    where
        T: Clone,
    {
        let length = self.len();
        self.insert_in_place(length, Copies { value, count: n });
    }

    //  Inserts the values of `fill` at `position`, growing the buffer if necessary.
    //
    //  #   Errors
    //
    //  Returns an error if the buffer must grow, and cannot, leaving the instance unchanged.
    //
    //  #   Panics
    //
    //  Panics if `position > len()`.
    pub(super) fn insert_fill<F: Fill<T>>(&mut self, position: usize, fill: F) -> Result<usize> {
        assert!(position <= self.len(), "Out of bounds: {} > {}", position, self.len());

        if self.residual() >= fill.len() {
            Ok(self.insert_in_place(position, fill))
        } else {
            self.relocate_insert(position, fill)
        }
    }

    //  Inserts the values of `fill` at `position`, within the current buffer.
    fn insert_in_place<F: Fill<T>>(&mut self, position: usize, fill: F) -> usize {
        let length = self.len();

        assert!(position <= length, "Out of bounds: {} > {}", position, length);
        assert!(self.residual() >= fill.len(), "Insufficient capacity: {} < {}", self.residual(), fill.len());

        //  Safety:
        //  -   Pre-conditions checked above.
        unsafe { self.insert_sequence(position, fill) }
    }

    //  Inserts the values of `fill` at `position`, within the current buffer.
    //
    //  With `n` the number of values to insert, and `k` the number of values after `position`:
    //
    //  -   If `k > n`, the tail is shifted right by `n`, and the values constructed in the gap.
    //  -   Otherwise, the last `n - k` values are constructed past the end of the buffer, the tail is relocated past
    //      them, and the first `k` values are constructed in the gap.
    //
    //  Should constructing a value panic, the instance is restored.
    //
    //  #   Safety
    //
    //  -   Assumes that `position <= len()`.
    //  -   Assumes that `residual() >= fill.len()`.
    unsafe fn insert_sequence<F: Fill<T>>(&mut self, position: usize, mut fill: F) -> usize {
        let allocator = self.allocator;
        let length = self.len();
        let n = fill.len();
        let k = length - position;

        if n == 0 {
            return position;
        }

        //  Safety (whole block):
        //  -   All indexes are within the buffer, as `residual() >= n`.
        unsafe {
            if k == 0 {
                fill.fill(allocator, self.core.at(length), 0..n);
                self.core.set_len(length + n);
            } else if k > n {
                self.shift_right(position, n);

                let gap = Gap::open(allocator, &mut self.core, position, n, 0, k);
                fill.fill(allocator, gap.core.at(position), 0..n);
                gap.close();
            } else {
                fill.fill(allocator, self.core.at(length), k..n);

                memory::uninitialized_move(
                    self.core.at(position),
                    self.core.at(length),
                    self.core.at(position + n),
                );

                let gap = Gap::open(allocator, &mut self.core, position, n, n - k, k);
                fill.fill(allocator, gap.core.at(position), 0..k);
                gap.close();
            }
        }

        position
    }

    //  Inserts the values of `fill` at `position`, relocating all values into a new buffer.
    //
    //  The new buffer has at least the next capacity, and enough capacity for the insertion.
    //
    //  The values of `fill` are constructed first: should this panic, or the allocation fail, the instance is left
    //  unchanged.
    fn relocate_insert<F: Fill<T>>(&mut self, position: usize, mut fill: F) -> Result<usize> {
        let length = self.len();
        let n = fill.len();

        debug_assert!(position <= length);

        let capacity = capacity::grown_capacity(length, self.capacity(), n)?;
        let mut buffer = VectorBase::with_capacity(capacity, self.allocator)?;

        log::trace!(
            "Relocating {} values from capacity {} to capacity {}, inserting {}",
            length, self.capacity(), capacity, n
        );

        //  Safety (whole block):
        //  -   `buffer` has `length + n` uninitialized slots, at least.
        //  -   `self` has `length` live values, which are no longer accounted for once relocated.
        unsafe {
            fill.fill(self.allocator, buffer.core.at(position), 0..n);

            self.core.set_len(0);

            memory::uninitialized_move(self.core.at(0), self.core.at(position), buffer.core.at(0));
            memory::uninitialized_move(self.core.at(position), self.core.at(length), buffer.core.at(position + n));

            buffer.core.set_len(length + n);
        }

        //  `buffer` now holds the former, empty, buffer.
        self.core.swap(&mut buffer.core);

        Ok(position)
    }

    //  Relocates all values of `source` to the end of `self`, leaving `source` empty.
    //
    //  #   Safety
    //
    //  -   Assumes that `self.residual() >= source.len()`.
    unsafe fn move_at_end(&mut self, source: &mut VectorBase<'_, T, A>) {
        let length = self.len();
        let count = source.len();

        debug_assert!(self.residual() >= count);

        //  Safety:
        //  -   The values of `source` are live, and no longer accounted for once relocated.
        //  -   `self` has sufficient uninitialized slots, per pre-conditions.
        unsafe {
            source.core.set_len(0);
            memory::uninitialized_move(source.core.at(0), source.core.at(count), self.core.at(length));
            self.core.set_len(length + count);
        }
    }

    //  Releases the buffer of `core`, resetting it.
    //
    //  #   Safety
    //
    //  -   Assumes that `core` holds no live value.
    //  -   Assumes that `core` was allocated by this allocator, or an equal one.
    unsafe fn deallocate_core(&self, core: &mut VectorCore<T>) {
        debug_assert!(core.is_empty());

        //  Safety:
        //  -   Forwarding.
        unsafe { self.deallocate(core.first(), core.capacity()) };

        core.reset();
    }

    //  Allocates a buffer of exactly `capacity` slots.
    fn allocate_core(&self, capacity: usize) -> Result<VectorCore<T>> {
        let first = self.allocate(capacity)?;

        //  Safety:
        //  -   `first` points to `capacity` slots, or is null if `capacity` is 0.
        Ok(unsafe { VectorCore::from_allocation(first, capacity) })
    }
}

impl<'a, T, A: Allocator> Drop for VectorBase<'a, T, A> {
    fn drop(&mut self) {
        //  Releases the buffer, even if a destructor panics.
        struct Release<'b, 'a, T, A: Allocator>(&'b mut VectorBase<'a, T, A>);

        impl<'b, 'a, T, A: Allocator> Drop for Release<'b, 'a, T, A> {
            fn drop(&mut self) {
                let mut core = self.0.core.take();

                //  Safety:
                //  -   The values were cleared.
                //  -   The core was allocated by this allocator.
                unsafe { self.0.deallocate_core(&mut core) };
            }
        }

        let release = Release(self);
        release.0.clear();
    }
}

//
//  Sources of values.
//

//  A source of values, to be constructed into uninitialized memory.
pub(super) trait Fill<T> {
    //  Returns the number of values.
    fn len(&self) -> usize;

    //  Constructs the values of indexes `range`, within `0..len()`, at `destination`.
    //
    //  Should constructing a value panic, the values constructed by this call are destroyed.
    //
    //  #   Safety
    //
    //  -   Assumes that `[destination, destination + range.len())` is valid for writes, and uninitialized.
    //  -   Assumes that each index is requested at most once.
    unsafe fn fill<A: Allocator>(&mut self, allocator: &A, destination: *mut T, range: ops::Range<usize>);
}

//  A single value.
pub(super) struct Single<T>(pub Option<T>);

impl<T> Fill<T> for Single<T> {
    fn len(&self) -> usize { 1 }

    unsafe fn fill<A: Allocator>(&mut self, allocator: &A, destination: *mut T, range: ops::Range<usize>) {
        if range.is_empty() {
            return;
        }

        if let Some(value) = self.0.take() {
            //  Safety:
            //  -   Forwarding.
            unsafe { allocator.construct(destination, value) };
        }
    }
}

//  Clones of a slice of values.
pub(super) struct Clones<'s, T>(pub &'s [T]);

impl<'s, T: Clone> Fill<T> for Clones<'s, T> {
    fn len(&self) -> usize { self.0.len() }

    unsafe fn fill<A: Allocator>(&mut self, allocator: &A, destination: *mut T, range: ops::Range<usize>) {
        //  Safety:
        //  -   Forwarding.
        unsafe { memory::uninitialized_copy(allocator, &self.0[range], destination) };
    }
}

//  Clones of a single value.
pub(super) struct Copies<'s, T> {
    pub value: &'s T,
    pub count: usize,
}

impl<'s, T: Clone> Fill<T> for Copies<'s, T> {
    fn len(&self) -> usize { self.count }

    unsafe fn fill<A: Allocator>(&mut self, allocator: &A, destination: *mut T, range: ops::Range<usize>) {
        //  Safety:
        //  -   Forwarding.
        unsafe { memory::uninitialized_fill_n(allocator, destination, range.len(), self.value) };
    }
}

//
//  Implementation Details
//

//  A tail of `count` live values displaced at `from`, past the accounted length.
//
//  On drop, relocates the tail to `to`, which must be the accounted length, and accounts for it again.
struct Tail<'b, T> {
    core: &'b mut VectorCore<T>,
    from: usize,
    to: usize,
    count: usize,
}

impl<'b, T> Drop for Tail<'b, T> {
    fn drop(&mut self) {
        debug_assert!(self.to == self.core.len());

        //  Safety:
        //  -   `[from, from + count)` holds live values, and `to <= from`.
        unsafe {
            memory::uninitialized_move(
                self.core.at(self.from),
                self.core.at(self.from + self.count),
                self.core.at(self.to),
            );
            self.core.set_len(self.to + self.count);
        }
    }
}

//  A gap of `width` slots at `position`, followed by a tail of `count` live values.
//
//  The last `back` slots of the gap hold constructed values, the others are uninitialized. While open, the length
//  only accounts for the values before the gap.
//
//  Unless closed, the gap collapses on drop: the values constructed within are destroyed, and the tail is relocated
//  back to `position`.
struct Gap<'b, T, A: Allocator> {
    allocator: &'b A,
    core: &'b mut VectorCore<T>,
    position: usize,
    width: usize,
    back: usize,
    count: usize,
}

impl<'b, T, A: Allocator> Gap<'b, T, A> {
    //  Opens the gap.
    //
    //  #   Safety
    //
    //  -   Assumes that the buffer is laid out as described by the arguments.
    unsafe fn open(
        allocator: &'b A,
        core: &'b mut VectorCore<T>,
        position: usize,
        width: usize,
        back: usize,
        count: usize,
    )
        -> Self
    {
        debug_assert!(back <= width);
        debug_assert!(position + width + count <= core.capacity());

        //  Safety:
        //  -   `[0, position)` holds live values.
        unsafe { core.set_len(position) };

        Self { allocator, core, position, width, back, count }
    }

    //  Closes the gap, once all its slots have been constructed.
    fn close(self) {
        let length = self.position + self.width + self.count;

        //  Safety:
        //  -   The gap is filled, hence `[0, length)` holds live values.
        unsafe { self.core.set_len(length) };

        mem::forget(self);
    }
}

impl<'b, T, A: Allocator> Drop for Gap<'b, T, A> {
    fn drop(&mut self) {
        let end = self.position + self.width;

        //  Safety:
        //  -   `[end - back, end)` holds constructed values, and `[end, end + count)` the tail.
        unsafe {
            memory::destroy(self.allocator, self.core.at(end - self.back), self.core.at(end));

            memory::uninitialized_move(
                self.core.at(end),
                self.core.at(end + self.count),
                self.core.at(self.position),
            );
            self.core.set_len(self.position + self.count);
        }
    }
}

#[cold]
#[inline(never)]
fn panic_zero_sized_element() -> ! {
    panic!("Zero-sized elements are not supported");
}
