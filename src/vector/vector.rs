//! The Vector

use super::root::{cmp, fmt, hash, iter, ops, slice};

use super::allocator::Allocator;
use super::base::{Clones, Copies, Single, VectorBase};
use super::failure::{panic_from_failure, Result};

#[cfg(feature = "with-std")]
use super::allocator::{DefaultAllocator, DEFAULT_ALLOCATOR};

//
//  Public Interface
//

/// `Vector`
#[cfg(not(feature = "with-std"))]
pub struct Vector<'a, T, A: Allocator> {
    base: VectorBase<'a, T, A>,
}

/// `Vector`
#[cfg(feature = "with-std")]
pub struct Vector<'a, T, A: Allocator = DefaultAllocator> {
    //  The buffer, and the allocator it refers to.
    base: VectorBase<'a, T, A>,
}

#[cfg(feature = "with-std")]
impl<T> Vector<'static, T, DefaultAllocator> {
    /// Creates a new, empty, instance using the default allocator.
    ///
    /// No memory is allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use origin::vector::Vector;
    /// let vec: Vector<i32> = Vector::new();
    ///
    /// assert_eq!(0, vec.len());
    /// assert_eq!(0, vec.capacity());
    /// ```
    pub fn new() -> Self { Self::new_in(&DEFAULT_ALLOCATOR) }

    /// Creates a new, empty, instance with exactly `capacity` slots, using the default allocator.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use origin::vector::Vector;
    /// let vec = Vector::<i32>::try_with_capacity(3).unwrap();
    ///
    /// assert_eq!(0, vec.len());
    /// assert_eq!(3, vec.capacity());
    /// ```
    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        Self::try_with_capacity_in(capacity, &DEFAULT_ALLOCATOR)
    }

    /// Creates a new, empty, instance with exactly `capacity` slots, using the default allocator.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Self { Self::with_capacity_in(capacity, &DEFAULT_ALLOCATOR) }

    /// Creates a new instance holding `n` clones of `value`, using the default allocator.
    ///
    /// The capacity is exactly `n`.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use origin::vector::Vector;
    /// let vec = Vector::from_elem(3, &"a");
    ///
    /// assert_eq!(["a", "a", "a"], vec.as_slice());
    /// assert_eq!(3, vec.capacity());
    /// ```
    pub fn from_elem(n: usize, value: &T) -> Self
    where
        T: Clone,
    {
        Self::from_elem_in(n, value, &DEFAULT_ALLOCATOR)
    }

    /// Creates a new instance holding clones of the values of `source`, using the default allocator.
    ///
    /// The capacity is exactly `source.len()`.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use origin::vector::Vector;
    /// let vec = Vector::from_slice(&[1, 2, 3]);
    ///
    /// assert_eq!([1, 2, 3], vec.as_slice());
    /// assert_eq!(3, vec.capacity());
    /// ```
    pub fn from_slice(source: &[T]) -> Self
    where
        T: Clone,
    {
        Self::from_slice_in(source, &DEFAULT_ALLOCATOR)
    }
}

impl<'a, T, A: Allocator> Vector<'a, T, A> {
    /// Creates a new, empty, instance using `allocator`.
    ///
    /// No memory is allocated.
    ///
    /// #   Panics
    ///
    /// Panics if `T` is zero-sized.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use origin::allocator::DefaultAllocator;
    /// #   use origin::vector::Vector;
    /// let allocator = DefaultAllocator;
    /// let vec: Vector<i32> = Vector::new_in(&allocator);
    ///
    /// assert!(vec.is_empty());
    /// ```
    pub fn new_in(allocator: &'a A) -> Self {
        Self { base: VectorBase::new(allocator) }
    }

    /// Creates a new, empty, instance with exactly `capacity` slots, using `allocator`.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated.
    pub fn try_with_capacity_in(capacity: usize, allocator: &'a A) -> Result<Self> {
        VectorBase::with_capacity(capacity, allocator).map(|base| Self { base })
    }

    /// Creates a new, empty, instance with exactly `capacity` slots, using `allocator`.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be allocated.
    pub fn with_capacity_in(capacity: usize, allocator: &'a A) -> Self {
        Self::try_with_capacity_in(capacity, allocator).unwrap_or_else(|failure| panic_from_failure(failure))
    }

    /// Creates a new instance holding `n` clones of `value`, using `allocator`.
    ///
    /// The capacity is exactly `n`.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated.
    pub fn try_from_elem_in(n: usize, value: &T, allocator: &'a A) -> Result<Self>
    where
        T: Clone,
    {
        let mut result = Self::try_with_capacity_in(n, allocator)?;
        result.base.fill_at_end(n, value);

        Ok(result)
    }

    /// Creates a new instance holding `n` clones of `value`, using `allocator`.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be allocated.
    pub fn from_elem_in(n: usize, value: &T, allocator: &'a A) -> Self
    where
        T: Clone,
    {
        Self::try_from_elem_in(n, value, allocator).unwrap_or_else(|failure| panic_from_failure(failure))
    }

    /// Creates a new instance holding clones of the values of `source`, using `allocator`.
    ///
    /// The capacity is exactly `source.len()`. Should a clone panic, the values cloned so far are destroyed and the
    /// memory released.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated.
    pub fn try_from_slice_in(source: &[T], allocator: &'a A) -> Result<Self>
    where
        T: Clone,
    {
        let mut result = Self::try_with_capacity_in(source.len(), allocator)?;
        result.base.copy_at_end(source);

        Ok(result)
    }

    /// Creates a new instance holding clones of the values of `source`, using `allocator`.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be allocated.
    pub fn from_slice_in(source: &[T], allocator: &'a A) -> Self
    where
        T: Clone,
    {
        Self::try_from_slice_in(source, allocator).unwrap_or_else(|failure| panic_from_failure(failure))
    }

    /// Creates a new instance holding the values of `collection`, appended one at a time, using `allocator`.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated.
    pub fn try_from_iter_in<C>(collection: C, allocator: &'a A) -> Result<Self>
    where
        C: IntoIterator<Item = T>,
    {
        let mut result = Self::new_in(allocator);
        result.try_extend(collection)?;

        Ok(result)
    }

    /// Creates a new instance holding the values of `source`, using `allocator`; `source` is left empty.
    ///
    /// If `allocator` equals the allocator of `source`, its buffer is transferred in O(1). Otherwise, a buffer of
    /// exactly `source.len()` slots is allocated, and the values relocated.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated, leaving `source` unchanged.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use origin::allocator::DEFAULT_ALLOCATOR;
    /// #   use origin::vector::Vector;
    /// let mut source = Vector::from_slice(&[1, 2, 3]);
    /// let vec = Vector::try_take_in(&mut source, &DEFAULT_ALLOCATOR).unwrap();
    ///
    /// assert_eq!([1, 2, 3], vec.as_slice());
    /// assert!(source.is_empty());
    /// ```
    pub fn try_take_in(source: &mut Vector<'_, T, A>, allocator: &'a A) -> Result<Self> {
        VectorBase::take_from(&mut source.base, allocator).map(|base| Self { base })
    }

    /// Creates a new instance holding the values of `source`, using `allocator`; `source` is left empty.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be allocated.
    pub fn take_in(source: &mut Vector<'_, T, A>, allocator: &'a A) -> Self {
        Self::try_take_in(source, allocator).unwrap_or_else(|failure| panic_from_failure(failure))
    }

    /// Returns a copy of `self`, with exactly `self.len()` capacity, using `allocator`.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated.
    pub fn try_clone_in<'b, B: Allocator>(&self, allocator: &'b B) -> Result<Vector<'b, T, B>>
    where
        T: Clone,
    {
        Vector::try_from_slice_in(self.as_slice(), allocator)
    }

    /// Returns a copy of `self`, with exactly `self.len()` capacity, using the same allocator.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated.
    pub fn try_clone(&self) -> Result<Self>
    where
        T: Clone,
    {
        self.try_clone_in(self.allocator())
    }
}

impl<'a, T, A: Allocator> Vector<'a, T, A> {
    /// Returns the allocator.
    pub fn allocator(&self) -> &'a A { self.base.allocator() }

    /// Returns whether the vector is empty.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use origin::vector::Vector;
    /// let mut vec: Vector<i32> = Vector::new();
    /// assert!(vec.is_empty());
    ///
    /// vec.push_back(1);
    /// assert!(!vec.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.base.is_empty() }

    /// Returns whether the vector is full, that is whether appending requires relocating.
    pub fn is_full(&self) -> bool { self.base.is_full() }

    /// Returns the number of elements.
    pub fn len(&self) -> usize { self.base.len() }

    /// Returns the number of slots allocated.
    pub fn capacity(&self) -> usize { self.base.capacity() }

    /// Returns the number of elements which can be appended without relocating.
    pub fn residual(&self) -> usize { self.base.residual() }

    /// Returns the elements.
    pub fn as_slice(&self) -> &[T] { self.base.as_slice() }

    /// Returns the elements.
    pub fn as_mut_slice(&mut self) -> &mut [T] { self.base.as_mut_slice() }

    /// Returns a pointer to the first element.
    ///
    /// The pointer past the last element is `as_ptr().add(len())`. Both are invalidated by relocation.
    pub fn as_ptr(&self) -> *const T { self.as_slice().as_ptr() }

    /// Returns a pointer to the first element.
    pub fn as_mut_ptr(&mut self) -> *mut T { self.as_mut_slice().as_mut_ptr() }

    /// Ensures a capacity of at least `capacity` slots.
    ///
    /// If `capacity` exceeds the current capacity, the elements are relocated into a buffer of exactly `capacity`
    /// slots. Otherwise, nothing happens: the capacity never shrinks.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated, leaving the vector unchanged.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use origin::vector::Vector;
    /// let mut vec = Vector::from_slice(&[1, 2, 3]);
    ///
    /// assert_eq!(Ok(()), vec.try_reserve(10));
    /// assert_eq!(10, vec.capacity());
    ///
    /// assert_eq!(Ok(()), vec.try_reserve(5));
    /// assert_eq!(10, vec.capacity());
    /// ```
    pub fn try_reserve(&mut self, capacity: usize) -> Result<()> {
        if capacity <= self.capacity() {
            return Ok(());
        }

        self.base.relocate(capacity)
    }

    /// Ensures a capacity of at least `capacity` slots.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be allocated.
    pub fn reserve(&mut self, capacity: usize) {
        self.try_reserve(capacity).unwrap_or_else(|failure| panic_from_failure(failure));
    }

    /// Relocates the elements into a buffer of exactly `len()` slots, unless already the case.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated, leaving the vector unchanged.
    pub fn try_shrink_to_fit(&mut self) -> Result<()> {
        if self.is_full() {
            return Ok(());
        }

        self.base.relocate(self.len())
    }

    /// Relocates the elements into a buffer of exactly `len()` slots, unless already the case.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use origin::vector::Vector;
    /// let mut vec: Vector<i32> = Vector::with_capacity(8);
    /// vec.push_back(1);
    ///
    /// vec.shrink_to_fit();
    /// assert_eq!(1, vec.capacity());
    /// ```
    pub fn shrink_to_fit(&mut self) {
        self.try_shrink_to_fit().unwrap_or_else(|failure| panic_from_failure(failure));
    }

    /// Resizes the vector to `length` elements, appending clones of `value` or truncating as necessary.
    ///
    /// When growing past the capacity, the elements are first relocated into a buffer of exactly `length` slots.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated, leaving the vector unchanged.
    pub fn try_resize(&mut self, length: usize, value: &T) -> Result<()>
    where
        T: Clone,
    {
        let current = self.len();

        if length <= current {
            self.truncate(length);
            return Ok(());
        }

        if length > self.capacity() {
            self.try_reserve(length)?;
        }

        self.base.fill_at_end(length - current, value);

        Ok(())
    }

    /// Resizes the vector to `length` elements, appending clones of `value` or truncating as necessary.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use origin::vector::Vector;
    /// let mut vec = Vector::from_slice(&[1, 2, 3]);
    ///
    /// vec.resize(5, &0);
    /// assert_eq!([1, 2, 3, 0, 0], vec.as_slice());
    ///
    /// vec.resize(2, &0);
    /// assert_eq!([1, 2], vec.as_slice());
    /// ```
    pub fn resize(&mut self, length: usize, value: &T)
    where
        T: Clone,
    {
        self.try_resize(length, value).unwrap_or_else(|failure| panic_from_failure(failure));
    }

    /// Destroys the elements past the first `length`, if any. The capacity is unchanged.
    pub fn truncate(&mut self, length: usize) { self.base.truncate(length); }

    /// Destroys all the elements. The capacity is unchanged.
    pub fn clear(&mut self) { self.base.clear(); }

    /// Appends an element to the back.
    ///
    /// If the vector is full, the elements are first relocated into a buffer of the next capacity: 4 slots for an
    /// empty vector, twice the current capacity otherwise.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated, leaving the vector unchanged.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use origin::vector::Vector;
    /// let mut vec: Vector<i32> = Vector::new();
    /// assert_eq!(Ok(()), vec.try_push_back(3));
    ///
    /// assert_eq!(3, vec[0]);
    /// assert_eq!(4, vec.capacity());
    /// ```
    pub fn try_push_back(&mut self, value: T) -> Result<()> {
        let length = self.len();
        self.base.insert_fill(length, Single(Some(value)))?;

        Ok(())
    }

    /// Appends an element to the back.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be allocated.
    pub fn push_back(&mut self, value: T) {
        self.try_push_back(value).unwrap_or_else(|failure| panic_from_failure(failure));
    }

    /// Appends the element created by `f` to the back.
    ///
    /// `f` is invoked before any memory is allocated or relocated.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated, leaving the vector unchanged.
    pub fn try_emplace_back<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce() -> T,
    {
        let value = f();
        self.try_push_back(value)
    }

    /// Appends the element created by `f` to the back.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be allocated.
    pub fn emplace_back<F>(&mut self, f: F)
    where
        F: FnOnce() -> T,
    {
        self.try_emplace_back(f).unwrap_or_else(|failure| panic_from_failure(failure));
    }

    /// Removes the last element, and returns it, if any.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use origin::vector::Vector;
    /// let mut vec = Vector::from_slice(&[1, 2]);
    ///
    /// assert_eq!(Some(2), vec.pop_back());
    /// assert_eq!(Some(1), vec.pop_back());
    /// assert_eq!(None, vec.pop_back());
    /// ```
    pub fn pop_back(&mut self) -> Option<T> { self.base.pop() }

    /// Inserts `value` at `position`, shifting the following elements to the right.
    ///
    /// Returns `position`.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated, leaving the vector unchanged.
    ///
    /// #   Panics
    ///
    /// Panics if `position > len()`.
    pub fn try_insert(&mut self, position: usize, value: T) -> Result<usize> {
        self.base.insert_fill(position, Single(Some(value)))
    }

    /// Inserts `value` at `position`, shifting the following elements to the right.
    ///
    /// Returns `position`.
    ///
    /// #   Panics
    ///
    /// Panics if `position > len()`, or if the memory cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use origin::vector::Vector;
    /// let mut vec = Vector::from_slice(&[1, 2, 3]);
    ///
    /// assert_eq!(1, vec.insert(1, -1));
    /// assert_eq!([1, -1, 2, 3], vec.as_slice());
    /// ```
    pub fn insert(&mut self, position: usize, value: T) -> usize {
        self.try_insert(position, value).unwrap_or_else(|failure| panic_from_failure(failure))
    }

    /// Inserts the element created by `f` at `position`.
    ///
    /// `f` is invoked before any memory is allocated or relocated.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated, leaving the vector unchanged.
    ///
    /// #   Panics
    ///
    /// Panics if `position > len()`.
    pub fn try_emplace<F>(&mut self, position: usize, f: F) -> Result<usize>
    where
        F: FnOnce() -> T,
    {
        let value = f();
        self.try_insert(position, value)
    }

    /// Inserts the element created by `f` at `position`.
    ///
    /// #   Panics
    ///
    /// Panics if `position > len()`, or if the memory cannot be allocated.
    pub fn emplace<F>(&mut self, position: usize, f: F) -> usize
    where
        F: FnOnce() -> T,
    {
        self.try_emplace(position, f).unwrap_or_else(|failure| panic_from_failure(failure))
    }

    /// Inserts `n` clones of `value` at `position`.
    ///
    /// Returns `position`. Should a clone panic, the vector is left unchanged.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated, leaving the vector unchanged.
    ///
    /// #   Panics
    ///
    /// Panics if `position > len()`.
    pub fn try_insert_n(&mut self, position: usize, n: usize, value: &T) -> Result<usize>
    where
        T: Clone,
    {
        self.base.insert_fill(position, Copies { value, count: n })
    }

    /// Inserts `n` clones of `value` at `position`.
    ///
    /// #   Panics
    ///
    /// Panics if `position > len()`, or if the memory cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use origin::vector::Vector;
    /// let mut vec = Vector::from_slice(&[1, 2]);
    ///
    /// vec.insert_n(1, 3, &0);
    /// assert_eq!([1, 0, 0, 0, 2], vec.as_slice());
    /// ```
    pub fn insert_n(&mut self, position: usize, n: usize, value: &T) -> usize
    where
        T: Clone,
    {
        self.try_insert_n(position, n, value).unwrap_or_else(|failure| panic_from_failure(failure))
    }

    /// Inserts clones of the values of `source` at `position`.
    ///
    /// Returns `position`. Should a clone panic, the vector is left unchanged.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated, leaving the vector unchanged.
    ///
    /// #   Panics
    ///
    /// Panics if `position > len()`.
    pub fn try_insert_slice(&mut self, position: usize, source: &[T]) -> Result<usize>
    where
        T: Clone,
    {
        self.base.insert_fill(position, Clones(source))
    }

    /// Inserts clones of the values of `source` at `position`.
    ///
    /// #   Panics
    ///
    /// Panics if `position > len()`, or if the memory cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use origin::vector::Vector;
    /// let mut vec = Vector::from_slice(&[1, 5]);
    ///
    /// vec.insert_slice(1, &[2, 3, 4]);
    /// assert_eq!([1, 2, 3, 4, 5], vec.as_slice());
    /// ```
    pub fn insert_slice(&mut self, position: usize, source: &[T]) -> usize
    where
        T: Clone,
    {
        self.try_insert_slice(position, source).unwrap_or_else(|failure| panic_from_failure(failure))
    }

    /// Inserts the values of `collection` at `position`, one at a time.
    ///
    /// Returns `position`. Should the iteration fail, or panic, the values already inserted remain.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated.
    ///
    /// #   Panics
    ///
    /// Panics if `position > len()`.
    pub fn try_insert_iter<C>(&mut self, position: usize, collection: C) -> Result<usize>
    where
        C: IntoIterator<Item = T>,
    {
        assert!(position <= self.len(), "Out of bounds: {} > {}", position, self.len());

        for (index, value) in collection.into_iter().enumerate() {
            self.try_insert(position + index, value)?;
        }

        Ok(position)
    }

    /// Inserts the values of `collection` at `position`, one at a time.
    ///
    /// #   Panics
    ///
    /// Panics if `position > len()`, or if the memory cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use origin::vector::Vector;
    /// let mut vec = Vector::from_slice(&[1, 5]);
    ///
    /// vec.insert_iter(1, 2..5);
    /// assert_eq!([1, 2, 3, 4, 5], vec.as_slice());
    /// ```
    pub fn insert_iter<C>(&mut self, position: usize, collection: C) -> usize
    where
        C: IntoIterator<Item = T>,
    {
        self.try_insert_iter(position, collection).unwrap_or_else(|failure| panic_from_failure(failure))
    }

    /// Erases the element at `position`, shifting the following elements to the left.
    ///
    /// Returns `position`, which now holds the element which followed the erased one, if any.
    ///
    /// #   Panics
    ///
    /// Panics if `position >= len()`.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use origin::vector::Vector;
    /// let mut vec = Vector::from_slice(&[1, 2, 3]);
    ///
    /// let next = vec.erase(0);
    /// assert_eq!(2, vec[next]);
    /// assert_eq!([2, 3], vec.as_slice());
    /// ```
    pub fn erase(&mut self, position: usize) -> usize {
        assert!(position < self.len(), "Out of bounds: {} >= {}", position, self.len());

        self.base.shift_left(position, position + 1);

        position
    }

    /// Erases the elements in `range`, shifting the following elements to the left.
    ///
    /// Returns the start of the range, which now holds the element which followed the erased ones, if any.
    ///
    /// #   Panics
    ///
    /// Panics if the range is decreasing, or exceeds `len()`.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use origin::vector::Vector;
    /// let mut vec = Vector::from_slice(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    ///
    /// vec.erase_range(2..8);
    /// assert_eq!([1, 2, 9, 10], vec.as_slice());
    /// ```
    pub fn erase_range<R>(&mut self, range: R) -> usize
    where
        R: ops::RangeBounds<usize>,
    {
        let first = match range.start_bound() {
            ops::Bound::Included(&first) => first,
            ops::Bound::Excluded(&first) => first.saturating_add(1),
            ops::Bound::Unbounded => 0,
        };

        let last = match range.end_bound() {
            ops::Bound::Included(&last) => last.saturating_add(1),
            ops::Bound::Excluded(&last) => last,
            ops::Bound::Unbounded => self.len(),
        };

        self.base.shift_left(first, last);

        first
    }

    /// Exchanges the elements of `self` and `other`, in O(1).
    ///
    /// #   Panics
    ///
    /// Panics if the allocators are not equal.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use origin::vector::Vector;
    /// let mut a = Vector::from_slice(&[1, 2, 3]);
    /// let mut b = Vector::from_slice(&[4, 5]);
    ///
    /// a.swap(&mut b);
    ///
    /// assert_eq!([4, 5], a.as_slice());
    /// assert_eq!([1, 2, 3], b.as_slice());
    /// ```
    pub fn swap(&mut self, other: &mut Self) { self.base.swap(&mut other.base); }

    /// Replaces the elements by `n` clones of `value`.
    ///
    /// The replacement is built first: on failure, or panic, the vector is left unchanged.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated.
    pub fn try_assign_elem(&mut self, n: usize, value: &T) -> Result<()>
    where
        T: Clone,
    {
        let mut replacement = Self::try_from_elem_in(n, value, self.allocator())?;
        self.swap(&mut replacement);

        Ok(())
    }

    /// Replaces the elements by `n` clones of `value`.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be allocated.
    pub fn assign_elem(&mut self, n: usize, value: &T)
    where
        T: Clone,
    {
        self.try_assign_elem(n, value).unwrap_or_else(|failure| panic_from_failure(failure));
    }

    /// Replaces the elements by clones of the values of `source`.
    ///
    /// The replacement is built first: on failure, or panic, the vector is left unchanged.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated.
    pub fn try_assign_slice(&mut self, source: &[T]) -> Result<()>
    where
        T: Clone,
    {
        let mut replacement = Self::try_from_slice_in(source, self.allocator())?;
        self.swap(&mut replacement);

        Ok(())
    }

    /// Replaces the elements by clones of the values of `source`.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use origin::vector::Vector;
    /// let mut vec = Vector::from_slice(&[1, 2, 3]);
    ///
    /// vec.assign_slice(&[4, 5]);
    /// assert_eq!([4, 5], vec.as_slice());
    /// assert_eq!(2, vec.capacity());
    /// ```
    pub fn assign_slice(&mut self, source: &[T])
    where
        T: Clone,
    {
        self.try_assign_slice(source).unwrap_or_else(|failure| panic_from_failure(failure));
    }

    /// Replaces the elements by those of `source`, which is left empty.
    ///
    /// If the allocators are equal, the buffer of `source` is transferred in O(1). Otherwise, the elements of
    /// `source` are relocated into a buffer of exactly `source.len()` slots.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated, leaving both vectors unchanged.
    pub fn try_move_assign(&mut self, source: &mut Vector<'_, T, A>) -> Result<()> {
        let mut replacement = Self::try_take_in(source, self.allocator())?;
        self.swap(&mut replacement);

        Ok(())
    }

    /// Replaces the elements by those of `source`, which is left empty.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be allocated.
    pub fn move_assign(&mut self, source: &mut Vector<'_, T, A>) {
        self.try_move_assign(source).unwrap_or_else(|failure| panic_from_failure(failure));
    }

    /// Appends the values of `collection`, one at a time.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated; the values appended so far remain.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use origin::vector::Vector;
    /// let mut vec: Vector<i32> = Vector::new();
    /// assert_eq!(Ok(()), vec.try_extend([1, 2, 3].iter().copied()));
    /// assert_eq!(3, vec.len());
    /// ```
    pub fn try_extend<C>(&mut self, collection: C) -> Result<()>
    where
        C: IntoIterator<Item = T>,
    {
        for value in collection {
            self.try_push_back(value)?;
        }

        Ok(())
    }
}

unsafe impl<'a, T: Send, A: Allocator + Sync> Send for Vector<'a, T, A> {}

unsafe impl<'a, T: Sync, A: Allocator + Sync> Sync for Vector<'a, T, A> {}

impl<'a, T: Clone, A: Allocator> Clone for Vector<'a, T, A> {
    fn clone(&self) -> Self {
        self.try_clone().unwrap_or_else(|failure| panic_from_failure(failure))
    }

    fn clone_from(&mut self, source: &Self) {
        let mut replacement = source.try_clone_in(self.allocator())
            .unwrap_or_else(|failure| panic_from_failure(failure));

        self.swap(&mut replacement);
    }
}

#[cfg(feature = "with-std")]
impl<T> Default for Vector<'static, T, DefaultAllocator> {
    fn default() -> Self { Self::new() }
}

impl<'a, T: fmt::Debug, A: Allocator> fmt::Debug for Vector<'a, T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vector {{ capacity: {}, length: {}, elements: {:?} }}",
            self.capacity(),
            self.len(),
            self.as_slice()
        )
    }
}

impl<'a, T, A: Allocator> ops::Deref for Vector<'a, T, A> {
    type Target = [T];

    fn deref(&self) -> &[T] { self.as_slice() }
}

impl<'a, T, A: Allocator> ops::DerefMut for Vector<'a, T, A> {
    fn deref_mut(&mut self) -> &mut [T] { self.as_mut_slice() }
}

impl<'a, T, A: Allocator> AsRef<[T]> for Vector<'a, T, A> {
    fn as_ref(&self) -> &[T] { self.as_slice() }
}

impl<'a, T, A: Allocator> AsMut<[T]> for Vector<'a, T, A> {
    fn as_mut(&mut self) -> &mut [T] { self.as_mut_slice() }
}

impl<'a, T, A: Allocator, I: slice::SliceIndex<[T]>> ops::Index<I> for Vector<'a, T, A> {
    type Output = I::Output;

    fn index(&self, index: I) -> &I::Output { &self.as_slice()[index] }
}

impl<'a, T, A: Allocator, I: slice::SliceIndex<[T]>> ops::IndexMut<I> for Vector<'a, T, A> {
    fn index_mut(&mut self, index: I) -> &mut I::Output { &mut self.as_mut_slice()[index] }
}

impl<'a, T, A: Allocator> iter::Extend<T> for Vector<'a, T, A> {
    fn extend<C>(&mut self, collection: C)
    where
        C: IntoIterator<Item = T>,
    {
        self.try_extend(collection).unwrap_or_else(|failure| panic_from_failure(failure));
    }
}

impl<'a, 'b, T: Copy + 'b, A: Allocator> iter::Extend<&'b T> for Vector<'a, T, A> {
    fn extend<C>(&mut self, collection: C)
    where
        C: IntoIterator<Item = &'b T>,
    {
        self.try_extend(collection.into_iter().copied()).unwrap_or_else(|failure| panic_from_failure(failure));
    }
}

#[cfg(feature = "with-std")]
impl<T> iter::FromIterator<T> for Vector<'static, T, DefaultAllocator> {
    fn from_iter<C>(collection: C) -> Self
    where
        C: IntoIterator<Item = T>,
    {
        Self::try_from_iter_in(collection, &DEFAULT_ALLOCATOR).unwrap_or_else(|failure| panic_from_failure(failure))
    }
}

impl<'a, 'b, T, A: Allocator> IntoIterator for &'b Vector<'a, T, A> {
    type Item = &'b T;
    type IntoIter = slice::Iter<'b, T>;

    fn into_iter(self) -> Self::IntoIter { self.as_slice().iter() }
}

impl<'a, 'b, T, A: Allocator> IntoIterator for &'b mut Vector<'a, T, A> {
    type Item = &'b mut T;
    type IntoIter = slice::IterMut<'b, T>;

    fn into_iter(self) -> Self::IntoIter { self.as_mut_slice().iter_mut() }
}

impl<'a, 'b, T, U, A, B> PartialEq<Vector<'b, U, B>> for Vector<'a, T, A>
where
    T: PartialEq<U>,
    A: Allocator,
    B: Allocator,
{
    fn eq(&self, other: &Vector<'b, U, B>) -> bool { self.as_slice() == other.as_slice() }
}

impl<'a, T, U, A: Allocator> PartialEq<[U]> for Vector<'a, T, A>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool { self.as_slice() == other }
}

impl<'a, 'b, T, U, A: Allocator> PartialEq<&'b [U]> for Vector<'a, T, A>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&'b [U]) -> bool { self.as_slice() == *other }
}

impl<'a, T, U, A: Allocator, const N: usize> PartialEq<[U; N]> for Vector<'a, T, A>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool { self.as_slice() == &other[..] }
}

impl<'a, T, U, A: Allocator> PartialEq<Vector<'a, U, A>> for [T]
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<'a, U, A>) -> bool { self == other.as_slice() }
}

impl<'a, 'b, T, U, A: Allocator> PartialEq<Vector<'a, U, A>> for &'b [T]
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<'a, U, A>) -> bool { *self == other.as_slice() }
}

impl<'a, T, U, A: Allocator, const N: usize> PartialEq<Vector<'a, U, A>> for [T; N]
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<'a, U, A>) -> bool { &self[..] == other.as_slice() }
}

impl<'a, T: Eq, A: Allocator> Eq for Vector<'a, T, A> {}

impl<'a, T: PartialOrd, A: Allocator> PartialOrd for Vector<'a, T, A> {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> { self.as_slice().partial_cmp(other.as_slice()) }
}

impl<'a, T: Ord, A: Allocator> Ord for Vector<'a, T, A> {
    fn cmp(&self, other: &Self) -> cmp::Ordering { self.as_slice().cmp(other.as_slice()) }
}

impl<'a, T: hash::Hash, A: Allocator> hash::Hash for Vector<'a, T, A> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) { self.as_slice().hash(state) }
}
