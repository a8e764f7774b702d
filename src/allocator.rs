//! Allocator.
//!
//! The `Allocator` trait allows a user to customize allocation on a per instance basis, without depending on the
//! `alloc` crate.
//!
//! Containers do not own their allocator: they hold a reference to it, so that a single allocator may serve many
//! containers. The allocator must outlive all containers referring to it.
//!
//! Apart from memory acquisition and release, the allocator is the hook through which values are constructed into, and
//! destroyed within, the memory it provided.
use super::root::{alloc, ptr};

/// Layout, re-exported.
pub type Layout = alloc::Layout;

/// Allocator
pub trait Allocator {
    /// Allocates memory as per the size and alignment requirements.
    ///
    /// May return a null pointer if the allocation cannot be satisfied.
    ///
    /// #   Safety
    ///
    /// -   Assumes that the size of the Layout is non-zero.
    unsafe fn allocate(&self, layout: Layout) -> *mut u8;

    /// Deallocates memory.
    ///
    /// #   Safety
    ///
    /// -   Assumes that `ptr` was allocated by `self.allocate`, or by an allocator which `equals` self.
    /// -   Assumes that `ptr` was not already deallocated.
    /// -   Assumes that `layout` matches the layout with which `ptr` was allocated.
    unsafe fn deallocate(&self, ptr: *mut u8, layout: Layout);

    /// Returns whether memory allocated by `self` may be deallocated by `other`, and vice-versa.
    ///
    /// Containers only exchange their memory, rather than their elements, when their allocators are equal.
    ///
    /// By default, an allocator is only equal to itself. Stateless allocators should always be equal.
    fn equals(&self, other: &Self) -> bool {
        ptr::eq(self, other)
    }

    /// Constructs `value` in the uninitialized memory pointed to by `place`.
    ///
    /// #   Safety
    ///
    /// -   Assumes that `place` is valid for writes, suitably aligned, and uninitialized.
    unsafe fn construct<T>(&self, place: *mut T, value: T) {
        //  Safety:
        //  -   Forwarding.
        unsafe { ptr::write(place, value) }
    }

    /// Destroys the value pointed to by `place`, leaving the memory uninitialized.
    ///
    /// #   Safety
    ///
    /// -   Assumes that `place` points to an initialized value, which is not used afterwards.
    unsafe fn destroy<T>(&self, place: *mut T) {
        //  Safety:
        //  -   Forwarding.
        unsafe { ptr::drop_in_place(place) }
    }
}

/// DefaultAllocator
///
/// A default implementation of the `Allocator` trait, relying on the `alloc` crate global allocator.
#[cfg(feature = "with-std")]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DefaultAllocator;

/// The instance of `DefaultAllocator` used by containers constructed without an explicit allocator.
#[cfg(feature = "with-std")]
pub static DEFAULT_ALLOCATOR: DefaultAllocator = DefaultAllocator;

#[cfg(feature = "with-std")]
impl Allocator for DefaultAllocator {
    unsafe fn allocate(&self, layout: Layout) -> *mut u8 {
        //  Safety:
        //  -   Forwarding.
        unsafe { alloc::alloc(layout) }
    }

    unsafe fn deallocate(&self, ptr: *mut u8, layout: Layout) {
        //  Safety:
        //  -   Forwarding.
        unsafe { alloc::dealloc(ptr, layout) }
    }

    fn equals(&self, _: &Self) -> bool { true }
}
