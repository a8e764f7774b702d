//! Internal testing utilities

use std::cell::{Cell, RefCell};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::allocator::{Allocator, DefaultAllocator, Layout};
use crate::root::{fmt, iter, ptr};

//  Allocation
//
//  Description of an allocation.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct Allocation {
    //  The size of the allocation, in bytes.
    pub size: usize,
    //  The alignment of the allocation, in bytes.
    pub alignment: usize,
    //  The pointer allocated.
    pub pointer: *mut u8,
}

impl Allocation {
    pub fn new(pointer: *mut u8, layout: Layout) -> Self {
        Allocation {
            size: layout.size(),
            alignment: layout.align(),
            pointer,
        }
    }

    pub fn layout(&self) -> Layout {
        Layout::from_size_align(self.size, self.alignment).unwrap()
    }
}

//  Test Allocator
//
//  An allocator specifically for testing:
//  -   Allows injecting allocation failures.
//  -   Checks that allocations and deallocations match.
//  -   Records the size of every allocation ever performed.
#[derive(Default)]
pub struct TestAllocator {
    //  The actual allocator.
    pub allocator: DefaultAllocator,
    //  The number of allocations allowed.
    pub allowed: Cell<usize>,
    //  The allocations performed; to check deallocation requests.
    pub allocations: RefCell<Vec<Allocation>>,
    //  The sizes of all allocations performed, in order.
    pub history: RefCell<Vec<usize>>,
}

impl TestAllocator {
    //  Creates an instance allowing up to `allowed` allocations.
    pub fn new(allowed: usize) -> Self {
        let result = Self::default();
        result.allowed.set(allowed);
        result
    }

    //  Creates an instance allowing any number of allocations.
    pub fn unlimited() -> Self { Self::new(usize::MAX) }

    pub fn allocations(&self) -> Vec<Allocation> {
        self.allocations.borrow().clone()
    }

    pub fn allocation_sizes(&self) -> Vec<usize> {
        self.allocations.borrow().iter()
            .map(|&a| a.size)
            .collect()
    }

    pub fn history(&self) -> Vec<usize> {
        self.history.borrow().clone()
    }

    pub fn clear(&self) {
        for a in self.allocations.borrow_mut().drain(..) {
            //  Safety:
            //  -   Were allocated, and not deallocated.
            unsafe { self.allocator.deallocate(a.pointer, a.layout()) };
        }
    }

    fn locate(&self, allocation: Allocation) -> Option<usize> {
        self.allocations.borrow().iter().position(|a| *a == allocation)
    }
}

impl Allocator for TestAllocator {
    unsafe fn allocate(&self, layout: Layout) -> *mut u8 {
        if self.allowed.get() == 0 {
            return ptr::null_mut();
        }

        self.allowed.set(self.allowed.get() - 1);

        let result = self.allocator.allocate(layout);
        assert_ne!(ptr::null_mut(), result);

        let allocation = Allocation::new(result, layout);
        self.allocations.borrow_mut().push(allocation);
        self.history.borrow_mut().push(layout.size());

        result
    }

    unsafe fn deallocate(&self, ptr: *mut u8, layout: Layout) {
        let allocation = Allocation::new(ptr, layout);

        if let Some(index) = self.locate(allocation) {
            self.allocations.borrow_mut().remove(index);
        } else {
            panic!("Could not find {:?} in {:?}",
                allocation, &*self.allocations.borrow());
        }

        self.allocator.deallocate(ptr, layout);
    }
}

impl Drop for TestAllocator {
    fn drop(&mut self) { self.clear() }
}

//  Counting Allocator
//
//  A thread-safe allocator counting allocations and deallocations, to share
//  across threads.
#[derive(Default)]
pub struct CountingAllocator {
    allocator: DefaultAllocator,
    allocated: AtomicUsize,
    deallocated: AtomicUsize,
}

impl CountingAllocator {
    pub fn allocated(&self) -> usize { self.allocated.load(Ordering::Relaxed) }

    pub fn deallocated(&self) -> usize { self.deallocated.load(Ordering::Relaxed) }
}

impl Allocator for CountingAllocator {
    unsafe fn allocate(&self, layout: Layout) -> *mut u8 {
        self.allocated.fetch_add(1, Ordering::Relaxed);
        self.allocator.allocate(layout)
    }

    unsafe fn deallocate(&self, ptr: *mut u8, layout: Layout) {
        self.deallocated.fetch_add(1, Ordering::Relaxed);
        self.allocator.deallocate(ptr, layout)
    }
}

//  SpyCount
//
//  A counter of the number of instances of elements.
pub struct SpyCount(AtomicUsize);

impl SpyCount {
    pub fn zero() -> Self { SpyCount(AtomicUsize::new(0)) }

    pub fn get(&self) -> usize { self.0.load(Ordering::Relaxed) }

    fn decrement(&self) { self.0.fetch_sub(1, Ordering::Relaxed); }

    fn increment(&self) { self.0.fetch_add(1, Ordering::Relaxed); }
}

//  Spy Element
//
//  An element tracking the number of instances, helpful to ensure proper drop.
pub struct SpyElement<'a> {
    count: &'a SpyCount,
}

impl<'a> SpyElement<'a> {
    pub fn new(count: &'a SpyCount) -> Self {
        count.increment();
        SpyElement { count }
    }
}

impl<'a> Clone for SpyElement<'a> {
    fn clone(&self) -> Self { Self::new(self.count) }
}

impl<'a> Drop for SpyElement<'a> {
    fn drop(&mut self) {
        self.count.decrement();
    }
}

//  A value which may panic on drop.
#[derive(Debug, Eq, Hash, PartialEq)]
pub struct PanickyDrop<T>(pub T, bool);

impl<T> PanickyDrop<T> {
    //  Creates a normal instance.
    pub fn new(value: T) -> Self { Self(value, false) }

    //  Creates a panicky instance.
    pub fn panicky(value: T) -> Self { Self(value, true) }
}

impl<T> Drop for PanickyDrop<T> {
    fn drop(&mut self) { if self.1 { panic!("Oh No!") } }
}

//  CloneBudget
//
//  The number of clones allowed before a PanickyClone panics.
pub struct CloneBudget(Cell<usize>);

impl CloneBudget {
    pub fn new(allowed: usize) -> Self { Self(Cell::new(allowed)) }

    pub fn unlimited() -> Self { Self::new(usize::MAX) }

    pub fn set(&self, allowed: usize) { self.0.set(allowed) }
}

//  A value which panics on clone, once its budget is exhausted.
//
//  Instances are spied upon, to check that no instance is leaked or dropped
//  twice.
pub struct PanickyClone<'a> {
    pub value: u32,
    spy: SpyElement<'a>,
    budget: &'a CloneBudget,
}

impl<'a> PanickyClone<'a> {
    pub fn new(value: u32, count: &'a SpyCount, budget: &'a CloneBudget) -> Self {
        Self { value, spy: SpyElement::new(count), budget }
    }
}

impl<'a> Clone for PanickyClone<'a> {
    fn clone(&self) -> Self {
        let allowed = self.budget.0.get();

        if allowed == 0 {
            panic!("Oh No!");
        }

        self.budget.0.set(allowed - 1);

        Self { value: self.value, spy: self.spy.clone(), budget: self.budget }
    }
}

impl<'a> PartialEq for PanickyClone<'a> {
    fn eq(&self, other: &Self) -> bool { self.value == other.value }
}

impl<'a> fmt::Debug for PanickyClone<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

//  An Iterator which panics when reaching the configured count.
pub struct PanickyIterator(u32, u32);

impl PanickyIterator {
    //  Creates an instance configured to panic after yielding `count`
    //  elements.
    pub fn new(count: u32) -> PanickyIterator { PanickyIterator(0, count) }
}

impl iter::Iterator for PanickyIterator {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        assert_ne!(self.0, self.1);

        let result = self.0;
        self.0 += 1;
        Some(result)
    }
}
