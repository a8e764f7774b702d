//! #   The Vector.
//!
//! The `Vector` is a dynamically sized, contiguous, array of elements, whose memory is obtained from a user-supplied
//! `Allocator`.
//!
//! Contrary to `Vec`, every operation which may allocate is available in a faillible `try_xxx` version, returning a
//! `Result`, alongside the convenience `xxx` version, which panics on failure.
//!
//! ##  Under the covers.
//!
//! The `Vector` is built in layers:
//!
//! -   The `VectorCore` describes the buffer: its start, its length and its capacity.
//! -   The `VectorBase` owns the buffer: it allocates, relocates, and releases it, and implements the primitives
//!     opening and closing gaps amid the elements.
//! -   The `Vector` itself expresses the public API in terms of those primitives.
//!
//! When appending to a full `Vector`, its capacity grows to 4 if it was empty, and doubles otherwise. All the other
//! relocations are explicit, or sized to fit the insertion.
//!
//! #   Example: basic
//!
//! ```
//! use origin::vector::Vector;
//!
//! let mut vec: Vector<i32> = Vector::new();
//! vec.push_back(1);
//! vec.push_back(2);
//!
//! assert_eq!(2, vec.len());
//! assert_eq!(4, vec.capacity());
//!
//! vec.insert(1, 3);
//! vec.insert_slice(0, &[4, 5]);
//!
//! assert_eq!([4, 5, 1, 3, 2], vec.as_slice());
//!
//! vec.erase_range(1..3);
//!
//! assert_eq!([4, 3, 2], vec.as_slice());
//! ```
//!
//! #   Example: custom allocator
//!
//! The allocator is referred to, rather than owned, so that a single allocator may serve many vectors. Vectors only
//! exchange their buffers when their allocators are equal.
//!
//! ```
//! use origin::allocator::DefaultAllocator;
//! use origin::vector::Vector;
//!
//! let allocator = DefaultAllocator;
//!
//! let mut vec = Vector::with_capacity_in(2, &allocator);
//! vec.push_back("Hello");
//! vec.push_back("World");
//!
//! assert!(vec.is_full());
//!
//! let copy = vec.clone();
//! assert_eq!(vec, copy);
//! ```
//!
//! #   Example: faillible allocations
//!
//! ```
//! use origin::failure::Failure;
//! use origin::vector::Vector;
//!
//! let mut vec: Vector<u64> = Vector::new();
//!
//! assert_eq!(Err(Failure::BytesOverflow), vec.try_reserve(usize::MAX));
//! assert_eq!(0, vec.capacity());
//! ```

mod base;
mod capacity;
mod core;
mod vector;

pub use self::base::VectorBase;
pub use self::core::VectorCore;
pub use self::vector::Vector;

pub use self::capacity::INITIAL_CAPACITY;

use super::allocator;
use super::failure;
use super::memory;
use super::root;
