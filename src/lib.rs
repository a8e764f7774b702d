#![cfg_attr(not(feature = "with-std"), no_std)]
//  Lints
#![allow(clippy::module_inception)]

//! #   The Origin Library
//!
//! An allocator-aware dynamic array, with explicit control over growth and relocation.
//!
//! -   The `Vector`: a contiguous growable array, with faillible allocation.
//! -   The `Allocator`: the source of memory, and the hook for the construction and destruction of values.
//! -   The `memory` algorithms: construction and destruction of ranges of values in uninitialized memory.
//!
//! Should cloning a value panic, insertions roll back: the values cloned so far are destroyed, and the container is
//! left unchanged. Should dropping a value panic, the container remains consistent and no value is dropped twice, but
//! the values which remained to be destroyed are leaked.

pub mod allocator;
pub mod failure;
pub mod memory;
pub mod vector;

mod utils;

use self::utils::root;
