//! This crate provides [`UniquePtr<T>`], a single-owner heap pointer.
//!
//! The goal is a `Box`-like handle that can also be empty, with the ownership
//! operations spelled out explicitly: take, release and reset.
//!
//! **UniquePtr**
//!
//! [`UniquePtr<T>`] owns at most one allocation made by the global allocator
//! with the layout of `T`, so it converts losslessly from and into `Box<T>`.
//! Dropping it drops the pointee and frees the memory exactly once.
//!
//! It cannot be cloned. Ownership moves either by value, as for any Rust type,
//! or through [`take`](UniquePtr::take) and [`move_from`](UniquePtr::move_from),
//! which leave the source pointer null.
//!
//! **Access modes**
//!
//! Each accessor comes in two flavors:
//!
//! - checked: [`get`](UniquePtr::get), [`try_get`](UniquePtr::try_get),
//!   [`try_index`](UniquePtr::try_index), or the panicking `Deref` and `Index`.
//! - unchecked: [`as_ref_unchecked`](UniquePtr::as_ref_unchecked) and
//!   [`get_unchecked`](UniquePtr::get_unchecked). These are `unsafe`; with the
//!   `debug` feature or `debug_assertions` they still assert their precondition.
//!
//! **Factories**
//!
//! [`make_unique`] allocates and wraps a value. [`try_make_unique`] reports an
//! allocation failure instead of aborting. [`make_unique_slice`] and
//! [`make_unique_slice_from`] build array-backed pointers.
//!
//! # Examples
//!
//! ```
//! use flx_ptr::{UniquePtr, make_unique};
//!
//! let mut a = make_unique(42);
//! let b = UniquePtr::take(&mut a);
//!
//! assert!(a.is_null());
//! assert_eq!(*b, 42);
//! ```
#![expect(unsafe_code, reason = "Raw pointers are inherently unsafe.")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod error;
mod make;
mod slice;
mod unique;

#[cfg(feature = "serde")]
mod serde;

// -----------------------------------------------------------------------------
// Top-level exports

pub use error::{AllocError, IndexError, NullPtrError};
pub use make::{make_unique, make_unique_slice, make_unique_slice_from};
pub use make::{make_unique_with, try_make_unique};
pub use unique::UniquePtr;
