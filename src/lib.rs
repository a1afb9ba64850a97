// This file is part of growable-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `growable-array`
//!
//! A `no_std` (plus `alloc`) growable array whose element lifetimes are
//! managed by hand on top of a single raw heap buffer.
//!
//! The core type, [`GrowableArray<T>`], owns one contiguous allocation of
//! `capacity` slots and tracks a logical length `len ∈ 0..=capacity`. Only
//! the prefix `[0, len)` holds live values; the tail is uninitialized
//! memory that is never read or dropped.
//!
//! ## Operations
//!
//! | Operation | Method | Failure |
//! |---|---|---|
//! | initialize from values | [`GrowableArray::init`], [`GrowableArray::try_from_slice`] | [`InitError`], array left empty |
//! | append | [`GrowableArray::push`] | [`AppendError`], array left unchanged |
//! | remove last | [`GrowableArray::pop`] | [`RemoveError::Empty`] |
//! | destroy | [`GrowableArray::destroy`] (also on `Drop`) | none |
//! | render | [`GrowableArray::render`], `Display` | none |
//!
//! Nothing panics on allocation failure or on a failed element copy: every
//! failure is returned to the caller, with all partial work unwound.
//!
//! ## Element types
//!
//! Elements implement [`Element`], which says whether the type can be
//! relocated by a raw byte copy and how to copy-construct a value. The
//! answer picks the growth strategy at compile time:
//!
//! - **trivially relocatable** (integers, floats, `bool`, `char`, `()`):
//!   the buffer is `realloc`ed as one block;
//! - **everything else** (`String`, `Vec<U>`, `Box<U>`, user types): a new
//!   buffer is allocated, elements are relocated one by one, and the old
//!   buffer is released only once the append has fully succeeded.
//!
//! ## Features
//!
//! - `serde`
//!   - Enables `Serialize` / `Deserialize` for `GrowableArray<T>`.
//!   - Deserialization requires `T: Deserialize<'de> + Element`.
//!
//! - `demo`
//!   - Builds the `growable-array` demo binary, which installs
//!     `pretty_env_logger`. The library itself never depends on it.
//!
//! ## Logging
//!
//! Allocation failures are reported through the [`log`] facade at `error`
//! level, growth at `debug`, and init/destroy at `trace`.
//!
//! ## Example
//!
//! ```rust
//! use growable_array::{GrowableArray, RemoveError};
//!
//! let mut names: GrowableArray<String> = GrowableArray::new();
//! names.push(&"ada".to_string()).unwrap();
//! names.push(&"grace".to_string()).unwrap();
//! assert_eq!(names.render(), "[ada grace]");
//! names.pop().unwrap();
//! names.pop().unwrap();
//! assert_eq!(names.pop(), Err(RemoveError::Empty));
//! ```
//!
//! The array is single-threaded and has no internal synchronization. It is
//! `Send`/`Sync` exactly when `T` is.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod element;
mod error;
#[cfg(feature = "serde")]
mod serde;
#[cfg(test)]
mod tracked;
mod vec;

// Public exports (crate API surface)
pub use element::Element;
pub use error::{AllocationFailed, AppendError, ConstructionFailed, InitError, RemoveError};
pub use vec::GrowableArray;
