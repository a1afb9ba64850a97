// This file is part of growable-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `GrowableArray` type and its inherent API.
//!
//! `GrowableArray<T>` owns one heap buffer and tracks how many of its slots
//! hold live values. Each operation lives in its own submodule; this file
//! holds the type, its observers, and the trait impls that only read the
//! live prefix.

mod destroy;
mod init;
mod pop;
mod push;
mod raw;
mod render;

// Core imports
use core::{fmt, marker::PhantomData, ptr::NonNull, slice};

/// A growable, heap-allocated array with manually managed element lifetimes.
///
/// `GrowableArray<T>` keeps a single contiguous buffer of `capacity` slots and
/// a logical length `len`:
///
/// - slots `[0, len)` hold live `T` values owned by the array;
/// - slots `[len, capacity)` are allocated but uninitialized, and are never
///   read or dropped;
/// - the array has storage if and only if `capacity > 0`, and
///   `capacity == 0` implies `len == 0`.
///
/// # Growth
///
/// [`push`](GrowableArray::push) on a full array grows the capacity to
/// `max(1, 2 * capacity)`. How the existing elements get to the new storage
/// depends on [`Element::TRIVIALLY_RELOCATABLE`](crate::Element::TRIVIALLY_RELOCATABLE):
///
/// - **relocatable**: the buffer is reallocated as one block, no element hook runs;
/// - **non-relocatable**: a fresh buffer is allocated and every element is
///   checked with [`Element::try_relocate`](crate::Element::try_relocate) and
///   moved across in index order. The old buffer is released only after
///   the new element is in place.
///
/// Either way a failed `push` leaves `len`, `capacity` and every element
/// exactly as they were.
///
/// # Ownership
///
/// The array exclusively owns its elements. Any growth may move them, so
/// references into the array never outlive a mutating call (the borrow
/// checker enforces this). Dropping the array calls
/// [`destroy`](GrowableArray::destroy).
///
/// # Examples
///
/// ```rust
/// use growable_array::GrowableArray;
///
/// let mut a = GrowableArray::try_from_slice(&[10, 20, 30, 40]).unwrap();
/// assert_eq!(a.render(), "[10 20 30 40]");
/// a.push(&5).unwrap();
/// assert_eq!(a.render(), "[10 20 30 40 5]");
/// a.pop().unwrap();
/// a.destroy();
/// assert_eq!(a.render(), "[]");
/// assert_eq!((a.len(), a.capacity()), (0, 0));
/// ```
pub struct GrowableArray<T> {
    // Dangling while `cap == 0`.
    pub(crate) ptr: NonNull<T>,
    pub(crate) len: usize,
    pub(crate) cap: usize,
    _marker: PhantomData<T>,
}

// SAFETY: the array owns its elements outright; moving it to another thread
// moves those elements with it.
unsafe impl<T: Send> Send for GrowableArray<T> {}
// SAFETY: shared access only hands out `&[T]`.
unsafe impl<T: Sync> Sync for GrowableArray<T> {}

impl<T> GrowableArray<T> {
    /// Constructs an empty array without allocating.
    #[inline]
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            len: 0,
            cap: 0,
            _marker: PhantomData,
        }
    }

    /// Returns the number of live elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.cap
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the array currently owns a buffer.
    #[inline]
    pub const fn has_storage(&self) -> bool {
        self.cap > 0
    }

    /// Returns the live elements `[0, len)` as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `ptr` is either dangling with `len == 0`, or points to a
        // buffer whose first `len` slots are initialized.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }
}

impl<T> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowableArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowableArray")
            .field("len", &self.len)
            .field("capacity", &self.cap)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for GrowableArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq> Eq for GrowableArray<T> {}

impl<T: PartialEq> PartialEq<[T]> for GrowableArray<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}
