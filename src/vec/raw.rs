// This file is part of growable-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Raw buffer management shared by the operations.
//
// Invariants:
// - A buffer of `cap > 0` slots for a sized `T` comes from `alloc` with
//   `Layout::array::<T>(cap)` and goes back to `dealloc` with the same layout.
// - Zero-sized `T` never touches the allocator; its buffer is a dangling pointer.
// - Nothing here constructs or drops elements, except `Scratch`, which
//   drops the prefix it was told it owns.

// Crate imports
use crate::error::AllocationFailed;

// Alloc imports
use alloc::alloc::{alloc, dealloc, realloc, Layout};

// Core imports
use core::{mem, ptr::{self, NonNull}};

// External imports
use log::error;

#[inline]
const fn is_zst<T>() -> bool {
    mem::size_of::<T>() == 0
}

/// Capacity after one growth step: `max(1, 2 * cap)`.
pub(crate) fn grown_capacity(cap: usize) -> Result<usize, AllocationFailed> {
    if cap == 0 {
        Ok(1)
    } else {
        cap.checked_mul(2).ok_or(AllocationFailed)
    }
}

fn layout_for<T>(cap: usize) -> Result<Layout, AllocationFailed> {
    Layout::array::<T>(cap).map_err(|_| AllocationFailed)
}

/// Allocates uninitialized room for exactly `cap` values (`cap > 0`).
pub(crate) fn allocate<T>(cap: usize) -> Result<NonNull<T>, AllocationFailed> {
    debug_assert!(cap > 0);
    if is_zst::<T>() {
        return Ok(NonNull::dangling());
    }
    let layout = layout_for::<T>(cap)?;
    // SAFETY: `layout` has a non-zero size since `cap > 0` and `T` is not zero-sized.
    let raw = unsafe { alloc(layout) };
    NonNull::new(raw.cast::<T>()).ok_or_else(|| {
        error!("allocation failed: {} bytes for {cap} slots", layout.size());
        AllocationFailed
    })
}

/// Resizes a buffer of `old_cap` slots to `new_cap` slots as one block,
/// preserving its bytes.
///
/// On failure the original buffer is untouched and still owned by the caller.
///
/// # Safety
///
/// `ptr` must come from [`allocate`] or [`reallocate`] with capacity `old_cap > 0`.
pub(crate) unsafe fn reallocate<T>(
    ptr: NonNull<T>,
    old_cap: usize,
    new_cap: usize,
) -> Result<NonNull<T>, AllocationFailed> {
    if is_zst::<T>() {
        return Ok(ptr);
    }
    let old_layout = layout_for::<T>(old_cap)?;
    let new_layout = layout_for::<T>(new_cap)?;
    // SAFETY: the caller guarantees `ptr` was allocated with `old_layout`;
    // `new_layout.size()` is non-zero and fits in `isize`.
    let raw = unsafe { realloc(ptr.as_ptr().cast::<u8>(), old_layout, new_layout.size()) };
    NonNull::new(raw.cast::<T>()).ok_or_else(|| {
        error!(
            "reallocation failed: {} -> {} bytes",
            old_layout.size(),
            new_layout.size()
        );
        AllocationFailed
    })
}

/// Returns a buffer to the allocator without dropping anything in it.
///
/// # Safety
///
/// `ptr` must come from [`allocate`] or [`reallocate`] with capacity `cap`,
/// and must not be used afterwards.
pub(crate) unsafe fn release<T>(ptr: NonNull<T>, cap: usize) {
    if cap == 0 || is_zst::<T>() {
        return;
    }
    if let Ok(layout) = layout_for::<T>(cap) {
        // SAFETY: same layout the buffer was allocated with.
        unsafe { dealloc(ptr.as_ptr().cast::<u8>(), layout) };
    }
}

/// A freshly allocated buffer under construction.
///
/// Until [`Scratch::finish`] is called, dropping it drops the first `owned`
/// slots and releases the buffer. That is the unwind path of `init` and of
/// non-relocatable growth.
pub(crate) struct Scratch<T> {
    ptr: NonNull<T>,
    cap: usize,
    owned: usize,
}

impl<T> Scratch<T> {
    pub(crate) fn allocate(cap: usize) -> Result<Self, AllocationFailed> {
        Ok(Self {
            ptr: allocate::<T>(cap)?,
            cap,
            owned: 0,
        })
    }

    #[inline]
    pub(crate) fn slot(&self, i: usize) -> *mut T {
        debug_assert!(i < self.cap);
        // SAFETY: `i < cap`, so the offset stays inside the allocation.
        unsafe { self.ptr.as_ptr().add(i) }
    }

    /// Writes `value` into slot `owned` and takes ownership of it.
    #[inline]
    pub(crate) fn push_owned(&mut self, value: T) {
        let slot = self.slot(self.owned);
        // SAFETY: slot `owned` is in bounds and still uninitialized.
        unsafe { slot.write(value) };
        self.owned += 1;
    }

    /// Hands the buffer over; nothing is dropped or released.
    #[inline]
    pub(crate) fn finish(self) -> NonNull<T> {
        let ptr = self.ptr;
        mem::forget(self);
        ptr
    }
}

impl<T> Drop for Scratch<T> {
    fn drop(&mut self) {
        // SAFETY: exactly the first `owned` slots were initialized through
        // `push_owned`, and the buffer came from `allocate(cap)`.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.owned));
            release(self.ptr, self.cap);
        }
    }
}
