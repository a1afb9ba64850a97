// This file is part of growable-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    element::Element,
    error::{AppendError, ConstructionFailed},
    vec::raw::{self, Scratch},
    GrowableArray,
};

// Core imports
use core::ptr;

// External imports
use log::debug;

impl<T: Element> GrowableArray<T> {
    /// Appends a copy of `value`, growing the buffer when it is full.
    ///
    /// On error nothing changes: `len`, `capacity`, the buffer and every
    /// existing element are exactly as before the call.
    #[inline]
    pub fn push(&mut self, value: &T) -> Result<(), AppendError> {
        self.try_push_with(|| value.try_clone())
    }

    /// Appends the value produced by `make`.
    ///
    /// `make` runs at most once. On the relocating growth path it runs after
    /// every existing element has been relocated into the new buffer.
    pub(crate) fn try_push_with<F>(&mut self, make: F) -> Result<(), AppendError>
    where
        F: FnOnce() -> Result<T, ConstructionFailed>,
    {
        if self.len < self.cap {
            let value = make()?;
            // SAFETY: `len < cap`, so slot `len` is allocated and uninitialized.
            unsafe { self.ptr.as_ptr().add(self.len).write(value) };
            self.len += 1;
            return Ok(());
        }

        let new_cap = raw::grown_capacity(self.cap)?;
        if T::TRIVIALLY_RELOCATABLE {
            self.grow_in_place(new_cap, make)
        } else {
            self.grow_by_relocation(new_cap, make)
        }
    }

    // The whole buffer moves as one block; no element hook runs.
    fn grow_in_place<F>(&mut self, new_cap: usize, make: F) -> Result<(), AppendError>
    where
        F: FnOnce() -> Result<T, ConstructionFailed>,
    {
        // Built first so a failure cannot leave a grown but unchanged array behind.
        let value = make()?;
        let ptr = if self.has_storage() {
            // SAFETY: `ptr` holds a buffer of `cap > 0` slots from `raw`.
            unsafe { raw::reallocate(self.ptr, self.cap, new_cap)? }
        } else {
            raw::allocate(new_cap)?
        };
        debug!("grew in place: {} -> {new_cap} slots", self.cap);

        self.ptr = ptr;
        self.cap = new_cap;
        // SAFETY: `len < new_cap` and slot `len` is uninitialized.
        unsafe { self.ptr.as_ptr().add(self.len).write(value) };
        self.len += 1;
        Ok(())
    }

    // Elements move one by one into a fresh buffer. Until the new value is in
    // place the old buffer still owns every element, so bailing out only has
    // to release the fresh buffer: the bitwise copies in it are not dropped.
    fn grow_by_relocation<F>(&mut self, new_cap: usize, make: F) -> Result<(), AppendError>
    where
        F: FnOnce() -> Result<T, ConstructionFailed>,
    {
        let mut fresh = Scratch::allocate(new_cap)?;
        for i in 0..self.len {
            // SAFETY: `i < len`, so the slot holds a live element.
            let src = unsafe { self.ptr.as_ptr().add(i) };
            // SAFETY: as above.
            let elem = unsafe { &*src };
            elem.try_relocate()?;
            // SAFETY: `i < len < new_cap`; the two buffers are distinct allocations.
            unsafe { ptr::copy_nonoverlapping(src, fresh.slot(i), 1) };
        }
        let value = make()?;
        // SAFETY: `len < new_cap` and slot `len` of the fresh buffer is uninitialized.
        unsafe { fresh.slot(self.len).write(value) };

        let fresh = fresh.finish();
        // The elements now live in `fresh`; the old slots are moved-from bytes.
        // SAFETY: the old buffer came from `raw` with capacity `cap`.
        unsafe { raw::release(self.ptr, self.cap) };
        debug!("grew by relocation: {} -> {new_cap} slots", self.cap);

        self.ptr = fresh;
        self.cap = new_cap;
        self.len += 1;
        Ok(())
    }
}
