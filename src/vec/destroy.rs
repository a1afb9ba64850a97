// This file is part of growable-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{vec::raw, GrowableArray};

// Core imports
use core::{mem, ptr::{self, NonNull}};

// External imports
use log::trace;

impl<T> GrowableArray<T> {
    /// Drops every element in index order, releases the buffer, and resets
    /// to the empty state. A no-op on an array without storage.
    pub fn destroy(&mut self) {
        if !self.has_storage() {
            return;
        }
        let len = mem::replace(&mut self.len, 0);
        let cap = mem::replace(&mut self.cap, 0);
        let ptr = mem::replace(&mut self.ptr, NonNull::dangling());
        // SAFETY: the first `len` slots were live and the buffer came from
        // `raw` with capacity `cap`. `self` no longer refers to either.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(ptr.as_ptr(), len));
            raw::release(ptr, cap);
        }
        trace!("destroyed array: {len} elements, {cap} slots");
    }
}

impl<T> Drop for GrowableArray<T> {
    fn drop(&mut self) {
        self.destroy();
    }
}
