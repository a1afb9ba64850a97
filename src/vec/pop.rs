// This file is part of growable-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::RemoveError, GrowableArray};

// Core imports
use core::{mem, ptr};

impl<T> GrowableArray<T> {
    /// Drops the last element. Capacity is never reduced.
    ///
    /// Returns [`RemoveError::Empty`] without touching anything if there is
    /// no element.
    #[inline]
    pub fn pop(&mut self) -> Result<(), RemoveError> {
        if self.len == 0 {
            return Err(RemoveError::Empty);
        }
        self.len -= 1;
        if mem::needs_drop::<T>() {
            // SAFETY: slot `len` held the last live element; `len` was lowered
            // first so it is never seen as live again.
            unsafe { ptr::drop_in_place(self.ptr.as_ptr().add(self.len)) };
        }
        Ok(())
    }
}
