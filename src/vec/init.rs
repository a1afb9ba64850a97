// This file is part of growable-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{element::Element, error::InitError, vec::raw::Scratch, GrowableArray};

// External imports
use log::trace;

impl<T: Element> GrowableArray<T> {
    /// Replaces the contents with copies of `values`, in order.
    ///
    /// Any current contents are destroyed first. On success
    /// `len == capacity == values.len()`; an empty `values` leaves the array
    /// empty with no storage.
    ///
    /// On error the array is left empty. If copying `values[i]` fails, the
    /// copies of `values[..i]` are dropped before returning.
    pub fn init(&mut self, values: &[T]) -> Result<(), InitError> {
        if self.has_storage() {
            self.destroy();
        }
        let n = values.len();
        if n == 0 {
            return Ok(());
        }

        let mut scratch = Scratch::allocate(n)?;
        for value in values {
            scratch.push_owned(value.try_clone()?);
        }

        self.ptr = scratch.finish();
        self.len = n;
        self.cap = n;
        trace!("initialized array with {n} elements");
        Ok(())
    }

    /// Builds a new array holding copies of `values`.
    #[inline]
    pub fn try_from_slice(values: &[T]) -> Result<Self, InitError> {
        let mut out = Self::new();
        out.init(values)?;
        Ok(out)
    }
}
