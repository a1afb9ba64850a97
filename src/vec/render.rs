// This file is part of growable-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::GrowableArray;

// Alloc imports
use alloc::string::{String, ToString};

// Core imports
use core::fmt;

impl<T: fmt::Display> GrowableArray<T> {
    /// Renders the live elements as `[a b c]`: bracketed, single-space
    /// separated, no trailing space. An empty array renders as `[]`.
    #[inline]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

/// Same text as [`GrowableArray::render`].
impl<T: fmt::Display> fmt::Display for GrowableArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.as_slice().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}
