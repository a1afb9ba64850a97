// This file is part of growable-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `GrowableArray`.
//!
//! Every fallible operation reports exactly one of these and leaves the
//! array in a well-defined state: empty after a failed
//! [`init`](crate::GrowableArray::init), unchanged after a failed
//! [`push`](crate::GrowableArray::push) or [`pop`](crate::GrowableArray::pop).
//!
//! All errors are `Copy` and implement `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// The allocator could not satisfy a request, or the requested size
/// overflowed the address space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationFailed;

impl fmt::Display for AllocationFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("allocation failed")
    }
}

impl CoreError for AllocationFailed {}

/// An element refused to be constructed (cloned or relocated).
///
/// Returned by [`Element`](crate::Element) hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstructionFailed;

impl fmt::Display for ConstructionFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("element construction failed")
    }
}

impl CoreError for ConstructionFailed {}

/// Errors returned by [`GrowableArray::init`](crate::GrowableArray::init).
///
/// After either error the array is empty: no storage, `len == capacity == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InitError {
    /// The buffer for the new elements could not be allocated.
    AllocationFailed,
    /// Copying one of the input values failed; the copies made before it were dropped.
    ConstructionFailed,
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed => f.write_str("init: allocation failed"),
            Self::ConstructionFailed => f.write_str("init: element construction failed"),
        }
    }
}

impl CoreError for InitError {}

impl From<AllocationFailed> for InitError {
    fn from(_: AllocationFailed) -> Self {
        Self::AllocationFailed
    }
}

impl From<ConstructionFailed> for InitError {
    fn from(_: ConstructionFailed) -> Self {
        Self::ConstructionFailed
    }
}

/// Errors returned by [`GrowableArray::push`](crate::GrowableArray::push).
///
/// After either error the array is exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AppendError {
    /// Growing the buffer failed.
    AllocationFailed,
    /// Relocating an existing element or copying the new one failed.
    ConstructionFailed,
}

impl fmt::Display for AppendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed => f.write_str("push: allocation failed"),
            Self::ConstructionFailed => f.write_str("push: element construction failed"),
        }
    }
}

impl CoreError for AppendError {}

impl From<AllocationFailed> for AppendError {
    fn from(_: AllocationFailed) -> Self {
        Self::AllocationFailed
    }
}

impl From<ConstructionFailed> for AppendError {
    fn from(_: ConstructionFailed) -> Self {
        Self::ConstructionFailed
    }
}

/// Errors returned by [`GrowableArray::pop`](crate::GrowableArray::pop).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum RemoveError {
    /// There was no element to remove.
    Empty,
}

impl fmt::Display for RemoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("pop on empty array"),
        }
    }
}

impl CoreError for RemoveError {}

#[cfg(test)]
mod tests {
    // Imports
    use super::{AllocationFailed, AppendError, ConstructionFailed, InitError, RemoveError};
    use alloc::string::{String, ToString};
    use core::error::Error as CoreError;

    fn takes_error(e: &dyn CoreError) -> String {
        e.to_string()
    }

    #[test]
    fn test_errors_are_core_errors() {
        assert!(takes_error(&RemoveError::Empty).contains("empty"));
        assert!(takes_error(&InitError::AllocationFailed).contains("allocation"));
        assert!(takes_error(&AppendError::ConstructionFailed).contains("construction"));
    }

    #[test]
    fn test_leaf_errors_convert_into_operation_errors() {
        assert_eq!(InitError::from(AllocationFailed), InitError::AllocationFailed);
        assert_eq!(InitError::from(ConstructionFailed), InitError::ConstructionFailed);
        assert_eq!(AppendError::from(AllocationFailed), AppendError::AllocationFailed);
        assert_eq!(AppendError::from(ConstructionFailed), AppendError::ConstructionFailed);
    }

    #[test]
    fn test_display_prefixes_name_the_operation() {
        assert_eq!(InitError::ConstructionFailed.to_string(), "init: element construction failed");
        assert_eq!(AppendError::AllocationFailed.to_string(), "push: allocation failed");
        assert_eq!(RemoveError::Empty.to_string(), "pop on empty array");
    }
}
