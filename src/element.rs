// This file is part of growable-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The [`Element`] trait: what `GrowableArray` needs from the values it stores.
//!
//! The array manages element lifetimes by hand, so instead of relying on
//! `Clone` it asks the element type three things:
//!
//! - whether its values can be relocated by copying bytes alone
//!   ([`Element::TRIVIALLY_RELOCATABLE`]), which selects the growth path;
//! - how to copy-construct a value ([`Element::try_clone`]);
//! - whether a value may be moved into a new buffer ([`Element::try_relocate`]).
//!
//! The last two may fail, which lets callers (and tests) observe the
//! rollback behavior of `init` and `push`.

// Crate imports
use crate::error::ConstructionFailed;

// Alloc imports
use alloc::{boxed::Box, string::String, vec::Vec};

/// A value that can live inside a [`GrowableArray`](crate::GrowableArray).
pub trait Element: Sized {
    /// `true` if a value stays valid after its bytes are copied to another
    /// address without running any hook.
    ///
    /// When set, growth reallocates the whole buffer as one block and never
    /// calls [`try_relocate`](Element::try_relocate). The constant is read at
    /// compile time, so the choice is made once per type.
    const TRIVIALLY_RELOCATABLE: bool = false;

    /// Copy-constructs a new value from `self`.
    fn try_clone(&self) -> Result<Self, ConstructionFailed>;

    /// Called for each existing element, in index order, right before it is
    /// moved into a freshly allocated buffer during growth.
    ///
    /// Returning an error aborts the growth. The element itself is not
    /// consumed: it stays in the old buffer, which the array keeps.
    #[inline]
    fn try_relocate(&self) -> Result<(), ConstructionFailed> {
        Ok(())
    }
}

macro_rules! trivial_element {
    ($($t:ty),* $(,)?) => {
        $(
            impl Element for $t {
                const TRIVIALLY_RELOCATABLE: bool = true;

                #[inline]
                fn try_clone(&self) -> Result<Self, ConstructionFailed> {
                    Ok(*self)
                }
            }
        )*
    };
}

trivial_element!(
    (), bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
);

impl Element for &str {
    const TRIVIALLY_RELOCATABLE: bool = true;

    #[inline]
    fn try_clone(&self) -> Result<Self, ConstructionFailed> {
        Ok(*self)
    }
}

impl<U: Element> Element for Option<U> {
    const TRIVIALLY_RELOCATABLE: bool = U::TRIVIALLY_RELOCATABLE;

    #[inline]
    fn try_clone(&self) -> Result<Self, ConstructionFailed> {
        self.as_ref().map(U::try_clone).transpose()
    }

    #[inline]
    fn try_relocate(&self) -> Result<(), ConstructionFailed> {
        self.as_ref().map_or(Ok(()), U::try_relocate)
    }
}

// A tuple relocates trivially only if every field does; hooks run field by field.
macro_rules! tuple_element {
    ($($name:ident)+) => {
        impl<$($name: Element),+> Element for ($($name,)+) {
            const TRIVIALLY_RELOCATABLE: bool = true $(&& $name::TRIVIALLY_RELOCATABLE)+;

            #[allow(non_snake_case)]
            fn try_clone(&self) -> Result<Self, ConstructionFailed> {
                let ($($name,)+) = self;
                Ok(($($name.try_clone()?,)+))
            }

            #[allow(non_snake_case)]
            fn try_relocate(&self) -> Result<(), ConstructionFailed> {
                let ($($name,)+) = self;
                $($name.try_relocate()?;)+
                Ok(())
            }
        }
    };
}

tuple_element!(A B);
tuple_element!(A B C);
tuple_element!(A B C D);

impl Element for String {
    #[inline]
    fn try_clone(&self) -> Result<Self, ConstructionFailed> {
        Ok(self.clone())
    }
}

impl<U: Clone> Element for Vec<U> {
    #[inline]
    fn try_clone(&self) -> Result<Self, ConstructionFailed> {
        Ok(self.clone())
    }
}

impl<U: Clone> Element for Box<U> {
    #[inline]
    fn try_clone(&self) -> Result<Self, ConstructionFailed> {
        Ok(self.clone())
    }
}
