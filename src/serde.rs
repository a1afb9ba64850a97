// This file is part of growable-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`GrowableArray`](crate::GrowableArray).
//!
//! - **Serialize**: as a sequence of the live elements.
//! - **Deserialize**: from any sequence, appending each decoded value in
//!   order. Decoded values are moved into the array, not copied, so the
//!   only possible failure is an allocation error, which is reported as a
//!   custom deserializer error.

// Crate imports
use crate::{element::Element, vec::GrowableArray};

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

impl<T: Serialize> Serialize for GrowableArray<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let items = self.as_slice();
        let mut seq = s.serialize_seq(Some(items.len()))?;
        for item in items {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct ArrayVisitor<T>(PhantomData<T>);

impl<'de, T> de::Visitor<'de> for ArrayVisitor<T>
where
    T: Deserialize<'de> + Element,
{
    type Value = GrowableArray<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence of array elements")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = GrowableArray::new();
        while let Some(elem) = a.next_element::<T>()? {
            out.try_push_with(|| Ok(elem))
                .map_err(<A::Error as de::Error>::custom)?;
        }
        Ok(out)
    }
}

impl<'de, T> Deserialize<'de> for GrowableArray<T>
where
    T: Deserialize<'de> + Element,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(ArrayVisitor(PhantomData))
    }
}
