//! Contains the [`Typed`] wrapper.

use crate::parsed_types::Type;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// A typed element, e.g. `?x - block` or `b1 - block`.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Typed<T> {
    value: T,
    #[serde(rename = "type", default)]
    type_: Type,
}

impl<T> Typed<T> {
    pub const fn new(value: T, type_: Type) -> Self {
        Self { value, type_ }
    }

    /// Types the value with the predefined `object` type.
    pub fn new_object(value: T) -> Self {
        Self::new(value, Type::object())
    }

    pub const fn value(&self) -> &T {
        &self.value
    }

    pub const fn type_(&self) -> &Type {
        &self.type_
    }
}

impl<T> Deref for Typed<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

/// Attaches a type to a value.
pub trait ToTyped<T> {
    fn to_typed<I: Into<Type>>(self, r#type: I) -> Typed<T>;
}

impl<T> ToTyped<T> for T {
    fn to_typed<I: Into<Type>>(self, r#type: I) -> Typed<T> {
        Typed::new(self, r#type.into())
    }
}
