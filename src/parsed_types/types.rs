//! Provides type definitions;

use crate::parsed_types::{Name, Type, Typed, TypedNames};
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// The type hierarchy of a domain: each entry is a type together with its
/// parent type(s).
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Types(TypedNames);

impl Types {
    pub const fn new(types: TypedNames) -> Self {
        Self(types)
    }

    pub fn values(&self) -> &TypedNames {
        &self.0
    }
}

impl Default for Types {
    fn default() -> Self {
        Self::new(TypedNames::from_iter([Typed::new(
            Name::from("object"),
            Type::object(),
        )]))
    }
}

impl Deref for Types {
    type Target = TypedNames;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<TypedNames> for Types {
    fn from(value: TypedNames) -> Self {
        Types::new(value)
    }
}
