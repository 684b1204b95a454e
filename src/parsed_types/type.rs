//! Contains types.

use crate::parsed_types::Name;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Name of the predefined root type.
pub const OBJECT_TYPE_NAME: &str = "object";

/// A primitive type.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrimitiveType(Name);

impl PrimitiveType {
    pub fn new(name: Name) -> Self {
        Self(name)
    }

    /// The `object` type.
    pub fn object() -> Self {
        Self(Name::new(OBJECT_TYPE_NAME))
    }

    pub fn name(&self) -> &Name {
        &self.0
    }
}

impl Default for PrimitiveType {
    fn default() -> Self {
        Self::object()
    }
}

/// A type selection from `<primitive-type> | (either <primitive-type>)`.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Type {
    /// The type is exactly this named type.
    Exactly(PrimitiveType),
    /// The type is either of these named types.
    EitherOf(Vec<PrimitiveType>),
}

impl Type {
    /// The predefined type `object`.
    pub fn object() -> Self {
        Type::Exactly(PrimitiveType::object())
    }

    pub fn len(&self) -> usize {
        match self {
            Type::Exactly(_) => 1,
            Type::EitherOf(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get_primitive(&self) -> Option<&PrimitiveType> {
        match self {
            Type::Exactly(p) => Some(p),
            Type::EitherOf(v) if v.len() == 1 => v.first(),
            _ => None,
        }
    }

    /// All primitive types making up this type.
    pub fn primitives(&self) -> &[PrimitiveType] {
        match self {
            Type::Exactly(p) => std::slice::from_ref(p),
            Type::EitherOf(v) => v.as_slice(),
        }
    }
}

impl Default for Type {
    fn default() -> Self {
        Self::object()
    }
}

impl From<&str> for Type {
    fn from(value: &str) -> Self {
        Self::Exactly(value.into())
    }
}

impl From<Vec<&str>> for Type {
    fn from(value: Vec<&str>) -> Self {
        Self::EitherOf(value.iter().map(|&x| PrimitiveType::from(x)).collect())
    }
}

impl From<PrimitiveType> for Type {
    fn from(value: PrimitiveType) -> Self {
        Self::Exactly(value)
    }
}

impl From<Vec<PrimitiveType>> for Type {
    fn from(value: Vec<PrimitiveType>) -> Self {
        Self::EitherOf(value)
    }
}

impl<T> From<T> for PrimitiveType
where
    T: Into<Name>,
{
    #[inline(always)]
    fn from(value: T) -> Self {
        PrimitiveType::new(value.into())
    }
}

impl AsRef<str> for PrimitiveType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for PrimitiveType {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
