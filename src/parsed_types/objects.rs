use crate::parsed_types::{Name, Typed, TypedNames};
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Typed constants of a domain or objects of a problem. Both end up in the
/// same constant table, an object may be given again with the same type.
#[derive(Debug, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Objects(TypedNames);

impl FromIterator<Typed<Name>> for Objects {
    fn from_iter<T: IntoIterator<Item = Typed<Name>>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Deref for Objects {
    type Target = TypedNames;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
