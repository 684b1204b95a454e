//! Contains atoms via the [`Atom`] type.

use crate::parsed_types::Name;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// An atomic formula `(name t1 ... tn)`. The same shape is used for predicate
/// atoms and for task references.
#[derive(Default, Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Atom<T> {
    #[serde(rename = "name")]
    predicate_name: Name,
    #[serde(default = "Vec::new")]
    values: Vec<T>,
}

impl<T> Atom<T> {
    pub const fn new(predicate_name: Name, values: Vec<T>) -> Self {
        Self {
            predicate_name,
            values,
        }
    }

    pub const fn predicate_name(&self) -> &Name {
        &self.predicate_name
    }

    pub fn values(&self) -> &[T] {
        self.values.as_slice()
    }
}

impl<T> From<(Name, Vec<T>)> for Atom<T> {
    fn from(value: (Name, Vec<T>)) -> Self {
        Atom::new(value.0, value.1)
    }
}

impl<T> Deref for Atom<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.values()
    }
}
