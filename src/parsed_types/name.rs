//! Contains names via the [`Name`] type.

use internment::Intern;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::ops::Deref;

/// A name of a type, constant, predicate, task, action or method.
///
/// Names are interned, so cloning and comparing them is cheap.
///
/// ## Example
/// ```
/// # use htn_grounder::parsed_types::Name;
/// let name = Name::new("pickup");
/// assert_eq!(name, Name::from("pickup"));
/// assert_eq!(name.as_str(), "pickup");
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Name(Intern<String>);

impl Name {
    #[inline(always)]
    pub fn new(name: &str) -> Self {
        Self(Intern::from_ref(name))
    }

    #[inline(always)]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for Name {
    fn default() -> Self {
        Self::new("")
    }
}

impl From<&str> for Name {
    #[inline(always)]
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Name {
    #[inline(always)]
    fn from(value: String) -> Self {
        Self(Intern::new(value))
    }
}

impl From<&Name> for Name {
    #[inline(always)]
    fn from(value: &Name) -> Self {
        *value
    }
}

impl AsRef<str> for Name {
    #[inline(always)]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Deref for Name {
    type Target = str;

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl PartialEq<str> for Name {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Name {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

// This custom implementation hides the internment details from the user.
impl PartialOrd for Name {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Name {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Name {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Name::from(value))
    }
}
