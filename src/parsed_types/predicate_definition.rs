//! Provides predicate definitions.

use crate::parsed_types::{Name, TypedVariables};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PredicateDefinition {
    name: Name,
    #[serde(default)]
    variables: TypedVariables,
}

impl PredicateDefinition {
    pub const fn new(name: Name, variables: TypedVariables) -> Self {
        Self { name, variables }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn variables(&self) -> &TypedVariables {
        &self.variables
    }
}

impl From<(Name, TypedVariables)> for PredicateDefinition {
    fn from(value: (Name, TypedVariables)) -> Self {
        PredicateDefinition::new(value.0, value.1)
    }
}
