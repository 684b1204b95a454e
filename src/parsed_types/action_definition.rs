//! Contains action definitions via the [`ActionDefinition`] type.

use crate::parsed_types::TypedVariables;
use crate::parsed_types::{Name, PropCondition, PropEffect};
use serde::{Deserialize, Serialize};

/// An action definition. Each action also declares the primitive task of the
/// same name and signature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionDefinition {
    name: Name,
    #[serde(default)]
    parameters: TypedVariables,
    #[serde(default)]
    preconditions: Vec<PropCondition>,
    #[serde(default)]
    effects: Vec<PropEffect>,
}

impl ActionDefinition {
    pub const fn new(
        name: Name,
        parameters: TypedVariables,
        preconditions: Vec<PropCondition>,
        effects: Vec<PropEffect>,
    ) -> Self {
        Self {
            name,
            parameters,
            preconditions,
            effects,
        }
    }

    pub const fn name(&self) -> &Name {
        &self.name
    }

    pub const fn parameters(&self) -> &TypedVariables {
        &self.parameters
    }

    /// The preconditions, interpreted as a conjunction.
    pub const fn preconditions(&self) -> &Vec<PropCondition> {
        &self.preconditions
    }

    pub const fn effects(&self) -> &Vec<PropEffect> {
        &self.effects
    }
}

impl AsRef<Name> for ActionDefinition {
    fn as_ref(&self) -> &Name {
        &self.name
    }
}
