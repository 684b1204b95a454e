//! Provides compound task declarations.

use crate::parsed_types::{Name, TypedVariables};
use serde::{Deserialize, Serialize};

/// A compound task declaration `(:task name :parameters (...))`. Primitive
/// tasks are not declared, they are implied by the actions of the domain.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TaskDefinition {
    name: Name,
    #[serde(default)]
    parameters: TypedVariables,
}

impl TaskDefinition {
    pub const fn new(name: Name, parameters: TypedVariables) -> Self {
        Self { name, parameters }
    }

    pub const fn name(&self) -> &Name {
        &self.name
    }

    pub const fn parameters(&self) -> &TypedVariables {
        &self.parameters
    }
}
