//! Contains method definitions via the [`MethodDefinition`] type.

use crate::parsed_types::{Atom, Name, PropCondition, TaskNetworkDefinition, Term, TypedVariables};
use serde::{Deserialize, Serialize};

/// A decomposition method: the compound task it refines, an optional
/// precondition and the task network replacing the task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDefinition {
    name: Name,
    #[serde(default)]
    parameters: TypedVariables,
    task: Atom<Term>,
    #[serde(default)]
    preconditions: Vec<PropCondition>,
    #[serde(default)]
    task_network: TaskNetworkDefinition,
}

impl MethodDefinition {
    pub const fn new(
        name: Name,
        parameters: TypedVariables,
        task: Atom<Term>,
        preconditions: Vec<PropCondition>,
        task_network: TaskNetworkDefinition,
    ) -> Self {
        Self {
            name,
            parameters,
            task,
            preconditions,
            task_network,
        }
    }

    pub const fn name(&self) -> &Name {
        &self.name
    }

    pub const fn parameters(&self) -> &TypedVariables {
        &self.parameters
    }

    pub const fn task(&self) -> &Atom<Term> {
        &self.task
    }

    pub const fn preconditions(&self) -> &Vec<PropCondition> {
        &self.preconditions
    }

    pub const fn task_network(&self) -> &TaskNetworkDefinition {
        &self.task_network
    }
}
