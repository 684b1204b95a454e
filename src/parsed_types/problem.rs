//! Contains the [`Problem`] type.

use crate::parsed_types::{Atom, Name, Objects, PropCondition, TaskNetworkDefinition};
use serde::{Deserialize, Serialize};

/// A problem instance: objects, initial state, initial task network and an
/// optional state goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    // The problem name.
    name: Name,
    domain: Name,
    #[serde(default)]
    objects: Objects,
    #[serde(default)]
    init: Vec<Atom<Name>>,
    #[serde(default)]
    htn: TaskNetworkDefinition,
    #[serde(default)]
    goal: Vec<PropCondition>,
}

impl Problem {
    pub const fn new(
        name: Name,
        domain: Name,
        objects: Objects,
        init: Vec<Atom<Name>>,
        htn: TaskNetworkDefinition,
        goal: Vec<PropCondition>,
    ) -> Self {
        Self {
            name,
            domain,
            objects,
            init,
            htn,
            goal,
        }
    }

    pub fn builder<P: Into<Name>, D: Into<Name>>(
        problem_name: P,
        domain_name: D,
        init: Vec<Atom<Name>>,
        htn: TaskNetworkDefinition,
    ) -> Self {
        Self {
            name: problem_name.into(),
            domain: domain_name.into(),
            objects: Objects::default(),
            init,
            htn,
            goal: vec![],
        }
    }

    pub fn with_objects<O: Into<Objects>>(mut self, objects: O) -> Self {
        self.objects = objects.into();
        self
    }

    pub fn with_goal<G: Into<Vec<PropCondition>>>(mut self, goal: G) -> Self {
        self.goal = goal.into();
        self
    }

    pub const fn name(&self) -> &Name {
        &self.name
    }

    pub const fn domain(&self) -> &Name {
        &self.domain
    }

    pub const fn objects(&self) -> &Objects {
        &self.objects
    }

    pub const fn init(&self) -> &Vec<Atom<Name>> {
        &self.init
    }

    /// The initial task network.
    pub const fn htn(&self) -> &TaskNetworkDefinition {
        &self.htn
    }

    /// The goal, interpreted as a conjunction. Empty if the problem has no
    /// state goal.
    pub const fn goals(&self) -> &Vec<PropCondition> {
        &self.goal
    }
}
