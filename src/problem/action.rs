use crate::parsed_types::Name;
use crate::problem::{Condition, Effect, State};

/// A ground action, encoded over the relevant fluents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    name: Name,
    /// Constants bound to the parameters.
    instantiation: Vec<usize>,
    /// The relevant primitive task accomplished by this action.
    task: usize,
    precondition: Condition,
    effect: Effect,
}

impl Action {
    pub fn new(
        name: Name,
        instantiation: Vec<usize>,
        task: usize,
        precondition: Condition,
        effect: Effect,
    ) -> Self {
        Self {
            name,
            instantiation,
            task,
            precondition,
            effect,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn instantiation(&self) -> &[usize] {
        &self.instantiation
    }

    pub fn task(&self) -> usize {
        self.task
    }

    pub fn precondition(&self) -> &Condition {
        &self.precondition
    }

    pub fn effect(&self) -> &Effect {
        &self.effect
    }

    #[inline(always)]
    pub fn is_applicable(&self, state: &State) -> bool {
        self.precondition.is_satisfied(state)
    }

    pub fn apply(&self, state: &State) -> State {
        self.effect.apply(state)
    }
}
