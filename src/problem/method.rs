use crate::parsed_types::Name;
use crate::problem::{Condition, OrderingConstraints, State};

/// A ground method, encoded over the relevant fluents and tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    name: Name,
    instantiation: Vec<usize>,
    /// The relevant compound task decomposed by this method.
    task: usize,
    precondition: Condition,
    subtasks: Vec<usize>,
    ordering: OrderingConstraints,
}

impl Method {
    pub fn new(
        name: Name,
        instantiation: Vec<usize>,
        task: usize,
        precondition: Condition,
        subtasks: Vec<usize>,
        ordering: OrderingConstraints,
    ) -> Self {
        debug_assert_eq!(subtasks.len(), ordering.len());
        Self {
            name,
            instantiation,
            task,
            precondition,
            subtasks,
            ordering,
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

    pub fn subtasks(&self) -> &[usize] {
        &self.subtasks
    }

    pub fn ordering(&self) -> &OrderingConstraints {
        &self.ordering
    }

    pub fn is_totally_ordered(&self) -> bool {
        self.ordering.is_totally_ordered()
    }

    #[inline(always)]
    pub fn is_applicable(&self, state: &State) -> bool {
        self.precondition.is_satisfied(state)
    }
}
