use crate::problem::OrderingConstraints;

/// A task network over relevant task indices. Positions of the network refer
/// to entries of [`TaskNetwork::tasks`], the ordering constraints relate
/// positions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TaskNetwork {
    tasks: Vec<usize>,
    ordering: OrderingConstraints,
}

impl TaskNetwork {
    pub fn new(tasks: Vec<usize>, ordering: OrderingConstraints) -> Self {
        debug_assert_eq!(tasks.len(), ordering.len());
        Self { tasks, ordering }
    }

    /// The tasks in sequence.
    pub fn totally_ordered(tasks: Vec<usize>) -> Self {
        let ordering = OrderingConstraints::total(tasks.len());
        Self { tasks, ordering }
    }

    pub fn tasks(&self) -> &[usize] {
        &self.tasks
    }

    pub fn ordering(&self) -> &OrderingConstraints {
        &self.ordering
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn is_totally_ordered(&self) -> bool {
        self.ordering.is_totally_ordered()
    }

    /// Positions of the tasks that can be processed next.
    pub fn first_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.ordering.first_tasks()
    }

    /// The network without the task at `position`.
    pub fn remove(&self, position: usize) -> TaskNetwork {
        let mut tasks = self.tasks.clone();
        tasks.remove(position);
        Self {
            tasks,
            ordering: self.ordering.remove(position),
        }
    }

    /// The network with the task at `position` replaced by `subtasks`, which
    /// keep the `inner` constraints and inherit the constraints of the
    /// replaced task.
    pub fn decompose(
        &self,
        position: usize,
        subtasks: &[usize],
        inner: &OrderingConstraints,
    ) -> TaskNetwork {
        debug_assert_eq!(subtasks.len(), inner.len());
        let mut tasks = self.tasks.clone();
        tasks.remove(position);
        tasks.extend_from_slice(subtasks);
        Self {
            tasks,
            ordering: self.ordering.splice(position, inner),
        }
    }
}
