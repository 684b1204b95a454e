use crate::encoding::Expression;
use crate::problem::OrderingConstraints;

/// A task network during grounding: subtask references (each an
/// [`Expression::Task`]) and ordering constraints over subtask positions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct IntTaskNetwork {
    tasks: Vec<Expression>,
    ordering: Vec<(usize, usize)>,
}

impl IntTaskNetwork {
    pub fn new(tasks: Vec<Expression>, ordering: Vec<(usize, usize)>) -> Self {
        debug_assert!(tasks.iter().all(|t| t.is_task()));
        debug_assert!(ordering
            .iter()
            .all(|&(a, b)| a < tasks.len() && b < tasks.len()));
        Self { tasks, ordering }
    }

    pub fn tasks(&self) -> &[Expression] {
        &self.tasks
    }

    pub fn tasks_mut(&mut self) -> &mut Vec<Expression> {
        &mut self.tasks
    }

    pub fn ordering(&self) -> &[(usize, usize)] {
        &self.ordering
    }

    pub fn add_ordering(&mut self, before: usize, after: usize) {
        debug_assert!(before < self.tasks.len() && after < self.tasks.len());
        self.ordering.push((before, after));
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn substitute(&self, instantiation: &[usize]) -> IntTaskNetwork {
        Self {
            tasks: self
                .tasks
                .iter()
                .map(|task| task.substitute(instantiation))
                .collect(),
            ordering: self.ordering.clone(),
        }
    }

    pub fn closed_ordering(&self) -> OrderingConstraints {
        OrderingConstraints::from_pairs(self.tasks.len(), &self.ordering)
    }

    /// True iff the ordering constraints impose a single linear order on the
    /// subtasks. Networks with zero or one subtask are totally ordered.
    pub fn is_totally_ordered(&self) -> bool {
        self.closed_ordering().is_totally_ordered()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::Argument;

    fn task(symbol: usize) -> Expression {
        Expression::Task {
            symbol,
            arguments: vec![Argument::Variable(0)],
        }
    }

    #[test]
    fn chain_of_three_is_totally_ordered() {
        let network = IntTaskNetwork::new(vec![task(0), task(1), task(2)], vec![(0, 1), (1, 2)]);
        assert!(network.is_totally_ordered());
    }

    #[test]
    fn unconstrained_subtask_breaks_total_order() {
        let network = IntTaskNetwork::new(vec![task(0), task(1), task(2)], vec![(0, 1)]);
        assert!(!network.is_totally_ordered());
    }

    #[test]
    fn small_networks_are_totally_ordered() {
        assert!(IntTaskNetwork::default().is_totally_ordered());
        assert!(IntTaskNetwork::new(vec![task(0)], vec![]).is_totally_ordered());
    }

    #[test]
    fn substitute_grounds_every_subtask() {
        let network = IntTaskNetwork::new(vec![task(0), task(1)], vec![(0, 1)]);
        let ground = network.substitute(&[5]);
        assert!(ground.tasks().iter().all(|t| t.as_ground_task().is_some()));
        assert_eq!(ground.ordering(), network.ordering());
    }
}
