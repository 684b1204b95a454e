use crate::encoding::{Expression, GroundTask, IntTaskNetwork};
use crate::parsed_types::Name;

/// A method while grounding: the task it decomposes, its precondition and
/// its task network.
///
/// [`Clone`] produces a deep copy, the task expression and the task network
/// of the copy are owned by the copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IntMethod {
    name: Name,
    /// Type of each parameter.
    parameters: Vec<usize>,
    instantiation: Vec<usize>,
    task: Expression,
    precondition: Expression,
    task_network: IntTaskNetwork,
}

impl IntMethod {
    pub fn new(
        name: Name,
        parameters: Vec<usize>,
        task: Expression,
        precondition: Expression,
        task_network: IntTaskNetwork,
    ) -> Self {
        debug_assert!(task.is_task());
        Self {
            name,
            parameters,
            instantiation: vec![],
            task,
            precondition,
            task_network,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    pub fn parameters(&self) -> &[usize] {
        &self.parameters
    }

    pub fn instantiation(&self) -> &[usize] {
        &self.instantiation
    }

    pub fn task(&self) -> &Expression {
        &self.task
    }

    pub fn set_task(&mut self, task: Expression) {
        debug_assert!(task.is_task());
        self.task = task;
    }

    /// The task symbol this method decomposes.
    pub fn task_symbol(&self) -> usize {
        match self.task {
            Expression::Task { symbol, .. } => symbol,
            _ => unreachable!("the task of a method is always a task expression"),
        }
    }

    pub fn precondition(&self) -> &Expression {
        &self.precondition
    }

    pub fn set_precondition(&mut self, precondition: Expression) {
        self.precondition = precondition;
    }

    pub fn subtasks(&self) -> &[Expression] {
        self.task_network.tasks()
    }

    pub fn task_network(&self) -> &IntTaskNetwork {
        &self.task_network
    }

    pub fn task_network_mut(&mut self) -> &mut IntTaskNetwork {
        &mut self.task_network
    }

    pub fn set_task_network(&mut self, task_network: IntTaskNetwork) {
        self.task_network = task_network;
    }

    pub fn is_ground(&self) -> bool {
        self.instantiation.len() == self.parameters.len()
    }

    /// Creates the ground instance for the given parameter binding.
    pub fn instantiate(&self, instantiation: Vec<usize>) -> IntMethod {
        debug_assert_eq!(instantiation.len(), self.parameters.len());
        Self {
            name: self.name,
            parameters: self.parameters.clone(),
            task: self.task.substitute(&instantiation),
            precondition: self.precondition.substitute(&instantiation),
            task_network: self.task_network.substitute(&instantiation),
            instantiation,
        }
    }

    pub fn ground_task(&self) -> Option<GroundTask> {
        self.task.as_ground_task()
    }

    /// The ground subtasks, `None` if the method is not ground.
    pub fn ground_subtasks(&self) -> Option<Vec<GroundTask>> {
        self.subtasks().iter().map(|t| t.as_ground_task()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::Argument;

    fn task(symbol: usize, variable: usize) -> Expression {
        Expression::Task {
            symbol,
            arguments: vec![Argument::Variable(variable)],
        }
    }

    fn method() -> IntMethod {
        IntMethod::new(
            Name::new("m"),
            vec![0, 0],
            task(0, 0),
            Expression::True,
            IntTaskNetwork::new(vec![task(1, 0), task(2, 1)], vec![(0, 1)]),
        )
    }

    #[test]
    fn copies_do_not_alias() {
        let original = method();
        let mut copy = original.clone();
        copy.set_task(task(3, 1));
        copy.task_network_mut().tasks_mut().push(task(4, 0));
        copy.task_network_mut().add_ordering(1, 2);

        assert_eq!(original, method());
        assert_eq!(original.subtasks().len(), 2);
        assert_eq!(original.task_network().ordering(), &[(0, 1)]);
        assert_eq!(original.task_symbol(), 0);
        assert_eq!(copy.task_symbol(), 3);
        assert_eq!(copy.subtasks().len(), 3);
    }

    #[test]
    fn instantiate_grounds_task_and_network() {
        let ground = method().instantiate(vec![7, 8]);
        assert!(ground.is_ground());
        assert_eq!(ground.arity(), 2);
        let subtasks = ground.ground_subtasks().unwrap();
        assert_eq!(subtasks[0].arguments(), &[7]);
        assert_eq!(subtasks[1].arguments(), &[8]);
        assert_eq!(ground.ground_task().unwrap().arguments(), &[7]);
        assert!(method().ground_subtasks().is_none());
    }
}
