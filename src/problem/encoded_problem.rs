//! The fully grounded problem handed to search.

use crate::encoding::{Fluent, GroundTask, SymbolTables};
use crate::error::{GroundingError, Unsolvable};
use crate::grounding;
use crate::parsed_types::{Domain, Problem};
use crate::problem::{Action, Goal, Method, State, Task, TaskNetwork};
use std::collections::HashMap;

/// The result of grounding. Fluents and tasks are indexed densely over the
/// relevant ones only, actions and methods are ordered as grounding produced
/// them. Immutable once built, share it with [`std::rc::Rc`] or
/// [`std::sync::Arc`].
#[derive(Debug, Clone)]
pub struct EncodedProblem {
    pub(crate) domain_name: String,
    pub(crate) problem_name: String,
    pub(crate) symbols: SymbolTables,
    pub(crate) fluents: Vec<Fluent>,
    pub(crate) fluent_table: HashMap<Fluent, usize>,
    pub(crate) tasks: Vec<Task>,
    pub(crate) task_table: HashMap<GroundTask, usize>,
    pub(crate) actions: Vec<Action>,
    pub(crate) methods: Vec<Method>,
    /// Per relevant task, the actions (primitive task) or methods (compound
    /// task) that accomplish it.
    pub(crate) resolvers: Vec<Vec<usize>>,
    pub(crate) initial_state: State,
    /// The ground tasks of the initial task network, in problem order.
    pub(crate) initial_ground_tasks: Vec<GroundTask>,
    /// Relevant task index of each initial task, `None` if the task could not
    /// be grounded.
    pub(crate) initial_tasks: Vec<Option<usize>>,
    /// The initial task network over the tasks that could be grounded.
    pub(crate) initial_task_network: TaskNetwork,
    pub(crate) goal: Goal,
}

impl EncodedProblem {
    /// Grounds the problem, see [`grounding::ground`].
    pub fn new(domain: &Domain, problem: &Problem) -> Result<Self, GroundingError> {
        grounding::ground(Some(domain), Some(problem))
    }

    pub fn domain_name(&self) -> &str {
        &self.domain_name
    }

    pub fn problem_name(&self) -> &str {
        &self.problem_name
    }

    pub fn symbols(&self) -> &SymbolTables {
        &self.symbols
    }

    pub fn fluents(&self) -> &[Fluent] {
        &self.fluents
    }

    pub fn num_fluents(&self) -> usize {
        self.fluents.len()
    }

    pub fn fluent_index(&self, fluent: &Fluent) -> Option<usize> {
        self.fluent_table.get(fluent).copied()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, index: usize) -> &Task {
        &self.tasks[index]
    }

    pub fn task_index(&self, task: &GroundTask) -> Option<usize> {
        self.task_table.get(task).copied()
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn action(&self, index: usize) -> &Action {
        &self.actions[index]
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    pub fn method(&self, index: usize) -> &Method {
        &self.methods[index]
    }

    /// Indices of the actions (for a primitive task) or of the methods (for a
    /// compound task) that accomplish the task.
    pub fn resolvers(&self, task: usize) -> &[usize] {
        &self.resolvers[task]
    }

    pub fn initial_state(&self) -> &State {
        &self.initial_state
    }

    pub fn initial_tasks(&self) -> &[Option<usize>] {
        &self.initial_tasks
    }

    pub fn initial_task_network(&self) -> &TaskNetwork {
        &self.initial_task_network
    }

    pub fn goal(&self) -> &Goal {
        &self.goal
    }

    /// False iff a task of the initial task network could not be grounded.
    /// A true result does not guarantee that a plan exists.
    pub fn is_solvable(&self) -> bool {
        self.initial_tasks.iter().all(Option::is_some)
    }

    /// True iff the task network of every method and the initial task network
    /// are totally ordered.
    pub fn is_totally_ordered(&self) -> bool {
        self.methods.iter().all(Method::is_totally_ordered)
            && self.initial_task_network.is_totally_ordered()
    }

    /// Reports the first reason found while grounding why no plan can exist.
    pub fn check_solvable(&self) -> Result<(), Unsolvable> {
        if let Some(position) = self.initial_tasks.iter().position(Option::is_none) {
            return Err(Unsolvable::UngroundableTask {
                position,
                task: self.initial_ground_tasks[position].human_readable(&self.symbols),
            });
        }
        if self.goal.is_statically_false() {
            return Err(Unsolvable::StaticallyFalseGoal);
        }
        Ok(())
    }

    pub fn fluent_name(&self, index: usize) -> String {
        self.fluents[index].human_readable(&self.symbols)
    }

    pub fn task_name(&self, index: usize) -> String {
        self.tasks[index].ground().human_readable(&self.symbols)
    }

    pub fn action_name(&self, index: usize) -> String {
        let action = &self.actions[index];
        crate::encoding::human_readable(action.name(), action.instantiation(), &self.symbols)
    }

    pub fn method_name(&self, index: usize) -> String {
        let method = &self.methods[index];
        crate::encoding::human_readable(method.name(), method.instantiation(), &self.symbols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::SmallTuple;
    use crate::parsed_types::Name;
    use crate::problem::{Condition, OrderingConstraints};

    fn problem(initial_tasks: Vec<Option<usize>>, methods: Vec<Method>) -> EncodedProblem {
        let nullary = |symbol| GroundTask::new(symbol, SmallTuple::from(Vec::<usize>::new()));
        let tasks = vec![Task::new(nullary(0), false), Task::new(nullary(1), true)];
        let initial_ground_tasks = initial_tasks.iter().map(|_| nullary(0)).collect();
        let resolved: Vec<usize> = initial_tasks.iter().flatten().copied().collect();
        let mut symbols = SymbolTables::new();
        symbols.intern_task(Name::new("root"), vec![], false).unwrap();
        symbols.intern_task(Name::new("step"), vec![], true).unwrap();
        EncodedProblem {
            domain_name: "d".to_string(),
            problem_name: "p".to_string(),
            symbols,
            fluents: vec![],
            fluent_table: HashMap::new(),
            task_table: tasks
                .iter()
                .enumerate()
                .map(|(i, t)| (*t.ground(), i))
                .collect(),
            tasks,
            actions: vec![],
            methods,
            resolvers: vec![vec![], vec![]],
            initial_state: State::empty(0),
            initial_ground_tasks,
            initial_tasks,
            initial_task_network: TaskNetwork::totally_ordered(resolved),
            goal: Goal::trivial(0),
        }
    }

    fn method(ordering: OrderingConstraints) -> Method {
        Method::new(
            Name::new("m"),
            vec![],
            0,
            Condition::empty(0),
            vec![1; ordering.len()],
            ordering,
        )
    }

    #[test]
    fn solvable_iff_every_initial_task_was_grounded() {
        assert!(problem(vec![], vec![]).is_solvable());
        assert!(problem(vec![Some(0), Some(1)], vec![]).is_solvable());

        let unsolvable = problem(vec![Some(0), None], vec![]);
        assert!(!unsolvable.is_solvable());
        assert_eq!(
            unsolvable.check_solvable(),
            Err(Unsolvable::UngroundableTask {
                position: 1,
                task: "(root)".to_string()
            })
        );
    }

    #[test]
    fn totally_ordered_requires_every_method() {
        let total = method(OrderingConstraints::total(3));
        let partial = method(OrderingConstraints::from_pairs(3, &[(0, 1)]));

        assert!(problem(vec![Some(0)], vec![total.clone()]).is_totally_ordered());
        assert!(!problem(vec![Some(0)], vec![total.clone(), partial]).is_totally_ordered());

        let mut unordered_root = problem(vec![Some(0), Some(1)], vec![total]);
        unordered_root.initial_task_network =
            TaskNetwork::new(vec![0, 1], OrderingConstraints::new(2));
        assert!(!unordered_root.is_totally_ordered());
    }

    #[test]
    fn statically_false_goal_is_reported() {
        let mut problem = problem(vec![Some(0)], vec![]);
        assert_eq!(problem.check_solvable(), Ok(()));
        problem.goal = Goal::new(vec![]);
        assert_eq!(
            problem.check_solvable(),
            Err(Unsolvable::StaticallyFalseGoal)
        );
    }
}
