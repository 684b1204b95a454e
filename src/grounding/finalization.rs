//! Last phase: keeps what the initial task network can reach and encodes it
//! over dense indices.

use crate::encoding::{Expression, Fluent, GroundLiteral, GroundTask, SymbolTables};
use crate::grounding::{GroundingContext, Postinstantiated};
use crate::problem::{
    Action, Condition, Effect, EncodedProblem, Goal, Method, OrderingConstraints, State, Task,
    TaskNetwork,
};
use std::collections::{HashMap, VecDeque};
use tracing::info;

#[derive(Debug, Default)]
struct TaskIndex {
    tasks: Vec<Task>,
    table: HashMap<GroundTask, usize>,
}

impl TaskIndex {
    /// Returns false if the task is already known.
    fn insert(&mut self, task: GroundTask, symbols: &SymbolTables) -> bool {
        if self.table.contains_key(&task) {
            return false;
        }
        self.table.insert(task, self.tasks.len());
        self.tasks
            .push(Task::new(task, symbols.is_primitive(task.symbol())));
        true
    }
}

#[derive(Debug, Default)]
struct FluentIndex {
    fluents: Vec<Fluent>,
    table: HashMap<Fluent, usize>,
}

impl FluentIndex {
    fn intern(&mut self, fluent: Fluent) -> usize {
        *self.table.entry(fluent).or_insert_with(|| {
            self.fluents.push(fluent);
            self.fluents.len() - 1
        })
    }

    fn condition(&self, literals: &[GroundLiteral]) -> Condition {
        Condition::new(
            self.fluents.len(),
            literals
                .iter()
                .filter(|literal| literal.positive)
                .map(|literal| self.table[&literal.fluent]),
            literals
                .iter()
                .filter(|literal| !literal.positive)
                .map(|literal| self.table[&literal.fluent]),
        )
    }

    fn effect(&self, literals: &[GroundLiteral]) -> Effect {
        let condition = self.condition(literals);
        Effect::new(
            self.fluents.len(),
            condition.positive().ones(),
            condition.negative().ones(),
        )
    }
}

/// Preconditions are ground conjunctions once instantiated.
fn literals(expression: &Expression) -> Vec<GroundLiteral> {
    let literals = expression.ground_literals();
    debug_assert!(literals.is_some(), "not a ground conjunction: {expression:?}");
    literals.unwrap_or_default()
}

pub fn finalize(postinstantiated: Postinstantiated) -> EncodedProblem {
    let Postinstantiated {
        context,
        inertia: _,
        actions,
        methods,
        goal,
        initial_tasks,
        resolved,
        initial_ordering,
    } = postinstantiated;
    let symbols = &context.symbols;

    let mut methods_of: HashMap<GroundTask, Vec<usize>> = HashMap::new();
    for (index, method) in methods.iter().enumerate() {
        if let Some(task) = method.ground_task() {
            methods_of.entry(task).or_default().push(index);
        }
    }

    // Tasks reachable from the resolved initial tasks, breadth first.
    let mut task_index = TaskIndex::default();
    let mut queue = VecDeque::new();
    for (task, _) in initial_tasks.iter().zip(&resolved).filter(|(_, r)| **r) {
        if task_index.insert(*task, symbols) {
            queue.push_back(*task);
        }
    }
    while let Some(task) = queue.pop_front() {
        for &method in methods_of.get(&task).into_iter().flatten() {
            for subtask in methods[method].ground_subtasks().into_iter().flatten() {
                if task_index.insert(subtask, symbols) {
                    queue.push_back(subtask);
                }
            }
        }
    }

    let actions: Vec<_> = actions
        .into_iter()
        .filter(|action| task_index.table.contains_key(&action.ground_task()))
        .collect();
    let methods: Vec<_> = methods
        .into_iter()
        .filter(|method| {
            method
                .ground_task()
                .is_some_and(|task| task_index.table.contains_key(&task))
        })
        .collect();

    let mut fluent_index = FluentIndex::default();
    for action in &actions {
        for literal in literals(action.precondition())
            .iter()
            .chain(&action.effect_literals())
        {
            fluent_index.intern(literal.fluent);
        }
    }
    for method in &methods {
        for literal in literals(method.precondition()) {
            fluent_index.intern(literal.fluent);
        }
    }
    goal.for_each_atom(&mut |atom, _| {
        if let Some(fluent) = atom.as_fluent() {
            fluent_index.intern(fluent);
        }
    });
    let num_fluents = fluent_index.fluents.len();

    let mut resolvers = vec![vec![]; task_index.tasks.len()];
    let actions: Vec<Action> = actions
        .iter()
        .enumerate()
        .map(|(index, action)| {
            let task = task_index.table[&action.ground_task()];
            resolvers[task].push(index);
            Action::new(
                *action.name(),
                action.instantiation().to_vec(),
                task,
                fluent_index.condition(&literals(action.precondition())),
                fluent_index.effect(&action.effect_literals()),
            )
        })
        .collect();
    let mut encoded_methods = Vec::with_capacity(methods.len());
    for method in &methods {
        let (Some(task), Some(subtasks)) = (method.ground_task(), method.ground_subtasks()) else {
            continue;
        };
        let task = task_index.table[&task];
        resolvers[task].push(encoded_methods.len());
        encoded_methods.push(Method::new(
            *method.name(),
            method.instantiation().to_vec(),
            task,
            fluent_index.condition(&literals(method.precondition())),
            subtasks.iter().map(|subtask| task_index.table[subtask]).collect(),
            method.task_network().closed_ordering(),
        ));
    }
    let methods = encoded_methods;

    let goal = Goal::new(
        goal.to_dnf()
            .into_iter()
            .map(|conjunction| fluent_index.condition(&literals(&Expression::And(conjunction))))
            .collect(),
    );
    let initial_state = State::from_fluents(
        num_fluents,
        context
            .init
            .iter()
            .filter_map(|fluent| fluent_index.table.get(fluent).copied()),
    );

    let initial_indices: Vec<Option<usize>> = initial_tasks
        .iter()
        .zip(&resolved)
        .map(|(task, &resolved)| {
            if resolved {
                task_index.table.get(task).copied()
            } else {
                None
            }
        })
        .collect();
    let mut ordering = OrderingConstraints::from_pairs(initial_tasks.len(), &initial_ordering);
    for position in (0..initial_tasks.len()).rev() {
        if initial_indices[position].is_none() {
            ordering = ordering.remove(position);
        }
    }
    let initial_task_network =
        TaskNetwork::new(initial_indices.iter().flatten().copied().collect(), ordering);

    info!(
        fluents = num_fluents,
        tasks = task_index.tasks.len(),
        actions = actions.len(),
        methods = methods.len(),
        "finalization done"
    );

    let GroundingContext {
        domain_name,
        problem_name,
        symbols,
        ..
    } = context;
    EncodedProblem {
        domain_name,
        problem_name,
        symbols,
        fluents: fluent_index.fluents,
        fluent_table: fluent_index.table,
        tasks: task_index.tasks,
        task_table: task_index.table,
        actions,
        methods,
        resolvers,
        initial_state,
        initial_ground_tasks: initial_tasks,
        initial_tasks: initial_indices,
        initial_task_network,
        goal,
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Unsolvable;
    use crate::grounding::ground;
    use crate::parsed_types::{Name, PropCondition};
    use crate::test_utils::*;

    #[test]
    fn pickup_keeps_one_action_and_one_method() {
        let problem = ground(Some(&pickup_domain()), Some(&pickup_problem("a"))).unwrap();
        assert_eq!(problem.actions().len(), 1);
        assert_eq!(problem.methods().len(), 1);
        assert_eq!(problem.tasks().len(), 2);
        assert_eq!(problem.num_fluents(), 2);
        assert_eq!(problem.action_name(0), "(pickup a)");
        assert_eq!(problem.method_name(0), "(m-get a)");
        assert_eq!(problem.fluent_name(0), "(clear a)");
        assert!(problem.initial_state().holds(0));
        assert!(!problem.initial_state().holds(1));
        assert!(problem.action(0).is_applicable(problem.initial_state()));
        assert_eq!(problem.resolvers(problem.method(0).task()), &[0]);
        assert!(problem.is_solvable());
        assert_eq!(problem.check_solvable(), Ok(()));
    }

    #[test]
    fn ungroundable_initial_task_is_reported() {
        let problem = ground(Some(&pickup_domain()), Some(&pickup_problem("b"))).unwrap();
        assert!(!problem.is_solvable());
        assert_eq!(problem.initial_tasks(), &[None]);
        assert!(problem.initial_task_network().is_empty());
        assert!(problem.actions().is_empty());
        assert_eq!(
            problem.check_solvable(),
            Err(Unsolvable::UngroundableTask {
                position: 0,
                task: "(get b)".to_string()
            })
        );
    }

    #[test]
    fn unreachable_goal_is_statically_false() {
        let goal = PropCondition::new_atom(atom("holding", vec![constant("b")]));
        let problem = ground(
            Some(&pickup_domain()),
            Some(&pickup_problem("a").with_goal(vec![goal])),
        )
        .unwrap();
        assert!(problem.goal().is_statically_false());
        assert_eq!(
            problem.check_solvable(),
            Err(Unsolvable::StaticallyFalseGoal)
        );
    }

    #[test]
    fn total_order_depends_on_every_method() {
        let total = ground(Some(&chain_domain(true)), Some(&chain_problem())).unwrap();
        assert!(total.is_totally_ordered());
        let partial = ground(Some(&chain_domain(false)), Some(&chain_problem())).unwrap();
        assert!(!partial.is_totally_ordered());
        assert_eq!(partial.methods()[0].subtasks().len(), 3);
    }

    #[test]
    fn repeated_initial_tasks_share_an_index() {
        let problem = ground(Some(&toggle_domain()), Some(&toggle_problem())).unwrap();
        assert_eq!(problem.initial_tasks(), &[Some(0), Some(0)]);
        assert!(problem.initial_task_network().is_totally_ordered());
        assert_eq!(problem.tasks().len(), 3);
        assert_eq!(problem.num_fluents(), 1);
        assert_eq!(problem.resolvers(0).len(), 2);
    }

    #[test]
    fn transport_goal_and_state() {
        let (domain, problem) = transport();
        let problem = ground(Some(&domain), Some(&problem)).unwrap();
        assert!(problem.is_solvable());
        assert!(problem.is_totally_ordered());
        assert_eq!(problem.goal().disjuncts().len(), 1);
        assert!(!problem.goal().is_satisfied(problem.initial_state()));
        let deliver = problem.symbols().task_id(&Name::new("deliver")).unwrap();
        assert_eq!(problem.task(problem.initial_tasks()[0].unwrap()).symbol(), deliver);
        // `road` is static and compiled away.
        assert!((0..problem.num_fluents()).all(|f| !problem.fluent_name(f).starts_with("(road")));
    }
}
