//! Fourth phase: ground inertia, simplification of the ground actions and top
//! down grounding of the methods reachable from the initial task network.

use crate::encoding::{
    Argument, Expression, Fluent, GroundInertia, GroundLiteral, GroundTask, IntAction, IntMethod,
    SymbolTables,
};
use crate::grounding::binding::Binder;
use crate::grounding::instantiation::split_disjunctions;
use crate::grounding::{GroundingContext, Instantiated};
use std::collections::{HashSet, VecDeque};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct Postinstantiated {
    pub context: GroundingContext,
    pub inertia: GroundInertia,
    pub actions: Vec<IntAction>,
    /// Ground methods whose subtasks can all be accomplished.
    pub methods: Vec<IntMethod>,
    pub goal: Expression,
    /// The tasks of the initial task network, in problem order.
    pub initial_tasks: Vec<GroundTask>,
    /// Whether each initial task can be accomplished by an action or by a
    /// remaining method.
    pub resolved: Vec<bool>,
    pub initial_ordering: Vec<(usize, usize)>,
}

pub fn postinstantiate(instantiated: Instantiated) -> Postinstantiated {
    let Instantiated {
        context,
        methods: lifted_methods,
        initial_task_network,
        inertia: structural_inertia,
        tables,
        actions,
        goal,
    } = instantiated;

    let inertia = GroundInertia::compute(&actions, &context.init_set);
    let fixed_value = |fluent: &Fluent| inertia.fixed_value(fluent);

    let actions = simplify_actions(actions, &fixed_value);
    let goal = goal.assign(&fixed_value);
    // The problem scope has no parameters, every initial task is ground.
    let initial_tasks: Vec<GroundTask> = initial_task_network
        .tasks()
        .iter()
        .filter_map(Expression::as_ground_task)
        .collect();

    let binder = Binder::new(&context.symbols, &tables, &structural_inertia, &fixed_value);
    let methods = ground_methods(
        &context.symbols,
        &binder,
        &lifted_methods,
        &initial_tasks,
        &fixed_value,
    );
    let primitive: HashSet<GroundTask> = actions.iter().map(IntAction::ground_task).collect();
    let methods = prune_methods(methods, &primitive);

    let achievable = achievable_tasks(&primitive, &methods);
    let resolved: Vec<bool> = initial_tasks
        .iter()
        .map(|task| achievable.contains(task))
        .collect();

    info!(
        fixed_facts = inertia.fixed_facts().len(),
        ground_actions = actions.len(),
        ground_methods = methods.len(),
        unresolved_initial_tasks = resolved.iter().filter(|r| !**r).count(),
        "postinstantiation done"
    );

    Postinstantiated {
        context,
        inertia,
        actions,
        methods,
        goal,
        initial_tasks,
        resolved,
        initial_ordering: initial_task_network.ordering().to_vec(),
    }
}

/// Replaces fixed facts in the preconditions and drops the effects on fixed
/// facts, which never change the state.
fn simplify_actions(
    actions: Vec<IntAction>,
    fixed_value: &dyn Fn(&Fluent) -> Option<bool>,
) -> Vec<IntAction> {
    let mut seen = HashSet::new();
    let mut simplified = Vec::with_capacity(actions.len());
    for mut action in actions {
        let precondition = action.precondition().assign(&fixed_value);
        if precondition.is_false() {
            continue;
        }
        action.set_precondition(precondition);
        let effect = action
            .effect_literals()
            .iter()
            .filter(|literal| fixed_value(&literal.fluent).is_none())
            .map(literal_expression)
            .collect();
        action.set_effect(Expression::And(effect));
        if seen.insert(action.clone()) {
            simplified.push(action);
        }
    }
    simplified
}

fn literal_expression(literal: &GroundLiteral) -> Expression {
    let atom = Expression::Atom {
        predicate: literal.fluent.predicate(),
        arguments: literal
            .fluent
            .arguments()
            .iter()
            .map(|&constant| Argument::Constant(constant))
            .collect(),
    };
    if literal.positive {
        atom
    } else {
        Expression::new_not(atom)
    }
}

/// Grounds the methods of every compound task reachable from the initial
/// tasks, breadth first.
fn ground_methods(
    symbols: &SymbolTables,
    binder: &Binder,
    lifted_methods: &[IntMethod],
    initial_tasks: &[GroundTask],
    fixed_value: &dyn Fn(&Fluent) -> Option<bool>,
) -> Vec<IntMethod> {
    let mut schemas: Vec<Vec<IntMethod>> = vec![vec![]; symbols.num_tasks()];
    for lifted in lifted_methods {
        for variant in split_disjunctions(lifted.precondition()) {
            let mut schema = lifted.clone();
            schema.set_precondition(variant);
            schemas[schema.task_symbol()].push(schema);
        }
    }

    let mut methods = vec![];
    let mut seen = HashSet::new();
    let mut visited: HashSet<GroundTask> = HashSet::new();
    let mut queue: VecDeque<GroundTask> = VecDeque::new();
    for task in initial_tasks {
        if !symbols.is_primitive(task.symbol()) && visited.insert(*task) {
            queue.push_back(*task);
        }
    }

    while let Some(task) = queue.pop_front() {
        for schema in &schemas[task.symbol()] {
            let Some(partial) = unify(symbols, schema, &task) else {
                continue;
            };
            for binding in binder.bindings(schema.parameters(), schema.precondition(), partial) {
                let mut method = schema.instantiate(binding);
                let precondition = method.precondition().assign(&fixed_value);
                if precondition.is_false() {
                    continue;
                }
                method.set_precondition(precondition);
                if !seen.insert(method.clone()) {
                    continue;
                }
                for subtask in method.ground_subtasks().into_iter().flatten() {
                    if !symbols.is_primitive(subtask.symbol()) && visited.insert(subtask) {
                        queue.push_back(subtask);
                    }
                }
                methods.push(method);
            }
        }
    }
    debug!(
        compound_tasks = visited.len(),
        methods = methods.len(),
        "methods grounded"
    );
    methods
}

/// Binds the parameters of the method's task to the arguments of the ground
/// task. Returns `None` if they do not match.
fn unify(
    symbols: &SymbolTables,
    schema: &IntMethod,
    task: &GroundTask,
) -> Option<Vec<Option<usize>>> {
    let mut partial = vec![None; schema.arity()];
    for (argument, &value) in schema.task().arguments().iter().zip(task.arguments()) {
        match *argument {
            Argument::Constant(constant) if constant != value => return None,
            Argument::Constant(_) => {}
            Argument::Variable(variable) => match partial[variable] {
                Some(bound) if bound != value => return None,
                Some(_) => {}
                None => {
                    if !symbols.is_of_type(value, schema.parameters()[variable]) {
                        return None;
                    }
                    partial[variable] = Some(value);
                }
            },
        }
    }
    Some(partial)
}

fn achievable_tasks(primitive: &HashSet<GroundTask>, methods: &[IntMethod]) -> HashSet<GroundTask> {
    let mut achievable = primitive.clone();
    achievable.extend(methods.iter().filter_map(IntMethod::ground_task));
    achievable
}

/// Removes methods with a subtask that no action or method accomplishes until
/// nothing changes.
fn prune_methods(mut methods: Vec<IntMethod>, primitive: &HashSet<GroundTask>) -> Vec<IntMethod> {
    loop {
        let achievable = achievable_tasks(primitive, &methods);
        let before = methods.len();
        methods.retain(|method| {
            method
                .ground_subtasks()
                .into_iter()
                .flatten()
                .all(|subtask| achievable.contains(&subtask))
        });
        if methods.len() == before {
            return methods;
        }
    }
}
