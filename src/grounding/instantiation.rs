//! Third phase: grounds the actions. Method grounding is left to the next
//! phase, which needs the ground actions.

use crate::encoding::{
    Expression, Fluent, IntAction, IntMethod, IntTaskNetwork, PredicateTables, StructuralInertia,
};
use crate::grounding::binding::Binder;
use crate::grounding::{GroundingContext, Preinstantiated};
use std::collections::HashSet;
use tracing::info;

#[derive(Debug, Clone)]
pub struct Instantiated {
    pub context: GroundingContext,
    /// Still lifted.
    pub methods: Vec<IntMethod>,
    pub initial_task_network: IntTaskNetwork,
    pub inertia: StructuralInertia,
    pub tables: PredicateTables,
    /// Ground, with a conjunctive precondition that is not known to be false.
    pub actions: Vec<IntAction>,
    pub goal: Expression,
}

/// Splits a precondition into the conjunctions of its disjunctive normal
/// form. An unsatisfiable precondition has no variant.
pub(crate) fn split_disjunctions(precondition: &Expression) -> Vec<Expression> {
    precondition
        .to_dnf()
        .into_iter()
        .map(|conjunction| Expression::And(conjunction).simplify())
        .filter(|variant| !variant.is_false())
        .collect()
}

pub fn instantiate(preinstantiated: Preinstantiated) -> Instantiated {
    let Preinstantiated {
        context,
        actions: lifted_actions,
        methods,
        goal,
        initial_task_network,
        inertia,
        tables,
    } = preinstantiated;

    let fixed_value = |fluent: &Fluent| {
        inertia
            .of(fluent.predicate())
            .fixed_value(context.init_set.contains(fluent))
    };
    let binder = Binder::new(&context.symbols, &tables, &inertia, &fixed_value);

    let mut actions = vec![];
    let mut seen = HashSet::new();
    for lifted in &lifted_actions {
        for variant in split_disjunctions(lifted.precondition()) {
            let mut schema = lifted.clone();
            schema.set_precondition(variant);
            let unbound = vec![None; schema.arity()];
            for binding in binder.bindings(schema.parameters(), schema.precondition(), unbound) {
                let mut action = schema.instantiate(binding);
                let precondition = action.precondition().assign(&fixed_value);
                if precondition.is_false() {
                    continue;
                }
                action.set_precondition(precondition);
                if seen.insert(action.clone()) {
                    actions.push(action);
                }
            }
        }
    }
    let goal = goal.assign(&fixed_value);

    info!(
        lifted_actions = lifted_actions.len(),
        ground_actions = actions.len(),
        "instantiation done"
    );

    Instantiated {
        context,
        methods,
        initial_task_network,
        inertia,
        tables,
        actions,
        goal,
    }
}
