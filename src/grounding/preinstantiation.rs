//! Second phase: structural inertia and occurrence tables of the initial
//! state.

use crate::encoding::{
    Expression, IntAction, IntMethod, IntTaskNetwork, PredicateTables, StructuralInertia,
};
use crate::grounding::{GroundingContext, Initialized};
use tracing::info;

#[derive(Debug, Clone)]
pub struct Preinstantiated {
    pub context: GroundingContext,
    pub actions: Vec<IntAction>,
    pub methods: Vec<IntMethod>,
    pub goal: Expression,
    pub initial_task_network: IntTaskNetwork,
    pub inertia: StructuralInertia,
    pub tables: PredicateTables,
}

pub fn preinstantiate(initialized: Initialized) -> Preinstantiated {
    let Initialized {
        context,
        actions,
        methods,
        goal,
        initial_task_network,
    } = initialized;

    let symbols = &context.symbols;
    let inertia = StructuralInertia::compute(symbols.num_predicates(), &actions);
    let tables = PredicateTables::new(
        (0..symbols.num_predicates()).map(|p| symbols.predicate_signature(p).len()),
        context.init.iter(),
    );

    info!(
        inertial_predicates = inertia.inertial_predicates().len(),
        "preinstantiation done"
    );

    Preinstantiated {
        context,
        actions,
        methods,
        goal,
        initial_task_network,
        inertia,
        tables,
    }
}
