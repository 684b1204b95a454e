//! The intermediate, integer-indexed representation built and refined by the
//! grounding phases.

mod expression;
mod ground;
pub mod inertia;
mod int_action;
mod int_method;
mod int_task_network;
mod predicate_table;
mod small_tuple;
mod symbols;

pub use expression::{Argument, Expression, GroundLiteral};
pub(crate) use ground::human_readable;
pub use ground::{Fluent, GroundTask};
pub use inertia::{GroundInertia, Inertia, StructuralInertia};
pub use int_action::IntAction;
pub use int_method::IntMethod;
pub use int_task_network::IntTaskNetwork;
pub use predicate_table::{PredicateTable, PredicateTables};
#[cfg(test)]
pub(crate) use small_tuple::small_tuple;
pub use small_tuple::{RawSmallTuple, SmallTuple};
pub use symbols::SymbolTables;
