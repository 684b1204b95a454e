//! The typed, still symbolic input of the grounder: a domain and a problem as
//! produced by an external parser.

mod action_definition;
mod atom;
mod domain;
mod method_definition;
mod name;
mod objects;
mod predicate_definition;
mod problem;
mod prop_condition;
mod prop_effect;
mod task_definition;
mod task_network_definition;
mod term;
mod r#type;
mod typed;
mod typed_list;
mod types;
mod variable;

pub use action_definition::ActionDefinition;
pub use atom::Atom;
pub use domain::Domain;
pub use method_definition::MethodDefinition;
pub use name::Name;
pub use objects::Objects;
pub use predicate_definition::PredicateDefinition;
pub use problem::Problem;
pub use prop_condition::PropCondition;
pub use prop_effect::PropEffect;
pub use r#type::{PrimitiveType, Type, OBJECT_TYPE_NAME};
pub use task_definition::TaskDefinition;
pub use task_network_definition::{Subtask, TaskNetworkDefinition};
pub use term::Term;
pub use typed::{ToTyped, Typed};
pub use typed_list::TypedList;
pub use types::Types;
pub use variable::Variable;

/// A list of typed names, e.g. objects or types.
pub type TypedNames = TypedList<Name>;

/// A list of typed variables, e.g. parameters.
pub type TypedVariables = TypedList<Variable>;
