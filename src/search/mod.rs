//! Total-order forward decomposition (TFD) search over an
//! [`EncodedProblem`](crate::problem::EncodedProblem). A node pairs a state
//! with the task network still to be accomplished.

mod expansion;
mod plan;
pub mod search_engines;
mod search_node;
mod search_space;
mod validate;
mod verbosity;

pub use expansion::{expand, Successor};
pub use plan::Plan;
pub use search_node::{NodeId, OperatorRef, TfdNode};
pub use search_space::SearchSpace;
pub use validate::validate;
pub use verbosity::Verbosity;
