//! The encoded problem: ground actions, methods, states and task networks
//! over dense indices of the relevant fluents and tasks.

mod action;
mod condition;
mod encoded_problem;
mod goal;
mod method;
mod ordering;
mod state;
mod task;
mod task_network;

pub use action::Action;
pub use condition::{Condition, Effect};
pub use encoded_problem::EncodedProblem;
pub use goal::Goal;
pub use method::Method;
pub use ordering::OrderingConstraints;
pub use state::State;
pub use task::Task;
pub use task_network::TaskNetwork;
