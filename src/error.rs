//! Error types of the grounder.

use crate::parsed_types::Name;
use thiserror::Error;

/// Structural errors found while compiling a domain and problem. These abort
/// grounding, the input has to be fixed by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroundingError {
    #[error("missing input: no {0} was provided")]
    MissingInput(&'static str),
    #[error("conflicting definitions for {kind} `{name}`")]
    DefinitionConflict { kind: &'static str, name: Name },
    #[error("unknown type `{0}`")]
    UnknownType(Name),
    #[error("unknown constant `{0}`")]
    UnknownConstant(Name),
    #[error("unknown predicate `{0}`")]
    UnknownPredicate(Name),
    #[error("unknown task `{0}`")]
    UnknownTask(Name),
    #[error("variable `?{variable}` is not a parameter of `{scope}`")]
    UnknownVariable { variable: Name, scope: Name },
    #[error("`{name}` expects {expected} arguments but was given {found}")]
    ArityMismatch {
        name: Name,
        expected: usize,
        found: usize,
    },
    #[error("invalid ordering constraint in `{scope}` on subtask `{label}`")]
    InvalidOrdering { scope: Name, label: Name },
}

/// Reasons why grounding already proves that no search can succeed. These are
/// recorded in the [`crate::problem::EncodedProblem`] rather than raised while
/// grounding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Unsolvable {
    #[error("task {task} at position {position} of the initial task network cannot be grounded")]
    UngroundableTask { position: usize, task: String },
    #[error("the goal is statically false")]
    StaticallyFalseGoal,
}
