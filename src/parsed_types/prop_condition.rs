//! Preconditions and goals.

use crate::parsed_types::{Atom, Term};
use serde::{Deserialize, Serialize};

/// A propositional formula over atoms and equalities between terms. Method
/// and action preconditions as well as problem goals are lists of these,
/// read as a conjunction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropCondition {
    Atom(Atom<Term>),
    And(Vec<PropCondition>),
    Or(Vec<PropCondition>),
    Not(Box<PropCondition>),
    /// `Imply(a, b)` holds whenever `a` does not or `b` does.
    Imply(Box<PropCondition>, Box<PropCondition>),
    /// Both terms denote the same object.
    Equality(Term, Term),
}

impl PropCondition {
    pub const fn new_atom(value: Atom<Term>) -> Self {
        Self::Atom(value)
    }

    pub fn new_not(value: PropCondition) -> Self {
        Self::Not(Box::new(value))
    }
}
