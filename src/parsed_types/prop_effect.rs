//! Contains definition for a single proposition effect.

use crate::parsed_types::{Atom, Term};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropEffect {
    Add(Atom<Term>),
    Delete(Atom<Term>),
}

impl PropEffect {
    pub const fn new_add(atom: Atom<Term>) -> Self {
        Self::Add(atom)
    }

    pub const fn new_delete(atom: Atom<Term>) -> Self {
        Self::Delete(atom)
    }

    pub const fn atom(&self) -> &Atom<Term> {
        match self {
            PropEffect::Add(atom) => atom,
            PropEffect::Delete(atom) => atom,
        }
    }
}
