use crate::parsed_types::{Name, Variable};
use serde::{Deserialize, Serialize};

/// An argument of an atom or task: a constant or a parameter.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Term {
    Name(Name),
    Variable(Variable),
}

impl Term {
    pub fn constant(name: &str) -> Self {
        Self::Name(Name::new(name))
    }

    pub fn variable(name: &str) -> Self {
        Self::Variable(Variable::from_str(name))
    }
}

impl From<Name> for Term {
    fn from(value: Name) -> Self {
        Self::Name(value)
    }
}

impl From<Variable> for Term {
    fn from(value: Variable) -> Self {
        Self::Variable(value)
    }
}
