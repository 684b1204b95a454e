//! A plan is the sequence of operators applied on the way from the root to a
//! goal node: the actions to execute, interleaved with the methods that
//! introduced them.

use crate::problem::EncodedProblem;
use crate::search::OperatorRef;
use std::ops::Deref;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    steps: Vec<OperatorRef>,
}

impl Plan {
    pub fn empty() -> Self {
        Self { steps: vec![] }
    }

    pub fn new(steps: Vec<OperatorRef>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[OperatorRef] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Indices of the actions, in execution order.
    pub fn actions(&self) -> impl Iterator<Item = usize> + '_ {
        self.steps.iter().filter_map(|step| match step {
            OperatorRef::Action(action) => Some(*action),
            OperatorRef::Method(_) => None,
        })
    }

    pub fn num_actions(&self) -> usize {
        self.actions().count()
    }

    /// One action per line.
    pub fn to_string(&self, problem: &EncodedProblem) -> String {
        self.actions()
            .map(|action| problem.action_name(action))
            .collect::<Vec<String>>()
            .join("\n")
    }

    /// Every step, methods included, one per line.
    pub fn to_decomposition_string(&self, problem: &EncodedProblem) -> String {
        self.steps
            .iter()
            .map(|step| step.to_string(problem))
            .collect::<Vec<String>>()
            .join("\n")
    }
}

impl IntoIterator for Plan {
    type Item = OperatorRef;
    type IntoIter = std::vec::IntoIter<OperatorRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl Deref for Plan {
    type Target = [OperatorRef];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}
