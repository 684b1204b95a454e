use crate::problem::{Condition, State};

/// A state goal in disjunctive normal form. A goal without disjuncts can
/// never be satisfied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    disjuncts: Vec<Condition>,
}

impl Goal {
    pub fn new(disjuncts: Vec<Condition>) -> Self {
        Self { disjuncts }
    }

    /// The goal satisfied by every state.
    pub fn trivial(num_fluents: usize) -> Self {
        Self {
            disjuncts: vec![Condition::empty(num_fluents)],
        }
    }

    pub fn disjuncts(&self) -> &[Condition] {
        &self.disjuncts
    }

    pub fn is_statically_false(&self) -> bool {
        self.disjuncts.is_empty()
    }

    pub fn is_satisfied(&self, state: &State) -> bool {
        self.disjuncts.iter().any(|d| d.is_satisfied(state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_is_a_disjunction() {
        let state = State::from_fluents(2, [1]);
        assert!(Goal::trivial(2).is_satisfied(&state));
        assert!(!Goal::new(vec![]).is_satisfied(&state));
        assert!(Goal::new(vec![]).is_statically_false());
        let goal = Goal::new(vec![
            Condition::new(2, [0], []),
            Condition::new(2, [1], [0]),
        ]);
        assert!(goal.is_satisfied(&state));
        assert!(!goal.is_satisfied(&State::from_fluents(2, [])));
    }
}
