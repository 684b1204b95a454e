//! Inertia analysis. A predicate (or a ground fact) is inertial if no action
//! can assert it, retract it, or both.

use crate::encoding::{Expression, Fluent, IntAction};
use std::collections::HashSet;
use strum_macros::EnumIs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIs)]
pub enum Inertia {
    /// Neither asserted nor retracted by any action.
    Static,
    /// Never asserted, i.e. it can only become false.
    Positive,
    /// Never retracted, i.e. it can only become true.
    Negative,
    /// Asserted and retracted by some actions.
    Fluent,
}

impl Inertia {
    pub fn from_effects(asserted: bool, retracted: bool) -> Self {
        match (asserted, retracted) {
            (false, false) => Inertia::Static,
            (false, true) => Inertia::Positive,
            (true, false) => Inertia::Negative,
            (true, true) => Inertia::Fluent,
        }
    }

    /// The value an atom has in every reachable state, given its value in the
    /// initial state, or `None` if it may change.
    #[inline(always)]
    pub fn fixed_value(&self, in_init: bool) -> Option<bool> {
        match (self, in_init) {
            (Inertia::Static, _) => Some(in_init),
            (Inertia::Positive, false) => Some(false),
            (Inertia::Negative, true) => Some(true),
            _ => None,
        }
    }

    pub fn is_inertial(&self) -> bool {
        !self.is_fluent()
    }
}

/// Inertia of every predicate, computed from the lifted action effects. It
/// bounds grounding but never fixes the value of a particular fact on its own,
/// see [`Inertia::fixed_value`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralInertia {
    predicates: Vec<Inertia>,
}

impl StructuralInertia {
    pub fn compute(num_predicates: usize, actions: &[IntAction]) -> Self {
        let mut asserted = vec![false; num_predicates];
        let mut retracted = vec![false; num_predicates];
        for action in actions {
            action.effect().for_each_atom(&mut |atom, positive| {
                if let Expression::Atom { predicate, .. } = atom {
                    if positive {
                        asserted[*predicate] = true;
                    } else {
                        retracted[*predicate] = true;
                    }
                }
            });
        }
        Self {
            predicates: asserted
                .into_iter()
                .zip(retracted)
                .map(|(a, r)| Inertia::from_effects(a, r))
                .collect(),
        }
    }

    #[inline(always)]
    pub fn of(&self, predicate: usize) -> Inertia {
        self.predicates[predicate]
    }

    /// True if a fact of this predicate that is absent from the initial state
    /// is false in every reachable state. Occurrence tables of such
    /// predicates bound the candidate bindings of their arguments.
    pub fn is_closed_in_init(&self, predicate: usize) -> bool {
        self.of(predicate).fixed_value(false) == Some(false)
    }

    pub fn inertial_predicates(&self) -> Vec<usize> {
        self.predicates
            .iter()
            .enumerate()
            .filter(|(_, inertia)| inertia.is_inertial())
            .map(|(predicate, _)| predicate)
            .collect()
    }
}

/// Inertia of ground facts, computed from the ground actions and the initial
/// state.
#[derive(Debug, Clone)]
pub struct GroundInertia {
    asserted: HashSet<Fluent>,
    retracted: HashSet<Fluent>,
    init: HashSet<Fluent>,
    /// Facts mentioned by some ground action, in order of first appearance.
    mentioned: Vec<Fluent>,
}

impl GroundInertia {
    pub fn compute(actions: &[IntAction], init: &HashSet<Fluent>) -> Self {
        let mut asserted = HashSet::new();
        let mut retracted = HashSet::new();
        let mut seen = HashSet::new();
        let mut mentioned = vec![];
        for action in actions {
            for literal in action.effect_literals() {
                if literal.positive {
                    asserted.insert(literal.fluent);
                } else {
                    retracted.insert(literal.fluent);
                }
                if seen.insert(literal.fluent) {
                    mentioned.push(literal.fluent);
                }
            }
            action.precondition().for_each_atom(&mut |atom, _| {
                if let Some(fluent) = atom.as_fluent() {
                    if seen.insert(fluent) {
                        mentioned.push(fluent);
                    }
                }
            });
        }
        Self {
            asserted,
            retracted,
            init: init.clone(),
            mentioned,
        }
    }

    pub fn of(&self, fluent: &Fluent) -> Inertia {
        Inertia::from_effects(self.asserted.contains(fluent), self.retracted.contains(fluent))
    }

    pub fn fixed_value(&self, fluent: &Fluent) -> Option<bool> {
        self.of(fluent).fixed_value(self.init.contains(fluent))
    }

    /// Mentioned facts that no ground action can both assert and retract.
    pub fn inertial_facts(&self) -> Vec<Fluent> {
        self.mentioned
            .iter()
            .filter(|fluent| self.of(fluent).is_inertial())
            .copied()
            .collect()
    }

    /// Mentioned facts whose value never changes.
    pub fn fixed_facts(&self) -> Vec<Fluent> {
        self.mentioned
            .iter()
            .filter(|fluent| self.fixed_value(fluent).is_some())
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::{Argument, SmallTuple};
    use crate::parsed_types::Name;

    fn atom(predicate: usize, argument: Argument) -> Expression {
        Expression::Atom {
            predicate,
            arguments: vec![argument],
        }
    }

    /// `toggle(x)`: pre `off(x)`, add `on(x)`, del `off(x)`; and the reverse.
    fn toggle_actions() -> Vec<IntAction> {
        let x = Argument::Variable(0);
        vec![
            IntAction::new(
                Name::new("switch-on"),
                0,
                vec![0],
                atom(1, x),
                Expression::And(vec![atom(0, x), Expression::new_not(atom(1, x))]),
            ),
            IntAction::new(
                Name::new("switch-off"),
                1,
                vec![0],
                atom(0, x),
                Expression::And(vec![atom(1, x), Expression::new_not(atom(0, x))]),
            ),
        ]
    }

    #[test]
    fn fixed_values() {
        assert_eq!(Inertia::Static.fixed_value(true), Some(true));
        assert_eq!(Inertia::Static.fixed_value(false), Some(false));
        assert_eq!(Inertia::Positive.fixed_value(false), Some(false));
        assert_eq!(Inertia::Positive.fixed_value(true), None);
        assert_eq!(Inertia::Negative.fixed_value(true), Some(true));
        assert_eq!(Inertia::Negative.fixed_value(false), None);
        assert_eq!(Inertia::Fluent.fixed_value(true), None);
    }

    #[test]
    fn no_inertia_in_toggle_domain() {
        let actions = toggle_actions();
        let structural = StructuralInertia::compute(2, &actions);
        assert!(structural.inertial_predicates().is_empty());

        let ground: Vec<IntAction> = actions
            .iter()
            .flat_map(|a| [a.instantiate(vec![0]), a.instantiate(vec![1])])
            .collect();
        let init = HashSet::from([Fluent::new(1, SmallTuple::from(vec![0]))]);
        let inertia = GroundInertia::compute(&ground, &init);
        assert!(inertia.inertial_facts().is_empty());
        assert!(inertia.fixed_facts().is_empty());
    }

    #[test]
    fn predicates_without_effects_are_static() {
        let x = Argument::Variable(0);
        let actions = vec![IntAction::new(
            Name::new("paint"),
            0,
            vec![0],
            atom(2, x),
            Expression::And(vec![atom(0, x), Expression::new_not(atom(1, x))]),
        )];
        let inertia = StructuralInertia::compute(3, &actions);
        assert_eq!(inertia.of(0), Inertia::Negative);
        assert_eq!(inertia.of(1), Inertia::Positive);
        assert_eq!(inertia.of(2), Inertia::Static);
        assert_eq!(inertia.inertial_predicates(), vec![0, 1, 2]);
        assert!(!inertia.is_closed_in_init(0));
        assert!(inertia.is_closed_in_init(1));
        assert!(inertia.is_closed_in_init(2));
    }
}
