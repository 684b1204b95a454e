//! The intermediate, integer-indexed expression used for preconditions,
//! effects, goals and task networks while grounding.

use crate::encoding::{Fluent, GroundTask, SmallTuple};
use std::collections::BTreeSet;
use strum_macros::EnumIs;

/// If the argument is a constant, then the value is the index of the constant
/// in the symbol tables, otherwise the index is the index of the parameter of
/// the enclosing operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIs)]
pub enum Argument {
    Constant(usize),
    Variable(usize),
}

impl Argument {
    /// Returns the constant this argument denotes under the (partial)
    /// bindings, if any.
    #[inline(always)]
    pub fn resolve(&self, bindings: &[Option<usize>]) -> Option<usize> {
        match self {
            Argument::Constant(constant) => Some(*constant),
            Argument::Variable(variable) => bindings[*variable],
        }
    }

    #[inline(always)]
    fn substitute(&self, instantiation: &[usize]) -> Argument {
        match self {
            Argument::Constant(_) => *self,
            Argument::Variable(variable) => Argument::Constant(instantiation[*variable]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumIs)]
pub enum Expression {
    True,
    False,
    Atom {
        predicate: usize,
        arguments: Vec<Argument>,
    },
    Equal(Argument, Argument),
    Not(Box<Expression>),
    And(Vec<Expression>),
    Or(Vec<Expression>),
    /// A reference to a task, as found in methods and task networks.
    Task {
        symbol: usize,
        arguments: Vec<Argument>,
    },
}

/// A literal of a ground conjunction, see [`Expression::to_dnf`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroundLiteral {
    pub fluent: Fluent,
    pub positive: bool,
}

impl Expression {
    pub fn new_not(expression: Expression) -> Self {
        Self::Not(Box::new(expression))
    }

    pub fn arguments(&self) -> &[Argument] {
        match self {
            Expression::Atom { arguments, .. } | Expression::Task { arguments, .. } => arguments,
            _ => &[],
        }
    }

    /// Replaces every variable by the constant the instantiation assigns to
    /// it.
    pub fn substitute(&self, instantiation: &[usize]) -> Expression {
        match self {
            Expression::True => Expression::True,
            Expression::False => Expression::False,
            Expression::Atom {
                predicate,
                arguments,
            } => Expression::Atom {
                predicate: *predicate,
                arguments: arguments.iter().map(|a| a.substitute(instantiation)).collect(),
            },
            Expression::Equal(a, b) => {
                Expression::Equal(a.substitute(instantiation), b.substitute(instantiation))
            }
            Expression::Not(inner) => Expression::new_not(inner.substitute(instantiation)),
            Expression::And(children) => Expression::And(
                children.iter().map(|c| c.substitute(instantiation)).collect(),
            ),
            Expression::Or(children) => Expression::Or(
                children.iter().map(|c| c.substitute(instantiation)).collect(),
            ),
            Expression::Task { symbol, arguments } => Expression::Task {
                symbol: *symbol,
                arguments: arguments.iter().map(|a| a.substitute(instantiation)).collect(),
            },
        }
    }

    /// Returns the ground fact of a fully instantiated atom.
    pub fn as_fluent(&self) -> Option<Fluent> {
        match self {
            Expression::Atom {
                predicate,
                arguments,
            } => ground_tuple(arguments).map(|tuple| Fluent::new(*predicate, tuple)),
            _ => None,
        }
    }

    /// Returns the ground task of a fully instantiated task reference.
    pub fn as_ground_task(&self) -> Option<GroundTask> {
        match self {
            Expression::Task { symbol, arguments } => {
                ground_tuple(arguments).map(|tuple| GroundTask::new(*symbol, tuple))
            }
            _ => None,
        }
    }

    /// Replaces ground atoms whose truth value is known by `True` or `False`
    /// and simplifies the result.
    pub fn assign<F>(&self, truth_value: &F) -> Expression
    where
        F: Fn(&Fluent) -> Option<bool>,
    {
        let assigned = self.map_atoms(&|atom| match atom.as_fluent() {
            Some(fluent) => match truth_value(&fluent) {
                Some(true) => Expression::True,
                Some(false) => Expression::False,
                None => atom.clone(),
            },
            None => atom.clone(),
        });
        assigned.simplify()
    }

    fn map_atoms<F>(&self, f: &F) -> Expression
    where
        F: Fn(&Expression) -> Expression,
    {
        match self {
            Expression::Atom { .. } => f(self),
            Expression::Not(inner) => Expression::new_not(inner.map_atoms(f)),
            Expression::And(children) => {
                Expression::And(children.iter().map(|c| c.map_atoms(f)).collect())
            }
            Expression::Or(children) => {
                Expression::Or(children.iter().map(|c| c.map_atoms(f)).collect())
            }
            _ => self.clone(),
        }
    }

    /// Folds constants: `True`/`False` are propagated through connectives,
    /// nested conjunctions and disjunctions are flattened, double negations
    /// removed and ground equalities evaluated.
    pub fn simplify(self) -> Expression {
        match self {
            Expression::Equal(Argument::Constant(a), Argument::Constant(b)) => {
                if a == b {
                    Expression::True
                } else {
                    Expression::False
                }
            }
            Expression::Equal(a, b) if a == b => Expression::True,
            Expression::Not(inner) => match inner.simplify() {
                Expression::True => Expression::False,
                Expression::False => Expression::True,
                Expression::Not(inner) => *inner,
                other => Expression::new_not(other),
            },
            Expression::And(children) => {
                let mut simplified = Vec::with_capacity(children.len());
                for child in children {
                    match child.simplify() {
                        Expression::True => {}
                        Expression::False => return Expression::False,
                        Expression::And(grandchildren) => simplified.extend(grandchildren),
                        other => {
                            if !simplified.contains(&other) {
                                simplified.push(other)
                            }
                        }
                    }
                }
                match simplified.len() {
                    0 => Expression::True,
                    1 => simplified.pop().unwrap_or(Expression::True),
                    _ => Expression::And(simplified),
                }
            }
            Expression::Or(children) => {
                let mut simplified = Vec::with_capacity(children.len());
                for child in children {
                    match child.simplify() {
                        Expression::False => {}
                        Expression::True => return Expression::True,
                        Expression::Or(grandchildren) => simplified.extend(grandchildren),
                        other => {
                            if !simplified.contains(&other) {
                                simplified.push(other)
                            }
                        }
                    }
                }
                match simplified.len() {
                    0 => Expression::False,
                    1 => simplified.pop().unwrap_or(Expression::False),
                    _ => Expression::Or(simplified),
                }
            }
            other => other,
        }
    }

    /// Pushes negations down to atoms and equalities.
    pub fn to_nnf(&self) -> Expression {
        match self {
            Expression::Not(inner) => match inner.as_ref() {
                Expression::True => Expression::False,
                Expression::False => Expression::True,
                Expression::Not(inner) => inner.to_nnf(),
                Expression::And(children) => Expression::Or(
                    children
                        .iter()
                        .map(|c| Expression::new_not(c.clone()).to_nnf())
                        .collect(),
                ),
                Expression::Or(children) => Expression::And(
                    children
                        .iter()
                        .map(|c| Expression::new_not(c.clone()).to_nnf())
                        .collect(),
                ),
                _ => self.clone(),
            },
            Expression::And(children) => {
                Expression::And(children.iter().map(|c| c.to_nnf()).collect())
            }
            Expression::Or(children) => {
                Expression::Or(children.iter().map(|c| c.to_nnf()).collect())
            }
            _ => self.clone(),
        }
    }

    /// Rewrites the expression as a disjunction of conjunctions. Each
    /// returned vector is one conjunction of literals (atoms, equalities or
    /// their negations). `True` yields a single empty conjunction and `False`
    /// no conjunction at all.
    pub fn to_dnf(&self) -> Vec<Vec<Expression>> {
        fn dnf(expression: &Expression) -> Vec<Vec<Expression>> {
            match expression {
                Expression::True => vec![vec![]],
                Expression::False => vec![],
                Expression::Or(children) => children.iter().flat_map(dnf).collect(),
                Expression::And(children) => {
                    let mut result = vec![vec![]];
                    for child in children {
                        let child_dnf = dnf(child);
                        let mut product = Vec::with_capacity(result.len() * child_dnf.len());
                        for left in &result {
                            for right in &child_dnf {
                                let mut conjunction: Vec<Expression> = left.clone();
                                conjunction.extend(right.iter().cloned());
                                product.push(conjunction);
                            }
                        }
                        result = product;
                    }
                    result
                }
                literal => vec![vec![literal.clone()]],
            }
        }
        dnf(&self.to_nnf().simplify())
    }

    /// Collects the ground literals of a ground conjunction. Returns `None`
    /// if the expression is not a conjunction of ground atoms and negated
    /// ground atoms.
    pub fn ground_literals(&self) -> Option<Vec<GroundLiteral>> {
        let conjuncts: &[Expression] = match self {
            Expression::True => &[],
            Expression::And(children) => children,
            literal => std::slice::from_ref(literal),
        };
        conjuncts
            .iter()
            .map(|conjunct| match conjunct {
                Expression::Atom { .. } => conjunct.as_fluent().map(|fluent| GroundLiteral {
                    fluent,
                    positive: true,
                }),
                Expression::Not(inner) => inner.as_fluent().map(|fluent| GroundLiteral {
                    fluent,
                    positive: false,
                }),
                _ => None,
            })
            .collect()
    }

    /// Top level conjuncts of the expression.
    pub fn conjuncts(&self) -> &[Expression] {
        match self {
            Expression::And(children) => children,
            Expression::True => &[],
            other => std::slice::from_ref(other),
        }
    }

    /// Visits every atom together with its polarity.
    pub fn for_each_atom<F>(&self, f: &mut F)
    where
        F: FnMut(&Expression, bool),
    {
        fn visit<F: FnMut(&Expression, bool)>(expression: &Expression, positive: bool, f: &mut F) {
            match expression {
                Expression::Atom { .. } => f(expression, positive),
                Expression::Not(inner) => visit(inner, !positive, f),
                Expression::And(children) | Expression::Or(children) => {
                    for child in children {
                        visit(child, positive, f);
                    }
                }
                _ => {}
            }
        }
        visit(self, true, f)
    }

    /// Parameters referenced anywhere in the expression.
    pub fn variables(&self) -> BTreeSet<usize> {
        let mut variables = BTreeSet::new();
        self.collect_variables(&mut variables);
        variables
    }

    fn collect_variables(&self, variables: &mut BTreeSet<usize>) {
        match self {
            Expression::Atom { arguments, .. } | Expression::Task { arguments, .. } => {
                variables.extend(arguments.iter().filter_map(variable_of))
            }
            Expression::Equal(a, b) => {
                variables.extend([a, b].into_iter().filter_map(variable_of));
            }
            Expression::Not(inner) => inner.collect_variables(variables),
            Expression::And(children) | Expression::Or(children) => {
                for child in children {
                    child.collect_variables(variables);
                }
            }
            _ => {}
        }
    }
}

fn variable_of(argument: &Argument) -> Option<usize> {
    match argument {
        Argument::Variable(variable) => Some(*variable),
        Argument::Constant(_) => None,
    }
}

fn ground_tuple(arguments: &[Argument]) -> Option<SmallTuple> {
    arguments
        .iter()
        .map(|argument| match argument {
            Argument::Constant(constant) => Some(*constant),
            Argument::Variable(_) => None,
        })
        .collect::<Option<SmallTuple>>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom(predicate: usize, arguments: Vec<Argument>) -> Expression {
        Expression::Atom {
            predicate,
            arguments,
        }
    }

    #[test]
    fn simplify_folds_constants() {
        let p = atom(0, vec![Argument::Constant(1)]);
        let expression = Expression::And(vec![
            Expression::True,
            Expression::And(vec![p.clone(), Expression::new_not(Expression::False)]),
            Expression::Or(vec![Expression::False, p.clone()]),
        ]);
        assert_eq!(expression.simplify(), p);

        let contradiction = Expression::And(vec![
            p.clone(),
            Expression::Equal(Argument::Constant(1), Argument::Constant(2)),
        ]);
        assert_eq!(contradiction.simplify(), Expression::False);
        assert_eq!(Expression::Or(vec![]).simplify(), Expression::False);
        assert_eq!(Expression::And(vec![]).simplify(), Expression::True);
    }

    #[test]
    fn substitute_binds_variables() {
        let expression = atom(0, vec![Argument::Variable(1), Argument::Constant(7)]);
        let ground = expression.substitute(&[3, 4]);
        assert_eq!(ground, atom(0, vec![Argument::Constant(4), Argument::Constant(7)]));
        assert_eq!(
            ground.as_fluent(),
            Some(Fluent::new(0, SmallTuple::from(vec![4, 7])))
        );
        assert_eq!(expression.as_fluent(), None);
        assert_eq!(expression.variables(), BTreeSet::from([1]));
    }

    #[test]
    fn dnf_of_negated_conjunction() {
        let p = atom(0, vec![]);
        let q = atom(1, vec![]);
        let r = atom(2, vec![]);
        // (and r (not (and p q))) == (or (and r (not p)) (and r (not q)))
        let expression = Expression::And(vec![
            r.clone(),
            Expression::new_not(Expression::And(vec![p.clone(), q.clone()])),
        ]);
        assert_eq!(
            expression.to_dnf(),
            vec![
                vec![r.clone(), Expression::new_not(p)],
                vec![r, Expression::new_not(q)],
            ]
        );
        assert_eq!(Expression::True.to_dnf(), vec![Vec::<Expression>::new()]);
        assert!(Expression::False.to_dnf().is_empty());
    }

    #[test]
    fn assign_replaces_known_atoms() {
        let p = atom(0, vec![Argument::Constant(0)]);
        let q = atom(1, vec![Argument::Constant(0)]);
        let expression = Expression::And(vec![p.clone(), Expression::new_not(q.clone())]);

        let known_p = |fluent: &Fluent| (fluent.predicate() == 0).then_some(true);
        assert_eq!(expression.assign(&known_p), Expression::new_not(q.clone()));

        let known_q = |fluent: &Fluent| (fluent.predicate() == 1).then_some(true);
        assert_eq!(expression.assign(&known_q), Expression::False);
    }

    #[test]
    fn ground_literals_of_conjunction() {
        let p = atom(0, vec![Argument::Constant(0)]);
        let q = atom(1, vec![Argument::Constant(2)]);
        let expression = Expression::And(vec![p.clone(), Expression::new_not(q.clone())]);
        let literals = expression.ground_literals().unwrap();
        assert_eq!(literals.len(), 2);
        assert!(literals[0].positive);
        assert!(!literals[1].positive);
        assert_eq!(literals[1].fluent, q.as_fluent().unwrap());
        assert_eq!(Expression::True.ground_literals(), Some(vec![]));
        assert_eq!(
            Expression::Or(vec![p, q]).ground_literals(),
            None
        );
    }
}
