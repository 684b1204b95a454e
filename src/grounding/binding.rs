//! Enumeration of parameter bindings with early pruning.

use crate::encoding::{
    Argument, Expression, Fluent, PredicateTables, SmallTuple, StructuralInertia, SymbolTables,
};
use std::collections::BTreeSet;

/// A top level literal of a precondition.
#[derive(Debug)]
struct Literal<'a> {
    expression: &'a Expression,
    positive: bool,
}

impl<'a> Literal<'a> {
    fn of(conjunct: &'a Expression) -> Option<Self> {
        match conjunct {
            Expression::Atom { .. } | Expression::Equal(..) => Some(Literal {
                expression: conjunct,
                positive: true,
            }),
            Expression::Not(inner) => match inner.as_ref() {
                Expression::Atom { .. } | Expression::Equal(..) => Some(Literal {
                    expression: inner,
                    positive: false,
                }),
                _ => None,
            },
            _ => None,
        }
    }

    /// Returns `false` if the literal is fully bound and contradicts a fixed
    /// value.
    fn is_consistent(
        &self,
        bindings: &[Option<usize>],
        fixed_value: &dyn Fn(&Fluent) -> Option<bool>,
    ) -> bool {
        match self.expression {
            Expression::Atom {
                predicate,
                arguments,
            } => {
                let Some(tuple) = arguments
                    .iter()
                    .map(|a| a.resolve(bindings))
                    .collect::<Option<SmallTuple>>()
                else {
                    return true;
                };
                match fixed_value(&Fluent::new(*predicate, tuple)) {
                    Some(value) => value == self.positive,
                    None => true,
                }
            }
            Expression::Equal(a, b) => match (a.resolve(bindings), b.resolve(bindings)) {
                (Some(a), Some(b)) => (a == b) == self.positive,
                _ => true,
            },
            _ => true,
        }
    }
}

/// Enumerates the bindings of an operator's parameters depth first. Each
/// parameter ranges over the constants of its type, narrowed by the initial
/// occurrences of the positive precondition atoms whose predicate is false
/// whenever it is absent from the initial state. Partial bindings that make a
/// fully bound literal contradict its fixed value are abandoned.
pub(crate) struct Binder<'a> {
    symbols: &'a SymbolTables,
    tables: &'a PredicateTables,
    inertia: &'a StructuralInertia,
    fixed_value: &'a dyn Fn(&Fluent) -> Option<bool>,
}

impl<'a> Binder<'a> {
    pub(crate) fn new(
        symbols: &'a SymbolTables,
        tables: &'a PredicateTables,
        inertia: &'a StructuralInertia,
        fixed_value: &'a dyn Fn(&Fluent) -> Option<bool>,
    ) -> Self {
        Self {
            symbols,
            tables,
            inertia,
            fixed_value,
        }
    }

    /// All complete bindings that extend `partial`. `parameters` are the
    /// parameter types.
    pub(crate) fn bindings(
        &self,
        parameters: &[usize],
        precondition: &Expression,
        mut partial: Vec<Option<usize>>,
    ) -> Vec<Vec<usize>> {
        debug_assert_eq!(parameters.len(), partial.len());
        let literals: Vec<Literal> = precondition
            .conjuncts()
            .iter()
            .filter_map(Literal::of)
            .collect();
        let mut result = vec![];
        if self.is_consistent(&literals, &partial) {
            self.extend(parameters, &literals, &mut partial, &mut result);
        }
        result
    }

    fn is_consistent(&self, literals: &[Literal], bindings: &[Option<usize>]) -> bool {
        literals
            .iter()
            .all(|literal| literal.is_consistent(bindings, self.fixed_value))
    }

    fn extend(
        &self,
        parameters: &[usize],
        literals: &[Literal],
        bindings: &mut Vec<Option<usize>>,
        result: &mut Vec<Vec<usize>>,
    ) {
        let Some(parameter) = bindings.iter().position(Option::is_none) else {
            result.push(bindings.iter().flatten().copied().collect());
            return;
        };
        for candidate in self.candidates(parameter, parameters[parameter], literals, bindings) {
            bindings[parameter] = Some(candidate);
            if self.is_consistent(literals, bindings) {
                self.extend(parameters, literals, bindings, result);
            }
        }
        bindings[parameter] = None;
    }

    fn candidates(
        &self,
        parameter: usize,
        type_: usize,
        literals: &[Literal],
        bindings: &[Option<usize>],
    ) -> Vec<usize> {
        let mut candidates: BTreeSet<usize> = self.symbols.domain(type_).clone();
        for literal in literals.iter().filter(|l| l.positive) {
            let Expression::Atom {
                predicate,
                arguments,
            } = literal.expression
            else {
                continue;
            };
            let positions: Vec<usize> = arguments
                .iter()
                .enumerate()
                .filter(|(_, a)| **a == Argument::Variable(parameter))
                .map(|(position, _)| position)
                .collect();
            if positions.is_empty() || !self.inertia.is_closed_in_init(*predicate) {
                continue;
            }
            let pattern: Vec<Option<usize>> =
                arguments.iter().map(|a| a.resolve(bindings)).collect();
            let occurring: BTreeSet<usize> = self
                .tables
                .table(*predicate)
                .matching(&pattern)
                .filter(|fact| positions.iter().all(|&p| fact[p] == fact[positions[0]]))
                .map(|fact| fact[positions[0]])
                .collect();
            candidates = candidates.intersection(&occurring).copied().collect();
            if candidates.is_empty() {
                break;
            }
        }
        candidates.into_iter().collect()
    }
}
