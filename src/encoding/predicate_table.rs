//! Occurrence tables of the initial state, used to bound the candidate
//! constants of a parameter while grounding.

use crate::encoding::{Fluent, SmallTuple};
use std::collections::{HashMap, HashSet};

/// The initial facts of a single predicate, indexed by argument position and
/// constant.
#[derive(Debug, Clone, Default)]
pub struct PredicateTable {
    facts: Vec<SmallTuple>,
    known: HashSet<SmallTuple>,
    /// `index[position][constant]` lists the facts with `constant` at
    /// `position`.
    index: Vec<HashMap<usize, Vec<usize>>>,
}

impl PredicateTable {
    pub fn new(arity: usize) -> Self {
        Self {
            facts: vec![],
            known: HashSet::new(),
            index: vec![HashMap::new(); arity],
        }
    }

    /// Returns false if the fact was already stored.
    pub fn insert(&mut self, arguments: SmallTuple) -> bool {
        debug_assert_eq!(arguments.len(), self.index.len());
        if !self.known.insert(arguments) {
            return false;
        }
        let id = self.facts.len();
        for (position, &constant) in arguments.iter().enumerate() {
            self.index[position].entry(constant).or_default().push(id);
        }
        self.facts.push(arguments);
        true
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Facts matching the pattern, where `None` matches any constant.
    pub fn matching<'a>(
        &'a self,
        pattern: &'a [Option<usize>],
    ) -> Box<dyn Iterator<Item = &'a [usize]> + 'a> {
        debug_assert_eq!(pattern.len(), self.index.len());
        // Start from the shortest occurrence list among the bound positions.
        let shortest = pattern
            .iter()
            .enumerate()
            .filter_map(|(position, constant)| {
                constant.map(|c| {
                    self.index[position]
                        .get(&c)
                        .map_or(&[][..], |ids| ids.as_slice())
                })
            })
            .min_by_key(|ids| ids.len());
        let matches = move |args: &&'a [usize]| {
            pattern
                .iter()
                .zip(args.iter())
                .all(|(p, a)| p.map_or(true, |p| p == *a))
        };
        match shortest {
            Some(ids) => Box::new(
                ids.iter()
                    .map(move |&id| self.facts[id].as_slice())
                    .filter(matches),
            ),
            None => Box::new(self.facts.iter().map(|f| f.as_slice())),
        }
    }

    pub fn count(&self, pattern: &[Option<usize>]) -> usize {
        self.matching(pattern).count()
    }

    pub fn contains(&self, arguments: &[usize]) -> bool {
        self.known.contains(&SmallTuple::from(arguments))
    }
}

/// One [`PredicateTable`] per predicate.
#[derive(Debug, Clone, Default)]
pub struct PredicateTables {
    tables: Vec<PredicateTable>,
}

impl PredicateTables {
    pub fn new<'a>(
        arities: impl IntoIterator<Item = usize>,
        init: impl IntoIterator<Item = &'a Fluent>,
    ) -> Self {
        let mut tables: Vec<PredicateTable> =
            arities.into_iter().map(PredicateTable::new).collect();
        for fluent in init {
            tables[fluent.predicate()].insert(SmallTuple::from(fluent.arguments()));
        }
        Self { tables }
    }

    #[inline(always)]
    pub fn table(&self, predicate: usize) -> &PredicateTable {
        &self.tables[predicate]
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_respects_bound_positions() {
        let mut table = PredicateTable::new(2);
        table.insert(SmallTuple::from(vec![0, 1]));
        table.insert(SmallTuple::from(vec![0, 2]));
        table.insert(SmallTuple::from(vec![3, 1]));
        table.insert(SmallTuple::from(vec![0, 1]));

        assert_eq!(table.len(), 3);
        assert_eq!(table.count(&[None, None]), 3);
        assert_eq!(table.count(&[Some(0), None]), 2);
        assert_eq!(table.count(&[None, Some(1)]), 2);
        assert_eq!(table.count(&[Some(3), Some(2)]), 0);
        assert_eq!(table.count(&[Some(5), None]), 0);
        assert!(table.contains(&[3, 1]));
        assert!(!table.contains(&[1, 3]));

        let seconds: Vec<usize> = table.matching(&[Some(0), None]).map(|f| f[1]).collect();
        assert_eq!(seconds, vec![1, 2]);
    }

    #[test]
    fn tables_are_built_per_predicate() {
        let init = [
            Fluent::new(1, SmallTuple::from(vec![4])),
            Fluent::new(1, SmallTuple::from(vec![5])),
        ];
        let tables = PredicateTables::new([0, 1], init.iter());
        assert!(tables.table(0).is_empty());
        assert_eq!(tables.table(1).len(), 2);
    }

    #[test]
    fn duplicates_are_ignored_in_large_tables() {
        let n = 20_000;
        let init: Vec<Fluent> = (0..n)
            .map(|i| Fluent::new(0, SmallTuple::from(vec![i % 200, i / 200])))
            .collect();
        let mut tables = PredicateTables::new([2], init.iter());
        assert_eq!(tables.table(0).len(), n);
        assert_eq!(tables.table(0).count(&[Some(7), None]), n / 200);

        let table = &mut tables.tables[0];
        assert!(!table.insert(SmallTuple::from(vec![7, 3])));
        assert!(table.insert(SmallTuple::from(vec![200, 0])));
        assert_eq!(table.len(), n + 1);
        assert!(table.contains(&[200, 0]));
    }
}
