//! Ordering constraints between the tasks of a task network, stored as a
//! transitively closed precedence matrix.

use fixedbitset::FixedBitSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct OrderingConstraints {
    /// `successors[i]` contains `j` iff task `i` precedes task `j`.
    successors: Vec<FixedBitSet>,
}

impl OrderingConstraints {
    /// No constraints between `len` tasks.
    pub fn new(len: usize) -> Self {
        Self {
            successors: (0..len).map(|_| FixedBitSet::with_capacity(len)).collect(),
        }
    }

    /// Builds the transitive closure of the given `(before, after)` pairs.
    pub fn from_pairs(len: usize, pairs: &[(usize, usize)]) -> Self {
        let mut constraints = Self::new(len);
        for &(before, after) in pairs {
            constraints.add(before, after);
        }
        constraints.close();
        constraints
    }

    /// A chain `0 < 1 < ... < len - 1`.
    pub fn total(len: usize) -> Self {
        let pairs: Vec<(usize, usize)> = (1..len).map(|i| (i - 1, i)).collect();
        Self::from_pairs(len, &pairs)
    }

    pub fn len(&self) -> usize {
        self.successors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.successors.is_empty()
    }

    /// Adds a constraint without restoring transitivity, see [`Self::close`].
    pub fn add(&mut self, before: usize, after: usize) {
        debug_assert!(before < self.len() && after < self.len());
        self.successors[before].insert(after);
    }

    /// Restores transitivity (Warshall).
    pub fn close(&mut self) {
        for k in 0..self.len() {
            let through_k = self.successors[k].clone();
            for i in 0..self.len() {
                if self.successors[i].contains(k) {
                    self.successors[i].union_with(&through_k);
                }
            }
        }
    }

    #[inline(always)]
    pub fn precedes(&self, before: usize, after: usize) -> bool {
        self.successors[before].contains(after)
    }

    pub fn has_predecessor(&self, task: usize) -> bool {
        self.successors.iter().any(|row| row.contains(task))
    }

    /// Tasks that no other task has to precede.
    pub fn first_tasks(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len()).filter(|&task| !self.has_predecessor(task))
    }

    /// True iff the constraints order every pair of distinct tasks in exactly
    /// one direction and contain no cycle.
    pub fn is_totally_ordered(&self) -> bool {
        for i in 0..self.len() {
            if self.precedes(i, i) {
                return false;
            }
            for j in (i + 1)..self.len() {
                if self.precedes(i, j) == self.precedes(j, i) {
                    return false;
                }
            }
        }
        true
    }

    /// All `(before, after)` pairs of the closed relation.
    pub fn pairs(&self) -> Vec<(usize, usize)> {
        self.successors
            .iter()
            .enumerate()
            .flat_map(|(before, row)| row.ones().map(move |after| (before, after)))
            .collect()
    }

    /// Removes a task. Tasks after it shift down by one position.
    pub fn remove(&self, task: usize) -> OrderingConstraints {
        let shift = |j: usize| if j > task { j - 1 } else { j };
        let mut result = Self::new(self.len() - 1);
        for (before, row) in self.successors.iter().enumerate() {
            if before == task {
                continue;
            }
            for after in row.ones().filter(|&after| after != task) {
                result.add(shift(before), shift(after));
            }
        }
        result
    }

    /// Replaces `task` by the tasks of `inner`. The remaining tasks keep
    /// their relative positions, the inserted tasks are appended at the end.
    /// Every predecessor of `task` precedes every inserted task and every
    /// successor of `task` follows them.
    pub fn splice(&self, task: usize, inner: &OrderingConstraints) -> OrderingConstraints {
        let outer = self.remove(task);
        let offset = outer.len();
        let shift = |j: usize| if j > task { j - 1 } else { j };
        let mut result = Self::new(offset + inner.len());
        for (before, after) in outer.pairs() {
            result.add(before, after);
        }
        for (before, after) in inner.pairs() {
            result.add(offset + before, offset + after);
        }
        for other in (0..self.len()).filter(|&other| other != task) {
            for inserted in 0..inner.len() {
                if self.precedes(other, task) {
                    result.add(shift(other), offset + inserted);
                }
                if self.precedes(task, other) {
                    result.add(offset + inserted, shift(other));
                }
            }
        }
        result.close();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chains_are_totally_ordered() {
        assert!(OrderingConstraints::new(0).is_totally_ordered());
        assert!(OrderingConstraints::new(1).is_totally_ordered());
        assert!(OrderingConstraints::total(4).is_totally_ordered());
        assert!(OrderingConstraints::from_pairs(3, &[(0, 1), (1, 2)]).is_totally_ordered());
        assert!(OrderingConstraints::from_pairs(3, &[(2, 0), (0, 1)]).is_totally_ordered());
    }

    #[test]
    fn partial_orders_and_cycles_are_not_totally_ordered() {
        assert!(!OrderingConstraints::new(2).is_totally_ordered());
        assert!(!OrderingConstraints::from_pairs(3, &[(0, 1)]).is_totally_ordered());
        assert!(!OrderingConstraints::from_pairs(3, &[(0, 1), (0, 2)]).is_totally_ordered());
        assert!(!OrderingConstraints::from_pairs(2, &[(0, 1), (1, 0)]).is_totally_ordered());
    }

    #[test]
    fn closure_is_transitive() {
        let constraints = OrderingConstraints::from_pairs(4, &[(0, 1), (1, 2), (2, 3)]);
        assert!(constraints.precedes(0, 3));
        assert!(!constraints.precedes(3, 0));
        assert_eq!(constraints.first_tasks().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn remove_keeps_transitive_constraints() {
        let constraints = OrderingConstraints::from_pairs(3, &[(0, 1), (1, 2)]);
        let removed = constraints.remove(1);
        assert_eq!(removed.len(), 2);
        assert!(removed.precedes(0, 1));
        assert!(removed.is_totally_ordered());
    }

    #[test]
    fn splice_inherits_outer_constraints() {
        // a < x < b, x is replaced by the chain s0 < s1
        let outer = OrderingConstraints::from_pairs(3, &[(0, 1), (1, 2)]);
        let inner = OrderingConstraints::total(2);
        let spliced = outer.splice(1, &inner);

        // positions: a = 0, b = 1, s0 = 2, s1 = 3
        assert_eq!(spliced.len(), 4);
        assert!(spliced.precedes(0, 2));
        assert!(spliced.precedes(0, 3));
        assert!(spliced.precedes(2, 3));
        assert!(spliced.precedes(2, 1));
        assert!(spliced.precedes(3, 1));
        assert!(spliced.precedes(0, 1));
        assert!(spliced.is_totally_ordered());
        assert_eq!(spliced.first_tasks().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn splice_unordered_task() {
        let outer = OrderingConstraints::new(2);
        let spliced = outer.splice(0, &OrderingConstraints::new(2));
        assert_eq!(spliced.len(), 3);
        assert!(spliced.pairs().is_empty());
        assert_eq!(spliced.first_tasks().count(), 3);
    }
}
