use crate::problem::State;
use fixedbitset::FixedBitSet;

/// A conjunction of fluent literals.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Condition {
    positive: FixedBitSet,
    negative: FixedBitSet,
}

impl Condition {
    /// The empty conjunction, satisfied by every state.
    pub fn empty(num_fluents: usize) -> Self {
        Self {
            positive: FixedBitSet::with_capacity(num_fluents),
            negative: FixedBitSet::with_capacity(num_fluents),
        }
    }

    pub fn new(
        num_fluents: usize,
        positive: impl IntoIterator<Item = usize>,
        negative: impl IntoIterator<Item = usize>,
    ) -> Self {
        let mut condition = Self::empty(num_fluents);
        condition.positive.extend(positive);
        condition.negative.extend(negative);
        condition
    }

    pub fn positive(&self) -> &FixedBitSet {
        &self.positive
    }

    pub fn negative(&self) -> &FixedBitSet {
        &self.negative
    }

    pub fn is_empty(&self) -> bool {
        self.positive.count_ones(..) == 0 && self.negative.count_ones(..) == 0
    }

    #[inline(always)]
    pub fn is_satisfied(&self, state: &State) -> bool {
        self.positive.is_subset(state.bits()) && self.negative.is_disjoint(state.bits())
    }
}

/// Add and delete lists. Deletes are applied before adds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Effect {
    add: FixedBitSet,
    delete: FixedBitSet,
}

impl Effect {
    pub fn new(
        num_fluents: usize,
        add: impl IntoIterator<Item = usize>,
        delete: impl IntoIterator<Item = usize>,
    ) -> Self {
        let mut effect = Self {
            add: FixedBitSet::with_capacity(num_fluents),
            delete: FixedBitSet::with_capacity(num_fluents),
        };
        effect.add.extend(add);
        effect.delete.extend(delete);
        effect
    }

    pub fn add(&self) -> &FixedBitSet {
        &self.add
    }

    pub fn delete(&self) -> &FixedBitSet {
        &self.delete
    }

    pub fn is_empty(&self) -> bool {
        self.add.count_ones(..) == 0 && self.delete.count_ones(..) == 0
    }

    pub fn apply(&self, state: &State) -> State {
        let mut successor = state.clone();
        successor.bits_mut().difference_with(&self.delete);
        successor.bits_mut().union_with(&self.add);
        successor
    }
}
