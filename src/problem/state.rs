use fixedbitset::FixedBitSet;
use std::fmt::{Debug, Formatter};

/// A world state: bit `i` is set iff the relevant fluent with index `i`
/// holds.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct State {
    fluents: FixedBitSet,
}

impl State {
    /// A state over `num_fluents` fluents in which nothing holds.
    pub fn empty(num_fluents: usize) -> Self {
        Self {
            fluents: FixedBitSet::with_capacity(num_fluents),
        }
    }

    pub fn from_fluents(num_fluents: usize, fluents: impl IntoIterator<Item = usize>) -> Self {
        let mut state = Self::empty(num_fluents);
        for fluent in fluents {
            state.fluents.insert(fluent);
        }
        state
    }

    pub fn num_fluents(&self) -> usize {
        self.fluents.len()
    }

    #[inline(always)]
    pub fn holds(&self, fluent: usize) -> bool {
        self.fluents.contains(fluent)
    }

    pub fn set_to(&mut self, fluent: usize, value: bool) {
        self.fluents.set(fluent, value)
    }

    /// Indices of the fluents that hold.
    pub fn true_fluents(&self) -> impl Iterator<Item = usize> + '_ {
        self.fluents.ones()
    }

    pub(crate) fn bits(&self) -> &FixedBitSet {
        &self.fluents
    }

    pub(crate) fn bits_mut(&mut self) -> &mut FixedBitSet {
        &mut self.fluents
    }
}

impl Debug for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.fluents.ones()).finish()
    }
}
