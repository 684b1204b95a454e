use std::{
    fmt::{Debug, Formatter},
    ops::Index,
};

use internment::Intern;
use smallvec::SmallVec;

pub const TYPICAL_NUM_ARGUMENTS: usize = 5;

/// A [`RawSmallTuple`] is a small vector of constant indices. Use this type
/// while you still need to manipulate the tuple, afterwards convert it to a
/// [`SmallTuple`].
pub type RawSmallTuple = SmallVec<[usize; TYPICAL_NUM_ARGUMENTS]>;

/// A [`SmallTuple`] is the argument tuple of a ground fact or a ground task.
/// It is interned, so it is cheap to store, clone, hash and compare, but it
/// can't be easily modified.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SmallTuple {
    inner: Intern<RawSmallTuple>,
}

impl SmallTuple {
    pub fn new(inner: RawSmallTuple) -> Self {
        Self {
            inner: Intern::new(inner),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &usize> {
        self.inner.iter()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn raw(&self) -> &RawSmallTuple {
        &self.inner
    }

    pub fn as_slice(&self) -> &[usize] {
        self.inner.as_slice()
    }
}

impl From<RawSmallTuple> for SmallTuple {
    fn from(inner: RawSmallTuple) -> Self {
        Self::new(inner)
    }
}

impl From<&[usize]> for SmallTuple {
    fn from(inner: &[usize]) -> Self {
        Self::new(inner.into())
    }
}

impl From<Vec<usize>> for SmallTuple {
    fn from(inner: Vec<usize>) -> Self {
        Self::new(inner.into())
    }
}

impl FromIterator<usize> for SmallTuple {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Index<usize> for SmallTuple {
    type Output = usize;

    fn index(&self, index: usize) -> &Self::Output {
        &self.inner[index]
    }
}

// This custom implementation hides the internment details from the user.
impl Debug for SmallTuple {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self.inner.as_slice())
    }
}

// based on [`smallvec::smallvec`]
#[cfg(test)]
macro_rules! small_tuple {
    // count helper: transform any expression into 1
    (@one $x:expr) => (1usize);
    ($elem:expr; $n:expr) => ({
        $crate::encoding::SmallTuple::new($crate::encoding::RawSmallTuple::from_elem($elem, $n))
    });
    ($($x:expr),*$(,)*) => ({
        let count = 0usize $(+ $crate::encoding::small_tuple!(@one $x))*;
        #[allow(unused_mut)]
        let mut vec = $crate::encoding::RawSmallTuple::new();
        if count <= vec.inline_size() {
            $(vec.push($x);)*
            $crate::encoding::SmallTuple::new(vec)
        } else {
            let raw = $crate::encoding::RawSmallTuple::from_vec(vec![$($x,)*]);
            $crate::encoding::SmallTuple::new(raw)
        }
    });
}
#[cfg(test)]
pub(crate) use small_tuple;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interned_tuples_compare_by_value() {
        let a = small_tuple![1, 2, 3];
        let b = SmallTuple::from(vec![1, 2, 3]);
        assert_eq!(a, b);
        assert_eq!(a.len(), 3);
        assert_eq!(a[1], 2);
        assert_ne!(a, small_tuple![3, 2, 1]);
        assert!(small_tuple![].is_empty());
    }
}
