//! Four-valued partial-order comparison of bitvectors as sets.
//!
//! Two sets can be equal, one can strictly contain the other, or each can
//! hold bits the other lacks. [`BitVec::relation`] computes which in a
//! single pass over the word arrays; the `PartialEq`/`PartialOrd` impls on
//! [`BitVec`] map the result onto `==`, `<`, `<=`, `>`, `>=`.

use core::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bitvec::BitVec;

/// Result of comparing two bitvectors as sets.
///
/// Built from two independent facts: whether the left vector has bits the
/// right lacks, and vice versa. The four combinations give the four
/// variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Relation {
    /// Both sets hold exactly the same bits.
    Equal,
    /// The left set strictly contains the right.
    Superset,
    /// The right set strictly contains the left.
    Subset,
    /// Each set holds bits the other lacks.
    Incomparable,
}

impl Relation {
    fn from_flags(left_only: bool, right_only: bool) -> Self {
        match (left_only, right_only) {
            (false, false) => Relation::Equal,
            (true, false) => Relation::Superset,
            (false, true) => Relation::Subset,
            (true, true) => Relation::Incomparable,
        }
    }

    /// True for `Equal` and `Subset` (left `<=` right).
    #[inline]
    pub fn is_subset_or_equal(self) -> bool {
        matches!(self, Relation::Equal | Relation::Subset)
    }

    /// True for `Equal` and `Superset` (left `>=` right).
    #[inline]
    pub fn is_superset_or_equal(self) -> bool {
        matches!(self, Relation::Equal | Relation::Superset)
    }
}

impl BitVec {
    /// Compare two vectors as sets in one linear pass.
    ///
    /// Over the common word prefix, bits set in `self` but not `other`
    /// accumulate into the "left only" flag and vice versa; words beyond
    /// the shorter vector feed the longer vector's flag alone. Length plays
    /// no part in the result: trailing zero range is not a distinguishing
    /// feature of a set.
    ///
    /// # Example
    ///
    /// ```
    /// use fastset::{BitVec, Relation};
    ///
    /// let a: BitVec = [0, 1, 2].into_iter().collect();
    /// let b: BitVec = [1, 2, 3].into_iter().collect();
    /// assert_eq!(a.relation(&b), Relation::Incomparable);
    /// assert_eq!(a.relation(&a.union(&b)), Relation::Subset);
    /// ```
    pub fn relation(&self, other: &BitVec) -> Relation {
        let left = self.words();
        let right = other.words();
        let common = left.len().min(right.len());

        let mut left_only = 0u64;
        let mut right_only = 0u64;

        for n in 0..common {
            left_only |= left[n] & !right[n];
            right_only |= right[n] & !left[n];
        }
        for &word in &left[common..] {
            left_only |= word;
        }
        for &word in &right[common..] {
            right_only |= word;
        }

        Relation::from_flags(left_only != 0, right_only != 0)
    }
}

/// Set equality: same bits, regardless of trailing zero length.
impl PartialEq for BitVec {
    fn eq(&self, other: &Self) -> bool {
        self.relation(other) == Relation::Equal
    }
}

impl Eq for BitVec {}

/// Containment order: `a < b` iff `a` is a strict subset of `b`.
/// Incomparable sets yield `None`.
impl PartialOrd for BitVec {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.relation(other) {
            Relation::Equal => Some(Ordering::Equal),
            Relation::Superset => Some(Ordering::Greater),
            Relation::Subset => Some(Ordering::Less),
            Relation::Incomparable => None,
        }
    }
}
