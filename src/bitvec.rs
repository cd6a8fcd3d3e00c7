//! Dynamically growable bitvector with word-parallel set algebra.
//!
//! This module provides `BitVec`, the main data structure for representing
//! sets of integer indices as packed 64-bit words.

#[cfg(not(test))]
use alloc::vec;
#[cfg(not(test))]
use alloc::vec::Vec;

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::popcount::popcount_words;

/// Number of bits per storage word.
pub const WORD_BITS: usize = 64;

/// Number of words needed to hold `len` bits.
#[inline]
fn words_for(len: usize) -> usize {
    len.div_ceil(WORD_BITS)
}

/// Word index and single-bit mask for bit position `i`.
#[inline]
fn bit_to_index(i: usize) -> (usize, u64) {
    (i / WORD_BITS, 1u64 << (i % WORD_BITS))
}

/// A growable set of integer indices stored as packed 64-bit words.
///
/// The vector tracks a logical bit length `len` separate from its word
/// storage. Every bit at position `>= len` reads as zero, including unused
/// bits inside the boundary word; all mutators maintain this invariant, so
/// the word array can be combined word-by-word without re-masking.
///
/// Word storage only ever grows (shrinking the length keeps the
/// allocation); the single exception is `resize(0)`, which releases the
/// storage entirely.
///
/// `BitVec` is a plain value type: share one between owners with
/// `Rc`/`Arc`, and clone it before mutating a shared instance. Mutation
/// requires `&mut`, so the clone-before-mutate contract is enforced by the
/// compiler rather than by convention.
///
/// # Example
///
/// ```
/// use fastset::BitVec;
///
/// let mut v = BitVec::new();
/// v.set(3);
/// v.set(10);
/// assert_eq!(v.count_ones(), 2);
/// assert_eq!(v.next_set_bit(4), Some(10));
/// assert_eq!(v.to_string(), "{3, 10}");
/// ```
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct BitVec {
    /// Raw bit storage. `words.len()` covers exactly `len` bits rounded up
    /// to a word; bits at positions `>= len` are always zero.
    words: Vec<u64>,
    /// Number of meaningful bit positions (0-based exclusive upper bound).
    len: usize,
}

impl BitVec {
    /// Create an empty bitvector.
    pub fn new() -> Self {
        Self {
            words: Vec::new(),
            len: 0,
        }
    }

    /// Create a bitvector pre-grown to `initial_len` bits, all zero.
    pub fn with_len(initial_len: usize) -> Self {
        Self {
            words: vec![0; words_for(initial_len)],
            len: initial_len,
        }
    }

    /// Logical bit length (one past the highest addressable position).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the logical length is zero.
    ///
    /// Note this is about length, not contents; see [`BitVec::none`] for
    /// "has no set bits".
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if no bit is set.
    #[inline]
    pub fn none(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Returns true if at least one bit is set.
    #[inline]
    pub fn any(&self) -> bool {
        !self.none()
    }

    /// Number of 64-bit words in the bitvector.
    #[inline]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Get a slice of all words.
    #[inline]
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Re-establish the length invariant on externally supplied state:
    /// bring the word count to exactly `words_for(len)` and mask the
    /// boundary word.
    #[cfg(feature = "serde")]
    fn normalize(&mut self) {
        let nwords = words_for(self.len);
        self.words.resize(nwords, 0);
        let boundary = self.len % WORD_BITS;
        if boundary != 0 {
            self.words[nwords - 1] &= (1u64 << boundary) - 1;
        }
    }

    /// Change the logical length to `new_len` bits.
    ///
    /// Growing zero-fills the new range. Shrinking keeps the allocation and
    /// clears the now-out-of-range bits in the new boundary word, so a later
    /// grow cannot expose stale bits. `resize(0)` releases the storage
    /// entirely; this is the only case where capacity goes down.
    pub fn resize(&mut self, new_len: usize) {
        if new_len == self.len {
            return;
        }

        if new_len == 0 {
            self.words = Vec::new();
            self.len = 0;
            return;
        }

        let new_nwords = words_for(new_len);
        if new_len < self.len {
            // Vec::truncate keeps the allocation.
            self.words.truncate(new_nwords);
            let boundary = new_len % WORD_BITS;
            if boundary != 0 {
                self.words[new_nwords - 1] &= (1u64 << boundary) - 1;
            }
        } else {
            // Appended words are zeroed; the old boundary word carries no
            // bits at or above the old length, so there is nothing to clear.
            self.words.resize(new_nwords, 0);
        }

        self.len = new_len;
        debug_assert!(self.words.len() == words_for(self.len));
    }

    /// Set the bit at `i`, growing the vector to length `i + 1` first if
    /// needed. Returns the previous value.
    ///
    /// # Panics
    ///
    /// Panics if `i == usize::MAX`; the grown length `i + 1` would not be
    /// representable.
    pub fn set(&mut self, i: usize) -> bool {
        assert!(i < usize::MAX, "bit index {} out of range", i);
        if i >= self.len {
            self.resize(i + 1);
        }

        let (word_index, mask) = bit_to_index(i);
        let prev = self.words[word_index] & mask != 0;
        self.words[word_index] |= mask;
        prev
    }

    /// Clear the bit at `i`, returning the previous value.
    ///
    /// A position at or beyond the current length is already clear; this is
    /// a no-op returning false.
    pub fn clear(&mut self, i: usize) -> bool {
        if i >= self.len {
            return false;
        }

        let (word_index, mask) = bit_to_index(i);
        let prev = self.words[word_index] & mask != 0;
        self.words[word_index] &= !mask;
        prev
    }

    /// Test the bit at `i`. Positions at or beyond the length read as false.
    #[inline]
    pub fn test(&self, i: usize) -> bool {
        if i >= self.len {
            return false;
        }

        let (word_index, mask) = bit_to_index(i);
        self.words[word_index] & mask != 0
    }

    /// Find the smallest set index `>= from`, or `None` if there is none.
    ///
    /// This defines the canonical ascending enumeration order used by
    /// [`BitVec::ones`] and [`Transform::apply`](crate::Transform::apply).
    pub fn next_set_bit(&self, from: usize) -> Option<usize> {
        if from >= self.len {
            return None;
        }

        let mut word_index = from / WORD_BITS;
        // Mask off bits below `from` in its own word, then scan upward.
        let mut word = self.words[word_index] & (!0u64 << (from % WORD_BITS));
        loop {
            if word != 0 {
                return Some(word_index * WORD_BITS + word.trailing_zeros() as usize);
            }
            word_index += 1;
            if word_index >= self.words.len() {
                return None;
            }
            word = self.words[word_index];
        }
    }

    /// Total number of set bits.
    #[inline]
    pub fn count_ones(&self) -> usize {
        popcount_words(&self.words) as usize
    }

    /// Iterator over set indices in ascending order.
    pub fn ones(&self) -> Ones<'_> {
        Ones { vec: self, next: 0 }
    }

    /// In-place union: grow to the longer operand, then OR word-by-word.
    ///
    /// Bits of `self` beyond `other`'s length are untouched; bits of
    /// `other` beyond `self`'s old length are copied in by the OR over the
    /// freshly zeroed tail.
    pub fn union_assign(&mut self, other: &BitVec) {
        if other.len > self.len {
            self.resize(other.len);
        }
        for (word, &o) in self.words.iter_mut().zip(&other.words) {
            *word |= o;
        }
    }

    /// In-place intersection: shrink to the shorter operand, then AND
    /// word-by-word. Anything beyond the shorter operand is dropped.
    pub fn intersect_assign(&mut self, other: &BitVec) {
        if other.len < self.len {
            self.resize(other.len);
        }
        for (word, &o) in self.words.iter_mut().zip(&other.words) {
            *word &= o;
        }
    }

    /// In-place difference (`self` minus `other`): clear, within the
    /// overlapping word range, every bit also set in `other`. Bits of
    /// `self` beyond `other`'s length are untouched; the length does not
    /// change.
    pub fn difference_assign(&mut self, other: &BitVec) {
        for (word, &o) in self.words.iter_mut().zip(&other.words) {
            *word &= !o;
        }
    }

    /// In-place symmetric difference: grow to the longer operand, then XOR
    /// over `other`'s word range.
    pub fn symmetric_difference_assign(&mut self, other: &BitVec) {
        if other.len > self.len {
            self.resize(other.len);
        }
        for (word, &o) in self.words.iter_mut().zip(&other.words) {
            *word ^= o;
        }
    }

    /// Union into a new vector; result length is the longer operand's.
    pub fn union(&self, other: &BitVec) -> BitVec {
        let mut result = self.clone();
        result.union_assign(other);
        result
    }

    /// Intersection into a new vector; result length is the shorter
    /// operand's.
    pub fn intersection(&self, other: &BitVec) -> BitVec {
        let mut result = self.clone();
        result.intersect_assign(other);
        result
    }

    /// Difference (`self` minus `other`) into a new vector; result length
    /// is `self`'s.
    pub fn difference(&self, other: &BitVec) -> BitVec {
        let mut result = self.clone();
        result.difference_assign(other);
        result
    }

    /// Symmetric difference into a new vector; result length is the longer
    /// operand's.
    pub fn symmetric_difference(&self, other: &BitVec) -> BitVec {
        let mut result = self.clone();
        result.symmetric_difference_assign(other);
        result
    }

    /// Returns true iff every bit set in `self` is also set in `superset`.
    ///
    /// Bits of `self` beyond `superset`'s word range must all be zero.
    pub fn is_subset(&self, superset: &BitVec) -> bool {
        let common = self.words.len().min(superset.words.len());
        let mut test = 0u64;

        for n in 0..common {
            test |= self.words[n] & !superset.words[n];
        }
        for n in common..self.words.len() {
            test |= self.words[n];
        }

        test == 0
    }

    /// Returns true iff `self` and `other` share no set bit.
    ///
    /// Bits beyond the shorter operand cannot contribute, since its
    /// boundary word is masked.
    pub fn is_disjoint(&self, other: &BitVec) -> bool {
        let common = self.words.len().min(other.words.len());
        let mut test = 0u64;

        for n in 0..common {
            test |= self.words[n] & other.words[n];
        }

        test == 0
    }
}

/// Ascending iterator over the set indices of a [`BitVec`].
///
/// Built on [`BitVec::next_set_bit`]; restartable in the sense that a fresh
/// iterator always re-scans from position 0, and exhaustion is final.
#[derive(Clone, Debug)]
pub struct Ones<'a> {
    vec: &'a BitVec,
    next: usize,
}

impl Iterator for Ones<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let i = self.vec.next_set_bit(self.next)?;
        self.next = i + 1;
        Some(i)
    }
}

impl fmt::Display for BitVec {
    /// Renders the set of indices, e.g. `{0, 3, 10}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (n, i) in self.ones().enumerate() {
            if n > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", i)?;
        }
        write!(f, "}}")
    }
}

/// Deserialization accepts any `{words, len}` pair, so the input cannot be
/// trusted to honor the length invariant; the restored vector is normalized
/// (word count re-derived from `len`, boundary word masked) before use.
#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for BitVec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            words: Vec<u64>,
            len: usize,
        }

        let raw = Raw::deserialize(deserializer)?;
        let mut vec = BitVec {
            words: raw.words,
            len: raw.len,
        };
        vec.normalize();
        Ok(vec)
    }
}

impl FromIterator<usize> for BitVec {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut vec = BitVec::new();
        for i in iter {
            vec.set(i);
        }
        vec
    }
}

impl Extend<usize> for BitVec {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        for i in iter {
            self.set(i);
        }
    }
}
