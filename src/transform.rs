//! Index relabeling for carrying a set of bits into a different index
//! space.
//!
//! A [`Transform`] is a mutable table mapping each source index below a
//! fixed domain size to an optional destination index. Applying it to a
//! [`BitVec`] produces a new vector over the destination space; source bits
//! with no mapping entry, or at or beyond the domain size, are silently
//! dropped. That filtering is deliberate behavior, not an error.

#[cfg(not(test))]
use alloc::vec;
#[cfg(not(test))]
use alloc::vec::Vec;

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bitvec::BitVec;

/// Errors from building a [`Transform`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransformError {
    /// A mapping entry was registered for a source index at or beyond the
    /// transform's domain size.
    SourceOutOfDomain {
        /// The offending source index.
        index: usize,
        /// The transform's fixed domain size.
        domain_size: usize,
    },
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::SourceOutOfDomain { index, domain_size } => {
                write!(
                    f,
                    "source index {} out of domain (size {})",
                    index, domain_size
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TransformError {}

/// A mutable index-relabeling table.
///
/// Not a frozen snapshot: entries can be added or overwritten at any time,
/// so two [`apply`](Transform::apply) calls around an intervening
/// [`add`](Transform::add) may legitimately produce different results for
/// the same input vector.
///
/// # Example
///
/// ```
/// use fastset::{BitVec, Transform};
///
/// let mut t = Transform::new(5);
/// t.add(0, Some(2)).unwrap();
/// t.add(2, Some(4)).unwrap();
/// t.add(1, None).unwrap(); // explicitly dropped
///
/// let v: BitVec = [0, 1, 3].into_iter().collect();
/// let mapped = t.apply(&v);
/// assert_eq!(mapped.ones().collect::<Vec<_>>(), vec![2]);
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Transform {
    /// One entry per source index; `None` means "unmapped".
    mapping: Vec<Option<usize>>,
}

impl Transform {
    /// Create a transform over `domain_size` source indices, all unmapped.
    pub fn new(domain_size: usize) -> Self {
        Self {
            mapping: vec![None; domain_size],
        }
    }

    /// Number of source indices this transform covers.
    #[inline]
    pub fn domain_size(&self) -> usize {
        self.mapping.len()
    }

    /// Register (or overwrite) the mapping for source index `src`.
    ///
    /// `None` means bits at `src` are dropped on apply. Fails if `src` is
    /// at or beyond the domain size.
    pub fn add(&mut self, src: usize, dst: Option<usize>) -> Result<(), TransformError> {
        if src >= self.mapping.len() {
            return Err(TransformError::SourceOutOfDomain {
                index: src,
                domain_size: self.mapping.len(),
            });
        }

        self.mapping[src] = dst;
        Ok(())
    }

    /// Look up the destination for source index `src`, if any.
    #[inline]
    pub fn get(&self, src: usize) -> Option<usize> {
        self.mapping.get(src).copied().flatten()
    }

    /// Relabel `vec`'s set bits into the destination space.
    ///
    /// Walks the set bits below `min(vec.len(), domain_size)` in ascending
    /// order and sets the mapped destination bit for each entry that is
    /// present. Unmapped bits and bits at or beyond the domain size are
    /// silently filtered.
    ///
    /// The result reflects the table's state at call time.
    pub fn apply(&self, vec: &BitVec) -> BitVec {
        let bound = vec.len().min(self.mapping.len());
        let mut result = BitVec::with_len(bound);

        let mut from = 0;
        while let Some(src) = vec.next_set_bit(from) {
            if src >= bound {
                break;
            }
            from = src + 1;

            if let Some(dst) = self.mapping[src] {
                result.set(dst);
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_bits(bits: &[usize]) -> BitVec {
        bits.iter().copied().collect()
    }

    #[test]
    fn test_new_all_unmapped() {
        let t = Transform::new(4);
        assert_eq!(t.domain_size(), 4);
        for src in 0..4 {
            assert_eq!(t.get(src), None);
        }
    }

    #[test]
    fn test_add_out_of_domain() {
        let mut t = Transform::new(3);
        assert_eq!(
            t.add(3, Some(0)),
            Err(TransformError::SourceOutOfDomain {
                index: 3,
                domain_size: 3,
            })
        );
        assert!(t.add(2, Some(0)).is_ok());
    }

    #[test]
    fn test_apply_filters_unmapped_and_out_of_domain() {
        // domain_size = 5, mapping {0 -> 2, 2 -> 4}, 1 explicitly dropped,
        // 3 and 4 never registered.
        let mut t = Transform::new(5);
        t.add(0, Some(2)).unwrap();
        t.add(2, Some(4)).unwrap();
        t.add(1, None).unwrap();

        let v = from_bits(&[0, 1, 3]);
        let mapped = t.apply(&v);
        assert_eq!(mapped.ones().collect::<Vec<_>>(), vec![2]);

        // A bit beyond the domain size is filtered, not an error.
        let w = from_bits(&[2, 10]);
        assert_eq!(t.apply(&w).ones().collect::<Vec<_>>(), vec![4]);
    }

    #[test]
    fn test_apply_empty_input() {
        let t = Transform::new(8);
        assert!(t.apply(&BitVec::new()).none());
        assert!(t.apply(&from_bits(&[1, 2, 3])).none());
    }

    #[test]
    fn test_apply_reflects_mutations() {
        let mut t = Transform::new(4);
        let v = from_bits(&[1]);

        assert!(t.apply(&v).none());

        t.add(1, Some(7)).unwrap();
        assert_eq!(t.apply(&v).ones().collect::<Vec<_>>(), vec![7]);

        t.add(1, None).unwrap();
        assert!(t.apply(&v).none());
    }

    #[test]
    fn test_apply_may_merge_sources() {
        let mut t = Transform::new(4);
        t.add(0, Some(1)).unwrap();
        t.add(3, Some(1)).unwrap();

        let v = from_bits(&[0, 3]);
        let mapped = t.apply(&v);
        assert_eq!(mapped.count_ones(), 1);
        assert!(mapped.test(1));
    }
}
