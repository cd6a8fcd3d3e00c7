//! Stable index allocation for externally-owned entities.
//!
//! A [`Domain`] hands out small integer indices that stay valid for a
//! member's lifetime and become eligible for reuse once the member is
//! unregistered. Bitvectors built against a domain keep working after
//! members are removed: removal clears the domain's slot but never touches
//! bits already set in existing vectors, so a reverse lookup on a stale
//! snapshot can legitimately come back empty. Iteration helpers here skip
//! such indices rather than treating them as errors.
//!
//! The domain performs no cross-domain policing: indices are plain
//! `usize`, and combining vectors from different domains is the caller's
//! responsibility to avoid (the engine itself is domain-agnostic).

#[cfg(not(test))]
use alloc::vec::Vec;

use crate::bitvec::BitVec;

/// An index allocator binding integer indices to owned members.
///
/// Indices are reused lowest-first after removal, so long-lived domains
/// stay compact.
///
/// # Example
///
/// ```
/// use fastset::{BitVec, Domain};
///
/// let mut colors = Domain::new();
/// let red = colors.register("red");
/// let green = colors.register("green");
/// let blue = colors.register("blue");
///
/// let mut warm = BitVec::new();
/// warm.set(red);
///
/// colors.unregister(green);
/// assert_eq!(colors.get(red), Some(&"red"));
/// assert_eq!(colors.get(green), None);
/// assert_eq!(colors.register("yellow"), green); // slot reused
/// # let _ = blue;
/// ```
#[derive(Clone, Debug)]
pub struct Domain<T> {
    /// One slot per index ever allocated; `None` marks a free slot.
    slots: Vec<Option<T>>,
    /// Number of occupied slots.
    count: usize,
}

impl<T> Default for Domain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Domain<T> {
    /// Create an empty domain.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            count: 0,
        }
    }

    /// Number of live members.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if the domain has no live members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of index slots ever allocated (the index space size).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Register a member, returning its index.
    ///
    /// The lowest free slot is reused when one exists; otherwise a new
    /// index is appended. The index stays stable until
    /// [`unregister`](Domain::unregister).
    pub fn register(&mut self, member: T) -> usize {
        let slot = if self.count < self.slots.len() {
            self.slots
                .iter()
                .position(Option::is_none)
                .unwrap_or(self.slots.len())
        } else {
            self.slots.len()
        };

        if slot == self.slots.len() {
            self.slots.push(Some(member));
        } else {
            self.slots[slot] = Some(member);
        }

        self.count += 1;
        slot
    }

    /// Remove the member at `index`, freeing the slot for reuse.
    ///
    /// Returns the member, or `None` if the slot was already free or out
    /// of range. Bits for `index` in existing vectors are untouched.
    pub fn unregister(&mut self, index: usize) -> Option<T> {
        let member = self.slots.get_mut(index)?.take()?;
        self.count -= 1;
        Some(member)
    }

    /// Reverse lookup from index to member.
    ///
    /// `None` for free and out-of-range slots; callers walking a stale
    /// vector snapshot should skip and continue.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index)?.as_ref()
    }

    /// Ascending iterator over the live members named by `vec`'s set bits.
    ///
    /// Indices whose member has since been unregistered are skipped.
    pub fn members<'a>(&'a self, vec: &'a BitVec) -> impl Iterator<Item = (usize, &'a T)> + 'a {
        vec.ones().filter_map(|i| self.get(i).map(|m| (i, m)))
    }

    /// Ascending iterator over all live `(index, member)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|m| (i, m)))
    }

    /// Snapshot of the live member indices as a [`BitVec`].
    ///
    /// The snapshot is not tracked: later register/unregister calls leave
    /// it unchanged.
    pub fn indices(&self) -> BitVec {
        let mut vec = BitVec::with_len(self.slots.len());
        for (i, _) in self.iter() {
            vec.set(i);
        }
        vec
    }
}
