//! # Fastset
//!
//! Dynamically growable bit-vector sets for Rust.
//!
//! This crate represents sets of integer indices as packed 64-bit words and
//! provides word-parallel set algebra (union, intersection, difference,
//! symmetric difference), membership and ordering tests, cardinality
//! counting, ascending enumeration of set bits, and index relabeling.
//!
//! ## Quick Start
//!
//! ```
//! use fastset::{BitVec, Relation};
//!
//! let mut a = BitVec::new();
//! a.set(3);
//! a.set(10);
//!
//! let b: BitVec = [3, 7].into_iter().collect();
//!
//! let both = a.union(&b);
//! assert_eq!(both.ones().collect::<Vec<_>>(), vec![3, 7, 10]);
//! assert_eq!(a.relation(&both), Relation::Subset);
//! assert_eq!(a.intersection(&b).count_ones(), 1);
//! ```
//!
//! ## Ownership
//!
//! Every operation is synchronous and CPU-bound; the crate contains no
//! locking. Share a `BitVec` between owners with `Rc`/`Arc` and clone it
//! before mutating a shared instance — mutation requires `&mut`, so the
//! clone-before-mutate contract is enforced at compile time.
//!
//! ## Features
//!
//! - `std` (default) - Standard library support
//! - `serde` - Serialization support for [`BitVec`], [`Transform`] and
//!   [`Relation`]
//! - `portable-popcount` - Portable bitwise popcount algorithm instead of
//!   `count_ones()`

// Use no_std unless std feature is enabled or we're in test mode
#![cfg_attr(not(any(test, feature = "std")), no_std)]

// When using no_std, we need to explicitly link the alloc crate
#[cfg(not(any(test, feature = "std")))]
extern crate alloc;

// When using std, re-export alloc types from std for compatibility
#[cfg(any(test, feature = "std"))]
extern crate std as alloc;

mod bitvec;
mod domain;
mod popcount;
mod relation;
mod transform;

pub use bitvec::{BitVec, Ones, WORD_BITS};
pub use domain::Domain;
pub use popcount::{popcount_word, popcount_words};
pub use relation::Relation;
pub use transform::{Transform, TransformError};
