//! An ordered set of unique elements backed by an AVL tree.
//!
//! [`AvlSet`] keeps its elements sorted in a binary search tree whose
//! subtrees never differ in height by more than 1, rebalancing with rotations
//! on every insert and remove. Lookups, inserts and removals are `O(log n)`.
//!
//! ```
//! use avlset::{AvlSet, Underflow};
//!
//! let mut set = AvlSet::new();
//! set.insert_all([20, 10, 5]);
//!
//! // Duplicates are ignored.
//! assert!(!set.insert(10));
//!
//! assert_eq!(set.pre_order().copied().collect::<Vec<_>>(), [10, 5, 20]);
//! assert_eq!(set.find_min(), Ok(&5));
//!
//! assert!(set.remove(&10));
//! assert!(!set.remove(&10));
//!
//! set.clear();
//! assert_eq!(set.find_max(), Err(Underflow));
//! ```

#![deny(rustdoc::broken_intra_doc_links, rust_2018_idioms)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    clippy::todo,
    clippy::dbg_macro,
    unused_crate_dependencies
)]

// Only used by the benchmarks.
#[cfg(test)]
use criterion as _;
#[cfg(test)]
use paste as _;

mod error;
mod iter;
mod node;
mod tree;

#[cfg(test)]
mod test_utils;

pub use error::Underflow;
pub use iter::{IntoIter, Iter, LevelOrder, PostOrder, PreOrder};
pub use tree::AvlSet;
