//! Algorithms over singly linked chains.
//!
//! Every operation takes the head of a chain, `Option<NonNull<N>>`, and
//! relinks nodes in place unless noted otherwise. An absent head is the
//! empty chain.
//!
//! ## Safety
//!
//! The operations are `unsafe fn`s sharing one contract: every node
//! reachable from the given head(s) must be live for the duration of the
//! call and must not be borrowed elsewhere. Operations documented as
//! assuming an acyclic chain do not terminate on a cyclic one; use the
//! bounded forms in [`traverse`] or the detectors in [`cycle`] when the
//! shape of a chain is not known.
//!
//! # Examples
//!
//! ```
//! use chainkit::algorithms::{merge, reverse, traverse};
//! use chainkit::linked_list::intrusive::{pool::NodePool, single::SingleNode};
//!
//! let mut pool = NodePool::<SingleNode<i32>>::new();
//! let a = pool.chain([1, 2, 9]);
//! let b = pool.chain([3, 4, 7, 8]);
//!
//! unsafe {
//!     let merged = merge::merge_recursive(a, b);
//!     assert_eq!(traverse::collect_values(merged), vec![1, 2, 3, 4, 7, 8, 9]);
//!
//!     let reversed = reverse::reverse_iterative(merged);
//!     assert_eq!(traverse::collect_values(reversed), vec![9, 8, 7, 4, 3, 2, 1]);
//! }
//! ```

pub mod cycle;
pub mod error;
pub mod merge;
pub mod middle;
pub mod remove;
pub mod reverse;
pub mod traverse;

pub use error::ChainError;

#[cfg(test)]
mod tests;
