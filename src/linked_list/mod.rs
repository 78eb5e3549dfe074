//! Singly linked chains with caller-owned nodes.
//!
//! A chain is referenced by its head node only. Nodes carry an intrusive
//! link, so chains can be rewired in place and node identity is the node's
//! address.
//!
//! # Examples
//!
//! ```
//! use chainkit::linked_list::intrusive::{
//!     iter::ChainIter,
//!     single::SingleNode,
//!     traits::{Link, NodeWithData},
//! };
//! use core::ptr::NonNull;
//!
//! let mut node1 = SingleNode::new(1);
//! let mut node2 = SingleNode::new(2);
//! let mut node3 = SingleNode::new(3);
//!
//! node2.set_next(Some(NonNull::from(&mut node3)));
//! node1.set_next(Some(NonNull::from(&mut node2)));
//!
//! unsafe {
//!     let values: Vec<i32> = ChainIter::new(Some(NonNull::from(&mut node1)))
//!         .map(|node| *node.as_ref().data())
//!         .collect();
//!     assert_eq!(values, vec![1, 2, 3]);
//! }
//! ```
pub mod intrusive;
