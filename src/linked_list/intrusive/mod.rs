//! # Intrusive Singly Linked Chains
//!
//! This module provides the node structure the chain algorithms operate on.
//!
//! ## Core Components
//!
//! - [`traits`]: Defines the core traits, `Link`, `Node` and `NodeWithData`.
//! - [`single::SingleNode`] and [`single::SingleLink`]: The node and link types of a singly linked chain.
//! - [`builder::ChainBuilder`]: A sentinel head for building a chain front to back.
//! - [`pool::NodePool`]: An owner for heap-allocated nodes.
//! - [`iter::ChainIter`]: An iterator over the nodes of a chain.
//!
//! ## Safety
//!
//! Links are raw pointers. The user of this module is responsible for upholding several invariants:
//!
//! - Nodes must outlive every chain they are part of.
//! - A node must not be moved while another node points at it.
//! - When iterating, the chain must not be relinked.

pub mod traits;
pub mod single;
pub mod builder;
pub mod pool;
pub mod iter;

#[cfg(test)]
mod tests;
