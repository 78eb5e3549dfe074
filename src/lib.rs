//! Classic singly linked chain algorithms over intrusive nodes.
//!
//! [`linked_list::intrusive`] holds the node model, [`algorithms`] the
//! operations: middle finding, removal from the end, reversal, cycle
//! detection and sorted merge.
#![no_std]

extern crate alloc;

pub mod algorithms;
pub mod linked_list;

pub use chainkit_derive::Node;
