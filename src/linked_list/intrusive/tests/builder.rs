extern crate std;

use std::vec;

use core::ptr::NonNull;

use crate::algorithms::traverse::collect_values;
use crate::linked_list::intrusive::{
    builder::ChainBuilder,
    single::SingleNode,
    traits::Link,
};

#[test]
fn test_builder_links_in_order() {
    let mut node1 = SingleNode::new(1);
    let mut node2 = SingleNode::new(2);
    let mut node3 = SingleNode::new(3);

    let mut builder = ChainBuilder::new();
    assert!(builder.is_empty());
    assert!(builder.next().is_none());

    unsafe {
        builder.push_back(NonNull::from(&mut node1));
        builder.push_back(NonNull::from(&mut node2));
        builder.push_back(NonNull::from(&mut node3));
    }
    assert_eq!(builder.len(), 3);

    let head = unsafe { builder.finish() };
    assert_eq!(unsafe { collect_values(head) }, vec![1, 2, 3]);
}

#[test]
fn test_builder_finish_terminates_tail() {
    let mut node1 = SingleNode::new(1);
    let mut node2 = SingleNode::new(2);
    // A stale link that must not survive the build.
    node2.set_next(Some(NonNull::from(&mut node1)));

    let mut builder = ChainBuilder::new();
    unsafe {
        builder.push_back(NonNull::from(&mut node1));
        builder.push_back(NonNull::from(&mut node2));
        let head = builder.finish();
        assert_eq!(collect_values(head), vec![1, 2]);
    }
    assert!(node2.next().is_none());
}

#[test]
fn test_empty_builder() {
    let builder = ChainBuilder::<SingleNode<i32>>::default();
    assert!(unsafe { builder.finish() }.is_none());
}
