extern crate std;

use std::vec;

use core::ptr::NonNull;

use crate::algorithms::reverse::{reverse_accumulate, reverse_iterative, reverse_post_order};
use crate::algorithms::traverse::collect_values;
use crate::linked_list::intrusive::{
    single::SingleNode,
    traits::{Link, NodeWithData},
};

use super::{node_at, seeded, sorted_values, Node, Pool};

type Reverse = unsafe fn(Option<NonNull<Node>>) -> Option<NonNull<Node>>;

const REVERSALS: [Reverse; 3] = [
    reverse_accumulate::<Node>,
    reverse_post_order::<Node>,
    reverse_iterative::<Node>,
];

#[test]
fn test_reverse_four_nodes() {
    let mut pool = Pool::new();
    for reverse in REVERSALS {
        let head = pool.chain([1, 2, 3, 4]);
        unsafe {
            let tail = node_at(head, 3);
            let reversed = reverse(head);
            assert_eq!(reversed, Some(tail));
            assert_eq!(collect_values(reversed), vec![4, 3, 2, 1]);
            // The old head is now the terminal node.
            assert!(head.unwrap().as_ref().next().is_none());
        }
    }
}

#[test]
fn test_reverse_relinks_without_allocating() {
    let mut node1 = SingleNode::new(1);
    let mut node2 = SingleNode::new(2);
    let mut node3 = SingleNode::new(3);

    node2.set_next(Some(NonNull::from(&mut node3)));
    node1.set_next(Some(NonNull::from(&mut node2)));
    let head = Some(NonNull::from(&mut node1));

    unsafe {
        let reversed = reverse_post_order(head).unwrap();
        assert_eq!(*reversed.as_ref().data(), 3);
        let second = reversed.as_ref().next().unwrap();
        assert_eq!(*second.as_ref().data(), 2);
        let third = second.as_ref().next().unwrap();
        assert_eq!(third, head.unwrap());
        assert!(third.as_ref().next().is_none());
    }
}

#[test]
fn test_reverse_degenerate_chains() {
    let mut pool = Pool::new();
    for reverse in REVERSALS {
        unsafe {
            assert!(reverse(pool.chain([])).is_none());
            let single = pool.chain([9]);
            assert_eq!(reverse(single), single);
            assert!(single.unwrap().as_ref().next().is_none());
        }
    }
}

#[test]
fn test_double_reverse_restores_values() {
    let mut pool = Pool::new();
    let mut rng = seeded();
    for _ in 0..50 {
        let values = sorted_values(&mut rng, 30);
        let head = pool.chain(values.iter().copied());
        unsafe {
            let once = reverse_accumulate(head);
            let twice = reverse_post_order(once);
            assert_eq!(twice, head);
            assert_eq!(collect_values(twice), values);
        }
    }
}

#[test]
fn test_reverse_variants_agree() {
    let mut pool = Pool::new();
    let mut rng = seeded();
    for _ in 0..50 {
        let values = sorted_values(&mut rng, 30);
        let a = pool.chain(values.iter().copied());
        let b = pool.chain(values.iter().copied());
        let c = pool.chain(values.iter().copied());
        unsafe {
            let a = collect_values(reverse_accumulate(a));
            let b = collect_values(reverse_post_order(b));
            let c = collect_values(reverse_iterative(c));
            assert_eq!(a, b);
            assert_eq!(b, c);
            assert!(a.iter().eq(values.iter().rev()));
        }
    }
}

#[test]
fn test_reverse_iterative_long_chain() {
    let mut pool = Pool::with_capacity(200_000);
    let head = pool.chain(0..200_000);
    unsafe {
        let reversed = reverse_iterative(head);
        assert_eq!(*reversed.unwrap().as_ref().data(), 199_999);
        let values = collect_values(reversed);
        assert_eq!(values.len(), 200_000);
        assert_eq!(values.last(), Some(&0));
    }
}
