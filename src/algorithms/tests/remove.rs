extern crate std;

use std::vec;

use crate::algorithms::remove::remove_from_end;
use crate::algorithms::traverse::collect_values;

use super::{node_at, Pool};

#[test]
fn test_remove_last_node() {
    let mut pool = Pool::new();
    let head = pool.chain([1, 2, 3, 4, 5]);
    unsafe {
        let head = remove_from_end(head, 1);
        assert_eq!(collect_values(head), vec![1, 2, 3, 4]);
    }
}

#[test]
fn test_remove_inner_node_keeps_head() {
    let mut pool = Pool::new();
    let head = pool.chain([1, 2, 3, 4, 5]);
    unsafe {
        let new_head = remove_from_end(head, 2);
        assert_eq!(new_head, head);
        assert_eq!(collect_values(new_head), vec![1, 2, 3, 5]);
    }
}

#[test]
fn test_remove_at_length_strips_head() {
    let mut pool = Pool::new();
    let head = pool.chain([1, 2, 3, 4, 5]);
    unsafe {
        let second = node_at(head, 1);
        let new_head = remove_from_end(head, 5);
        assert_eq!(new_head, Some(second));
        assert_eq!(collect_values(new_head), vec![2, 3, 4, 5]);
    }
}

#[test]
fn test_remove_out_of_range_strips_head() {
    let mut pool = Pool::new();
    let head = pool.chain([1, 2, 3, 4, 5]);
    unsafe {
        let head = remove_from_end(head, 6);
        assert_eq!(collect_values(head), vec![2, 3, 4, 5]);
        let head = remove_from_end(head, 4 + 5);
        assert_eq!(collect_values(head), vec![3, 4, 5]);
    }
}

#[test]
fn test_remove_zero_strips_head() {
    let mut pool = Pool::new();
    let head = pool.chain([1, 2, 3]);
    unsafe {
        assert_eq!(collect_values(remove_from_end(head, 0)), vec![2, 3]);
    }
}

#[test]
fn test_remove_degenerate_chains() {
    let mut pool = Pool::new();
    unsafe {
        assert!(remove_from_end(pool.chain([]), 1).is_none());
        assert!(remove_from_end(pool.chain([]), 0).is_none());
        assert!(remove_from_end(pool.chain([7]), 1).is_none());
        assert!(remove_from_end(pool.chain([7]), 3).is_none());
    }
}

#[test]
fn test_remove_every_position() {
    let mut pool = Pool::new();
    let len = 8;
    for n in 1..=len {
        let head = pool.chain(1..=len as i32);
        let values = unsafe { collect_values(remove_from_end(head, n)) };
        let mut expected: alloc::vec::Vec<i32> = (1..=len as i32).collect();
        expected.remove(len - n);
        assert_eq!(values, expected);
    }
}
