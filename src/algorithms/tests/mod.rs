use core::ptr::NonNull;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::linked_list::intrusive::{
    iter::ChainIter,
    pool::NodePool,
    single::SingleNode,
    traits::Link,
};

mod remove;
mod reverse;

type Node = SingleNode<i32>;
type Pool = NodePool<Node>;

/// Returns the node at `index`, 0 being the head.
unsafe fn node_at(head: Option<NonNull<Node>>, index: usize) -> NonNull<Node> {
    let mut nodes = unsafe { ChainIter::new(head) };
    nodes.nth(index).expect("chain shorter than index")
}

/// Points the last node of an acyclic chain back at the node at `index`.
unsafe fn close_cycle(head: Option<NonNull<Node>>, index: usize) {
    unsafe {
        let target = node_at(head, index);
        let mut tail = ChainIter::new(head).last().expect("empty chain");
        tail.as_mut().set_next(Some(target));
    }
}

/// A non-decreasing run of random length drawn from `rng`.
fn sorted_values(rng: &mut StdRng, max_len: usize) -> alloc::vec::Vec<i32> {
    let len = rng.random_range(0..=max_len);
    let mut values: alloc::vec::Vec<i32> = (0..len).map(|_| rng.random_range(-20..20)).collect();
    values.sort();
    values
}

fn seeded() -> StdRng {
    StdRng::seed_from_u64(0x5eed)
}
