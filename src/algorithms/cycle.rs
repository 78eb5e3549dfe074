//! Cycle detection.
//!
//! Every detector terminates on any chain, cyclic or not.

use core::ptr::NonNull;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

use crate::linked_list::intrusive::traits::Node;

/// Reports whether following `next` from `head` ever revisits a node.
///
/// Floyd's two-pointer check: the slow cursor moves one node per step, the
/// fast cursor two. They can only meet inside a cycle. O(n) time, O(1)
/// space.
///
/// # Safety
///
/// See the [module contract](crate::algorithms).
pub unsafe fn has_cycle<N: Node>(head: Option<NonNull<N>>) -> bool {
    let Some(mut slow) = head else {
        return false;
    };
    let mut fast = unsafe { slow.as_ref().next() };

    while let Some(ahead) = fast {
        let Some(after) = (unsafe { ahead.as_ref().next() }) else {
            return false;
        };
        let Some(next) = (unsafe { slow.as_ref().next() }) else {
            return false;
        };
        slow = next;
        fast = unsafe { after.as_ref().next() };
        if fast == Some(slow) {
            return true;
        }
    }

    false
}

/// Returns the node at which the cycle begins, or `None` for an acyclic
/// chain.
///
/// Once the cursors meet, a third cursor leaves the head; it meets the slow
/// cursor at the first node of the cycle.
///
/// # Safety
///
/// See the [module contract](crate::algorithms).
pub unsafe fn find_cycle_start<N: Node>(head: Option<NonNull<N>>) -> Option<NonNull<N>> {
    let first = head?;
    let mut slow = first;
    let mut fast = first;

    loop {
        let ahead = unsafe { fast.as_ref().next() }?;
        fast = unsafe { ahead.as_ref().next() }?;
        slow = unsafe { slow.as_ref().next() }?;
        if slow == fast {
            break;
        }
    }

    let mut from_head = first;
    while from_head != slow {
        from_head = unsafe { from_head.as_ref().next() }?;
        slow = unsafe { slow.as_ref().next() }?;
    }
    Some(from_head)
}

/// The first node a walk reached twice.
#[derive(Debug)]
pub struct Revisit<N> {
    /// The revisited node, which is where the cycle begins.
    pub node: NonNull<N>,
    /// Position of the node on its first visit, 0 being the head.
    pub first_seen: usize,
    /// Position at which the node was reached again.
    pub seen_again: usize,
}

impl<N> Revisit<N> {
    /// Number of nodes on the cycle.
    pub fn cycle_len(&self) -> usize {
        self.seen_again - self.first_seen
    }
}

/// Reports whether following `next` from `head` ever revisits a node, by
/// recording every visited node.
///
/// Agrees with [`has_cycle`] on every chain. O(n) time and space.
///
/// # Safety
///
/// See the [module contract](crate::algorithms).
pub unsafe fn has_cycle_visited<N: Node>(head: Option<NonNull<N>>) -> bool {
    let revisit = unsafe { find_revisit(head) };
    revisit.is_some()
}

/// Walks the chain recording the position of each node and stops at the
/// first node seen twice.
///
/// The visited map lives for one call only, so independent calls never see
/// each other's nodes.
///
/// # Safety
///
/// See the [module contract](crate::algorithms).
pub unsafe fn find_revisit<N: Node>(head: Option<NonNull<N>>) -> Option<Revisit<N>> {
    let mut visited: HashMap<NonNull<N>, usize> = HashMap::new();
    let mut current = head;
    let mut index = 0;

    while let Some(node) = current {
        match visited.entry(node) {
            Entry::Occupied(entry) => {
                return Some(Revisit {
                    node,
                    first_seen: *entry.get(),
                    seen_again: index,
                });
            }
            Entry::Vacant(entry) => {
                entry.insert(index);
            }
        }
        current = unsafe { node.as_ref().next() };
        index += 1;
    }

    None
}
