use core::ptr::NonNull;

use crate::linked_list::intrusive::traits::Node;

/// Removes the `n`-th node counted from the end and returns the new head.
///
/// `n == 1` removes the last node. When `n` is zero or not smaller than the
/// chain length, the head itself is removed and its successor returned. An
/// empty chain is returned as is.
///
/// A lead cursor first walks `n` nodes ahead; the trail cursor then follows
/// it until the lead reaches the last node, which leaves the trail right in
/// front of the node to remove. The removed node is not freed and keeps its
/// own link.
///
/// # Safety
///
/// See the [module contract](crate::algorithms). The chain must be acyclic.
pub unsafe fn remove_from_end<N: Node>(head: Option<NonNull<N>>, n: usize) -> Option<NonNull<N>> {
    let first = head?;

    let mut lead = first;
    let mut steps = 0;
    while steps < n || n == 0 {
        match unsafe { lead.as_ref().next() } {
            Some(next) => lead = next,
            // Fell off the end: the target is the head.
            None => return unsafe { first.as_ref().next() },
        }
        steps += 1;
    }

    let mut trail = first;
    while let (Some(next_lead), Some(next_trail)) =
        unsafe { (lead.as_ref().next(), trail.as_ref().next()) }
    {
        lead = next_lead;
        trail = next_trail;
    }

    unsafe { trail.as_mut().unlink_next() };
    Some(first)
}
