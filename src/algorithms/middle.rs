use core::ptr::NonNull;

use crate::linked_list::intrusive::traits::Node;

/// Returns the middle node of a chain.
///
/// For a chain of `n` nodes this is the node at position `ceil(n / 2)`
/// (1-indexed), so an even-length chain yields the earlier of its two
/// middles: `[1, 2, 3, 4]` gives the node holding `2`. A chain of zero or
/// one node is returned unchanged.
///
/// The slow cursor moves one node per step and the fast cursor, which
/// starts one node ahead, moves two.
///
/// # Safety
///
/// See the [module contract](crate::algorithms). The chain must be acyclic.
pub unsafe fn find_middle<N: Node>(head: Option<NonNull<N>>) -> Option<NonNull<N>> {
    let mut slow = head?;
    let mut fast = unsafe { slow.as_ref().next() };

    while let Some(ahead) = fast {
        let Some(after) = (unsafe { ahead.as_ref().next() }) else {
            break;
        };
        let Some(next) = (unsafe { slow.as_ref().next() }) else {
            break;
        };
        slow = next;
        fast = unsafe { after.as_ref().next() };
    }

    Some(slow)
}
