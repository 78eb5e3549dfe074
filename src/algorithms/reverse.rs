//! In-place chain reversal.
//!
//! All three variants relink the existing nodes and allocate nothing. The
//! two recursive variants use one stack frame per node; prefer
//! [`reverse_iterative`] when chains may be long.

use core::ptr::NonNull;

use crate::linked_list::intrusive::traits::Node;

/// Reverses a chain by recursing toward the tail with the previous node as
/// an accumulator. Returns the new head, the former tail.
///
/// # Safety
///
/// See the [module contract](crate::algorithms). The chain must be acyclic.
pub unsafe fn reverse_accumulate<N: Node>(head: Option<NonNull<N>>) -> Option<NonNull<N>> {
    head.map(|node| unsafe { reverse_onto(node, None) })
}

unsafe fn reverse_onto<N: Node>(mut node: NonNull<N>, pre: Option<NonNull<N>>) -> NonNull<N> {
    let new_head = match unsafe { node.as_ref().next() } {
        Some(next) => unsafe { reverse_onto(next, Some(node)) },
        None => node,
    };
    unsafe { node.as_mut().set_next(pre) };
    new_head
}

/// Reverses a chain by recursing to the tail first and turning each link
/// around while unwinding. Returns the new head, the former tail.
///
/// Produces the same chain as [`reverse_accumulate`].
///
/// # Safety
///
/// See the [module contract](crate::algorithms). The chain must be acyclic.
pub unsafe fn reverse_post_order<N: Node>(head: Option<NonNull<N>>) -> Option<NonNull<N>> {
    head.map(|node| unsafe { reverse_tail_first(node) })
}

unsafe fn reverse_tail_first<N: Node>(mut node: NonNull<N>) -> NonNull<N> {
    let Some(mut next) = (unsafe { node.as_ref().next() }) else {
        return node;
    };
    let new_head = unsafe { reverse_tail_first(next) };
    unsafe {
        next.as_mut().set_next(Some(node));
        node.as_mut().set_next(None);
    }
    new_head
}

/// Reverses a chain with two cursors and constant stack depth.
///
/// # Safety
///
/// See the [module contract](crate::algorithms). The chain must be acyclic.
pub unsafe fn reverse_iterative<N: Node>(head: Option<NonNull<N>>) -> Option<NonNull<N>> {
    let mut prev = None;
    let mut current = head;
    while let Some(mut node) = current {
        unsafe {
            current = node.as_ref().next();
            node.as_mut().set_next(prev);
        }
        prev = Some(node);
    }
    prev
}
