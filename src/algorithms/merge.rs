//! Merging two sorted chains.
//!
//! Both inputs must be non-decreasing under the comparator in use. The
//! result holds every node (or every value) of both inputs, non-decreasing,
//! and stable: on equal values the first chain's element comes first.
//!
//! The plain forms order payloads with [`Ord`]. For `Option<T>` payloads
//! that puts absent values before present ones; pass [`absent_last`] to a
//! `_by` form to put them after instead.

use core::cmp::Ordering;
use core::ptr::NonNull;

use crate::linked_list::intrusive::builder::ChainBuilder;
use crate::linked_list::intrusive::pool::NodePool;
use crate::linked_list::intrusive::traits::{Link, NodeWithData};

/// Compares two chain positions by payload.
///
/// An absent node sorts after any present node, so an exhausted chain is
/// never picked while the other still has nodes. Two absent nodes compare
/// as `Greater`.
pub fn compare_nodes<N, F>(a: Option<&N>, b: Option<&N>, cmp: &mut F) -> Ordering
where
    N: NodeWithData,
    F: FnMut(&N::Data, &N::Data) -> Ordering,
{
    match (a, b) {
        (None, _) => Ordering::Greater,
        (_, None) => Ordering::Less,
        (Some(a), Some(b)) => cmp(a.data(), b.data()),
    }
}

/// Orders optional payloads with absent values after present ones.
pub fn absent_last<T: Ord>(a: &Option<T>, b: &Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Takes the smaller head of `a` and `b`, advancing the chain it came from.
/// Ties go to `a`.
unsafe fn take_smaller<N, F>(
    a: &mut Option<NonNull<N>>,
    b: &mut Option<NonNull<N>>,
    cmp: &mut F,
) -> Option<NonNull<N>>
where
    N: NodeWithData,
    F: FnMut(&N::Data, &N::Data) -> Ordering,
{
    let order = unsafe {
        compare_nodes(
            a.as_ref().map(|n| n.as_ref()),
            b.as_ref().map(|n| n.as_ref()),
            cmp,
        )
    };
    let source = match order {
        Ordering::Greater => b,
        Ordering::Less | Ordering::Equal => a,
    };
    let taken = (*source)?;
    *source = unsafe { taken.as_ref().next() };
    Some(taken)
}

/// Merges two sorted chains into a chain of new nodes allocated in `pool`.
///
/// Values are cloned; the input chains are left untouched.
///
/// # Safety
///
/// See the [module contract](crate::algorithms).
pub unsafe fn merge_copied<N>(
    a: Option<NonNull<N>>,
    b: Option<NonNull<N>>,
    pool: &mut NodePool<N>,
) -> Option<NonNull<N>>
where
    N: NodeWithData,
    N::Data: Ord + Clone,
{
    unsafe { merge_copied_by(a, b, pool, Ord::cmp) }
}

/// Like [`merge_copied`], ordering payloads with `cmp`.
///
/// # Safety
///
/// See the [module contract](crate::algorithms).
pub unsafe fn merge_copied_by<N, F>(
    mut a: Option<NonNull<N>>,
    mut b: Option<NonNull<N>>,
    pool: &mut NodePool<N>,
    mut cmp: F,
) -> Option<NonNull<N>>
where
    N: NodeWithData,
    N::Data: Clone,
    F: FnMut(&N::Data, &N::Data) -> Ordering,
{
    let mut merged = ChainBuilder::new();
    while let Some(node) = unsafe { take_smaller(&mut a, &mut b, &mut cmp) } {
        let copy = pool.node(unsafe { node.as_ref() }.data().clone());
        unsafe { merged.push_back(copy) };
    }
    unsafe { merged.finish() }
}

/// Merges two sorted chains by relinking their nodes, recursively.
///
/// Allocates nothing; the result is made of the input nodes themselves.
/// Uses one stack frame per node.
///
/// # Safety
///
/// See the [module contract](crate::algorithms). Both chains must be
/// acyclic and must not share nodes.
pub unsafe fn merge_recursive<N>(a: Option<NonNull<N>>, b: Option<NonNull<N>>) -> Option<NonNull<N>>
where
    N: NodeWithData,
    N::Data: Ord,
{
    unsafe { merge_recursive_by(a, b, Ord::cmp) }
}

/// Like [`merge_recursive`], ordering payloads with `cmp`.
///
/// # Safety
///
/// See [`merge_recursive`].
pub unsafe fn merge_recursive_by<N, F>(
    a: Option<NonNull<N>>,
    b: Option<NonNull<N>>,
    mut cmp: F,
) -> Option<NonNull<N>>
where
    N: NodeWithData,
    F: FnMut(&N::Data, &N::Data) -> Ordering,
{
    unsafe { merge_rest(a, b, &mut cmp) }
}

unsafe fn merge_rest<N, F>(
    mut a: Option<NonNull<N>>,
    mut b: Option<NonNull<N>>,
    cmp: &mut F,
) -> Option<NonNull<N>>
where
    N: NodeWithData,
    F: FnMut(&N::Data, &N::Data) -> Ordering,
{
    if a.is_none() {
        return b;
    }
    if b.is_none() {
        return a;
    }

    let mut picked = unsafe { take_smaller(&mut a, &mut b, cmp) }?;
    let rest = unsafe { merge_rest(a, b, cmp) };
    unsafe { picked.as_mut().set_next(rest) };
    Some(picked)
}

/// Merges two sorted chains by relinking their nodes, with constant stack
/// depth.
///
/// Produces the same chain, node for node, as [`merge_recursive`].
///
/// # Safety
///
/// See [`merge_recursive`].
pub unsafe fn merge_in_place<N>(a: Option<NonNull<N>>, b: Option<NonNull<N>>) -> Option<NonNull<N>>
where
    N: NodeWithData,
    N::Data: Ord,
{
    unsafe { merge_in_place_by(a, b, Ord::cmp) }
}

/// Like [`merge_in_place`], ordering payloads with `cmp`.
///
/// # Safety
///
/// See [`merge_recursive`].
pub unsafe fn merge_in_place_by<N, F>(
    mut a: Option<NonNull<N>>,
    mut b: Option<NonNull<N>>,
    mut cmp: F,
) -> Option<NonNull<N>>
where
    N: NodeWithData,
    F: FnMut(&N::Data, &N::Data) -> Ordering,
{
    let mut merged = ChainBuilder::new();
    while a.is_some() && b.is_some() {
        if let Some(node) = unsafe { take_smaller(&mut a, &mut b, &mut cmp) } {
            unsafe { merged.push_back(node) };
        }
    }

    // The leftover run is already linked; attach it whole.
    match a.or(b) {
        Some(rest) => {
            unsafe { merged.push_back(rest) };
            merged.next()
        }
        None => unsafe { merged.finish() },
    }
}
