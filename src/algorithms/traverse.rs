//! Walking and rendering chains.

use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ptr::NonNull;

use super::error::ChainError;
use crate::linked_list::intrusive::iter::ChainIter;
use crate::linked_list::intrusive::traits::NodeWithData;

/// Walk bound used when the caller has no better estimate of chain length.
pub const DEFAULT_WALK_LIMIT: usize = 1 << 20;

/// Returns the data of the node after `node`, if there is one.
///
/// # Safety
///
/// The successor of `node`, if any, must be live for `'a`.
pub unsafe fn next_value<'a, N: NodeWithData>(node: &'a N) -> Option<&'a N::Data> {
    node.next().map(|next| unsafe { next.as_ref() }.data())
}

/// One line of a chain rendering.
#[derive(Debug, PartialEq, Eq)]
pub enum ChainLine<'a, D> {
    /// A node's value together with its successor's value.
    Node { current: &'a D, next: Option<&'a D> },
    /// Emitted once after the last node.
    End,
}

impl<D: fmt::Display> fmt::Display for ChainLine<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainLine::Node { current, next: Some(next) } => {
                write!(f, "current node data:{current}, next node data:{next}")
            }
            ChainLine::Node { current, next: None } => {
                write!(f, "current node data:{current}, next node data:none")
            }
            ChainLine::End => f.write_str("-------------"),
        }
    }
}

/// Lazy rendering of a chain, one [`ChainLine`] per node followed by
/// [`ChainLine::End`]. Created by [`print_chain`].
pub struct ChainLines<'a, N: NodeWithData> {
    current: Option<NonNull<N>>,
    finished: bool,
    _marker: PhantomData<&'a N>,
}

impl<'a, N> Iterator for ChainLines<'a, N>
where
    N: NodeWithData + 'a,
{
    type Item = ChainLine<'a, N::Data>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.current {
            Some(node) => {
                let node: &'a N = unsafe { node.as_ref() };
                self.current = node.next();
                Some(ChainLine::Node {
                    current: node.data(),
                    next: unsafe { next_value(node) },
                })
            }
            None if !self.finished => {
                self.finished = true;
                Some(ChainLine::End)
            }
            None => None,
        }
    }
}

impl<'a, N: NodeWithData + 'a> FusedIterator for ChainLines<'a, N> {}

/// Renders the chain starting at `head` lazily.
///
/// Fails with [`ChainError::EmptyChain`] when there is no head. The returned
/// iterator never ends on a cyclic chain; use [`write_chain`] for a bounded
/// rendering.
///
/// # Safety
///
/// Every node reachable from `head` must stay live, and must not be
/// relinked, for `'a`.
pub unsafe fn print_chain<'a, N: NodeWithData>(
    head: Option<NonNull<N>>,
) -> Result<ChainLines<'a, N>, ChainError> {
    let head = head.ok_or(ChainError::EmptyChain)?;
    Ok(ChainLines {
        current: Some(head),
        finished: false,
        _marker: PhantomData,
    })
}

/// Writes the rendering of [`print_chain`] to `out`, one line per node plus
/// the closing separator, and returns the number of nodes written.
///
/// Stops with [`ChainError::LimitExceeded`] once more than `limit` nodes have
/// been seen; the lines already written stay in `out`.
///
/// # Safety
///
/// See the [module contract](crate::algorithms).
pub unsafe fn write_chain<N, W>(
    out: &mut W,
    head: Option<NonNull<N>>,
    limit: usize,
) -> Result<usize, ChainError>
where
    N: NodeWithData,
    N::Data: fmt::Display,
    W: fmt::Write,
{
    let lines = unsafe { print_chain(head) }?;
    let mut written = 0;
    for line in lines {
        if matches!(line, ChainLine::Node { .. }) {
            if written == limit {
                return Err(ChainError::LimitExceeded { limit });
            }
            written += 1;
        }
        writeln!(out, "{line}")?;
    }
    Ok(written)
}

/// Counts the nodes of a chain, giving up after `limit` nodes.
///
/// # Safety
///
/// See the [module contract](crate::algorithms).
pub unsafe fn chain_len<N: NodeWithData>(
    head: Option<NonNull<N>>,
    limit: usize,
) -> Result<usize, ChainError> {
    let nodes = unsafe { ChainIter::new(head) };
    let mut len = 0;
    for _ in nodes {
        if len == limit {
            return Err(ChainError::LimitExceeded { limit });
        }
        len += 1;
    }
    Ok(len)
}

/// Clones the values of a chain, head first.
///
/// # Safety
///
/// See the [module contract](crate::algorithms). The chain must be acyclic.
pub unsafe fn collect_values<N>(head: Option<NonNull<N>>) -> Vec<N::Data>
where
    N: NodeWithData,
    N::Data: Clone,
{
    let nodes = unsafe { ChainIter::new(head) };
    nodes
        .map(|node| unsafe { node.as_ref() }.data().clone())
        .collect()
}
