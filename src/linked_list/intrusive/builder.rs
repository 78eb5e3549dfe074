use core::ptr::NonNull;

use super::traits::{Link, Node};

/// Builds a chain front to back.
///
/// The builder is the chain's sentinel head: a stack value whose `next` is
/// the first node. It holds no data and is discarded by [`finish`].
///
/// [`finish`]: ChainBuilder::finish
#[derive(Debug)]
pub struct ChainBuilder<N: Node> {
    head: Option<NonNull<N>>,
    tail: Option<NonNull<N>>,
    len: usize,
}

impl<N> ChainBuilder<N>
where
    N: Node,
{
    /// Creates a new, empty builder.
    pub const fn new() -> Self {
        ChainBuilder {
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Links `node` after the current tail.
    ///
    /// The node's own `next` is not touched until [`finish`] or the next push.
    ///
    /// # Safety
    ///
    /// Every node pushed so far must still be live, and `node` must not
    /// already be part of this builder's chain.
    ///
    /// [`finish`]: ChainBuilder::finish
    pub unsafe fn push_back(&mut self, node: NonNull<N>) {
        match self.tail {
            Some(mut tail) => unsafe { tail.as_mut().set_next(Some(node)) },
            None => self.set_next(Some(node)),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Terminates the tail and returns the head of the built chain.
    ///
    /// # Safety
    ///
    /// The tail node must still be live.
    pub unsafe fn finish(self) -> Option<NonNull<N>> {
        if let Some(mut tail) = self.tail {
            unsafe { tail.as_mut().set_next(None) };
        }
        self.head
    }

    /// Number of nodes pushed so far.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<N> Link for ChainBuilder<N>
where
    N: Node,
{
    type Target = N;

    fn next(&self) -> Option<NonNull<N>> {
        self.head
    }

    fn set_next(&mut self, next: Option<NonNull<N>>) {
        self.head = next;
    }
}

impl<N> Default for ChainBuilder<N>
where
    N: Node,
{
    fn default() -> Self {
        Self::new()
    }
}
