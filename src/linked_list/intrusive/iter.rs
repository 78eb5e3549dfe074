use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ptr::NonNull;

use super::traits::Node;

/// An iterator over the nodes of a chain, starting at its head.
///
/// The iterator never terminates on a cyclic chain.
pub struct ChainIter<'a, N: Node> {
    current: Option<NonNull<N>>,
    _marker: PhantomData<&'a N>,
}

impl<'a, N> ChainIter<'a, N>
where
    N: Node,
{
    /// Creates a new iterator over the chain starting at `head`.
    ///
    /// # Safety
    ///
    /// Every node reachable from `head` must stay live, and must not be
    /// relinked, while the iterator is alive.
    pub unsafe fn new(head: Option<NonNull<N>>) -> Self {
        Self {
            current: head,
            _marker: PhantomData,
        }
    }
}

impl<'a, N> Iterator for ChainIter<'a, N>
where
    N: Node,
{
    type Item = NonNull<N>;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.inspect(|current| {
            self.current = unsafe { current.as_ref().next() };
        })
    }
}

impl<N: Node> FusedIterator for ChainIter<'_, N> {}
