use alloc::boxed::Box;
use alloc::vec::Vec;
use core::ptr::NonNull;

use super::builder::ChainBuilder;
use super::traits::NodeWithData;

/// Owns heap-allocated nodes.
///
/// Every node handed out by the pool stays at a fixed address until the pool
/// is dropped, whatever happens to the links between them. Dropping the pool
/// frees all of its nodes, including ones wired into a cycle. The pool is not
/// a list: chains built from its nodes are still referenced by their head.
pub struct NodePool<N> {
    nodes: Vec<NonNull<N>>,
}

impl<N> NodePool<N> {
    /// Creates an empty pool.
    pub const fn new() -> Self {
        NodePool { nodes: Vec::new() }
    }

    /// Creates an empty pool with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        NodePool {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Moves `node` to the heap and returns its stable address.
    pub fn alloc(&mut self, node: N) -> NonNull<N> {
        let ptr = NonNull::from(Box::leak(Box::new(node)));
        self.nodes.push(ptr);
        ptr
    }

    /// Number of nodes owned by the pool.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<N> NodePool<N>
where
    N: NodeWithData,
{
    /// Allocates an unlinked node holding `data`.
    pub fn node(&mut self, data: N::Data) -> NonNull<N> {
        self.alloc(N::with_data(data))
    }

    /// Allocates one node per value and links them in order.
    ///
    /// Returns the head of the new chain, or `None` for no values.
    pub fn chain<I>(&mut self, values: I) -> Option<NonNull<N>>
    where
        I: IntoIterator<Item = N::Data>,
    {
        let mut builder = ChainBuilder::new();
        for value in values {
            let node = self.node(value);
            // The builder only touches nodes this pool just allocated.
            unsafe { builder.push_back(node) };
        }
        unsafe { builder.finish() }
    }
}

impl<N> Default for NodePool<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Drop for NodePool<N> {
    fn drop(&mut self) {
        for node in self.nodes.drain(..) {
            drop(unsafe { Box::from_raw(node.as_ptr()) });
        }
    }
}

unsafe impl<N: Send> Send for NodePool<N> {}
