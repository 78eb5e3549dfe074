use core::ptr::NonNull;

use chainkit_derive::Node;

use super::traits::{Link, NodeWithData};

/// A node in a singly linked chain.
///
/// A node whose value may be absent is a `SingleNode<Option<T>>`.
#[derive(Node)]
#[node(crate_path = "crate")]
pub struct SingleNode<T> {
    link: SingleLink,
    data: T,
}

impl<T> SingleNode<T> {
    /// Creates an unlinked node holding `data`.
    #[inline]
    pub fn new(data: T) -> Self {
        Self::with_data(data)
    }

    /// Consumes the node and returns its data.
    #[inline]
    pub fn into_data(self) -> T {
        self.data
    }
}

impl<T: Default> Default for SingleNode<T> {
    fn default() -> Self {
        Self {
            link: SingleLink::default(),
            data: T::default(),
        }
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for SingleNode<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SingleNode")
            .field("data", &self.data)
            .field("next", &self.next())
            .finish()
    }
}

/// A link in a singly linked chain.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleLink {
    next: Option<NonNull<Self>>,
}

impl Link for SingleLink {
    type Target = Self;

    #[inline]
    fn next(&self) -> Option<NonNull<Self>> {
        self.next
    }

    #[inline]
    fn set_next(&mut self, next: Option<NonNull<Self>>) {
        self.next = next;
    }
}

unsafe impl Send for SingleLink {}
unsafe impl Sync for SingleLink {}
