use core::ptr::NonNull;

/// A trait for a link in a chain.
pub trait Link: Sized {
    /// The target type of the link.
    type Target;

    /// Get the next pointer in the chain
    fn next(&self) -> Option<NonNull<Self::Target>>;

    /// Set the next pointer in the chain
    fn set_next(&mut self, next: Option<NonNull<Self::Target>>);
}

/// A trait for an element of a singly linked chain.
///
/// A node is identified by its address, so two nodes holding equal data are
/// still different nodes.
pub trait Node: Link<Target = Self> {
    /// Splice the successor out of the chain and return it.
    ///
    /// After the call `self.next()` is the removed node's former successor.
    /// The removed node's own link is left untouched.
    ///
    /// # Safety
    ///
    /// The successor, if any, must be a live node.
    unsafe fn unlink_next(&mut self) -> Option<NonNull<Self>> {
        let removed = self.next()?;
        self.set_next(unsafe { removed.as_ref().next() });
        Some(removed)
    }
}

/// A trait for a node that contains data.
pub trait NodeWithData: Node {
    /// The type of data stored in the node.
    type Data;

    /// Create an unlinked node holding `data`
    fn with_data(data: Self::Data) -> Self;

    /// Get the data associated with the node
    fn data(&self) -> &Self::Data;

    /// Get a mutable reference to the data associated with the node
    fn data_mut(&mut self) -> &mut Self::Data;
}
