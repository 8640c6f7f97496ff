use crate::collection::{ChildNode, NodeCollection};
use crate::error::Error;

/// Which node [`NodeListIterator::remove`] detaches.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemovalTarget {
    /// The node most recently returned by `next()`.
    #[default]
    LastReturned,
    /// The node at the cursor, i.e. the one the following `next()` would return.
    ///
    /// Older node list iterators removed this node. It is kept for callers that
    /// depend on that behaviour.
    Cursor,
}

/// Shorthand for `NodeListIterator::new(nodes).to_iterable()`.
pub fn iterable<C: NodeCollection + ?Sized>(nodes: &C) -> NodeListIterable<'_, C> {
    NodeListIterator::new(nodes).to_iterable()
}

/// A forward-only cursor over a [`NodeCollection`].
///
/// The collection is borrowed, never copied, and its length is re-read on every step,
/// so nodes removed from a live list during iteration are not visited.
///
/// The cursor is plain mutable state without synchronization. DOM node references
/// are `!Sync`, which already confines iteration over a DOM to one thread.
#[derive(Debug)]
pub struct NodeListIterator<'c, C: NodeCollection + ?Sized> {
    nodes: &'c C,
    position: usize,
    last_returned: Option<usize>,
    removal_target: RemovalTarget,
}

impl<'c, C: NodeCollection + ?Sized> NodeListIterator<'c, C> {
    pub fn new(nodes: &'c C) -> Self {
        Self::with_removal_target(nodes, RemovalTarget::default())
    }

    pub fn with_removal_target(nodes: &'c C, removal_target: RemovalTarget) -> Self {
        Self {
            nodes,
            position: 0,
            last_returned: None,
            removal_target,
        }
    }

    /// Index of the node the next call to `next()` returns.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn removal_target(&self) -> RemovalTarget {
        self.removal_target
    }

    pub fn has_next(&self) -> bool {
        self.position < self.nodes.length()
    }

    /// Returns the node at the cursor and advances past it.
    ///
    /// Fails with [`Error::IndexOutOfRange`] when no node is left, in which case the
    /// iterator is left untouched.
    pub fn try_next(&mut self) -> Result<C::Item, Error> {
        let index = self.position;
        let node = self.checked_item(index)?;
        self.position += 1;
        self.last_returned = Some(index);
        Ok(node)
    }

    /// A view that hands out a fresh iterator, starting at the first node, every time
    /// it is iterated.
    pub fn to_iterable(&self) -> NodeListIterable<'c, C> {
        NodeListIterable {
            nodes: self.nodes,
            removal_target: self.removal_target,
        }
    }

    fn checked_item(&self, index: usize) -> Result<C::Item, Error> {
        let length = self.nodes.length();
        if index >= length {
            return Err(Error::IndexOutOfRange { index, length });
        }
        self.nodes
            .item(index)
            .ok_or(Error::IndexOutOfRange { index, length })
    }
}

impl<'c, C> NodeListIterator<'c, C>
where
    C: NodeCollection + ?Sized,
    C::Item: ChildNode,
{
    /// Detaches a node from its parent. Which node is decided by the
    /// [`RemovalTarget`].
    ///
    /// Each `next()` allows at most one `remove()`. Calling it before any `next()`, or
    /// twice in a row, fails with [`Error::IllegalState`]. A node without a parent
    /// fails with [`Error::NoParent`]. The iterator is unchanged after any failure.
    ///
    /// When the removal shrinks the collection, the cursor steps back by one so the
    /// node that moved into the vacated index is not skipped.
    pub fn remove(&mut self) -> Result<(), Error> {
        let Some(last_returned) = self.last_returned else {
            tracing::debug!(position = self.position, "remove() without a preceding next()");
            return Err(Error::IllegalState);
        };

        let index = match self.removal_target {
            RemovalTarget::LastReturned => last_returned,
            RemovalTarget::Cursor => self.position,
        };
        let length = self.nodes.length();
        let node = self.checked_item(index)?;
        let Some(parent) = node.parent_node() else {
            tracing::debug!(index, "remove() on a node without a parent");
            return Err(Error::NoParent);
        };

        tracing::trace!(
            index,
            position = self.position,
            target = ?self.removal_target,
            "removing node from its parent"
        );
        parent.remove_child(&node)?;

        self.last_returned = None;
        if self.nodes.length() < length && self.position > 0 {
            self.position -= 1;
        }
        Ok(())
    }
}

impl<C: NodeCollection + ?Sized> Iterator for NodeListIterator<'_, C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }

    // Only an upper bound: a live collection may shrink while it is walked.
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.nodes.length().saturating_sub(self.position)))
    }
}

/// A restartable view over a collection, for use in `for` loops.
///
/// Every iteration starts a new [`NodeListIterator`] at the first node, so two loops
/// over the same view never share a cursor.
#[derive(Debug)]
pub struct NodeListIterable<'c, C: NodeCollection + ?Sized> {
    nodes: &'c C,
    removal_target: RemovalTarget,
}

impl<'c, C: NodeCollection + ?Sized> NodeListIterable<'c, C> {
    pub fn iter(&self) -> NodeListIterator<'c, C> {
        NodeListIterator::with_removal_target(self.nodes, self.removal_target)
    }
}

impl<C: NodeCollection + ?Sized> Clone for NodeListIterable<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: NodeCollection + ?Sized> Copy for NodeListIterable<'_, C> {}

impl<'c, C: NodeCollection + ?Sized> IntoIterator for NodeListIterable<'c, C> {
    type Item = C::Item;
    type IntoIter = NodeListIterator<'c, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'c, C: NodeCollection + ?Sized> IntoIterator for &NodeListIterable<'c, C> {
    type Item = C::Item;
    type IntoIter = NodeListIterator<'c, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
