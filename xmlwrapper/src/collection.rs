use dom::{DomException, Node, NodeList, NodeRef};

/// An ordered, index-addressed collection.
///
/// `length` and `item` are queried on every step, so a collection that changes between
/// calls is observed as it is at call time.
pub trait NodeCollection {
    type Item;

    fn length(&self) -> usize;

    /// The item at `index`, or `None` when `index >= self.length()`.
    fn item(&self, index: usize) -> Option<Self::Item>;
}

/// An item that can be detached from the structure containing it.
pub trait ChildNode: Sized {
    /// The node this item is a child of, if any.
    fn parent_node(&self) -> Option<Self>;

    /// Detaches `child` from `self`.
    fn remove_child(&self, child: &Self) -> Result<(), DomException>;
}

impl<'a> NodeCollection for NodeList<'a> {
    type Item = NodeRef<'a>;

    fn length(&self) -> usize {
        NodeList::length(self)
    }

    fn item(&self, index: usize) -> Option<NodeRef<'a>> {
        NodeList::item(self, index)
    }
}

impl<'a> ChildNode for NodeRef<'a> {
    fn parent_node(&self) -> Option<Self> {
        self.parent()
    }

    fn remove_child(&self, child: &Self) -> Result<(), DomException> {
        Node::remove_child(*self, *child).map(|_| ())
    }
}

impl<T: Clone> NodeCollection for [T] {
    type Item = T;

    fn length(&self) -> usize {
        self.len()
    }

    fn item(&self, index: usize) -> Option<T> {
        self.get(index).cloned()
    }
}

impl<T: Clone> NodeCollection for Vec<T> {
    type Item = T;

    fn length(&self) -> usize {
        self.len()
    }

    fn item(&self, index: usize) -> Option<T> {
        self.get(index).cloned()
    }
}
