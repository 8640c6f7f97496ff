use std::cell::{Cell, RefCell};

use crate::arena::{NodeLink, NodeRef};
use crate::dom_exception::{DomException, ErrorName};
use crate::node_list::NodeList;
use crate::QualifiedName;

/// A node in an arena-allocated document tree.
///
/// Nodes never own each other. Parent and child links are plain references into the
/// arena, so a tree lives exactly as long as the arena it was allocated in.
pub struct Node<'a> {
    parent: NodeLink<'a>,
    children: RefCell<Vec<NodeRef<'a>>>,
    pub data: NodeData,
}

impl<'a> Node<'a> {
    pub fn new(data: NodeData) -> Node<'a> {
        Node {
            parent: Cell::new(None),
            children: RefCell::new(Vec::new()),
            data,
        }
    }

    pub fn are_same(a: NodeRef<'a>, b: NodeRef<'a>) -> bool {
        std::ptr::eq(a, b)
    }

    pub fn are_same_optional(a: Option<NodeRef<'a>>, b: Option<NodeRef<'a>>) -> bool {
        match (a, b) {
            (Some(a), Some(b)) => Node::are_same(a, b),
            (None, None) => true,
            _ => false,
        }
    }

    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.parent.get()
    }

    pub fn children(&self) -> std::cell::Ref<'_, Vec<NodeRef<'a>>> {
        self.children.borrow()
    }

    /// A live list of this node's children.
    pub fn child_nodes(&'a self) -> NodeList<'a> {
        NodeList::children(self)
    }

    // SPECLINK: https://dom.spec.whatwg.org/#concept-tree-index
    pub fn index(&'a self) -> usize {
        self.parent()
            .and_then(|parent| {
                parent
                    .children()
                    .iter()
                    .position(|child| Node::are_same(*child, self))
            })
            .unwrap_or(0)
    }

    // SPECLINK: https://dom.spec.whatwg.org/#concept-tree-inclusive-ancestor
    pub fn is_inclusive_ancestor_of(&'a self, other: NodeRef<'a>) -> bool {
        let mut current = Some(other);
        while let Some(node) = current {
            if Node::are_same(node, self) {
                return true;
            }
            current = node.parent();
        }
        false
    }

    /// Calls `callback` for this node and every descendant in tree order.
    /// Returning `false` from the callback stops the walk.
    pub fn for_each_in_inclusive_subtree(&'a self, mut callback: impl FnMut(NodeRef<'a>) -> bool) {
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            if !callback(node) {
                return;
            }
            // Reversed so the first child is visited next.
            pending.extend(node.children().iter().rev().copied());
        }
    }

    // SPECLINK: https://dom.spec.whatwg.org/#concept-getelementsbytagname
    pub fn get_elements_by_tag_name(&'a self, qualified_name: &str) -> NodeList<'a> {
        let qualified_name = qualified_name.to_string();
        NodeList::live(self, move |node| match node.qualified_name() {
            Some(name) => qualified_name == "*" || name.to_string() == qualified_name,
            None => false,
        })
    }

    pub fn qualified_name(&self) -> Option<&QualifiedName> {
        match &self.data {
            NodeData::Element { name } => Some(name),
            NodeData::Document => None,
        }
    }

    // SPECLINK: https://dom.spec.whatwg.org/#dom-node-nodename
    pub fn node_name(&self) -> String {
        match &self.data {
            NodeData::Document => "#document".to_string(),
            NodeData::Element { name } => name.to_string(),
        }
    }

    // SPECLINK: https://dom.spec.whatwg.org/#concept-node-append
    pub fn append_child(&'a self, node: NodeRef<'a>) -> Result<NodeRef<'a>, DomException> {
        self.insert_before(node, None)
    }

    // SPECLINK: https://dom.spec.whatwg.org/#concept-node-pre-insert
    pub fn insert_before(
        &'a self,
        node: NodeRef<'a>,
        child: Option<NodeRef<'a>>,
    ) -> Result<NodeRef<'a>, DomException> {
        if node.is_inclusive_ancestor_of(self) {
            return Err(ErrorName::HierarchyRequestError.into());
        }
        if let Some(child) = child {
            if !Node::are_same_optional(child.parent(), Some(self)) {
                return Err(ErrorName::NotFoundError.into());
            }
        }

        let mut reference_child = child;
        if Node::are_same_optional(reference_child, Some(node)) {
            let next_sibling = self.children().get(node.index() + 1).copied();
            reference_child = next_sibling;
        }

        if let Some(old_parent) = node.parent() {
            old_parent.remove_child(node)?;
        }

        // The index is taken after the removal above, which may have shifted it.
        let position = match reference_child {
            Some(reference_child) => reference_child.index(),
            None => self.children().len(),
        };
        self.children.borrow_mut().insert(position, node);
        node.parent.set(Some(self));

        tracing::debug!(
            parent = %self.node_name(),
            child = %node.node_name(),
            position,
            "inserted node"
        );
        Ok(node)
    }

    // SPECLINK: https://dom.spec.whatwg.org/#concept-node-pre-remove
    pub fn remove_child(&'a self, child: NodeRef<'a>) -> Result<NodeRef<'a>, DomException> {
        if !Node::are_same_optional(child.parent(), Some(self)) {
            return Err(ErrorName::NotFoundError.into());
        }

        let index = child.index();
        self.children.borrow_mut().remove(index);
        child.parent.set(None);

        tracing::debug!(
            parent = %self.node_name(),
            child = %child.node_name(),
            index,
            "removed node"
        );
        Ok(child)
    }
}

impl std::fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // destructuring will make it fail to compile
        // if you later add a field and forget to update here
        let Node {
            parent,
            children,
            data,
        } = self;

        if matches!(data, NodeData::Document) {
            return write!(f, "Document {{ ... }}");
        }

        f.debug_struct("Node")
            .field("data", &data)
            .field("children", &children.borrow())
            .field("parent", &parent.get().map(|v| v.node_name()))
            .finish()
    }
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub enum NodeData {
    Document,
    Element { name: QualifiedName },
}
