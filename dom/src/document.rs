use crate::arena::{Arena, NodeRef};
use crate::node::{Node, NodeData};
use crate::node_list::NodeList;
use crate::QualifiedName;

/// Handle to a document tree. Owns nothing: every node, including the root,
/// lives in the arena the document was created with.
#[derive(Clone, Copy)]
pub struct Document<'arena> {
    arena: &'arena Arena<'arena>,
    root: NodeRef<'arena>,
}

impl<'arena> Document<'arena> {
    pub fn new(arena: &'arena Arena<'arena>) -> Self {
        let root = &*arena.alloc(Node::new(NodeData::Document));
        Self { arena, root }
    }

    pub fn root(&self) -> NodeRef<'arena> {
        self.root
    }

    pub fn get_elements_by_tag_name(&self, qualified_name: &str) -> NodeList<'arena> {
        self.root.get_elements_by_tag_name(qualified_name)
    }

    /// Allocates a parentless element. `qualified_name` may carry a `prefix:`.
    pub fn create_element(&self, qualified_name: &str) -> NodeRef<'arena> {
        &*self.arena.alloc(Node::new(NodeData::Element {
            name: QualifiedName::parse(qualified_name),
        }))
    }
}

impl std::fmt::Debug for Document<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("children", &self.root.children())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::arena::Arena;
    use crate::document::Document;
    use crate::node::Node;

    #[test]
    fn created_elements_are_detached() {
        let arena = Arena::new();
        let document = Document::new(&arena);
        let root = document.create_element("root");
        assert!(root.parent().is_none());

        document.root().append_child(root).unwrap();
        assert!(Node::are_same_optional(root.parent(), Some(document.root())));
        assert_eq!(document.get_elements_by_tag_name("root").length(), 1);
    }
}
