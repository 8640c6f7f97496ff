use std::rc::Rc;

use crate::arena::NodeRef;
use crate::node::Node;

/// An ordered collection of nodes, addressed by index.
///
/// Live lists operate on the tree as it is at call time, so their length and items
/// follow every insertion and removal. Static lists are a snapshot taken at creation.
#[derive(Clone)]
pub struct NodeList<'a> {
    source: Source<'a>,
}

#[derive(Clone)]
enum Source<'a> {
    Children(NodeRef<'a>),
    Filtered {
        root: NodeRef<'a>,
        filter: Rc<dyn Fn(NodeRef<'a>) -> bool + 'a>,
    },
    Static(Vec<NodeRef<'a>>),
}

impl<'a> NodeList<'a> {
    /// The children of `parent`.
    pub fn children(parent: NodeRef<'a>) -> Self {
        Self {
            source: Source::Children(parent),
        }
    }

    /// The descendants of `root`, in tree order, that match `filter`. `root` itself is
    /// never part of the list.
    ///
    /// Nothing is cached: `length` walks the whole subtree and `item(i)` walks it up to
    /// the `i`th match, so a full indexed pass over the list is quadratic in the size
    /// of the subtree.
    pub fn live<F: Fn(NodeRef<'a>) -> bool + 'a>(root: NodeRef<'a>, filter: F) -> Self {
        Self {
            source: Source::Filtered {
                root,
                filter: Rc::new(filter),
            },
        }
    }

    pub fn from_nodes(nodes: Vec<NodeRef<'a>>) -> Self {
        Self {
            source: Source::Static(nodes),
        }
    }

    pub fn is_live(&self) -> bool {
        !matches!(self.source, Source::Static(_))
    }

    // SPECLINK: https://dom.spec.whatwg.org/#dom-nodelist-length
    pub fn length(&self) -> usize {
        match &self.source {
            Source::Children(parent) => parent.children().len(),
            Source::Filtered { .. } => self.collection().len(),
            Source::Static(nodes) => nodes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.length() == 0
    }

    // SPECLINK: https://dom.spec.whatwg.org/#dom-nodelist-item
    pub fn item(&self, index: usize) -> Option<NodeRef<'a>> {
        match &self.source {
            Source::Children(parent) => parent.children().get(index).copied(),
            Source::Filtered { root, filter } => {
                let mut remaining = index;
                let mut found = None;
                root.for_each_in_inclusive_subtree(|node| {
                    if Node::are_same(node, *root) || !filter(node) {
                        return true;
                    }
                    if remaining == 0 {
                        found = Some(node);
                        return false;
                    }
                    remaining -= 1;
                    true
                });
                found
            }
            Source::Static(nodes) => nodes.get(index).copied(),
        }
    }

    pub fn to_vec(&self) -> Vec<NodeRef<'a>> {
        self.collection()
    }

    fn collection(&self) -> Vec<NodeRef<'a>> {
        match &self.source {
            Source::Children(parent) => parent.children().to_vec(),
            Source::Filtered { root, filter } => {
                let mut nodes = Vec::new();
                root.for_each_in_inclusive_subtree(|node| {
                    if !Node::are_same(node, *root) && filter(node) {
                        nodes.push(node);
                    }
                    true
                });
                nodes
            }
            Source::Static(nodes) => nodes.clone(),
        }
    }
}

impl<'a> From<NodeList<'a>> for Vec<NodeRef<'a>> {
    fn from(value: NodeList<'a>) -> Self {
        value.collection()
    }
}

impl std::fmt::Debug for NodeList<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.collection().iter().map(|node| node.node_name()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::arena::{Arena, NodeRef};
    use crate::document::Document;
    use crate::node::Node;
    use crate::node_list::NodeList;

    fn names(list: &NodeList<'_>) -> Vec<String> {
        list.to_vec().iter().map(|node| node.node_name()).collect()
    }

    fn build<'a>(document: &Document<'a>) -> NodeRef<'a> {
        let catalog = document.create_element("catalog");
        document.root().append_child(catalog).unwrap();
        for name in ["book", "magazine", "book"] {
            let item = document.create_element(name);
            catalog.append_child(item).unwrap();
            item.append_child(document.create_element("title")).unwrap();
        }
        catalog
    }

    #[test]
    fn child_nodes_are_live() {
        let arena = Arena::new();
        let document = Document::new(&arena);
        let catalog = build(&document);
        let list = catalog.child_nodes();
        assert!(list.is_live());
        assert_eq!(list.length(), 3);

        let first = list.item(0).unwrap();
        catalog.remove_child(first).unwrap();
        assert_eq!(list.length(), 2);
        assert_eq!(names(&list), vec!["magazine", "book"]);

        catalog.append_child(first).unwrap();
        assert_eq!(names(&list), vec!["magazine", "book", "book"]);
        assert!(list.item(3).is_none());
    }

    #[test]
    fn elements_by_tag_name() {
        let arena = Arena::new();
        let document = Document::new(&arena);
        let catalog = build(&document);

        let books = document.get_elements_by_tag_name("book");
        assert_eq!(books.length(), 2);
        assert!(books.to_vec().iter().all(|node| node.node_name() == "book"));

        let all = document.get_elements_by_tag_name("*");
        assert_eq!(
            names(&all),
            vec!["catalog", "book", "title", "magazine", "title", "book", "title"]
        );

        let titles = catalog.get_elements_by_tag_name("title");
        assert_eq!(titles.length(), 3);
        let second_book = catalog.children()[2];
        assert!(Node::are_same_optional(books.item(1), Some(second_book)));
        assert!(Node::are_same_optional(
            titles.item(2),
            second_book.children().first().copied()
        ));
        assert!(titles.item(3).is_none());

        let magazine = catalog.children()[1];
        catalog.remove_child(magazine).unwrap();
        assert_eq!(titles.length(), 2);
        assert_eq!(all.length(), 5);
        assert!(catalog.get_elements_by_tag_name("catalog").is_empty());
    }

    #[test]
    fn static_list_is_a_snapshot() {
        let arena = Arena::new();
        let document = Document::new(&arena);
        let catalog = build(&document);
        let list = NodeList::from_nodes(catalog.child_nodes().into());
        assert!(!list.is_live());

        let first = list.item(0).unwrap();
        catalog.remove_child(first).unwrap();

        assert_eq!(list.length(), 3);
        assert!(Node::are_same_optional(list.item(0), Some(first)));
        assert_eq!(format!("{list:?}"), r#"["book", "magazine", "book"]"#);
    }
}
