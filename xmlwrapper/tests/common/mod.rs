#![allow(dead_code)]

use dom::{Document, NodeRef};

/// Routes `tracing` output through the test harness. Filter with `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Appends a `parent` element to the document with one child element per name.
pub fn parent_with_children<'a>(document: &Document<'a>, names: &[&str]) -> NodeRef<'a> {
    let parent = document.create_element("parent");
    document
        .root()
        .append_child(parent)
        .expect("document accepts its first element");
    for name in names {
        parent
            .append_child(document.create_element(name))
            .expect("element accepts element children");
    }
    parent
}

pub fn names(nodes: &[NodeRef<'_>]) -> Vec<String> {
    nodes.iter().map(|node| node.node_name()).collect()
}
