pub mod arena;
pub mod document;
pub mod dom_exception;
pub mod node;
pub mod node_list;

pub use arena::{Arena, NodeRef};
pub use document::Document;
pub use dom_exception::{DomException, ErrorName};
pub use node::{Node, NodeData};
pub use node_list::NodeList;

#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone)]
pub struct QualifiedName {
    pub prefix: Option<String>,
    pub local: String,
}

impl QualifiedName {
    pub fn new(prefix: Option<String>, local: String) -> Self {
        QualifiedName { prefix, local }
    }

    /// Splits `prefix:local` at the first colon. Names without a colon have no prefix.
    pub fn parse(name: &str) -> Self {
        match name.split_once(':') {
            Some((prefix, local)) => Self::new(Some(prefix.to_string()), local.to_string()),
            None => Self::new(None, name.to_string()),
        }
    }
}

impl std::fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.prefix {
            Some(prefix) => write!(f, "{prefix}:{}", self.local),
            None => write!(f, "{}", self.local),
        }
    }
}
