//! Sequential access to index-addressed node lists.
//!
//! [`NodeListIterator`] walks anything implementing [`NodeCollection`] with the usual
//! [`Iterator`] protocol, and can remove the node it just returned when the items know
//! their parent ([`ChildNode`]).
//!
//! ```
//! use dom::{Arena, Document};
//! use xmlwrapper::iterable;
//!
//! let arena = Arena::new();
//! let document = Document::new(&arena);
//! let list = document.create_element("list");
//! for name in ["a", "b", "c"] {
//!     list.append_child(document.create_element(name)).unwrap();
//! }
//!
//! let children = list.child_nodes();
//! let names: Vec<String> = iterable(&children)
//!     .into_iter()
//!     .map(|node| node.node_name())
//!     .collect();
//! assert_eq!(names, ["a", "b", "c"]);
//! ```

pub mod collection;
pub mod error;
pub mod iterator;

pub use collection::{ChildNode, NodeCollection};
pub use error::Error;
pub use iterator::{iterable, NodeListIterable, NodeListIterator, RemovalTarget};
