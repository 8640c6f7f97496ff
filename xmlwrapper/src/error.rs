use dom::DomException;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("index {index} is out of range for a node list of length {length}")]
    IndexOutOfRange { index: usize, length: usize },

    #[error("remove() must follow a call to next() whose node has not been removed yet")]
    IllegalState,

    #[error("node has no parent to be removed from")]
    NoParent,

    #[error("parent could not remove the node")]
    Dom(#[from] DomException),
}
