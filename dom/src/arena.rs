use std::cell::Cell;

use crate::node::Node;

pub type Arena<'arena> = typed_arena::Arena<Node<'arena>>;
pub type NodeRef<'arena> = &'arena Node<'arena>;
pub type NodeLink<'arena> = Cell<Option<NodeRef<'arena>>>;
