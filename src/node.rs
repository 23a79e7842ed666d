use std::fmt;

use ordered_float::OrderedFloat;

use crate::problem::Value;

/// Identifier of a node within a single [`solve`](crate::solve) call.
///
/// Ids are sequential tickets handed out at node creation (the root is `#0`).
/// A node keeps its parent's id as a plain lookup key for diagnostics and
/// path reconstruction in the [trace](crate::SearchTrace), never as an
/// ownership edge between tree nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u64);

impl NodeId {
    /// The underlying ticket number.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Open node of the search tree: a partial assignment together with its
/// relaxation bound.
///
/// The bound is computed exactly once, when the node is created, and never
/// recomputed in place. A node is owned by the frontier while open and
/// dropped once popped and pruned, expanded or completed.
#[derive(Debug)]
pub(crate) struct Node<S, T: Value> {
    pub(crate) id: NodeId,
    pub(crate) parent: Option<NodeId>,
    pub(crate) depth: u32,
    pub(crate) bound: OrderedFloat<T>,
    pub(crate) state: S,
}

impl<S, T: Value> Node<S, T> {
    pub(crate) fn root(bound: OrderedFloat<T>, state: S) -> Self {
        Self {
            id: NodeId(0),
            parent: None,
            depth: 0,
            bound,
            state,
        }
    }

    pub(crate) fn child(&self, id: NodeId, bound: OrderedFloat<T>, state: S) -> Node<S, T> {
        Node {
            id,
            parent: Some(self.id),
            depth: self.depth + 1,
            bound,
            state,
        }
    }
}
