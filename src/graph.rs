//! The contract between the engine and the caller's graph.

use crate::Cost;
use std::hash::Hash;

/// Capability bound for node identifiers.
///
/// Identifiers are used as set and map keys during a search, so they must
/// support equality and stable hashing. This is blanket-implemented for
/// every qualifying type. Identifiers are cloned into search records and
/// the resulting [`Path`](crate::Path), so a small representation is
/// advisable.
pub trait NodeId: Clone + Eq + Hash {}

impl<T: Clone + Eq + Hash> NodeId for T {}

/// A single node of the caller's graph.
///
/// `cost` is the cost of traversing *into* this node from its predecessor.
/// Nodes returned by [`Graph::lookup`] conventionally carry cost 0, since
/// there is no predecessor yet; nodes returned by [`Graph::neighbors`]
/// carry the cost of the edge from the expanded node.
#[derive(Clone, Debug, PartialEq)]
pub struct Node<Id> {
    /// the identifier of this node
    pub id: Id,
    /// cost of the edge leading into this node
    pub cost: Cost,
}

impl<Id> Node<Id> {
    /// creates a Node from an identifier and the cost of its incoming edge
    pub fn new(id: Id, cost: Cost) -> Node<Id> {
        Node { id, cost }
    }
}

/// The graph a search runs over.
///
/// Implementations describe connectivity one node at a time; the engine
/// never needs the graph as a whole, so nodes may be synthesized on demand
/// (a grid map typically builds them from coordinates).
///
/// Both methods are queries: the engine takes `&self` everywhere and may
/// call [`lookup`](Graph::lookup) more than once for the same identifier.
/// Concurrent searches over one graph are safe exactly when the
/// implementation is safe for concurrent reads.
pub trait Graph {
    /// The identifier type of this graph's nodes.
    type Id: NodeId;

    /// Resolves an identifier to a node, or `None` if the graph has no such
    /// node. Must be side-effect-free from the engine's perspective.
    fn lookup(&self, id: &Self::Id) -> Option<Node<Self::Id>>;

    /// Appends every node directly reachable from `node` to `out`, each
    /// carrying the cost of the edge from `node`. The buffer is cleared by
    /// the caller and reused across expansions.
    ///
    /// Implementations must not report `node` itself. Duplicate neighbor
    /// identifiers within one call are tolerated (the engine skips nodes it
    /// has already finished with), but avoiding them saves work.
    fn neighbors(&self, node: &Node<Self::Id>, out: &mut Vec<Node<Self::Id>>);
}
