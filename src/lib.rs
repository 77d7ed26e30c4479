#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]

//! A crate for best-first (A*) searches over caller-supplied Graphs.
//!
//! ## Introduction
//! This crate implements the search engine only: the caller describes their
//! domain through two small traits and gets back the cheapest route between
//! two identifiers as an immutable [`Path`].
//!
//! - [`Graph`] resolves an identifier to a [`Node`] and enumerates the
//!   neighbors of a Node, each carrying the cost of the edge leading to it.
//! - [`Heuristic`] estimates the remaining cost between two Nodes. The
//!   default [`ZeroHeuristic`] estimates 0 everywhere, which turns the
//!   engine into plain Dijkstra search.
//!
//! The Graph can be anything that answers those two questions: an adjacency
//! map, a 2D grid, a road network loaded from disk, ... The engine never
//! asks for the whole Graph, only for one Node at a time, so Nodes may be
//! synthesized on demand.
//!
//! ## Examples
//! A small road network as an adjacency map:
//! ```
//! use pathseeker::{CancelFlag, Engine, Graph, Node};
//! use std::collections::HashMap;
//!
//! struct RoadMap {
//!     roads: HashMap<u32, Vec<(u32, f64)>>,
//! }
//!
//! impl Graph for RoadMap {
//!     type Id = u32;
//!
//!     fn lookup(&self, id: &u32) -> Option<Node<u32>> {
//!         self.roads.contains_key(id).then(|| Node::new(*id, 0.0))
//!     }
//!
//!     fn neighbors(&self, node: &Node<u32>, out: &mut Vec<Node<u32>>) {
//!         for &(id, cost) in &self.roads[&node.id] {
//!             out.push(Node::new(id, cost));
//!         }
//!     }
//! }
//!
//! let mut roads = HashMap::new();
//! roads.insert(0, vec![(1, 2.0), (2, 8.0)]);
//! roads.insert(1, vec![(0, 2.0), (2, 3.0)]);
//! roads.insert(2, vec![(0, 8.0), (1, 3.0)]);
//!
//! let engine = Engine::new(RoadMap { roads });
//! let path = engine.find(&0, &2, &CancelFlag::new()).unwrap();
//!
//! assert_eq!(path.cost(), 5.0);
//! let ids: Vec<u32> = path.ids().copied().collect();
//! assert_eq!(ids, vec![0, 1, 2]);
//! ```
//!
//! No route and cancellation are not errors: both return the canonical
//! empty [`Path`] (zero nodes, zero cost, [`Path::is_empty`] true). Only
//! unresolvable endpoints fail, with [`SearchError::NotFound`] raised
//! before the search begins.
//!
//! ## Heuristics
//! Supplying a [`Heuristic`] makes the search goal-directed. The contract
//! is on the caller: the estimate must never overestimate the true
//! remaining cost (*admissible*) for the result to be cost-optimal, and
//! should satisfy the triangle inequality across edges (*consistent*) —
//! the engine never reopens a node it has finished with, which is only
//! guaranteed optimal under a consistent heuristic. Estimates are plain
//! functions of two Nodes, so a closure wrapped in [`FnHeuristic`] is
//! usually all that is needed.
//!
//! ## Background searches
//! With the default `parallel` feature, [`Engine::find_detached`] schedules
//! the whole synchronous search onto rayon's thread pool and returns a
//! [`PendingPath`] to wait on. The search itself stays single-threaded;
//! cancellation is the same polled [`CancelFlag`].

mod cancel;
pub use self::cancel::CancelFlag;

mod error;
pub use self::error::{Endpoint, Result, SearchError};

mod graph;
pub use self::graph::{Graph, Node, NodeId};

mod heuristic;
pub use self::heuristic::{FnHeuristic, Heuristic, ZeroHeuristic};

pub mod path;
pub use self::path::{Cost, Path};

mod search;
pub use self::search::Engine;
#[cfg(feature = "parallel")]
pub use self::search::PendingPath;

/// Convenience re-export of the most commonly used items.
pub mod prelude {
    pub use crate::{
        CancelFlag, Cost, Endpoint, Engine, FnHeuristic, Graph, Heuristic, Node, NodeId, Path,
        SearchError, ZeroHeuristic,
    };

    #[cfg(feature = "parallel")]
    pub use crate::PendingPath;
}
