//! The search engine: priority-ordered A* expansion over a [`Graph`].

mod arena;
use arena::{Arena, OpenEntry};

use crate::{
    CancelFlag, Endpoint, Graph, Heuristic, Path, Result, SearchError, ZeroHeuristic,
};
use hashbrown::HashSet;
use log::{debug, trace};
use std::collections::BinaryHeap;

/// A best-first search engine over a caller-supplied [`Graph`].
///
/// The engine owns the graph and heuristic it was built with and issues
/// only reads to them, so concurrent [`find`](Engine::find) calls against
/// one engine are safe whenever the contracts are safe for concurrent
/// read access. Nothing is cached between calls.
///
/// ## Examples
/// ```
/// use pathseeker::{CancelFlag, Engine, Graph, Node};
///
/// // a one-way chain: 0 -> 1 -> 2, each step costing 1
/// struct Chain;
///
/// impl Graph for Chain {
///     type Id = u32;
///
///     fn lookup(&self, id: &u32) -> Option<Node<u32>> {
///         (*id <= 2).then(|| Node::new(*id, 0.0))
///     }
///
///     fn neighbors(&self, node: &Node<u32>, out: &mut Vec<Node<u32>>) {
///         if node.id < 2 {
///             out.push(Node::new(node.id + 1, 1.0));
///         }
///     }
/// }
///
/// let engine = Engine::new(Chain);
/// let path = engine.find(&0, &2, &CancelFlag::new()).unwrap();
/// assert_eq!(path.cost(), 2.0);
///
/// // the chain is one-way, so the reverse route does not exist
/// let back = engine.find(&2, &0, &CancelFlag::new()).unwrap();
/// assert!(back.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct Engine<G, H = ZeroHeuristic> {
    graph: G,
    heuristic: H,
    assume_undirected: bool,
}

impl<G: Graph> Engine<G> {
    /// Creates an engine using the [`ZeroHeuristic`], which makes
    /// [`find`](Engine::find) behave as plain Dijkstra search.
    pub fn new(graph: G) -> Engine<G> {
        Engine::with_heuristic(graph, ZeroHeuristic)
    }
}

impl<G: Graph, H: Heuristic<G::Id>> Engine<G, H> {
    /// Creates an engine that scores nodes with `heuristic`.
    ///
    /// The result is only guaranteed cost-optimal when the heuristic is
    /// admissible and consistent; see [`Heuristic`].
    pub fn with_heuristic(graph: G, heuristic: H) -> Engine<G, H> {
        Engine {
            graph,
            heuristic,
            assume_undirected: false,
        }
    }

    /// Declares the graph undirected, enabling a shortcut: a destination
    /// without any neighbors cannot be reached from anywhere, so the
    /// search returns the empty path without expanding a single node.
    ///
    /// Never enable this for directed graphs — there a sink with no
    /// *outgoing* edges may still be reachable, and the shortcut would
    /// wrongly report "no path".
    pub fn assume_undirected(mut self) -> Self {
        self.assume_undirected = true;
        self
    }

    /// read access to the wrapped graph
    pub fn graph(&self) -> &G {
        &self.graph
    }

    /// Searches for the cheapest route from `start` to `dest`.
    ///
    /// Fails with [`SearchError::NotFound`] before any expansion if either
    /// identifier does not resolve. Returns the empty [`Path`] when the
    /// graph is exhausted without reaching `dest`, or when `cancel` is
    /// observed — the two are indistinguishable here, so callers that care
    /// must check their flag after the call returns. If `start` and `dest`
    /// are the same node the result is that single node with cost 0 (given
    /// the usual convention that [`Graph::lookup`] reports cost 0).
    ///
    /// One call is strictly single-threaded and sequential; `cancel` is
    /// polled once per loop iteration. A node is never re-scored or
    /// reopened once it has been expanded, even if a cheaper route to it
    /// is discovered later — correct under an admissible and consistent
    /// heuristic, a documented limitation otherwise.
    pub fn find(&self, start: &G::Id, dest: &G::Id, cancel: &CancelFlag) -> Result<Path<G::Id>> {
        let start_node = self
            .graph
            .lookup(start)
            .ok_or(SearchError::NotFound(Endpoint::Start))?;
        let dest_node = self
            .graph
            .lookup(dest)
            .ok_or(SearchError::NotFound(Endpoint::Destination))?;

        let mut neighbors = Vec::new();

        if self.assume_undirected && start_node.id != dest_node.id {
            self.graph.neighbors(&dest_node, &mut neighbors);
            if neighbors.is_empty() {
                debug!("destination has no edges, skipping the search");
                return Ok(Path::empty());
            }
            neighbors.clear();
        }

        let mut arena = Arena::with_capacity(64);
        let mut open = BinaryHeap::new();
        let mut closed: HashSet<G::Id> = HashSet::new();

        let g = start_node.cost;
        let h = self.heuristic.estimate(&start_node, &dest_node);
        let root = arena.insert(start_node, None, g, h);
        open.push(OpenEntry(root, g + h));

        let mut expanded = 0usize;

        while let Some(OpenEntry(index, _)) = open.pop() {
            if cancel.is_cancelled() {
                debug!("search cancelled after {} expansions", expanded);
                return Ok(Path::empty());
            }

            if arena[index].node.id == dest_node.id {
                let cost = arena[index].g;
                let nodes = arena.backtrack(index);
                debug!(
                    "found a {}-node path of cost {} after {} expansions ({} nodes discovered)",
                    nodes.len(),
                    cost,
                    expanded,
                    arena.len(),
                );
                return Ok(Path::new(nodes, cost));
            }

            // An id can be queued more than once since open entries are
            // never re-scored; the first dequeue is final, later ones are
            // stale and get skipped here.
            if !closed.insert(arena[index].node.id.clone()) {
                continue;
            }
            expanded += 1;

            let record = &arena[index];
            trace!(
                "expansion {}: g = {}, h = {}, f = {}",
                expanded,
                record.g,
                record.h,
                record.f,
            );
            let current = record.node.clone();
            let current_g = record.g;

            neighbors.clear();
            self.graph.neighbors(&current, &mut neighbors);
            for next in neighbors.drain(..) {
                if closed.contains(&next.id) {
                    continue;
                }
                let g = current_g + next.cost;
                let h = self.heuristic.estimate(&next, &dest_node);
                let child = arena.insert(next, Some(index), g, h);
                open.push(OpenEntry(child, g + h));
            }
        }

        debug!("open set exhausted after {} expansions, no path", expanded);
        Ok(Path::empty())
    }
}

#[cfg(feature = "parallel")]
impl<G, H> Engine<G, H>
where
    G: Graph + Clone + Send + 'static,
    G::Id: Send + Sync + 'static,
    H: Heuristic<G::Id> + Clone + Send + 'static,
{
    /// Schedules [`find`](Engine::find) with the same arguments onto
    /// rayon's global thread pool and returns a handle that resolves once
    /// the search finishes.
    ///
    /// This is pure delegation: the search itself runs exactly as the
    /// synchronous call would, with `cancel` forwarded into the loop's
    /// poll point. The engine and both identifiers are cloned into the
    /// worker.
    pub fn find_detached(
        &self,
        start: &G::Id,
        dest: &G::Id,
        cancel: &CancelFlag,
    ) -> PendingPath<G::Id> {
        let engine = self.clone();
        let start = start.clone();
        let dest = dest.clone();
        let cancel = cancel.clone();
        let (sender, receiver) = std::sync::mpsc::channel();

        rayon::spawn(move || {
            let _ = sender.send(engine.find(&start, &dest, &cancel));
        });

        PendingPath { receiver }
    }
}

/// A search running on the worker pool; resolves to the same value the
/// synchronous [`Engine::find`] would have returned.
#[cfg(feature = "parallel")]
#[derive(Debug)]
pub struct PendingPath<Id> {
    receiver: std::sync::mpsc::Receiver<Result<Path<Id>>>,
}

#[cfg(feature = "parallel")]
impl<Id> PendingPath<Id> {
    /// Blocks until the search finishes and returns its result.
    pub fn wait(self) -> Result<Path<Id>> {
        self.receiver
            .recv()
            .expect("search worker dropped without sending a result")
    }

    /// Returns the result if the search has already finished, or `None`
    /// while it is still running. A result returned here is consumed; call
    /// at most one of `try_wait` (successfully) and [`wait`](PendingPath::wait).
    pub fn try_wait(&self) -> Option<Result<Path<Id>>> {
        self.receiver.try_recv().ok()
    }
}
