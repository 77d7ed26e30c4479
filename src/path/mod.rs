//! The immutable [`Path`] result type.

pub mod order;

use crate::{Node, Result, SearchError};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;

/// The cost of traversing a node, or of a whole path.
///
/// Costs must be non-negative; negative edge costs are unsupported.
pub type Cost = f64;

// Run id 0 is reserved for the empty sentinel.
static NEXT_RUN_ID: AtomicU64 = AtomicU64::new(1);

fn next_run_id() -> u64 {
    NEXT_RUN_ID.fetch_add(1, AtomicOrdering::Relaxed)
}

/// An immutable route produced by a search.
///
/// Stores the node sequence in start→destination order and the total cost,
/// which equals the sum of the node costs along the sequence. A path with
/// zero nodes and zero cost is the canonical "no path found" sentinel,
/// returned when a search exhausts the graph or observes cancellation.
///
/// Every constructed path carries a fresh opaque [`run_id`](Path::run_id)
/// and an optional caller [`tag`](Path::tag); neither participates in
/// equality. Two paths are equal iff their costs are equal and their
/// identifier sequences match pairwise. The total order is by cost
/// ascending, ties broken by node count (fewer nodes first).
///
/// ## Examples
/// ```
/// use pathseeker::{Node, Path};
///
/// let path = Path::new(
///     vec![Node::new('a', 0.0), Node::new('b', 2.0), Node::new('c', 3.0)],
///     5.0,
/// );
///
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.cost(), 5.0);
/// assert_eq!(path.cost_at(1).unwrap(), 2.0);
/// assert_eq!(&format!("{}", path), "Path[Cost = 5]: a -> b -> c");
/// ```
#[derive(Clone, Debug)]
pub struct Path<Id> {
    run_id: u64,
    nodes: Arc<[Node<Id>]>,
    cost: Cost,
    tag: Option<Arc<str>>,
}

impl<Id> Path<Id> {
    /// Creates a path from a start→destination node sequence and its total
    /// cost, with a freshly generated run id and no tag.
    pub fn new(nodes: Vec<Node<Id>>, cost: Cost) -> Path<Id> {
        Path {
            run_id: next_run_id(),
            nodes: nodes.into(),
            cost,
            tag: None,
        }
    }

    /// The canonical "no path found" sentinel: zero nodes, zero cost,
    /// run id 0.
    pub fn empty() -> Path<Id> {
        Path {
            run_id: 0,
            nodes: Vec::new().into(),
            cost: 0.0,
            tag: None,
        }
    }

    /// true iff the node sequence has zero length
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// the number of nodes in the sequence
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// The total cost: the sum of the node costs along the sequence.
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Opaque identifier generated fresh for every constructed path.
    ///
    /// 0 for the empty sentinel. Not part of equality; useful only for
    /// caller-side bookkeeping.
    pub fn run_id(&self) -> u64 {
        self.run_id
    }

    /// the caller bookkeeping tag, if one was set
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Returns a copy of this path carrying `tag`. Everything else,
    /// the run id included, is unchanged; the tag never affects equality.
    pub fn with_tag(&self, tag: impl Into<Arc<str>>) -> Path<Id> {
        Path {
            run_id: self.run_id,
            nodes: self.nodes.clone(),
            cost: self.cost,
            tag: Some(tag.into()),
        }
    }

    /// the node sequence, start first
    pub fn nodes(&self) -> &[Node<Id>] {
        &self.nodes
    }

    /// iterator over the nodes in start→destination order
    pub fn iter(&self) -> std::slice::Iter<'_, Node<Id>> {
        self.nodes.iter()
    }

    /// iterator over just the identifiers
    pub fn ids(&self) -> impl Iterator<Item = &Id> {
        self.nodes.iter().map(|node| &node.id)
    }

    /// Cumulative cost from the first node through the node at `index`.
    ///
    /// Fails with [`SearchError::OutOfBounds`] if `index` is not a valid
    /// index into the node sequence.
    pub fn cost_at(&self, index: usize) -> Result<Cost> {
        if index >= self.nodes.len() {
            return Err(SearchError::OutOfBounds {
                index,
                len: self.nodes.len(),
            });
        }
        Ok(self.nodes[..=index].iter().map(|node| node.cost).sum())
    }

    /// Returns a new path: this path's nodes followed by `other`'s, with
    /// the costs summed and a freshly generated run id. Neither operand is
    /// touched. Concatenating two empty paths yields the empty sentinel.
    ///
    /// ## Examples
    /// ```
    /// use pathseeker::{Node, Path};
    ///
    /// let ab = Path::new(vec![Node::new('a', 0.0), Node::new('b', 2.0)], 2.0);
    /// let cd = Path::new(vec![Node::new('c', 1.0), Node::new('d', 4.0)], 5.0);
    ///
    /// let joined = ab.concat(&cd);
    /// assert_eq!(joined.cost(), 7.0);
    /// assert_eq!(joined.ids().collect::<Vec<_>>(), vec![&'a', &'b', &'c', &'d']);
    /// ```
    pub fn concat(&self, other: &Path<Id>) -> Path<Id>
    where
        Id: Clone,
    {
        if self.is_empty() && other.is_empty() {
            return Path::empty();
        }
        let mut nodes = Vec::with_capacity(self.len() + other.len());
        nodes.extend_from_slice(&self.nodes);
        nodes.extend_from_slice(&other.nodes);
        Path::new(nodes, self.cost + other.cost)
    }

    /// Concatenates any number of paths. Equivalent to repeated pairwise
    /// [`concat`](Path::concat); an empty input yields the empty sentinel.
    pub fn join<I>(parts: I) -> Path<Id>
    where
        Id: Clone,
        I: IntoIterator<Item = Path<Id>>,
    {
        let mut nodes = Vec::new();
        let mut cost = 0.0;
        for part in parts {
            nodes.extend_from_slice(&part.nodes);
            cost += part.cost;
        }
        if nodes.is_empty() {
            return Path::empty();
        }
        Path::new(nodes, cost)
    }
}

impl<Id> std::ops::Index<usize> for Path<Id> {
    type Output = Node<Id>;
    fn index(&self, index: usize) -> &Node<Id> {
        &self.nodes[index]
    }
}

impl<'a, Id> IntoIterator for &'a Path<Id> {
    type Item = &'a Node<Id>;
    type IntoIter = std::slice::Iter<'a, Node<Id>>;
    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl<Id: PartialEq> PartialEq for Path<Id> {
    fn eq(&self, other: &Path<Id>) -> bool {
        self.cost == other.cost
            && self.len() == other.len()
            && self.ids().zip(other.ids()).all(|(a, b)| a == b)
    }
}

impl<Id: Eq> Eq for Path<Id> {}

impl<Id: Hash> Hash for Path<Id> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // normalize -0.0 so that equal costs always hash equally
        let bits = if self.cost == 0.0 {
            0
        } else {
            self.cost.to_bits()
        };
        bits.hash(state);
        for node in self.nodes.iter() {
            node.id.hash(state);
        }
    }
}

impl<Id: Eq> Ord for Path<Id> {
    fn cmp(&self, other: &Path<Id>) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then(self.len().cmp(&other.len()))
    }
}

impl<Id: PartialEq> PartialOrd for Path<Id> {
    fn partial_cmp(&self, other: &Path<Id>) -> Option<Ordering> {
        Some(
            self.cost
                .total_cmp(&other.cost)
                .then(self.len().cmp(&other.len())),
        )
    }
}

impl<Id: fmt::Display> fmt::Display for Path<Id> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Path[Cost = {}]: ", self.cost)?;
        if self.nodes.is_empty() {
            write!(fmt, "<empty>")
        } else {
            write!(fmt, "{}", self.nodes[0].id)?;
            for node in self.nodes.iter().skip(1) {
                write!(fmt, " -> {}", node.id)?;
            }
            Ok(())
        }
    }
}
