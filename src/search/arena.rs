use crate::{Cost, Node};
use slab::Slab;
use std::cmp::Ordering;

/// One record of the search tree: the wrapped graph node, the arena index
/// of its predecessor, and the A* scores.
#[derive(Clone, Debug)]
pub(crate) struct SearchNode<Id> {
    pub node: Node<Id>,
    pub parent: Option<usize>,
    /// accumulated cost from the start node
    pub g: Cost,
    /// heuristic estimate to the destination
    pub h: Cost,
    /// total score, g + h
    pub f: Cost,
}

/// Arena holding the search tree of one `find` call.
///
/// Parent links are indices into the slab rather than references, so the
/// tree needs no shared ownership and is freed in one drop when the call
/// returns.
#[derive(Debug)]
pub(crate) struct Arena<Id> {
    nodes: Slab<SearchNode<Id>>,
}

impl<Id: Clone> Arena<Id> {
    pub fn with_capacity(capacity: usize) -> Self {
        Arena {
            nodes: Slab::with_capacity(capacity),
        }
    }

    pub fn insert(&mut self, node: Node<Id>, parent: Option<usize>, g: Cost, h: Cost) -> usize {
        self.nodes.insert(SearchNode {
            node,
            parent,
            g,
            h,
            f: g + h,
        })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Walks the parent chain from `index` back to the root and returns the
    /// collected nodes in start→destination order.
    pub fn backtrack(&self, index: usize) -> Vec<Node<Id>> {
        let mut steps = vec![];
        let mut current = Some(index);

        while let Some(i) = current {
            let record = &self.nodes[i];
            steps.push(record.node.clone());
            current = record.parent;
        }
        steps.reverse();
        steps
    }
}

impl<Id> std::ops::Index<usize> for Arena<Id> {
    type Output = SearchNode<Id>;
    #[track_caller]
    fn index(&self, index: usize) -> &SearchNode<Id> {
        &self.nodes[index]
    }
}

/// Open-set entry: an arena index plus the f score it was queued with.
///
/// `Ord` is reversed on the score so that `BinaryHeap::pop` yields the
/// entry with the *smallest* f. Ties are broken arbitrarily by the heap.
#[derive(Debug)]
pub(crate) struct OpenEntry(pub usize, pub Cost);

impl PartialEq for OpenEntry {
    fn eq(&self, rhs: &Self) -> bool {
        self.1.total_cmp(&rhs.1) == Ordering::Equal
    }
}
impl Eq for OpenEntry {}
impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl Ord for OpenEntry {
    fn cmp(&self, rhs: &Self) -> Ordering {
        rhs.1.total_cmp(&self.1)
    }
}
