//! The heuristic contract and the default zero estimator.

use crate::{Cost, Node};
use std::fmt;

/// Estimates the remaining cost between two nodes.
///
/// The contract is on the implementor, never validated by the engine:
/// - *admissible* — the estimate never exceeds the true remaining cost.
///   Required for the returned path to be provably cost-optimal; an
///   inadmissible heuristic still finds *a* path, just not necessarily the
///   cheapest one.
/// - *consistent* — the estimate satisfies the triangle inequality across
///   edges. The engine never reopens a finished node, which is only
///   guaranteed optimal when the heuristic is consistent as well.
///
/// Estimates must be non-negative. When in doubt, use [`ZeroHeuristic`]:
/// slower, but always correct for non-negative edge costs.
pub trait Heuristic<Id> {
    /// Returns a non-negative estimate of the cost remaining between `from`
    /// and `to`.
    fn estimate(&self, from: &Node<Id>, to: &Node<Id>) -> Cost;
}

/// The default heuristic: estimates 0 everywhere.
///
/// Degrades the engine to plain Dijkstra search, which is optimal for any
/// graph with non-negative edge costs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ZeroHeuristic;

impl<Id> Heuristic<Id> for ZeroHeuristic {
    fn estimate(&self, _from: &Node<Id>, _to: &Node<Id>) -> Cost {
        0.0
    }
}

/// Adapter that turns a plain closure into a [`Heuristic`].
///
/// ```
/// use pathseeker::{FnHeuristic, Heuristic, Node};
///
/// let manhattan = FnHeuristic(|from: &Node<(i32, i32)>, to: &Node<(i32, i32)>| {
///     ((from.id.0 - to.id.0).abs() + (from.id.1 - to.id.1).abs()) as f64
/// });
///
/// let estimate = manhattan.estimate(&Node::new((0, 0), 0.0), &Node::new((2, 3), 0.0));
/// assert_eq!(estimate, 5.0);
/// ```
#[derive(Clone, Copy)]
pub struct FnHeuristic<F>(pub F);

impl<Id, F> Heuristic<Id> for FnHeuristic<F>
where
    F: Fn(&Node<Id>, &Node<Id>) -> Cost,
{
    fn estimate(&self, from: &Node<Id>, to: &Node<Id>) -> Cost {
        (self.0)(from, to)
    }
}

impl<F> fmt::Debug for FnHeuristic<F> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str("FnHeuristic")
    }
}
