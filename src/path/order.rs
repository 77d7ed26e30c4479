//! Comparator helpers for ranking collected paths.
//!
//! Convenience for callers that gather many [`Path`] results and want to
//! sort them; both helpers read only the total cost and the node count.

use super::Path;
use std::cmp::Ordering;

/// Orders paths by total cost, cheapest first.
///
/// ```
/// use pathseeker::{path::order, Node, Path};
///
/// let mut results = vec![
///     Path::new(vec![Node::new('a', 0.0), Node::new('b', 9.0)], 9.0),
///     Path::new(vec![Node::new('a', 0.0), Node::new('c', 4.0)], 4.0),
/// ];
/// results.sort_by(order::by_cost);
///
/// assert_eq!(results[0].cost(), 4.0);
/// ```
pub fn by_cost<Id>(a: &Path<Id>, b: &Path<Id>) -> Ordering {
    a.cost().total_cmp(&b.cost())
}

/// Orders paths by node count, shortest first.
pub fn by_length<Id>(a: &Path<Id>, b: &Path<Id>) -> Ordering {
    a.len().cmp(&b.len())
}
