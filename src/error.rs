//! Error types surfaced by the engine and by [`Path`](crate::Path) accessors.

use std::fmt;
use thiserror::Error;

/// Result type for fallible engine and path operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Which endpoint of a search failed to resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// the start identifier passed to `find`
    Start,
    /// the destination identifier passed to `find`
    Destination,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Endpoint::Start => fmt.write_str("start"),
            Endpoint::Destination => fmt.write_str("destination"),
        }
    }
}

/// Errors raised by this crate.
///
/// None of these are retried internally; every failure is surfaced once,
/// synchronously or through the pending result of a detached search.
/// Cancellation and "no route exists" are *not* errors — both yield the
/// empty [`Path`](crate::Path) sentinel.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The start or destination identifier did not resolve in the graph.
    /// Raised before the search loop begins.
    #[error("{0} node not found in the graph")]
    NotFound(Endpoint),

    /// An index outside the node sequence was passed to
    /// [`Path::cost_at`](crate::Path::cost_at).
    #[error("index {index} out of bounds for a path of {len} nodes")]
    OutOfBounds {
        /// the requested index
        index: usize,
        /// the number of nodes in the path
        len: usize,
    },
}
