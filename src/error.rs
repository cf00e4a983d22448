use std::fmt::Debug;

use thiserror::Error;

/// Errors produced by graph operations.
///
/// Generic over the node id type so messages can name the offending node.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError<Id>
where
    Id: Debug,
{
    /// A named node is absent from the graph.
    #[error("node {0:?} is not present in the graph")]
    MissingNode(Id),

    /// `topological_sort` found at least one directed cycle.
    #[error("graph contains a directed cycle")]
    CycleDetected,

    /// `shortest_path` found no path from `from` to `to`.
    #[error("no path from {from:?} to {to:?}")]
    NotFound { from: Id, to: Id },

    /// A generator received an invalid argument (negative size, `p` outside `[0, 1]`, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
