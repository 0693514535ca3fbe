use thiserror::Error;

use super::node::NodeId;

/// The error returned by graph mutations and queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The operation referenced a vertex that is not a member of the graph.
    #[error("vertex {0} is not in the graph")]
    NotInGraph(NodeId),

    /// The vertex is already a member of the graph.
    #[error("vertex {0} is already in the graph")]
    AlreadyInGraph(NodeId),
}
