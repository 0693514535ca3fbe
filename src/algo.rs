//! Algorithms working on any storage through the [`Graph`] trait.
//!
//! Every algorithm first checks that the graph has the flags it requires and
//! fails with [`Error::InvalidPrecondition`] otherwise. The algorithms are
//! generic over `G: Graph<W> + ?Sized`, so they also accept trait objects.
//!
//! # Examples
//!
//! ```
//! use adjgraph::prelude::*;
//!
//! let mut graph = AdjList::<u32>::new(true, true);
//!
//! let a = Node::new("A");
//! let b = Node::new("B");
//! let c = Node::new("C");
//! graph.add_vertices(&[a.clone(), b.clone(), c.clone()]).unwrap();
//!
//! graph.add_weighted_edge(&a, &b, 1).unwrap();
//! graph.add_weighted_edge(&b, &c, 2).unwrap();
//! graph.add_weighted_edge(&a, &c, 5).unwrap();
//!
//! let path = shortest_path(&graph, &a, &c).unwrap();
//! assert_eq!(path.distance(), 3);
//! assert_eq!(path.path().len(), 2);
//!
//! assert!(is_dag(&graph).unwrap());
//! ```

use std::fmt;

use thiserror::Error;

use crate::core::{self, Graph, NodeId, Weight};

mod connected;
mod dag;
mod shortest_path;
mod vertex_cover;

pub use connected::is_connected_graph;
pub use dag::{is_dag, topological_order};
pub use shortest_path::{shortest_path, ShortestPath};
pub use vertex_cover::approx_vertex_cover;

/// The flags an algorithm needs the graph to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Directed,
    Undirected,
    DirectedWeighted,
}

impl Requirement {
    fn is_met<W: Weight, G: Graph<W> + ?Sized>(&self, graph: &G) -> bool {
        match self {
            Requirement::Directed => graph.is_directed(),
            Requirement::Undirected => !graph.is_directed(),
            Requirement::DirectedWeighted => graph.is_directed() && graph.is_weighted(),
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Requirement::Directed => f.write_str("directed"),
            Requirement::Undirected => f.write_str("undirected"),
            Requirement::DirectedWeighted => f.write_str("directed and weighted"),
        }
    }
}

/// The error encountered during an algorithm run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The graph does not have the flags the algorithm requires.
    #[error("graph must be {0}")]
    InvalidPrecondition(Requirement),

    /// A vertex the algorithm was asked about is not in the graph.
    #[error("vertex {0} not found")]
    VertexNotFound(NodeId),

    /// An edge with negative weight encountered.
    #[error("edge with negative weight encountered")]
    NegativeWeight,

    /// A path distance does not fit into the weight type.
    #[error("path distance overflows the weight type")]
    DistanceOverflow,

    /// The storage failed to answer a query.
    ///
    /// This error should not happen in normal circumstances. If it does, it
    /// indicates a bad implementation of the graph.
    #[error(transparent)]
    Graph(#[from] core::Error),
}

fn require<W, G>(graph: &G, requirement: Requirement) -> Result<(), Error>
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    if requirement.is_met(graph) {
        Ok(())
    } else {
        Err(Error::InvalidPrecondition(requirement))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            Error::InvalidPrecondition(Requirement::DirectedWeighted).to_string(),
            "graph must be directed and weighted"
        );
        assert_eq!(
            Error::InvalidPrecondition(Requirement::Undirected).to_string(),
            "graph must be undirected"
        );
    }
}
