//! Graph abstract data type with interchangeable storages.
//!
//! A graph is created either as an [adjacency list](storage::AdjList) or as
//! an [adjacency matrix](storage::AdjMatrix), both directed or undirected and
//! weighted or unweighted. Both storages implement the same
//! [`Graph`](core::Graph) trait and give the same answers, so the
//! [algorithms](algo) work with either of them.
//!
//! Vertices are [`Node`](core::Node) handles compared by identity, not by
//! their label.
//!
//! # Examples
//!
//! ```
//! use adjgraph::prelude::*;
//!
//! let mut graph = AdjMatrix::<u32>::new_undirected();
//!
//! let prague = Node::new("Prague");
//! let vienna = Node::new("Vienna").with_attr("population", 2_000_000);
//! let munich = Node::new("Munich");
//!
//! graph
//!     .add_vertices(&[prague.clone(), vienna.clone(), munich.clone()])
//!     .unwrap();
//! graph
//!     .add_edges_from(&vienna, &[prague.clone(), munich.clone()], 0, false)
//!     .unwrap();
//!
//! assert!(is_connected_graph(&graph).unwrap());
//! assert_eq!(approx_vertex_cover(&graph).unwrap().len(), 2);
//!
//! graph.remove_vertex(&vienna);
//! assert!(!is_connected_graph(&graph).unwrap());
//! ```

pub mod algo;
pub mod common;
pub mod core;
pub mod infra;
pub mod storage;

pub mod prelude {
    pub use crate::{
        algo::{
            approx_vertex_cover, is_connected_graph, is_dag, shortest_path, topological_order,
            ShortestPath,
        },
        core::{Create, Edge, Graph, Node, Props},
        storage::{AdjList, AdjMatrix},
    };
}
