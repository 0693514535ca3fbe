use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::core::{self, Create, Edge, Graph, Node, Props, Weight};

/// Creates a path `v0 - v1 - ... - v(n-1)` with every edge of cost `cost`.
pub fn create_path<W, G>(props: Props, vertex_count: usize, cost: W) -> (G, Vec<Node>)
where
    W: Weight,
    G: Create<W>,
{
    let mut graph = G::with_props(props);
    let nodes = create_nodes(vertex_count);

    graph
        .add_vertices(&nodes)
        .expect("fresh nodes are not in the graph");

    for pair in nodes.windows(2) {
        graph
            .add_weighted_edge(&pair[0], &pair[1], cost)
            .expect("endpoints were added");
    }

    (graph, nodes)
}

/// Creates a complete graph without self-loops.
pub fn create_complete<W, G>(props: Props, vertex_count: usize, cost: W) -> (G, Vec<Node>)
where
    W: Weight,
    G: Create<W>,
{
    let mut graph = G::with_props(props);
    let nodes = create_nodes(vertex_count);

    graph
        .add_vertices(&nodes)
        .expect("fresh nodes are not in the graph");

    for (i, u) in nodes.iter().enumerate() {
        graph
            .add_edges_from(u, &nodes[i + 1..], cost, true)
            .expect("endpoints were added");
    }

    (graph, nodes)
}

/// Nodes labeled `v0`, `v1`, ...
pub fn create_nodes(count: usize) -> Vec<Node> {
    (0..count).map(|i| Node::new(format!("v{i}"))).collect()
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("vertex count ({0}) is not equal to the size of vertex set ({1})")]
    VertexCountMismatch(usize, usize),
    #[error("edge count ({0}) is not equal to the size of edge set ({1})")]
    EdgeCountMismatch(usize, usize),
    #[error("edge {0} has an endpoint outside of the vertex set")]
    DanglingEdge(String),
    #[error("edge {0} does not match the weighted flag")]
    CostMismatch(String),
    #[error("edge {0} is not reported by the source vertex")]
    MissingOutgoing(String),
    #[error("edge {0} is not reported as incoming by the destination vertex")]
    MissingIncoming(String),
    #[error("mirror of undirected edge {0} is not reported by the destination vertex")]
    MissingMirror(String),
    #[error("sum of degrees ({0}) does not match the edge count ({1})")]
    HandshakingLemma(usize, usize),
}

/// Verifies that the views a graph offers agree with each other.
pub fn check_consistency<W, G>(graph: &G) -> Result<(), ConsistencyCheckError>
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    let vertices = graph.vertices();

    if graph.vertex_count() != vertices.len() {
        return Err(ConsistencyCheckError::VertexCountMismatch(
            graph.vertex_count(),
            vertices.len(),
        ));
    }

    let edges = graph.edges();

    if graph.edge_count() != edges.len() {
        return Err(ConsistencyCheckError::EdgeCountMismatch(
            graph.edge_count(),
            edges.len(),
        ));
    }

    for edge in edges.iter() {
        let (from, to) = edge.endpoints();

        if !vertices.contains(from) || !vertices.contains(to) {
            return Err(ConsistencyCheckError::DanglingEdge(edge.to_string()));
        }

        if edge.cost().is_some() != graph.is_weighted() {
            return Err(ConsistencyCheckError::CostMismatch(edge.to_string()));
        }

        if !reported(graph.get_edges(from), edge) {
            return Err(ConsistencyCheckError::MissingOutgoing(edge.to_string()));
        }

        if graph.is_directed() {
            if !reported(graph.incoming_edges(to), edge) {
                return Err(ConsistencyCheckError::MissingIncoming(edge.to_string()));
            }
        } else if !reported(graph.get_edges(to), &edge.reversed()) {
            return Err(ConsistencyCheckError::MissingMirror(edge.to_string()));
        }
    }

    let degree_sum = vertices
        .iter()
        .map(|v| graph.get_edges(v).map(|edges| edges.len()).unwrap_or(0))
        .sum::<usize>();

    let expected = if graph.is_directed() {
        edges.len()
    } else {
        // A self-loop is reported once by its only endpoint.
        let loops = edges.iter().filter(|edge| edge.from() == edge.to()).count();
        2 * edges.len() - loops
    };

    if degree_sum != expected {
        return Err(ConsistencyCheckError::HandshakingLemma(degree_sum, expected));
    }

    if graph.is_directed() {
        let in_degree_sum = vertices
            .iter()
            .map(|v| graph.incoming_edges(v).map(|edges| edges.len()).unwrap_or(0))
            .sum::<usize>();

        if in_degree_sum != expected {
            return Err(ConsistencyCheckError::HandshakingLemma(in_degree_sum, expected));
        }
    }

    Ok(())
}

fn reported<W: Weight>(edges: Result<FxHashSet<Edge<W>>, core::Error>, edge: &Edge<W>) -> bool {
    edges.map(|edges| edges.contains(edge)).unwrap_or(false)
}
