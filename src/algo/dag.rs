use crate::{
    common::NodeIndexMap,
    core::{Graph, Node, Weight},
};

use super::{require, Error, Requirement};

/// Returns whether a directed graph has no cycle.
///
/// Self-loops are cycles. Fails if the graph is undirected.
pub fn is_dag<W, G>(graph: &G) -> Result<bool, Error>
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    Ok(topological_order(graph)?.is_some())
}

/// Orders the vertices of a directed graph so that every edge points forward,
/// using [Kahn's algorithm](https://en.wikipedia.org/wiki/Topological_sorting#Kahn's_algorithm).
///
/// Returns `None` if the graph contains a cycle. Fails if the graph is
/// undirected.
pub fn topological_order<W, G>(graph: &G) -> Result<Option<Vec<Node>>, Error>
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    require(graph, Requirement::Directed)?;

    let mut nodes = graph.vertices().into_iter().collect::<Vec<_>>();
    nodes.sort_unstable();

    let map = NodeIndexMap::from_nodes(nodes);
    let mut in_deg = Vec::with_capacity(map.len());
    // Does not need to be FIFO as the order of vertices with in degree 0 does
    // not matter.
    let mut queue = Vec::new();

    for (i, vertex) in map.nodes().enumerate() {
        let deg = graph.incoming_edges(vertex)?.len();
        in_deg.push(deg);

        if deg == 0 {
            queue.push(i);
        }
    }

    let mut order = Vec::with_capacity(map.len());

    while let Some(i) = queue.pop() {
        let Some(vertex) = map.to_node(i) else {
            continue;
        };

        for edge in graph.get_edges(vertex)? {
            let Some(j) = map.to_index(edge.to()) else {
                continue;
            };

            let deg = &mut in_deg[j];
            *deg -= 1;

            if *deg == 0 {
                queue.push(j);
            }
        }

        order.push(vertex.clone());
    }

    if order.len() == map.len() {
        tracing::debug!(vertices = order.len(), "graph is acyclic");
        Ok(Some(order))
    } else {
        tracing::debug!(
            sorted = order.len(),
            vertices = map.len(),
            "cycle detected"
        );
        Ok(None)
    }
}
