use fixedbitset::FixedBitSet;

use crate::{
    common::NodeIndexMap,
    core::{Graph, Weight},
};

use super::{require, Error, Requirement};

/// Returns whether every vertex of an undirected graph can be reached from
/// every other vertex.
///
/// An empty graph is connected. Fails if the graph is directed.
pub fn is_connected_graph<W, G>(graph: &G) -> Result<bool, Error>
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    require(graph, Requirement::Undirected)?;

    let mut nodes = graph.vertices().into_iter().collect::<Vec<_>>();
    // Start from the oldest vertex so that the traversal is reproducible.
    nodes.sort_unstable();

    let map = NodeIndexMap::from_nodes(nodes);
    let Some(start) = map.to_node(0) else {
        return Ok(true);
    };

    let mut visited = FixedBitSet::with_capacity(map.len());
    let mut stack = vec![start.clone()];
    let mut count = 0;

    visited.insert(0);

    while let Some(vertex) = stack.pop() {
        count += 1;

        for edge in graph.get_edges(&vertex)? {
            let next = edge.to();
            let Some(index) = map.to_index(next) else {
                continue;
            };

            if !visited.put(index) {
                stack.push(next.clone());
            }
        }
    }

    tracing::debug!(
        visited = count,
        vertices = map.len(),
        "connectivity check finished"
    );

    Ok(count == map.len())
}
