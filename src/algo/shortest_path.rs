//! Single pair shortest path using [Dijkstra's algorithm].
//!
//! The vertex with the minimum tentative distance is found by a linear scan,
//! giving _O(V²)_ time without any priority queue. This is optimal for dense
//! graphs and keeps the implementation independent of the storage.
//!
//! [Dijkstra's algorithm]: https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm

use fixedbitset::FixedBitSet;

use crate::{
    common::NodeIndexMap,
    core::{Edge, Graph, Node, Weight},
};

use super::{require, Error, Requirement};

/// Shortest path between two vertices and its total distance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath<W> {
    edges: Vec<Edge<W>>,
    // `None` if the end vertex is not reachable.
    distance: Option<W>,
}

impl<W: Weight> ShortestPath<W> {
    fn unreachable() -> Self {
        Self {
            edges: Vec::new(),
            distance: None,
        }
    }

    /// Returns `false` if there is no path, in which case the path is empty
    /// and the distance is [`Weight::inf`].
    ///
    /// A reachable vertex may still have a distance equal to
    /// [`Weight::inf`], so this is the only reliable test.
    pub fn is_reachable(&self) -> bool {
        self.distance.is_some()
    }

    /// Edges on the path, in order from the start vertex. Empty if the start
    /// and end vertices are the same.
    pub fn path(&self) -> &[Edge<W>] {
        &self.edges
    }

    pub fn distance(&self) -> W {
        self.distance.unwrap_or_else(W::inf)
    }

    pub fn into_parts(self) -> (Vec<Edge<W>>, W) {
        let distance = self.distance();
        (self.edges, distance)
    }
}

/// Finds the shortest path from `start` to `end` in a directed weighted graph.
///
/// Fails if the graph is not directed and weighted, if either vertex is not
/// in the graph, if an edge with a negative cost is encountered, or if a
/// tentative distance does not fit into `W`.
pub fn shortest_path<W, G>(graph: &G, start: &Node, end: &Node) -> Result<ShortestPath<W>, Error>
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    require(graph, Requirement::DirectedWeighted)?;

    for node in [start, end] {
        if !graph.contains_vertex(node) {
            return Err(Error::VertexNotFound(node.id()));
        }
    }

    let mut nodes = graph.vertices().into_iter().collect::<Vec<_>>();
    nodes.sort_unstable();

    let map = NodeIndexMap::from_nodes(nodes);
    let n = map.len();

    // Membership was checked above.
    let (Some(source), Some(goal)) = (map.to_index(start), map.to_index(end)) else {
        return Err(Error::VertexNotFound(start.id()));
    };

    // `None` for vertices not reached yet.
    let mut dist: Vec<Option<W>> = vec![None; n];
    let mut pred: Vec<Option<Edge<W>>> = vec![None; n];
    let mut visited = FixedBitSet::with_capacity(n);

    dist[source] = Some(W::zero());

    loop {
        // Everything left unvisited is unreachable if nothing is found.
        let Some((current, current_dist)) = (0..n)
            .filter(|&i| !visited.contains(i))
            .filter_map(|i| dist[i].map(|d| (i, d)))
            .min_by_key(|&(_, d)| d)
        else {
            break;
        };

        visited.insert(current);

        if current == goal {
            break;
        }

        let vertex = map
            .to_node(current)
            .ok_or(Error::VertexNotFound(start.id()))?;

        for edge in graph.get_edges(vertex)? {
            let cost = edge.cost().unwrap_or_else(W::zero);

            if !W::is_unsigned() && cost < W::zero() {
                return Err(Error::NegativeWeight);
            }

            let Some(next) = map.to_index(edge.to()) else {
                continue;
            };

            if visited.contains(next) {
                continue;
            }

            let next_dist = current_dist
                .checked_add(cost)
                .ok_or(Error::DistanceOverflow)?;

            // Relaxation.
            if dist[next].map_or(true, |d| next_dist < d) {
                tracing::trace!(edge = %edge, dist = %next_dist, "relaxed");
                dist[next] = Some(next_dist);
                pred[next] = Some(edge);
            }
        }
    }

    let Some(distance) = dist[goal] else {
        tracing::debug!(start = %start.id(), end = %end.id(), "end vertex not reachable");
        return Ok(ShortestPath::unreachable());
    };

    let mut edges = Vec::new();
    let mut current = goal;

    while let Some(edge) = &pred[current] {
        edges.push(edge.clone());
        current = map
            .to_index(edge.from())
            .ok_or(Error::VertexNotFound(edge.from().id()))?;
    }

    edges.reverse();

    tracing::debug!(
        start = %start.id(),
        end = %end.id(),
        distance = %distance,
        hops = edges.len(),
        "shortest path found"
    );

    Ok(ShortestPath {
        edges,
        distance: Some(distance),
    })
}
