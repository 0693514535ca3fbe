use rustc_hash::FxHashSet;

use crate::core::{Graph, Node, Weight};

use super::{require, Error, Requirement};

/// Finds a vertex cover of an undirected graph at most twice as large as the
/// minimum one.
///
/// Repeatedly picks an edge not covered yet and adds both its endpoints to
/// the cover. The picked edges form a maximal matching, and any cover must
/// contain at least one endpoint of each of them. Fails if the graph is
/// directed.
pub fn approx_vertex_cover<W, G>(graph: &G) -> Result<FxHashSet<Node>, Error>
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    require(graph, Requirement::Undirected)?;

    let mut edges = graph.edges().into_iter().collect::<Vec<_>>();
    edges.sort_unstable();

    let mut cover = FxHashSet::default();

    for edge in edges {
        let (from, to) = edge.endpoints();

        if cover.contains(from) || cover.contains(to) {
            continue;
        }

        tracing::trace!(edge = %edge, "picked");
        cover.insert(from.clone());
        cover.insert(to.clone());
    }

    tracing::debug!(
        cover = cover.len(),
        vertices = graph.vertex_count(),
        "vertex cover found"
    );

    Ok(cover)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use crate::{
        core::{Create, Props},
        infra::testing::{create_complete, create_path},
        storage::{AdjList, AdjMatrix},
    };

    use super::*;

    fn assert_covers<G: Graph + ?Sized>(graph: &G, cover: &FxHashSet<Node>) {
        for edge in graph.edges() {
            assert!(
                cover.contains(edge.from()) || cover.contains(edge.to()),
                "{edge} is not covered"
            );
        }
        assert!(cover.iter().all(|node| graph.contains_vertex(node)));
    }

    fn test_star<G: Create>() {
        let center = Node::new("center");
        let leaves = ["A", "B", "C", "D", "E"].map(Node::new).to_vec();

        let mut graph = G::new_undirected();
        graph.add_vertex(&center).unwrap();
        graph.add_vertices(&leaves).unwrap();
        graph.add_edges_from(&center, &leaves, 0, false).unwrap();

        let cover = approx_vertex_cover(&graph).unwrap();

        assert_covers(&graph, &cover);
        // Optimum is the center alone.
        assert_eq!(cover.len(), 2);
        assert!(cover.contains(&center));
    }

    #[test]
    fn star_list() {
        test_star::<AdjList>();
    }

    #[test]
    fn star_matrix() {
        test_star::<AdjMatrix>();
    }

    #[test]
    fn no_edges() {
        let mut graph = AdjList::<u32>::new_undirected();
        graph.add_vertex(&Node::new("A")).unwrap();

        assert_eq!(approx_vertex_cover(&graph), Ok(FxHashSet::default()));
    }

    #[test]
    fn path_and_complete() {
        let (graph, _) = create_path::<u32, AdjMatrix>(Props::undirected(), 7, 0);
        let cover = approx_vertex_cover(&graph).unwrap();
        assert_covers(&graph, &cover);
        // Optimum is 3.
        assert!(cover.len() <= 6);

        let (graph, _) = create_complete::<u32, AdjList>(Props::undirected(), 5, 0);
        let cover = approx_vertex_cover(&graph).unwrap();
        assert_covers(&graph, &cover);
        assert!(cover.len() >= 4);
    }

    #[test]
    fn self_loop() {
        let a = Node::new("A");
        let mut graph = AdjMatrix::<u32>::new_undirected();
        graph.add_vertex(&a).unwrap();
        graph.add_edge(&a, &a).unwrap();

        let cover = approx_vertex_cover(&graph).unwrap();
        assert_eq!(cover, [a].into_iter().collect::<FxHashSet<_>>());
    }

    #[test]
    fn directed_rejected() {
        let graph = AdjMatrix::<u32>::new_directed();
        assert_matches!(
            approx_vertex_cover(&graph),
            Err(Error::InvalidPrecondition(Requirement::Undirected))
        );
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_vertex_cover_valid(ops in crate::infra::proptest::mut_ops(10, Just(0u32), 60)) {
            let (graph, _) = crate::infra::proptest::build::<_, AdjList<u32>>(Props::undirected(), 10, &ops);
            let cover = approx_vertex_cover(&graph).unwrap();

            for edge in graph.edges() {
                prop_assert!(cover.contains(edge.from()) || cover.contains(edge.to()));
            }

            // Picked edges are disjoint, so the cover has an even size unless
            // a self-loop was picked.
            let loops = graph.edges().iter().any(|edge| edge.from() == edge.to());
            prop_assert!(loops || cover.len() % 2 == 0);
        }
    }
}
