#![allow(dead_code)]

use adjgraph::{
    core::{Create, Graph, Node, Props},
    infra::testing::create_nodes,
};
use fastrand::Rng;

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

/// Generates edges of a G(n, p) random graph with geometric skipping, so only
/// the edges actually produced are visited.
pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(vertex_bound: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: vertex_bound,
            p,
        }
    }

    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        let Self { v, w, .. } = self;
        let n = self.n;
        let p = self.p;

        if *v >= n {
            return None;
        }

        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

        while *w >= *v && *v < n {
            *w -= *v;
            *v += 1;
        }

        if *v < n {
            Some((*v, *w))
        } else {
            None
        }
    }
}

pub fn random_graph<G: Create>(
    props: Props,
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> (G, Vec<Node>) {
    let mut graph = G::with_props(props);
    let nodes = create_nodes(vertex_count);
    graph.add_vertices(&nodes).unwrap();

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        // Random orientation, the generator always yields u > v.
        let (u, v) = if props.directed && rng.bool() { (v, u) } else { (u, v) };
        graph
            .add_weighted_edge(&nodes[u], &nodes[v], rng.u32(1..100))
            .unwrap();
    }

    (graph, nodes)
}
