mod common;

use adjgraph::{
    core::{Create, Graph, Props},
    storage::{AdjList, AdjMatrix},
};
use common::{random_graph, RandomEdges, RANDOM_SEED};
use fastrand::Rng;

fn main() {
    divan::main();
}

fn add_remove<G: Create>(props: Props, n: usize, density: f32) {
    let mut rng = Rng::with_seed(RANDOM_SEED);

    let (mut graph, nodes) = random_graph::<G>(props, n, density, &mut rng);

    for _ in 0..(n / 4) {
        let u = rng.usize(..nodes.len());
        graph.remove_vertex(&nodes[u]);
    }

    let mut edges = RandomEdges::new(n, density);

    while let Some((u, v)) = edges.next_edge(&mut rng) {
        let _ = graph.remove_edge(&nodes[u], &nodes[v]);
    }
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5, 0.95])]
fn adj_list_add_remove_directed<const N: usize>(density: f32) {
    add_remove::<AdjList>(Props::directed().weighted(), N, density);
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5, 0.95])]
fn adj_list_add_remove_undirected<const N: usize>(density: f32) {
    add_remove::<AdjList>(Props::undirected().weighted(), N, density);
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5, 0.95])]
fn adj_matrix_add_remove_directed<const N: usize>(density: f32) {
    add_remove::<AdjMatrix>(Props::directed().weighted(), N, density);
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5, 0.95])]
fn adj_matrix_add_remove_undirected<const N: usize>(density: f32) {
    add_remove::<AdjMatrix>(Props::undirected().weighted(), N, density);
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5])]
fn adj_list_neighbors<const N: usize>(bencher: divan::Bencher, density: f32) {
    let (graph, nodes) =
        random_graph::<AdjList>(Props::directed(), N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench_local(|| {
        nodes
            .iter()
            .map(|node| graph.get_edges(node).map(|edges| edges.len()).unwrap_or(0))
            .sum::<usize>()
    });
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5])]
fn adj_matrix_neighbors<const N: usize>(bencher: divan::Bencher, density: f32) {
    let (graph, nodes) =
        random_graph::<AdjMatrix>(Props::directed(), N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench_local(|| {
        nodes
            .iter()
            .map(|node| graph.get_edges(node).map(|edges| edges.len()).unwrap_or(0))
            .sum::<usize>()
    });
}
