mod common;

use adjgraph::{
    algo,
    core::Props,
    storage::{AdjList, AdjMatrix},
};
use common::{random_graph, RANDOM_SEED};
use fastrand::Rng;

fn main() {
    divan::main();
}

#[divan::bench(consts = [100, 1000], args = [0.25, 0.75])]
fn adj_list_dijkstra_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let (graph, nodes) = random_graph::<AdjList>(
        Props::directed().weighted(),
        N,
        density,
        &mut Rng::with_seed(RANDOM_SEED),
    );

    bencher.bench_local(|| algo::shortest_path(&graph, &nodes[0], &nodes[N - 1]));
}

#[divan::bench(consts = [100, 1000], args = [0.25, 0.75])]
fn adj_matrix_dijkstra_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let (graph, nodes) = random_graph::<AdjMatrix>(
        Props::directed().weighted(),
        N,
        density,
        &mut Rng::with_seed(RANDOM_SEED),
    );

    bencher.bench_local(|| algo::shortest_path(&graph, &nodes[0], &nodes[N - 1]));
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.25])]
fn adj_list_kahn_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let (graph, _) = random_graph::<AdjList>(
        Props::directed(),
        N,
        density,
        &mut Rng::with_seed(RANDOM_SEED),
    );

    bencher.bench_local(|| algo::is_dag(&graph));
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.25])]
fn adj_list_vertex_cover_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let (graph, _) = random_graph::<AdjList>(
        Props::undirected(),
        N,
        density,
        &mut Rng::with_seed(RANDOM_SEED),
    );

    bencher.bench_local(|| algo::approx_vertex_cover(&graph));
}
