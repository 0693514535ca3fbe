//! Strategies generating sequences of graph mutations.
//!
//! Mutations address vertices by their position in a pool of nodes shared by
//! all graphs the sequence is applied to. The pool is not required to be in
//! the graph, so the sequences also exercise the failure paths.

use proptest::{collection::vec, prelude::*};

use crate::core::{Create, Error, Graph, Node, Props, Weight};

use super::testing::create_nodes;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutOp<W> {
    AddVertex(usize),
    RemoveVertex(usize),
    AddEdges(usize, Vec<usize>, W, bool),
    RemoveEdge(usize, usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutOpResult {
    AddVertex(Result<(), Error>),
    RemoveVertex(bool),
    AddEdges(Result<(), Error>),
    RemoveEdge(Result<bool, Error>),
}

impl<W: Weight> MutOp<W> {
    pub fn apply<G>(&self, graph: &mut G, pool: &[Node]) -> MutOpResult
    where
        G: Graph<W> + ?Sized,
    {
        let node = |index: &usize| &pool[*index % pool.len()];

        match self {
            MutOp::AddVertex(v) => MutOpResult::AddVertex(graph.add_vertex(node(v))),
            MutOp::RemoveVertex(v) => MutOpResult::RemoveVertex(graph.remove_vertex(node(v))),
            MutOp::AddEdges(src, dst, cost, reverse) => {
                let dst = dst.iter().map(|v| node(v).clone()).collect::<Vec<_>>();
                MutOpResult::AddEdges(graph.add_edges_from(node(src), &dst, *cost, *reverse))
            }
            MutOp::RemoveEdge(src, dst) => {
                MutOpResult::RemoveEdge(graph.remove_edge(node(src), node(dst)))
            }
        }
    }
}

/// A single mutation over a pool of `pool_size` nodes.
pub fn mut_op<S>(pool_size: usize, cost: S) -> impl Strategy<Value = MutOp<S::Value>>
where
    S: Strategy + Clone + 'static,
    S::Value: Weight,
{
    let index = 0..pool_size.max(1);

    // Insertions are more likely so that the graphs do not stay empty.
    prop_oneof![
        3 => index.clone().prop_map(MutOp::AddVertex),
        1 => index.clone().prop_map(MutOp::RemoveVertex),
        5 => (index.clone(), vec(index.clone(), 1..4), cost, any::<bool>())
            .prop_map(|(src, dst, cost, reverse)| MutOp::AddEdges(src, dst, cost, reverse)),
        2 => (index.clone(), index).prop_map(|(src, dst)| MutOp::RemoveEdge(src, dst)),
    ]
}

/// A sequence of at most `max_len` mutations.
pub fn mut_ops<S>(
    pool_size: usize,
    cost: S,
    max_len: usize,
) -> impl Strategy<Value = Vec<MutOp<S::Value>>>
where
    S: Strategy + Clone + 'static,
    S::Value: Weight,
{
    vec(mut_op(pool_size, cost), 0..=max_len)
}

/// Builds a graph by applying the mutations, ignoring their failures.
///
/// Returns the graph together with the node pool.
pub fn build<W, G>(props: Props, pool_size: usize, ops: &[MutOp<W>]) -> (G, Vec<Node>)
where
    W: Weight,
    G: Create<W>,
{
    let pool = create_nodes(pool_size.max(1));
    let mut graph = G::with_props(props);

    for op in ops {
        op.apply(&mut graph, &pool);
    }

    (graph, pool)
}

/// Strategy for arbitrary construction flags.
pub fn props() -> impl Strategy<Value = Props> {
    (any::<bool>(), any::<bool>()).prop_map(|(directed, weighted)| Props::new(directed, weighted))
}
