use std::{fmt, slice};

use rustc_hash::FxHashSet;

use super::{edge::Edge, error::Error, node::Node, props::Props, weight::Weight};

/// The capability set shared by all graph storages.
///
/// Algorithms in [`algo`](crate::algo) are written against this trait only,
/// so any storage can be plugged in. The trait is object safe.
///
/// All queries return freshly allocated sets which never alias the storage,
/// and all failing mutations leave the graph untouched.
pub trait Graph<W: Weight = u32> {
    fn props(&self) -> Props;

    fn is_directed(&self) -> bool {
        self.props().directed
    }

    fn is_weighted(&self) -> bool {
        self.props().weighted
    }

    /// Snapshot of the current vertex set.
    fn vertices(&self) -> FxHashSet<Node>;

    fn contains_vertex(&self, node: &Node) -> bool;

    fn vertex_count(&self) -> usize;

    /// All edges in the graph.
    ///
    /// In undirected graphs, every edge is reported once, oriented from the
    /// endpoint with the smaller [id](Node::id).
    fn edges(&self) -> FxHashSet<Edge<W>>;

    fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// Edges having `node` as their source. In undirected graphs, these are
    /// all edges incident to `node`, oriented away from it.
    fn get_edges(&self, node: &Node) -> Result<FxHashSet<Edge<W>>, Error>;

    /// Edges having `node` as their destination. In undirected graphs, this is
    /// the same as [`get_edges`](Graph::get_edges).
    fn incoming_edges(&self, node: &Node) -> Result<FxHashSet<Edge<W>>, Error>;

    /// Like [`get_edges`](Graph::get_edges), but returns `None` for vertices
    /// that are not in the graph.
    fn get(&self, node: &Node) -> Option<FxHashSet<Edge<W>>> {
        self.get_edges(node).ok()
    }

    fn contains_edge(&self, from: &Node, to: &Node) -> bool {
        self.get_edges(from)
            .map(|edges| edges.iter().any(|edge| edge.to() == to))
            .unwrap_or(false)
    }

    /// Inserts the vertices without any edges.
    ///
    /// Fails with [`Error::AlreadyInGraph`] if any of them is already a
    /// member (or is listed twice), in which case none is inserted.
    fn add_vertices(&mut self, nodes: &[Node]) -> Result<(), Error>;

    fn add_vertex(&mut self, node: &Node) -> Result<(), Error> {
        self.add_vertices(slice::from_ref(node))
    }

    /// Inserts an edge from `from` to every vertex in `to`.
    ///
    /// The `cost` is used only if the graph is weighted. If `reverse` is set
    /// and the graph is directed, the mirror edges are inserted too. Adding an
    /// edge that already exists replaces its cost.
    ///
    /// Fails with [`Error::NotInGraph`] if `from` or any destination is not a
    /// member, in which case no edge is inserted.
    fn add_edges_from(
        &mut self,
        from: &Node,
        to: &[Node],
        cost: W,
        reverse: bool,
    ) -> Result<(), Error>;

    /// Inserts an edge with the default (zero) cost.
    fn add_edge(&mut self, from: &Node, to: &Node) -> Result<(), Error> {
        self.add_edges_from(from, slice::from_ref(to), W::zero(), false)
    }

    fn add_weighted_edge(&mut self, from: &Node, to: &Node, cost: W) -> Result<(), Error> {
        self.add_edges_from(from, slice::from_ref(to), cost, false)
    }

    /// Removes the vertex and all edges incident to it. Returns `false` if the
    /// vertex is not in the graph.
    fn remove_vertex(&mut self, node: &Node) -> bool;

    /// Removes the edge between the two vertices, in both directions for
    /// undirected graphs. Returns whether anything was removed.
    fn remove_edge(&mut self, from: &Node, to: &Node) -> Result<bool, Error>;
}

/// Storages that can be constructed empty from the flags alone.
pub trait Create<W: Weight = u32>: Graph<W> + Sized {
    fn with_props(props: Props) -> Self;

    fn new_directed() -> Self {
        Self::with_props(Props::directed())
    }

    fn new_undirected() -> Self {
        Self::with_props(Props::undirected())
    }
}

pub(crate) fn check_membership<W, G>(graph: &G, nodes: &[&Node]) -> Result<(), Error>
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    match nodes.iter().find(|node| !graph.contains_vertex(node)) {
        Some(node) => Err(Error::NotInGraph(node.id())),
        None => Ok(()),
    }
}

/// Debugging representation shared by the storages. Not a stable format.
pub(crate) fn fmt_graph<W, G>(graph: &G, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    let mut vertices = graph.vertices().into_iter().collect::<Vec<_>>();
    vertices.sort_unstable();

    let mut edges = graph.edges().into_iter().collect::<Vec<_>>();
    edges.sort_unstable();

    writeln!(f, "{}", graph.props())?;
    write!(f, "Nodes={{{}}}", join(&vertices))?;
    write!(f, "\nEdges={{{}}}", join(&edges))
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
