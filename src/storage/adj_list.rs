//! Sparse storage based on per-vertex outgoing edges.
//!
//! Every vertex owns the edges that were inserted from it. A reverse-neighbor
//! index records, for each vertex, which vertices own an edge pointing at it.
//! Undirected edges are stored only once, in the direction they were inserted,
//! and the reverse-neighbor index is used to synthesize the mirror edges on
//! queries.

use std::fmt;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::{
    check_membership, fmt_graph, Create, Edge, Error, Graph, Node, Props, Weight,
};

#[derive(Debug, Clone)]
pub struct AdjList<W = u32> {
    props: Props,
    // Owner vertex -> (destination -> cost).
    adj: FxHashMap<Node, FxHashMap<Node, W>>,
    // Destination vertex -> owners of an edge pointing at it.
    rev: FxHashMap<Node, FxHashSet<Node>>,
}

impl<W: Weight> AdjList<W> {
    pub fn new(directed: bool, weighted: bool) -> Self {
        Self::with_props(Props::new(directed, weighted))
    }

    fn edge(&self, from: &Node, to: &Node, cost: W) -> Edge<W> {
        let cost = self.props.weighted.then_some(cost);
        Edge::new(from.clone(), to.clone(), cost)
    }

    fn outgoing(&self, node: &Node) -> impl Iterator<Item = Edge<W>> + '_ {
        let node = node.clone();
        self.adj
            .get(&node)
            .into_iter()
            .flatten()
            .map(move |(to, cost)| self.edge(&node, to, *cost))
    }

    /// Mirror edges of the edges pointing at `node` that are owned by other
    /// vertices, oriented away from `node`.
    fn mirrored(&self, node: &Node) -> impl Iterator<Item = Edge<W>> + '_ {
        let node = node.clone();
        self.rev
            .get(&node)
            .into_iter()
            .flatten()
            .filter_map(move |owner| {
                let cost = self.adj.get(owner)?.get(&node)?;
                Some(self.edge(&node, owner, *cost))
            })
    }

    fn insert(&mut self, from: &Node, to: &Node, cost: W) {
        if let Some(out) = self.adj.get_mut(from) {
            out.insert(to.clone(), cost);
        }

        if let Some(owners) = self.rev.get_mut(to) {
            owners.insert(from.clone());
        }
    }

    fn strip(&mut self, from: &Node, to: &Node) -> bool {
        let removed = self
            .adj
            .get_mut(from)
            .and_then(|out| out.remove(to))
            .is_some();

        if let Some(owners) = self.rev.get_mut(to) {
            owners.remove(from);
        }

        removed
    }
}

impl<W: Weight> Default for AdjList<W> {
    fn default() -> Self {
        Self::with_props(Props::default())
    }
}

impl<W: Weight> Create<W> for AdjList<W> {
    fn with_props(props: Props) -> Self {
        Self {
            props,
            adj: FxHashMap::default(),
            rev: FxHashMap::default(),
        }
    }
}

impl<W: Weight> Graph<W> for AdjList<W> {
    fn props(&self) -> Props {
        self.props
    }

    fn vertices(&self) -> FxHashSet<Node> {
        self.adj.keys().cloned().collect()
    }

    fn contains_vertex(&self, node: &Node) -> bool {
        self.adj.contains_key(node)
    }

    fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    fn edges(&self) -> FxHashSet<Edge<W>> {
        let edges = self
            .adj
            .iter()
            .flat_map(|(from, out)| out.iter().map(move |(to, cost)| self.edge(from, to, *cost)));

        if self.props.directed {
            edges.collect()
        } else {
            edges.map(Edge::canonical).collect()
        }
    }

    fn edge_count(&self) -> usize {
        self.adj.values().map(|out| out.len()).sum()
    }

    fn get_edges(&self, node: &Node) -> Result<FxHashSet<Edge<W>>, Error> {
        check_membership::<W, _>(self, &[node])?;

        if self.props.directed {
            Ok(self.outgoing(node).collect())
        } else {
            Ok(self.outgoing(node).chain(self.mirrored(node)).collect())
        }
    }

    fn incoming_edges(&self, node: &Node) -> Result<FxHashSet<Edge<W>>, Error> {
        if !self.props.directed {
            return self.get_edges(node);
        }

        check_membership::<W, _>(self, &[node])?;

        Ok(self.mirrored(node).map(|edge| edge.reversed()).collect())
    }

    fn add_vertices(&mut self, nodes: &[Node]) -> Result<(), Error> {
        let mut seen = FxHashSet::default();
        for node in nodes {
            if self.contains_vertex(node) || !seen.insert(node) {
                return Err(Error::AlreadyInGraph(node.id()));
            }
        }

        for node in nodes {
            self.adj.insert(node.clone(), FxHashMap::default());
            self.rev.insert(node.clone(), FxHashSet::default());
        }

        tracing::debug!(count = nodes.len(), "added vertices to adjacency list");
        Ok(())
    }

    fn add_edges_from(
        &mut self,
        from: &Node,
        to: &[Node],
        cost: W,
        reverse: bool,
    ) -> Result<(), Error> {
        check_membership::<W, _>(self, &[from])?;
        check_membership::<W, _>(self, &to.iter().collect::<Vec<_>>())?;

        for dst in to {
            if self.props.directed {
                self.insert(from, dst, cost);
                continue;
            }

            let stored_opposite = self
                .rev
                .get(from)
                .map(|owners| owners.contains(dst))
                .unwrap_or(false);

            if stored_opposite {
                // The edge already exists, owned by the other endpoint.
                self.insert(dst, from, cost);
            } else {
                self.insert(from, dst, cost);
            }
        }

        if self.props.directed && reverse {
            for dst in to {
                self.insert(dst, from, cost);
            }
        }

        Ok(())
    }

    fn remove_vertex(&mut self, node: &Node) -> bool {
        let Some(out) = self.adj.remove(node) else {
            return false;
        };
        let owners = self.rev.remove(node).unwrap_or_default();

        for owner in &owners {
            if let Some(owner_out) = self.adj.get_mut(owner) {
                owner_out.remove(node);
            }
        }

        for dst in out.keys() {
            if let Some(dst_owners) = self.rev.get_mut(dst) {
                dst_owners.remove(node);
            }
        }

        tracing::debug!(
            node = %node.id(),
            outgoing = out.len(),
            incoming = owners.len(),
            "removed vertex from adjacency list"
        );
        true
    }

    fn remove_edge(&mut self, from: &Node, to: &Node) -> Result<bool, Error> {
        check_membership::<W, _>(self, &[from, to])?;

        let removed = self.strip(from, to);

        if self.props.directed {
            Ok(removed)
        } else {
            let removed_opposite = self.strip(to, from);
            Ok(removed || removed_opposite)
        }
    }
}

impl<W: Weight> fmt::Display for AdjList<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_graph::<W, _>(self, f)
    }
}
