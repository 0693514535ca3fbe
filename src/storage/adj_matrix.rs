//! Dense storage based on a square cost matrix.
//!
//! Vertices are mapped to a dense range of matrix indices `0..n`. Removing a
//! vertex deletes its row and column and renumbers all vertices after it, so
//! the range stays contiguous.

use std::fmt;

use rustc_hash::FxHashSet;

use crate::{
    common::{Matrix, NodeIndexMap},
    core::{check_membership, fmt_graph, Create, Edge, Error, Graph, Node, Props, Weight},
};

#[derive(Debug, Clone)]
pub struct AdjMatrix<W = u32> {
    props: Props,
    matrix: Matrix<W>,
    index: NodeIndexMap,
}

impl<W: Weight> AdjMatrix<W> {
    pub fn new(directed: bool, weighted: bool) -> Self {
        Self::with_props(Props::new(directed, weighted))
    }

    /// Copy of the cost matrix. Rows and columns are ordered by
    /// [`index_of`](AdjMatrix::index_of). Cells of unweighted graphs hold
    /// [`Weight::one`].
    pub fn matrix(&self) -> Vec<Vec<Option<W>>> {
        self.matrix.to_rows()
    }

    /// Row and column index of the vertex in the cost matrix.
    pub fn index_of(&self, node: &Node) -> Option<usize> {
        self.index.to_index(node)
    }

    fn node_at(&self, index: usize) -> &Node {
        self.index
            .to_node(index)
            .expect("matrix and index map are out of sync")
    }

    fn edge(&self, from: usize, to: usize, cost: W) -> Edge<W> {
        let cost = self.props.weighted.then_some(cost);
        Edge::new(self.node_at(from).clone(), self.node_at(to).clone(), cost)
    }

    fn require(&self, node: &Node) -> Result<usize, Error> {
        self.index
            .to_index(node)
            .ok_or_else(|| Error::NotInGraph(node.id()))
    }

    fn row_edges(&self, row: usize) -> impl Iterator<Item = Edge<W>> + '_ {
        self.matrix
            .row(row)
            .map(move |(col, cost)| self.edge(row, col, cost))
    }
}

impl<W: Weight> Default for AdjMatrix<W> {
    fn default() -> Self {
        Self::with_props(Props::default())
    }
}

impl<W: Weight> Create<W> for AdjMatrix<W> {
    fn with_props(props: Props) -> Self {
        Self {
            props,
            matrix: Matrix::new(),
            index: NodeIndexMap::new(),
        }
    }
}

impl<W: Weight> Graph<W> for AdjMatrix<W> {
    fn props(&self) -> Props {
        self.props
    }

    fn vertices(&self) -> FxHashSet<Node> {
        self.index.nodes().cloned().collect()
    }

    fn contains_vertex(&self, node: &Node) -> bool {
        self.index.contains(node)
    }

    fn vertex_count(&self) -> usize {
        self.index.len()
    }

    fn edges(&self) -> FxHashSet<Edge<W>> {
        let edges = (0..self.matrix.size()).flat_map(|row| self.row_edges(row));

        if self.props.directed {
            edges.collect()
        } else {
            edges.map(Edge::canonical).collect()
        }
    }

    fn get_edges(&self, node: &Node) -> Result<FxHashSet<Edge<W>>, Error> {
        let row = self.require(node)?;
        Ok(self.row_edges(row).collect())
    }

    fn incoming_edges(&self, node: &Node) -> Result<FxHashSet<Edge<W>>, Error> {
        if !self.props.directed {
            return self.get_edges(node);
        }

        let col = self.require(node)?;
        Ok(self
            .matrix
            .col(col)
            .map(|(row, cost)| self.edge(row, col, cost))
            .collect())
    }

    fn add_vertices(&mut self, nodes: &[Node]) -> Result<(), Error> {
        let mut seen = FxHashSet::default();
        for node in nodes {
            if self.contains_vertex(node) || !seen.insert(node) {
                return Err(Error::AlreadyInGraph(node.id()));
            }
        }

        for node in nodes {
            self.index.insert(node.clone());
        }

        self.matrix.grow_by(nodes.len());
        debug_assert_eq!(self.index.len(), self.matrix.size());

        tracing::debug!(
            count = nodes.len(),
            size = self.matrix.size(),
            "added vertices to adjacency matrix"
        );
        Ok(())
    }

    fn add_edges_from(
        &mut self,
        from: &Node,
        to: &[Node],
        cost: W,
        reverse: bool,
    ) -> Result<(), Error> {
        let src = self.require(from)?;
        check_membership::<W, _>(self, &to.iter().collect::<Vec<_>>())?;

        let value = if self.props.weighted { cost } else { W::one() };

        for dst in to.iter().filter_map(|node| self.index.to_index(node)) {
            self.matrix.set(src, dst, value);

            if !self.props.directed || reverse {
                self.matrix.set(dst, src, value);
            }
        }

        Ok(())
    }

    fn remove_vertex(&mut self, node: &Node) -> bool {
        let Some(removed) = self.index.remove(node) else {
            return false;
        };

        self.matrix.shrink(removed);

        tracing::debug!(
            node = %node.id(),
            index = removed,
            renumbered = self.index.len() - removed,
            "removed vertex from adjacency matrix"
        );
        true
    }

    fn remove_edge(&mut self, from: &Node, to: &Node) -> Result<bool, Error> {
        let src = self.require(from)?;
        let dst = self.require(to)?;

        if self.matrix.take(src, dst).is_none() {
            return Ok(false);
        }

        if !self.props.directed {
            self.matrix.take(dst, src);
        }

        Ok(true)
    }
}

impl<W: Weight> fmt::Display for AdjMatrix<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_graph::<W, _>(self, f)
    }
}
