use std::fmt;

use super::{node::Node, weight::Weight};

/// An edge as reported by a graph.
///
/// Edges are not stored as objects; graphs synthesize them on every query.
/// `cost` is `Some` exactly when the edge comes from a weighted graph, and it
/// takes part in comparisons, so `(A -> B, 1)` and `(A -> B, 2)` differ.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge<W = u32> {
    from: Node,
    to: Node,
    cost: Option<W>,
}

impl<W: Weight> Edge<W> {
    pub fn new(from: Node, to: Node, cost: Option<W>) -> Self {
        Self { from, to, cost }
    }

    pub fn unweighted(from: Node, to: Node) -> Self {
        Self::new(from, to, None)
    }

    pub fn weighted(from: Node, to: Node, cost: W) -> Self {
        Self::new(from, to, Some(cost))
    }

    pub fn from(&self) -> &Node {
        &self.from
    }

    pub fn to(&self) -> &Node {
        &self.to
    }

    pub fn cost(&self) -> Option<W> {
        self.cost
    }

    pub fn endpoints(&self) -> (&Node, &Node) {
        (&self.from, &self.to)
    }

    /// Returns `true` if the edge starts or ends in `node`.
    pub fn touches(&self, node: &Node) -> bool {
        &self.from == node || &self.to == node
    }

    /// The same edge with swapped endpoints.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.to.clone(), self.from.clone(), self.cost)
    }

    /// Orients the edge from the endpoint with the smaller id. Used to report
    /// every undirected edge exactly once, independently of the storage.
    #[must_use]
    pub(crate) fn canonical(self) -> Self {
        if self.to < self.from {
            self.reversed()
        } else {
            self
        }
    }
}

impl<W: Weight> fmt::Display for Edge<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cost {
            Some(cost) => write!(f, "({} -> {}, {})", self.from, self.to, cost),
            None => write!(f, "({} -> {})", self.from, self.to),
        }
    }
}
