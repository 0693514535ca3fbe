use rustc_hash::FxHashMap;

use crate::core::Node;

/// Bijection between vertices and a contiguous sequence of indices `0..n`.
///
/// Both directions are _O(1)_. Removal keeps the indices dense by shifting
/// every index greater than the removed one down by one, which is _O(n)_.
///
/// The adjacency matrix uses this mapping to address its rows and columns.
/// Algorithms use it to work with plain vectors and bit sets instead of hash
/// maps keyed by nodes.
#[derive(Debug, Clone, Default)]
pub struct NodeIndexMap {
    index: FxHashMap<Node, usize>,
    nodes: Vec<Node>,
}

impl NodeIndexMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns indices to the nodes in the order of the iterator. Duplicate
    /// nodes keep the first index.
    pub fn from_nodes<I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        let mut map = Self::new();
        for node in nodes {
            map.insert(node);
        }
        map
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, node: &Node) -> bool {
        self.index.contains_key(node)
    }

    /// Assigns the next free index to the node, or returns the index it
    /// already has.
    pub fn insert(&mut self, node: Node) -> usize {
        if let Some(&index) = self.index.get(&node) {
            return index;
        }

        let index = self.nodes.len();
        self.index.insert(node.clone(), index);
        self.nodes.push(node);
        index
    }

    pub fn to_index(&self, node: &Node) -> Option<usize> {
        self.index.get(node).copied()
    }

    pub fn to_node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// Removes the node and returns the index it had.
    pub fn remove(&mut self, node: &Node) -> Option<usize> {
        let removed = self.index.remove(node)?;
        self.nodes.remove(removed);

        for (index, node) in self.nodes.iter().enumerate().skip(removed) {
            tracing::trace!(node = %node.id(), from = index + 1, to = index, "renumbering");
            self.index.insert(node.clone(), index);
        }

        Some(removed)
    }

    /// Nodes in the order of their indices.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes(n: usize) -> Vec<Node> {
        (0..n).map(Node::new).collect()
    }

    #[test]
    fn indices_are_assigned_in_order() {
        let nodes = nodes(4);
        let map = NodeIndexMap::from_nodes(nodes.iter().cloned());

        for (i, node) in nodes.iter().enumerate() {
            assert_eq!(map.to_index(node), Some(i));
            assert_eq!(map.to_node(i), Some(node));
        }

        assert_eq!(map.len(), 4);
    }

    #[test]
    fn insert_existing_keeps_index() {
        let nodes = nodes(2);
        let mut map = NodeIndexMap::from_nodes(nodes.iter().cloned());

        assert_eq!(map.insert(nodes[0].clone()), 0);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn remove_compacts() {
        let nodes = nodes(5);
        let mut map = NodeIndexMap::from_nodes(nodes.iter().cloned());

        assert_eq!(map.remove(&nodes[1]), Some(1));

        assert_eq!(map.len(), 4);
        assert_eq!(map.to_index(&nodes[0]), Some(0));
        assert_eq!(map.to_index(&nodes[1]), None);
        assert_eq!(map.to_index(&nodes[2]), Some(1));
        assert_eq!(map.to_index(&nodes[4]), Some(3));
        assert_eq!(map.to_node(3), Some(&nodes[4]));
        assert_eq!(map.to_node(4), None);
    }

    #[test]
    fn remove_absent() {
        let nodes = nodes(2);
        let mut map = NodeIndexMap::from_nodes(nodes.iter().take(1).cloned());

        assert_eq!(map.remove(&nodes[1]), None);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn remove_last() {
        let nodes = nodes(3);
        let mut map = NodeIndexMap::from_nodes(nodes.iter().cloned());

        assert_eq!(map.remove(&nodes[2]), Some(2));
        assert_eq!(map.nodes().collect::<Vec<_>>(), vec![&nodes[0], &nodes[1]]);
    }
}
