//! Vertex handles.
//!
//! A [`Node`] is an opaque handle. Its identity is the [`NodeId`] allocated at
//! creation, never its label: two nodes with equal labels are two different
//! vertices. Cloning a node clones the handle, not the vertex, so all clones
//! observe label changes made through any of them.

use std::{
    cell::RefCell,
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    rc::Rc,
    sync::atomic::{AtomicU64, Ordering as AtomicOrdering},
};

use rustc_hash::FxHashMap;
use serde_json::Value;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Process-wide unique identifier of a [`Node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u64);

impl NodeId {
    fn next() -> Self {
        NodeId(NEXT_ID.fetch_add(1, AtomicOrdering::Relaxed))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug)]
struct NodeData {
    label: Value,
    attrs: FxHashMap<String, Value>,
}

/// Handle to a vertex carrying a label and an open set of named attributes.
#[derive(Clone)]
pub struct Node {
    id: NodeId,
    data: Rc<RefCell<NodeData>>,
}

impl Node {
    pub fn new(label: impl Into<Value>) -> Self {
        Self {
            id: NodeId::next(),
            data: Rc::new(RefCell::new(NodeData {
                label: label.into(),
                attrs: FxHashMap::default(),
            })),
        }
    }

    /// Attaches an attribute to the node, replacing any previous value under
    /// the same name.
    ///
    /// ```
    /// use adjgraph::core::Node;
    ///
    /// let rome = Node::new("Rome").with_attr("population", 2_750_000);
    /// assert_eq!(rome.attr("population"), Some(2_750_000.into()));
    /// ```
    #[must_use]
    pub fn with_attr(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data
            .borrow_mut()
            .attrs
            .insert(name.into(), value.into());
        self
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn label(&self) -> Value {
        self.data.borrow().label.clone()
    }

    /// Replaces the label. The change is visible through every clone of this
    /// handle, including the ones stored in graphs.
    pub fn set_label(&self, label: impl Into<Value>) {
        self.data.borrow_mut().label = label.into();
    }

    pub fn attr(&self, name: &str) -> Option<Value> {
        self.data.borrow().attrs.get(name).cloned()
    }

    pub fn attr_names(&self) -> Vec<String> {
        let mut names = self.data.borrow().attrs.keys().cloned().collect::<Vec<_>>();
        names.sort_unstable();
        names
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Strings are shown without the JSON quotes.
        match &self.data.borrow().label {
            Value::String(label) => f.write_str(label),
            label => write!(f, "{label}"),
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("label", &self.data.borrow().label)
            .finish()
    }
}
