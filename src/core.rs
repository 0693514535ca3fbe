pub mod error;
pub mod weight;

mod edge;
mod graph;
mod node;
mod props;

pub use edge::Edge;
pub use error::Error;
pub use graph::{Create, Graph};
pub(crate) use graph::{check_membership, fmt_graph};
pub use node::{Node, NodeId};
pub use props::Props;
pub use weight::Weight;
