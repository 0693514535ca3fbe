//! Implementations of the graph storages.
//!
//! Both storages implement the [`Graph`](crate::core::Graph) contract and
//! behave identically under it: for the same sequence of operations, they
//! report the same vertices, edges and errors.
//!
//! The **adjacency list** fits sparse graphs. It has no _O(V²)_ floor and
//! neighborhood queries only touch the incident edges. The **adjacency
//! matrix** fits dense graphs with constant time edge mutation, at the cost of
//! linear vertex insertion and removal.
//!
//! |                 | **[AdjList]** | **[AdjMatrix]** |
//! |-----------------|---------------|-----------------|
//! | add vertex      | _O*(1)_       | _O(V²)_         |
//! | add edge        | _O*(1)_       | _O(1)_          |
//! | get edges       | _O(d)_        | _O(V)_          |
//! | incoming edges  | _O(d)_        | _O(V)_          |
//! | remove vertex   | _O(d)_        | _O(V²)_         |
//! | remove edge     | _O(1)_        | _O(1)_          |
//! | space           | _O(V + E)_    | _O(V²)_         |
//!
//! * _V_ – vertex count
//! * _d_ – vertex degree
//! * _O*(..)_ – amortized complexity

pub mod adj_list;
pub mod adj_matrix;

#[doc(inline)]
pub use self::{adj_list::AdjList, adj_matrix::AdjMatrix};
