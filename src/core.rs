//! Building blocks of a [`Graph`](crate::graph::Graph): vertex identifiers,
//! edge weights, the ordered vertex set and the adjacency store.

pub mod edges;
pub mod error;
pub mod id;
pub mod vertices;
pub mod weight;

pub use edges::{AdjacencyStore, Edge, EdgeRef};
pub use error::{AddEdgeError, AddEdgeErrorKind};
pub use id::VertexId;
pub use vertices::VertexSet;
pub use weight::Weight;
