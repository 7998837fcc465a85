//! In-memory graphs with arbitrary hashable vertices, optional numeric edge
//! weights, callback-driven traversals and shortest path algorithms.
//!
//! ```
//! use grafo::prelude::*;
//!
//! let mut graph = Graph::new_directed();
//! graph.extend(["a", "b", "c"]);
//!
//! graph.add_edge("a", "b", 2).unwrap();
//! graph.add_edge("b", "c", -1).unwrap();
//!
//! let mut order = Vec::new();
//! graph.depth_first_search(&"a", |v| order.push(*v)).unwrap();
//! assert_eq!(order, vec!["a", "b", "c"]);
//!
//! let paths = ShortestPaths::on(&graph).run(&"a").unwrap();
//! assert_eq!(paths[&"c"], 1);
//! ```

pub mod algo;
pub mod core;
pub mod graph;
pub mod infra;
pub mod visit;

pub mod prelude {
    pub use crate::{
        algo::{Algo, Error, ShortestPaths},
        core::{EdgeRef, VertexId, Weight},
        graph::Graph,
        visit::Visitor,
    };
}
