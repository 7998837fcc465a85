//! Graph traversals.
//!
//! Both traversals are **iterative**: the visitor state is independent of the
//! graph, so a visitor can be advanced step by step with
//! [`Visitor::visit_next`], and its depth is not limited by the size of the
//! program stack.
//!
//! The callback functions [`depth_first_search`] and [`breadth_first_search`]
//! run a visitor to completion and pass every visited vertex to the callback.
//!
//! # Examples
//!
//! ```
//! use grafo::{graph::Graph, visit::depth_first_search};
//!
//! let mut graph = Graph::<_, ()>::new_directed();
//! graph.extend(["a", "b", "c"]);
//! graph.add_edge("a", "b", None).unwrap();
//! graph.add_edge("b", "c", None).unwrap();
//!
//! let mut order = Vec::new();
//! depth_first_search(&graph, &"a", |v| order.push(*v)).unwrap();
//!
//! assert_eq!(order, vec!["a", "b", "c"]);
//! ```

pub mod bfs;
pub mod dfs;

mod visit_set;

#[doc(inline)]
pub use self::{bfs::Bfs, dfs::Dfs, visit_set::VisitSet};

use std::{
    collections::{HashSet, VecDeque},
    hash::BuildHasherDefault,
};

use rustc_hash::FxHashSet;

use crate::{algo::Error, core::VertexId, graph::Graph};

/// Trait for a specific graph traversal approach.
#[doc(alias = "Walker")]
pub trait Visitor<G> {
    /// The type of the elements being visited.
    type Item;

    /// Advances the visitor and returns the next visited element in given
    /// graph.
    ///
    /// The difference from the [`Iterator::next`] is that the visitor doesn't
    /// hold a reference to the graph and thus allows modifications to the graph
    /// between individual visitor steps.
    fn visit_next(&mut self, graph: &G) -> Option<Self::Item>;

    /// Returns an [iterator](Iterator) that uses the visitor to iterate over
    /// the elements in given graph.
    fn iter<'a>(&'a mut self, graph: &'a G) -> Iter<'a, Self, G>
    where
        Self: Sized,
    {
        Iter {
            visitor: self,
            graph,
        }
    }

    /// Converts the visitor into an [iterator](Iterator) to visit the elements
    /// in given graph.
    fn into_iter(self, graph: &G) -> IntoIter<'_, Self, G>
    where
        Self: Sized,
    {
        IntoIter {
            visitor: self,
            graph,
        }
    }
}

/// Visitor iterator returned from [`Visitor::iter`].
pub struct Iter<'a, V, G> {
    visitor: &'a mut V,
    graph: &'a G,
}

impl<'a, V, G> Iterator for Iter<'a, V, G>
where
    V: Visitor<G>,
{
    type Item = V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.visitor.visit_next(self.graph)
    }
}

/// Visitor iterator returned from [`Visitor::into_iter`].
pub struct IntoIter<'a, V, G> {
    visitor: V,
    graph: &'a G,
}

impl<'a, V, G> Iterator for IntoIter<'a, V, G>
where
    V: Visitor<G>,
{
    type Item = V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.visitor.visit_next(self.graph)
    }
}

/// Calls `visit` once for every vertex reachable from `start`, in depth-first
/// preorder.
///
/// Fails with [`Error::UnknownVertex`] before visiting anything if `start` is
/// not in the graph.
pub fn depth_first_search<V, W, F>(
    graph: &Graph<V, W>,
    start: &V,
    mut visit: F,
) -> Result<(), Error>
where
    V: VertexId,
    F: FnMut(&V),
{
    let mut dfs = Dfs::new(graph);
    dfs.start(graph, start.clone())?;

    for vertex in dfs.iter(graph) {
        visit(&vertex);
    }

    Ok(())
}

/// Calls `visit` once for every vertex reachable from `start`, in
/// breadth-first order.
///
/// Fails with [`Error::UnknownVertex`] before visiting anything if `start` is
/// not in the graph.
pub fn breadth_first_search<V, W, F>(
    graph: &Graph<V, W>,
    start: &V,
    mut visit: F,
) -> Result<(), Error>
where
    V: VertexId,
    F: FnMut(&V),
{
    let mut bfs = Bfs::new(graph);
    bfs.start(graph, start.clone())?;

    for vertex in bfs.iter(graph) {
        visit(&vertex);
    }

    Ok(())
}
