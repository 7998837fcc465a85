//! The [`Graph`] type and its mutation API.
//!
//! # Examples
//!
//! ```
//! use grafo::{algo::dijkstra, graph::Graph};
//!
//! let mut graph = Graph::new_undirected();
//!
//! graph.add_vertex("A");
//! graph.add_vertex("B");
//! graph.add_vertex("C");
//!
//! graph.add_edge("A", "B", 1).unwrap();
//! graph.add_edge("B", "C", 2).unwrap();
//! graph.add_edge("A", "C", 10).unwrap();
//!
//! let dist = dijkstra(&graph, &"A").unwrap();
//! assert_eq!(dist[&"C"], 3);
//! ```

use crate::{
    algo::Error,
    core::{
        AddEdgeError, AddEdgeErrorKind, AdjacencyStore, Edge, EdgeRef, VertexId, VertexSet, Weight,
    },
    visit::{self, Bfs, Dfs},
};

/// In-memory graph with vertices of type `V` and edge weights of type `W`.
///
/// Whether the graph is directed only affects how [`add_edge`](Graph::add_edge)
/// and [`remove_edge`](Graph::remove_edge) interpret their arguments: an
/// undirected edge is stored as two opposite arcs. The mode can be changed at
/// any time with [`set_directed`](Graph::set_directed), existing arcs are kept
/// as they are.
///
/// The graph becomes *weighted* once an edge with a numeric weight is added and
/// stays weighted for the rest of its life.
#[derive(Debug, Clone)]
pub struct Graph<V, W = f64> {
    vertices: VertexSet<V>,
    adjacency: AdjacencyStore<V, W>,
    is_directed: bool,
    is_weighted: bool,
}

impl<V: VertexId, W> Graph<V, W> {
    pub fn new(is_directed: bool) -> Self {
        Self {
            vertices: VertexSet::new(),
            adjacency: AdjacencyStore::new(),
            is_directed,
            is_weighted: false,
        }
    }

    pub fn new_directed() -> Self {
        Self::new(true)
    }

    pub fn new_undirected() -> Self {
        Self::new(false)
    }

    pub fn is_directed(&self) -> bool {
        self.is_directed
    }

    pub fn is_weighted(&self) -> bool {
        self.is_weighted
    }

    pub fn set_directed(&mut self, is_directed: bool) {
        self.is_directed = is_directed;
    }

    /// Adds the vertex. Returns `false` if it was already present, in which
    /// case the graph is unchanged.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if !self.vertices.insert(vertex.clone()) {
            return false;
        }

        self.adjacency.insert_vertex(vertex);
        true
    }

    /// Adds an edge between two existing vertices.
    ///
    /// Pass a number for a weighted edge or `None` for an unweighted one. In an
    /// undirected graph, both arcs `from → to` and `to → from` are inserted.
    /// Parallel edges are not merged.
    pub fn add_edge(
        &mut self,
        from: V,
        to: V,
        weight: impl Into<Option<W>>,
    ) -> Result<(), AddEdgeError<V>>
    where
        W: Clone,
    {
        if !self.vertices.contains(&from) {
            return Err(AddEdgeError::new(from, AddEdgeErrorKind::SourceAbsent));
        }

        if !self.vertices.contains(&to) {
            return Err(AddEdgeError::new(to, AddEdgeErrorKind::DestinationAbsent));
        }

        let weight = weight.into();
        if weight.is_some() {
            self.is_weighted = true;
        }

        let reverse = (!self.is_directed).then(|| Edge::new(from.clone(), weight.clone()));

        self.adjacency.push(&from, Edge::new(to.clone(), weight));
        if let Some(edge) = reverse {
            self.adjacency.push(&to, edge);
        }

        Ok(())
    }

    /// Removes the vertex together with every arc that starts or ends in it.
    /// Returns `false` if the vertex was not present.
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        if self.vertices.remove(vertex).is_none() {
            return false;
        }

        let outgoing = self.adjacency.remove_vertex(vertex).map_or(0, |e| e.len());
        let incoming = self.adjacency.remove_targeting(vertex);
        log::trace!("removed {vertex:?} with {outgoing} outgoing and {incoming} incoming arcs");

        true
    }

    /// Removes all arcs `from → to`, and in an undirected graph also all arcs
    /// `to → from`. Returns the number of removed arcs, so that removing an
    /// absent edge is a harmless no-op returning zero.
    pub fn remove_edge(&mut self, from: &V, to: &V) -> usize {
        let mut removed = self.adjacency.remove_arcs(from, to);

        // A self-loop was already removed by the call above.
        if !self.is_directed && from != to {
            removed += self.adjacency.remove_arcs(to, from);
        }

        removed
    }

    /// Removes all edges. The graph stays weighted if it was.
    pub fn clear_edges(&mut self) {
        self.adjacency.clear_arcs();
    }

    /// Removes all vertices and edges. The graph stays weighted if it was.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.adjacency.clear();
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of stored arcs. An undirected edge counts twice.
    pub fn edge_count(&self) -> usize {
        self.adjacency.arc_count()
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }

    /// Iterates over the vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.vertices.iter()
    }

    /// Iterates over all arcs, vertex by vertex in insertion order and, for
    /// each vertex, in the order the arcs were added.
    pub fn edges(&self) -> impl Iterator<Item = EdgeRef<'_, V, W>> + '_ {
        self.vertices.iter().flat_map(move |from| {
            self.adjacency
                .outgoing(from)
                .into_iter()
                .flatten()
                .map(move |edge| EdgeRef::new(from, edge))
        })
    }

    /// Outgoing arcs of the vertex, or `None` if it does not exist.
    pub fn neighbors<'a>(
        &'a self,
        vertex: &'a V,
    ) -> Option<impl Iterator<Item = EdgeRef<'a, V, W>> + 'a> {
        let edges = self.adjacency.outgoing(vertex)?;
        Some(edges.iter().map(move |edge| EdgeRef::new(vertex, edge)))
    }

    pub(crate) fn outgoing(&self, vertex: &V) -> &[Edge<V, W>] {
        self.adjacency.outgoing(vertex).unwrap_or_default()
    }

    pub(crate) fn vertex_set(&self) -> &VertexSet<V> {
        &self.vertices
    }

    pub(crate) fn adjacency(&self) -> &AdjacencyStore<V, W> {
        &self.adjacency
    }

    /// Visits vertices reachable from `start` in depth-first preorder. See
    /// [`visit::depth_first_search`].
    pub fn depth_first_search<F>(&self, start: &V, visit: F) -> Result<(), Error>
    where
        F: FnMut(&V),
    {
        visit::depth_first_search(self, start, visit)
    }

    /// Visits vertices reachable from `start` in breadth-first order. See
    /// [`visit::breadth_first_search`].
    pub fn breadth_first_search<F>(&self, start: &V, visit: F) -> Result<(), Error>
    where
        F: FnMut(&V),
    {
        visit::breadth_first_search(self, start, visit)
    }

    /// Creates a lazy depth-first visitor starting at `start`.
    pub fn dfs(&self, start: &V) -> Result<Dfs<V>, Error> {
        let mut dfs = Dfs::new(self);
        dfs.start(self, start.clone())?;
        Ok(dfs)
    }

    /// Creates a lazy breadth-first visitor starting at `start`.
    pub fn bfs(&self, start: &V) -> Result<Bfs<V>, Error> {
        let mut bfs = Bfs::new(self);
        bfs.start(self, start.clone())?;
        Ok(bfs)
    }
}

impl<V: VertexId, W: Weight> Graph<V, W> {
    /// Returns `true` if any stored arc has a negative weight.
    pub fn has_negative_weight(&self) -> bool {
        self.edges()
            .any(|edge| edge.weight.map_or(false, |w| w.is_negative()))
    }
}

// Two graphs are equal if they have the same vertices in the same order, the
// same arcs in the same order and the same flags.
impl<V: VertexId, W: PartialEq> PartialEq for Graph<V, W> {
    fn eq(&self, other: &Self) -> bool {
        self.is_directed == other.is_directed
            && self.is_weighted == other.is_weighted
            && self.vertices == other.vertices
            && self.adjacency == other.adjacency
    }
}

impl<V: VertexId, W> Default for Graph<V, W> {
    fn default() -> Self {
        Self::new_undirected()
    }
}

impl<V: VertexId, W> Extend<V> for Graph<V, W> {
    fn extend<T: IntoIterator<Item = V>>(&mut self, iter: T) {
        for vertex in iter {
            self.add_vertex(vertex);
        }
    }
}

impl<V: VertexId, W> FromIterator<V> for Graph<V, W> {
    /// Collects vertices into an undirected graph without edges.
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        let mut graph = Self::default();
        graph.extend(iter);
        graph
    }
}
