use rustc_hash::FxHashMap;

use super::id::VertexId;

/// Outgoing arc stored in the adjacency list of its source vertex.
///
/// The target is referenced by value. A weight of `None` marks an unweighted
/// arc.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge<V, W> {
    pub to: V,
    pub weight: Option<W>,
}

impl<V, W> Edge<V, W> {
    pub fn new(to: V, weight: Option<W>) -> Self {
        Self { to, weight }
    }
}

/// Borrowed view of an arc together with its source vertex.
#[derive(Debug, PartialEq, Eq)]
pub struct EdgeRef<'a, V, W> {
    pub from: &'a V,
    pub to: &'a V,
    pub weight: Option<&'a W>,
}

// Derives would require `V: Clone` and `W: Clone`, but only references are
// copied.
impl<V, W> Clone for EdgeRef<'_, V, W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V, W> Copy for EdgeRef<'_, V, W> {}

impl<'a, V, W> EdgeRef<'a, V, W> {
    pub fn new(from: &'a V, edge: &'a Edge<V, W>) -> Self {
        Self {
            from,
            to: &edge.to,
            weight: edge.weight.as_ref(),
        }
    }
}

/// Mapping from each vertex to the ordered sequence of its outgoing arcs.
#[derive(Debug, Clone)]
pub struct AdjacencyStore<V, W> {
    lists: FxHashMap<V, Vec<Edge<V, W>>>,
}

impl<V: VertexId, W: PartialEq> PartialEq for AdjacencyStore<V, W> {
    fn eq(&self, other: &Self) -> bool {
        self.lists == other.lists
    }
}

impl<V: VertexId, W: Eq> Eq for AdjacencyStore<V, W> {}

impl<V: VertexId, W> AdjacencyStore<V, W> {
    pub fn new() -> Self {
        Self {
            lists: FxHashMap::default(),
        }
    }

    /// Initializes an empty arc sequence for the vertex, unless it already has
    /// one.
    pub fn insert_vertex(&mut self, vertex: V) {
        self.lists.entry(vertex).or_default();
    }

    /// Drops the arc sequence of the vertex. Arcs pointing to the vertex from
    /// elsewhere are untouched, see [`AdjacencyStore::remove_targeting`].
    pub fn remove_vertex(&mut self, vertex: &V) -> Option<Vec<Edge<V, W>>> {
        self.lists.remove(vertex)
    }

    /// Appends the arc to the sequence of `from`. Returns `false` if `from` is
    /// not known.
    pub fn push(&mut self, from: &V, edge: Edge<V, W>) -> bool {
        match self.lists.get_mut(from) {
            Some(edges) => {
                edges.push(edge);
                true
            }
            None => false,
        }
    }

    /// Removes all arcs `from → to` and returns how many there were.
    pub fn remove_arcs(&mut self, from: &V, to: &V) -> usize {
        match self.lists.get_mut(from) {
            Some(edges) => retain_counting(edges, |edge| edge.to != *to),
            None => 0,
        }
    }

    /// Removes every arc whose target is the vertex, in all sequences. Returns
    /// how many were removed.
    pub fn remove_targeting(&mut self, target: &V) -> usize {
        self.lists
            .values_mut()
            .map(|edges| retain_counting(edges, |edge| edge.to != *target))
            .sum()
    }

    pub fn outgoing(&self, vertex: &V) -> Option<&[Edge<V, W>]> {
        self.lists.get(vertex).map(Vec::as_slice)
    }

    pub fn arc_count(&self) -> usize {
        self.lists.values().map(Vec::len).sum()
    }

    /// Removes all arcs but keeps the (now empty) sequences of all vertices.
    pub fn clear_arcs(&mut self) {
        self.lists.values_mut().for_each(Vec::clear);
    }

    pub fn clear(&mut self) {
        self.lists.clear();
    }

    pub(crate) fn vertex_count(&self) -> usize {
        self.lists.len()
    }
}

impl<V: VertexId, W> Default for AdjacencyStore<V, W> {
    fn default() -> Self {
        Self::new()
    }
}

fn retain_counting<T, F>(items: &mut Vec<T>, keep: F) -> usize
where
    F: FnMut(&T) -> bool,
{
    let before = items.len();
    items.retain(keep);
    before - items.len()
}
