use std::slice;

use rustc_hash::FxHashMap;

use super::id::VertexId;

/// Ordered collection of unique vertex identifiers.
///
/// Vertices keep their insertion order. Every vertex also has a *position*,
/// its index in that order, which the algorithms use to address dense
/// per-vertex storage (distance vectors, bit sets, matrices). Positions are
/// shifted when a vertex is removed.
#[derive(Debug, Clone)]
pub struct VertexSet<V> {
    order: Vec<V>,
    positions: FxHashMap<V, usize>,
}

// Positions are derived from the order.
impl<V: PartialEq> PartialEq for VertexSet<V> {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order
    }
}

impl<V: Eq> Eq for VertexSet<V> {}

impl<V: VertexId> VertexSet<V> {
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            positions: FxHashMap::default(),
        }
    }

    /// Appends the vertex. Returns `false` and does nothing if it is already
    /// present.
    pub fn insert(&mut self, vertex: V) -> bool {
        if self.positions.contains_key(&vertex) {
            return false;
        }

        self.positions.insert(vertex.clone(), self.order.len());
        self.order.push(vertex);
        true
    }

    /// Removes the vertex and returns its former position.
    pub fn remove(&mut self, vertex: &V) -> Option<usize> {
        let position = self.positions.remove(vertex)?;
        self.order.remove(position);

        // Vertices after the removed one moved one step to the front.
        for (shifted, v) in self.order.iter().enumerate().skip(position) {
            if let Some(p) = self.positions.get_mut(v) {
                *p = shifted;
            }
        }

        Some(position)
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.positions.contains_key(vertex)
    }

    pub fn position(&self, vertex: &V) -> Option<usize> {
        self.positions.get(vertex).copied()
    }

    pub fn get(&self, position: usize) -> Option<&V> {
        self.order.get(position)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, V> {
        self.order.iter()
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.positions.clear();
    }
}

impl<V: VertexId> Default for VertexSet<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, V: VertexId> IntoIterator for &'a VertexSet<V> {
    type Item = &'a V;
    type IntoIter = slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
