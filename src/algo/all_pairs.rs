//! Find [all pairs shortest paths] distances in a graph.
//!
//! [all pairs shortest paths]:
//!     https://en.wikipedia.org/wiki/Shortest_path_problem#All-pairs_shortest_paths

use std::ops::Index;

use crate::core::{VertexId, VertexSet, Weight};

mod floyd_warshall;

pub use floyd_warshall::floyd_warshall;

use super::DistanceMap;

/// Distances between all ordered pairs of vertices.
///
/// Rows and columns follow the vertex order of the graph at the time the
/// matrix was computed.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix<V, W> {
    vertices: VertexSet<V>,
    // Row-major, `vertices.len()` squared entries, `None` if unreachable.
    data: Vec<Option<W>>,
    inf: W,
}

impl<V, W> DistanceMatrix<V, W>
where
    V: VertexId,
    W: Weight,
{
    pub(crate) fn new(vertices: VertexSet<V>, data: Vec<Option<W>>) -> Self {
        debug_assert_eq!(data.len(), vertices.len() * vertices.len());
        Self {
            vertices,
            data,
            inf: W::inf(),
        }
    }

    /// Distance from `from` to `to`, [infinite](Weight::inf) if `to` is not
    /// reachable from `from`, or `None` if either of the vertices does not
    /// exist.
    pub fn get(&self, from: &V, to: &V) -> Option<&W> {
        let row = self.vertices.position(from)?;
        let col = self.vertices.position(to)?;
        let d = self.data.get(index(row, col, self.len()))?;
        Some(d.as_ref().unwrap_or(&self.inf))
    }

    /// Distance from `from` to `to`, or `None` if `to` is not reachable from
    /// `from` or either of the vertices does not exist.
    pub fn dist(&self, from: &V, to: &V) -> Option<&W> {
        let row = self.vertices.position(from)?;
        let col = self.vertices.position(to)?;
        self.data.get(index(row, col, self.len()))?.as_ref()
    }

    /// Distances from `from` to all vertices, in the same shape as returned by
    /// single source algorithms.
    pub fn row(&self, from: &V) -> Option<DistanceMap<V, W>> {
        let row = self.vertices.position(from)?;
        let n = self.len();

        let dist = self
            .vertices
            .iter()
            .cloned()
            .zip(
                self.data[index(row, 0, n)..index(row + 1, 0, n)]
                    .iter()
                    .map(|d| d.clone().unwrap_or_else(W::inf)),
            )
            .collect();

        Some(dist)
    }

    /// Vertices in the order of rows and columns.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.vertices.iter()
    }

    /// Number of rows (and columns).
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates over `(from, to, distance)` triples, row by row. Unreachable
    /// pairs have the infinite distance.
    pub fn iter(&self) -> impl Iterator<Item = (&V, &V, &W)> + '_ {
        let n = self.len();
        self.data.iter().enumerate().filter_map(move |(i, d)| {
            let (row, col) = coords(i, n);
            let d = d.as_ref().unwrap_or(&self.inf);
            Some((self.vertices.get(row)?, self.vertices.get(col)?, d))
        })
    }
}

impl<V, W> Index<(&V, &V)> for DistanceMatrix<V, W>
where
    V: VertexId,
    W: Weight,
{
    type Output = W;

    fn index(&self, (from, to): (&V, &V)) -> &Self::Output {
        self.get(from, to).unwrap()
    }
}

pub(crate) fn index(row: usize, col: usize, capacity: usize) -> usize {
    row * capacity + col
}

pub(crate) fn coords(index: usize, capacity: usize) -> (usize, usize) {
    (index / capacity, index % capacity)
}
