//! Shortest path algorithms and the error type shared by all algorithms of
//! this crate.
//!
//! Every algorithm validates its preconditions before doing any work and
//! either returns a complete result or an [`Error`], never a partial result.

pub mod all_pairs;
pub mod shortest_paths;

pub use all_pairs::{floyd_warshall, DistanceMatrix};
pub use shortest_paths::{
    bellman_ford, dijkstra, reconstruct_path, Algo, DistanceMap, PredecessorMap, ShortestPaths,
};

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::{
    core::{VertexId, Weight},
    graph::Graph,
};

/// The error encountered during a run of an algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The algorithm requires a weighted graph, but no weighted edge was ever
    /// added.
    #[error("graph is not weighted")]
    GraphNotWeighted,

    /// The given start vertex is not in the graph.
    #[error("vertex does not exist")]
    UnknownVertex,

    /// An edge with negative weight encountered by an algorithm that does not
    /// support them.
    #[error("edge with negative weight encountered")]
    NegativeWeightEdge,

    /// A negative cycle reachable from the start vertex encountered.
    #[error("negative cycle encountered")]
    NegativeCycle,

    /// An edge without weight encountered in a weighted graph.
    #[error("edge without weight encountered")]
    UnweightedEdge,

    /// A shortest distance does not fit in the weight type.
    #[error("distance out of range of the weight type")]
    WeightOverflow,
}

/// Arc with endpoints given as vertex positions.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Arc<W> {
    pub from: usize,
    pub to: usize,
    pub weight: W,
}

/// Snapshot of all arcs of a weighted graph, grouped by source position in
/// vertex order and, within a group, in adjacency order.
pub(crate) struct Arcs<W> {
    arcs: Vec<Arc<W>>,
    // Arcs of the vertex at position `i` are `arcs[offsets[i]..offsets[i + 1]]`.
    offsets: Vec<usize>,
}

impl<W: Weight> Arcs<W> {
    pub fn collect<V: VertexId>(graph: &Graph<V, W>) -> Result<Self, Error> {
        let vertices = graph.vertex_set();

        let mut arcs = Vec::with_capacity(graph.edge_count());
        let mut offsets = Vec::with_capacity(vertices.len() + 1);

        for (from, vertex) in vertices.iter().enumerate() {
            offsets.push(arcs.len());

            for edge in graph.outgoing(vertex) {
                let to = vertices
                    .position(&edge.to)
                    .ok_or(Error::UnknownVertex)?;
                let weight = edge.weight.clone().ok_or(Error::UnweightedEdge)?;

                arcs.push(Arc { from, to, weight });
            }
        }

        offsets.push(arcs.len());

        Ok(Self { arcs, offsets })
    }

    pub fn vertex_count(&self) -> usize {
        self.offsets.len() - 1
    }

    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Arc<W>> {
        self.arcs.iter()
    }

    pub fn outgoing(&self, from: usize) -> &[Arc<W>] {
        &self.arcs[self.offsets[from]..self.offsets[from + 1]]
    }
}

pub(crate) fn ensure_weighted<V, W>(graph: &Graph<V, W>) -> Result<(), Error>
where
    V: VertexId,
{
    if graph.is_weighted() {
        Ok(())
    } else {
        Err(Error::GraphNotWeighted)
    }
}

pub(crate) fn position<V, W>(graph: &Graph<V, W>, vertex: &V) -> Result<usize, Error>
where
    V: VertexId,
{
    graph
        .vertex_set()
        .position(vertex)
        .ok_or(Error::UnknownVertex)
}

/// Distances with unreachable vertices set to [infinity](Weight::inf).
pub(crate) fn or_inf<W: Weight>(dist: Vec<Option<W>>) -> Vec<W> {
    dist.into_iter().map(|d| d.unwrap_or_else(W::inf)).collect()
}

/// Pairs per-position values with the vertices at those positions.
pub(crate) fn by_vertex<V, W, T>(graph: &Graph<V, W>, values: Vec<T>) -> FxHashMap<V, T>
where
    V: VertexId,
{
    graph.vertices().cloned().zip(values).collect()
}
