use thiserror::Error;

use crate::{core::VertexId, graph::Graph};

/// Creates a directed path `0 → 1 → ... → n - 1` with the given weight on
/// every edge.
pub fn create_path<W: Clone>(vertex_count: usize, weight: Option<W>) -> Graph<usize, W> {
    let mut graph = Graph::new_directed();
    graph.extend(0..vertex_count);

    for v in 1..vertex_count {
        // Both endpoints were just added.
        let _ = graph.add_edge(v - 1, v, weight.clone());
    }

    graph
}

/// Creates a complete graph on vertices `0..n` with the weight of an edge given
/// by `weight(from, to)`.
pub fn create_complete<W, F>(vertex_count: usize, is_directed: bool, weight: F) -> Graph<usize, W>
where
    W: Clone,
    F: Fn(usize, usize) -> Option<W>,
{
    let mut graph = Graph::new(is_directed);
    graph.extend(0..vertex_count);

    for u in 0..vertex_count {
        for v in 0..vertex_count {
            if u == v || (!is_directed && v > u) {
                continue;
            }

            let _ = graph.add_edge(u, v, weight(u, v));
        }
    }

    graph
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("vertices iterator count ({0}) is not equal to vertex count ({1})")]
    VerticesVertexCountMismatch(usize, usize),
    #[error("adjacency list count ({0}) is not equal to vertex count ({1})")]
    AdjacencyVertexCountMismatch(usize, usize),
    #[error("vertex at position {0} does not map back to its position")]
    VertexPositionInvalid(usize),
    #[error("vertex at position {0} has no adjacency list")]
    AdjacencyMissing(usize),
    #[error("edges iterator count ({0}) is not equal to edge count ({1})")]
    EdgesEdgeCountMismatch(usize, usize),
    #[error("arc {0} (zero-based) has an endpoint that is not a vertex")]
    DanglingArc(usize),
    #[error("graph has a weighted edge but is not marked as weighted")]
    WeightedFlagUnset,
}

/// Checks that the vertex set and the adjacency store of the graph agree with
/// each other.
pub fn check_consistency<V, W>(graph: &Graph<V, W>) -> Result<(), ConsistencyCheckError>
where
    V: VertexId,
{
    fn cmp<F, E>(actual: usize, expected: usize, error: F) -> Result<(), E>
    where
        F: FnOnce(usize, usize) -> E,
    {
        if actual == expected {
            Ok(())
        } else {
            Err(error(actual, expected))
        }
    }

    let vertex_count = graph.vertex_count();

    cmp(
        graph.vertices().count(),
        vertex_count,
        ConsistencyCheckError::VerticesVertexCountMismatch,
    )?;
    cmp(
        graph.adjacency().vertex_count(),
        vertex_count,
        ConsistencyCheckError::AdjacencyVertexCountMismatch,
    )?;

    for (i, vertex) in graph.vertices().enumerate() {
        if graph.vertex_set().position(vertex) != Some(i) {
            return Err(ConsistencyCheckError::VertexPositionInvalid(i));
        }

        if graph.adjacency().outgoing(vertex).is_none() {
            return Err(ConsistencyCheckError::AdjacencyMissing(i));
        }
    }

    cmp(
        graph.edges().count(),
        graph.edge_count(),
        ConsistencyCheckError::EdgesEdgeCountMismatch,
    )?;

    let dangling = graph.edges().position(|edge| {
        !graph.contains_vertex(edge.from) || !graph.contains_vertex(edge.to)
    });

    if let Some(i) = dangling {
        return Err(ConsistencyCheckError::DanglingArc(i));
    }

    if !graph.is_weighted() && graph.edges().any(|edge| edge.weight.is_some()) {
        return Err(ConsistencyCheckError::WeightedFlagUnset);
    }

    Ok(())
}
