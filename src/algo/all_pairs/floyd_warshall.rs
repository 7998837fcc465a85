use crate::{
    algo::{ensure_weighted, Arcs, Error},
    core::{
        weight::{relax, Relaxation},
        VertexId, Weight,
    },
    graph::Graph,
};

use super::{index, DistanceMatrix};

/// Shortest distances between all pairs of vertices using the
/// [Floyd–Warshall
/// algorithm](https://en.wikipedia.org/wiki/Floyd%E2%80%93Warshall_algorithm).
///
/// The graph must be weighted and all edges must have a weight. The distance
/// of a vertex to itself starts at zero (self-loops are ignored), and if there
/// are parallel edges between the same ordered pair, the one added last is
/// taken as the direct distance. Negative cycles are not detected; distances
/// involving them are meaningless.
///
/// Sums that do not fit in the weight type are never taken, so a pair whose
/// shortest distance is out of range keeps a longer distance or stays
/// unreachable.
pub fn floyd_warshall<V, W>(graph: &Graph<V, W>) -> Result<DistanceMatrix<V, W>, Error>
where
    V: VertexId,
    W: Weight,
{
    ensure_weighted(graph)?;
    let arcs = Arcs::collect(graph)?;

    let n = arcs.vertex_count();
    log::debug!("floyd-warshall on {n} vertices and {} arcs", arcs.len());

    let mut dist = vec![None; n * n];

    for i in 0..n {
        dist[index(i, i, n)] = Some(W::zero());
    }

    for arc in arcs.iter() {
        if arc.from != arc.to {
            dist[index(arc.from, arc.to, n)] = Some(arc.weight.clone());
        }
    }

    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                let through = match &dist[index(k, j, n)] {
                    Some(kj) => relax(&dist[index(i, k, n)], kj, &dist[index(i, j, n)]),
                    None => Relaxation::Unchanged,
                };

                if let Relaxation::Improved(through) = through {
                    dist[index(i, j, n)] = Some(through);
                }
            }
        }
    }

    Ok(DistanceMatrix::new(graph.vertex_set().clone(), dist))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use crate::infra::testing::create_complete;

    use super::*;

    #[test]
    fn triangle() {
        let mut graph = Graph::new_undirected();
        graph.extend(["A", "B", "C"]);

        graph.add_edge("A", "B", 1).unwrap();
        graph.add_edge("B", "C", 2).unwrap();
        graph.add_edge("A", "C", 10).unwrap();

        let matrix = floyd_warshall(&graph).unwrap();

        assert_eq!(matrix[(&"A", &"C")], 3);
        assert_eq!(matrix[(&"C", &"A")], 3);
        assert_eq!(matrix[(&"B", &"B")], 0);
        assert_eq!(
            matrix.vertices().copied().collect::<Vec<_>>(),
            vec!["A", "B", "C"]
        );
    }

    #[test]
    fn directed_unreachable() {
        let mut graph = Graph::new_directed();
        graph.extend([0, 1, 2]);

        graph.add_edge(0, 1, 5.0).unwrap();
        graph.add_edge(1, 2, -2.0).unwrap();

        let matrix = floyd_warshall(&graph).unwrap();

        assert_eq!(matrix[(&0, &2)], 3.0);
        assert_eq!(matrix[(&2, &0)], f64::INFINITY);
        assert_eq!(matrix[(&1, &0)], f64::INFINITY);
    }

    #[test]
    fn last_parallel_edge_wins() {
        let mut graph = Graph::new_directed();
        graph.extend(['a', 'b']);

        graph.add_edge('a', 'b', 1).unwrap();
        graph.add_edge('a', 'b', 7).unwrap();

        let matrix = floyd_warshall(&graph).unwrap();

        assert_eq!(matrix[(&'a', &'b')], 7);
    }

    #[test]
    fn self_loop_ignored() {
        let mut graph = Graph::new_directed();
        graph.add_vertex('a');
        graph.add_edge('a', 'a', 4).unwrap();

        assert_eq!(floyd_warshall(&graph).unwrap()[(&'a', &'a')], 0);
    }

    #[test]
    fn preconditions() {
        let mut graph = Graph::<_, i32>::new_directed();
        graph.extend(['a', 'b']);
        graph.add_edge('a', 'b', None).unwrap();

        assert_matches!(floyd_warshall(&graph), Err(Error::GraphNotWeighted));

        graph.add_edge('b', 'a', 1).unwrap();
        assert_matches!(floyd_warshall(&graph), Err(Error::UnweightedEdge));
    }

    #[test]
    fn max_weight_edge_is_reachable() {
        let mut graph = Graph::new_directed();
        graph.extend(['a', 'b', 'c']);

        graph.add_edge('a', 'b', u8::MAX).unwrap();
        graph.add_edge('b', 'c', 0).unwrap();

        let matrix = floyd_warshall(&graph).unwrap();

        assert_eq!(matrix.dist(&'a', &'b'), Some(&u8::MAX));
        assert_eq!(matrix.dist(&'a', &'c'), Some(&u8::MAX));
        assert_eq!(matrix.dist(&'c', &'a'), None);
        assert_eq!(matrix[(&'c', &'a')], u8::MAX);
    }

    #[test]
    fn out_of_range_sums_skipped() {
        let mut graph = Graph::new_directed();
        graph.extend(['a', 'b', 'c']);

        graph.add_edge('a', 'b', 1_500_000_000i32).unwrap();
        graph.add_edge('b', 'c', 1_500_000_000).unwrap();

        let matrix = floyd_warshall(&graph).unwrap();

        assert_eq!(matrix.dist(&'a', &'b'), Some(&1_500_000_000));
        assert_eq!(matrix.dist(&'a', &'c'), None);
    }

    #[test]
    fn negative_cycle_does_not_overflow() {
        let graph = create_complete(40, true, |_, _| Some(-1i32));

        let matrix = floyd_warshall(&graph).unwrap();

        assert_eq!(matrix.len(), 40);
        assert!(matrix.iter().all(|(_, _, d)| *d < 0));

        let mut graph = Graph::new_directed();
        graph.extend(['a', 'b']);
        graph.add_edge('a', 'b', -50i8).unwrap();
        graph.add_edge('b', 'a', -50).unwrap();

        let matrix = floyd_warshall(&graph).unwrap();
        assert_eq!(matrix[(&'a', &'a')], -100);
        assert_eq!(matrix[(&'b', &'b')], -100);
    }

    #[test]
    fn empty_weighted_graph() {
        let mut graph = Graph::new_directed();
        graph.extend(['a', 'b']);
        graph.add_edge('a', 'b', 1u8).unwrap();
        graph.clear();

        let matrix = floyd_warshall(&graph).unwrap();
        assert!(matrix.is_empty());
        assert_eq!(matrix.iter().count(), 0);
    }
}
