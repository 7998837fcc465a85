//! Find [single source shortest paths] and their distances in a graph.
//!
//! Two algorithms are available, either directly as functions or through the
//! [`ShortestPaths`] builder:
//!
//! * [`dijkstra`] for graphs without negative edge weights,
//! * [`bellman_ford`] for graphs with negative edge weights, which also
//!   detects negative cycles and records predecessors for path reconstruction.
//!
//! [single source shortest paths]:
//!     https://en.wikipedia.org/wiki/Shortest_path_problem#Single-source_shortest_paths
//!
//! # Examples
//!
//! ```
//! use grafo::{algo::ShortestPaths, graph::Graph};
//!
//! let mut graph = Graph::new_undirected();
//!
//! graph.extend(["Prague", "Bratislava", "Vienna", "Munich", "Nuremberg", "Florence", "Rome"]);
//!
//! for (from, to, km) in [
//!     ("Prague", "Bratislava", 328u32),
//!     ("Prague", "Nuremberg", 297),
//!     ("Prague", "Vienna", 293),
//!     ("Bratislava", "Vienna", 79),
//!     ("Nuremberg", "Munich", 170),
//!     ("Vienna", "Munich", 402),
//!     ("Vienna", "Florence", 863),
//!     ("Munich", "Florence", 646),
//!     ("Florence", "Rome", 278),
//! ] {
//!     graph.add_edge(from, to, km).unwrap();
//! }
//!
//! let shortest_paths = ShortestPaths::on(&graph).bellman_ford().run(&"Rome").unwrap();
//! let distance = shortest_paths[&"Prague"];
//! let path = shortest_paths
//!     .reconstruct(&"Prague")
//!     .collect::<Vec<_>>()
//!     .join(" - ");
//!
//! assert_eq!(distance, 1391);
//! assert_eq!(path, "Nuremberg - Munich - Florence - Rome");
//! ```

use std::ops::Index;

use rustc_hash::FxHashMap;

use crate::core::VertexId;

mod bellman_ford;
mod builder;
mod dijkstra;

pub use bellman_ford::bellman_ford;
pub use builder::ShortestPathsBuilder;
pub use dijkstra::dijkstra;

use bellman_ford::bellman_ford_dist;
use dijkstra::dijkstra_dist;

/// Distance from the start vertex to every vertex of the graph.
pub type DistanceMap<V, W> = FxHashMap<V, W>;

/// Predecessor of every vertex on its shortest path from the start vertex, or
/// `None` for the start vertex and the unreachable vertices.
pub type PredecessorMap<V> = FxHashMap<V, Option<V>>;

/// Algorithm for [`ShortestPaths`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Algo {
    /// [Dijkstra's
    /// algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm)
    ///
    /// Dijkstra's algorithm is a popular method on a graph with non-negative
    /// edge weights. It operates by iteratively selecting the vertex with the
    /// smallest known distance from the source and updating the distances of
    /// its neighbors. It does not record predecessors.
    Dijkstra,

    /// [Bellman–Ford
    /// algorithm](https://en.wikipedia.org/wiki/Bellman%E2%80%93Ford_algorithm).
    ///
    /// The Bellman-Ford algorithm can handle graphs with negative edge weights
    /// and can detect negative weight cycles in a graph. However, it is
    /// generally slower than Dijkstra's algorithm.
    BellmanFord,
}

/// Shortest paths and their distances from a single source vertex.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone)]
pub struct ShortestPaths<V, W> {
    source: V,
    algo: Algo,
    // Only reachable vertices are stored.
    dist: FxHashMap<V, W>,
    pred: FxHashMap<V, V>,
}

impl<V, W> ShortestPaths<V, W>
where
    V: VertexId,
{
    /// Source vertex where the search was started.
    pub fn source(&self) -> &V {
        &self.source
    }

    /// Algorithm that produced the result.
    pub fn algo(&self) -> Algo {
        self.algo
    }

    /// Returns the path distance between the source vertex and the given
    /// vertex, or `None` if the vertex is unreachable or does not exist.
    pub fn dist(&self, to: &V) -> Option<&W> {
        self.dist.get(to)
    }

    /// Returns an iterator over vertices on the path between the given vertex
    /// and the source vertex, in this order, excluding the given vertex.
    ///
    /// The iterator is empty if no path was found or if the algorithm does not
    /// record predecessors ([`Algo::Dijkstra`]).
    pub fn reconstruct(&self, to: &V) -> PathReconstruction<'_, V> {
        PathReconstruction {
            curr: to.clone(),
            pred: &self.pred,
        }
    }
}

impl<V, W> Index<&V> for ShortestPaths<V, W>
where
    V: VertexId,
{
    type Output = W;

    fn index(&self, index: &V) -> &Self::Output {
        self.dist(index).unwrap()
    }
}

/// Iterator over the vertices on the path from a vertex to the source vertex.
///
/// Returned by [`ShortestPaths::reconstruct`] and [`reconstruct_path`].
pub struct PathReconstruction<'a, V> {
    curr: V,
    pred: &'a FxHashMap<V, V>,
}

impl<'a, V: VertexId> Iterator for PathReconstruction<'a, V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.curr = self.pred.get(&self.curr).cloned()?;
        Some(self.curr.clone())
    }
}

/// Walks the predecessors returned by [`bellman_ford`] from `to` back to the
/// start vertex. The returned path starts with `to` and ends with the start
/// vertex, or is empty if `to` is not reachable.
pub fn reconstruct_path<V: VertexId>(pred: &PredecessorMap<V>, start: &V, to: &V) -> Vec<V> {
    let mut path = vec![to.clone()];
    let mut curr = to;

    while curr != start {
        match pred.get(curr) {
            Some(Some(p)) => {
                path.push(p.clone());
                curr = p;
            }
            _ => return Vec::new(),
        }
    }

    path
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use crate::{
        algo::{floyd_warshall, Error},
        core::Weight,
        graph::Graph,
        infra::proptest::{graph_directed, graph_undirected},
    };

    use super::*;

    fn create_basic_graph() -> Graph<u32, i32> {
        let mut graph = Graph::new_undirected();
        graph.extend(0..6);

        graph.add_edge(0, 1, 3).unwrap();
        graph.add_edge(0, 2, 2).unwrap();
        graph.add_edge(1, 2, 2).unwrap();
        graph.add_edge(1, 3, 2).unwrap();
        graph.add_edge(1, 4, 7).unwrap();
        graph.add_edge(2, 3, 5).unwrap();
        graph.add_edge(3, 4, 3).unwrap();
        graph.add_edge(4, 5, 10).unwrap();

        graph
    }

    fn create_graph_with_isolated_vertex() -> Graph<u32, i32> {
        let mut graph = Graph::new_undirected();
        graph.extend(0..4);

        graph.add_edge(0, 1, 3).unwrap();
        graph.add_edge(0, 2, 2).unwrap();
        graph.add_edge(1, 2, 2).unwrap();

        graph
    }

    fn create_triangle() -> Graph<&'static str, i32> {
        let mut graph = Graph::new_undirected();
        graph.extend(["A", "B", "C"]);

        graph.add_edge("A", "B", 1).unwrap();
        graph.add_edge("B", "C", 2).unwrap();
        graph.add_edge("A", "C", 10).unwrap();

        graph
    }

    fn create_unweighted() -> Graph<&'static str, i32> {
        let mut graph = Graph::new_undirected();
        graph.extend(["A", "B"]);
        graph.add_edge("A", "B", None).unwrap();
        graph
    }

    fn expected<V: VertexId, W>(pairs: impl IntoIterator<Item = (V, W)>) -> DistanceMap<V, W> {
        pairs.into_iter().collect()
    }

    #[test]
    fn dijkstra_basic() {
        let graph = create_basic_graph();
        let dist = dijkstra(&graph, &0).unwrap();

        assert_eq!(dist[&4], 8);
        assert_eq!(dist[&2], 2);
        assert_eq!(dist[&5], 18);
        assert_eq!(dist.len(), 6);
    }

    #[test]
    fn dijkstra_triangle() {
        let graph = create_triangle();

        assert_eq!(
            dijkstra(&graph, &"A"),
            Ok(expected([("A", 0), ("B", 1), ("C", 3)]))
        );
    }

    #[test]
    fn dijkstra_unreachable_is_infinite() {
        let graph = create_graph_with_isolated_vertex();
        let dist = dijkstra(&graph, &0).unwrap();

        assert_eq!(dist[&3], i32::inf());
        assert_eq!(dist[&1], 3);
    }

    #[test]
    fn dijkstra_negative_edge() {
        let mut graph = create_basic_graph();
        graph.set_directed(true);
        graph.add_edge(5, 4, -1).unwrap();

        // The edge is not reachable from 0 in the directed sense, but the check
        // scans all edges regardless of the start vertex.
        for start in 0..6 {
            assert_matches!(dijkstra(&graph, &start), Err(Error::NegativeWeightEdge));
        }
    }

    #[test]
    fn dijkstra_preconditions_order() {
        let unweighted = create_unweighted();
        assert_matches!(dijkstra(&unweighted, &"Z"), Err(Error::GraphNotWeighted));

        let mut graph = create_triangle();
        graph.add_edge("A", "B", -1).unwrap();
        assert_matches!(dijkstra(&graph, &"Z"), Err(Error::UnknownVertex));
        assert_matches!(dijkstra(&graph, &"A"), Err(Error::NegativeWeightEdge));
    }

    #[test]
    fn dijkstra_float_weights() {
        let mut graph = Graph::new_directed();
        graph.extend(['s', 't', 'u']);

        graph.add_edge('s', 't', 0.5).unwrap();
        graph.add_edge('t', 'u', 0.25).unwrap();
        graph.add_edge('s', 'u', 1.0).unwrap();

        let dist = dijkstra(&graph, &'s').unwrap();

        assert_eq!(dist[&'u'], 0.75);
        assert_eq!(dijkstra(&graph, &'u').unwrap()[&'s'], f64::INFINITY);
    }

    #[test]
    fn bellman_ford_basic() {
        let graph = create_basic_graph();
        let (dist, pred) = bellman_ford(&graph, &0).unwrap();

        assert_eq!(dist[&4], 8);
        assert_eq!(reconstruct_path(&pred, &0, &4), vec![4, 3, 1, 0]);
        assert_eq!(dist[&2], 2);
        assert_eq!(pred[&0], None);
    }

    #[test]
    fn bellman_ford_negative_edge() {
        let mut graph = Graph::new_directed();
        graph.extend(0..6);

        graph.add_edge(0, 1, 3).unwrap();
        graph.add_edge(0, 2, 2).unwrap();
        graph.add_edge(1, 2, -1).unwrap();
        graph.add_edge(1, 3, 2).unwrap();
        graph.add_edge(1, 4, 7).unwrap();
        graph.add_edge(2, 3, 5).unwrap();
        graph.add_edge(3, 4, 3).unwrap();
        graph.add_edge(4, 5, 10).unwrap();

        let (dist, pred) = bellman_ford(&graph, &0).unwrap();

        assert_eq!(dist[&4], 8);
        assert_eq!(reconstruct_path(&pred, &0, &4), vec![4, 3, 1, 0]);
        assert_eq!(dist[&2], 2);
        assert_eq!(pred[&2], Some(0));
    }

    #[test]
    fn bellman_ford_negative_cycle() {
        let mut graph = Graph::new_directed();
        graph.extend(0..5);

        graph.add_edge(0, 1, 3).unwrap();
        graph.add_edge(1, 2, -2).unwrap();
        graph.add_edge(2, 3, 2).unwrap();
        graph.add_edge(2, 1, -2).unwrap();
        graph.add_edge(2, 4, 3).unwrap();

        assert_matches!(bellman_ford(&graph, &0), Err(Error::NegativeCycle));
    }

    #[test]
    fn bellman_ford_two_vertex_negative_cycle() {
        let mut graph = Graph::new_directed();
        graph.extend(["A", "B"]);

        graph.add_edge("A", "B", -5).unwrap();
        graph.add_edge("B", "A", -5).unwrap();

        assert_matches!(bellman_ford(&graph, &"A"), Err(Error::NegativeCycle));
    }

    #[test]
    fn bellman_ford_unreachable_negative_cycle() {
        let mut graph = Graph::new_directed();
        graph.extend(0..4);

        graph.add_edge(0, 1, 1).unwrap();
        graph.add_edge(2, 3, -1).unwrap();
        graph.add_edge(3, 2, -1).unwrap();

        let (dist, pred) = bellman_ford(&graph, &0).unwrap();

        assert_eq!(dist[&1], 1);
        assert_eq!(dist[&2], i32::inf());
        assert_eq!(pred[&3], None);
        assert!(reconstruct_path(&pred, &0, &3).is_empty());
    }

    #[test]
    fn bellman_ford_undirected_negative_edge_is_cycle() {
        let mut graph = create_triangle();
        graph.add_edge("B", "C", -1).unwrap();

        assert_matches!(bellman_ford(&graph, &"A"), Err(Error::NegativeCycle));
    }

    #[test]
    fn bellman_ford_negative_self_loop() {
        let mut graph = Graph::new_directed();
        graph.add_vertex("A");
        graph.add_edge("A", "A", -1).unwrap();

        assert_matches!(bellman_ford(&graph, &"A"), Err(Error::NegativeCycle));
    }

    #[test]
    fn bellman_ford_preconditions() {
        assert_matches!(
            bellman_ford(&create_unweighted(), &"A"),
            Err(Error::GraphNotWeighted)
        );
        assert_matches!(
            bellman_ford(&create_triangle(), &"Z"),
            Err(Error::UnknownVertex)
        );

        let mut graph = create_triangle();
        graph.add_edge("A", "B", None).unwrap();
        assert_matches!(bellman_ford(&graph, &"A"), Err(Error::UnweightedEdge));
    }

    #[test]
    fn unweighted_graph_rejected_everywhere() {
        let graph = create_unweighted();

        assert_matches!(dijkstra(&graph, &"A"), Err(Error::GraphNotWeighted));
        assert_matches!(floyd_warshall(&graph), Err(Error::GraphNotWeighted));
        assert_matches!(bellman_ford(&graph, &"A"), Err(Error::GraphNotWeighted));
    }

    #[test]
    fn weighted_latch_survives_edge_removal() {
        let mut graph = create_unweighted();
        graph.add_edge("A", "B", 4).unwrap();
        graph.remove_edge(&"A", &"B");

        assert_eq!(
            dijkstra(&graph, &"A"),
            Ok(expected([("A", 0), ("B", i32::inf())]))
        );
    }

    #[test]
    fn reconstruct_path_of_start() {
        let graph = create_basic_graph();
        let (_, pred) = bellman_ford(&graph, &3).unwrap();

        assert_eq!(reconstruct_path(&pred, &3, &3), vec![3]);
    }

    #[test]
    fn dijkstra_sum_out_of_range() {
        let mut graph = Graph::new_directed();
        graph.extend(['a', 'b', 'c']);

        graph.add_edge('a', 'b', 1_500_000_000i32).unwrap();
        graph.add_edge('b', 'c', 1_500_000_000).unwrap();

        assert_matches!(dijkstra(&graph, &'a'), Err(Error::WeightOverflow));

        // Once there is a representable path, the longer one does not matter.
        graph.add_edge('a', 'c', 7).unwrap();
        let dist = dijkstra(&graph, &'a').unwrap();
        assert_eq!(dist[&'c'], 7);
        assert_eq!(dist[&'b'], 1_500_000_000);
    }

    #[test]
    fn distance_equal_to_max_is_reachable() {
        let mut graph = Graph::new_directed();
        graph.extend(['a', 'b', 'c', 'd']);

        graph.add_edge('a', 'b', 200u8).unwrap();
        graph.add_edge('b', 'c', 55).unwrap();
        graph.add_edge('c', 'd', 0).unwrap();

        assert_eq!(dijkstra(&graph, &'a').unwrap()[&'d'], u8::MAX);

        let paths = ShortestPaths::on(&graph).run(&'a').unwrap();
        assert_eq!(paths.dist(&'c'), Some(&u8::MAX));
        assert_eq!(paths.dist(&'d'), Some(&u8::MAX));

        let paths = ShortestPaths::on(&graph).bellman_ford().run(&'a').unwrap();
        assert_eq!(paths.dist(&'d'), Some(&u8::MAX));
        assert_eq!(paths.reconstruct(&'d').collect::<Vec<_>>(), vec!['c', 'b', 'a']);

        let paths = ShortestPaths::on(&graph).run(&'b').unwrap();
        assert_eq!(paths.dist(&'a'), None);
    }

    #[test]
    fn edge_of_max_weight_is_an_edge() {
        let mut graph = Graph::new_directed();
        graph.extend(['a', 'b', 'c']);

        graph.add_edge('a', 'b', u8::MAX).unwrap();
        graph.add_edge('b', 'c', 0).unwrap();

        let (dist, pred) = bellman_ford(&graph, &'a').unwrap();
        assert_eq!(dist[&'c'], u8::MAX);
        assert_eq!(pred[&'c'], Some('b'));
        assert_eq!(reconstruct_path(&pred, &'a', &'c'), vec!['c', 'b', 'a']);
    }

    #[test]
    fn bellman_ford_sum_out_of_range() {
        let mut graph = Graph::new_directed();
        graph.extend(['a', 'b', 'c']);

        graph.add_edge('a', 'b', -100i8).unwrap();
        graph.add_edge('b', 'c', -100).unwrap();

        assert_matches!(bellman_ford(&graph, &'a'), Err(Error::WeightOverflow));

        let mut graph = Graph::new_directed();
        graph.extend(['a', 'b', 'c', 'd']);

        graph.add_edge('a', 'b', 100i8).unwrap();
        graph.add_edge('b', 'c', 100).unwrap();
        graph.add_edge('c', 'd', -120).unwrap();

        // The prefix to `c` does not fit even though the whole path would.
        assert_matches!(bellman_ford(&graph, &'a'), Err(Error::WeightOverflow));
    }

    #[test]
    fn bellman_ford_negative_cycle_near_range() {
        let mut graph = Graph::new_directed();
        graph.extend(['a', 'b', 'c']);

        graph.add_edge('a', 'b', -40i8).unwrap();
        graph.add_edge('b', 'c', -40).unwrap();
        graph.add_edge('c', 'a', -40).unwrap();

        assert_matches!(
            bellman_ford(&graph, &'a'),
            Err(Error::NegativeCycle | Error::WeightOverflow)
        );
    }

    proptest! {
        #[test]
        fn proptest_dijkstra_bellman_ford_agree_any_directed(graph in graph_directed(0..1000i64).max_size(64), start: usize) {
            let n = graph.vertex_count();
            prop_assume!(n > 0 && graph.is_weighted());

            let start = start % n;
            let dist_d = dijkstra(&graph, &start).unwrap();
            let (dist_bf, _) = bellman_ford(&graph, &start).unwrap();

            prop_assert_eq!(dist_d, dist_bf);
        }

        #[test]
        fn proptest_dijkstra_bellman_ford_agree_any_undirected(graph in graph_undirected(0..1000i64).max_size(64), start: usize) {
            let n = graph.vertex_count();
            prop_assume!(n > 0 && graph.is_weighted());

            let start = start % n;
            let dist_d = dijkstra(&graph, &start).unwrap();
            let (dist_bf, _) = bellman_ford(&graph, &start).unwrap();

            prop_assert_eq!(dist_d, dist_bf);
        }

        #[test]
        fn proptest_floyd_warshall_row_is_dijkstra(graph in graph_directed(0..1000i64).max_size(32), start: usize) {
            let n = graph.vertex_count();
            prop_assume!(n > 0 && graph.is_weighted());

            let start = start % n;
            let dist_d = dijkstra(&graph, &start).unwrap();
            let matrix = floyd_warshall(&graph).unwrap();

            prop_assert_eq!(matrix.row(&start), Some(dist_d));
        }

        #[test]
        fn proptest_bellman_ford_paths_are_consistent(graph in graph_directed(-10..100i64).max_size(32), start: usize) {
            let n = graph.vertex_count();
            prop_assume!(n > 0 && graph.is_weighted());

            let start = start % n;
            if let Ok((dist, pred)) = bellman_ford(&graph, &start) {
                for v in graph.vertices() {
                    let path = reconstruct_path(&pred, &start, v);

                    if dist[v].is_inf() {
                        prop_assert!(path.is_empty());
                    } else {
                        prop_assert_eq!(path.first(), Some(v));
                        prop_assert_eq!(path.last(), Some(&start));
                    }
                }
            }
        }
    }
}
