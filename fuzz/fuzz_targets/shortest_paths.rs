#![no_main]

use libfuzzer_sys::fuzz_target;

use grafo::{
    algo::{bellman_ford, dijkstra, floyd_warshall, Error},
    graph::Graph,
    infra::arbitrary::MutOpsSeq,
};

// Builds a graph from the operations and checks that the algorithms agree
// wherever they are all applicable.
fuzz_target!(|ops: MutOpsSeq<u8, i8>| {
    let mut small = Graph::new_directed();

    for op in ops {
        op.apply(&mut small);
    }

    // Widen the weights so that no path length overflows.
    let mut graph = Graph::<u8, i64>::new_directed();
    graph.extend(small.vertices().copied());
    for edge in small.edges() {
        graph
            .add_edge(*edge.from, *edge.to, edge.weight.map(|w| i64::from(*w)))
            .unwrap();
    }

    let Some(&start) = graph.vertices().next() else {
        return;
    };

    // Narrow weights overflow easily, which must be reported, not panic.
    let _ = dijkstra(&small, &start);
    let _ = bellman_ford(&small, &start);
    let _ = floyd_warshall(&small);

    match dijkstra(&graph, &start) {
        Ok(dist) => {
            let (bf_dist, _) = bellman_ford(&graph, &start).unwrap();
            assert_eq!(dist, bf_dist);

            // Floyd-Warshall takes the last of parallel edges, so it can only
            // be worse.
            let matrix = floyd_warshall(&graph).unwrap();
            for v in graph.vertices() {
                assert!(matrix[(&start, v)] >= dist[v]);
            }
        }
        Err(Error::NegativeWeightEdge) => {
            assert!(graph.has_negative_weight());
        }
        Err(error) => {
            assert_eq!(bellman_ford(&graph, &start).unwrap_err(), error);
            assert_eq!(floyd_warshall(&graph).unwrap_err(), error);
        }
    }
});
