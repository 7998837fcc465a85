use fixedbitset::FixedBitSet;

use crate::{
    algo::{by_vertex, ensure_weighted, or_inf, position, Arcs, Error},
    core::{
        weight::{relax, Relaxation},
        VertexId, Weight,
    },
    graph::Graph,
    visit::VisitSet,
};

use super::DistanceMap;

/// Distances from `start` to every vertex of a graph with non-negative edge
/// weights.
///
/// The preconditions are checked in this order: the graph must be weighted,
/// `start` must exist, and no edge may be unweighted or have a negative
/// weight. Unreachable vertices get the [infinite](Weight::inf) distance.
/// If a vertex is reachable only by paths longer than the weight type can
/// represent, [`Error::WeightOverflow`] is returned.
///
/// This is the classic formulation without a priority queue: the closest
/// unfinished vertex is found by a linear scan, which makes the algorithm
/// O(|V|² + |E|).
pub fn dijkstra<V, W>(graph: &Graph<V, W>, start: &V) -> Result<DistanceMap<V, W>, Error>
where
    V: VertexId,
    W: Weight,
{
    let dist = dijkstra_dist(graph, start)?;
    Ok(by_vertex(graph, or_inf(dist)))
}

/// Distances by vertex position, `None` for unreachable vertices.
pub(crate) fn dijkstra_dist<V, W>(graph: &Graph<V, W>, start: &V) -> Result<Vec<Option<W>>, Error>
where
    V: VertexId,
    W: Weight,
{
    ensure_weighted(graph)?;
    let source = position(graph, start)?;

    let arcs = Arcs::collect(graph)?;
    if arcs.iter().any(|arc| arc.weight.is_negative()) {
        log::debug!("dijkstra from {start:?} rejected: negative edge weight");
        return Err(Error::NegativeWeightEdge);
    }

    log::debug!(
        "dijkstra from {start:?} on {} vertices and {} arcs",
        arcs.vertex_count(),
        arcs.len()
    );

    let n = arcs.vertex_count();
    let mut dist = vec![None; n];
    let mut finished = FixedBitSet::with_capacity(n);
    let mut overflowed = FixedBitSet::with_capacity(n);

    dist[source] = Some(W::zero());

    while let Some(closest) = closest_unfinished(&dist, &finished) {
        for arc in arcs.outgoing(closest) {
            // Relaxation operation. If the distance is better than what we had
            // so far, update it.
            match relax(&dist[closest], &arc.weight, &dist[arc.to]) {
                Relaxation::Improved(next_dist) => dist[arc.to] = Some(next_dist),
                Relaxation::Unchanged => {}
                Relaxation::Overflow | Relaxation::Underflow => overflowed.insert(arc.to),
            }
        }

        finished.visit(closest);
    }

    if overflowed.ones().any(|v| dist[v].is_none()) {
        log::debug!("dijkstra from {start:?}: distance out of range");
        return Err(Error::WeightOverflow);
    }

    Ok(dist)
}

/// Position of the unfinished reachable vertex with the smallest distance.
/// Ties are resolved in favor of the earlier vertex.
fn closest_unfinished<W: Weight>(dist: &[Option<W>], finished: &FixedBitSet) -> Option<usize> {
    let mut closest: Option<(usize, &W)> = None;

    for (i, d) in dist.iter().enumerate() {
        let Some(d) = d else {
            continue;
        };

        if finished.is_visited(&i) {
            continue;
        }

        if closest.map_or(true, |(_, best)| d < best) {
            closest = Some((i, d));
        }
    }

    closest.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closest_prefers_earlier_on_tie() {
        let dist = [Some(5), Some(2), None, Some(2)];
        let mut finished = FixedBitSet::with_capacity(4);

        assert_eq!(closest_unfinished(&dist, &finished), Some(1));

        finished.visit(1);
        assert_eq!(closest_unfinished(&dist, &finished), Some(3));

        finished.visit(3);
        finished.visit(0);
        assert_eq!(closest_unfinished(&dist, &finished), None);
    }

    #[test]
    fn closest_picks_max_valued_distance() {
        let dist = [Some(u8::MAX), None];
        let finished = FixedBitSet::with_capacity(2);

        assert_eq!(closest_unfinished(&dist, &finished), Some(0));
    }
}
