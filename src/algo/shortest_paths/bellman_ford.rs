use fixedbitset::FixedBitSet;

use crate::{
    algo::{by_vertex, ensure_weighted, or_inf, position, Arcs, Error},
    core::{
        weight::{relax, Relaxation},
        VertexId, Weight,
    },
    graph::Graph,
};

use super::{DistanceMap, PredecessorMap};

/// Distances and predecessors from `start` in a graph whose edges may have
/// negative weights.
///
/// The graph must be weighted, `start` must exist and all edges must have a
/// weight. If a negative cycle is reachable from `start`,
/// [`Error::NegativeCycle`] is returned instead of any distances. If a
/// shortest distance does not fit in the weight type,
/// [`Error::WeightOverflow`] is returned. This is also the case for a negative
/// cycle whose sums leave the range of the type before it is detected.
///
/// Every vertex is present in both returned maps. Unreachable vertices get the
/// [infinite](Weight::inf) distance, and `start` together with the unreachable
/// vertices have no predecessor. Use [`reconstruct_path`](super::reconstruct_path)
/// to walk the predecessors.
pub fn bellman_ford<V, W>(
    graph: &Graph<V, W>,
    start: &V,
) -> Result<(DistanceMap<V, W>, PredecessorMap<V>), Error>
where
    V: VertexId,
    W: Weight,
{
    let (dist, pred) = bellman_ford_dist(graph, start)?;

    let vertices = graph.vertex_set();
    let pred: Vec<Option<V>> = pred
        .into_iter()
        .map(|p| p.and_then(|p| vertices.get(p).cloned()))
        .collect();

    Ok((by_vertex(graph, or_inf(dist)), by_vertex(graph, pred)))
}

/// Distances and predecessors by vertex position, `None` for unreachable
/// vertices.
#[allow(clippy::type_complexity)]
pub(crate) fn bellman_ford_dist<V, W>(
    graph: &Graph<V, W>,
    start: &V,
) -> Result<(Vec<Option<W>>, Vec<Option<usize>>), Error>
where
    V: VertexId,
    W: Weight,
{
    ensure_weighted(graph)?;
    let source = position(graph, start)?;
    let arcs = Arcs::collect(graph)?;

    log::debug!(
        "bellman-ford from {start:?} on {} vertices and {} arcs",
        arcs.vertex_count(),
        arcs.len()
    );

    let n = arcs.vertex_count();
    let mut dist = vec![None; n];
    let mut pred = vec![None; n];
    let mut overflowed = FixedBitSet::with_capacity(n);
    let mut underflowed = false;

    dist[source] = Some(W::zero());

    let mut terminated_early = false;

    // Try to relax edges |V| - 1 times.
    for _ in 1..n {
        let mut relaxed = false;

        for arc in arcs.iter() {
            // Relax if better.
            match relax(&dist[arc.from], &arc.weight, &dist[arc.to]) {
                Relaxation::Improved(next_dist) => {
                    dist[arc.to] = Some(next_dist);
                    pred[arc.to] = Some(arc.from);
                    relaxed = true;
                }
                Relaxation::Unchanged => {}
                Relaxation::Overflow => overflowed.insert(arc.to),
                Relaxation::Underflow => {
                    // The true distance is below anything representable, so
                    // the pass counts as improving.
                    underflowed = true;
                    relaxed = true;
                }
            }
        }

        // If no distance was improved, then subsequent iterations would not
        // improve as well. So we can terminate early.
        if !relaxed {
            terminated_early = true;
            break;
        }
    }

    // Check for negative cycles. If the main loop was terminated early, then
    // the absence of cycle is guaranteed.
    if !terminated_early {
        for arc in arcs.iter() {
            if let Relaxation::Improved(_) = relax(&dist[arc.from], &arc.weight, &dist[arc.to]) {
                log::debug!("bellman-ford from {start:?} found a negative cycle");
                return Err(Error::NegativeCycle);
            }
        }
    }

    if underflowed || overflowed.ones().any(|v| dist[v].is_none()) {
        log::debug!("bellman-ford from {start:?}: distance out of range");
        return Err(Error::WeightOverflow);
    }

    Ok((dist, pred))
}
