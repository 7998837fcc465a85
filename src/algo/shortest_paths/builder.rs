use rustc_hash::FxHashMap;

use crate::{
    algo::Error,
    core::{VertexId, Weight},
    graph::Graph,
};

use super::{bellman_ford_dist, dijkstra_dist, Algo, ShortestPaths};

pub struct ShortestPathsBuilder<'a, V, W> {
    graph: &'a Graph<V, W>,
    algo: Option<Algo>,
}

impl<V, W> ShortestPaths<V, W>
where
    V: VertexId,
    W: Weight,
{
    pub fn on(graph: &Graph<V, W>) -> ShortestPathsBuilder<'_, V, W> {
        ShortestPathsBuilder { graph, algo: None }
    }
}

impl<'a, V, W> ShortestPathsBuilder<'a, V, W>
where
    V: VertexId,
    W: Weight,
{
    pub fn dijkstra(self) -> Self {
        self.using(Algo::Dijkstra)
    }

    pub fn bellman_ford(self) -> Self {
        self.using(Algo::BellmanFord)
    }

    pub fn using(self, algo: Algo) -> Self {
        self.using_opt(Some(algo))
    }

    /// Uses the given algorithm, or chooses one automatically if `None`.
    pub fn using_opt(self, algo: Option<Algo>) -> Self {
        Self { algo, ..self }
    }

    pub fn run(self, source: &V) -> Result<ShortestPaths<V, W>, Error> {
        let algo = self.algo.unwrap_or_else(|| self.choose_algo());

        let (dist, pred) = match algo {
            Algo::Dijkstra => (dijkstra_dist(self.graph, source)?, Vec::new()),
            Algo::BellmanFord => bellman_ford_dist(self.graph, source)?,
        };

        let vertices = self.graph.vertex_set();

        let dist = vertices
            .iter()
            .zip(dist)
            .filter_map(|(v, d)| Some((v.clone(), d?)))
            .collect();

        let pred = vertices
            .iter()
            .zip(pred)
            .filter_map(|(v, p)| Some((v.clone(), vertices.get(p?)?.clone())))
            .collect::<FxHashMap<_, _>>();

        Ok(ShortestPaths {
            source: source.clone(),
            algo,
            dist,
            pred,
        })
    }

    fn choose_algo(&self) -> Algo {
        if self.graph.has_negative_weight() {
            // Dijkstra would refuse to run.
            Algo::BellmanFord
        } else {
            Algo::Dijkstra
        }
    }
}
