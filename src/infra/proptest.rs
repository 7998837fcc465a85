use std::fmt;

use proptest::{
    prelude::Rng,
    strategy::{NewTree, Strategy, ValueTree},
    test_runner::TestRunner,
};
use rustc_hash::FxHashSet;

use crate::graph::Graph;

/// Strategy for directed graphs on vertices `0..n` with every edge weight
/// drawn from `weight`.
pub fn graph_directed<E: Strategy>(weight: E) -> GraphStrategy<E> {
    GraphStrategy::new(weight, true)
}

/// Strategy for undirected graphs on vertices `0..n` with every edge weight
/// drawn from `weight`.
pub fn graph_undirected<E: Strategy>(weight: E) -> GraphStrategy<E> {
    GraphStrategy::new(weight, false)
}

/// Generates graphs without parallel edges. Between any two vertices there is
/// at most one edge, in one of the two directions if the graph is directed.
#[derive(Debug)]
pub struct GraphStrategy<E: Strategy> {
    weight: E,
    is_directed: bool,
    params: StrategyParams,
}

macro_rules! delegate_builder_fn {
    ($name:ident$(, $param:ident: $param_type:ty)*) => {
        #[doc = concat!("See [StrategyParams::", stringify!($name), "](StrategyParams::", stringify!($name), ") for details.")]
        pub fn $name(self, $($param: $param_type),*) -> Self {
            Self {
                params: self.params.$name($($param,)*),
                ..self
            }
        }
    }
}

impl<E: Strategy> GraphStrategy<E> {
    pub fn new(weight: E, is_directed: bool) -> Self {
        Self::with_params(weight, is_directed, StrategyParams::default())
    }

    pub fn with_params(weight: E, is_directed: bool, params: StrategyParams) -> Self {
        Self {
            weight,
            is_directed,
            params,
        }
    }

    // Builder pattern on the strategy itself to allow usage as in
    // `graph_directed(0..10).max_size(100).sparse()`.
    delegate_builder_fn!(max_size, max_size: usize);
    delegate_builder_fn!(allow_loops);
    delegate_builder_fn!(density, density: f32);
    delegate_builder_fn!(sparse);
}

#[derive(Debug)]
pub struct StrategyParams {
    max_size: usize,
    allow_loops: bool,
    // (0, 1] - 1 means no limitation in choosing p, lower values artificially
    // decrease chosen p
    density: f32,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            max_size: 128,
            allow_loops: false,
            density: 1.0,
        }
    }
}

impl StrategyParams {
    pub fn max_size(self, max_size: usize) -> Self {
        Self { max_size, ..self }
    }

    pub fn allow_loops(self) -> Self {
        Self {
            allow_loops: true,
            ..self
        }
    }

    pub fn density(self, density: f32) -> Self {
        assert!(
            density > 0.0 && density <= 1.0,
            "density must be in (0, 1] range"
        );
        Self { density, ..self }
    }

    pub fn sparse(self) -> Self {
        self.density(0.05)
    }
}

impl<E: Strategy> Strategy for GraphStrategy<E>
where
    E::Value: Clone,
{
    type Tree = GraphValueTree<E::Tree>;
    type Value = Graph<usize, E::Value>;

    fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
        let n = runner.rng().gen_range(0..=self.params.max_size);
        let p = runner.rng().gen::<f32>() * self.params.density;

        // Efficient generation of large random networks
        // http://vlado.fmf.uni-lj.si/pub/networks/doc/ms/rndgen.pdf
        //
        // Every unordered pair is considered at most once, which rules out
        // parallel edges.

        let m_guess = if n > 0 {
            ((n * (n - 1) / 2) as f32 * p).round() as usize
        } else {
            0
        };
        let mut edges = Vec::with_capacity(m_guess);

        let mut v = 1;
        let mut w = usize::MAX; // -1

        while v < n {
            let r: f32 = runner.rng().gen();
            w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

            if self.params.allow_loops {
                // Using `w > v` instead of `w >= v` to allow loops.
                while w > v && v < n {
                    w -= v;
                    v += 1;
                }
            } else {
                while w >= v && v < n {
                    w -= v;
                    v += 1;
                }
            }

            if v < n {
                let weight = self.weight.new_tree(runner)?;

                // In half of the cases, swap the vertices so that a directed
                // cycle is possible.
                let (src, dst) = if runner.rng().gen_bool(0.5) {
                    (w, v)
                } else {
                    (v, w)
                };

                edges.push((src, dst, weight));
            }
        }

        Ok(GraphValueTree {
            vertex_count: n,
            is_directed: self.is_directed,
            edges,
            removed_vertices: FxHashSet::default(),
            removed_edges: FxHashSet::default(),
            next: Shrink::Vertex(0),
            last: None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shrink {
    Vertex(usize),
    Edge(usize),
    Weight(usize),
}

/// Shrinks by removing vertices one by one, then edges one by one, then by
/// simplifying the weights of the remaining edges.
#[derive(Clone)]
pub struct GraphValueTree<E: ValueTree> {
    vertex_count: usize,
    is_directed: bool,
    edges: Vec<(usize, usize, E)>,
    removed_vertices: FxHashSet<usize>,
    removed_edges: FxHashSet<usize>,
    next: Shrink,
    last: Option<Shrink>,
}

impl<E: ValueTree> GraphValueTree<E> {
    fn edge_exists(&self, e: usize) -> bool {
        let (src, dst, _) = &self.edges[e];

        !(self.removed_edges.contains(&e)
            || self.removed_vertices.contains(src)
            || self.removed_vertices.contains(dst))
    }
}

impl<E: ValueTree> fmt::Debug for GraphValueTree<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphValueTree")
            .field("vertex_count", &self.vertex_count)
            .field("is_directed", &self.is_directed)
            .field("edge_count", &self.edges.len())
            .field("removed_vertices", &self.removed_vertices)
            .field("removed_edges", &self.removed_edges)
            .field("next", &self.next)
            .finish()
    }
}

impl<E: ValueTree> ValueTree for GraphValueTree<E>
where
    E::Value: Clone,
{
    type Value = Graph<usize, E::Value>;

    fn current(&self) -> Self::Value {
        let mut graph = Graph::new(self.is_directed);

        // Surviving vertices are renumbered so that they always form `0..n`.
        let mut ids = Vec::with_capacity(self.vertex_count);
        for v in 0..self.vertex_count {
            if self.removed_vertices.contains(&v) {
                ids.push(None);
            } else {
                let id = graph.vertex_count();
                graph.add_vertex(id);
                ids.push(Some(id));
            }
        }

        for (e, (src, dst, weight)) in self.edges.iter().enumerate() {
            if let (true, Some(src), Some(dst)) = (self.edge_exists(e), ids[*src], ids[*dst]) {
                let _ = graph.add_edge(src, dst, weight.current());
            }
        }

        graph
    }

    fn simplify(&mut self) -> bool {
        loop {
            match self.next {
                Shrink::Vertex(v) => {
                    if v >= self.vertex_count {
                        self.next = Shrink::Edge(0);
                    } else {
                        self.next = Shrink::Vertex(v + 1);

                        if self.removed_vertices.insert(v) {
                            self.last = Some(Shrink::Vertex(v));
                            return true;
                        }
                    }
                }
                Shrink::Edge(e) => {
                    if e >= self.edges.len() {
                        self.next = Shrink::Weight(0);
                    } else {
                        self.next = Shrink::Edge(e + 1);

                        if self.edge_exists(e) {
                            self.removed_edges.insert(e);
                            self.last = Some(Shrink::Edge(e));
                            return true;
                        }
                    }
                }
                Shrink::Weight(e) => {
                    if e >= self.edges.len() {
                        return false;
                    }

                    if self.edge_exists(e) && self.edges[e].2.simplify() {
                        self.last = Some(Shrink::Weight(e));
                        return true;
                    }

                    self.next = Shrink::Weight(e + 1);
                }
            }
        }
    }

    fn complicate(&mut self) -> bool {
        match self.last.take() {
            None => false,
            Some(Shrink::Vertex(v)) => {
                self.removed_vertices.remove(&v);
                true
            }
            Some(Shrink::Edge(e)) => {
                self.removed_edges.remove(&e);
                true
            }
            Some(Shrink::Weight(e)) => {
                if self.edges[e].2.complicate() {
                    self.last = Some(Shrink::Weight(e));
                    true
                } else {
                    false
                }
            }
        }
    }
}
