use std::fmt;

use arbitrary::{Arbitrary, Unstructured};

use crate::{
    core::{AddEdgeError, VertexId},
    graph::Graph,
};

/// Arbitrary number resolved to an existing vertex by its position modulo the
/// vertex count.
#[derive(Debug, Arbitrary, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Index(pub usize);

impl Index {
    pub fn get(&self, m: usize) -> Option<usize> {
        if m > 0 {
            Some(self.0 % m)
        } else {
            None
        }
    }

    fn resolve<V: VertexId, W>(&self, graph: &Graph<V, W>) -> Option<V> {
        let position = self.get(graph.vertex_count())?;
        graph.vertices().nth(position).cloned()
    }
}

#[derive(Debug, Arbitrary, Clone)]
pub enum MutOp<V, W> {
    AddVertex(V),
    RemoveVertex(Index),
    Clear,
    AddEdge(Index, Index, Option<W>),
    RemoveEdge(Index, Index),
    ClearEdges,
    SetDirected(bool),
}

#[derive(Debug, PartialEq)]
pub enum MutOpResult<V> {
    AddVertex(bool),
    RemoveVertex(bool),
    Clear,
    /// `None` if the graph has no vertices to connect.
    AddEdge(Option<Result<(), AddEdgeError<V>>>),
    RemoveEdge(usize),
    ClearEdges,
    SetDirected,
}

impl<V, W> MutOp<V, W>
where
    V: VertexId,
    W: Clone,
{
    pub fn apply(self, graph: &mut Graph<V, W>) -> MutOpResult<V> {
        match self {
            MutOp::AddVertex(vertex) => MutOpResult::AddVertex(graph.add_vertex(vertex)),
            MutOp::RemoveVertex(index) => {
                let removed = match index.resolve(graph) {
                    Some(vertex) => graph.remove_vertex(&vertex),
                    None => false,
                };
                MutOpResult::RemoveVertex(removed)
            }
            MutOp::Clear => {
                graph.clear();
                MutOpResult::Clear
            }
            MutOp::AddEdge(from, to, weight) => {
                let endpoints = from.resolve(graph).zip(to.resolve(graph));
                MutOpResult::AddEdge(
                    endpoints.map(|(from, to)| graph.add_edge(from, to, weight)),
                )
            }
            MutOp::RemoveEdge(from, to) => {
                let removed = match from.resolve(graph).zip(to.resolve(graph)) {
                    Some((from, to)) => graph.remove_edge(&from, &to),
                    None => 0,
                };
                MutOpResult::RemoveEdge(removed)
            }
            MutOp::ClearEdges => {
                graph.clear_edges();
                MutOpResult::ClearEdges
            }
            MutOp::SetDirected(is_directed) => {
                graph.set_directed(is_directed);
                MutOpResult::SetDirected
            }
        }
    }
}

pub struct MutOpsSeq<V, W>(pub Vec<MutOp<V, W>>);

impl<V, W> IntoIterator for MutOpsSeq<V, W> {
    type Item = MutOp<V, W>;
    type IntoIter = std::vec::IntoIter<MutOp<V, W>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<V, W> MutOpsSeq<V, W>
where
    V: VertexId,
    W: Clone + fmt::Debug,
{
    /// Applies the operations and prints them as Rust code with indices
    /// resolved to actual vertices, for turning a fuzz finding into a test.
    pub fn replay(self, graph: &mut Graph<V, W>) {
        println!("let mut graph = Graph::new({});", graph.is_directed());
        println!();

        for op in self {
            match &op {
                MutOp::AddVertex(vertex) => println!("graph.add_vertex({vertex:?});"),
                MutOp::RemoveVertex(index) => {
                    if let Some(vertex) = index.resolve(graph) {
                        println!("graph.remove_vertex(&{vertex:?});");
                    }
                }
                MutOp::Clear => println!("graph.clear();"),
                MutOp::AddEdge(from, to, weight) => {
                    if let Some((from, to)) = from.resolve(graph).zip(to.resolve(graph)) {
                        println!("graph.add_edge({from:?}, {to:?}, {weight:?}).unwrap();");
                    }
                }
                MutOp::RemoveEdge(from, to) => {
                    if let Some((from, to)) = from.resolve(graph).zip(to.resolve(graph)) {
                        println!("graph.remove_edge(&{from:?}, &{to:?});");
                    }
                }
                MutOp::ClearEdges => println!("graph.clear_edges();"),
                MutOp::SetDirected(is_directed) => {
                    println!("graph.set_directed({is_directed});")
                }
            }

            op.apply(graph);
        }

        println!();
        println!("check_consistency(&graph).unwrap();");
    }
}

impl<V: fmt::Debug, W: fmt::Debug> fmt::Debug for MutOpsSeq<V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MutOpsSeq(vec![")?;

        for op in self.0.iter() {
            writeln!(f, "    MutOp::{:?},", op)?;
        }

        writeln!(f, "])")?;
        writeln!(f, ".replay(&mut graph);")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum OpKind {
    AddVertex,
    AddEdge,
    RemoveVertex,
    RemoveEdge,
    Clear,
    ClearEdges,
    SetDirected,
}

/// Approximate shape of the graph built by the sequence generated so far, and
/// the shape it grows towards.
struct Shape {
    vertices: usize,
    arcs: usize,
    max_vertices: usize,
    // Percentage of all possible arcs.
    density: usize,
}

impl Shape {
    fn update<V, W>(&mut self, op: &MutOp<V, W>) {
        match op {
            MutOp::AddVertex(_) => self.vertices += 1,
            MutOp::RemoveVertex(_) => self.vertices = self.vertices.saturating_sub(1),
            MutOp::Clear => {
                self.vertices = 0;
                self.arcs = 0;
            }
            MutOp::AddEdge(_, _, _) => self.arcs += 1,
            MutOp::RemoveEdge(_, _) => self.arcs = self.arcs.saturating_sub(1),
            MutOp::ClearEdges => self.arcs = 0,
            MutOp::SetDirected(_) => {}
        }
    }

    fn growing_kind(&self, coin: bool) -> OpKind {
        let enough_vertices = self.vertices >= self.max_vertices;
        let enough_arcs = self.arcs * 100 >= self.density * self.vertices * self.vertices;

        match (enough_vertices, enough_arcs) {
            (false, false) if coin => OpKind::AddVertex,
            (false, false) => OpKind::AddEdge,
            (false, true) => OpKind::AddVertex,
            (true, false) => OpKind::AddEdge,
            (true, true) if coin => OpKind::RemoveVertex,
            (true, true) => OpKind::RemoveEdge,
        }
    }

    fn next_kind(&self, u: &mut Unstructured<'_>) -> arbitrary::Result<OpKind> {
        let roll = u.int_in_range(0..=99u8)?;

        let kind = match roll {
            0 => OpKind::Clear,
            1 => OpKind::ClearEdges,
            2 | 3 => OpKind::SetDirected,
            4..=7 => OpKind::RemoveVertex,
            8..=15 => OpKind::RemoveEdge,
            _ => self.growing_kind(roll % 2 == 0),
        };

        Ok(kind)
    }
}

impl<'a, V, W> Arbitrary<'a> for MutOpsSeq<V, W>
where
    V: Arbitrary<'a>,
    W: Arbitrary<'a>,
{
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let mut shape = Shape {
            vertices: 0,
            arcs: 0,
            max_vertices: u.int_in_range(8..=128)?,
            density: u.int_in_range(1..=50)?,
        };

        let mut seq = Vec::new();

        while !u.is_empty() {
            let op = match arbitrary_op(u, &shape) {
                Ok(op) => op,
                Err(_) => break,
            };

            shape.update(&op);
            seq.push(op);
        }

        Ok(MutOpsSeq(seq))
    }
}

fn arbitrary_op<'a, V, W>(u: &mut Unstructured<'a>, shape: &Shape) -> arbitrary::Result<MutOp<V, W>>
where
    V: Arbitrary<'a>,
    W: Arbitrary<'a>,
{
    let op = match shape.next_kind(u)? {
        OpKind::AddVertex => MutOp::AddVertex(u.arbitrary()?),
        OpKind::AddEdge => MutOp::AddEdge(u.arbitrary()?, u.arbitrary()?, u.arbitrary()?),
        OpKind::RemoveVertex => MutOp::RemoveVertex(u.arbitrary()?),
        OpKind::RemoveEdge => MutOp::RemoveEdge(u.arbitrary()?, u.arbitrary()?),
        OpKind::Clear => MutOp::Clear,
        OpKind::ClearEdges => MutOp::ClearEdges,
        OpKind::SetDirected => MutOp::SetDirected(u.arbitrary()?),
    };

    Ok(op)
}
