use super::*;

/// Breadth-first visitor.
///
/// Vertices are marked as visited when they are enqueued, so each of them is
/// enqueued at most once.
pub struct Bfs<V> {
    visited: FxHashSet<V>,
    queue: VecDeque<V>,
}

impl<V: VertexId> Bfs<V> {
    pub fn new<W>(graph: &Graph<V, W>) -> Self {
        Self {
            visited: HashSet::with_capacity_and_hasher(
                graph.vertex_count(),
                BuildHasherDefault::default(),
            ),
            queue: VecDeque::new(),
        }
    }

    /// Adds a root to start the traversal from. A root that has already been
    /// visited is ignored.
    pub fn start<W>(&mut self, graph: &Graph<V, W>, root: V) -> Result<(), Error> {
        if !graph.contains_vertex(&root) {
            return Err(Error::UnknownVertex);
        }

        if self.visited.visit(root.clone()) {
            self.queue.push_back(root);
        }

        Ok(())
    }

    pub fn reset(&mut self) {
        self.visited.reset_visited();
        self.queue.clear();
    }

    pub fn visited(&self) -> &impl VisitSet<V> {
        &self.visited
    }
}

impl<V: VertexId, W> Visitor<Graph<V, W>> for Bfs<V> {
    type Item = V;

    fn visit_next(&mut self, graph: &Graph<V, W>) -> Option<Self::Item> {
        let vertex = self.queue.pop_front()?;

        for edge in graph.outgoing(&vertex) {
            if self.visited.visit(edge.to.clone()) {
                self.queue.push_back(edge.to.clone());
            }
        }

        Some(vertex)
    }
}
