use super::*;

/// Depth-first preorder visitor.
///
/// The order is exactly the one of the textbook recursive formulation: a
/// vertex is reported when discovered, then its outgoing arcs are followed in
/// the order they were added, and each undiscovered target is explored
/// completely before the next arc is considered. The recursion is replaced by
/// an explicit stack of frames, so deep graphs do not exhaust the call stack.
///
/// Calling [`start`](Dfs::start) again after the traversal finished continues
/// with another root, skipping vertices visited before. Use
/// [`reset`](Dfs::reset) to forget them.
pub struct Dfs<V> {
    visited: FxHashSet<V>,
    stack: Vec<Frame<V>>,
}

struct Frame<V> {
    vertex: V,
    // Index of the next outgoing arc to follow, `None` if the vertex has not
    // been reported yet.
    cursor: Option<usize>,
}

impl<V: VertexId> Dfs<V> {
    pub fn new<W>(graph: &Graph<V, W>) -> Self {
        Self {
            visited: HashSet::with_capacity_and_hasher(
                graph.vertex_count(),
                BuildHasherDefault::default(),
            ),
            stack: Vec::new(),
        }
    }

    /// Adds a root to start the traversal from. A root that has already been
    /// visited is ignored.
    pub fn start<W>(&mut self, graph: &Graph<V, W>, root: V) -> Result<(), Error> {
        if !graph.contains_vertex(&root) {
            return Err(Error::UnknownVertex);
        }

        if self.visited.visit(root.clone()) {
            self.stack.push(Frame {
                vertex: root,
                cursor: None,
            });
        }

        Ok(())
    }

    pub fn reset(&mut self) {
        self.visited.reset_visited();
        self.stack.clear();
    }

    pub fn visited(&self) -> &impl VisitSet<V> {
        &self.visited
    }
}

impl<V: VertexId, W> Visitor<Graph<V, W>> for Dfs<V> {
    type Item = V;

    fn visit_next(&mut self, graph: &Graph<V, W>) -> Option<Self::Item> {
        loop {
            let frame = self.stack.last_mut()?;

            let cursor = match frame.cursor {
                Some(cursor) => cursor,
                None => {
                    frame.cursor = Some(0);
                    return Some(frame.vertex.clone());
                }
            };

            let edges = graph.outgoing(&frame.vertex);
            let offset = edges
                .get(cursor..)
                .unwrap_or_default()
                .iter()
                .position(|edge| !self.visited.is_visited(&edge.to));

            match offset {
                Some(offset) => {
                    let next = edges[cursor + offset].to.clone();
                    frame.cursor = Some(cursor + offset + 1);

                    self.visited.visit(next.clone());
                    self.stack.push(Frame {
                        vertex: next.clone(),
                        cursor: Some(0),
                    });

                    return Some(next);
                }
                None => {
                    // All arcs followed, backtrack.
                    self.stack.pop();
                }
            }
        }
    }
}
