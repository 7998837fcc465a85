use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("adding edge failed: {kind}")]
pub struct AddEdgeError<V> {
    /// The endpoint that is not present in the graph.
    pub vertex: V,
    pub kind: AddEdgeErrorKind,
}

impl<V> AddEdgeError<V> {
    pub fn new(vertex: V, kind: AddEdgeErrorKind) -> Self {
        Self { vertex, kind }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddEdgeErrorKind {
    SourceAbsent,
    DestinationAbsent,
}

impl fmt::Display for AddEdgeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            AddEdgeErrorKind::SourceAbsent => "source does not exist",
            AddEdgeErrorKind::DestinationAbsent => "destination does not exist",
        };
        f.write_str(reason)
    }
}
