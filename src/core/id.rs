use std::{fmt::Debug, hash::Hash};

/// Identifier of a vertex.
///
/// Vertices are opaque values supplied by the caller. Edges refer to them by
/// value, so the identifier must be cheap enough to clone and must be usable
/// as a hash map key.
///
/// This trait is implemented for any type satisfying the bounds, e.g., `&str`,
/// `String`, `char` or the integer types.
pub trait VertexId: Clone + Eq + Hash + Debug {}

impl<T> VertexId for T where T: Clone + Eq + Hash + Debug {}
