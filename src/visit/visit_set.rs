use std::{
    collections::HashSet,
    hash::{BuildHasher, Hash},
};

use fixedbitset::FixedBitSet;

/// Set of already visited elements.
///
/// Identifier-keyed traversals use a hash set, algorithms that work with
/// vertex positions use a [`FixedBitSet`].
pub trait VisitSet<I> {
    /// Marks the element as visited. Returns `true` if it was not visited
    /// before.
    fn visit(&mut self, index: I) -> bool;
    fn is_visited(&self, index: &I) -> bool;
    fn visited_count(&self) -> usize;
    fn reset_visited(&mut self);
}

impl<I: Eq + Hash, S: BuildHasher> VisitSet<I> for HashSet<I, S> {
    fn visit(&mut self, index: I) -> bool {
        self.insert(index)
    }

    fn is_visited(&self, index: &I) -> bool {
        self.contains(index)
    }

    fn visited_count(&self) -> usize {
        self.len()
    }

    fn reset_visited(&mut self) {
        self.clear()
    }
}

impl VisitSet<usize> for FixedBitSet {
    fn visit(&mut self, index: usize) -> bool {
        if self.len() <= index {
            self.grow(index + 1);
        }
        !self.put(index)
    }

    fn is_visited(&self, index: &usize) -> bool {
        self.contains(*index)
    }

    fn visited_count(&self) -> usize {
        self.count_ones(..)
    }

    fn reset_visited(&mut self) {
        self.clear()
    }
}
