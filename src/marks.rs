use bitvec::prelude::*;

use crate::graph::VertexId;

/// A set of marked vertices, stored as one bit per vertex id.
///
/// The set grows on demand, so marking a vertex added after the set was
/// created is fine; unmarked and out-of-range ids read as unmarked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Marks {
    bits: BitVec,
}

impl Marks {
    /// Creates an empty set with room for vertex ids up to `max_vertex`.
    pub fn with_max_vertex(max_vertex: VertexId) -> Self {
        Self {
            bits: bitvec![0; max_vertex + 1],
        }
    }

    pub fn is_marked(&self, vertex: VertexId) -> bool {
        self.bits.get(vertex).is_some_and(|bit| *bit)
    }

    /// Marks a vertex, returning true if it was not already marked.
    pub fn mark(&mut self, vertex: VertexId) -> bool {
        if vertex >= self.bits.len() {
            self.bits.resize(vertex + 1, false);
        }
        !self.bits.replace(vertex, true)
    }

    /// Unmarks a vertex, returning true if it was marked.
    pub fn unmark(&mut self, vertex: VertexId) -> bool {
        vertex < self.bits.len() && self.bits.replace(vertex, false)
    }

    pub fn clear(&mut self) {
        self.bits.fill(false);
    }

    /// Gets the number of marked vertices.
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Gets the marked vertices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.bits.iter_ones()
    }
}
