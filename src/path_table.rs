//! Storage for the results of a shortest-path search.
use std::collections::HashMap;

use crate::graph::VertexId;

/// Tentative distances and predecessors, one entry per vertex.
///
/// Vertices that were never given a distance read as infinitely far away
/// with no predecessor.
pub trait PathTable {
    /// Forgets every entry.  `max_vertex` is the largest vertex id the
    /// search may touch.
    fn reset(&mut self, max_vertex: VertexId);

    fn distance(&self, vertex: VertexId) -> f64;

    fn set_distance(&mut self, vertex: VertexId, distance: f64);

    fn predecessor(&self, vertex: VertexId) -> Option<VertexId>;

    fn set_predecessor(&mut self, vertex: VertexId, predecessor: Option<VertexId>);
}

/// A [`PathTable`] backed by dense vectors indexed directly by vertex id.
#[derive(Clone, Debug, Default)]
pub struct DensePathTable {
    distances: Vec<f64>,
    predecessors: Vec<Option<VertexId>>,
}

impl DensePathTable {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure(&mut self, vertex: VertexId) {
        if vertex >= self.distances.len() {
            self.distances.resize(vertex + 1, f64::INFINITY);
            self.predecessors.resize(vertex + 1, None);
        }
    }
}

impl PathTable for DensePathTable {
    fn reset(&mut self, max_vertex: VertexId) {
        self.distances.clear();
        self.predecessors.clear();
        self.ensure(max_vertex);
    }

    fn distance(&self, vertex: VertexId) -> f64 {
        self.distances
            .get(vertex)
            .copied()
            .unwrap_or(f64::INFINITY)
    }

    fn set_distance(&mut self, vertex: VertexId, distance: f64) {
        self.ensure(vertex);
        self.distances[vertex] = distance;
    }

    fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.predecessors.get(vertex).copied().flatten()
    }

    fn set_predecessor(&mut self, vertex: VertexId, predecessor: Option<VertexId>) {
        self.ensure(vertex);
        self.predecessors[vertex] = predecessor;
    }
}

/// A [`PathTable`] that only stores the vertices the search reaches.
#[derive(Clone, Debug, Default)]
pub struct SparsePathTable {
    entries: HashMap<VertexId, (f64, Option<VertexId>)>,
}

impl SparsePathTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the number of vertices with an entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PathTable for SparsePathTable {
    fn reset(&mut self, _max_vertex: VertexId) {
        self.entries.clear();
    }

    fn distance(&self, vertex: VertexId) -> f64 {
        self.entries
            .get(&vertex)
            .map_or(f64::INFINITY, |&(distance, _)| distance)
    }

    fn set_distance(&mut self, vertex: VertexId, distance: f64) {
        self.entries.entry(vertex).or_insert((f64::INFINITY, None)).0 = distance;
    }

    fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.entries.get(&vertex).and_then(|&(_, predecessor)| predecessor)
    }

    fn set_predecessor(&mut self, vertex: VertexId, predecessor: Option<VertexId>) {
        self.entries.entry(vertex).or_insert((f64::INFINITY, None)).1 = predecessor;
    }
}
