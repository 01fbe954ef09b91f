use std::fmt::Debug;

use derivative::Derivative;
use indexmap::IndexSet;

use crate::{
    directedness::{Directed, Directedness, Undirected},
    edge_ends::EdgeEnds,
    error::{GraphError, Result},
    graph::{EdgeId, Graph, GraphMut, VertexId},
};

/// A directed graph over integer vertices.
pub type DirectedGraph = GraphStore<Directed>;

/// An undirected graph over integer vertices.
pub type UndirectedGraph = GraphStore<Undirected>;

/// Vertex, edge and adjacency storage shared by directed and undirected
/// graphs.
///
/// Vertex `v` owns slot `v - 1` of the adjacency table; a slot is `None`
/// while its vertex is absent.  The table only grows, so its length is the
/// largest vertex id ever assigned.  Each present vertex keeps its neighbors
/// in an insertion-ordered set, and the edge set is authoritative: every
/// mutation updates both so that adjacency is always the (for undirected
/// graphs, symmetric) closure of the edge set.
#[derive(Derivative)]
#[derivative(Clone(bound = ""))]
pub struct GraphStore<D: Directedness> {
    adjacency: Vec<Option<IndexSet<VertexId>>>,
    edges: IndexSet<EdgeEnds<D>>,
    vertex_count: usize,
}

impl<D: Directedness> GraphStore<D> {
    pub fn new() -> Self {
        Self {
            adjacency: Vec::new(),
            edges: IndexSet::new(),
            vertex_count: 0,
        }
    }

    fn neighbors(&self, vertex: VertexId) -> Option<&IndexSet<VertexId>> {
        vertex
            .checked_sub(1)
            .and_then(|slot| self.adjacency.get(slot))
            .and_then(Option::as_ref)
    }

    fn neighbors_mut(&mut self, vertex: VertexId) -> Option<&mut IndexSet<VertexId>> {
        vertex
            .checked_sub(1)
            .and_then(|slot| self.adjacency.get_mut(slot))
            .and_then(Option::as_mut)
    }

    fn link(&mut self, from: VertexId, into: VertexId) {
        if let Some(neighbors) = self.neighbors_mut(from) {
            neighbors.insert(into);
        }
    }

    fn unlink(&mut self, from: VertexId, into: VertexId) {
        if let Some(neighbors) = self.neighbors_mut(from) {
            neighbors.shift_remove(&into);
        }
    }
}

impl<D: Directedness> Default for GraphStore<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Directedness> Graph for GraphStore<D> {
    type Directedness = D;

    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn max_vertex(&self) -> VertexId {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn contains(&self, vertex: VertexId) -> bool {
        self.neighbors(vertex).is_some()
    }

    fn contains_edge(&self, source: VertexId, target: VertexId) -> bool {
        self.edges.contains(&EdgeEnds::new(source, target))
    }

    fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .filter(|(_, neighbors)| neighbors.is_some())
            .map(|(slot, _)| slot + 1)
    }

    fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.edges.iter().map(EdgeEnds::values)
    }

    fn successors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.neighbors(vertex).into_iter().flatten().copied()
    }

    fn predecessors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        let predecessors: Vec<VertexId> = if D::is_directed() {
            self.edges
                .iter()
                .filter(|ends| ends.target() == vertex)
                .map(EdgeEnds::source)
                .collect()
        } else {
            self.successors(vertex).collect()
        };
        predecessors.into_iter()
    }

    fn out_degree(&self, vertex: VertexId) -> usize {
        self.neighbors(vertex).map_or(0, IndexSet::len)
    }
}

impl<D: Directedness> GraphMut for GraphStore<D> {
    fn new() -> Self {
        GraphStore::new()
    }

    fn add_vertex(&mut self) -> VertexId {
        let vertex = match self.adjacency.iter().position(Option::is_none) {
            Some(slot) => {
                self.adjacency[slot] = Some(IndexSet::new());
                slot + 1
            }
            None => {
                self.adjacency.push(Some(IndexSet::new()));
                self.adjacency.len()
            }
        };
        self.vertex_count += 1;
        vertex
    }

    fn add_edge(&mut self, source: VertexId, target: VertexId) -> Result<EdgeId> {
        for vertex in [source, target] {
            if !self.contains(vertex) {
                return Err(GraphError::InvalidVertex(vertex));
            }
        }
        let ends = EdgeEnds::<D>::new(source, target);
        if self.edges.insert(ends) {
            self.link(source, target);
            if !D::is_directed() {
                self.link(target, source);
            }
        }
        Ok(ends.id())
    }

    fn remove_vertex(&mut self, vertex: VertexId) -> bool {
        if !self.contains(vertex) {
            return false;
        }
        self.edges.retain(|ends| !ends.touches(vertex));
        self.adjacency[vertex - 1] = None;
        for neighbors in self.adjacency.iter_mut().flatten() {
            neighbors.shift_remove(&vertex);
        }
        self.vertex_count -= 1;
        true
    }

    fn remove_edge(&mut self, source: VertexId, target: VertexId) -> bool {
        if !self.edges.shift_remove(&EdgeEnds::<D>::new(source, target)) {
            return false;
        }
        self.unlink(source, target);
        if !D::is_directed() {
            self.unlink(target, source);
        }
        true
    }

    fn clear(&mut self) {
        for neighbors in self.adjacency.iter_mut() {
            *neighbors = None;
        }
        self.edges.clear();
        self.vertex_count = 0;
    }
}

impl<D: Directedness> Debug for GraphStore<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = if D::is_directed() {
            "DirectedGraph"
        } else {
            "UndirectedGraph"
        };
        f.debug_struct(name)
            .field("vertices", &self.vertices().collect::<Vec<_>>())
            .field("edges", &self.edges().collect::<Vec<_>>())
            .finish()
    }
}
