//! `Graph` and `GraphMut` are the core traits for working with graphs in this
//! library. `Graph` provides read-only access to the graph structure, while
//! `GraphMut` extends `Graph` with methods for modifying the graph.
//!
//! Vertices are positive integers and edges are identified by an integer
//! computed from their endpoints, so neither carries any data of its own.
//! Callers that need per-vertex or per-edge data keep it in side tables keyed
//! by [`VertexId`] or [`EdgeId`].
//!
//! Queries about vertices that are not in the graph never fail: they yield
//! empty sequences, zero degrees and `false` membership.
use crate::{
    directedness::{Directed, Directedness, Undirected},
    edge_ends::EdgeEnds,
    error::Result,
};

/// A vertex identifier. Always a positive integer.
pub type VertexId = usize;

/// An edge identifier; see [`Graph::edge_id`].
pub type EdgeId = usize;

/// A trait representing a directed or undirected graph over integer vertices.
pub trait Graph {
    type Directedness: Directedness;

    /// Returns true if the graph is directed.
    fn is_directed(&self) -> bool {
        Self::Directedness::is_directed()
    }

    /// Gets the number of vertices currently in the graph.
    fn vertex_count(&self) -> usize;

    /// Gets the largest vertex id ever assigned by this graph.  Never
    /// decreases, even when that vertex is removed.
    fn max_vertex(&self) -> VertexId;

    /// Gets the number of edges in the graph.
    fn edge_count(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// Returns true if `vertex` is in the graph.
    fn contains(&self, vertex: VertexId) -> bool;

    /// Returns true if the graph has an edge from `source` to `target`.  For
    /// undirected graphs the order of the arguments does not matter.
    fn contains_edge(&self, source: VertexId, target: VertexId) -> bool;

    /// Gets the vertices of the graph in ascending order.
    fn vertices(&self) -> impl Iterator<Item = VertexId> + '_;

    /// Gets the edges of the graph in the order they were added.  Undirected
    /// edges are reported with the smaller vertex first.
    fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_;

    /// Gets the successors of `vertex` in the order their edges were added.
    /// Empty if `vertex` is not in the graph.
    fn successors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> + '_;

    /// Gets the predecessors of `vertex`, i.e. those vertices with an edge
    /// into it.  For undirected graphs this is the same as
    /// [`Self::successors`].
    fn predecessors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> + '_;

    /// Gets the number of successors of `vertex`.
    fn out_degree(&self, vertex: VertexId) -> usize {
        self.successors(vertex).count()
    }

    /// Gets the number of predecessors of `vertex`.
    fn in_degree(&self, vertex: VertexId) -> usize {
        self.predecessors(vertex).count()
    }

    /// Computes the identity of the edge `(source, target)`.
    ///
    /// For a directed edge the identity is the triangular pairing
    /// `T(source + target) + target`.  An undirected edge with ends
    /// `a <= b` gets `T(a + b) + a`, so `(u, v)` and `(v, u)` share one
    /// identity.  The edge need not exist; the value depends only on the
    /// endpoints.
    ///
    /// # Panics
    ///
    /// Panics if the identity does not fit in an [`EdgeId`], which needs
    /// endpoints summing to about `2^32` on 64-bit targets.
    fn edge_id(&self, source: VertexId, target: VertexId) -> EdgeId {
        EdgeEnds::<Self::Directedness>::new(source, target).id()
    }

    /// Recovers the canonical ends of an edge from its identity.  Every
    /// `EdgeId` decodes to some pair of ends.
    fn edge_ends(&self, id: EdgeId) -> (VertexId, VertexId) {
        EdgeEnds::<Self::Directedness>::from_id(id).values()
    }
}

/// A trait for graphs that support mutation operations.
pub trait GraphMut: Graph {
    /// Creates a new, empty graph.
    fn new() -> Self;

    /// Adds a vertex, returning the smallest positive id not currently in
    /// use.
    fn add_vertex(&mut self) -> VertexId;

    /// Adds an edge from `source` to `target` and returns its identity.  If
    /// the edge already exists the graph is unchanged and the existing
    /// identity is returned.
    ///
    /// Fails with [`GraphError::InvalidVertex`](crate::GraphError) if either
    /// end is not in the graph, leaving the graph unchanged.
    fn add_edge(&mut self, source: VertexId, target: VertexId) -> Result<EdgeId>;

    /// Removes a vertex and every edge touching it.  Returns false, changing
    /// nothing, if the vertex is not in the graph.
    fn remove_vertex(&mut self, vertex: VertexId) -> bool;

    /// Removes the edge from `source` to `target`.  Returns false, changing
    /// nothing, if there is no such edge.
    fn remove_edge(&mut self, source: VertexId, target: VertexId) -> bool;

    /// Removes all vertices and edges from the graph.
    fn clear(&mut self) {
        for vertex in self.vertices().collect::<Vec<_>>() {
            self.remove_vertex(vertex);
        }
    }
}

/// A trait which is automatically implemented for directed graphs, providing
/// methods specific to directed graphs.
pub trait GraphDirected: Graph {
    /// Finds the strongly connected component containing the given vertex.
    #[cfg(feature = "pathfinding")]
    fn strongly_connected_component(&self, start: VertexId) -> Vec<VertexId> {
        pathfinding::prelude::strongly_connected_component(&start, |&vertex| {
            self.successors(vertex)
        })
    }

    /// Partitions the graph into strongly connected components.
    #[cfg(feature = "pathfinding")]
    fn strongly_connected_components(&self) -> Vec<Vec<VertexId>> {
        pathfinding::prelude::strongly_connected_components(
            &self.vertices().collect::<Vec<_>>(),
            |&vertex| self.successors(vertex),
        )
    }
}

impl<G> GraphDirected for G where G: Graph<Directedness = Directed> {}

/// A trait which is automatically implemented for undirected graphs, providing
/// methods specific to undirected graphs.
pub trait GraphUndirected: Graph {
    /// Partitions the graph into connected components, each sorted in
    /// ascending order, ordered by their smallest vertex.
    #[cfg(feature = "pathfinding")]
    fn connected_components(&self) -> Vec<Vec<VertexId>> {
        let mut components: Vec<Vec<VertexId>> =
            pathfinding::prelude::connected_components(
                &self.vertices().collect::<Vec<_>>(),
                |&vertex| self.successors(vertex),
            )
            .into_iter()
            .map(|component| {
                let mut component: Vec<_> = component.into_iter().collect();
                component.sort_unstable();
                component
            })
            .collect();
        components.sort_unstable_by_key(|component| component[0]);
        components
    }
}

impl<G> GraphUndirected for G where G: Graph<Directedness = Undirected> {}
