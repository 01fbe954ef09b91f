//! Single-source shortest paths by Dijkstra's algorithm or A* search.
//!
//! The search is a [`Traversal`] over a [`PriorityFringe`] ordered by
//! tentative distance plus heuristic, whose visitor relaxes the edges out of
//! each vertex it visits.  Supplying [`EdgeWeights::estimated_distance`]
//! turns Dijkstra into A*.
use std::ops::ControlFlow;

use crate::{
    fringe::PriorityFringe,
    graph::{Graph, VertexId},
    marks::Marks,
    path_table::{DensePathTable, PathTable},
    tracing_support::{debug, info_span, trace},
    traversal::{Traversal, Visitor},
    weights::EdgeWeights,
};

/// The shortest paths through an edge-weighted graph from one source vertex,
/// optionally stopping once a destination is reached.
///
/// Results are available after [`Self::solve`].  When a destination is set,
/// only the distance and path to the destination are guaranteed to be final.
pub struct ShortestPaths<'g, G: Graph, W: EdgeWeights, T: PathTable = DensePathTable> {
    graph: &'g G,
    source: VertexId,
    destination: Option<VertexId>,
    weights: W,
    table: T,
}

impl<'g, G: Graph, W: EdgeWeights> ShortestPaths<'g, G, W> {
    /// The shortest paths in `graph` from `source`.
    pub fn new(graph: &'g G, source: VertexId, weights: W) -> Self {
        Self::with_table(graph, source, weights, DensePathTable::new())
    }
}

impl<'g, G: Graph, W: EdgeWeights, T: PathTable> ShortestPaths<'g, G, W, T> {
    /// The shortest paths in `graph` from `source`, recorded in `table`.
    pub fn with_table(graph: &'g G, source: VertexId, weights: W, table: T) -> Self {
        Self {
            graph,
            source,
            destination: None,
            weights,
            table,
        }
    }

    /// Stops the search as soon as the shortest path to `destination` is
    /// known.
    pub fn with_destination(mut self, destination: VertexId) -> Self {
        self.destination = Some(destination);
        self
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn destination(&self) -> Option<VertexId> {
        self.destination
    }

    pub fn weights(&self) -> &W {
        &self.weights
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    /// Runs the search, replacing the results of any earlier run.
    pub fn solve(&mut self) {
        let _span = info_span!("shortest_paths", source = self.source).entered();
        self.table.reset(self.graph.max_vertex());
        if !self.graph.contains(self.source) {
            debug!(source = self.source, "source not in graph");
            return;
        }
        self.table.set_distance(self.source, 0.0);
        let mut relaxation = Relaxation {
            weights: &self.weights,
            table: &mut self.table,
            destination: self.destination,
        };
        let _ = Traversal::new(self.graph, PriorityFringe::new(), false)
            .traverse_from(self.source, &mut relaxation);
    }

    /// Gets the length of the shortest path to `vertex`, or infinity if
    /// `vertex` was not reached.
    pub fn distance_to(&self, vertex: VertexId) -> f64 {
        self.table.distance(vertex)
    }

    /// Gets the vertex before `vertex` on its shortest path.
    pub fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.table.predecessor(vertex)
    }

    /// Gets the vertices of the shortest path from the source to `vertex`,
    /// inclusive.  Empty if `vertex` was not reached.
    pub fn path_to(&self, vertex: VertexId) -> Vec<VertexId> {
        if self.distance_to(vertex).is_infinite() {
            return Vec::new();
        }
        let mut path = vec![vertex];
        let mut current = vertex;
        while let Some(previous) = self.table.predecessor(current) {
            path.push(previous);
            current = previous;
        }
        path.reverse();
        path
    }

    /// Gets the shortest path to the destination, if one was set.
    pub fn path_to_destination(&self) -> Vec<VertexId> {
        self.destination
            .map(|destination| self.path_to(destination))
            .unwrap_or_default()
    }
}

/// The visitor driving the search: stops at the destination, relaxes edges,
/// and prioritizes vertices by distance plus heuristic.
struct Relaxation<'a, W, T> {
    weights: &'a W,
    table: &'a mut T,
    destination: Option<VertexId>,
}

impl<W: EdgeWeights, T: PathTable> Visitor for Relaxation<'_, W, T> {
    fn visit(&mut self, vertex: VertexId) -> ControlFlow<()> {
        if self.destination == Some(vertex) {
            debug!(vertex, distance = self.table.distance(vertex), "destination reached");
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    fn process_successor(&mut self, vertex: VertexId, successor: VertexId, marks: &mut Marks) -> bool {
        let candidate = self.table.distance(vertex) + self.weights.weight(vertex, successor);
        if candidate < self.table.distance(successor) {
            trace!(vertex, successor, distance = candidate, "relax");
            self.table.set_distance(successor, candidate);
            self.table.set_predecessor(successor, Some(vertex));
            // A settled vertex that got closer must be searched again.
            marks.unmark(successor);
            true
        } else {
            false
        }
    }

    fn priority(&self, vertex: VertexId) -> f64 {
        self.table.distance(vertex) + self.weights.estimated_distance(vertex)
    }
}
