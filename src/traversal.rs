//! A generalized, fringe-driven graph traversal.
//!
//! At any given time there is a collection of discovered but unprocessed
//! vertices: the fringe.  Traversal consists of repeatedly removing a vertex
//! from the fringe, marking and visiting it, and then adding its admitted
//! successors to the fringe.  The kind of [`Fringe`] chooses the order
//! (queue for breadth-first, stack for depth-first, priority for shortest
//! paths) and a [`Visitor`] supplies the hooks that decide what a visit does.
//!
//! Marks persist across calls to [`Traversal::traverse`] until
//! [`Traversal::clear`] is called, so a traversal may be interrupted and
//! resumed, or continued from new starting vertices.
use std::{collections::VecDeque, ops::ControlFlow};

use crate::{
    fringe::Fringe,
    graph::{Graph, VertexId},
    marks::Marks,
    tracing_support::{debug, info_span, trace},
};

/// Hooks called by [`Traversal::traverse`].  Every method has a default, so
/// a visitor only implements the ones it cares about.
pub trait Visitor {
    /// Called once for each vertex as it is marked, unless the vertex is
    /// post-visited instead.  Returning `Break` stops the traversal.
    fn visit(&mut self, _vertex: VertexId) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Returns true if `vertex` should be post-visited after its successors
    /// are exhausted instead of being visited when first reached.
    fn should_post_visit(&self, _vertex: VertexId) -> bool {
        false
    }

    /// Called once for each post-visited vertex, after all its successors
    /// have been marked.  Returning `Break` stops the traversal.
    fn post_visit(&mut self, _vertex: VertexId) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Decides whether `successor`, reached from the just-visited `vertex`,
    /// is added to the fringe.  By default, admits it iff it is unmarked.
    fn process_successor(
        &mut self,
        _vertex: VertexId,
        successor: VertexId,
        marks: &mut Marks,
    ) -> bool {
        !marks.is_marked(successor)
    }

    /// The priority given to `vertex` when it is added to the fringe.  Only
    /// priority fringes look at it.
    fn priority(&self, _vertex: VertexId) -> f64 {
        0.0
    }
}

/// The visitor with every hook left at its default: marks reachable vertices
/// and nothing else.
impl Visitor for () {}

/// A breadth-first traversal.
pub type BreadthFirstTraversal<'g, G> = Traversal<'g, G, VecDeque<VertexId>>;

/// A depth-first traversal.
pub type DepthFirstTraversal<'g, G> = Traversal<'g, G, Vec<VertexId>>;

/// A traversal of a graph using `F` as the fringe.
pub struct Traversal<'g, G: Graph, F: Fringe> {
    graph: &'g G,
    fringe: F,
    marks: Marks,
    /// Vertices whose successors have been pushed while waiting for a
    /// post-visit.  Reset by every call to `traverse`.
    open: Marks,
    reverse_successors: bool,
}

impl<'g, G: Graph> Traversal<'g, G, VecDeque<VertexId>> {
    /// A traversal visiting vertices in breadth-first order.
    pub fn breadth_first(graph: &'g G) -> Self {
        Self::new(graph, VecDeque::new(), false)
    }
}

impl<'g, G: Graph> Traversal<'g, G, Vec<VertexId>> {
    /// A traversal visiting vertices in depth-first order.  Successors are
    /// pushed in reverse so that they are popped in their natural order.
    pub fn depth_first(graph: &'g G) -> Self {
        Self::new(graph, Vec::new(), true)
    }
}

impl<'g, G: Graph, F: Fringe> Traversal<'g, G, F> {
    /// Creates a traversal of `graph` using `fringe`.  If
    /// `reverse_successors` is set, each batch of vertices is added to the
    /// fringe in reverse order, which makes a last-in-first-out fringe
    /// process them in their original order.
    pub fn new(graph: &'g G, fringe: F, reverse_successors: bool) -> Self {
        Self {
            graph,
            fringe,
            marks: Marks::with_max_vertex(graph.max_vertex()),
            open: Marks::default(),
            reverse_successors,
        }
    }

    pub fn graph(&self) -> &'g G {
        self.graph
    }

    pub fn marks(&self) -> &Marks {
        &self.marks
    }

    /// Returns true iff `vertex` has been marked.
    pub fn is_marked(&self, vertex: VertexId) -> bool {
        self.marks.is_marked(vertex)
    }

    /// Unmarks all vertices.
    pub fn clear(&mut self) {
        self.marks.clear();
    }

    /// Initializes the fringe to `start` and performs a traversal.
    pub fn traverse_from<V: Visitor + ?Sized>(
        &mut self,
        start: VertexId,
        visitor: &mut V,
    ) -> ControlFlow<()> {
        self.traverse([start], visitor)
    }

    /// Initializes the fringe to `starts` and performs a traversal.  Returns
    /// `Break` if a hook stopped the traversal early, or `Continue` once the
    /// fringe is exhausted.
    ///
    /// Starting vertices that are not in the graph are skipped.
    pub fn traverse<V: Visitor + ?Sized>(
        &mut self,
        starts: impl IntoIterator<Item = VertexId>,
        visitor: &mut V,
    ) -> ControlFlow<()> {
        let _span = info_span!("traverse").entered();
        let graph = self.graph;
        self.fringe.clear();
        self.open.clear();
        self.push_all(starts.into_iter().collect(), visitor);

        while let Some(now) = self.fringe.remove() {
            if !graph.contains(now) || self.marks.is_marked(now) {
                continue;
            }
            if visitor.should_post_visit(now) {
                self.open.mark(now);
                let pending: Vec<VertexId> = graph
                    .successors(now)
                    .filter(|&successor| {
                        !self.marks.is_marked(successor) && !self.open.is_marked(successor)
                    })
                    .collect();
                if pending.is_empty() {
                    self.marks.mark(now);
                    trace!(vertex = now, "post-visit");
                    if visitor.post_visit(now).is_break() {
                        debug!(vertex = now, "traversal stopped by post-visit");
                        return ControlFlow::Break(());
                    }
                } else {
                    // Revisit `now` once the pending successors are done.
                    let priority = visitor.priority(now);
                    self.fringe.insert(now, priority);
                    self.push_all(pending, visitor);
                }
            } else {
                self.marks.mark(now);
                trace!(vertex = now, "visit");
                if visitor.visit(now).is_break() {
                    debug!(vertex = now, "traversal stopped by visit");
                    return ControlFlow::Break(());
                }
                let admitted: Vec<VertexId> = graph
                    .successors(now)
                    .filter(|&successor| visitor.process_successor(now, successor, &mut self.marks))
                    .collect();
                self.push_all(admitted, visitor);
            }
        }
        ControlFlow::Continue(())
    }

    fn push_all<V: Visitor + ?Sized>(&mut self, mut vertices: Vec<VertexId>, visitor: &V) {
        if self.reverse_successors {
            vertices.reverse();
        }
        for vertex in vertices {
            self.fringe.insert(vertex, visitor.priority(vertex));
        }
    }
}
