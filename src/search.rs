//! Ready-made traversals built on [`Traversal`].
use std::ops::ControlFlow;

use crate::{
    graph::{Graph, VertexId},
    traversal::{Traversal, Visitor},
};

/// Records vertices in the order they are visited.
#[derive(Clone, Debug, Default)]
pub struct Preorder {
    pub order: Vec<VertexId>,
}

impl Visitor for Preorder {
    fn visit(&mut self, vertex: VertexId) -> ControlFlow<()> {
        self.order.push(vertex);
        ControlFlow::Continue(())
    }
}

/// Records vertices in the order they are post-visited.
#[derive(Clone, Debug, Default)]
pub struct Postorder {
    pub order: Vec<VertexId>,
}

impl Visitor for Postorder {
    fn should_post_visit(&self, _vertex: VertexId) -> bool {
        true
    }

    fn post_visit(&mut self, vertex: VertexId) -> ControlFlow<()> {
        self.order.push(vertex);
        ControlFlow::Continue(())
    }
}

/// Gets the vertices reachable from `start` in breadth-first order.
/// Successors are taken in the order their edges were added.
pub fn breadth_first_order<G: Graph>(graph: &G, start: VertexId) -> Vec<VertexId> {
    let mut visitor = Preorder::default();
    let _ = Traversal::breadth_first(graph).traverse_from(start, &mut visitor);
    visitor.order
}

/// Gets the vertices reachable from `start` in depth-first preorder.
pub fn depth_first_preorder<G: Graph>(graph: &G, start: VertexId) -> Vec<VertexId> {
    let mut visitor = Preorder::default();
    let _ = Traversal::depth_first(graph).traverse_from(start, &mut visitor);
    visitor.order
}

/// Gets the vertices reachable from `start` in depth-first postorder.
pub fn depth_first_postorder<G: Graph>(graph: &G, start: VertexId) -> Vec<VertexId> {
    let mut visitor = Postorder::default();
    let _ = Traversal::depth_first(graph).traverse_from(start, &mut visitor);
    visitor.order
}

/// Gets every vertex reachable from any of `starts`, in ascending order.
pub fn reachable_from<G: Graph>(
    graph: &G,
    starts: impl IntoIterator<Item = VertexId>,
) -> Vec<VertexId> {
    let mut traversal = Traversal::breadth_first(graph);
    let _ = traversal.traverse(starts, &mut ());
    traversal.marks().iter().collect()
}
