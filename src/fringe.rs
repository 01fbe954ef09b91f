//! Containers for vertices that have been discovered but not yet processed.
use std::{
    cmp::Ordering,
    collections::{BTreeSet, HashMap, VecDeque},
};

use crate::graph::VertexId;

/// The order in which a traversal processes pending vertices.
///
/// Every insertion carries a priority.  Only priority-ordered fringes use
/// it; queues and stacks ignore it.
pub trait Fringe {
    fn insert(&mut self, vertex: VertexId, priority: f64);

    /// Removes and returns the next vertex to process.
    fn remove(&mut self) -> Option<VertexId>;

    fn clear(&mut self);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First in, first out: breadth-first order.
impl Fringe for VecDeque<VertexId> {
    fn insert(&mut self, vertex: VertexId, _priority: f64) {
        self.push_back(vertex);
    }

    fn remove(&mut self) -> Option<VertexId> {
        self.pop_front()
    }

    fn clear(&mut self) {
        VecDeque::clear(self);
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

/// Last in, first out: depth-first order.
impl Fringe for Vec<VertexId> {
    fn insert(&mut self, vertex: VertexId, _priority: f64) {
        self.push(vertex);
    }

    fn remove(&mut self) -> Option<VertexId> {
        self.pop()
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

/// A totally ordered `f64`, using IEEE 754 `totalOrder`.
#[derive(Clone, Copy, Debug)]
pub struct Priority(pub f64);

impl PartialEq for Priority {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Priority {}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Lowest priority first, ties broken by ascending vertex id.
///
/// A vertex appears at most once: inserting a vertex that is already
/// pending replaces its old entry.
#[derive(Clone, Debug, Default)]
pub struct PriorityFringe {
    queue: BTreeSet<(Priority, VertexId)>,
    pending: HashMap<VertexId, Priority>,
}

impl PriorityFringe {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Fringe for PriorityFringe {
    fn insert(&mut self, vertex: VertexId, priority: f64) {
        let priority = Priority(priority);
        if let Some(stale) = self.pending.insert(vertex, priority) {
            self.queue.remove(&(stale, vertex));
        }
        self.queue.insert((priority, vertex));
    }

    fn remove(&mut self) -> Option<VertexId> {
        let (_, vertex) = self.queue.pop_first()?;
        self.pending.remove(&vertex);
        Some(vertex)
    }

    fn clear(&mut self) {
        self.queue.clear();
        self.pending.clear();
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(fringe: &mut impl Fringe) -> Vec<VertexId> {
        std::iter::from_fn(|| fringe.remove()).collect()
    }

    #[test]
    fn test_queue_is_fifo() {
        let mut fringe = VecDeque::new();
        for v in [3, 1, 2] {
            Fringe::insert(&mut fringe, v, 0.0);
        }
        assert_eq!(drain(&mut fringe), vec![3, 1, 2]);
    }

    #[test]
    fn test_stack_is_lifo() {
        let mut fringe = Vec::new();
        for v in [3, 1, 2] {
            Fringe::insert(&mut fringe, v, 0.0);
        }
        assert_eq!(drain(&mut fringe), vec![2, 1, 3]);
    }

    #[test]
    fn test_priority_order_and_ties() {
        let mut fringe = PriorityFringe::new();
        fringe.insert(5, 2.0);
        fringe.insert(4, 1.0);
        fringe.insert(2, 2.0);
        fringe.insert(1, f64::INFINITY);
        assert_eq!(drain(&mut fringe), vec![4, 2, 5, 1]);
    }

    #[test]
    fn test_priority_reinsert_replaces_stale_entry() {
        let mut fringe = PriorityFringe::new();
        fringe.insert(1, 5.0);
        fringe.insert(2, 3.0);
        fringe.insert(1, 1.0);
        assert_eq!(fringe.len(), 2);
        assert_eq!(drain(&mut fringe), vec![1, 2]);
        assert!(fringe.is_empty());
        // The stale entry went with the first insertion.
        fringe.insert(1, 2.0);
        assert_eq!(drain(&mut fringe), vec![1]);
    }
}
