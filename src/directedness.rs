use std::fmt::Debug;

use crate::{graph::VertexId, util::sort_pair};

/// Marker type representing directed graph edges.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Directed;

/// Marker type representing undirected graph edges.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Undirected;

/// Trait defining the directedness behavior of graph edges.
///
/// This trait is implemented by [`Directed`] and [`Undirected`] marker types
/// to provide compile-time specialization of graph behavior.
pub trait Directedness: Copy + Debug + Default + 'static {
    fn is_directed() -> bool;

    /// Puts the ends of an edge into the order under which the edge is
    /// stored: unchanged for directed edges, smaller vertex first otherwise.
    fn canonical(source: VertexId, target: VertexId) -> (VertexId, VertexId) {
        if Self::is_directed() {
            (source, target)
        } else {
            sort_pair(source, target)
        }
    }
}

impl Directedness for Directed {
    fn is_directed() -> bool {
        true
    }
}

impl Directedness for Undirected {
    fn is_directed() -> bool {
        false
    }
}
