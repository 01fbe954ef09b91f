use thiserror::Error;

use crate::graph::VertexId;

/// Errors reported by graph mutation.
///
/// Queries never fail: asking about a vertex that is not in the graph yields
/// an empty sequence, a zero degree, or an infinite distance instead.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
pub enum GraphError {
    /// An edge operation named a vertex that is not currently in the graph.
    #[error("vertex {0} is not in the graph")]
    InvalidVertex(VertexId),
}

pub type Result<T> = std::result::Result<T, GraphError>;
