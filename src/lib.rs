//! Graphs over integer vertices, with a generalized traversal engine and
//! Dijkstra/A* shortest paths built on top of it.
pub mod directedness;
pub mod edge_ends;
pub mod error;
pub mod fringe;
pub mod graph;
pub mod marks;
pub mod path_table;
pub mod prelude;
pub mod search;
pub mod shortest_paths;
pub mod store;
pub mod tracing_support;
pub mod traversal;
pub mod weights;

mod triangular;
mod util;

#[cfg(test)]
mod test_support;

pub use directedness::{Directed, Directedness, Undirected};
pub use error::{GraphError, Result};
pub use fringe::{Fringe, PriorityFringe};
pub use graph::{EdgeId, Graph, GraphDirected, GraphMut, GraphUndirected, VertexId};
pub use marks::Marks;
pub use path_table::{DensePathTable, PathTable, SparsePathTable};
pub use search::{breadth_first_order, depth_first_postorder, depth_first_preorder, reachable_from};
pub use shortest_paths::ShortestPaths;
pub use store::{DirectedGraph, GraphStore, UndirectedGraph};
pub use traversal::{BreadthFirstTraversal, DepthFirstTraversal, Traversal, Visitor};
pub use weights::{EdgeWeights, WeightTable, WithHeuristic};
