pub use crate::directedness::{Directed, Directedness, Undirected};
pub use crate::graph::{EdgeId, Graph, GraphDirected, GraphMut, GraphUndirected, VertexId};
pub use crate::shortest_paths::ShortestPaths;
pub use crate::store::{DirectedGraph, GraphStore, UndirectedGraph};
pub use crate::traversal::{Traversal, Visitor};
pub use crate::weights::{EdgeWeights, WeightTable};
