use std::marker::PhantomData;

use derivative::Derivative;

use crate::{
    directedness::Directedness,
    graph::{EdgeId, VertexId},
    triangular::{pair, unpair},
};

/// The endpoints of an edge, stored in canonical order.
///
/// For undirected graphs the smaller vertex always comes first, so `(u, v)`
/// and `(v, u)` produce equal values with equal hashes.
#[derive(Derivative)]
#[derivative(
    Clone(bound = ""),
    Copy(bound = ""),
    Debug(bound = ""),
    Hash(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = ""),
    PartialOrd(bound = ""),
    Ord(bound = "")
)]
pub struct EdgeEnds<D: Directedness> {
    source: VertexId,
    target: VertexId,
    #[derivative(Debug = "ignore")]
    directedness: PhantomData<D>,
}

impl<D: Directedness> EdgeEnds<D> {
    pub fn new(source: VertexId, target: VertexId) -> Self {
        let (source, target) = D::canonical(source, target);
        Self {
            source,
            target,
            directedness: PhantomData,
        }
    }

    /// Decodes an edge identity produced by [`Self::id`].
    pub fn from_id(id: EdgeId) -> Self {
        let (first, second) = unpair(id);
        if D::is_directed() {
            Self::new(first, second)
        } else {
            Self::new(second, first)
        }
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn target(&self) -> VertexId {
        self.target
    }

    pub fn values(&self) -> (VertexId, VertexId) {
        (self.source, self.target)
    }

    /// Returns true if `vertex` is either end of the edge.
    pub fn touches(&self, vertex: VertexId) -> bool {
        self.source == vertex || self.target == vertex
    }

    /// The injective integer identity of this edge.  Undirected edges pair
    /// their ends smaller-last, giving `T(a + b) + a` for `a <= b`.
    pub fn id(&self) -> EdgeId {
        if D::is_directed() {
            pair(self.source, self.target)
        } else {
            pair(self.target, self.source)
        }
    }
}
