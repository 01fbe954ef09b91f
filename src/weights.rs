//! Edge weights and heuristics for [`ShortestPaths`](crate::ShortestPaths).
use std::{collections::HashMap, marker::PhantomData};

use derivative::Derivative;

use crate::{
    directedness::Directedness,
    edge_ends::EdgeEnds,
    graph::{EdgeId, VertexId},
};

/// Supplies edge weights, and optionally an A* heuristic, to a shortest-path
/// search.
pub trait EdgeWeights {
    /// The weight of the edge from `source` to `target`.  Must not be
    /// negative.
    fn weight(&self, source: VertexId, target: VertexId) -> f64;

    /// An estimate of the distance from `vertex` to the destination.  The
    /// default of zero gives Dijkstra's algorithm; any estimate that never
    /// exceeds the true remaining distance gives A*.
    fn estimated_distance(&self, _vertex: VertexId) -> f64 {
        0.0
    }

    /// Attaches `heuristic` as the estimated distance.
    fn with_heuristic<H>(self, heuristic: H) -> WithHeuristic<Self, H>
    where
        Self: Sized,
        H: Fn(VertexId) -> f64,
    {
        WithHeuristic {
            weights: self,
            heuristic,
        }
    }
}

impl<F> EdgeWeights for F
where
    F: Fn(VertexId, VertexId) -> f64,
{
    fn weight(&self, source: VertexId, target: VertexId) -> f64 {
        self(source, target)
    }
}

/// Edge weights combined with an A* heuristic; see
/// [`EdgeWeights::with_heuristic`].
#[derive(Clone, Debug)]
pub struct WithHeuristic<W, H> {
    weights: W,
    heuristic: H,
}

impl<W, H> EdgeWeights for WithHeuristic<W, H>
where
    W: EdgeWeights,
    H: Fn(VertexId) -> f64,
{
    fn weight(&self, source: VertexId, target: VertexId) -> f64 {
        self.weights.weight(source, target)
    }

    fn estimated_distance(&self, vertex: VertexId) -> f64 {
        (self.heuristic)(vertex)
    }
}

/// Edge weights stored in a table keyed by edge identity.  Edges without a
/// weight are treated as infinitely heavy, i.e. absent.
#[derive(Derivative)]
#[derivative(Clone(bound = ""), Debug(bound = ""), Default(bound = ""))]
pub struct WeightTable<D: Directedness> {
    weights: HashMap<EdgeId, f64>,
    #[derivative(Debug = "ignore")]
    directedness: PhantomData<D>,
}

impl<D: Directedness> WeightTable<D> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the weight of the edge from `source` to `target`, returning the
    /// previous weight.
    pub fn set(&mut self, source: VertexId, target: VertexId, weight: f64) -> Option<f64> {
        self.weights
            .insert(EdgeEnds::<D>::new(source, target).id(), weight)
    }

    pub fn get(&self, source: VertexId, target: VertexId) -> Option<f64> {
        self.weights
            .get(&EdgeEnds::<D>::new(source, target).id())
            .copied()
    }

    pub fn remove(&mut self, source: VertexId, target: VertexId) -> Option<f64> {
        self.weights.remove(&EdgeEnds::<D>::new(source, target).id())
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl<D: Directedness> FromIterator<(VertexId, VertexId, f64)> for WeightTable<D> {
    fn from_iter<I: IntoIterator<Item = (VertexId, VertexId, f64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (source, target, weight) in iter {
            table.set(source, target, weight);
        }
        table
    }
}

impl<D: Directedness> EdgeWeights for WeightTable<D> {
    fn weight(&self, source: VertexId, target: VertexId) -> f64 {
        self.get(source, target).unwrap_or(f64::INFINITY)
    }
}
