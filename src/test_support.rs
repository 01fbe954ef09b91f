#![cfg(test)]

use std::collections::HashSet;

use quickcheck::{Arbitrary, Gen};

use crate::prelude::*;

/// A randomly generated graph, including some vertex removals so that the
/// vertex ids are not always contiguous.
#[derive(Debug, Clone)]
pub struct ArbGraph<D: Directedness> {
    pub graph: GraphStore<D>,
}

impl<D: Directedness> Arbitrary for ArbGraph<D> {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_vertices = usize::arbitrary(g) % 20; // Limit size for testing
        let num_edges = usize::arbitrary(g) % 50;
        let num_removals = usize::arbitrary(g) % 3;

        let mut graph = GraphStore::<D>::new();
        let vertices: Vec<_> = (0..num_vertices).map(|_| graph.add_vertex()).collect();

        if !vertices.is_empty() {
            for _ in 0..num_edges {
                let source = vertices[usize::arbitrary(g) % vertices.len()];
                let target = vertices[usize::arbitrary(g) % vertices.len()];
                graph.add_edge(source, target).unwrap();
            }
            for _ in 0..num_removals {
                graph.remove_vertex(vertices[usize::arbitrary(g) % vertices.len()]);
            }
        }

        ArbGraph { graph }
    }
}

pub fn has_duplicates<T: Eq + std::hash::Hash>(items: impl IntoIterator<Item = T>) -> bool {
    let mut seen = HashSet::new();
    items.into_iter().any(|item| !seen.insert(item))
}

/// Checks the internal consistency of a graph: counts agree with iteration,
/// every edge joins present vertices, and adjacency matches the edge set.
pub fn check_graph_consistency<G: Graph>(graph: &G) {
    let vertices: Vec<_> = graph.vertices().collect();
    assert_eq!(vertices.len(), graph.vertex_count());
    assert!(vertices.windows(2).all(|w| w[0] < w[1]), "vertices not sorted");
    assert!(vertices.iter().all(|&v| v > 0 && v <= graph.max_vertex()));

    let edges: Vec<_> = graph.edges().collect();
    assert_eq!(edges.len(), graph.edge_count());
    assert!(!has_duplicates(edges.iter().copied()));
    for &(u, v) in &edges {
        assert!(graph.contains(u), "edge {:?} has a missing source", (u, v));
        assert!(graph.contains(v), "edge {:?} has a missing target", (u, v));
        assert!(graph.contains_edge(u, v));
        assert!(graph.successors(u).any(|w| w == v));
        if !graph.is_directed() {
            assert!(u <= v, "undirected edge {:?} not canonical", (u, v));
            assert!(graph.contains_edge(v, u));
            assert!(graph.successors(v).any(|w| w == u));
        }
    }

    for &u in &vertices {
        assert!(!has_duplicates(graph.successors(u)));
        for v in graph.successors(u) {
            assert!(graph.contains(v), "dangling neighbor {v} of {u}");
            assert!(graph.contains_edge(u, v));
        }
        assert_eq!(graph.out_degree(u), graph.successors(u).count());
        for v in graph.predecessors(u) {
            assert!(graph.contains_edge(v, u));
        }
    }

    let adjacency_edges: usize = vertices.iter().map(|&u| graph.out_degree(u)).sum();
    if graph.is_directed() {
        assert_eq!(adjacency_edges, graph.edge_count());
    } else {
        let self_loops = edges.iter().filter(|(u, v)| u == v).count();
        assert_eq!(adjacency_edges, 2 * graph.edge_count() - self_loops);
    }
}

/// Fills `graph` with an irregular structure of about 300 vertices: a dense
/// cluster, a sparse cluster, hub vertices joined to both, scattered
/// long-range edges and a few self loops.  Edge choices are deterministic.
#[cfg(feature = "slow_tests")]
pub fn generate_large_graph<G: GraphMut>(graph: &mut G) -> Vec<VertexId> {
    let mut vertices: Vec<VertexId> = (0..300).map(|_| graph.add_vertex()).collect();
    let (dense, rest) = vertices.split_at(50);
    let (sparse, hubs) = rest.split_at(230);

    for (i, &u) in dense.iter().enumerate() {
        for (j, &v) in dense.iter().enumerate().skip(i + 1) {
            if (i * 7 + j * 11) % 10 < 6 {
                graph.add_edge(u, v).unwrap();
            }
        }
    }
    for (i, &u) in sparse.iter().enumerate() {
        for (j, &v) in sparse.iter().enumerate().skip(i + 1) {
            if (i * 13 + j * 17) % 100 < 3 {
                graph.add_edge(v, u).unwrap();
            }
        }
    }
    for (h, &hub) in hubs.iter().enumerate() {
        for &v in dense.iter().chain(sparse).skip(h).step_by(9) {
            graph.add_edge(hub, v).unwrap();
        }
    }
    for k in 0..200 {
        let u = vertices[(k * 31) % vertices.len()];
        let v = vertices[(k * 47 + 5) % vertices.len()];
        graph.add_edge(u, v).unwrap();
    }
    for &v in vertices.iter().step_by(37) {
        graph.add_edge(v, v).unwrap();
    }
    vertices.sort_unstable();
    vertices
}
