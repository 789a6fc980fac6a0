//! Sequential Kruskal oracle for MST property verification.
//!
//! Kruskal grows a forest from globally sorted edges, so it reaches the
//! minimum total weight by a route entirely independent of Prim's frontier
//! scan. Agreement on total weight is therefore a meaningful check.

use crate::AdjacencyMatrix;

use super::helpers::{find_root, union};

/// Summary produced by [`sequential_kruskal`].
#[derive(Clone, Debug)]
pub(super) struct OracleResult {
    /// Total weight of the minimum spanning forest.
    pub total_weight: f64,
    /// Number of forest edges.
    pub edge_count: usize,
    /// Number of connected components.
    pub component_count: usize,
    /// Number of vertices in the component containing vertex 0.
    pub root_component_size: usize,
}

/// Computes a minimum spanning forest of `graph` with Kruskal's algorithm.
pub(super) fn sequential_kruskal(graph: &AdjacencyMatrix) -> OracleResult {
    let vertex_count = graph.vertex_count();
    let mut edges: Vec<(usize, usize, f64)> = graph.edges().collect();
    edges.sort_unstable_by(|a, b| {
        a.2.total_cmp(&b.2)
            .then_with(|| a.0.cmp(&b.0))
            .then_with(|| a.1.cmp(&b.1))
    });

    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut total_weight = 0.0;
    let mut edge_count = 0;
    for (left, right, weight) in edges {
        if union(&mut parent, left, right) {
            total_weight += weight;
            edge_count += 1;
        }
    }

    let root = find_root(&mut parent, 0);
    let root_component_size = (0..vertex_count)
        .filter(|&vertex| find_root(&mut parent, vertex) == root)
        .count();

    OracleResult {
        total_weight,
        edge_count,
        component_count: vertex_count - edge_count,
        root_component_size,
    }
}
