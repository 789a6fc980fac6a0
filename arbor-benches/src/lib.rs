//! Benchmark fixtures for arbor.
//!
//! Graphs are generated from a fixed seed so successive benchmark runs
//! measure identical inputs.

use arbor_core::{AdjacencyMatrix, Result};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Builds a random graph over `vertex_count` vertices where each pair is
/// connected with probability `density`.
///
/// A spanning path `0 - 1 - ... - n-1` is always present so the graph is
/// connected whatever the density.
///
/// # Errors
/// Returns an error when `vertex_count` is zero.
///
/// # Panics
/// Panics when `density` lies outside `[0, 1]`.
pub fn random_connected_graph(vertex_count: usize, density: f64, seed: u64) -> Result<AdjacencyMatrix> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut graph = AdjacencyMatrix::new(vertex_count)?;
    for left in 0..vertex_count {
        for right in (left + 1)..vertex_count {
            if right == left + 1 || rng.gen_bool(density) {
                graph.set_edge(left, right, rng.gen_range(0.0..100.0))?;
            }
        }
    }
    Ok(graph)
}
