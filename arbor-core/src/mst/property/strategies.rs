//! Graph generators for MST property-based tests.
//!
//! All weights are multiples of 1/8 below 128, so any sum over a tree of
//! these sizes is exact in `f64` whatever the summation order. That lets
//! the suites compare Prim and Kruskal totals with `==`.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{GraphFixture, WeightDistribution};

/// Minimum vertex count for most generated graphs.
const MIN_VERTICES: usize = 1;
/// Maximum vertex count for most generated graphs.
const MAX_VERTICES: usize = 48;
/// Maximum vertex count for dense graphs.
const DENSE_MAX_VERTICES: usize = 32;

/// Generates fixtures across every weight distribution, biased towards
/// [`WeightDistribution::ManyIdentical`] where tie-breaking matters most.
pub(super) fn graph_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    let distribution = prop_oneof![
        2 => Just(WeightDistribution::Unique),
        3 => Just(WeightDistribution::ManyIdentical),
        2 => Just(WeightDistribution::Sparse),
        2 => Just(WeightDistribution::Dense),
        2 => Just(WeightDistribution::Disconnected),
    ];
    (distribution, any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for an explicitly chosen distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> GraphFixture {
    match distribution {
        WeightDistribution::Unique => {
            let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
            let probability = rng.gen_range(0.2..=0.6);
            random_graph(rng, vertex_count, probability, distribution, dyadic_weight)
        }
        WeightDistribution::ManyIdentical => {
            let pool: Vec<f64> = (0..rng.gen_range(1..=3))
                .map(|_| f64::from(rng.gen_range(0_u8..=10)))
                .collect();
            let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
            let probability = rng.gen_range(0.3..=0.7);
            random_graph(rng, vertex_count, probability, distribution, move |r| {
                pool[r.gen_range(0..pool.len())]
            })
        }
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => {
            let vertex_count = rng.gen_range(MIN_VERTICES..=DENSE_MAX_VERTICES);
            let probability = rng.gen_range(0.7..=0.95);
            random_graph(rng, vertex_count, probability, distribution, dyadic_weight)
        }
        WeightDistribution::Disconnected => generate_disconnected(rng),
    }
}

/// Draws a weight in `[0, 128)` with a resolution of 1/8.
fn dyadic_weight(rng: &mut SmallRng) -> f64 {
    f64::from(rng.gen_range(0_u16..1024)) / 8.0
}

/// Adds each unordered pair independently with `probability`.
fn random_graph(
    rng: &mut SmallRng,
    vertex_count: usize,
    probability: f64,
    distribution: WeightDistribution,
    mut weight: impl FnMut(&mut SmallRng) -> f64,
) -> GraphFixture {
    let mut edges = Vec::new();
    for left in 0..vertex_count {
        for right in (left + 1)..vertex_count {
            if rng.gen_bool(probability) {
                edges.push((left, right, weight(rng)));
            }
        }
    }
    GraphFixture {
        vertex_count,
        edges,
        distribution,
    }
}

/// Builds a random spanning path, guaranteeing connectivity, then sprinkles
/// extra edges that may repeat existing pairs.
fn generate_sparse(rng: &mut SmallRng) -> GraphFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut order: Vec<usize> = (0..vertex_count).collect();
    for i in (1..order.len()).rev() {
        let j = rng.gen_range(0..=i);
        order.swap(i, j);
    }

    let mut edges: Vec<_> = order
        .windows(2)
        .map(|pair| (pair[0], pair[1], dyadic_weight(rng)))
        .collect();

    let extra = rng.gen_range(vertex_count / 2..=vertex_count);
    for _ in 0..extra {
        let left = rng.gen_range(0..vertex_count);
        let right = rng.gen_range(0..vertex_count);
        if left != right {
            edges.push((left, right, dyadic_weight(rng)));
        }
    }

    GraphFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::Sparse,
    }
}

/// Lays out two to five blocks of consecutive vertices and only connects
/// vertices inside the same block.
fn generate_disconnected(rng: &mut SmallRng) -> GraphFixture {
    let sizes: Vec<usize> = (0..rng.gen_range(2..=5))
        .map(|_| rng.gen_range(1..=12))
        .collect();
    let vertex_count: usize = sizes.iter().sum();
    let mut edges = Vec::new();
    let mut offset = 0;

    for size in sizes {
        let probability = rng.gen_range(0.3..=0.8);
        for left in offset..offset + size {
            for right in (left + 1)..offset + size {
                if rng.gen_bool(probability) {
                    edges.push((left, right, dyadic_weight(rng)));
                }
            }
        }
        offset += size;
    }

    GraphFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::Disconnected,
    }
}
