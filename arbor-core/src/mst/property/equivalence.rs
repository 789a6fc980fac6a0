//! Property 1: agreement with the sequential Kruskal oracle.
//!
//! Connected graphs must produce a tree whose total weight and edge count
//! match the oracle. Disconnected graphs must fail with
//! [`ArborError::Disconnected`] reporting exactly the size of the
//! component that contains vertex 0.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{ArborError, compute_mst};

use super::oracle::sequential_kruskal;
use super::types::GraphFixture;

/// Runs the oracle equivalence property for `fixture`.
pub(super) fn run_oracle_equivalence_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let oracle = sequential_kruskal(&graph);

    match compute_mst(&graph) {
        Ok(tree) => {
            if oracle.component_count != 1 {
                return Err(TestCaseError::fail(format!(
                    "prim returned a tree but the oracle found {} components ({})",
                    oracle.component_count,
                    fixture.describe(),
                )));
            }
            if tree.total_weight() != oracle.total_weight {
                return Err(TestCaseError::fail(format!(
                    "total weight mismatch: prim={}, oracle={} ({})",
                    tree.total_weight(),
                    oracle.total_weight,
                    fixture.describe(),
                )));
            }
            if tree.edges().len() != oracle.edge_count {
                return Err(TestCaseError::fail(format!(
                    "edge count mismatch: prim={}, oracle={} ({})",
                    tree.edges().len(),
                    oracle.edge_count,
                    fixture.describe(),
                )));
            }
            Ok(())
        }
        Err(ArborError::Disconnected {
            reached,
            vertex_count,
            ..
        }) => {
            if oracle.component_count == 1 {
                return Err(TestCaseError::fail(format!(
                    "prim reported a disconnected graph but the oracle found one component ({})",
                    fixture.describe(),
                )));
            }
            if reached != oracle.root_component_size || vertex_count != fixture.vertex_count {
                return Err(TestCaseError::fail(format!(
                    "prim reached {reached} of {vertex_count} vertices, oracle root component \
                     has {} ({})",
                    oracle.root_component_size,
                    fixture.describe(),
                )));
            }
            Ok(())
        }
        Err(other) => Err(TestCaseError::fail(format!(
            "unexpected error {other} ({})",
            fixture.describe()
        ))),
    }
}
