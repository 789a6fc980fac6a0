//! Minimum spanning tree (MST) construction with Prim's algorithm.
//!
//! The engine works directly on the dense [`AdjacencyMatrix`]: every
//! iteration scans all keys to pick the next vertex and then relaxes one
//! matrix row, for `O(n²)` time overall. Vertex selection breaks ties on
//! the lowest index so identical inputs always produce identical trees.

mod frontier;

use tracing::{Span, debug, field, instrument, trace, warn};

use crate::{AdjacencyMatrix, ArborError, Result};

use self::frontier::Frontier;

/// One edge of a spanning tree, directed from the vertex already in the
/// tree towards the vertex it connected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TreeEdge {
    parent: usize,
    child: usize,
    weight: f64,
}

impl TreeEdge {
    /// Returns the vertex through which `child` joined the tree.
    #[must_use]
    #[rustfmt::skip]
    pub const fn parent(&self) -> usize { self.parent }

    /// Returns the vertex connected by this edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn child(&self) -> usize { self.child }

    /// Returns the matrix weight of the edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }

    /// Returns the edge as a `(parent, child)` pair.
    #[must_use]
    pub const fn endpoints(&self) -> (usize, usize) {
        (self.parent, self.child)
    }
}

/// The output of [`compute_mst`].
///
/// # Examples
/// ```
/// use arbor_core::{AdjacencyMatrix, compute_mst};
///
/// let graph = AdjacencyMatrix::from_edges(3, [(0, 1, 1.0), (1, 2, 2.0), (0, 2, 5.0)])
///     .expect("edges are valid");
/// let tree = compute_mst(&graph).expect("graph is connected");
/// assert_eq!(tree.endpoints(), vec![(0, 1), (1, 2)]);
/// assert_eq!(tree.total_weight(), 3.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MinimumSpanningTree {
    edges: Vec<TreeEdge>,
    total_weight: f64,
    visit_order: Vec<usize>,
}

impl MinimumSpanningTree {
    /// Returns the tree edges ordered by increasing child index.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edges(&self) -> &[TreeEdge] { self.edges.as_slice() }

    /// Returns the sum of the tree edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> f64 { self.total_weight }

    /// Returns the order in which vertices joined the tree, starting at 0.
    #[must_use]
    #[rustfmt::skip]
    pub const fn visit_order(&self) -> &[usize] { self.visit_order.as_slice() }

    /// Returns the number of vertices spanned by the tree.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.visit_order.len()
    }

    /// Returns the tree edges as `(parent, child)` pairs.
    #[must_use]
    pub fn endpoints(&self) -> Vec<(usize, usize)> {
        self.edges.iter().map(TreeEdge::endpoints).collect()
    }
}

/// Computes a minimum spanning tree of `graph` rooted at vertex 0.
///
/// The returned edges are ordered by child index and `total_weight` is
/// accumulated in that order. A single-vertex graph yields an empty tree of
/// weight zero.
///
/// # Errors
/// Returns [`ArborError::Disconnected`] when some vertex cannot be reached
/// from vertex 0. No partial tree is returned.
#[instrument(
    name = "mst.prim",
    err,
    skip(graph),
    fields(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        tree_weight = field::Empty,
    ),
)]
pub fn compute_mst(graph: &AdjacencyMatrix) -> Result<MinimumSpanningTree> {
    let vertex_count = graph.vertex_count();
    let mut frontier = Frontier::new(vertex_count);
    let mut visit_order = Vec::with_capacity(vertex_count);

    for _ in 0..vertex_count {
        let Some(vertex) = frontier.select() else {
            return Err(disconnected(&frontier, visit_order.len(), vertex_count));
        };
        trace!(vertex, key = frontier.key(vertex), "vertex joined tree");
        frontier.absorb(vertex, graph);
        visit_order.push(vertex);
    }

    let parents = frontier.into_parents();
    let mut edges = Vec::with_capacity(vertex_count.saturating_sub(1));
    for (child, slot) in parents.iter().enumerate().skip(1) {
        let edge = slot
            .and_then(|parent| {
                graph.weight(parent, child).map(|weight| TreeEdge {
                    parent,
                    child,
                    weight,
                })
            })
            .ok_or(ArborError::Disconnected {
                unreachable: child,
                reached: visit_order.len(),
                vertex_count,
            })?;
        edges.push(edge);
    }
    let total_weight = sum_weights(&edges);

    Span::current().record("tree_weight", total_weight);
    debug!(edges = edges.len(), total_weight, "prim completed");
    Ok(MinimumSpanningTree {
        edges,
        total_weight,
        visit_order,
    })
}

/// Adds the edge weights in child order, starting from `+0.0`.
#[expect(
    clippy::float_arithmetic,
    reason = "the tree weight is the sum of its edge weights"
)]
fn sum_weights(edges: &[TreeEdge]) -> f64 {
    edges
        .iter()
        .map(TreeEdge::weight)
        .fold(0.0, |total, weight| total + weight)
}

fn disconnected(frontier: &Frontier, reached: usize, vertex_count: usize) -> ArborError {
    let unreachable = frontier.first_outside().unwrap_or(vertex_count);
    warn!(
        unreachable,
        reached, "graph is disconnected, no spanning tree exists"
    );
    ArborError::Disconnected {
        unreachable,
        reached,
        vertex_count,
    }
}


#[cfg(test)]
mod property;
