//! Arbor core library.
//!
//! Holds a dense weighted adjacency matrix for an undirected graph and
//! computes its minimum spanning tree with Prim's algorithm. Absent edges
//! are `None`, so zero and very large finite weights are ordinary edges.
//!
//! # Examples
//! ```
//! use arbor_core::{AdjacencyMatrix, compute_mst};
//!
//! let graph = AdjacencyMatrix::from_edges(
//!     4,
//!     [(0, 1, 2.0), (0, 2, 3.0), (1, 2, 1.0), (1, 3, 4.0), (2, 3, 5.0)],
//! )
//! .expect("edges are valid");
//! let tree = compute_mst(&graph).expect("graph is connected");
//! assert_eq!(tree.endpoints(), vec![(0, 1), (1, 2), (1, 3)]);
//! assert_eq!(tree.total_weight(), 7.0);
//! ```

mod error;
mod graph;
mod mst;
#[cfg(test)]
mod test_utils;

pub use crate::{
    error::{ArborError, ArborErrorCode, Result, VertexFault},
    graph::AdjacencyMatrix,
    mst::{MinimumSpanningTree, TreeEdge, compute_mst},
};
