//! Property-based tests for the dense Prim MST implementation.
//!
//! Checks Prim's output against a sequential Kruskal oracle and validates
//! the structural shape of every tree (edge count, acyclicity, child
//! ordering, visit order) across graph topologies with varied weight
//! distributions.

mod equivalence;
mod helpers;
mod oracle;
mod strategies;
