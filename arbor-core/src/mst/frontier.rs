//! Key/parent bookkeeping for the dense Prim loop.
//!
//! Keys are `Option<f64>`: `None` stands for "not yet reachable" so it can
//! never compare equal to a finite edge weight.

use crate::AdjacencyMatrix;

pub(super) struct Frontier {
    keys: Vec<Option<f64>>,
    parents: Vec<Option<usize>>,
    in_tree: Vec<bool>,
}

impl Frontier {
    /// Seeds the frontier with vertex 0 at key zero.
    pub(super) fn new(vertex_count: usize) -> Self {
        let mut keys = vec![None; vertex_count];
        if let Some(root) = keys.first_mut() {
            *root = Some(0.0);
        }
        Self {
            keys,
            parents: vec![None; vertex_count],
            in_tree: vec![false; vertex_count],
        }
    }

    /// Returns the vertex outside the tree with the smallest finite key.
    ///
    /// Indices are scanned in increasing order and a later vertex only
    /// replaces the candidate on a strictly smaller key, so the lowest index
    /// wins ties.
    pub(super) fn select(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (vertex, (slot, &in_tree)) in self.keys.iter().zip(&self.in_tree).enumerate() {
            if in_tree {
                continue;
            }
            let Some(key) = *slot else {
                continue;
            };
            if best.is_none_or(|(_, best_key)| key < best_key) {
                best = Some((vertex, key));
            }
        }
        best.map(|(vertex, _)| vertex)
    }

    /// Moves `vertex` into the tree and lowers the keys of its neighbours
    /// outside the tree.
    pub(super) fn absorb(&mut self, vertex: usize, graph: &AdjacencyMatrix) {
        if let Some(joined) = self.in_tree.get_mut(vertex) {
            *joined = true;
        }
        let Some(row) = graph.row(vertex) else {
            return;
        };
        let slots = self.keys.iter_mut().zip(self.parents.iter_mut());
        for ((cell, &in_tree), (key, parent)) in row.iter().zip(&self.in_tree).zip(slots) {
            if in_tree {
                continue;
            }
            let Some(weight) = *cell else {
                continue;
            };
            if key.is_none_or(|current| weight < current) {
                *key = Some(weight);
                *parent = Some(vertex);
            }
        }
    }

    pub(super) fn key(&self, vertex: usize) -> Option<f64> {
        self.keys.get(vertex).copied().flatten()
    }

    /// Lowest-indexed vertex that never joined the tree.
    pub(super) fn first_outside(&self) -> Option<usize> {
        self.in_tree.iter().position(|&in_tree| !in_tree)
    }

    pub(super) fn into_parents(self) -> Vec<Option<usize>> {
        self.parents
    }
}
