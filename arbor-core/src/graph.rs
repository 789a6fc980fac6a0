//! Dense weighted adjacency matrix for undirected graphs.
//!
//! Absent edges are stored as `None`, so every finite weight (including
//! `0.0` and `f64::MAX`) is a real, traversable edge. The diagonal always
//! holds `Some(0.0)` and [`AdjacencyMatrix::set_edge`] writes both
//! `(u, v)` and `(v, u)`, which keeps the matrix symmetric by
//! construction.

use tracing::{debug, instrument};

use crate::error::{ArborError, Result, VertexFault};

/// An `n × n` symmetric table of edge weights over vertices `0..n`.
///
/// # Examples
/// ```
/// use arbor_core::AdjacencyMatrix;
///
/// let mut graph = AdjacencyMatrix::new(3).expect("three vertices is a valid size");
/// graph.set_edge(0, 2, 1.5).expect("edge must be accepted");
/// assert_eq!(graph.weight(2, 0), Some(1.5));
/// assert_eq!(graph.weight(0, 1), None);
/// assert_eq!(graph.weight(1, 1), Some(0.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct AdjacencyMatrix {
    vertex_count: usize,
    cells: Vec<Option<f64>>,
}

impl AdjacencyMatrix {
    /// Creates a graph with `vertex_count` vertices and no edges.
    ///
    /// # Errors
    /// Returns [`ArborError::InvalidSize`] when `vertex_count` is zero or
    /// when an `n × n` table of that size cannot be allocated.
    pub fn new(vertex_count: usize) -> Result<Self> {
        let invalid = || ArborError::InvalidSize { vertex_count };
        if vertex_count == 0 {
            return Err(invalid());
        }
        let len = vertex_count.checked_mul(vertex_count).ok_or_else(invalid)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| invalid())?;
        cells.resize(len, None);
        for (vertex, row) in cells.chunks_exact_mut(vertex_count).enumerate() {
            if let Some(diagonal) = row.get_mut(vertex) {
                *diagonal = Some(0.0);
            }
        }
        Ok(Self {
            vertex_count,
            cells,
        })
    }

    /// Builds a graph from `(u, v, weight)` triples in a single validated
    /// step.
    ///
    /// Pairs that never appear stay unconnected. A pair listed twice keeps
    /// the last weight.
    ///
    /// # Errors
    /// Returns the first error [`Self::new`] or [`Self::set_edge`] would
    /// raise for the supplied input.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::AdjacencyMatrix;
    ///
    /// let graph = AdjacencyMatrix::from_edges(3, [(0, 1, 2.0), (1, 2, 0.5)])
    ///     .expect("edges are valid");
    /// assert_eq!(graph.edge_count(), 2);
    /// ```
    #[instrument(
        name = "graph.from_edges",
        err,
        skip(edges),
        fields(vertices = vertex_count),
    )]
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, f64)>,
    {
        let mut graph = Self::new(vertex_count)?;
        for (left, right, weight) in edges {
            graph.set_edge(left, right, weight)?;
        }
        debug!(edges = graph.edge_count(), "graph constructed");
        Ok(graph)
    }

    /// Connects `left` and `right` with `weight`, replacing any previous
    /// weight for the pair.
    ///
    /// A failed call leaves the graph untouched.
    ///
    /// # Errors
    /// Returns [`ArborError::InvalidVertex`] when either endpoint is out of
    /// range or both endpoints are the same vertex, and
    /// [`ArborError::InvalidWeight`] when `weight` is negative, NaN, or
    /// infinite.
    pub fn set_edge(&mut self, left: usize, right: usize, weight: f64) -> Result<()> {
        self.check_vertex(left)?;
        self.check_vertex(right)?;
        if left == right {
            return Err(ArborError::InvalidVertex {
                vertex: left,
                fault: VertexFault::SelfLoop,
            });
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(ArborError::InvalidWeight {
                left,
                right,
                weight,
            });
        }

        for (row, column) in [(left, right), (right, left)] {
            if let Some(cell) = self.cells.get_mut(row * self.vertex_count + column) {
                *cell = Some(weight);
            }
        }
        Ok(())
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the weight stored for `(left, right)`.
    ///
    /// Yields `Some(0.0)` on the diagonal and `None` when the pair is not
    /// connected or either index is out of range.
    #[must_use]
    pub fn weight(&self, left: usize, right: usize) -> Option<f64> {
        self.row(left)
            .and_then(|row| row.get(right))
            .copied()
            .flatten()
    }

    /// Returns `true` when distinct vertices `left` and `right` share an
    /// edge.
    #[must_use]
    pub fn has_edge(&self, left: usize, right: usize) -> bool {
        left != right && self.weight(left, right).is_some()
    }

    /// Returns the number of connected unordered vertex pairs.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Iterates over every edge once as `(u, v, weight)` with `u < v`, in
    /// row-major order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        (0..self.vertex_count).flat_map(move |left| {
            ((left + 1)..self.vertex_count)
                .filter_map(move |right| self.weight(left, right).map(|w| (left, right, w)))
        })
    }

    /// Iterates over the neighbours of `vertex` as `(neighbour, weight)` in
    /// increasing neighbour order.
    ///
    /// An out-of-range `vertex` has no neighbours.
    pub fn neighbours(&self, vertex: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.row(vertex)
            .into_iter()
            .flat_map(|row| row.iter().enumerate())
            .filter(move |(other, _)| *other != vertex)
            .filter_map(|(other, cell)| cell.map(|weight| (other, weight)))
    }

    /// Borrows the full row for `vertex`, diagonal included.
    pub(crate) fn row(&self, vertex: usize) -> Option<&[Option<f64>]> {
        if vertex >= self.vertex_count {
            return None;
        }
        let start = vertex * self.vertex_count;
        self.cells.get(start..start + self.vertex_count)
    }

    const fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex < self.vertex_count {
            Ok(())
        } else {
            Err(ArborError::InvalidVertex {
                vertex,
                fault: VertexFault::OutOfRange {
                    vertex_count: self.vertex_count,
                },
            })
        }
    }
}
