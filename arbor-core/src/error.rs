//! Error types for the arbor core library.
//!
//! Every failure raised while building a graph or computing its spanning
//! tree is a variant of [`ArborError`]. Each variant maps onto a stable
//! [`ArborErrorCode`] so callers can branch or log without matching on
//! message text.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Why a vertex index was refused by [`crate::AdjacencyMatrix::set_edge`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VertexFault {
    /// The index does not name a vertex of the graph.
    OutOfRange {
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// Both endpoints are the same vertex.
    SelfLoop,
}

impl fmt::Display for VertexFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { vertex_count } => {
                write!(f, "out of range for a graph with {vertex_count} vertices")
            }
            Self::SelfLoop => f.write_str("self-loops cannot be assigned a weight"),
        }
    }
}

/// Error type produced while building an [`crate::AdjacencyMatrix`] or
/// computing its minimum spanning tree.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ArborError {
    /// A graph must contain at least one vertex.
    #[error("a graph needs at least one vertex (got {vertex_count})")]
    InvalidSize {
        /// The rejected vertex count.
        vertex_count: usize,
    },
    /// An edge endpoint was out of range or formed a self-loop.
    #[error("vertex {vertex} is invalid: {fault}")]
    InvalidVertex {
        /// The offending vertex index.
        vertex: usize,
        /// What was wrong with it.
        fault: VertexFault,
    },
    /// An edge weight was negative, NaN, or infinite.
    #[error("edge ({left}, {right}) has invalid weight {weight}; expected a finite value >= 0")]
    InvalidWeight {
        /// First endpoint, as supplied.
        left: usize,
        /// Second endpoint, as supplied.
        right: usize,
        /// The rejected weight.
        weight: f64,
    },
    /// Some vertex cannot be reached from vertex 0, so no spanning tree
    /// exists.
    #[error(
        "graph is disconnected: vertex {unreachable} is unreachable from vertex 0 \
         ({reached} of {vertex_count} vertices reached)"
    )]
    Disconnected {
        /// Lowest-indexed vertex that the tree could not reach.
        unreachable: usize,
        /// Number of vertices joined to the tree before growth stalled.
        reached: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`ArborError`] variants.
    enum ArborErrorCode for ArborError {
        /// A graph must contain at least one vertex.
        InvalidSize => InvalidSize { .. } => "GRAPH_INVALID_SIZE",
        /// An edge endpoint was out of range or formed a self-loop.
        InvalidVertex => InvalidVertex { .. } => "GRAPH_INVALID_VERTEX",
        /// An edge weight was negative, NaN, or infinite.
        InvalidWeight => InvalidWeight { .. } => "GRAPH_INVALID_WEIGHT",
        /// No spanning tree exists for the graph.
        Disconnected => Disconnected { .. } => "MST_DISCONNECTED",
    }
}

/// Convenient result alias for arbor operations.
pub type Result<T> = std::result::Result<T, ArborError>;
