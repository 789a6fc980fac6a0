//! Command-line interface for computing minimum spanning trees.
//!
//! The `mst` command reads a graph file, builds the adjacency matrix,
//! runs Prim's algorithm, and renders the tree.

mod commands;
mod graph_file;

pub use commands::{Cli, CliError, Command, ExecutionSummary, MstCommand, render_summary, run_cli};
pub use graph_file::parse_graph;
