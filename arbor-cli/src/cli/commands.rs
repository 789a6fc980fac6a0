//! Command implementations and argument parsing for the arbor CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use arbor_core::{AdjacencyMatrix, ArborError, MinimumSpanningTree, compute_mst};
use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::graph_file::parse_graph;

const DEFAULT_PRECISION: usize = 2;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "arbor",
    about = "Compute the minimum spanning tree of a weighted undirected graph."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Compute the minimum spanning tree of a graph file.
    Mst(MstCommand),
}

/// Options accepted by the `mst` command.
#[derive(Debug, Args, Clone)]
pub struct MstCommand {
    /// Graph file: a vertex count line followed by `u v weight` lines.
    pub path: PathBuf,

    /// Number of decimals used when printing weights.
    #[arg(long, default_value_t = DEFAULT_PRECISION)]
    pub precision: usize,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The graph file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Reading a line of the graph file failed.
    #[error("failed to read line {line}: {source}")]
    Read {
        /// One-based line number.
        line: usize,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The graph file is malformed.
    #[error("line {line}: {reason}")]
    Parse {
        /// One-based line number, or 0 when the problem is the whole file.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },
    /// The core rejected the graph or found no spanning tree.
    #[error(transparent)]
    Core(#[from] ArborError),
}

/// Outcome of a successful `mst` command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Number of vertices in the input graph.
    pub vertex_count: usize,
    /// Number of edges in the input graph.
    pub edge_count: usize,
    /// Decimals used when rendering weights.
    pub precision: usize,
    /// The computed tree.
    pub tree: MinimumSpanningTree,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the graph file cannot be read or parsed, or
/// when the core rejects the graph.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use arbor_cli::cli::{Cli, Command, MstCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "3\n0 1 1\n1 2 2\n")?;
/// let cli = Cli {
///     command: Command::Mst(MstCommand {
///         path: file.path().to_path_buf(),
///         precision: 2,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.tree.total_weight(), 3.0);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Mst(command) => {
            Span::current().record("command", field::display("mst"));
            run_mst(&command)
        }
    }
}

#[instrument(
    name = "cli.mst",
    err,
    skip(command),
    fields(path = %command.path.display(), precision = command.precision),
)]
pub(super) fn run_mst(command: &MstCommand) -> Result<ExecutionSummary, CliError> {
    let graph = read_graph(&command.path)?;
    let tree = compute_mst(&graph)?;
    info!(
        vertices = graph.vertex_count(),
        tree_edges = tree.edges().len(),
        total_weight = tree.total_weight(),
        "spanning tree computed"
    );
    Ok(ExecutionSummary {
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        precision: command.precision,
        tree,
    })
}

#[instrument(name = "cli.read_graph", err, fields(path = %path.display()))]
pub(super) fn read_graph(path: &Path) -> Result<AdjacencyMatrix, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_graph(BufReader::new(file))
}

/// Human-facing vertex label, counting from one.
pub(super) fn vertex_label(vertex: usize) -> String {
    format!("Vertex {}", vertex + 1)
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use arbor_cli::cli::{ExecutionSummary, render_summary};
/// # use arbor_core::{AdjacencyMatrix, compute_mst};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let graph = AdjacencyMatrix::from_edges(2, [(0, 1, 1.25)])?;
/// let summary = ExecutionSummary {
///     vertex_count: 2,
///     edge_count: 1,
///     precision: 2,
///     tree: compute_mst(&graph)?,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert!(String::from_utf8(buffer)?.ends_with("minimum weight of spanning tree: 1.25\n"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    let precision = summary.precision;
    writeln!(writer, "vertices: {}", summary.vertex_count)?;
    writeln!(writer, "graph edges: {}", summary.edge_count)?;
    writeln!(writer, "tree edges: {}", summary.tree.edges().len())?;
    for edge in summary.tree.edges() {
        writeln!(
            writer,
            "{} - {}\t{:.precision$}",
            vertex_label(edge.parent()),
            vertex_label(edge.child()),
            edge.weight(),
        )?;
    }
    writeln!(
        writer,
        "minimum weight of spanning tree: {:.precision$}",
        summary.tree.total_weight()
    )?;
    Ok(())
}
