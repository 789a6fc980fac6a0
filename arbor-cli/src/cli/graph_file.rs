//! Plain-text graph description format.
//!
//! ```text
//! # comments and blank lines are ignored
//! 4
//! 0 1 2.0
//! 1 2 1
//! ```
//!
//! The first significant line is the vertex count and each further line is
//! `u v weight` with zero-based vertex indices. Pairs that never appear are
//! left unconnected. Range and weight checks are left to
//! [`AdjacencyMatrix::from_edges`].

use std::io::BufRead;

use arbor_core::AdjacencyMatrix;
use tracing::{debug, instrument};

use super::CliError;

/// Parses a graph description from `reader`.
///
/// # Errors
/// Returns [`CliError::Parse`] for malformed lines or a missing vertex
/// count, [`CliError::Read`] when the reader fails, and
/// [`CliError::Core`] when the matrix rejects the vertex count or an edge.
///
/// # Examples
/// ```
/// use arbor_cli::cli::parse_graph;
///
/// let graph = parse_graph("3\n0 1 1.5\n1 2 2\n".as_bytes()).expect("graph must parse");
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.weight(1, 0), Some(1.5));
/// ```
#[instrument(name = "cli.parse_graph", err, skip(reader))]
pub fn parse_graph(reader: impl BufRead) -> Result<AdjacencyMatrix, CliError> {
    let mut declared_count = None;
    let mut edges = Vec::new();

    for (index, read) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = read.map_err(|source| CliError::Read {
            line: line_number,
            source,
        })?;
        let content = line.trim();
        if content.is_empty() || content.starts_with('#') {
            continue;
        }
        if declared_count.is_none() {
            declared_count = Some(parse_vertex_count(content, line_number)?);
        } else {
            edges.push(parse_edge(content, line_number)?);
        }
    }

    let vertex_count = declared_count.ok_or_else(|| CliError::Parse {
        line: 0,
        reason: "missing vertex count".to_owned(),
    })?;
    debug!(vertex_count, edges = edges.len(), "graph file parsed");
    Ok(AdjacencyMatrix::from_edges(vertex_count, edges)?)
}

fn parse_vertex_count(content: &str, line: usize) -> Result<usize, CliError> {
    content.parse().map_err(|_| CliError::Parse {
        line,
        reason: format!("expected a vertex count, found `{content}`"),
    })
}

fn parse_edge(content: &str, line: usize) -> Result<(usize, usize, f64), CliError> {
    let fields: Vec<&str> = content.split_whitespace().collect();
    let [left, right, raw_weight] = fields.as_slice() else {
        return Err(CliError::Parse {
            line,
            reason: format!(
                "expected `u v weight`, found {} field(s) in `{content}`",
                fields.len()
            ),
        });
    };
    let vertex = |raw: &str| {
        raw.parse::<usize>().map_err(|_| CliError::Parse {
            line,
            reason: format!("`{raw}` is not a vertex index"),
        })
    };
    let weight = raw_weight.parse::<f64>().map_err(|_| CliError::Parse {
        line,
        reason: format!("`{raw_weight}` is not a number"),
    })?;
    Ok((vertex(*left)?, vertex(*right)?, weight))
}
