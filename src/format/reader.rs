//! Reads plain-text edge lists into an in-memory graph.
//!
//! One record per line:
//!
//! ```text
//! # comment
//! A -> B      edge A -> B
//! B C         edge B -> C
//! lonely      isolated vertex
//! ```
//!
//! Names in the arrow form may contain spaces (`new york -> boston` links
//! `"new york"` to `"boston"`). The whitespace form splits on every space, so
//! `a b c` is an error while `a -> b c` names the vertex `"b c"`.
//!
//! Input must be UTF-8; a line that is not is a parse error for that line.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use log::debug;

use crate::graph::Graph;
use crate::types::{GraphError, GraphResult};

const ARROW: &str = "->";

/// A single parsed edge-list line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Record<'a> {
    Vertex(&'a str),
    Edge(&'a str, &'a str),
}

/// Reader for edge-list text.
pub struct EdgeListReader;

impl EdgeListReader {
    /// Read an edge-list file into a Graph.
    pub fn read_from_file(path: &Path) -> GraphResult<Graph> {
        let file = std::fs::File::open(path)?;
        Self::read_from(file)
    }

    /// Read from any reader into a Graph.
    pub fn read_from(reader: impl Read) -> GraphResult<Graph> {
        let mut graph = Graph::new();
        for (index, bytes) in BufReader::new(reader).split(b'\n').enumerate() {
            let bytes = bytes?;
            let line = std::str::from_utf8(&bytes)
                .map_err(|_| parse_error(index + 1, "invalid UTF-8"))?;
            apply_line(&mut graph, index + 1, line)?;
        }
        debug!(
            "read edge list: {} vertices, {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// Parse edge-list text held in memory.
    pub fn read_from_str(text: &str) -> GraphResult<Graph> {
        Self::read_from(text.as_bytes())
    }
}

fn apply_line(graph: &mut Graph, line_no: usize, line: &str) -> GraphResult<()> {
    match parse_line(line_no, line)? {
        Some(Record::Vertex(name)) => {
            graph.add_vertex(name);
        }
        Some(Record::Edge(from, to)) => graph.add_edge(from, to),
        None => {}
    }
    Ok(())
}

fn parse_line(line_no: usize, line: &str) -> GraphResult<Option<Record<'_>>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    if let Some((from, to)) = line.split_once(ARROW) {
        let (from, to) = (from.trim(), to.trim());
        if from.is_empty() || to.is_empty() {
            return Err(parse_error(line_no, "edge is missing an endpoint"));
        }
        if to.contains(ARROW) {
            return Err(parse_error(line_no, "only one edge per line is allowed"));
        }
        return Ok(Some(Record::Edge(from, to)));
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [name] => Ok(Some(Record::Vertex(*name))),
        [from, to] => Ok(Some(Record::Edge(*from, *to))),
        _ => Err(parse_error(
            line_no,
            format!("expected 1 or 2 names, found {}", tokens.len()),
        )),
    }
}

fn parse_error(line: usize, message: impl Into<String>) -> GraphError {
    GraphError::Parse {
        line,
        message: message.into(),
    }
}
