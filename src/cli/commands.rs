//! CLI command implementations.
//!
//! Every command loads an edge list, runs one operation and writes the
//! result to `out`. Query results are sorted so output is deterministic.

use std::io::{Read, Write};
use std::path::Path;

use clap::ValueEnum;
use serde::Serialize;

use crate::format::EdgeListReader;
use crate::graph::{Graph, Relation, VertexFilter};
use crate::types::{GraphError, GraphResult};

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Parse a relation name given on the command line.
pub fn parse_relation(name: &str) -> GraphResult<Relation> {
    Relation::from_name(name).ok_or_else(|| {
        GraphError::InvalidArgument(format!(
            "unknown relation {:?} (expected grandparents, siblings or cousins)",
            name
        ))
    })
}

/// Result of a relational query, as printed by the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationReport {
    pub vertex: String,
    pub relation: &'static str,
    pub results: Vec<String>,
}

/// Load a graph from an edge-list file, or stdin when `path` is `-`.
pub fn load_graph(path: &Path) -> GraphResult<Graph> {
    load_graph_or(path, std::io::stdin().lock())
}

/// Load a graph from an edge-list file, or from `fallback` when `path` is `-`.
pub fn load_graph_or(path: &Path, fallback: impl Read) -> GraphResult<Graph> {
    if path.as_os_str() == "-" {
        EdgeListReader::read_from(fallback)
    } else {
        EdgeListReader::read_from_file(path)
    }
}

/// Display vertex and edge counts.
pub fn cmd_info(path: &Path, format: OutputFormat, out: &mut impl Write) -> GraphResult<()> {
    let graph = load_graph(path)?;

    match format {
        OutputFormat::Json => {
            let info = serde_json::json!({
                "source": path.display().to_string(),
                "vertices": graph.vertex_count(),
                "edges": graph.edge_count(),
            });
            writeln!(out, "{}", to_json(&info))?;
        }
        OutputFormat::Text => {
            writeln!(out, "Source: {}", path.display())?;
            writeln!(out, "Vertices: {}", graph.vertex_count())?;
            writeln!(out, "Edges: {}", graph.edge_count())?;
        }
    }
    Ok(())
}

/// Show a single vertex and its direct successors.
pub fn cmd_show(
    path: &Path,
    name: &str,
    format: OutputFormat,
    out: &mut impl Write,
) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let vertex = graph
        .vertex(name)
        .ok_or_else(|| GraphError::VertexNotFound(name.to_owned()))?;

    let mut successors: Vec<&str> = vertex.neighbor_names().collect();
    successors.sort_unstable();

    match format {
        OutputFormat::Json => {
            let info = serde_json::json!({
                "id": vertex.id(),
                "name": vertex.name(),
                "out_degree": vertex.out_degree(),
                "successors": successors,
            });
            writeln!(out, "{}", to_json(&info))?;
        }
        OutputFormat::Text => {
            writeln!(out, "Vertex {:?} ({})", vertex.name(), vertex.id())?;
            writeln!(out, "  Out-degree: {}", vertex.out_degree())?;
            for successor in successors {
                writeln!(out, "  -> {}", successor)?;
            }
        }
    }
    Ok(())
}

/// Run a relational query from `name`.
pub fn cmd_relation(
    path: &Path,
    relation: Relation,
    name: &str,
    format: OutputFormat,
    out: &mut impl Write,
) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let report = relation_report(&graph, relation, name);

    match format {
        OutputFormat::Json => writeln!(out, "{}", to_json(&report))?,
        OutputFormat::Text => {
            if report.results.is_empty() {
                writeln!(out, "No {} found for {:?}", relation, name)?;
            } else {
                writeln!(out, "{} of {:?}:", capitalize(relation.name()), name)?;
                for result in &report.results {
                    writeln!(out, "  {}", result)?;
                }
            }
        }
    }
    Ok(())
}

/// List the vertices matching `filter`.
pub fn cmd_filter(
    path: &Path,
    filter: &VertexFilter,
    format: OutputFormat,
    out: &mut impl Write,
) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let mut names: Vec<&str> = graph
        .filter_by(filter)
        .into_iter()
        .map(|v| v.name())
        .collect();
    names.sort_unstable();

    match format {
        OutputFormat::Json => {
            let info = serde_json::json!({
                "count": names.len(),
                "vertices": names,
            });
            writeln!(out, "{}", to_json(&info))?;
        }
        OutputFormat::Text => {
            writeln!(out, "{} matching vertices", names.len())?;
            for name in names {
                writeln!(out, "  {}", name)?;
            }
        }
    }
    Ok(())
}

/// Query `graph` and sort the results.
pub fn relation_report(graph: &Graph, relation: Relation, name: &str) -> RelationReport {
    let mut results = graph.query(relation, name);
    results.sort_unstable();
    RelationReport {
        vertex: name.to_owned(),
        relation: relation.name(),
        results,
    }
}

fn to_json(value: &impl Serialize) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_values() {
        assert_eq!(
            OutputFormat::from_str("text", false).unwrap(),
            OutputFormat::Text
        );
        assert_eq!(
            OutputFormat::from_str("JSON", true).unwrap(),
            OutputFormat::Json
        );
        assert!(OutputFormat::from_str("yaml", true).is_err());
    }

    #[test]
    fn test_parse_relation() {
        assert_eq!(parse_relation("Cousins").unwrap(), Relation::Cousins);
        assert_eq!(parse_relation("sibling").unwrap(), Relation::Siblings);
        assert!(matches!(
            parse_relation("aunts"),
            Err(GraphError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("cousins"), "Cousins");
        assert_eq!(capitalize(""), "");
    }
}
