//! Fluent API for building Graph instances.

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// ```
/// use kingraph::GraphBuilder;
///
/// let graph = GraphBuilder::new()
///     .edge("A", "B")
///     .edges([("B", "C"), ("B", "D")])
///     .vertex("lonely")
///     .build();
///
/// assert_eq!(graph.vertex_count(), 5);
/// assert_eq!(graph.edge_count(), 3);
/// ```
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: Graph,
}

impl GraphBuilder {
    /// Create a new builder around an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex.
    pub fn vertex(mut self, name: &str) -> Self {
        self.graph.add_vertex(name);
        self
    }

    /// Add several vertices.
    pub fn vertices<'a>(mut self, names: impl IntoIterator<Item = &'a str>) -> Self {
        for name in names {
            self.graph.add_vertex(name);
        }
        self
    }

    /// Add an edge, creating missing endpoints.
    pub fn edge(mut self, from: &str, to: &str) -> Self {
        self.graph.add_edge(from, to);
        self
    }

    /// Add several edges.
    pub fn edges<'a>(mut self, edges: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        for (from, to) in edges {
            self.graph.add_edge(from, to);
        }
        self
    }

    /// Build the final Graph.
    pub fn build(self) -> Graph {
        self.graph
    }
}
