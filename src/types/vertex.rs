//! Vertex identifiers and the vertex struct.

use std::collections::HashMap;

use serde::Serialize;

/// Stable handle of a vertex inside its owning [`Graph`](crate::graph::Graph).
///
/// Ids are allocated in increasing order and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct VertexId(pub u64);

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named vertex and its outgoing edges.
///
/// Each outgoing edge is stored as the target's name mapped to the target's
/// [`VertexId`]. The id is a key into the graph's registry, not an owning
/// reference, so vertices can point at each other in cycles freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    id: VertexId,
    name: String,
    edges: HashMap<String, VertexId>,
}

impl Vertex {
    /// Create a vertex with no outgoing edges.
    pub fn new(id: VertexId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            edges: HashMap::new(),
        }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Outgoing edges, keyed by target name.
    pub fn edges(&self) -> &HashMap<String, VertexId> {
        &self.edges
    }

    /// Number of outgoing edges.
    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }

    /// Whether this vertex has an edge to the vertex called `name`.
    pub fn has_edge_to(&self, name: &str) -> bool {
        self.edges.contains_key(name)
    }

    /// Names of the direct successors, in no particular order.
    pub fn neighbor_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.edges.keys().map(String::as_str)
    }

    /// Record an edge to `target`. Returns `false` if it was already present.
    pub(crate) fn link(&mut self, target_name: &str, target: VertexId) -> bool {
        self.edges.insert(target_name.to_owned(), target).is_none()
    }
}
