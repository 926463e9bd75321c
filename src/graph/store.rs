//! Core graph structure: a vertex registry with a name index.

use std::collections::HashMap;

use log::debug;

use crate::types::{Vertex, VertexId};

/// A directed, unweighted graph of named vertices.
///
/// The registry (`vertices`) owns every vertex; edges and the name index only
/// hold [`VertexId`] keys into it.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// All vertices, indexed by ID.
    vertices: HashMap<VertexId, Vertex>,
    /// Name index: vertex name -> ID.
    names: HashMap<String, VertexId>,
    /// Number of distinct (from, to) pairs.
    edge_count: usize,
    /// Next available vertex ID.
    next_id: u64,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains_vertex(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Look up the ID assigned to `name`.
    pub fn id_of(&self, name: &str) -> Option<VertexId> {
        self.names.get(name).copied()
    }

    /// Get a vertex by name.
    pub fn vertex(&self, name: &str) -> Option<&Vertex> {
        self.names.get(name).and_then(|id| self.vertices.get(id))
    }

    /// Get a vertex by ID.
    pub fn vertex_by_id(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    /// All vertices, in no particular order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.vertices.values()
    }

    /// Names of the direct successors of `name`. Empty if `name` is absent.
    pub fn successors(&self, name: &str) -> Vec<&str> {
        self.vertex(name)
            .map(|v| v.neighbor_names().collect())
            .unwrap_or_default()
    }

    /// Whether the edge `from -> to` exists.
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.vertex(from).is_some_and(|v| v.has_edge_to(to))
    }

    /// Add a vertex called `name` if it does not exist yet.
    ///
    /// Returns the ID of the new or already present vertex.
    pub fn add_vertex(&mut self, name: &str) -> VertexId {
        if let Some(&id) = self.names.get(name) {
            return id;
        }

        let id = VertexId(self.next_id);
        self.next_id += 1;

        self.vertices.insert(id, Vertex::new(id, name));
        self.names.insert(name.to_owned(), id);
        debug!("added vertex {:?} as {}", name, id);

        id
    }

    /// Add the directed edge `from -> to`, creating missing endpoints.
    ///
    /// Adding an edge that already exists changes nothing.
    pub fn add_edge(&mut self, from: &str, to: &str) {
        let from_id = self.add_vertex(from);
        let to_id = self.add_vertex(to);

        if let Some(vertex) = self.vertices.get_mut(&from_id) {
            if vertex.link(to, to_id) {
                self.edge_count += 1;
                debug!("added edge {:?} -> {:?}", from, to);
            }
        }
    }

    /// Resolve the targets of a vertex's outgoing edges.
    pub(crate) fn targets<'a>(&'a self, vertex: &'a Vertex) -> impl Iterator<Item = &'a Vertex> {
        vertex
            .edges()
            .values()
            .filter_map(move |id| self.vertices.get(id))
    }
}
