//! kingraph: in-memory directed graph with fixed-depth relational queries.
//!
//! Vertices are named; an edge `A -> B` makes `B` a "parent" of `A`. On top
//! of insertion the graph answers grandparent, sibling and cousin queries
//! and filters vertices by arbitrary predicates.

pub mod cli;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use cli::{OutputFormat, RelationReport};
pub use format::EdgeListReader;
pub use graph::{Graph, GraphBuilder, Relation, VertexFilter};
pub use types::{GraphError, GraphResult, Vertex, VertexId};
