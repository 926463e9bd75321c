//! In-memory graph operations: the core data structure and its queries.

pub mod builder;
pub mod filter;
pub mod relations;
pub mod store;

pub use builder::GraphBuilder;
pub use filter::VertexFilter;
pub use relations::Relation;
pub use store::Graph;

pub use crate::types::{Vertex, VertexId};
