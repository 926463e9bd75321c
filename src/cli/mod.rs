//! Command-line support for the `kgraph` binary.

pub mod commands;

pub use commands::{OutputFormat, RelationReport};
