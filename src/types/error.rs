//! Error types for the kingraph library.

use thiserror::Error;

/// Errors raised by the fallible surfaces of the library.
///
/// Graph mutation and the relational queries never fail; these cover
/// edge-list input and command-line handling.
#[derive(Error, Debug)]
pub enum GraphError {
    /// IO error while reading edge-list input.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed edge-list line.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Vertex not found by name.
    #[error("Vertex {0:?} not found")]
    VertexNotFound(String),

    /// Invalid argument value.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience result type for kingraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
