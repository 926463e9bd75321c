//! Text input for building graphs.

pub mod reader;

pub use reader::EdgeListReader;
