//! Error types for the ancestry library.

use std::fmt::Debug;

use thiserror::Error;

/// All errors that can occur in the ancestry library.
#[derive(Error, Debug)]
pub enum GraphError<V: Debug> {
    /// An operation referenced a vertex that was never added to the graph.
    #[error("Vertex {0:?} not found")]
    VertexNotFound(V),

    /// A relationship pair could not be parsed or was empty.
    #[error("Invalid relationship pair: {0}")]
    InvalidPair(String),

    /// IO error reading a pairs file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON in a pairs file.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for ancestry operations.
pub type GraphResult<T, V> = Result<T, GraphError<V>>;
