//! Error types for cutgraph operations.
//!
//! All fallible operations return [`Result<T>`]. A failing operation never
//! leaves the graph or the selection partially modified.

use crate::graph::VertexId;
use thiserror::Error;

/// Result type alias for cutgraph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Comprehensive error type for all graph and session operations.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Operation referenced a vertex id that is not live
    #[error("Vertex not found: {vertex_id}")]
    NotFound {
        /// ID of the missing vertex
        vertex_id: VertexId,
    },

    /// Edge-specific operation referenced an edge that does not exist
    #[error("Edge not found: {a} -- {b}")]
    EdgeNotFound {
        /// First endpoint
        a: VertexId,
        /// Second endpoint
        b: VertexId,
    },

    /// Attempt to create a self-loop
    #[error("Invalid edge: self-loop on vertex {vertex_id}")]
    InvalidEdge {
        /// The vertex that would have been connected to itself
        vertex_id: VertexId,
    },

    /// Command requires a selection size that is not currently met
    #[error("Invalid selection: expected {required} selected vertices, found {actual}")]
    InvalidSelection {
        /// Number of selected vertices the command needs
        required: usize,
        /// Number of vertices currently selected
        actual: usize,
    },

    /// Structurally invalid input (e.g., duplicate vertex ids in a snapshot)
    #[error("Invalid operation: {message}")]
    InvalidOperation {
        /// Description of what went wrong
        message: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Payload-free discriminant of [`GraphError`].
///
/// Lets a UI layer pick a message without destructuring the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`GraphError::NotFound`]
    NotFound,
    /// See [`GraphError::EdgeNotFound`]
    EdgeNotFound,
    /// See [`GraphError::InvalidEdge`]
    InvalidEdge,
    /// See [`GraphError::InvalidSelection`]
    InvalidSelection,
    /// See [`GraphError::InvalidOperation`]
    InvalidOperation,
    /// See [`GraphError::Serialization`]
    Serialization,
}

impl GraphError {
    /// Create a serialization error from a message and optional source.
    pub fn serialization<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }

    /// Create an invalid-operation error.
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Self::InvalidOperation {
            message: message.into(),
        }
    }

    /// The failure reason without its payload.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GraphError::NotFound { .. } => ErrorKind::NotFound,
            GraphError::EdgeNotFound { .. } => ErrorKind::EdgeNotFound,
            GraphError::InvalidEdge { .. } => ErrorKind::InvalidEdge,
            GraphError::InvalidSelection { .. } => ErrorKind::InvalidSelection,
            GraphError::InvalidOperation { .. } => ErrorKind::InvalidOperation,
            GraphError::Serialization { .. } => ErrorKind::Serialization,
        }
    }
}
