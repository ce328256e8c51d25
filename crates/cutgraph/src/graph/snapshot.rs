//! Read-only snapshots of graph and selection state.
//!
//! The snapshot uses the `nodes`/`links` layout that force-directed
//! renderers expect, so it can be handed to a view layer unchanged.

use super::types::{Edge, Vertex, VertexId};
use crate::error::{GraphError, Result};
use serde::{Deserialize, Serialize};

/// Point-in-time copy of the vertex list, edge list, and selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    /// Live vertices, ascending by id
    pub nodes: Vec<Vertex>,
    /// Edges, each listed once with `source < target`
    pub links: Vec<Edge>,
    /// Currently selected vertex ids, in selection order
    #[serde(default)]
    pub selection: Vec<VertexId>,
}

impl GraphSnapshot {
    /// Serialize to a pretty-printed JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Serialization`] if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GraphError::serialization("Failed to serialize snapshot", Some(e)))
    }

    /// Parse a snapshot from JSON.
    ///
    /// Only the document shape is checked here; structural validation
    /// happens in [`crate::GraphStore::from_snapshot`].
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Serialization`] if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| GraphError::serialization("Failed to deserialize snapshot", Some(e)))
    }
}
