//! Core graph types: vertices, edges, and IDs.

use serde::{Deserialize, Serialize};

/// Unique identifier for a live vertex.
pub type VertexId = u64;

/// Opaque rendering tag carried by each vertex. Algorithms ignore it.
pub type Group = u32;

/// A vertex in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vertex {
    /// Unique identifier (assigned by the store)
    pub id: VertexId,
    /// Rendering hint, not used by algorithms
    pub group: Group,
}

impl Vertex {
    /// Create a new vertex (ID will be assigned by the store).
    pub fn new(id: VertexId, group: Group) -> Self {
        Self { id, group }
    }
}

/// An undirected edge between two distinct vertices.
///
/// Endpoints are normalized so that `source < target`; two edges over the
/// same pair compare equal regardless of the order they were given in.
/// Deserialization normalizes too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "EdgeEndpoints")]
pub struct Edge {
    /// Smaller endpoint
    pub source: VertexId,
    /// Larger endpoint
    pub target: VertexId,
}

impl Edge {
    /// Create a normalized edge over `{a, b}`.
    pub fn new(a: VertexId, b: VertexId) -> Self {
        Self {
            source: a.min(b),
            target: a.max(b),
        }
    }

    /// Whether `id` is one of the endpoints.
    pub fn touches(&self, id: VertexId) -> bool {
        self.source == id || self.target == id
    }

    /// The endpoint opposite `id`, if `id` is an endpoint.
    pub fn other(&self, id: VertexId) -> Option<VertexId> {
        if self.source == id {
            Some(self.target)
        } else if self.target == id {
            Some(self.source)
        } else {
            None
        }
    }
}

// Wire form of an edge, endpoints in any order
#[derive(Deserialize)]
struct EdgeEndpoints {
    source: VertexId,
    target: VertexId,
}

impl From<EdgeEndpoints> for Edge {
    fn from(raw: EdgeEndpoints) -> Self {
        Edge::new(raw.source, raw.target)
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -- {}", self.source, self.target)
    }
}
