//! Main GraphStore interface for undirected graph mutation and queries.

use super::snapshot::GraphSnapshot;
use super::types::{Edge, Group, Vertex, VertexId};
use crate::error::{GraphError, Result};
use log::{debug, trace};
use std::collections::{BTreeMap, BTreeSet};
use std::ops::Bound;

/// The owned, in-memory undirected graph.
///
/// `GraphStore` holds the live vertex set and a symmetric adjacency index.
/// Every mutation either completes fully or returns an error without touching
/// state, so the store never holds a dangling endpoint, a self-loop, or a
/// one-sided adjacency entry.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    vertices: BTreeMap<VertexId, Vertex>,
    // Symmetric: b in adjacency[a] iff a in adjacency[b]
    adjacency: BTreeMap<VertexId, BTreeSet<VertexId>>,
    edge_count: usize,
    // Bumped on every structural change
    revision: u64,
}

impl GraphStore {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from a snapshot, validating every structural invariant.
    ///
    /// Vertex ids are taken from the snapshot as-is. Duplicate links collapse
    /// into one edge; the snapshot's selection is ignored.
    ///
    /// # Errors
    ///
    /// - [`GraphError::InvalidOperation`] if a vertex id appears twice
    /// - [`GraphError::NotFound`] if a link references an unknown vertex
    /// - [`GraphError::InvalidEdge`] if a link is a self-loop
    pub fn from_snapshot(snapshot: &GraphSnapshot) -> Result<Self> {
        let mut store = Self::new();

        for vertex in &snapshot.nodes {
            if store.vertices.contains_key(&vertex.id) {
                return Err(GraphError::invalid_operation(format!(
                    "Duplicate vertex id {} in snapshot",
                    vertex.id
                )));
            }
            store.vertices.insert(vertex.id, *vertex);
            store.adjacency.insert(vertex.id, BTreeSet::new());
        }

        for edge in &snapshot.links {
            store.add_edge(edge.source, edge.target)?;
        }

        store.revision = 0;
        debug!(
            "Loaded snapshot: {} vertices, {} edges",
            store.vertex_count(),
            store.edge_count()
        );
        Ok(store)
    }

    /// Add a vertex to the graph.
    ///
    /// The new id is one greater than the current maximum live id, or 0 when
    /// the graph is empty. Ids freed below the maximum are not reused; an id
    /// freed at the top is re-derived by the next call.
    pub fn add_vertex(&mut self, group: Group) -> VertexId {
        let id = self.next_vertex_id();
        debug!("Adding vertex: id={id}, group={group}");
        self.vertices.insert(id, Vertex::new(id, group));
        self.adjacency.insert(id, BTreeSet::new());
        self.revision += 1;
        id
    }

    /// Remove a vertex and every edge incident to it.
    ///
    /// # Returns
    ///
    /// The removed edges, so callers can purge dependent state.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotFound`] if the vertex is not live.
    pub fn remove_vertex(&mut self, id: VertexId) -> Result<Vec<Edge>> {
        debug!("Removing vertex: id={id}");
        self.vertices.remove(&id).ok_or(GraphError::NotFound { vertex_id: id })?;

        let neighbors = self.adjacency.remove(&id).unwrap_or_default();
        trace!("Cascading {} incident edges for vertex {}", neighbors.len(), id);

        let mut removed = Vec::with_capacity(neighbors.len());
        for neighbor in neighbors {
            if let Some(back) = self.adjacency.get_mut(&neighbor) {
                back.remove(&id);
            }
            removed.push(Edge::new(id, neighbor));
        }

        self.edge_count -= removed.len();
        self.revision += 1;
        Ok(removed)
    }

    /// Add an undirected edge between `a` and `b`.
    ///
    /// Adding an edge that already exists is a successful no-op.
    ///
    /// # Returns
    ///
    /// `true` if a new edge was created, `false` if it already existed.
    ///
    /// # Errors
    ///
    /// - [`GraphError::NotFound`] if either endpoint is not live
    /// - [`GraphError::InvalidEdge`] if `a == b`
    pub fn add_edge(&mut self, a: VertexId, b: VertexId) -> Result<bool> {
        debug!("Adding edge: {a} -- {b}");
        self.require_vertex(a)?;
        self.require_vertex(b)?;
        if a == b {
            return Err(GraphError::InvalidEdge { vertex_id: a });
        }

        if self.has_edge(a, b) {
            trace!("Edge {a} -- {b} already present");
            return Ok(false);
        }

        self.adjacency.entry(a).or_default().insert(b);
        self.adjacency.entry(b).or_default().insert(a);
        self.edge_count += 1;
        self.revision += 1;
        Ok(true)
    }

    /// Remove the edge between `a` and `b`.
    ///
    /// # Errors
    ///
    /// - [`GraphError::NotFound`] if either endpoint is not live
    /// - [`GraphError::EdgeNotFound`] if no such edge exists
    pub fn remove_edge(&mut self, a: VertexId, b: VertexId) -> Result<Edge> {
        debug!("Removing edge: {a} -- {b}");
        self.require_vertex(a)?;
        self.require_vertex(b)?;
        if !self.has_edge(a, b) {
            return Err(GraphError::EdgeNotFound { a, b });
        }

        if let Some(set) = self.adjacency.get_mut(&a) {
            set.remove(&b);
        }
        if let Some(set) = self.adjacency.get_mut(&b) {
            set.remove(&a);
        }
        self.edge_count -= 1;
        self.revision += 1;
        Ok(Edge::new(a, b))
    }

    /// Get a vertex by ID.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotFound`] if the vertex doesn't exist.
    pub fn vertex(&self, id: VertexId) -> Result<&Vertex> {
        self.vertices
            .get(&id)
            .ok_or(GraphError::NotFound { vertex_id: id })
    }

    /// Whether `id` is a live vertex.
    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    /// Whether an edge joins `a` and `b`.
    pub fn has_edge(&self, a: VertexId, b: VertexId) -> bool {
        self.adjacency
            .get(&a)
            .is_some_and(|neighbors| neighbors.contains(&b))
    }

    /// Live vertex ids, ascending.
    pub fn vertices(&self) -> Vec<VertexId> {
        self.vertices.keys().copied().collect()
    }

    /// Iterate over live vertices, ascending by id.
    pub fn iter_vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.vertices.values()
    }

    /// Neighbor ids of a vertex, ascending.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotFound`] if the vertex doesn't exist.
    pub fn neighbors(&self, id: VertexId) -> Result<Vec<VertexId>> {
        Ok(self.neighbor_set(id)?.iter().copied().collect())
    }

    /// Number of edges incident to a vertex.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotFound`] if the vertex doesn't exist.
    pub fn degree(&self, id: VertexId) -> Result<usize> {
        Ok(self.neighbor_set(id)?.len())
    }

    /// All edges, each reported once with `source < target`, ascending.
    pub fn edges(&self) -> Vec<Edge> {
        self.adjacency
            .iter()
            .flat_map(|(&a, neighbors)| {
                neighbors
                    .range((Bound::Excluded(a), Bound::Unbounded))
                    .map(move |&b| Edge::new(a, b))
            })
            .collect()
    }

    /// Get the total number of vertices in the graph.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the total number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Structural revision; changes whenever vertices or edges change.
    ///
    /// Orderings returned by queries are stable for a given revision.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Remove all vertices and edges.
    pub fn clear(&mut self) {
        debug!("Clearing graph ({} vertices)", self.vertex_count());
        self.vertices.clear();
        self.adjacency.clear();
        self.edge_count = 0;
        self.revision += 1;
    }

    /// Capture the vertex and edge lists (with an empty selection).
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self.vertices.values().copied().collect(),
            links: self.edges(),
            selection: Vec::new(),
        }
    }

    /// Find articulation points (cut vertices).
    ///
    /// See [`super::algorithms::find_articulation_points`].
    pub fn articulation_points(&self) -> BTreeSet<VertexId> {
        super::algorithms::find_articulation_points(self)
    }

    /// Group live vertices into connected components.
    ///
    /// See [`super::algorithms::connected_components`].
    pub fn connected_components(&self) -> Vec<Vec<VertexId>> {
        super::algorithms::connected_components(self)
    }

    /// Export graph to D3.js-compatible JSON, flagging `highlight` vertices.
    pub fn export_json(&self, highlight: Option<&BTreeSet<VertexId>>) -> Result<String> {
        crate::export::export_json(self, highlight)
    }

    /// Export graph to Graphviz DOT format, filling `highlight` vertices.
    pub fn export_dot(&self, highlight: Option<&BTreeSet<VertexId>>) -> Result<String> {
        crate::export::export_dot(self, highlight)
    }

    pub(crate) fn neighbor_set(&self, id: VertexId) -> Result<&BTreeSet<VertexId>> {
        self.adjacency
            .get(&id)
            .ok_or(GraphError::NotFound { vertex_id: id })
    }

    // Private helper methods

    fn require_vertex(&self, id: VertexId) -> Result<()> {
        if self.vertices.contains_key(&id) {
            Ok(())
        } else {
            Err(GraphError::NotFound { vertex_id: id })
        }
    }

    fn next_vertex_id(&self) -> VertexId {
        self.vertices
            .last_key_value()
            .map_or(0, |(&max, _)| max + 1)
    }
}
