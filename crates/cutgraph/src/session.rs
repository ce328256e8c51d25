//! Edit session: applies UI commands against the graph and selection.
//!
//! An [`EditSession`] exclusively owns one [`GraphStore`] and one
//! [`Selection`]. Commands run synchronously and atomically: a successful
//! mutation clears the selection and reports what changed, and a failing
//! command returns its reason and leaves both untouched.

use crate::config::{SeedGraph, SessionConfig};
use crate::error::{GraphError, Result};
use crate::graph::{algorithms, Edge, GraphSnapshot, GraphStore, Group, Vertex, VertexId};
use crate::helpers;
use crate::selection::Selection;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Message shown by views when an analysis finds no cut vertex.
pub const NO_ARTICULATION_POINTS: &str = "No articulation points found.";

/// A command forwarded from the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Create a vertex; `None` uses the configured default group
    AddVertex {
        /// Group tag for the new vertex
        group: Option<Group>,
    },
    /// Add a vertex to the selection
    Select(VertexId),
    /// Empty the selection
    ClearSelection,
    /// Join the two selected vertices
    AddEdgeFromSelection,
    /// Remove the single selected vertex
    RemoveVertexFromSelection,
    /// Remove the edge between the two selected vertices
    RemoveEdgeFromSelection,
    /// Run articulation analysis on the current graph
    Analyze,
}

/// What a successful command changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GraphChange {
    /// A vertex was created
    VertexAdded {
        /// The new vertex
        vertex: Vertex,
    },
    /// A vertex and its incident edges were removed
    VertexRemoved {
        /// The removed vertex
        vertex: Vertex,
        /// Edges removed by the cascade
        removed_edges: Vec<Edge>,
    },
    /// An edge was requested between the selected pair
    EdgeAdded {
        /// The edge
        edge: Edge,
        /// `false` if the edge already existed
        created: bool,
    },
    /// An edge was removed
    EdgeRemoved {
        /// The removed edge
        edge: Edge,
    },
    /// Only the selection changed
    SelectionChanged {
        /// The selection after the command
        selection: Vec<VertexId>,
    },
    /// Nothing changed; an analysis was run
    Analyzed {
        /// The analysis result
        report: AnalysisReport,
    },
}

impl GraphChange {
    /// Whether dependent views (layout, rendering) must resynchronize.
    pub fn graph_changed(&self) -> bool {
        match self {
            GraphChange::VertexAdded { .. }
            | GraphChange::VertexRemoved { .. }
            | GraphChange::EdgeRemoved { .. } => true,
            GraphChange::EdgeAdded { created, .. } => *created,
            GraphChange::SelectionChanged { .. } | GraphChange::Analyzed { .. } => false,
        }
    }
}

/// Result of a successful command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOutcome {
    /// What changed
    pub change: GraphChange,
    /// Graph revision after the command
    pub revision: u64,
}

impl CommandOutcome {
    /// Shorthand for `self.change.graph_changed()`.
    pub fn graph_changed(&self) -> bool {
        self.change.graph_changed()
    }
}

/// Articulation analysis of one graph revision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Cut vertices, ascending
    pub articulation_points: BTreeSet<VertexId>,
    /// Number of connected components
    pub component_count: usize,
    /// Revision the analysis was run against
    pub revision: u64,
}

impl AnalysisReport {
    /// Whether no articulation point was found.
    pub fn is_empty(&self) -> bool {
        self.articulation_points.is_empty()
    }

    /// Whether `id` is an articulation point.
    pub fn contains(&self, id: VertexId) -> bool {
        self.articulation_points.contains(&id)
    }

    /// The notice views show for an empty result, `None` otherwise.
    pub fn notice(&self) -> Option<&'static str> {
        self.is_empty().then_some(NO_ARTICULATION_POINTS)
    }
}

/// Coordinator for one interactive editing session.
#[derive(Debug, Clone)]
pub struct EditSession {
    graph: GraphStore,
    selection: Selection,
    config: SessionConfig,
}

impl Default for EditSession {
    fn default() -> Self {
        Self::with_graph(GraphStore::new(), SessionConfig::default())
    }
}

impl EditSession {
    /// Create a session with the default configuration and an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session from a configuration, seeding the graph as requested.
    ///
    /// # Errors
    ///
    /// Propagates errors from building the seed graph.
    pub fn with_config(config: SessionConfig) -> Result<Self> {
        let graph = match config.seed {
            SeedGraph::Empty => GraphStore::new(),
            SeedGraph::Demo => helpers::demo_graph()?,
        };
        Ok(Self::with_graph(graph, config))
    }

    /// Create a session around an existing graph.
    pub fn with_graph(graph: GraphStore, config: SessionConfig) -> Self {
        info!(
            "Starting edit session: {} vertices, {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        Self {
            graph,
            selection: Selection::new(),
            config,
        }
    }

    /// The owned graph (read-only).
    pub fn graph(&self) -> &GraphStore {
        &self.graph
    }

    /// The active configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Currently selected ids, in selection order.
    pub fn selection(&self) -> &[VertexId] {
        self.selection.current()
    }

    /// Current graph revision.
    pub fn revision(&self) -> u64 {
        self.graph.revision()
    }

    /// Vertices, edges, and selection for rendering.
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            selection: self.selection.current().to_vec(),
            ..self.graph.snapshot()
        }
    }

    /// Replace the graph with a snapshot's contents.
    ///
    /// The snapshot's selection is restored with ids that are not live in the
    /// new graph dropped.
    ///
    /// # Errors
    ///
    /// Returns the validation error from [`GraphStore::from_snapshot`]; the
    /// session is unchanged in that case.
    pub fn load_snapshot(&mut self, snapshot: &GraphSnapshot) -> Result<()> {
        let graph = GraphStore::from_snapshot(snapshot)?;

        let mut selection = Selection::new();
        for &id in snapshot.selection.iter().take(crate::SELECTION_CAPACITY) {
            selection.select(id);
        }
        if selection.purge_if_absent(graph.vertices()) {
            debug!("Dropped stale ids from restored selection");
        }

        self.graph = graph;
        self.selection = selection;
        Ok(())
    }

    /// Apply a command.
    ///
    /// [`Command::Analyze`] leaves the selection alone and reports through
    /// [`GraphChange::Analyzed`]; [`EditSession::analyze`] is the direct form.
    ///
    /// # Errors
    ///
    /// Returns the command's failure reason; state is unchanged on error.
    pub fn apply(&mut self, command: Command) -> Result<CommandOutcome> {
        debug!("Applying command: {command:?}");
        match command {
            Command::AddVertex { group } => Ok(self.add_vertex_in_group(
                group.unwrap_or(self.config.default_group),
            )),
            Command::Select(id) => self.select(id),
            Command::ClearSelection => Ok(self.clear_selection()),
            Command::AddEdgeFromSelection => self.add_edge_from_selection(),
            Command::RemoveVertexFromSelection => self.remove_vertex_from_selection(),
            Command::RemoveEdgeFromSelection => self.remove_edge_from_selection(),
            Command::Analyze => Ok(self.outcome(GraphChange::Analyzed {
                report: self.analyze(),
            })),
        }
    }

    /// Create a vertex in the configured default group. Always succeeds.
    pub fn add_vertex(&mut self) -> CommandOutcome {
        self.add_vertex_in_group(self.config.default_group)
    }

    /// Create a vertex in `group`. Always succeeds.
    pub fn add_vertex_in_group(&mut self, group: Group) -> CommandOutcome {
        let id = self.graph.add_vertex(group);
        self.selection.clear();
        self.outcome(GraphChange::VertexAdded {
            vertex: Vertex::new(id, group),
        })
    }

    /// Add a live vertex to the selection.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotFound`] if `id` is not live.
    pub fn select(&mut self, id: VertexId) -> Result<CommandOutcome> {
        self.graph.vertex(id)?;
        self.selection.select(id);
        debug!("Selection is now {:?}", self.selection.current());
        Ok(self.selection_outcome())
    }

    /// Empty the selection. Always succeeds.
    pub fn clear_selection(&mut self) -> CommandOutcome {
        self.selection.clear();
        self.selection_outcome()
    }

    /// Join the two selected vertices with an edge.
    ///
    /// If the edge already exists this still succeeds (with `created: false`)
    /// and clears the selection, but the revision does not move.
    ///
    /// # Errors
    ///
    /// - [`GraphError::InvalidSelection`] unless exactly two vertices are selected
    /// - [`GraphError::InvalidEdge`] if the same vertex was selected twice
    pub fn add_edge_from_selection(&mut self) -> Result<CommandOutcome> {
        let (a, b) = self.require_pair()?;
        let created = self.graph.add_edge(a, b)?;
        self.selection.clear();
        Ok(self.outcome(GraphChange::EdgeAdded {
            edge: Edge::new(a, b),
            created,
        }))
    }

    /// Remove the single selected vertex and its incident edges.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidSelection`] unless exactly one vertex is selected.
    pub fn remove_vertex_from_selection(&mut self) -> Result<CommandOutcome> {
        let id = self.selection.single().ok_or(GraphError::InvalidSelection {
            required: 1,
            actual: self.selection.len(),
        })?;
        let vertex = *self.graph.vertex(id)?;
        let removed_edges = self.graph.remove_vertex(id)?;
        self.selection.clear();
        Ok(self.outcome(GraphChange::VertexRemoved {
            vertex,
            removed_edges,
        }))
    }

    /// Remove the edge between the two selected vertices.
    ///
    /// # Errors
    ///
    /// - [`GraphError::InvalidSelection`] unless exactly two vertices are selected
    /// - [`GraphError::EdgeNotFound`] if they are not adjacent
    pub fn remove_edge_from_selection(&mut self) -> Result<CommandOutcome> {
        let (a, b) = self.require_pair()?;
        let edge = self.graph.remove_edge(a, b)?;
        self.selection.clear();
        Ok(self.outcome(GraphChange::EdgeRemoved { edge }))
    }

    /// Run articulation analysis on the current graph. Never mutates state.
    pub fn analyze(&self) -> AnalysisReport {
        let articulation_points = algorithms::find_articulation_points(&self.graph);
        let component_count = algorithms::connected_components(&self.graph).len();
        info!(
            "Analysis at revision {}: {} articulation points across {} components",
            self.graph.revision(),
            articulation_points.len(),
            component_count
        );
        AnalysisReport {
            articulation_points,
            component_count,
            revision: self.graph.revision(),
        }
    }

    // Private helper methods

    fn require_pair(&self) -> Result<(VertexId, VertexId)> {
        self.selection.pair().ok_or(GraphError::InvalidSelection {
            required: 2,
            actual: self.selection.len(),
        })
    }

    fn selection_outcome(&self) -> CommandOutcome {
        self.outcome(GraphChange::SelectionChanged {
            selection: self.selection.current().to_vec(),
        })
    }

    fn outcome(&self, change: GraphChange) -> CommandOutcome {
        CommandOutcome {
            change,
            revision: self.graph.revision(),
        }
    }
}
