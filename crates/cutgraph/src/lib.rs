//! # cutgraph
//!
//! An interactively editable undirected graph with on-demand articulation
//! point (cut vertex) analysis.
//!
//! ## Core Principles
//!
//! - **Owned State**: One [`EditSession`] owns its graph and selection
//! - **Atomic Commands**: A failing command leaves everything as it was
//! - **Typed Failures**: Every failure is a [`GraphError`] naming the reason
//! - **Stack Safe**: Analysis uses an explicit DFS stack, never recursion
//!
//! ## Architecture
//!
//! ```text
//! UI events (rendering, layout, input)
//!     ↓
//! EditSession (commands, outcomes)
//!     ↓                ↓
//! Selection        GraphStore
//!                      ↓
//!              algorithms (articulation points)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use cutgraph::{EditSession, SessionConfig};
//!
//! # fn example() -> cutgraph::Result<()> {
//! let mut session = EditSession::with_config(SessionConfig::demo())?;
//!
//! // Join vertices 3 and 4 through the selection
//! session.select(3)?;
//! session.select(4)?;
//! session.add_edge_from_selection()?;
//!
//! // Vertex 1 was the only cut vertex; the new edge bypasses it
//! let report = session.analyze();
//! assert!(report.is_empty());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod export;
pub mod graph;
pub mod helpers;
pub mod selection;
pub mod session;

// Re-export main types
pub use config::{SeedGraph, SessionConfig};
pub use error::{ErrorKind, GraphError, Result};
pub use graph::{Edge, GraphSnapshot, GraphStore, Group, Vertex, VertexId};
pub use selection::{Selection, SELECTION_CAPACITY};
pub use session::{
    AnalysisReport, Command, CommandOutcome, EditSession, GraphChange, NO_ARTICULATION_POINTS,
};
