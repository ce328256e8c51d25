//! Session configuration.

use crate::error::{GraphError, Result};
use crate::graph::Group;
use serde::{Deserialize, Serialize};

/// Initial contents of a new session's graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedGraph {
    /// Start with no vertices
    #[default]
    Empty,
    /// Start with the five-vertex demo graph (see [`crate::helpers::demo_graph`])
    Demo,
}

/// Configuration for [`crate::EditSession`] behavior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Group tag given to vertices created through the session
    pub default_group: Group,

    /// Graph the session starts with
    pub seed: SeedGraph,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_group: 1,
            seed: SeedGraph::Empty,
        }
    }
}

impl SessionConfig {
    /// Create config that starts from the demo graph
    pub fn demo() -> Self {
        Self {
            seed: SeedGraph::Demo,
            ..Default::default()
        }
    }

    /// Set the group tag for new vertices
    pub fn with_default_group(mut self, group: Group) -> Self {
        self.default_group = group;
        self
    }

    /// Set the initial graph
    pub fn with_seed(mut self, seed: SeedGraph) -> Self {
        self.seed = seed;
        self
    }

    /// Parse a config document. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Serialization`] if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| GraphError::serialization("Failed to parse session config", Some(e)))
    }
}
