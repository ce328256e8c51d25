//! JSON format export for D3.js and web visualization tools.
//!
//! Generates JSON with "nodes" and "links" arrays compatible with D3.js
//! force-directed layouts.

use crate::error::{GraphError, Result};
use crate::graph::{GraphStore, Vertex, VertexId};
use serde_json::{json, Value};
use std::collections::BTreeSet;

/// Export graph to D3.js-compatible JSON format.
///
/// Each node carries `id`, `group` and an `articulation` flag that is `true`
/// for members of `articulation_points`.
pub fn export_json(
    graph: &GraphStore,
    articulation_points: Option<&BTreeSet<VertexId>>,
) -> Result<String> {
    let nodes_array: Vec<Value> = graph
        .iter_vertices()
        .map(|vertex| {
            let is_cut = articulation_points.is_some_and(|points| points.contains(&vertex.id));
            node_to_json(vertex, is_cut)
        })
        .collect();

    let links_array: Vec<Value> = graph
        .edges()
        .iter()
        .map(|edge| {
            json!({
                "source": edge.source,
                "target": edge.target,
            })
        })
        .collect();

    let result = json!({
        "nodes": nodes_array,
        "links": links_array,
    });

    serde_json::to_string_pretty(&result)
        .map_err(|e| GraphError::serialization("Failed to serialize graph JSON", Some(e)))
}

/// Convert vertex to JSON object
fn node_to_json(vertex: &Vertex, is_cut: bool) -> Value {
    json!({
        "id": vertex.id,
        "group": vertex.group,
        "articulation": is_cut,
    })
}
