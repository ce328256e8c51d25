//! DOT format export for Graphviz visualization.
//!
//! Generates an undirected Graphviz `graph` for rendering as an image.

use crate::error::Result;
use crate::graph::{GraphStore, Group, VertexId};
use std::collections::BTreeSet;

/// Options for styling DOT export
#[derive(Debug, Clone)]
pub struct DotOptions {
    /// Fill colors cycled by group (hex color codes)
    pub palette: Vec<String>,
    /// Fill color for articulation points
    pub highlight_color: String,
    /// Node shape (circle, box, ellipse, etc.)
    pub node_shape: String,
    /// Graphviz layout engine hint: neato, fdp, dot, ...
    pub layout: String,
}

impl Default for DotOptions {
    fn default() -> Self {
        // d3.schemeCategory10
        let palette = [
            "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2",
            "#7f7f7f", "#bcbd22", "#17becf",
        ]
        .iter()
        .map(|c| c.to_string())
        .collect();

        DotOptions {
            palette,
            highlight_color: "#eb4034".to_string(),
            node_shape: "circle".to_string(),
            layout: "neato".to_string(),
        }
    }
}

impl DotOptions {
    /// Fill color for a vertex group.
    pub fn group_color(&self, group: Group) -> &str {
        if self.palette.is_empty() {
            return "#FFFFFF";
        }
        &self.palette[group as usize % self.palette.len()]
    }
}

/// Export graph to Graphviz DOT format
pub fn export_dot(
    graph: &GraphStore,
    articulation_points: Option<&BTreeSet<VertexId>>,
) -> Result<String> {
    export_dot_styled(graph, &DotOptions::default(), articulation_points)
}

/// Export graph to Graphviz DOT format with custom styling
pub fn export_dot_styled(
    graph: &GraphStore,
    options: &DotOptions,
    articulation_points: Option<&BTreeSet<VertexId>>,
) -> Result<String> {
    let mut output = String::new();

    // Header
    output.push_str("graph cut_graph {\n");
    output.push_str(&format!("    layout={};\n", options.layout));
    output.push_str(&format!(
        "    node [style=filled, shape={}];\n\n",
        options.node_shape
    ));

    for vertex in graph.iter_vertices() {
        let is_cut = articulation_points.is_some_and(|points| points.contains(&vertex.id));
        let color = if is_cut {
            options.highlight_color.as_str()
        } else {
            options.group_color(vertex.group)
        };
        output.push_str(&format!(
            "    n{id} [label=\"{id}\", fillcolor=\"{color}\"];\n",
            id = vertex.id
        ));
    }

    output.push('\n');

    for edge in graph.edges() {
        output.push_str(&format!("    n{} -- n{};\n", edge.source, edge.target));
    }

    output.push_str("}\n");

    Ok(output)
}
