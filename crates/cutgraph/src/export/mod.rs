//! Export module for handing graphs to external renderers.
//!
//! Supports two formats:
//! - **JSON**: D3.js force-directed layouts (`nodes` / `links`)
//! - **DOT**: Graphviz visualization
//!
//! Both accept an optional set of articulation points to highlight.

pub mod dot;
pub mod json;

pub use dot::{export_dot, export_dot_styled, DotOptions};
pub use json::export_json;
