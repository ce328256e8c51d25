//! Core graph types and operations.
//!
//! This module defines the fundamental building blocks:
//! - [`Vertex`]: A live vertex with an opaque group tag
//! - [`Edge`]: An undirected relationship between two distinct vertices
//! - [`GraphStore`]: The owned graph with mutation and query primitives
//! - [`GraphSnapshot`]: A serializable copy handed to view layers

mod types;
mod snapshot;
mod store;
pub mod algorithms;

pub use types::{Edge, Group, Vertex, VertexId};
pub use snapshot::GraphSnapshot;
pub use store::GraphStore;
