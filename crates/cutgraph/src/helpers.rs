//! Convenience builders for common graph shapes.
//!
//! These reduce boilerplate when seeding a session or setting up tests and
//! benchmarks. Each builder appends fresh vertices to an existing graph and
//! returns their ids in creation order.

use crate::error::Result;
use crate::graph::{GraphStore, Group, VertexId};

/// Add a path `v0 - v1 - ... - v(n-1)`.
///
/// # Returns
///
/// The ids of the created vertices, in path order.
pub fn add_path(graph: &mut GraphStore, n: usize, group: Group) -> Result<Vec<VertexId>> {
    let ids: Vec<_> = (0..n).map(|_| graph.add_vertex(group)).collect();
    for pair in ids.windows(2) {
        graph.add_edge(pair[0], pair[1])?;
    }
    Ok(ids)
}

/// Add a cycle `v0 - v1 - ... - v(n-1) - v0`.
///
/// For `n < 3` this degenerates to a path, since a two-vertex "cycle" would
/// need a parallel edge.
pub fn add_cycle(graph: &mut GraphStore, n: usize, group: Group) -> Result<Vec<VertexId>> {
    let ids = add_path(graph, n, group)?;
    if n >= 3 {
        graph.add_edge(ids[n - 1], ids[0])?;
    }
    Ok(ids)
}

/// Add a star: one center joined to `leaves` pendant vertices.
///
/// # Returns
///
/// `(center, leaves)`.
pub fn add_star(
    graph: &mut GraphStore,
    leaves: usize,
    group: Group,
) -> Result<(VertexId, Vec<VertexId>)> {
    let center = graph.add_vertex(group);
    let mut leaf_ids = Vec::with_capacity(leaves);
    for _ in 0..leaves {
        let leaf = graph.add_vertex(group);
        graph.add_edge(center, leaf)?;
        leaf_ids.push(leaf);
    }
    Ok((center, leaf_ids))
}

/// Add a `rows x cols` grid, row-major.
pub fn add_grid(
    graph: &mut GraphStore,
    rows: usize,
    cols: usize,
    group: Group,
) -> Result<Vec<VertexId>> {
    let ids: Vec<_> = (0..rows * cols).map(|_| graph.add_vertex(group)).collect();
    for r in 0..rows {
        for c in 0..cols {
            let here = ids[r * cols + c];
            if c + 1 < cols {
                graph.add_edge(here, ids[r * cols + c + 1])?;
            }
            if r + 1 < rows {
                graph.add_edge(here, ids[(r + 1) * cols + c])?;
            }
        }
    }
    Ok(ids)
}

/// Build the five-vertex demo graph.
///
/// Vertices `0..=4` in group 1, edges `0-2, 0-1, 1-3, 1-4, 2-3`. Vertex 1 is
/// its only articulation point.
pub fn demo_graph() -> Result<GraphStore> {
    let mut graph = GraphStore::new();
    for _ in 0..5 {
        graph.add_vertex(1);
    }
    for (a, b) in [(0, 2), (0, 1), (1, 3), (1, 4), (2, 3)] {
        graph.add_edge(a, b)?;
    }
    Ok(graph)
}
