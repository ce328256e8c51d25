//! Graph analysis algorithms.
//!
//! Provides articulation point detection (Tarjan's low-link method) and
//! connected component grouping. Both traversals are iterative, so graph size
//! is bounded by memory rather than by the call stack.

use crate::graph::{GraphStore, VertexId};
use log::{debug, trace};
use std::collections::btree_set;
use std::collections::{BTreeSet, HashMap, HashSet};

/// One suspended vertex on the explicit DFS stack.
struct Frame<'a> {
    vertex: VertexId,
    parent: Option<VertexId>,
    // Position in the vertex's neighbor list
    neighbors: btree_set::Iter<'a, VertexId>,
    // DFS-tree children discovered so far
    children: usize,
}

impl<'a> Frame<'a> {
    fn new(vertex: VertexId, parent: Option<VertexId>, neighbors: &'a BTreeSet<VertexId>) -> Self {
        Self {
            vertex,
            parent,
            neighbors: neighbors.iter(),
            children: 0,
        }
    }
}

/// Discovery order and low-link values for one analysis run.
#[derive(Default)]
struct LowLink {
    disc: HashMap<VertexId, usize>,
    low: HashMap<VertexId, usize>,
    time: usize,
}

impl LowLink {
    fn discover(&mut self, v: VertexId) {
        self.disc.insert(v, self.time);
        self.low.insert(v, self.time);
        self.time += 1;
    }

    fn disc(&self, v: VertexId) -> Option<usize> {
        self.disc.get(&v).copied()
    }

    fn low(&self, v: VertexId) -> usize {
        self.low.get(&v).copied().unwrap_or(usize::MAX)
    }

    fn relax(&mut self, v: VertexId, candidate: usize) {
        if let Some(low) = self.low.get_mut(&v) {
            *low = (*low).min(candidate);
        }
    }
}

/// Find all articulation points (cut vertices) of the graph.
///
/// A cut vertex is one whose removal increases the number of connected
/// components. Every component is searched from its own root: the root is a
/// cut vertex iff it has two or more DFS-tree children, any other vertex `u`
/// iff some tree child `v` has `low[v] >= disc[u]`. Discovery times keep
/// counting across components within one run.
///
/// The graph is never mutated. Neighbors that are not live vertices are
/// skipped rather than followed.
///
/// # Returns
/// The set of articulation point ids; empty when there are none
pub fn find_articulation_points(graph: &GraphStore) -> BTreeSet<VertexId> {
    let mut state = LowLink::default();
    let mut points = BTreeSet::new();

    for root in graph.vertices() {
        if state.disc(root).is_some() {
            continue;
        }
        let Ok(root_neighbors) = graph.neighbor_set(root) else {
            continue;
        };

        trace!("Starting DFS at root {root}");
        state.discover(root);
        let mut stack = vec![Frame::new(root, None, root_neighbors)];

        while let Some(frame) = stack.last_mut() {
            let u = frame.vertex;

            if let Some(&w) = frame.neighbors.next() {
                if frame.parent == Some(w) {
                    continue;
                }
                match state.disc(w) {
                    // Back edge
                    Some(disc_w) => state.relax(u, disc_w),
                    // Tree edge
                    None => {
                        let Ok(w_neighbors) = graph.neighbor_set(w) else {
                            continue;
                        };
                        frame.children += 1;
                        state.discover(w);
                        stack.push(Frame::new(w, Some(u), w_neighbors));
                    }
                }
                continue;
            }

            // All neighbors of u explored: fold its low-link into the parent
            let finished_children = frame.children;
            stack.pop();
            match stack.last() {
                Some(parent_frame) => {
                    let p = parent_frame.vertex;
                    let low_u = state.low(u);
                    state.relax(p, low_u);
                    let is_root = parent_frame.parent.is_none();
                    if !is_root && state.disc(p).is_some_and(|disc_p| low_u >= disc_p) {
                        points.insert(p);
                    }
                }
                None => {
                    if finished_children >= 2 {
                        points.insert(u);
                    }
                }
            }
        }
    }

    debug!(
        "Articulation analysis: {} vertices, {} cut vertices",
        graph.vertex_count(),
        points.len()
    );
    points
}

/// Group live vertices into connected components.
///
/// Components are ordered by their smallest vertex id; vertices inside a
/// component are ascending.
pub fn connected_components(graph: &GraphStore) -> Vec<Vec<VertexId>> {
    let mut visited = HashSet::new();
    let mut components = Vec::new();

    for start in graph.vertices() {
        if !visited.insert(start) {
            continue;
        }

        let mut component = vec![start];
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            let Ok(neighbors) = graph.neighbor_set(current) else {
                continue;
            };
            for &neighbor in neighbors {
                if graph.contains_vertex(neighbor) && visited.insert(neighbor) {
                    component.push(neighbor);
                    stack.push(neighbor);
                }
            }
        }

        component.sort_unstable();
        components.push(component);
    }

    components
}
