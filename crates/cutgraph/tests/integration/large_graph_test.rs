//! Integration test for large graph handling (100K vertices).

use cutgraph::{helpers, GraphStore};

#[test]
#[ignore] // This test is slow, run with --ignored flag
fn test_large_graph_100k_vertices() {
    let mut graph = GraphStore::new();

    let num_vertices = 100_000;

    // A long cycle with a pendant on every 1000th vertex
    let ring = helpers::add_cycle(&mut graph, num_vertices, 1).unwrap();
    let mut anchors = Vec::new();
    for i in (0..num_vertices).step_by(1000) {
        let pendant = graph.add_vertex(2);
        graph.add_edge(ring[i], pendant).unwrap();
        anchors.push(ring[i]);
    }

    assert_eq!(graph.vertex_count(), num_vertices + anchors.len());

    let points = graph.articulation_points();
    assert_eq!(points.len(), anchors.len());
    assert!(anchors.iter().all(|a| points.contains(a)));
}

#[test]
fn test_medium_grid_10k_vertices() {
    let mut graph = GraphStore::new();

    let cells = helpers::add_grid(&mut graph, 100, 100, 1).unwrap();
    assert_eq!(graph.vertex_count(), 10_000);
    assert!(graph.articulation_points().is_empty());

    // Cutting the corner off leaves its neighbors as the only links
    graph.remove_edge(cells[0], cells[1]).unwrap();
    let points = graph.articulation_points();
    assert_eq!(points.len(), 1);
    assert!(points.contains(&cells[100]));
}
