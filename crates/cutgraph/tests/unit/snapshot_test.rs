//! Unit tests for snapshot capture and validated reload.

use cutgraph::{helpers, Edge, ErrorKind, GraphSnapshot, GraphStore, Vertex};

#[test]
fn test_snapshot_json_shape() {
    let graph = helpers::demo_graph().unwrap();
    let json = graph.snapshot().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["nodes"].as_array().unwrap().len(), 5);
    assert_eq!(value["nodes"][0]["id"], 0);
    assert_eq!(value["nodes"][0]["group"], 1);
    assert_eq!(value["links"].as_array().unwrap().len(), 5);
    assert_eq!(value["links"][0]["source"], 0);
    assert_eq!(value["links"][0]["target"], 1);
}

#[test]
fn test_reload_preserves_structure() {
    let mut graph = helpers::demo_graph().unwrap();
    graph.remove_vertex(2).unwrap();

    let json = graph.snapshot().to_json().unwrap();
    let reloaded = GraphStore::from_snapshot(&GraphSnapshot::from_json(&json).unwrap()).unwrap();

    assert_eq!(reloaded.vertices(), graph.vertices());
    assert_eq!(reloaded.edges(), graph.edges());
    assert_eq!(reloaded.articulation_points(), graph.articulation_points());
}

#[test]
fn test_reload_rejects_duplicate_vertex() {
    let snapshot = GraphSnapshot {
        nodes: vec![Vertex::new(1, 1), Vertex::new(1, 2)],
        links: vec![],
        selection: vec![],
    };
    let err = GraphStore::from_snapshot(&snapshot).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidOperation);
}

#[test]
fn test_reload_rejects_self_loop() {
    let snapshot = GraphSnapshot {
        nodes: vec![Vertex::new(0, 1)],
        links: vec![Edge { source: 0, target: 0 }],
        selection: vec![],
    };
    let err = GraphStore::from_snapshot(&snapshot).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidEdge);
}

#[test]
fn test_reload_collapses_duplicate_links() {
    let snapshot = GraphSnapshot {
        nodes: vec![Vertex::new(0, 1), Vertex::new(1, 1)],
        links: vec![Edge::new(0, 1), Edge { source: 1, target: 0 }],
        selection: vec![],
    };
    let graph = GraphStore::from_snapshot(&snapshot).unwrap();
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.revision(), 0);
}
