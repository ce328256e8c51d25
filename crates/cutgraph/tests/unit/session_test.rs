//! Unit tests for EditSession commands and their failure semantics.

use cutgraph::{
    Command, Edge, EditSession, ErrorKind, GraphChange, GraphError, GraphSnapshot, SessionConfig,
    Vertex,
};
use std::collections::BTreeSet;

fn demo_session() -> EditSession {
    EditSession::with_config(SessionConfig::demo()).unwrap()
}

#[test]
fn test_remove_edge_with_single_selection_fails() {
    let mut session = demo_session();
    session.select(0).unwrap();
    let edges_before = session.graph().edges();

    let err = session.remove_edge_from_selection().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidSelection);
    assert_eq!(session.graph().edges(), edges_before);
    assert_eq!(session.selection(), &[0]);
}

#[test]
fn test_remove_edge_not_adjacent() {
    let mut session = demo_session();
    session.select(2).unwrap();
    session.select(4).unwrap();

    let err = session.remove_edge_from_selection().unwrap_err();
    assert!(matches!(err, GraphError::EdgeNotFound { a: 2, b: 4 }));
    assert_eq!(session.selection(), &[2, 4]);
    assert_eq!(session.graph().edge_count(), 5);
}

#[test]
fn test_remove_edge_from_selection() {
    let mut session = demo_session();
    session.select(1).unwrap();
    session.select(4).unwrap();

    let outcome = session.remove_edge_from_selection().unwrap();
    assert_eq!(
        outcome.change,
        GraphChange::EdgeRemoved {
            edge: Edge::new(1, 4)
        }
    );
    assert!(outcome.graph_changed());
    assert!(session.selection().is_empty());
    assert!(!session.graph().has_edge(1, 4));
}

#[test]
fn test_add_edge_requires_two_selected() {
    let mut session = demo_session();
    let err = session.add_edge_from_selection().unwrap_err();
    assert!(matches!(
        err,
        GraphError::InvalidSelection {
            required: 2,
            actual: 0
        }
    ));

    session.select(3).unwrap();
    let err = session.add_edge_from_selection().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidSelection);
}

#[test]
fn test_remove_vertex_from_selection_cascades() {
    let mut session = demo_session();
    session.select(1).unwrap();

    let outcome = session.remove_vertex_from_selection().unwrap();
    match outcome.change {
        GraphChange::VertexRemoved {
            vertex,
            removed_edges,
        } => {
            assert_eq!(vertex, Vertex::new(1, 1));
            assert_eq!(
                removed_edges,
                vec![Edge::new(0, 1), Edge::new(1, 3), Edge::new(1, 4)]
            );
        }
        other => panic!("unexpected change: {other:?}"),
    }

    assert!(session.selection().is_empty());
    assert!(session.graph().edges().iter().all(|e| !e.touches(1)));
    assert_eq!(session.graph().vertices(), vec![0, 2, 3, 4]);
}

#[test]
fn test_apply_dispatches_commands() {
    let mut session = EditSession::new();

    session.apply(Command::AddVertex { group: None }).unwrap();
    session.apply(Command::AddVertex { group: Some(5) }).unwrap();
    session.apply(Command::Select(0)).unwrap();
    session.apply(Command::Select(1)).unwrap();
    let outcome = session.apply(Command::AddEdgeFromSelection).unwrap();

    assert!(outcome.graph_changed());
    assert_eq!(session.graph().vertex(1).unwrap().group, 5);
    assert!(session.graph().has_edge(0, 1));

    session.apply(Command::Select(1)).unwrap();
    let outcome = session.apply(Command::ClearSelection).unwrap();
    assert_eq!(
        outcome.change,
        GraphChange::SelectionChanged { selection: vec![] }
    );
    assert!(!outcome.graph_changed());
}

#[test]
fn test_failed_command_leaves_state_untouched() {
    let mut session = demo_session();
    session.select(3).unwrap();
    session.select(3).unwrap();
    let before = session.snapshot();
    let revision = session.revision();

    assert!(session.apply(Command::AddEdgeFromSelection).is_err());
    assert!(session.apply(Command::RemoveEdgeFromSelection).is_err());
    assert!(session.apply(Command::RemoveVertexFromSelection).is_err());
    assert!(session.apply(Command::Select(42)).is_err());

    assert_eq!(session.snapshot(), before);
    assert_eq!(session.revision(), revision);
}

#[test]
fn test_snapshot_includes_selection() {
    let mut session = demo_session();
    session.select(4).unwrap();

    let snapshot = session.snapshot();
    assert_eq!(snapshot.nodes.len(), 5);
    assert_eq!(snapshot.links.len(), 5);
    assert_eq!(snapshot.selection, vec![4]);
}

#[test]
fn test_load_snapshot_purges_stale_selection() {
    let mut session = EditSession::new();
    let snapshot = GraphSnapshot {
        nodes: vec![Vertex::new(2, 1), Vertex::new(6, 1)],
        links: vec![Edge::new(2, 6)],
        selection: vec![6, 9],
    };

    session.load_snapshot(&snapshot).unwrap();
    assert_eq!(session.selection(), &[6]);
    assert_eq!(session.graph().vertices(), vec![2, 6]);

    // Next id follows the loaded maximum
    let outcome = session.add_vertex();
    assert_eq!(
        outcome.change,
        GraphChange::VertexAdded {
            vertex: Vertex::new(7, 1)
        }
    );
}

#[test]
fn test_load_invalid_snapshot_is_noop() {
    let mut session = demo_session();
    let before = session.snapshot();
    let bad = GraphSnapshot {
        nodes: vec![Vertex::new(0, 1)],
        links: vec![Edge::new(0, 3)],
        selection: vec![],
    };

    let err = session.load_snapshot(&bad).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(session.snapshot(), before);
}

#[test]
fn test_analyze_after_edits() {
    let mut session = demo_session();
    assert_eq!(session.analyze().articulation_points, BTreeSet::from([1]));

    // Detach 4 from 1 and hang it off 3: now 3 is the cut vertex
    session.select(1).unwrap();
    session.select(4).unwrap();
    session.remove_edge_from_selection().unwrap();
    session.select(3).unwrap();
    session.select(4).unwrap();
    session.add_edge_from_selection().unwrap();

    let report = session.analyze();
    assert_eq!(report.articulation_points, BTreeSet::from([3]));
    assert_eq!(report.revision, session.revision());
}
