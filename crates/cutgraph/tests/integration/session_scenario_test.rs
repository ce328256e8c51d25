//! Integration test replaying an interactive editing session end to end.

use cutgraph::{Command, EditSession, ErrorKind, GraphSnapshot, SessionConfig};
use std::collections::BTreeSet;

#[test]
fn test_interactive_session() {
    let mut session = EditSession::with_config(SessionConfig::demo()).unwrap();

    // Initial demo graph: 1 holds the pendant 4
    let report = session.analyze();
    assert_eq!(report.articulation_points, BTreeSet::from([1]));
    assert_eq!(report.notice(), None);

    // Add vertex 5 and hang it off 4
    let outcome = session.apply(Command::AddVertex { group: None }).unwrap();
    assert!(outcome.graph_changed());
    session.apply(Command::Select(4)).unwrap();
    session.apply(Command::Select(5)).unwrap();
    session.apply(Command::AddEdgeFromSelection).unwrap();
    assert_eq!(
        session.analyze().articulation_points,
        BTreeSet::from([1, 4])
    );

    // Close the loop 5 - 3: no cut vertices remain
    session.apply(Command::Select(5)).unwrap();
    session.apply(Command::Select(3)).unwrap();
    session.apply(Command::AddEdgeFromSelection).unwrap();
    let report = session.analyze();
    assert!(report.is_empty());
    assert_eq!(report.notice(), Some("No articulation points found."));

    // A third select restarts the selection; removal needs exactly one
    session.apply(Command::Select(0)).unwrap();
    session.apply(Command::Select(2)).unwrap();
    session.apply(Command::Select(3)).unwrap();
    assert_eq!(session.selection(), &[3]);
    session.apply(Command::RemoveVertexFromSelection).unwrap();

    // Without 3 the graph is the path 2 - 0 - 1 - 4 - 5
    let report = session.analyze();
    assert_eq!(report.articulation_points, BTreeSet::from([0, 1, 4]));
    assert_eq!(report.component_count, 1);

    // Removing edge 0-2 isolates 2, leaving the path 0 - 1 - 4 - 5
    session.apply(Command::Select(0)).unwrap();
    let err = session.apply(Command::RemoveEdgeFromSelection).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidSelection);
    session.apply(Command::Select(2)).unwrap();
    session.apply(Command::RemoveEdgeFromSelection).unwrap();

    let report = session.analyze();
    assert_eq!(report.component_count, 2);
    assert_eq!(report.articulation_points, BTreeSet::from([1, 4]));
}

#[test]
fn test_snapshot_roundtrip_through_json() {
    let mut session = EditSession::with_config(SessionConfig::demo()).unwrap();
    session.select(2).unwrap();

    let json = session.snapshot().to_json().unwrap();

    let mut restored = EditSession::new();
    restored
        .load_snapshot(&GraphSnapshot::from_json(&json).unwrap())
        .unwrap();

    assert_eq!(restored.snapshot(), session.snapshot());
    assert_eq!(restored.analyze().articulation_points, BTreeSet::from([1]));
}
