//! Basic usage example for cutgraph
//!
//! This example demonstrates:
//! - Starting a session from the demo graph
//! - Editing through the selection
//! - Running articulation analysis and exporting the result

use cutgraph::{Command, EditSession, SessionConfig};

fn main() -> cutgraph::Result<()> {
    let mut session = EditSession::with_config(SessionConfig::demo())?;

    println!("Starting from the demo graph...\n");
    print_report(&session);

    // Add a vertex and attach it to 4
    let outcome = session.apply(Command::AddVertex { group: None })?;
    println!("✓ {:?}", outcome.change);
    session.apply(Command::Select(4))?;
    session.apply(Command::Select(5))?;
    let outcome = session.apply(Command::AddEdgeFromSelection)?;
    println!("✓ {:?}", outcome.change);
    print_report(&session);

    // Selection errors are reported, not fatal
    if let Err(e) = session.apply(Command::RemoveVertexFromSelection) {
        println!("✗ {e}");
    }

    // Close a loop through 3
    session.apply(Command::Select(5))?;
    session.apply(Command::Select(3))?;
    session.apply(Command::AddEdgeFromSelection)?;
    print_report(&session);

    let report = session.analyze();
    println!("\nGraphviz:\n{}", session.graph().export_dot(Some(&report.articulation_points))?);

    Ok(())
}

fn print_report(session: &EditSession) {
    let report = session.analyze();
    match report.notice() {
        Some(notice) => println!("  {notice}"),
        None => println!("  Articulation points: {:?}", report.articulation_points),
    }
}
