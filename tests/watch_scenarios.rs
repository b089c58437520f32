// tests/watch_scenarios.rs

mod common;
use crate::common::builders::{mock_core, mock_path, GraphBuilder};
use crate::common::init_tracing;
use crate::common::recording::Report;

use depwatch::engine::LoopState;
use depwatch::watch::Fingerprint;

#[test]
fn edit_to_watched_file_reports_its_dependents() {
    init_tracing();

    let graph = GraphBuilder::new().with_file("lib.py", &["app.py"]).build();
    let (mut core, fs, reporter) = mock_core(graph, false);

    fs.add_file(mock_path("lib.py"), "X");
    let first = core.run_cycle();
    assert!(first.changes.is_empty(), "first sighting must not be a change");
    assert!(reporter.change_reports().is_empty());

    fs.add_file(mock_path("lib.py"), "Y");
    let second = core.run_cycle();

    assert_eq!(second.changes.len(), 1);
    let event = &second.changes[0];
    assert_eq!(event.path.as_str(), "lib.py");
    assert_eq!(event.previous, Fingerprint::of_bytes(b"X"));
    assert_eq!(event.current, Fingerprint::of_bytes(b"Y"));

    assert_eq!(
        reporter.change_reports(),
        vec![
            Report::ChangeDetected {
                path: "lib.py".into()
            },
            Report::DependentsAffected {
                path: "lib.py".into(),
                dependents: vec!["app.py".into()],
            },
        ]
    );
}

#[test]
fn file_created_after_first_cycle_is_a_change() {
    init_tracing();

    let graph = GraphBuilder::new().with_file("gen.txt", &["out.txt"]).build();
    let (mut core, fs, reporter) = mock_core(graph, false);

    let first = core.run_cycle();
    assert_eq!(first.absent, 1);
    assert!(first.changes.is_empty());

    fs.add_file(mock_path("gen.txt"), "Z");
    let second = core.run_cycle();

    assert_eq!(second.changes.len(), 1);
    assert_eq!(second.changes[0].previous, Fingerprint::Absent);
    assert_eq!(second.changes[0].current, Fingerprint::of_bytes(b"Z"));
    assert!(reporter
        .change_reports()
        .contains(&Report::DependentsAffected {
            path: "gen.txt".into(),
            dependents: vec!["out.txt".into()],
        }));
}

#[test]
fn deleting_a_watched_file_is_a_change() {
    init_tracing();

    let graph = GraphBuilder::new().with_file("lib.py", &["app.py"]).build();
    let (mut core, fs, _reporter) = mock_core(graph, false);

    fs.add_file(mock_path("lib.py"), "X");
    core.run_cycle();

    fs.remove_file(mock_path("lib.py"));
    let summary = core.run_cycle();

    assert_eq!(summary.changes.len(), 1);
    assert_eq!(summary.changes[0].current, Fingerprint::Absent);
    assert_eq!(summary.absent, 1);
}

#[test]
fn change_without_dependents_is_confirmed() {
    init_tracing();

    let graph = GraphBuilder::new().with_file("README.md", &[]).build();
    let (mut core, fs, reporter) = mock_core(graph, false);

    fs.add_file(mock_path("README.md"), "v1");
    core.run_cycle();
    fs.add_file(mock_path("README.md"), "v2");
    core.run_cycle();

    assert_eq!(
        reporter.change_reports(),
        vec![
            Report::ChangeDetected {
                path: "README.md".into()
            },
            Report::UpdateConfirmed {
                path: "README.md".into()
            },
        ]
    );
}

#[test]
fn unchanged_files_produce_no_reports() {
    init_tracing();

    let graph = GraphBuilder::new().with_file("lib.py", &["app.py"]).build();
    let (mut core, fs, reporter) = mock_core(graph, false);

    fs.add_file(mock_path("lib.py"), "X");
    for _ in 0..3 {
        core.run_cycle();
    }

    assert!(reporter.change_reports().is_empty());
    assert_eq!(reporter.cycles_completed(), 3);
    assert_eq!(core.cycles_completed(), 3);
}

#[test]
fn dependents_are_not_polled_by_default() {
    init_tracing();

    let graph = GraphBuilder::new().with_file("lib.py", &["app.py"]).build();
    let (mut core, fs, reporter) = mock_core(graph, false);

    fs.add_file(mock_path("lib.py"), "X");
    fs.add_file(mock_path("app.py"), "1");
    core.run_cycle();
    fs.add_file(mock_path("app.py"), "2");
    let summary = core.run_cycle();

    assert_eq!(summary.polled, 1);
    assert!(summary.changes.is_empty());
    assert!(reporter.change_reports().is_empty());
    assert!(core.tracker().last_seen("app.py").is_none());
}

#[test]
fn dependents_are_polled_when_opted_in() {
    init_tracing();

    let graph = GraphBuilder::new().with_file("lib.py", &["app.py"]).build();
    let (mut core, fs, reporter) = mock_core(graph, true);

    fs.add_file(mock_path("lib.py"), "X");
    fs.add_file(mock_path("app.py"), "1");
    core.run_cycle();
    fs.add_file(mock_path("app.py"), "2");
    let summary = core.run_cycle();

    assert_eq!(summary.polled, 2);
    assert_eq!(
        reporter.change_reports(),
        vec![
            Report::ChangeDetected {
                path: "app.py".into()
            },
            Report::UpdateConfirmed {
                path: "app.py".into()
            },
        ]
    );
}

#[test]
fn unreadable_file_does_not_stop_the_cycle() {
    init_tracing();

    let graph = GraphBuilder::new()
        .with_file("a.txt", &["x.txt"])
        .with_file("b.txt", &["y.txt"])
        .build();
    let (mut core, fs, reporter) = mock_core(graph, false);

    fs.add_file(mock_path("a.txt"), "a1");
    fs.add_file(mock_path("b.txt"), "b1");
    core.run_cycle();

    // a.txt becomes unreadable and b.txt changes in the same cycle.
    fs.add_unreadable(mock_path("a.txt"));
    fs.add_file(mock_path("b.txt"), "b2");
    let summary = core.run_cycle();

    let changed: Vec<&str> = summary.changes.iter().map(|c| c.path.as_str()).collect();
    assert_eq!(changed, vec!["a.txt", "b.txt"]);
    assert_eq!(summary.absent, 1);
    assert!(reporter
        .change_reports()
        .contains(&Report::DependentsAffected {
            path: "b.txt".into(),
            dependents: vec!["y.txt".into()],
        }));

    // Readable again with the original content: absent -> digest is a change.
    fs.add_file(mock_path("a.txt"), "a1");
    let summary = core.run_cycle();
    assert_eq!(summary.changes.len(), 1);
    assert_eq!(summary.changes[0].previous, Fingerprint::Absent);
}

#[test]
fn loop_is_idle_between_cycles_and_counts_them() {
    init_tracing();

    let graph = GraphBuilder::new().with_file("lib.py", &["app.py"]).build();
    let (mut core, _fs, reporter) = mock_core(graph, false);

    assert_eq!(core.state(), LoopState::Idle);
    let first = core.run_cycle();
    let second = core.run_cycle();

    assert_eq!(core.state(), LoopState::Idle);
    assert_eq!(first.cycle, 1);
    assert_eq!(second.cycle, 2);
    assert_eq!(
        reporter.reports(),
        vec![
            Report::CycleCompleted { cycle: 1, changes: 0 },
            Report::CycleCompleted { cycle: 2, changes: 0 },
        ]
    );
}

#[test]
fn changes_are_reported_in_declaration_order() {
    init_tracing();

    let graph = GraphBuilder::new()
        .with_file("zeta.txt", &["z-out.txt"])
        .with_file("alpha.txt", &["a-out.txt"])
        .build();
    let (mut core, fs, _reporter) = mock_core(graph, false);

    fs.add_file(mock_path("zeta.txt"), "1");
    fs.add_file(mock_path("alpha.txt"), "1");
    core.run_cycle();
    fs.add_file(mock_path("zeta.txt"), "2");
    fs.add_file(mock_path("alpha.txt"), "2");
    let summary = core.run_cycle();

    let changed: Vec<&str> = summary.changes.iter().map(|c| c.path.as_str()).collect();
    assert_eq!(changed, vec!["zeta.txt", "alpha.txt"]);
}
