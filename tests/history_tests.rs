// Integration tests for recorded execution history

use bfvm::interpreter::constants::DEFAULT_SNAPSHOT_LIMIT;
use bfvm::interpreter::engine::EngineConfig;
use bfvm::interpreter::errors::{RecordError, SyntaxError};
use bfvm::snapshot::history::History;

fn record(source: &str, input: &[u8]) -> History {
    History::record(source, input, EngineConfig::default(), DEFAULT_SNAPSHOT_LIMIT)
        .expect("Recording failed")
}

#[test]
fn test_replay_matches_execution() {
    let mut history = record(",[.,]", b"hi");
    assert!(history.is_at_start());
    assert!(history.output().is_empty());

    history.jump_to_end();
    assert!(history.is_at_end());
    let last = history.current().unwrap();
    assert!(last.halted);
    assert_eq!(last.loop_depth, 0);
    assert_eq!(history.output(), b"hi\n");
}

#[test]
fn test_output_follows_cursor() {
    let mut history = record("+.+.", b"");
    assert!(history.step_forward()); // +
    assert!(history.output().is_empty());
    assert!(history.step_forward()); // .
    assert_eq!(history.output(), &[1]);
    assert!(history.step_forward()); // +
    assert!(history.step_forward()); // . then halt
    assert_eq!(history.output(), &[1, 2, b'\n']);
    assert!(!history.step_forward());

    assert!(history.step_backward());
    assert_eq!(history.output(), &[1]);
    history.rewind_to_start();
    assert!(!history.step_backward());
    assert_eq!(history.position(), 0);
}

#[test]
fn test_snapshots_track_loop_depth_and_pointer() {
    let mut history = record("+[>+<-]", b"");
    history.step_forward(); // +
    history.step_forward(); // [ entered
    let snapshot = history.current().unwrap();
    assert_eq!(snapshot.executed, Some(1));
    assert_eq!(snapshot.loop_depth, 1);
    assert_eq!(snapshot.instruction_pointer, 2);

    history.step_forward(); // >
    assert_eq!(history.current().unwrap().pointer, 1);

    history.jump_to_end();
    let last = history.current().unwrap();
    assert_eq!(last.cell(0), 0);
    assert_eq!(last.cell(1), 1);
}

#[test]
fn test_matching_brackets() {
    let history = record("+[>[-]<-]", b"");
    assert_eq!(history.matching_bracket(1), Some(8));
    assert_eq!(history.matching_bracket(8), Some(1));
    assert_eq!(history.matching_bracket(3), Some(5));
    assert_eq!(history.matching_bracket(0), None);
}

#[test]
fn test_invalid_source_is_rejected() {
    let result = History::record("[[", b"", EngineConfig::default(), DEFAULT_SNAPSHOT_LIMIT);
    assert_eq!(
        result.unwrap_err(),
        SyntaxError::UnmatchedOpen { position: 1 }
    );
}

#[test]
fn test_snapshot_limit_truncates_infinite_program() {
    let history = History::record("+[]", b"", EngineConfig::default(), 64 * 1024)
        .expect("Recording failed");
    assert!(matches!(
        history.truncation(),
        Some(RecordError::SnapshotLimitExceeded { limit, .. }) if *limit == 64 * 1024
    ));
    assert!(history.len() > 10);

    let mut history = history;
    history.jump_to_end();
    assert!(!history.current().unwrap().halted);
}

#[test]
fn test_tape_window_centres_on_pointer() {
    let mut history = record(">>+++", b"");
    history.jump_to_end();
    let window = history.tape_window(2);
    assert_eq!(window, vec![(0, 0), (1, 0), (2, 3), (3, 0), (4, 0)]);
    assert_eq!(history.tape_length(), 30_000);
}
