// Integration tests for the execution engine

use bfvm::interpreter::engine::{Engine, EngineConfig, EofBehavior};
use bfvm::interpreter::errors::SyntaxError;
use bfvm::interpreter::io::StdIo;
use bfvm::snapshot::MockTerminal;
use std::fs;
use std::path::Path;

fn run(source: &str, input: &[u8]) -> (Engine, MockTerminal) {
    let mut engine = Engine::new();
    let mut terminal = MockTerminal::with_input(input);
    engine
        .run(source, true, &mut terminal)
        .expect("Execution failed");
    (engine, terminal)
}

#[test]
fn test_increment_then_output() {
    let (_, terminal) = run("+++.", b"");
    assert_eq!(terminal.output(), &[3, b'\n']);
}

#[test]
fn test_echo_until_input_exhausted() {
    let (engine, terminal) = run(",[.,]", b"AB");
    assert_eq!(terminal.output_lossy(), "AB\n");
    assert_eq!(engine.tape().current(), 0);
}

#[test]
fn test_hello_world_demo() {
    let path = Path::new("demos/hello.bf");
    let source = fs::read_to_string(path).expect("Failed to read demo file");

    let (_, terminal) = run(&source, b"");
    assert_eq!(terminal.lines(), vec!["Hello World!".to_string(), String::new()]);
    assert_eq!(terminal.output_lossy(), "Hello World!\n\n");
}

#[test]
fn test_cat_demo_through_std_io() {
    let source = fs::read_to_string("demos/cat.bf").expect("Failed to read demo file");

    let mut out = Vec::new();
    {
        let mut io = StdIo::new(&b"line one\nline two"[..], &mut out);
        Engine::new()
            .run(&source, false, &mut io)
            .expect("Execution failed");
        io.finish().expect("Flush failed");
    }
    assert_eq!(out, b"line one\nline two\n");
}

#[test]
fn test_pointer_wraps_left_from_zero() {
    let (engine, _) = run("<+", b"");
    assert_eq!(engine.tape().pointer(), 29_999);
    assert_eq!(engine.tape().get(29_999), 1);
}

#[test]
fn test_pointer_wraps_right_from_end() {
    let (engine, _) = run("<>+", b"");
    assert_eq!(engine.tape().pointer(), 0);
    assert_eq!(engine.tape().get(0), 1);
}

#[test]
fn test_pointer_moves_by_exactly_one() {
    let (engine, _) = run(">>>><", b"");
    assert_eq!(engine.tape().pointer(), 3);
}

#[test]
fn test_cell_wraps_modulo_256() {
    let (engine, terminal) = run("-.+.", b"");
    assert_eq!(terminal.output(), &[255, 0, b'\n']);
    assert_eq!(engine.tape().current(), 0);

    let source = "+".repeat(256);
    let (engine, _) = run(&source, b"");
    assert_eq!(engine.tape().current(), 0);
}

#[test]
fn test_zero_condition_loop_body_never_runs() {
    // The body would print and leave marks on the tape
    let (engine, terminal) = run("[.+>[+]+[-]]+", b"");
    assert_eq!(terminal.output(), b"\n");
    assert_eq!(engine.tape().pointer(), 0);
    assert_eq!(engine.tape().current(), 1);
    assert_eq!(engine.tape().non_zero_cells().count(), 1);
}

#[test]
fn test_loop_runs_until_condition_cell_is_zero() {
    // 5 passes, each adds 3 to cell 1
    let (engine, _) = run("+++++[>+++<-]", b"");
    assert_eq!(engine.tape().get(0), 0);
    assert_eq!(engine.tape().get(1), 15);
    assert_eq!(engine.tape().pointer(), 0);
}

#[test]
fn test_nested_loops_multiply() {
    let (engine, _) = run("++++[>+++[>++<-]<-]", b"");
    assert_eq!(engine.tape().get(2), 24);
}

#[test]
fn test_comments_are_inert() {
    let (_, terminal) = run("this is + a comment + with text +. ok", b"");
    assert_eq!(terminal.output(), &[3, b'\n']);
}

#[test]
fn test_syntax_error_produces_no_output() {
    let mut engine = Engine::new();
    let mut terminal = MockTerminal::new();
    let result = engine.run("+++.[", true, &mut terminal);
    assert_eq!(result, Err(SyntaxError::UnmatchedOpen { position: 4 }));
    assert!(terminal.output().is_empty());
    assert_eq!(engine.tape().current(), 0);

    let result = engine.run(".]", true, &mut terminal);
    assert_eq!(result, Err(SyntaxError::UnmatchedClose { position: 1 }));
    assert!(terminal.output().is_empty());
}

#[test]
fn test_tape_persists_without_reset() {
    let mut engine = Engine::new();
    let mut terminal = MockTerminal::new();
    engine.run("+++>++", false, &mut terminal).unwrap();
    engine.run("+.", false, &mut terminal).unwrap();
    assert_eq!(terminal.output(), &[b'\n', 3, b'\n']);
    assert_eq!(engine.tape().pointer(), 1);
}

#[test]
fn test_reset_clears_previous_state() {
    let mut engine = Engine::new();
    let mut terminal = MockTerminal::new();
    engine.run("+++>++", false, &mut terminal).unwrap();
    engine.run("+.", true, &mut terminal).unwrap();
    assert_eq!(terminal.output(), &[b'\n', 1, b'\n']);
    assert_eq!(engine.tape().pointer(), 0);
    assert_eq!(engine.tape().get(1), 0);
}

#[test]
fn test_debug_clear_resets_everything() {
    let (engine, _) = run("+++>+++++>>>-<<!! clear", b"");
    assert_eq!(engine.tape().pointer(), 0);
    assert!(engine.tape().cells().iter().all(|&c| c == 0));
}

#[test]
fn test_debug_print_window() {
    let (_, terminal) = run("+++++>++<!! print", b"");
    let lines = terminal.lines();
    assert_eq!(
        lines[0],
        "\t29995\t29996\t29997\t29998\t29999\t0\t1\t2\t3\t4\t5"
    );
    assert_eq!(lines[1], "[\t0\t0\t0\t0\t0\t5\t2\t0\t0\t0\t0\t]");
}

#[test]
fn test_debug_printn_window() {
    let (_, terminal) = run(">>>+!! printn4", b"");
    assert_eq!(terminal.output_lossy(), "\t1\t2\t3\t4\t5\n[\t0\t0\t1\t0\t0\t]\n\n");
}

#[test]
fn test_debug_printn_without_number_is_ignored() {
    let (_, terminal) = run("+!! printn !! dump !!print", b"");
    assert_eq!(terminal.output(), b"\n");
}

#[test]
fn test_debug_instruction_inside_skipped_loop_is_ignored() {
    let (_, terminal) = run("[!! print]", b"");
    assert_eq!(terminal.output(), b"\n");
}

#[test]
fn test_tape_tour_demo_ends_on_a_clear_tape() {
    let source = fs::read_to_string("demos/tape_tour.bf").expect("Failed to read demo file");
    let (engine, terminal) = run(&source, b"");

    let lines = terminal.lines();
    // Three dumps, two lines each, then the empty line left by the trailing newline
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[6], "");
    assert_eq!(lines[1], "[\t0\t0\t0\t0\t0\t5\t2\t1\t0\t0\t0\t]");
    assert_eq!(lines[3], "[\t0\t0\t10\t0\t0\t]");
    assert_eq!(lines[5], "[\t0\t0\t0\t0\t0\t0\t0\t0\t0\t0\t0\t]");
    assert_eq!(engine.tape().non_zero_cells().count(), 0);
}

#[test]
fn test_custom_eof_and_tape_length() {
    let mut engine = Engine::with_config(EngineConfig {
        tape_length: 4,
        eof: EofBehavior::Max,
    });
    let mut terminal = MockTerminal::with_input(b"x");
    engine.run(",>,>>>.", false, &mut terminal).unwrap();
    assert_eq!(engine.tape().cells(), &[b'x', 255, 0, 0]);
    assert_eq!(terminal.output(), &[b'x', b'\n']);
}
