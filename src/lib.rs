//! # Introduction
//!
//! bfvm executes programs for the eight-instruction tape language
//! (`<>+-.,[]`) plus a few `!!` debug instructions, and can record a
//! snapshot of the machine after every step for replay in a terminal UI
//! built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Execution pipeline
//!
//! ```text
//! Source → Validator → Engine → TapeIo
//!                        └────→ Snapshots → History → TUI
//! ```
//!
//! 1. [`interpreter`]: validates brackets and runs the program on an
//!    [`interpreter::engine::Engine`], performing I/O through
//!    [`interpreter::io::TapeIo`].
//! 2. [`memory`]: the circular [`memory::tape::Tape`].
//! 3. [`snapshot`]: [`snapshot::MockTerminal`] for captured I/O, per-step
//!    [`snapshot::Snapshot`]s under a memory limit, and the replayable
//!    [`snapshot::history::History`].
//! 4. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Quick start
//!
//! ```
//! use bfvm::interpreter::engine::Engine;
//! use bfvm::snapshot::MockTerminal;
//!
//! let mut engine = Engine::new();
//! let mut terminal = MockTerminal::new();
//! engine.run("++++++++[>++++++++<-]>+.", true, &mut terminal).unwrap();
//! assert_eq!(terminal.output(), b"A\n");
//! ```

pub mod interpreter;
pub mod memory;
pub mod snapshot;
pub mod ui;
