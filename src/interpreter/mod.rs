//! Tape machine execution engine
//!
//! This module provides the core execution logic:
//! - [`validator`]: Bracket matching, run before anything executes
//! - [`engine`]: The fetch/dispatch loop, loop entry/exit and single stepping
//! - [`debug`]: The `!! clear` / `!! print` / `!! printn` utility instructions
//! - [`io`]: The byte-level I/O collaborator trait and a stdin/stdout adapter
//! - [`errors`]: Syntax and recording error types
//!
//! # Execution Model
//!
//! The engine interprets source text directly, one byte per step. A `[` whose
//! cell is zero scans forward to its partner; a `]` whose cell is non-zero
//! jumps back onto its `[`, which re-tests the condition. No jump table is
//! built.

pub mod constants;
pub mod debug;
pub mod engine;
pub mod errors;
pub mod io;
pub mod validator;
