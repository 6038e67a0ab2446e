//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`source`]: Program text with instruction colouring, current instruction and matching bracket
//! - [`tape`]: Window of tape cells around the data pointer
//! - [`terminal`]: Output written by `.` and the debug print instructions
//! - [`status`]: Status bar with keybindings and playback state
//!
//! Each pane module exports a primary `render_*` function and, where the
//! pane needs more than a couple of inputs, a `*RenderData` struct.

pub mod source;
pub mod status;
pub mod tape;
pub mod terminal;

pub use source::{render_source_pane, SourceRenderData, SourceScrollState};
pub use status::{render_status_bar, StatusRenderData};
pub use tape::{render_tape_pane, window_radius, TapeRenderData};
pub use terminal::render_terminal_pane;
