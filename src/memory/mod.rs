//! Memory model for the tape machine
//!
//! - [`tape`]: Fixed-length circular tape of byte cells plus the data pointer
//!
//! # Cell Semantics
//!
//! Cells are unsigned bytes. Arithmetic wraps modulo 256 and pointer
//! movement wraps around the tape ends; neither is ever an error.

pub mod tape;
