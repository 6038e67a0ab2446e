//! Debug instructions (`!! name` / `!! nameN`)
//!
//! Non-standard utilities recognised wherever a `!` is dispatched:
//!
//! - `!! clear`: zero the tape and reset the pointer
//! - `!! print`: dump the 11 cells centred on the pointer
//! - `!! printnN`: dump `N/2` cells on each side of the pointer
//!
//! The grammar is `"!! " [a-z]+ [0-9]*`, anchored at the `!`. Unknown names
//! and a `printn` without a usable number are ignored.

use crate::interpreter::constants::PRINT_RADIUS;
use crate::memory::tape::Tape;
use std::fmt::Write;

const PREFIX: &[u8] = b"!! ";

/// A recognised debug instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugCommand {
    Clear,
    Print,
    /// `printn` with the total window width
    PrintN(usize),
}

impl DebugCommand {
    /// Parse a debug instruction starting at `at`.
    ///
    /// Returns `None` when the text does not match the grammar, names an
    /// unknown command, or gives `printn` a missing or overflowing number.
    pub fn parse(code: &[u8], at: usize) -> Option<DebugCommand> {
        let rest = code.get(at..)?;
        let rest = rest.strip_prefix(PREFIX)?;

        let name_len = rest.iter().take_while(|b| b.is_ascii_lowercase()).count();
        if name_len == 0 {
            return None;
        }
        let (name, rest) = rest.split_at(name_len);

        let digits_len = rest.iter().take_while(|b| b.is_ascii_digit()).count();
        let digits = &rest[..digits_len];

        match name {
            b"clear" => Some(DebugCommand::Clear),
            b"print" => Some(DebugCommand::Print),
            b"printn" => parse_count(digits).map(DebugCommand::PrintN),
            _ => None,
        }
    }

    /// Carry out the command against `tape`, returning any text to emit
    pub fn execute(self, tape: &mut Tape) -> Option<String> {
        match self {
            DebugCommand::Clear => {
                tape.clear();
                None
            }
            DebugCommand::Print => Some(format_window(tape, PRINT_RADIUS)),
            DebugCommand::PrintN(width) => Some(format_window(tape, width / 2)),
        }
    }
}

fn parse_count(digits: &[u8]) -> Option<usize> {
    if digits.is_empty() {
        return None;
    }
    std::str::from_utf8(digits).ok()?.parse().ok()
}

/// Format the cells from `pointer - radius` to `pointer + radius` (inclusive).
///
/// Indices wrap modulo the tape length in both directions. A window wider
/// than the tape is clamped to one full lap starting at `pointer - radius`.
///
/// ```text
///     \t29998\t29999\t0\t1\t2
///     [\t0\t0\t7\t0\t0\t]
/// ```
pub fn format_window(tape: &Tape, radius: usize) -> String {
    let len = tape.len();
    let width = radius.saturating_mul(2).saturating_add(1).min(len);
    let start = tape.offset_index(-((radius % len) as isize));

    let mut indices = String::new();
    let mut cells = String::from("[\t");
    for step in 0..width {
        let index = (start + step) % len;
        // Writing to a String cannot fail
        let _ = write!(indices, "\t{}", index);
        let _ = write!(cells, "{}\t", tape.get(index));
    }
    format!("{}\n{}]\n", indices, cells)
}
