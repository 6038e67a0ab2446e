//! Error types for the tape machine
//!
//! [`SyntaxError`] is the only error that crosses the engine's public boundary.
//! It is produced by the validator before anything executes, so a program that
//! fails validation never produces output.
//!
//! Loop-stack underflow is not represented here: the validator guarantees it
//! cannot happen, so the engine treats it as an invariant violation and panics.

use std::fmt;

/// Structural error in program source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxError {
    /// A `[` with no matching `]` (position of the innermost unmatched opener)
    UnmatchedOpen { position: usize },

    /// A `]` with no matching `[`
    UnmatchedClose { position: usize },
}

impl SyntaxError {
    /// Byte offset of the offending bracket
    pub fn position(&self) -> usize {
        match self {
            SyntaxError::UnmatchedOpen { position } => *position,
            SyntaxError::UnmatchedClose { position } => *position,
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxError::UnmatchedOpen { position } => {
                write!(
                    f,
                    "Syntax error: opening brace without matching closing brace at offset {}",
                    position
                )
            }
            SyntaxError::UnmatchedClose { position } => {
                write!(
                    f,
                    "Syntax error: closing brace without matched opening brace at offset {}",
                    position
                )
            }
        }
    }
}

impl std::error::Error for SyntaxError {}

/// Errors raised while recording execution history
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The program failed validation; nothing was recorded
    Syntax(SyntaxError),

    /// Snapshot history limit exceeded; recording stopped early
    SnapshotLimitExceeded { current: usize, limit: usize },
}

impl From<SyntaxError> for RecordError {
    fn from(err: SyntaxError) -> Self {
        RecordError::Syntax(err)
    }
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::Syntax(err) => write!(f, "{}", err),
            RecordError::SnapshotLimitExceeded { current, limit } => {
                write!(
                    f,
                    "Snapshot memory limit exceeded: {} bytes used, limit is {}",
                    current, limit
                )
            }
        }
    }
}

impl std::error::Error for RecordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RecordError::Syntax(err) => Some(err),
            RecordError::SnapshotLimitExceeded { .. } => None,
        }
    }
}
