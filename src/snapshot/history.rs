//! Recorded execution history
//!
//! [`History::record`] runs a program to completion (or until the snapshot
//! budget runs out) on a fresh engine, taking a [`Snapshot`] before the first
//! step and after every step. The debugger then moves a cursor through the
//! recording without re-executing anything.

use super::{MockTerminal, Snapshot, SnapshotManager};
use crate::interpreter::engine::{Engine, EngineConfig, Step};
use crate::interpreter::errors::{RecordError, SyntaxError};
use crate::interpreter::validator::bracket_pairs;
use rustc_hash::FxHashMap;

/// A recorded run plus a cursor into it
#[derive(Debug)]
pub struct History {
    source: String,
    snapshots: SnapshotManager,
    /// Full output of the recorded run; snapshots index prefixes of it
    output: Vec<u8>,
    tape_length: usize,
    brackets: FxHashMap<usize, usize>,
    position: usize,
    truncation: Option<RecordError>,
}

impl History {
    /// Record `source` with `input` as its input bytes.
    ///
    /// Fails only if the program does not validate. Running out of snapshot
    /// budget stops the recording early; the partial history is returned and
    /// [`History::truncation`] reports why.
    pub fn record(
        source: &str,
        input: &[u8],
        config: EngineConfig,
        snapshot_limit: usize,
    ) -> Result<History, SyntaxError> {
        let brackets = bracket_pairs(source)?;
        let mut engine = Engine::with_config(config);
        let tape_length = engine.tape().len();
        let mut terminal = MockTerminal::with_input(input);
        let mut snapshots = SnapshotManager::new(snapshot_limit);
        let mut truncation = None;

        let mut execution = engine.start(source, true)?;
        let mut cells: FxHashMap<usize, u8> = FxHashMap::default();

        let initial = Snapshot {
            executed: None,
            instruction_pointer: 0,
            pointer: 0,
            cells: cells.clone(),
            loop_depth: 0,
            output_len: 0,
            halted: false,
        };

        if let Err(err) = snapshots.push(initial) {
            truncation = Some(err);
        }

        while truncation.is_none() {
            let executed = execution.instruction_pointer();
            let instruction = execution.current_instruction();
            let outcome = execution.step(&mut terminal);

            let tape = execution.tape();
            if instruction == Some(b'!') {
                // `!! clear` may have touched every cell
                cells = tape.non_zero_cells().collect();
            } else {
                let pointer = tape.pointer();
                match tape.current() {
                    0 => cells.remove(&pointer),
                    value => cells.insert(pointer, value),
                };
            }

            let snapshot = Snapshot {
                executed: instruction.map(|_| executed),
                instruction_pointer: execution.instruction_pointer(),
                pointer: tape.pointer(),
                cells: cells.clone(),
                loop_depth: execution.loop_depth(),
                output_len: terminal.output().len(),
                halted: outcome == Step::Halted,
            };

            if let Err(err) = snapshots.push(snapshot) {
                truncation = Some(err);
            }

            if outcome == Step::Halted {
                break;
            }
        }

        Ok(History {
            source: source.to_string(),
            snapshots,
            output: terminal.into_output(),
            tape_length,
            brackets,
            position: 0,
            truncation,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Number of recorded snapshots
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Cursor position (0 is the state before the first instruction)
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn tape_length(&self) -> usize {
        self.tape_length
    }

    /// Snapshot at the cursor
    pub fn current(&self) -> Option<&Snapshot> {
        self.snapshots.get(self.position)
    }

    /// Why recording stopped early, if it did
    pub fn truncation(&self) -> Option<&RecordError> {
        self.truncation.as_ref()
    }

    /// Output written up to the cursor
    pub fn output(&self) -> &[u8] {
        let len = self.current().map_or(0, |s| s.output_len);
        &self.output[..len]
    }

    /// Offset of the bracket matching the one at `offset`
    pub fn matching_bracket(&self, offset: usize) -> Option<usize> {
        self.brackets.get(&offset).copied()
    }

    /// `(index, value)` for `radius` cells either side of the pointer at the cursor
    pub fn tape_window(&self, radius: usize) -> Vec<(usize, u8)> {
        let Some(snapshot) = self.current() else {
            return Vec::new();
        };
        let len = self.tape_length;
        let width = radius.saturating_mul(2).saturating_add(1).min(len);
        let start = (snapshot.pointer + len - radius % len) % len;
        (0..width)
            .map(|step| {
                let index = (start + step) % len;
                (index, snapshot.cell(index))
            })
            .collect()
    }

    /// Advance the cursor; `false` at the last snapshot
    pub fn step_forward(&mut self) -> bool {
        if self.position + 1 < self.snapshots.len() {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Move the cursor back; `false` at the first snapshot
    pub fn step_backward(&mut self) -> bool {
        if self.position > 0 {
            self.position -= 1;
            true
        } else {
            false
        }
    }

    pub fn rewind_to_start(&mut self) {
        self.position = 0;
    }

    pub fn jump_to_end(&mut self) {
        self.position = self.snapshots.len().saturating_sub(1);
    }

    pub fn is_at_start(&self) -> bool {
        self.position == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.position + 1 >= self.snapshots.len()
    }
}
