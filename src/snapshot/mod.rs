// Snapshot management for reverse execution

pub mod history;

use crate::interpreter::errors::RecordError;
use crate::interpreter::io::TapeIo;
use rustc_hash::FxHashMap;
use std::collections::VecDeque;

/// In-memory terminal: queued input bytes and captured output bytes
#[derive(Debug, Clone, Default)]
pub struct MockTerminal {
    input: VecDeque<u8>,
    output: Vec<u8>,
}

impl MockTerminal {
    pub fn new() -> Self {
        MockTerminal::default()
    }

    /// Terminal whose input yields `input` and then reports end of input
    pub fn with_input(input: &[u8]) -> Self {
        MockTerminal {
            input: input.iter().copied().collect(),
            output: Vec::new(),
        }
    }

    /// Queue more input bytes
    pub fn push_input(&mut self, bytes: &[u8]) {
        self.input.extend(bytes);
    }

    /// Everything written so far
    pub fn output(&self) -> &[u8] {
        &self.output
    }

    /// Output decoded as UTF-8, invalid sequences replaced
    pub fn output_lossy(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }

    /// Output split into lines
    pub fn lines(&self) -> Vec<String> {
        split_lines(&self.output)
    }

    pub fn into_output(self) -> Vec<u8> {
        self.output
    }
}

impl TapeIo for MockTerminal {
    fn read_byte(&mut self) -> Option<u8> {
        self.input.pop_front()
    }

    fn write_byte(&mut self, byte: u8) {
        self.output.push(byte);
    }
}

/// Split raw output into display lines.
///
/// A trailing newline does not produce an empty final line.
pub fn split_lines(output: &[u8]) -> Vec<String> {
    let text = String::from_utf8_lossy(output);
    let mut result: Vec<String> = text.split('\n').map(|s| s.to_string()).collect();
    if result.last().is_some_and(|s| s.is_empty()) {
        result.pop();
    }
    result
}

/// Snapshot of machine state after one step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Offset of the instruction that produced this state (`None` before the first step)
    pub executed: Option<usize>,
    /// Offset of the next instruction to dispatch
    pub instruction_pointer: usize,
    pub pointer: usize,
    /// Non-zero cells only; absent cells are zero
    pub cells: FxHashMap<usize, u8>,
    pub loop_depth: usize,
    /// Length of the output prefix written so far
    pub output_len: usize,
    pub halted: bool,
}

impl Snapshot {
    /// Value of tape cell `index` in this snapshot
    pub fn cell(&self, index: usize) -> u8 {
        self.cells.get(&index).copied().unwrap_or(0)
    }

    /// Estimate the memory usage of this snapshot in bytes
    pub fn estimated_size(&self) -> usize {
        // Hash map entries: key + value + control byte, rounded up
        let cells_size = self.cells.capacity() * 16;
        std::mem::size_of::<Snapshot>() + cells_size
    }
}

/// Manages execution history for reverse execution
#[derive(Debug)]
pub struct SnapshotManager {
    snapshots: Vec<Snapshot>,
    max_memory: usize,
    current_memory: usize,
}

impl SnapshotManager {
    pub fn new(max_memory: usize) -> Self {
        SnapshotManager {
            snapshots: Vec::new(),
            max_memory,
            current_memory: 0,
        }
    }

    /// Add a snapshot to history
    pub fn push(&mut self, snapshot: Snapshot) -> Result<(), RecordError> {
        let snapshot_size = snapshot.estimated_size();

        if self.current_memory + snapshot_size > self.max_memory {
            return Err(RecordError::SnapshotLimitExceeded {
                current: self.current_memory,
                limit: self.max_memory,
            });
        }

        self.current_memory += snapshot_size;
        self.snapshots.push(snapshot);
        Ok(())
    }

    /// Get a snapshot by index
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// Get the number of snapshots
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Get current memory usage
    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }

    /// Get max memory limit
    pub fn memory_limit(&self) -> usize {
        self.max_memory
    }
}
