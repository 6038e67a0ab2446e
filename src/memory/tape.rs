//! Circular byte tape
//!
//! The [`Tape`] owns both the cells and the data pointer so the wrap
//! invariant (`pointer < len`) is enforced in exactly one place.
//!
//! # Wrapping
//!
//! - Pointer movement wraps at both ends: `0 - 1 → len - 1`, `len - 1 + 1 → 0`
//! - Cell arithmetic wraps modulo 256: `255 + 1 → 0`, `0 - 1 → 255`

use crate::interpreter::constants::TAPE_LENGTH;

/// Fixed-length circular tape of unsigned byte cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    cells: Vec<u8>,
    pointer: usize,
}

impl Tape {
    /// Create a zeroed tape with `len` cells (at least one)
    pub fn new(len: usize) -> Self {
        Tape {
            cells: vec![0; len.max(1)],
            pointer: 0,
        }
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// A tape always has at least one cell
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Current data pointer, always in `[0, len)`
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    /// Value of the cell under the pointer
    pub fn current(&self) -> u8 {
        self.cells[self.pointer]
    }

    /// Overwrite the cell under the pointer
    pub fn set_current(&mut self, value: u8) {
        self.cells[self.pointer] = value;
    }

    /// Value at `index`, wrapped into range
    pub fn get(&self, index: usize) -> u8 {
        self.cells[index % self.cells.len()]
    }

    /// All cells, in index order
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// `<`
    pub fn move_left(&mut self) {
        if self.pointer == 0 {
            self.pointer = self.cells.len() - 1;
        } else {
            self.pointer -= 1;
        }
    }

    /// `>`
    pub fn move_right(&mut self) {
        if self.pointer == self.cells.len() - 1 {
            self.pointer = 0;
        } else {
            self.pointer += 1;
        }
    }

    /// `+`
    pub fn increment(&mut self) {
        let cell = &mut self.cells[self.pointer];
        *cell = cell.wrapping_add(1);
    }

    /// `-`
    pub fn decrement(&mut self) {
        let cell = &mut self.cells[self.pointer];
        *cell = cell.wrapping_sub(1);
    }

    /// Zero every cell and return the pointer to 0
    pub fn clear(&mut self) {
        self.cells.fill(0);
        self.pointer = 0;
    }

    /// Index that is `offset` cells away from the pointer, wrapping in both directions.
    ///
    /// `offset` may exceed the tape length; it is reduced modulo `len` first.
    pub fn offset_index(&self, offset: isize) -> usize {
        let len = self.cells.len() as isize;
        (self.pointer as isize + offset).rem_euclid(len) as usize
    }

    /// `(index, value)` pairs for every non-zero cell
    pub fn non_zero_cells(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value != 0)
            .map(|(index, &value)| (index, value))
    }
}

impl Default for Tape {
    fn default() -> Self {
        Self::new(TAPE_LENGTH)
    }
}
