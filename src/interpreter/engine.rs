// Execution engine for the tape machine

use crate::interpreter::constants::TAPE_LENGTH;
use crate::interpreter::debug::DebugCommand;
use crate::interpreter::errors::SyntaxError;
use crate::interpreter::io::TapeIo;
use crate::interpreter::validator::validate;
use crate::memory::tape::Tape;

/// What `,` stores once input is exhausted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EofBehavior {
    /// Store 0
    #[default]
    Zero,
    /// Leave the cell untouched
    Unchanged,
    /// Store 255
    Max,
}

/// Engine construction options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Number of tape cells (clamped to at least 1)
    pub tape_length: usize,
    pub eof: EofBehavior,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            tape_length: TAPE_LENGTH,
            eof: EofBehavior::default(),
        }
    }
}

/// A tape machine.
///
/// Owns its tape and data pointer; nothing is shared between engines, so
/// independent engines can run on separate threads. The tape persists across
/// runs unless a run asks for a reset (or the program executes `!! clear`).
#[derive(Debug, Clone)]
pub struct Engine {
    tape: Tape,
    eof: EofBehavior,
}

impl Engine {
    /// Create an engine with a zeroed 30 000-cell tape
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Engine {
            tape: Tape::new(config.tape_length),
            eof: config.eof,
        }
    }

    /// Current tape (cells and data pointer)
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Zero the tape and return the data pointer to 0
    pub fn clear_tape(&mut self) {
        self.tape.clear();
    }

    /// Validate and run `source` to completion.
    ///
    /// On a syntax error nothing executes and nothing is written. On success a
    /// single trailing newline follows the program's own output.
    pub fn run<I: TapeIo + ?Sized>(
        &mut self,
        source: &str,
        reset_tape_first: bool,
        io: &mut I,
    ) -> Result<(), SyntaxError> {
        let mut execution = self.start(source, reset_tape_first)?;
        while execution.step(io) == Step::Continue {}
        Ok(())
    }

    /// Validate `source` and return a cursor that executes it one instruction at a time
    pub fn start<'e, 's>(
        &'e mut self,
        source: &'s str,
        reset_tape_first: bool,
    ) -> Result<Execution<'e, 's>, SyntaxError> {
        validate(source)?;

        if reset_tape_first {
            self.clear_tape();
        }

        Ok(Execution {
            engine: self,
            code: source.as_bytes(),
            ip: 0,
            loop_stack: Vec::new(),
            halted: false,
        })
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of a single [`Execution::step`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Halted,
}

/// One run of a validated program.
///
/// Holds the instruction pointer and the loop-origin stack; both start empty
/// for every run.
#[derive(Debug)]
pub struct Execution<'e, 's> {
    engine: &'e mut Engine,
    code: &'s [u8],
    ip: usize,
    /// Offsets of the `[` of every loop currently entered
    loop_stack: Vec<usize>,
    halted: bool,
}

impl<'e, 's> Execution<'e, 's> {
    /// Index of the next instruction to dispatch
    pub fn instruction_pointer(&self) -> usize {
        self.ip
    }

    /// Number of loops currently entered
    pub fn loop_depth(&self) -> usize {
        self.loop_stack.len()
    }

    pub fn tape(&self) -> &Tape {
        &self.engine.tape
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// The byte at the instruction pointer, if execution has not run off the end
    pub fn current_instruction(&self) -> Option<u8> {
        self.code.get(self.ip).copied()
    }

    /// Dispatch one instruction and advance.
    ///
    /// Returns [`Step::Halted`] once the instruction pointer reaches the end of
    /// the source; the trailing newline is written on that transition.
    pub fn step<I: TapeIo + ?Sized>(&mut self, io: &mut I) -> Step {
        if self.halted {
            return Step::Halted;
        }

        if self.ip < self.code.len() {
            self.ip = self.dispatch(io);
        }

        if self.ip >= self.code.len() {
            debug_assert!(self.loop_stack.is_empty(), "loops still open at halt");
            self.halted = true;
            io.write_byte(b'\n');
            return Step::Halted;
        }
        Step::Continue
    }

    /// Execute the instruction at `ip` and return the next instruction pointer
    fn dispatch<I: TapeIo + ?Sized>(&mut self, io: &mut I) -> usize {
        let tape = &mut self.engine.tape;

        match self.code[self.ip] {
            b'<' => tape.move_left(),
            b'>' => tape.move_right(),
            b'+' => tape.increment(),
            b'-' => tape.decrement(),
            b'.' => io.write_byte(tape.current()),
            b',' => match io.read_byte() {
                Some(byte) => tape.set_current(byte),
                None => match self.engine.eof {
                    EofBehavior::Zero => tape.set_current(0),
                    EofBehavior::Unchanged => {}
                    EofBehavior::Max => tape.set_current(u8::MAX),
                },
            },
            b'[' => {
                if tape.current() == 0 {
                    return self.skip_loop() + 1;
                }
                self.loop_stack.push(self.ip);
            }
            b']' => {
                let origin = self.loop_stack.pop().unwrap_or_else(|| {
                    panic!(
                        "loop stack underflow at offset {} in a validated program",
                        self.ip
                    )
                });
                if tape.current() != 0 {
                    // Land on the matching `[` so the condition is re-tested
                    return origin;
                }
            }
            b'!' => {
                if let Some(command) = DebugCommand::parse(self.code, self.ip) {
                    if let Some(text) = command.execute(tape) {
                        io.write_str(&text);
                    }
                }
            }
            _ => {}
        }

        self.ip + 1
    }

    /// Scan forward from the `[` at `ip` to its matching `]`, returning that offset
    fn skip_loop(&self) -> usize {
        let mut depth = 1usize;
        let mut pos = self.ip;
        while depth > 0 {
            pos += 1;
            match self.code[pos] {
                b'[' => depth += 1,
                b']' => depth -= 1,
                _ => {}
            }
        }
        pos
    }
}
