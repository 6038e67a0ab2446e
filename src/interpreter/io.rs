//! Input/output collaborators
//!
//! The engine performs all I/O through [`TapeIo`]. [`StdIo`] adapts any
//! [`Read`]/[`Write`] pair (the binary uses stdin/stdout);
//! [`MockTerminal`](crate::snapshot::MockTerminal) captures output for tests
//! and for the debugger.

use std::io::{self, Read, Write};

/// Byte-level I/O used by `.`, `,` and the debug print instructions
pub trait TapeIo {
    /// Next input byte, or `None` once input is exhausted
    fn read_byte(&mut self) -> Option<u8>;

    /// Emit one byte
    fn write_byte(&mut self, byte: u8);

    /// Emit formatted text (debug dumps, trailing newline)
    fn write_str(&mut self, text: &str) {
        for &byte in text.as_bytes() {
            self.write_byte(byte);
        }
    }
}

impl<T: TapeIo + ?Sized> TapeIo for &mut T {
    fn read_byte(&mut self) -> Option<u8> {
        (**self).read_byte()
    }

    fn write_byte(&mut self, byte: u8) {
        (**self).write_byte(byte)
    }

    fn write_str(&mut self, text: &str) {
        (**self).write_str(text)
    }
}

/// [`TapeIo`] over a reader and a writer.
///
/// Write failures are not fatal to the running program: the first error is
/// kept, later writes are dropped, and [`StdIo::finish`] reports it.
pub struct StdIo<R, W> {
    reader: R,
    writer: W,
    error: Option<io::Error>,
}

impl<R: Read, W: Write> StdIo<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        StdIo {
            reader,
            writer,
            error: None,
        }
    }

    /// Flush the writer and return the first write error, if any
    pub fn finish(mut self) -> io::Result<()> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.writer.flush()
    }
}

impl StdIo<io::Stdin, io::Stdout> {
    /// Process stdin/stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin(), io::stdout())
    }
}

impl<R: Read, W: Write> TapeIo for StdIo<R, W> {
    fn read_byte(&mut self) -> Option<u8> {
        // `.` output must be visible before blocking on interactive input
        if self.error.is_none() {
            if let Err(err) = self.writer.flush() {
                self.error = Some(err);
            }
        }

        let mut buf = [0u8; 1];
        loop {
            match self.reader.read(&mut buf) {
                Ok(0) => return None,
                Ok(_) => return Some(buf[0]),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(_) => return None,
            }
        }
    }

    fn write_byte(&mut self, byte: u8) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.writer.write_all(&[byte]) {
            self.error = Some(err);
        }
    }

    fn write_str(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.writer.write_all(text.as_bytes()) {
            self.error = Some(err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_until_exhausted() {
        let mut io = StdIo::new(&b"hi"[..], Vec::new());
        assert_eq!(io.read_byte(), Some(b'h'));
        assert_eq!(io.read_byte(), Some(b'i'));
        assert_eq!(io.read_byte(), None);
        assert_eq!(io.read_byte(), None);
    }

    #[test]
    fn test_writes_pass_through() {
        let mut out = Vec::new();
        {
            let mut io = StdIo::new(io::empty(), &mut out);
            io.write_byte(b'A');
            io.write_str("BC\n");
            io.finish().unwrap();
        }
        assert_eq!(out, b"ABC\n");
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_first_write_error_is_reported_on_finish() {
        let mut io = StdIo::new(io::empty(), BrokenPipe);
        io.write_byte(b'x');
        io.write_str("more");
        let err = io.finish().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
