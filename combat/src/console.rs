//! Terminal adapters for the combat engine.
//!
//! This module provides a simple line-oriented protocol over any
//! `BufRead`/`Write` pair:
//! - Every read prints a `> ` prompt and consumes one line
//! - Each engine message becomes one output line
//! - End of input closes the game

use combat_core::io::parse_integer;
use combat_core::{InputError, InputProvider, OutputSink};
use std::io::{self, BufRead, Write};

/// Reads player choices one line at a time.
pub struct ConsoleInput<R, W> {
    reader: R,
    prompt: W,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, prompt: W) -> Self {
        Self { reader, prompt }
    }

    /// Print a `> ` prompt and read one line without its newline.
    ///
    /// Bytes that aren't valid UTF-8 become U+FFFD, so a garbled line
    /// reads as text rather than failing the stream.
    pub fn read_line(&mut self) -> Result<String, InputError> {
        write!(self.prompt, "> ")?;
        self.prompt.flush()?;

        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Err(InputError::Closed);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl ConsoleInput<io::StdinLock<'static>, io::Stdout> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> InputProvider for ConsoleInput<R, W> {
    fn read_integer(&mut self) -> Result<i64, InputError> {
        let line = self.read_line()?;
        parse_integer(&line)
    }
}

/// Writes engine messages as lines.
pub struct ConsoleOutput<W> {
    writer: W,
}

impl<W: Write> ConsoleOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl ConsoleOutput<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> OutputSink for ConsoleOutput<W> {
    fn write_line(&mut self, line: &str) {
        // A closed stdout isn't worth aborting the battle over.
        if let Err(e) = writeln!(self.writer, "{line}") {
            tracing::warn!(error = %e, "failed to write game output");
        }
    }
}
