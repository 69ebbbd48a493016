use crate::domain::ports::Announcer;
use crate::utils::error::Result;
use std::io::{self, Stdout, Write};

/// Writes each announced line, newline-terminated, to the wrapped writer.
#[derive(Debug)]
pub struct ConsoleAnnouncer<W: Write> {
    writer: W,
}

impl ConsoleAnnouncer<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleAnnouncer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Announcer for ConsoleAnnouncer<W> {
    fn announce(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()?;
        Ok(())
    }
}
