//! The command loop: read lines, run commands, report failures inline.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use datebook_core::EventStore;
use tracing::{debug, info, warn};

use crate::command::Command;
use crate::commands;
use crate::render::{InvalidEncoding, Render};

/// Counters collected over one run of the command loop.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    /// Lines read, blank ones included.
    pub lines: usize,
    pub executed: usize,
    pub failed: usize,
}

/// Owns the event store for the lifetime of the process.
#[derive(Debug, Default)]
pub struct Session {
    store: EventStore,
    stats: SessionStats,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process every line of `input` until it is exhausted.
    ///
    /// A command that fails to parse, or a line that is not valid UTF-8, is
    /// reported as one line on `out` and the loop moves on; only I/O failures
    /// end the run early.
    pub fn run(&mut self, mut input: impl BufRead, out: &mut impl Write) -> Result<SessionStats> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let read = input
                .read_until(b'\n', &mut buf)
                .context("Failed to read command input")?;
            if read == 0 {
                break;
            }
            match std::str::from_utf8(&buf) {
                Ok(line) => self.handle_line(line, out)?,
                Err(err) => self.reject_line(&err, out)?,
            }
        }
        out.flush().context("Failed to flush output")?;

        info!(
            lines = self.stats.lines,
            executed = self.stats.executed,
            failed = self.stats.failed,
            dates = self.store.date_count(),
            events = self.store.len(),
            "input exhausted"
        );
        Ok(self.stats)
    }

    /// Process a single line of input.
    pub fn handle_line(&mut self, line: &str, out: &mut impl Write) -> Result<()> {
        self.stats.lines += 1;

        let Some(parsed) = Command::parse(line) else {
            return Ok(());
        };

        match parsed {
            Ok(command) => {
                debug!(command = command.name(), "executing");
                commands::execute(command, &mut self.store, out)
                    .context("Failed to write command output")?;
                self.stats.executed += 1;
            }
            Err(err) => {
                warn!(error = %err, line = line.trim_end(), "command failed");
                writeln!(out, "{}", err.render()).context("Failed to write command output")?;
                self.stats.failed += 1;
            }
        }
        Ok(())
    }

    /// Report a line that could not be decoded; nothing is executed for it.
    fn reject_line(&mut self, err: &std::str::Utf8Error, out: &mut impl Write) -> Result<()> {
        self.stats.lines += 1;
        self.stats.failed += 1;

        let rejected = InvalidEncoding {
            line: self.stats.lines,
        };
        warn!(line = rejected.line, error = %err, "input line is not valid UTF-8");
        writeln!(out, "{}", rejected.render()).context("Failed to write command output")?;
        Ok(())
    }
}
