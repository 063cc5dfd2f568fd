//! Text rendering for command output.
//!
//! Every result the command processor prints is one line; this module owns
//! the exact wording so handlers only decide *what* to report.

use datebook_core::{Date, DatebookError};

/// Render a value as one line of output (without the trailing newline).
pub trait Render {
    fn render(&self) -> String;
}

/// One `(date, event)` pair as listed by `Print`.
pub struct Entry<'a> {
    pub date: &'a Date,
    pub event: &'a str,
}

impl Render for Entry<'_> {
    fn render(&self) -> String {
        format!("{} {}", self.date, self.event)
    }
}

/// Result of `Del <date>`.
pub struct DeletedEvents(pub usize);

impl Render for DeletedEvents {
    fn render(&self) -> String {
        format!("Deleted {} events.", self.0)
    }
}

/// Result of `Del <date> <event>`.
pub struct DeletedEvent {
    pub found: bool,
}

impl Render for DeletedEvent {
    fn render(&self) -> String {
        if self.found {
            "Deleted successfully".to_string()
        } else {
            "Event not found".to_string()
        }
    }
}

/// An input line that is not valid UTF-8, by 1-based line number.
pub struct InvalidEncoding {
    pub line: usize,
}

impl Render for InvalidEncoding {
    fn render(&self) -> String {
        format!("Invalid UTF-8 on line {}", self.line)
    }
}

impl Render for DatebookError {
    fn render(&self) -> String {
        self.to_string()
    }
}
