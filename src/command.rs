//! Parsing of a single input line into a `Command`.

use datebook_core::{Date, DatebookError, DatebookResult, parse_date};

/// A fully parsed request against the event store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { date: Date, event: String },
    DeleteEvent { date: Date, event: String },
    DeleteDate { date: Date },
    Find { date: Date },
    Print,
}

impl Command {
    /// Parse one line of input.
    ///
    /// Returns `None` for a blank line. Tokens are delimited by ASCII
    /// whitespace with no quoting; tokens past the ones a command uses are
    /// ignored. A missing date is parsed as the empty string and so reports a
    /// date format error; a missing `Add` event is the empty event name.
    pub fn parse(line: &str) -> Option<DatebookResult<Self>> {
        let mut tokens = line.split_ascii_whitespace();
        let name = tokens.next()?;

        let command = match name {
            "Add" => next_date(&mut tokens).map(|date| Self::Add {
                date,
                event: tokens.next().unwrap_or_default().to_string(),
            }),
            "Del" => next_date(&mut tokens).map(|date| match tokens.next() {
                Some(event) => Self::DeleteEvent {
                    date,
                    event: event.to_string(),
                },
                None => Self::DeleteDate { date },
            }),
            "Find" => next_date(&mut tokens).map(|date| Self::Find { date }),
            "Print" => Ok(Self::Print),
            other => Err(DatebookError::UnknownCommand(other.to_string())),
        };

        Some(command)
    }

    /// The command keyword as typed by the user.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add { .. } => "Add",
            Self::DeleteEvent { .. } | Self::DeleteDate { .. } => "Del",
            Self::Find { .. } => "Find",
            Self::Print => "Print",
        }
    }
}

fn next_date<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> DatebookResult<Date> {
    parse_date(tokens.next().unwrap_or_default())
}
