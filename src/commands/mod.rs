pub mod add;
pub mod del;
pub mod find;
pub mod print;

use std::io::Write;

use anyhow::Result;
use datebook_core::EventStore;

use crate::command::Command;

/// Run a parsed command against the store, writing any output lines to `out`.
///
/// Only write failures are returned; every command outcome, including
/// "not found", is regular output.
pub fn execute(command: Command, store: &mut EventStore, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Add { date, event } => {
            add::run(store, date, event);
            Ok(())
        }
        Command::DeleteEvent { date, event } => del::run_event(store, &date, &event, out),
        Command::DeleteDate { date } => del::run_date(store, &date, out),
        Command::Find { date } => find::run(store, &date, out),
        Command::Print => print::run(store, out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_all(store: &mut EventStore, lines: &[&str]) -> String {
        let mut out = Vec::new();
        for line in lines {
            let command = Command::parse(line).unwrap().unwrap();
            execute(command, store, &mut out).unwrap();
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn add_is_silent() {
        let mut store = EventStore::new();
        assert_eq!(run_all(&mut store, &["Add 2017-01-01 a"]), "");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn find_lists_events_in_order() {
        let mut store = EventStore::new();
        let out = run_all(
            &mut store,
            &["Add 2017-01-01 b", "Add 2017-01-01 a", "Find 2017-01-01", "Find 2017-01-02"],
        );
        assert_eq!(out, "a\nb\n");
    }

    #[test]
    fn del_reports_outcomes() {
        let mut store = EventStore::new();
        let out = run_all(
            &mut store,
            &[
                "Add 2017-01-01 a",
                "Add 2017-01-01 b",
                "Del 2017-01-01 c",
                "Del 2017-01-01 a",
                "Del 2017-01-01",
                "Del 2017-01-01",
            ],
        );
        assert_eq!(
            out,
            "Event not found\nDeleted successfully\nDeleted 1 events.\nDeleted 0 events.\n"
        );
    }

    #[test]
    fn print_formats_entries() {
        let mut store = EventStore::new();
        let out = run_all(&mut store, &["Add 1-2-3 x", "Add 2017-11-18 train", "Print"]);
        assert_eq!(out, "0001-02-03 x\n2017-11-18 train\n");
    }
}
