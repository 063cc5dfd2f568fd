use std::io::Write;

use anyhow::Result;
use datebook_core::{Date, EventStore};

/// `Find <date>`: one event name per line, in store order.
pub fn run(store: &EventStore, date: &Date, out: &mut impl Write) -> Result<()> {
    for event in store.find(date) {
        writeln!(out, "{event}")?;
    }
    Ok(())
}
