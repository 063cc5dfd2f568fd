use std::io::Write;

use anyhow::Result;
use datebook_core::EventStore;

use crate::render::{Entry, Render};

/// `Print`: every `(date, event)` pair in the store.
pub fn run(store: &EventStore, out: &mut impl Write) -> Result<()> {
    for (date, event) in store.print() {
        writeln!(out, "{}", Entry { date, event }.render())?;
    }
    Ok(())
}
