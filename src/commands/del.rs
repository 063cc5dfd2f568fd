use std::io::Write;

use anyhow::Result;
use datebook_core::{Date, EventStore};

use crate::render::{DeletedEvent, DeletedEvents, Render};

/// `Del <date>`: drop every event on the date and report how many went.
pub fn run_date(store: &mut EventStore, date: &Date, out: &mut impl Write) -> Result<()> {
    let removed = store.delete_date(date);
    writeln!(out, "{}", DeletedEvents(removed).render())?;
    Ok(())
}

/// `Del <date> <event>`: drop a single event.
pub fn run_event(
    store: &mut EventStore,
    date: &Date,
    event: &str,
    out: &mut impl Write,
) -> Result<()> {
    let found = store.delete_event(date, event);
    writeln!(out, "{}", DeletedEvent { found }.render())?;
    Ok(())
}
