//! In-memory event store.
//!
//! Maps each `Date` to the set of event names recorded on it. Both levels
//! are kept sorted, so every read yields dates in ascending order and, within
//! a date, event names in ascending lexicographic order.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, trace};

use crate::date::Date;

/// Date-ordered mapping from dates to unique event names.
///
/// A date is only present while it has at least one event: deleting the
/// last event of a date removes the date as well.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: BTreeMap<Date, BTreeSet<String>>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `event` on `date`. Adding an existing pair is a no-op.
    pub fn add_event(&mut self, date: Date, event: impl Into<String>) {
        let event = event.into();
        debug!(%date, %event, "add event");
        self.events.entry(date).or_default().insert(event);
    }

    /// Remove `event` from `date`, returning whether it was present.
    pub fn delete_event(&mut self, date: &Date, event: &str) -> bool {
        let Some(events) = self.events.get_mut(date) else {
            debug!(%date, event, "delete event: date not found");
            return false;
        };

        let removed = events.remove(event);
        if events.is_empty() {
            self.events.remove(date);
        }
        debug!(%date, event, removed, "delete event");
        removed
    }

    /// Remove every event on `date`, returning how many were removed.
    pub fn delete_date(&mut self, date: &Date) -> usize {
        let removed = self.events.remove(date).map_or(0, |events| events.len());
        debug!(%date, removed, "delete date");
        removed
    }

    /// Event names on `date` in ascending order; empty if there are none.
    pub fn find(&self, date: &Date) -> Vec<&str> {
        trace!(%date, "find");
        self.events
            .get(date)
            .map(|events| events.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Every `(date, event)` pair, ordered by date and then by event name.
    pub fn print(&self) -> impl Iterator<Item = (&Date, &str)> + '_ {
        self.events
            .iter()
            .flat_map(|(date, events)| events.iter().map(move |event| (date, event.as_str())))
    }

    /// Total number of events across all dates.
    pub fn len(&self) -> usize {
        self.events.values().map(BTreeSet::len).sum()
    }

    /// Number of dates with at least one event.
    pub fn date_count(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
