use datebook_core::{Date, EventStore};

/// `Add <date> <event>`: prints nothing.
pub fn run(store: &mut EventStore, date: Date, event: String) {
    store.add_event(date, event);
}
