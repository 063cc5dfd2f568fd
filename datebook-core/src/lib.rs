//! Core types for datebook.
//!
//! This crate provides everything that does not touch I/O:
//! - `Date` and `parse_date` for strict `YEAR-MONTH-DAY` parsing
//! - `EventStore`, the date-ordered mapping from dates to event names
//! - `DatebookError`, shared by the core and the command processor

pub mod date;
pub mod error;
pub mod store;

pub use date::{Date, parse_date};
pub use error::{DatebookError, DatebookResult};
pub use store::EventStore;
