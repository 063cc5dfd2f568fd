//! Calendar dates and strict `YEAR-MONTH-DAY` parsing.
//!
//! A `Date` is a plain (year, month, day) triple. Month and day are range
//! checked (1-12 and 1-31) but never cross-checked against each other, so
//! `2023-02-31` is a valid `Date`. Ordering is lexicographic over the triple.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DatebookError, DatebookResult};

/// A (year, month, day) triple, ordered by year, then month, then day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Date {
    year: i32,
    month: i32,
    day: i32,
}

impl Date {
    pub const MONTHS: std::ops::RangeInclusive<i32> = 1..=12;
    pub const DAYS: std::ops::RangeInclusive<i32> = 1..=31;

    /// Build a date, rejecting a month outside 1-12 or a day outside 1-31.
    ///
    /// The month is checked before the day, so `Date::new(2000, 0, 0)`
    /// reports the month.
    pub fn new(year: i32, month: i32, day: i32) -> DatebookResult<Self> {
        if !Self::MONTHS.contains(&month) {
            return Err(DatebookError::InvalidMonth(month));
        }
        if !Self::DAYS.contains(&day) {
            return Err(DatebookError::InvalidDay(day));
        }
        Ok(Self { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> i32 {
        self.month
    }

    pub fn day(&self) -> i32 {
        self.day
    }
}

impl fmt::Display for Date {
    /// `YYYY-MM-DD`, zero-padded. Years wider than four digits are printed in full.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for Date {
    type Err = DatebookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_date(s)
    }
}

impl TryFrom<String> for Date {
    type Error = DatebookError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        parse_date(&s)
    }
}

impl From<Date> for String {
    fn from(date: Date) -> Self {
        date.to_string()
    }
}

/// Parse `<year>-<month>-<day>`, where each field is a signed integer.
///
/// The whole input must be consumed. Any grammar violation yields
/// `DatebookError::DateFormat` carrying the full input; a well-formed date
/// with an out-of-range month or day yields `InvalidMonth` / `InvalidDay`.
pub fn parse_date(input: &str) -> DatebookResult<Date> {
    let format_error = || DatebookError::date_format(input);

    let (year, rest) = take_int(input).ok_or_else(format_error)?;
    let rest = rest.strip_prefix('-').ok_or_else(format_error)?;
    let (month, rest) = take_int(rest).ok_or_else(format_error)?;
    let rest = rest.strip_prefix('-').ok_or_else(format_error)?;
    let (day, rest) = take_int(rest).ok_or_else(format_error)?;
    if !rest.is_empty() {
        return Err(format_error());
    }

    Date::new(year, month, day)
}

/// Split a leading signed integer (`[+-]?[0-9]+`) off `s`.
///
/// Returns `None` when no digits follow the optional sign or the value
/// does not fit in an `i32`.
fn take_int(s: &str) -> Option<(i32, &str)> {
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digits = s[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }

    let (number, rest) = s.split_at(sign_len + digits);
    number.parse().ok().map(|value| (value, rest))
}
