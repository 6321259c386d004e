//! Canonical date-range boundaries for report filtering.
//!
//! All boundary math is calendar-relative to the host's local wall clock; no
//! UTC normalization is performed anywhere. Ranges are inclusive on both
//! ends: day starts are 00:00:00.000 and day ends are 23:59:59.999, so an
//! entry starting at any instant of the last day still falls inside the
//! range.

use crate::libs::messages::Message;
use crate::msg_bail_anyhow;
use anyhow::Result;
use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;

/// Named shorthand for a report date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RangeToken {
    /// The reference calendar day.
    Today,
    /// Most recent Sunday through the following Saturday.
    Week,
    /// First through last day of the reference month.
    Month,
    /// January 1 through December 31 of the reference year.
    Year,
    /// Caller-supplied calendar days, normalized to full-day bounds.
    Custom,
}

impl fmt::Display for RangeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RangeToken::Today => "today",
            RangeToken::Week => "week",
            RangeToken::Month => "month",
            RangeToken::Year => "year",
            RangeToken::Custom => "custom",
        };
        write!(f, "{}", name)
    }
}

/// Start-of-day instant for a calendar day.
pub fn day_start(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// End-of-day instant (23:59:59.999) for a calendar day.
pub fn day_end(date: NaiveDate) -> NaiveDateTime {
    let end = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
    date.and_time(end)
}

pub fn day_bounds(date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    (day_start(date), day_end(date))
}

/// Week runs Sunday through Saturday; day-of-week index 0 is Sunday,
/// independent of locale.
pub fn week_bounds(date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let sunday = date - Duration::days(date.weekday().num_days_from_sunday() as i64);
    let saturday = sunday + Duration::days(6);
    (day_start(sunday), day_end(saturday))
}

/// The last day of the month is found by stepping to the next month and
/// backing off one day.
pub fn month_bounds(date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let first = date.with_day(1).unwrap_or(date);
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|d| d.pred_opt())
        .unwrap_or(date);
    (day_start(first), day_end(last))
}

pub fn year_bounds(date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let jan1 = NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date);
    let dec31 = NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap_or(date);
    (day_start(jan1), day_end(dec31))
}

/// Normalizes caller-supplied bounds to full calendar days.
pub fn custom_bounds(from: NaiveDate, to: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    (day_start(from), day_end(to))
}

/// Resolves a range token against a reference day into an inclusive
/// `(start, end)` instant pair. `Custom` requires explicit bounds.
pub fn resolve(token: RangeToken, reference: NaiveDate, custom: Option<(NaiveDate, NaiveDate)>) -> Result<(NaiveDateTime, NaiveDateTime)> {
    match token {
        RangeToken::Today => Ok(day_bounds(reference)),
        RangeToken::Week => Ok(week_bounds(reference)),
        RangeToken::Month => Ok(month_bounds(reference)),
        RangeToken::Year => Ok(year_bounds(reference)),
        RangeToken::Custom => match custom {
            Some((from, to)) => Ok(custom_bounds(from, to)),
            None => msg_bail_anyhow!(Message::CustomRangeRequiresBounds),
        },
    }
}
