//! Formatters turning instants and ranges into short, stable English labels.
//!
//! Everything here is deterministic over `(zone, today, input)`: "today" is
//! always an explicit argument, never sampled from a clock.

use std::cmp::Ordering;

use chrono::{DateTime, Datelike, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::{
    calendar,
    consts::{LABEL_TODAY, SUFFIX_FUTURE, SUFFIX_PAST},
    range::DateRange,
};

/// Turns an instant into a short relative-time phrase: `"today"`,
/// `"1 day ago"`, `"3 days from now"`.
pub fn relative_time(zone: Tz, today: DateTime<Utc>, target: DateTime<Utc>) -> String {
    let cmp = target.cmp(&today);
    let distance = calendar::days_between(zone, target, today).unsigned_abs();

    // The distance and comparison checks are redundant by construction
    // (instant equality implies zero day distance); both stay so either
    // one short-circuits to "today".
    if distance == 0 || cmp == Ordering::Equal {
        return LABEL_TODAY.to_owned();
    }

    let noun = if distance == 1 { "day" } else { "days" };
    match cmp {
        Ordering::Greater => format!("{distance} {noun} {SUFFIX_FUTURE}"),
        Ordering::Less | Ordering::Equal => format!("{distance} {noun} {SUFFIX_PAST}"),
    }
}

/// Two-line calendar-cell label: the zone-local day of month on top, the
/// signed day offset from "today" below.
///
/// A data structure, not a rendered widget; layout belongs to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DayLabel {
    pub top:    String,
    pub bottom: String,
}

/// Builds the [`DayLabel`] for a calendar day relative to "today".
///
/// `bottom` is `"0"` on the current day, otherwise `"+{n}d"` or `"-{n}d"`.
pub fn day_label(zone: Tz, day: DateTime<Utc>, today: DateTime<Utc>) -> DayLabel {
    let top = calendar::local_date(zone, day).day().to_string();

    let cmp = day.cmp(&today);
    let distance = calendar::days_between(zone, day, today).unsigned_abs();
    let sign = if distance == 0 || cmp == Ordering::Equal {
        ""
    } else if cmp == Ordering::Greater {
        "+"
    } else {
        "-"
    };
    let bottom = if distance == 0 {
        format!("{sign}0")
    } else {
        format!("{sign}{distance}d")
    };

    DayLabel { top, bottom }
}

/// One-line range summary for the picker caption.
///
/// A range spanning exactly today's calendar day collapses to `"today"`; a
/// single other day collapses to its [`relative_time`] phrase; anything
/// longer becomes `"from {begin} to {end}"` using the same phrases.
pub fn range_label(zone: Tz, today: DateTime<Utc>, range: &DateRange) -> String {
    let (begin, end) = range.endpoints();
    let single_day = calendar::same_calendar_day(zone, begin, end);

    if single_day && calendar::same_calendar_day(zone, end, today) {
        return LABEL_TODAY.to_owned();
    }
    if single_day {
        return relative_time(zone, today, begin);
    }
    format!(
        "from {} to {}",
        relative_time(zone, today, begin),
        relative_time(zone, today, end)
    )
}
