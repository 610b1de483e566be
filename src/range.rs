use std::{cmp::Ordering, str::FromStr};

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::{calendar, consts::RANGE_SEPARATOR, prelude::*};

/// An ordered pair of instants with `begins_at <= ends_at`.
///
/// The constructor is the only way to build a range and it normalizes
/// order by swapping reversed endpoints, so an invalid range cannot exist.
/// Both endpoints are inclusive except where [`DateRange::between`] applies
/// its half-open test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{}/{}", "begins_at.to_rfc3339()", "ends_at.to_rfc3339()")]
#[serde(try_from = "RangeRecord", into = "RangeRecord")]
pub struct DateRange {
    begins_at: DateTime<Utc>,
    ends_at:   DateTime<Utc>,
}

/// Structured serialization of a [`DateRange`]: both endpoints as epoch
/// milliseconds. Round-trips to millisecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeRecord {
    pub begins_at: i64,
    pub ends_at:   i64,
}

/// Error type for range conversions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Epoch-millisecond value outside the representable instant range.
    #[error("Timestamp out of range: {0} ms since epoch")]
    TimestampOutOfRange(i64),

    /// Error parsing an RFC 3339 instant.
    #[error(transparent)]
    ParseInstant(#[from] chrono::ParseError),

    /// Invalid range string format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl DateRange {
    /// Creates a new range, swapping the endpoints if they arrive reversed.
    pub fn new(a: DateTime<Utc>, b: DateTime<Utc>) -> Self {
        if a <= b {
            Self { begins_at: a, ends_at: b }
        } else {
            Self { begins_at: b, ends_at: a }
        }
    }

    /// Returns the first instant of the range
    pub const fn begins_at(&self) -> DateTime<Utc> {
        self.begins_at
    }

    /// Returns the last instant of the range
    pub const fn ends_at(&self) -> DateTime<Utc> {
        self.ends_at
    }

    /// Returns both endpoints as a tuple
    pub const fn endpoints(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        (self.begins_at, self.ends_at)
    }

    /// Half-open membership test: `begins_at <= instant < ends_at`.
    pub fn between(&self, instant: DateTime<Utc>) -> bool {
        self.begins_at <= instant && instant < self.ends_at
    }

    /// Count of zone-local calendar days the range touches, inclusive of
    /// both endpoints. A range within a single local day counts as 1.
    pub fn days(&self, zone: Tz) -> i64 {
        calendar::days_between(zone, self.begins_at, self.ends_at) + 1
    }

    /// Checks if this range shares any instant with another range.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.begins_at <= other.ends_at && other.begins_at <= self.ends_at
    }

    /// Converts to the structured epoch-millisecond record.
    pub fn to_record(&self) -> RangeRecord {
        RangeRecord {
            begins_at: self.begins_at.timestamp_millis(),
            ends_at:   self.ends_at.timestamp_millis(),
        }
    }

    /// Reconstructs a range from its structured record.
    ///
    /// # Errors
    /// Returns `RangeError::TimestampOutOfRange` if either field does not
    /// name a representable instant.
    pub fn from_record(record: RangeRecord) -> Result<Self, RangeError> {
        let begins_at = Utc
            .timestamp_millis_opt(record.begins_at)
            .single()
            .ok_or(RangeError::TimestampOutOfRange(record.begins_at))?;
        let ends_at = Utc
            .timestamp_millis_opt(record.ends_at)
            .single()
            .ok_or(RangeError::TimestampOutOfRange(record.ends_at))?;
        Ok(Self::new(begins_at, ends_at))
    }
}

impl From<DateRange> for RangeRecord {
    fn from(range: DateRange) -> Self {
        range.to_record()
    }
}

impl TryFrom<RangeRecord> for DateRange {
    type Error = RangeError;

    fn try_from(record: RangeRecord) -> Result<Self, Self::Error> {
        Self::from_record(record)
    }
}

impl FromStr for DateRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        // Two RFC 3339 instants separated by RANGE_SEPARATOR. RFC 3339
        // text never contains the separator itself.
        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match separator_count {
            0 => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                let pos = trimmed.find(RANGE_SEPARATOR).ok_or_else(|| {
                    RangeError::InvalidFormat(format!(
                        "Separator '{RANGE_SEPARATOR}' not found despite count == 1"
                    ))
                })?;
                let begins = DateTime::parse_from_rfc3339(trimmed[..pos].trim())?;
                let ends = DateTime::parse_from_rfc3339(trimmed[pos + 1..].trim())?;

                Ok(Self::new(begins.with_timezone(&Utc), ends.with_timezone(&Utc)))
            },
            _ => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl PartialOrd for DateRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateRange {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare begin instants first, then end instants
        match self.begins_at.cmp(&other.begins_at) {
            Ordering::Equal => self.ends_at.cmp(&other.ends_at),
            ord => ord,
        }
    }
}
