//! Shared constructors for unit tests.

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Builds an instant from UTC wall-clock fields.
pub fn utc(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
        .single()
        .expect("valid test timestamp")
}

/// Builds an instant from zone-local wall-clock fields.
pub fn at(zone: Tz, year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
    zone.with_ymd_and_hms(year, month, day, hour, min, sec)
        .single()
        .expect("unambiguous local test timestamp")
        .with_timezone(&Utc)
}
