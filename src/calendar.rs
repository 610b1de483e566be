//! Zone-aware calendar primitives.
//!
//! Every function here resolves instants through the zone's wall-clock
//! calendar. Day counting goes through local dates, never raw millisecond
//! division, so results stay correct across DST transitions.

use chrono::{
    DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc,
    Weekday,
};
use chrono_tz::Tz;

use crate::consts::WEEKEND;

/// Resolves a zone-local wall-clock time to an instant.
///
/// A DST fold maps to the earlier of the two instants. A DST gap steps
/// forward one hour at a time until the wall-clock time exists.
fn resolve_local(zone: Tz, naive: NaiveDateTime) -> DateTime<Utc> {
    let mut candidate = naive;
    for _ in 0..4 {
        match zone.from_local_datetime(&candidate) {
            LocalResult::Single(instant) | LocalResult::Ambiguous(instant, _) => {
                return instant.with_timezone(&Utc);
            }
            LocalResult::None => candidate += Duration::hours(1),
        }
    }
    // No real zone has a gap this wide; fall back to reading the wall
    // clock as UTC.
    Utc.from_utc_datetime(&naive)
}

/// Returns the zone-local calendar date of an instant.
pub fn local_date(zone: Tz, instant: DateTime<Utc>) -> NaiveDate {
    instant.with_timezone(&zone).date_naive()
}

/// Returns the zone-local day of the week of an instant.
pub fn weekday(zone: Tz, instant: DateTime<Utc>) -> Weekday {
    local_date(zone, instant).weekday()
}

/// Whether an instant falls on a zone-local Saturday or Sunday.
pub fn is_weekend(zone: Tz, instant: DateTime<Utc>) -> bool {
    WEEKEND.contains(&weekday(zone, instant))
}

/// First instant of the instant's zone-local calendar day.
pub fn start_of_day(zone: Tz, instant: DateTime<Utc>) -> DateTime<Utc> {
    resolve_local(zone, local_date(zone, instant).and_time(NaiveTime::MIN))
}

/// Last whole millisecond of the instant's zone-local calendar day.
pub fn end_of_day(zone: Tz, instant: DateTime<Utc>) -> DateTime<Utc> {
    start_of_day(zone, add_days(zone, instant, 1)) - Duration::milliseconds(1)
}

/// First instant of the instant's zone-local calendar month.
pub fn start_of_month(zone: Tz, instant: DateTime<Utc>) -> DateTime<Utc> {
    let date = local_date(zone, instant);
    // Day 1 exists in every month
    let first = date.with_day(1).unwrap_or(date);
    resolve_local(zone, first.and_time(NaiveTime::MIN))
}

/// First instant of the month before the instant's zone-local calendar month.
pub fn start_of_previous_month(zone: Tz, instant: DateTime<Utc>) -> DateTime<Utc> {
    let date = local_date(zone, instant);
    let (year, month) = if date.month() == 1 {
        (date.year() - 1, 12)
    } else {
        (date.year(), date.month() - 1)
    };
    let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date);
    resolve_local(zone, first.and_time(NaiveTime::MIN))
}

/// Shifts the zone-local calendar date by a number of days, keeping the
/// wall-clock time of day.
pub fn add_days(zone: Tz, instant: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    let local = instant.with_timezone(&zone).naive_local();
    resolve_local(zone, local + Duration::days(days))
}

/// Shifts the zone-local year component, keeping month, day, and wall-clock
/// time. Feb 29 clamps to Feb 28 when the target year is not a leap year.
pub fn shift_year(zone: Tz, instant: DateTime<Utc>, years: i32) -> DateTime<Utc> {
    let local = instant.with_timezone(&zone).naive_local();
    let date = local.date();
    let year = date.year() + years;
    let shifted = NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, date.month(), date.day() - 1))
        .unwrap_or(date);
    resolve_local(zone, shifted.and_time(local.time()))
}

/// Signed count of zone-local calendar-day boundaries from `from` to `to`.
/// Same local date produces 0; `to` after `from` is positive.
pub fn days_between(zone: Tz, from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    (local_date(zone, to) - local_date(zone, from)).num_days()
}

/// Whether two instants fall on the same zone-local calendar date.
pub fn same_calendar_day(zone: Tz, a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    local_date(zone, a) == local_date(zone, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{at, utc};
    use chrono_tz::{America::New_York, Tz, UTC};

    #[test]
    fn test_start_and_end_of_day_utc() {
        let instant = utc(2024, 3, 15, 10, 0, 0);
        assert_eq!(start_of_day(UTC, instant), utc(2024, 3, 15, 0, 0, 0));
        assert_eq!(
            end_of_day(UTC, instant),
            utc(2024, 3, 16, 0, 0, 0) - Duration::milliseconds(1)
        );
    }

    #[test]
    fn test_start_of_day_uses_local_boundary() {
        // 02:00 UTC on Mar 15 is still Mar 14 in New York (EDT, -04:00)
        let instant = utc(2024, 3, 15, 2, 0, 0);
        assert_eq!(start_of_day(New_York, instant), utc(2024, 3, 14, 4, 0, 0));
    }

    #[test]
    fn test_start_of_month() {
        let instant = utc(2024, 3, 15, 10, 0, 0);
        assert_eq!(start_of_month(UTC, instant), utc(2024, 3, 1, 0, 0, 0));
    }

    #[test]
    fn test_start_of_previous_month_year_rollover() {
        let instant = utc(2024, 1, 20, 12, 0, 0);
        assert_eq!(
            start_of_previous_month(UTC, instant),
            utc(2023, 12, 1, 0, 0, 0)
        );
    }

    #[test]
    fn test_add_days_keeps_wall_clock_across_dst() {
        // US DST starts 2024-03-10; noon stays noon in local time
        let before = at(New_York, 2024, 3, 9, 12, 0, 0);
        let after = add_days(New_York, before, 2);
        assert_eq!(after, at(New_York, 2024, 3, 11, 12, 0, 0));
        // The raw gap is 47 hours, not 48
        assert_eq!((after - before).num_hours(), 47);
    }

    #[test]
    fn test_days_between_across_dst() {
        let a = at(New_York, 2024, 3, 9, 12, 0, 0);
        let b = at(New_York, 2024, 3, 11, 12, 0, 0);
        assert_eq!(days_between(New_York, a, b), 2);
        assert_eq!(days_between(New_York, b, a), -2);
    }

    #[test]
    fn test_days_between_ignores_time_of_day() {
        let late = utc(2024, 3, 14, 23, 30, 0);
        let early = utc(2024, 3, 15, 0, 30, 0);
        assert_eq!(days_between(UTC, late, early), 1);
        assert_eq!(days_between(UTC, early, early), 0);
    }

    #[test]
    fn test_shift_year_plain() {
        let instant = utc(2024, 3, 18, 9, 30, 0);
        assert_eq!(shift_year(UTC, instant, 1), utc(2025, 3, 18, 9, 30, 0));
    }

    #[test]
    fn test_shift_year_clamps_leap_day() {
        // 2025 has no Feb 29; the shifted date clamps to Feb 28
        let leap = utc(2024, 2, 29, 8, 0, 0);
        assert_eq!(shift_year(UTC, leap, 1), utc(2025, 2, 28, 8, 0, 0));
        // Shifting to another leap year keeps the day
        assert_eq!(shift_year(UTC, leap, 4), utc(2028, 2, 29, 8, 0, 0));
    }

    #[test]
    fn test_weekday_is_zone_local() {
        // 2024-03-16 01:00 UTC is still Friday Mar 15 in New York
        let instant = utc(2024, 3, 16, 1, 0, 0);
        assert_eq!(weekday(UTC, instant), Weekday::Sat);
        assert_eq!(weekday(New_York, instant), Weekday::Fri);
        assert!(is_weekend(UTC, instant));
        assert!(!is_weekend(New_York, instant));
    }

    #[test]
    fn test_same_calendar_day() {
        let a = utc(2024, 3, 15, 0, 0, 0);
        let b = utc(2024, 3, 15, 23, 59, 59);
        assert!(same_calendar_day(UTC, a, b));
        assert!(!same_calendar_day(UTC, a, utc(2024, 3, 16, 0, 0, 0)));
    }

    #[test]
    fn test_resolve_local_skips_dst_gap() {
        // Sao Paulo's 2018 spring-forward jumped local midnight to 01:00
        // on Nov 4, so start-of-day lands on the first valid wall hour.
        let zone: Tz = "America/Sao_Paulo".parse().expect("known zone");
        let instant = utc(2018, 11, 4, 12, 0, 0);
        let start = start_of_day(zone, instant);
        assert_eq!(start.with_timezone(&zone).time().to_string(), "01:00:00");
        assert_eq!(local_date(zone, start).to_string(), "2018-11-04");
    }
}
