use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::{calendar, consts::ANCHOR_WINDOW_YEARS, range::DateRange};

/// Decides whether a calendar day may be selected.
///
/// Zone-local weekends are never eligible. While a selection is in
/// progress (`anchor` holds the first-picked instant), the day must also
/// fall inside the half-open window `[anchor, anchor + 1 calendar year)`.
/// The year shift keeps month and day; a Feb 29 anchor clamps the window
/// end to Feb 28 when the target year is not a leap year.
///
/// Total: never fails, always returns a boolean.
pub fn eligible(zone: Tz, day: DateTime<Utc>, anchor: Option<DateTime<Utc>>) -> bool {
    if calendar::is_weekend(zone, day) {
        return false;
    }
    anchor.is_none_or(|anchor| {
        let window = DateRange::new(anchor, calendar::shift_year(zone, anchor, ANCHOR_WINDOW_YEARS));
        window.between(day)
    })
}
