//! Timezone-aware calculus for date-range pickers.
//!
//! Three concerns, all pure functions over `(zone, "today", input)`:
//! which calendar days a user may pick ([`eligible`]), the fixed menu of
//! quick-pick ranges ([`predefined_ranges`]), and the short English labels
//! a picker shows for instants and ranges ([`relative_time`], [`day_label`],
//! [`range_label`]).
//!
//! Instants are `chrono::DateTime<Utc>`, zones are `chrono_tz::Tz`, and all
//! calendar arithmetic happens on the zone's wall clock, so month rollovers,
//! leap days, and DST transitions come out right. "Today" is always an
//! explicit argument; nothing here reads a clock, which keeps every result
//! deterministic and idempotent.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use chrono_tz::UTC;
//! use datepick::{predefined_ranges, range_label, Preset};
//!
//! let today = Utc
//!     .with_ymd_and_hms(2024, 3, 15, 10, 0, 0)
//!     .single()
//!     .expect("valid timestamp");
//!
//! let menu = predefined_ranges(UTC, today);
//! assert_eq!(menu[0].0, Preset::Today);
//! assert_eq!(range_label(UTC, today, &menu[0].1), "today");
//! assert_eq!(range_label(UTC, today, &menu[2].1), "from 7 days ago to 1 day ago");
//! ```

pub mod calendar;
mod consts;
mod eligibility;
mod humanize;
mod prelude;
mod presets;
mod range;

pub use consts::*;
pub use eligibility::eligible;
pub use humanize::{DayLabel, day_label, range_label, relative_time};
pub use presets::{Preset, predefined_ranges};
pub use range::{DateRange, RangeError, RangeRecord};

#[cfg(test)]
pub(crate) mod test_utils;
