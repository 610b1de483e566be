use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;

use crate::{calendar, prelude::*, range::DateRange};

/// The fixed quick-pick menu, in display order.
///
/// Labels and ordering are part of the contract: consumers render
/// [`Preset::ALL`] as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Preset {
    #[display(fmt = "Today")]
    Today,
    #[display(fmt = "Yesterday")]
    Yesterday,
    #[display(fmt = "Last 7 days")]
    LastSevenDays,
    #[display(fmt = "Last 30 days")]
    LastThirtyDays,
    #[display(fmt = "This month")]
    ThisMonth,
    #[display(fmt = "Last month")]
    LastMonth,
}

impl Preset {
    /// All presets in menu order.
    pub const ALL: [Self; 6] = [
        Self::Today,
        Self::Yesterday,
        Self::LastSevenDays,
        Self::LastThirtyDays,
        Self::ThisMonth,
        Self::LastMonth,
    ];

    /// Returns the fixed menu label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Yesterday => "Yesterday",
            Self::LastSevenDays => "Last 7 days",
            Self::LastThirtyDays => "Last 30 days",
            Self::ThisMonth => "This month",
            Self::LastMonth => "Last month",
        }
    }

    /// Resolves the preset against an explicit "today" instant.
    ///
    /// All boundaries are zone-local wall-clock boundaries. The trailing
    /// windows ("Last 7 days", "Last 30 days") end at the last millisecond
    /// of yesterday, excluding today itself. "This month" ends at the live
    /// instant rather than end-of-day.
    pub fn range(self, zone: Tz, today: DateTime<Utc>) -> DateRange {
        match self {
            Self::Today => whole_day(zone, today),
            Self::Yesterday => whole_day(zone, calendar::add_days(zone, today, -1)),
            Self::LastSevenDays => trailing_days(zone, today, 7),
            Self::LastThirtyDays => trailing_days(zone, today, 30),
            Self::ThisMonth => DateRange::new(calendar::start_of_month(zone, today), today),
            Self::LastMonth => DateRange::new(
                calendar::start_of_previous_month(zone, today),
                calendar::start_of_month(zone, today) - Duration::milliseconds(1),
            ),
        }
    }
}

/// Generates the fixed, ordered quick-pick catalog for a "today" instant.
pub fn predefined_ranges(zone: Tz, today: DateTime<Utc>) -> Vec<(Preset, DateRange)> {
    Preset::ALL
        .iter()
        .map(|preset| (*preset, preset.range(zone, today)))
        .collect()
}

fn whole_day(zone: Tz, instant: DateTime<Utc>) -> DateRange {
    DateRange::new(calendar::start_of_day(zone, instant), calendar::end_of_day(zone, instant))
}

fn trailing_days(zone: Tz, today: DateTime<Utc>, days: i64) -> DateRange {
    DateRange::new(
        calendar::start_of_day(zone, calendar::add_days(zone, today, -days)),
        calendar::start_of_day(zone, today) - Duration::milliseconds(1),
    )
}
