use chrono::Weekday;

/// Label for an instant or range that falls on the current calendar day
pub const LABEL_TODAY: &str = "today";

/// Suffix for relative-time phrases pointing into the past
pub const SUFFIX_PAST: &str = "ago";

/// Suffix for relative-time phrases pointing into the future
pub const SUFFIX_FUTURE: &str = "from now";

/// Days that are never eligible for selection
pub const WEEKEND: [Weekday; 2] = [Weekday::Sat, Weekday::Sun];

/// Range separator (ISO 8601 extended format)
pub const RANGE_SEPARATOR: char = '/';

/// Width of the anchor selection window, in calendar years
pub const ANCHOR_WINDOW_YEARS: i32 = 1;
