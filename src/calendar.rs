//! Calendar naming for derived record fields.
//!
//! Month and weekday names are part of the parsed data (they label timeline
//! rows and heatmap axes), so they must not depend on the host locale.
//! [`CalendarNames`] is the seam; [`English`] is the fixed Gregorian,
//! English-language implementation used by default.
//!
//! ```rust
//! use chatstat::calendar::{CalendarNames, English};
//! use chrono::Weekday;
//!
//! assert_eq!(English.month_name(3), "March");
//! assert_eq!(English.weekday_name(Weekday::Tue), "Tuesday");
//! ```

use chrono::{Month, NaiveDate, Weekday};

/// Weekdays in ISO order, Monday first.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Names for calendar months and weekdays.
pub trait CalendarNames: Send + Sync {
    /// Name of the 1-based `month`. Out-of-range values return an empty string.
    fn month_name(&self, month: u32) -> String;

    /// Name of a weekday.
    fn weekday_name(&self, weekday: Weekday) -> String;
}

/// Fixed English (Gregorian) calendar names, as chrono spells them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct English;

impl CalendarNames for English {
    fn month_name(&self, month: u32) -> String {
        u8::try_from(month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map(|m| m.name().to_string())
            .unwrap_or_default()
    }

    fn weekday_name(&self, weekday: Weekday) -> String {
        // any ISO week renders %A the same way
        NaiveDate::from_isoywd_opt(2024, 1, weekday)
            .map(|date| date.format("%A").to_string())
            .unwrap_or_default()
    }
}
