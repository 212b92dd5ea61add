//! Parsed chat records.
//!
//! This module provides [`MessageRecord`], one parsed unit of a chat export,
//! together with the calendar features derived from its timestamp.
//!
//! # Overview
//!
//! A record consists of:
//! - **Always present**: `sender` and `body`
//! - **Nullable**: `timestamp`, and with it the derived [`CalendarFields`]
//!
//! The derived fields live in a single `Option<CalendarFields>`, so they are
//! present exactly when the timestamp parsed.
//!
//! # Examples
//!
//! ```
//! use chatstat::MessageRecord;
//! use chatstat::calendar::English;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap().and_hms_opt(14, 30, 0).unwrap();
//! let record = MessageRecord::new("Alice", "Hello there").with_timestamp(ts, &English);
//!
//! assert_eq!(record.hour(), Some(14));
//! assert_eq!(record.time_bucket().unwrap().label(), "14-15");
//! assert_eq!(record.day_name(), Some("Tuesday"));
//! ```

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::calendar::CalendarNames;

/// Sender assigned to lines that carry no `"author: text"` pair.
pub const GROUP_NOTIFICATION: &str = "group_notification";

/// Literal body an export writes in place of an attached file.
///
/// The trailing newline is part of the literal: a placeholder on the last line
/// of an export has no newline and does not match.
pub const MEDIA_PLACEHOLDER: &str = "<Media omitted>\n";

/// Selector value meaning "all senders".
pub const OVERALL: &str = "Overall";

/// Hour-wide window label used for heatmap columns.
///
/// Labels follow the export dashboards' convention: `"00-1"` for midnight,
/// `"23-00"` for the last hour, `"{h}-{h+1}"` otherwise (no zero padding).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct TimeBucket {
    hour: u32,
}

impl TimeBucket {
    /// Creates the bucket containing `hour`. Returns `None` for hours above 23.
    pub fn new(hour: u32) -> Option<Self> {
        (hour < 24).then_some(Self { hour })
    }

    /// All 24 buckets in hour order.
    pub fn all() -> impl Iterator<Item = TimeBucket> {
        (0..24).map(|hour| TimeBucket { hour })
    }

    /// Starting hour of the window.
    pub fn hour(self) -> u32 {
        self.hour
    }

    /// Display label, e.g. `"9-10"`.
    pub fn label(self) -> String {
        match self.hour {
            0 => "00-1".to_string(),
            23 => "23-00".to_string(),
            h => format!("{}-{}", h, h + 1),
        }
    }
}

impl fmt::Display for TimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl From<TimeBucket> for String {
    fn from(bucket: TimeBucket) -> Self {
        bucket.label()
    }
}

impl TryFrom<String> for TimeBucket {
    type Error = String;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        let bucket = label
            .split_once('-')
            .and_then(|(start, _)| start.parse::<u32>().ok())
            .and_then(TimeBucket::new)
            .ok_or_else(|| format!("Invalid time bucket label: '{}'", label))?;

        if bucket.label() == label {
            Ok(bucket)
        } else {
            Err(format!("Invalid time bucket label: '{}'", label))
        }
    }
}

/// Calendar features derived from a record's timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarFields {
    pub year: i32,
    pub month_number: u32,
    pub month_name: String,
    pub day_of_month: u32,
    pub date_only: NaiveDate,
    pub hour: u32,
    pub minute: u32,
    pub day_name: String,
    pub time_bucket: TimeBucket,
}

impl CalendarFields {
    /// Derives all fields from `timestamp`, naming months and weekdays with `names`.
    pub fn derive(timestamp: NaiveDateTime, names: &dyn CalendarNames) -> Self {
        let hour = timestamp.hour();
        Self {
            year: timestamp.year(),
            month_number: timestamp.month(),
            month_name: names.month_name(timestamp.month()),
            day_of_month: timestamp.day(),
            date_only: timestamp.date(),
            hour,
            minute: timestamp.minute(),
            day_name: names.weekday_name(timestamp.weekday()),
            time_bucket: TimeBucket { hour },
        }
    }

    /// Weekday of `date_only`.
    pub fn weekday(&self) -> Weekday {
        self.date_only.weekday()
    }
}

/// One parsed chat line.
///
/// # Serialization
///
/// `timestamp` and `calendar` are omitted from JSON when `None`.
///
/// ```
/// use chatstat::MessageRecord;
///
/// let record = MessageRecord::new("Alice", "Hi");
/// let json = serde_json::to_string(&record)?;
/// assert!(!json.contains("timestamp"));
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// Local date-time from the line prefix; `None` if it failed to parse.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,

    /// Author, or [`GROUP_NOTIFICATION`] for system lines.
    pub sender: String,

    /// Literal message text, trailing newlines included.
    pub body: String,

    /// Derived calendar features; present exactly when `timestamp` is.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub calendar: Option<CalendarFields>,
}

impl MessageRecord {
    /// Creates a record without a timestamp.
    pub fn new(sender: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            body: body.into(),
            timestamp: None,
            calendar: None,
        }
    }

    /// Creates a group notification record.
    pub fn group_notification(body: impl Into<String>) -> Self {
        Self::new(GROUP_NOTIFICATION, body)
    }

    /// Sets the timestamp and derives the calendar fields from it.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: NaiveDateTime, names: &dyn CalendarNames) -> Self {
        self.calendar = Some(CalendarFields::derive(timestamp, names));
        self.timestamp = Some(timestamp);
        self
    }

    pub fn is_group_notification(&self) -> bool {
        self.sender == GROUP_NOTIFICATION
    }

    /// Returns `true` if the body is exactly `placeholder`.
    pub fn is_media(&self, placeholder: &str) -> bool {
        self.body == placeholder
    }

    /// Whitespace-delimited tokens of the body.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.body.split_whitespace()
    }

    pub fn year(&self) -> Option<i32> {
        self.calendar.as_ref().map(|c| c.year)
    }

    pub fn month_number(&self) -> Option<u32> {
        self.calendar.as_ref().map(|c| c.month_number)
    }

    pub fn month_name(&self) -> Option<&str> {
        self.calendar.as_ref().map(|c| c.month_name.as_str())
    }

    pub fn day_of_month(&self) -> Option<u32> {
        self.calendar.as_ref().map(|c| c.day_of_month)
    }

    pub fn date_only(&self) -> Option<NaiveDate> {
        self.calendar.as_ref().map(|c| c.date_only)
    }

    pub fn hour(&self) -> Option<u32> {
        self.calendar.as_ref().map(|c| c.hour)
    }

    pub fn minute(&self) -> Option<u32> {
        self.calendar.as_ref().map(|c| c.minute)
    }

    pub fn day_name(&self) -> Option<&str> {
        self.calendar.as_ref().map(|c| c.day_name.as_str())
    }

    pub fn time_bucket(&self) -> Option<TimeBucket> {
        self.calendar.as_ref().map(|c| c.time_bucket)
    }
}
