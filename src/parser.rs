//! Chat export parser.
//!
//! Exports are plain text where every message starts with a timestamp prefix:
//!
//! ```text
//! 3/5/24, 14:30 - Alice: Hello there
//! 3/5/24, 14:31 - Bob joined using this group's invite link
//! ```
//!
//! The prefix pattern is used twice over the same text: once to split it into
//! message bodies and once to collect the prefixes themselves. Both sequences
//! come from the same matches, so they line up by position. Text before the
//! first prefix is dropped.
//!
//! Parsing never fails on content. A prefix that matches the pattern but is not
//! a real `month/day/yy` date yields a record with no timestamp, and a body
//! without `": "` becomes a group notification.
//!
//! # Example
//!
//! ```rust
//! use chatstat::parser::ChatParser;
//!
//! let parser = ChatParser::new();
//! let records = parser.parse_str("3/5/24, 14:30 - Alice: Hello there\n3/5/24, 14:31 - Bob left\n");
//!
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].sender, "Alice");
//! assert_eq!(records[0].body, "Hello there\n");
//! assert!(records[1].is_group_notification());
//! ```

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDateTime};
use regex::Regex;
use tracing::{debug, trace};

use crate::calendar::CalendarNames;
use crate::config::ParserConfig;
use crate::error::ChatstatError;
use crate::record::{GROUP_NOTIFICATION, MessageRecord};

/// Message prefix: `D{1,2}/D{1,2}/D{2,4}, H{1,2}:MM - `.
pub const TIMESTAMP_PATTERN: &str = r"\d{1,2}/\d{1,2}/\d{2,4},\s\d{1,2}:\d{2}\s-\s";

/// chrono format for a matched prefix: month/day/two-digit year, 24-hour clock.
const TIMESTAMP_FORMAT: &str = "%m/%d/%y, %H:%M - ";

/// Delimiter between sender and body.
const SENDER_DELIMITER: &str = ": ";

static TIMESTAMP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TIMESTAMP_PATTERN).expect("timestamp pattern is valid"));

/// Counts timestamp prefixes in `text`.
///
/// [`ChatParser::parse_str`] produces exactly this many records.
pub fn count_timestamp_matches(text: &str) -> usize {
    TIMESTAMP_RE.find_iter(text).count()
}

/// Parses a matched prefix such as `"3/5/24, 14:30 - "`.
///
/// Two-digit years `00`..=`68` are 2000..=2068, `69`..=`99` are 1969..=1999.
/// Returns `None` for impossible dates and four-digit years.
pub fn parse_timestamp(prefix: &str) -> Option<NaiveDateTime> {
    let ts = NaiveDateTime::parse_from_str(prefix, TIMESTAMP_FORMAT).ok()?;
    // chrono pivots `%y` at 70, one year later than POSIX strptime
    if ts.year() == 2069 {
        ts.with_year(1969)
    } else {
        Some(ts)
    }
}

/// Splits a raw body at the first `": "` into `(sender, body)`.
///
/// Without a delimiter the whole text is the body of a group notification.
pub fn split_sender(raw: &str) -> (&str, &str) {
    raw.split_once(SENDER_DELIMITER)
        .unwrap_or((GROUP_NOTIFICATION, raw))
}

/// Parser for plain-text chat exports.
///
/// # Example
///
/// ```rust,no_run
/// use chatstat::parser::ChatParser;
///
/// let parser = ChatParser::new();
/// let records = parser.parse("chat.txt".as_ref())?;
/// # Ok::<(), chatstat::ChatstatError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChatParser {
    config: ParserConfig,
}

impl ChatParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Reads and parses an export file.
    ///
    /// Fails only if the file can't be read or isn't valid UTF-8.
    pub fn parse(&self, path: &Path) -> Result<Vec<MessageRecord>, ChatstatError> {
        let bytes = fs::read(path)?;
        let text = String::from_utf8(bytes)
            .map_err(|e| ChatstatError::utf8(path.display().to_string(), e))?;
        Ok(self.parse_str(&text))
    }

    /// Parses raw export bytes, e.g. an uploaded file.
    pub fn parse_bytes(&self, bytes: Vec<u8>) -> Result<Vec<MessageRecord>, ChatstatError> {
        let text = String::from_utf8(bytes)?;
        Ok(self.parse_str(&text))
    }

    /// Parses export text into records, one per timestamp prefix, in source order.
    pub fn parse_str(&self, text: &str) -> Vec<MessageRecord> {
        let names = self.config.calendar.names();

        // The first split fragment precedes the first prefix.
        let bodies = TIMESTAMP_RE.split(text).skip(1);
        let prefixes = TIMESTAMP_RE.find_iter(text);

        let records: Vec<MessageRecord> = prefixes
            .zip(bodies)
            .map(|(prefix, raw)| self.build_record(prefix.as_str(), raw, names))
            .collect();

        let malformed = records.iter().filter(|r| r.timestamp.is_none()).count();
        let notifications = records.iter().filter(|r| r.is_group_notification()).count();
        debug!(
            records = records.len(),
            malformed,
            notifications,
            "parsed chat export"
        );

        records
    }

    fn build_record(&self, prefix: &str, raw: &str, names: &dyn CalendarNames) -> MessageRecord {
        let (sender, body) = split_sender(raw);
        let record = MessageRecord::new(sender, body);

        match parse_timestamp(prefix) {
            Some(ts) => record.with_timestamp(ts, names),
            None => {
                if self.config.log_malformed {
                    trace!(prefix, "timestamp did not parse");
                }
                record
            }
        }
    }
}
