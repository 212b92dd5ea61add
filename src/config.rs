//! Configuration types for parsing and analysis.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`ParserConfig`] - how chat exports are turned into records
//! - [`AnalysisConfig`] - limits and literals used by the extractors
//!
//! # Example
//!
//! ```rust
//! use chatstat::config::AnalysisConfig;
//!
//! let config = AnalysisConfig::new()
//!     .with_top_users(10)
//!     .with_top_words(50);
//!
//! assert!(config.validate().is_ok());
//! ```

#[cfg(feature = "json-output")]
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::calendar::{CalendarNames, English};
use crate::error::ChatstatError;
use crate::record::MEDIA_PLACEHOLDER;

/// Locale used to name months and weekdays on parsed records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum CalendarLocale {
    /// Gregorian calendar, English names
    #[default]
    English,
}

impl CalendarLocale {
    /// Returns the naming implementation for this locale.
    pub fn names(self) -> &'static dyn CalendarNames {
        match self {
            CalendarLocale::English => &English,
        }
    }
}

/// Configuration for chat export parsing.
///
/// # Example
///
/// ```rust
/// use chatstat::config::ParserConfig;
///
/// let config = ParserConfig::new().with_log_malformed(false);
/// assert!(!config.log_malformed);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Calendar naming for derived fields (default: English)
    pub calendar: CalendarLocale,

    /// Emit a trace event for every timestamp that fails to parse (default: true)
    pub log_malformed: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            calendar: CalendarLocale::English,
            log_malformed: true,
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the calendar locale.
    #[must_use]
    pub fn with_calendar(mut self, calendar: CalendarLocale) -> Self {
        self.calendar = calendar;
        self
    }

    /// Sets whether malformed timestamps are logged individually.
    #[must_use]
    pub fn with_log_malformed(mut self, enabled: bool) -> Self {
        self.log_malformed = enabled;
        self
    }
}

/// Configuration for the feature extractors.
///
/// # Example
///
/// ```rust
/// use chatstat::config::AnalysisConfig;
///
/// let config = AnalysisConfig::default();
/// assert_eq!(config.top_users, 5);
/// assert_eq!(config.top_words, 20);
/// assert_eq!(config.media_placeholder, "<Media omitted>\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Number of senders in the busy-users ranking (default: 5)
    pub top_users: usize,

    /// Number of tokens in the most-common-words table (default: 20)
    pub top_words: usize,

    /// Body literal counted as a media message (default: `"<Media omitted>\n"`)
    pub media_placeholder: String,

    /// Decimal places for sender percentages (default: 2)
    pub percent_precision: u32,

    /// Parser settings used when the analysis reads a file
    pub parser: ParserConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_users: 5,
            top_words: 20,
            media_placeholder: MEDIA_PLACEHOLDER.to_string(),
            percent_precision: 2,
            parser: ParserConfig::default(),
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a configuration from a JSON file.
    ///
    /// Missing fields take their default values. The result is validated.
    #[cfg(feature = "json-output")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ChatstatError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            ChatstatError::invalid_config(e.to_string()).with_config_path(path)
        })?;
        config.validate().map_err(|e| e.with_config_path(path))?;
        Ok(config)
    }

    /// Checks that every limit is usable.
    pub fn validate(&self) -> Result<(), ChatstatError> {
        if self.top_users == 0 {
            return Err(ChatstatError::invalid_config("top_users must be greater than 0"));
        }
        if self.top_words == 0 {
            return Err(ChatstatError::invalid_config("top_words must be greater than 0"));
        }
        if self.percent_precision > 6 {
            return Err(ChatstatError::invalid_config(format!(
                "percent_precision must be at most 6, got {}",
                self.percent_precision
            )));
        }
        Ok(())
    }

    /// Sets the size of the busy-users ranking.
    #[must_use]
    pub fn with_top_users(mut self, n: usize) -> Self {
        self.top_users = n;
        self
    }

    /// Sets the size of the most-common-words table.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    /// Sets the media placeholder literal.
    #[must_use]
    pub fn with_media_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.media_placeholder = placeholder.into();
        self
    }

    /// Sets the number of decimal places for percentages.
    #[must_use]
    pub fn with_percent_precision(mut self, digits: u32) -> Self {
        self.percent_precision = digits;
        self
    }

    /// Sets the parser configuration.
    #[must_use]
    pub fn with_parser(mut self, parser: ParserConfig) -> Self {
        self.parser = parser;
        self
    }
}
