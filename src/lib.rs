//! # Chatstat
//!
//! A Rust library for turning exported group-chat transcripts into activity
//! statistics.
//!
//! ## Overview
//!
//! An export is plain text where each message starts with a
//! `M/D/YY, H:MM - ` prefix followed by `Sender: body`. Chatstat parses it into
//! [`MessageRecord`]s with derived calendar fields and computes, for the whole
//! group or one participant:
//! - headline counts: messages, words, media messages, links
//! - the busiest participants and their share of messages
//! - monthly and daily timelines
//! - weekday and month activity, plus a weekday x hour heatmap
//! - word-cloud frequencies, the most common words and emoji usage
//!
//! ## Quick Start
//!
//! ```rust
//! use chatstat::prelude::*;
//!
//! let export = "\
//! 3/5/24, 14:30 - Alice: Hello there 👋
//! 3/5/24, 14:31 - Bob: <Media omitted>
//! 3/5/24, 14:32 - Alice: see https://example.com
//! ";
//! let records = ChatParser::new().parse_str(export);
//! let config = AnalysisConfig::default();
//!
//! let stats = fetch_stats(&records, &UserSelection::Overall, &UrlExtractor::new(), &config);
//! assert_eq!(stats.messages, 3);
//! assert_eq!(stats.media_messages, 1);
//! assert_eq!(stats.links, 1);
//!
//! let analysis = analyze(&records, &UserSelection::user("Alice"), &UrlExtractor::new(), &config);
//! assert_eq!(analysis.stats.messages, 2);
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`ChatParser`](parser::ChatParser) and the timestamp pattern
//! - [`record`] - [`MessageRecord`], calendar fields and hour buckets
//! - [`calendar`] - Month and weekday names ([`CalendarNames`](calendar::CalendarNames))
//! - [`links`] - URL detection ([`LinkDetector`](links::LinkDetector))
//! - [`emoji`] - Emoji character predicate
//! - [`config`] - [`ParserConfig`](config::ParserConfig), [`AnalysisConfig`](config::AnalysisConfig)
//! - [`core`] - Extractors, the [`Analysis`](core::Analysis) bundle and report writers
//! - [`format`] - Report format selection
//! - [`error`] - Unified error types ([`ChatstatError`], [`Result`])
//! - [`cli`], [`logging`] - Binary support (feature `cli`)
//! - [`prelude`] - Convenient re-exports

pub mod calendar;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod emoji;
pub mod error;
pub mod format;
pub mod links;
#[cfg(feature = "cli")]
pub mod logging;
pub mod parser;
pub mod record;

// Re-export the main types at the crate root for convenience
pub use error::{ChatstatError, Result};
pub use record::MessageRecord;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatstat::prelude::*;
/// ```
pub mod prelude {
    pub use crate::MessageRecord;

    // Error types
    pub use crate::error::{ChatstatError, Result};

    // Parsing
    pub use crate::parser::ChatParser;

    // Configuration
    pub use crate::config::{AnalysisConfig, CalendarLocale, ParserConfig};

    // Collaborators
    pub use crate::calendar::{CalendarNames, English};
    pub use crate::links::{LinkDetector, UrlExtractor};

    // Extractors
    pub use crate::core::{
        Analysis, UserSelection, activity_heatmap, analyze, create_word_cloud, daily_timeline,
        emoji_helper, fetch_stats, monthly_activity_map, monthly_timeline, most_busy_users,
        most_common_words, user_list, week_activity_map,
    };

    // Output
    pub use crate::core::output::to_text;
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::write_csv_tables;
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, write_json};
    pub use crate::format::OutputFormat;
}
