//! Feature extraction over parsed records.
//!
//! This module contains:
//! - [`filter`] - Sender selection and the selector list
//! - [`stats`] - Headline counts and busy users
//! - [`timeline`] - Monthly and daily message counts
//! - [`activity`] - Weekday, month and hour-of-day activity
//! - [`words`] - Word cloud, common words and emoji
//! - [`report`] - Every extractor bundled into one [`Analysis`]
//! - [`output`] - Text, JSON and CSV writers
//!
//! Every extractor is a pure function of the record slice and a
//! [`UserSelection`]; none of them mutate or reorder the records.
//!
//! # Quick Start
//!
//! ```rust
//! use chatstat::core::{UserSelection, fetch_stats, most_common_words};
//! use chatstat::config::AnalysisConfig;
//! use chatstat::links::UrlExtractor;
//! use chatstat::parser::ChatParser;
//!
//! let records = ChatParser::new().parse_str("1/2/24, 10:00 - Alice: hi Bob\n1/2/24, 10:01 - Bob: hi\n");
//! let config = AnalysisConfig::default();
//!
//! let stats = fetch_stats(&records, &UserSelection::Overall, &UrlExtractor::new(), &config);
//! assert_eq!(stats.words, 3);
//!
//! let top = most_common_words(&records, &UserSelection::Overall, &config);
//! assert_eq!(top[0].word, "hi");
//! ```

pub mod activity;
pub mod counter;
pub mod filter;
pub mod output;
pub mod report;
pub mod stats;
pub mod timeline;
pub mod words;

// Re-export main types for convenience
pub use activity::{
    ActivityCount, Heatmap, activity_heatmap, activity_heatmap_with_names, monthly_activity_map,
    week_activity_map,
};
pub use counter::FrequencyCounter;
pub use filter::{UserSelection, select_records, user_list};
pub use report::{Analysis, analyze};
pub use stats::{BusyUsers, ChatStats, UserCount, UserShare, fetch_stats, most_busy_users};
pub use timeline::{DailyPoint, MonthlyPoint, daily_timeline, monthly_timeline};
pub use words::{
    EmojiCount, WeightedWord, WordCloud, WordCount, create_word_cloud, emoji_helper,
    most_common_words,
};

// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{table_to_csv, write_csv_tables};
#[cfg(feature = "json-output")]
pub use output::{to_json, write_json};
pub use output::to_text;
