//! The full dashboard for one selection.
//!
//! [`analyze`] runs every extractor over the same records and bundles the
//! results. The extractors are independent reads of an immutable slice, so the
//! bundle is identical to calling them one by one.
//!
//! # Example
//!
//! ```rust
//! use chatstat::core::filter::UserSelection;
//! use chatstat::core::report::analyze;
//! use chatstat::config::AnalysisConfig;
//! use chatstat::links::UrlExtractor;
//! use chatstat::parser::ChatParser;
//!
//! let records = ChatParser::new().parse_str("3/5/24, 14:30 - Alice: Hello 👋\n3/5/24, 14:31 - Bob: hi\n");
//! let analysis = analyze(&records, &UserSelection::Overall, &UrlExtractor::new(), &AnalysisConfig::default());
//!
//! assert_eq!(analysis.stats.messages, 2);
//! assert!(analysis.busy_users.is_some());
//! assert_eq!(analysis.top_emoji().map(|e| e.emoji), Some('👋'));
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::activity::{
    ActivityCount, Heatmap, activity_heatmap_with_names, monthly_activity_map, week_activity_map,
};
use super::filter::{UserSelection, user_list};
use super::stats::{BusyUsers, ChatStats, fetch_stats, most_busy_users};
use super::timeline::{DailyPoint, MonthlyPoint, daily_timeline, monthly_timeline};
use super::words::{
    EmojiCount, WordCloud, WordCount, create_word_cloud, emoji_helper, most_common_words,
};
use crate::config::AnalysisConfig;
use crate::links::LinkDetector;
use crate::record::MessageRecord;

/// Everything the dashboard shows for one selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub selection: UserSelection,
    /// Selector options for the whole record set
    pub users: Vec<String>,
    pub stats: ChatStats,
    pub monthly_timeline: Vec<MonthlyPoint>,
    pub daily_timeline: Vec<DailyPoint>,
    pub week_activity: Vec<ActivityCount>,
    pub month_activity: Vec<ActivityCount>,
    pub heatmap: Heatmap,
    /// Only computed for the overall selection
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub busy_users: Option<BusyUsers>,
    pub word_cloud: WordCloud,
    pub common_words: Vec<WordCount>,
    pub emoji: Vec<EmojiCount>,
}

impl Analysis {
    /// The most used emoji, if any.
    pub fn top_emoji(&self) -> Option<&EmojiCount> {
        self.emoji.first()
    }
}

/// Runs every extractor for `selection`.
pub fn analyze(
    records: &[MessageRecord],
    selection: &UserSelection,
    links: &dyn LinkDetector,
    config: &AnalysisConfig,
) -> Analysis {
    debug!(records = records.len(), selection = %selection, "analyzing");

    Analysis {
        selection: selection.clone(),
        users: user_list(records),
        stats: fetch_stats(records, selection, links, config),
        monthly_timeline: monthly_timeline(records, selection),
        daily_timeline: daily_timeline(records, selection),
        week_activity: week_activity_map(records, selection),
        month_activity: monthly_activity_map(records, selection),
        heatmap: activity_heatmap_with_names(records, selection, config.parser.calendar.names()),
        busy_users: selection
            .is_overall()
            .then(|| most_busy_users(records, config)),
        word_cloud: create_word_cloud(records, selection, config),
        common_words: most_common_words(records, selection, config),
        emoji: emoji_helper(records, selection),
    }
}
