//! Headline counts and the busy-users ranking.

use serde::{Deserialize, Serialize};

use super::counter::FrequencyCounter;
use super::filter::{UserSelection, select_records};
use crate::config::AnalysisConfig;
use crate::links::LinkDetector;
use crate::record::MessageRecord;

/// Top-line numbers for a selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatStats {
    /// Number of records
    pub messages: usize,
    /// Whitespace-delimited tokens over all bodies, placeholders included
    pub words: usize,
    /// Bodies exactly equal to the media placeholder
    pub media_messages: usize,
    /// URLs found by the link detector
    pub links: usize,
}

/// Computes [`ChatStats`] for `selection`.
///
/// Word counts include media placeholders (`"<Media omitted>\n"` is two
/// words); only the media count looks at the placeholder.
///
/// ```
/// use chatstat::MessageRecord;
/// use chatstat::config::AnalysisConfig;
/// use chatstat::core::filter::UserSelection;
/// use chatstat::core::stats::fetch_stats;
/// use chatstat::links::UrlExtractor;
///
/// let records = vec![
///     MessageRecord::new("Alice", "see https://example.com"),
///     MessageRecord::new("Bob", "<Media omitted>\n"),
///     MessageRecord::new("Alice", "nice one"),
/// ];
/// let stats = fetch_stats(&records, &UserSelection::Overall, &UrlExtractor::new(), &AnalysisConfig::default());
///
/// assert_eq!(stats.messages, 3);
/// assert_eq!(stats.words, 6);
/// assert_eq!(stats.media_messages, 1);
/// assert_eq!(stats.links, 1);
/// ```
pub fn fetch_stats(
    records: &[MessageRecord],
    selection: &UserSelection,
    links: &dyn LinkDetector,
    config: &AnalysisConfig,
) -> ChatStats {
    select_records(records, selection).fold(ChatStats::default(), |mut stats, record| {
        stats.messages += 1;
        stats.words += record.words().count();
        if record.is_media(&config.media_placeholder) {
            stats.media_messages += 1;
        }
        stats.links += links.count_urls(&record.body);
        stats
    })
}

/// A sender and their message count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCount {
    pub name: String,
    pub messages: usize,
}

/// A sender and their share of all messages, in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserShare {
    pub name: String,
    pub percent: f64,
}

/// Result of [`most_busy_users`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusyUsers {
    /// The `top_users` most active senders
    pub top: Vec<UserCount>,
    /// Every sender's share, same order as `top`
    pub shares: Vec<UserShare>,
}

impl BusyUsers {
    /// Sum of all rounded percentages (100 up to rounding, 0 when empty).
    pub fn percent_total(&self) -> f64 {
        self.shares.iter().map(|s| s.percent).sum()
    }
}

/// Ranks senders over the whole record set.
///
/// Ordered by message count, ties in first-seen order. Group notifications
/// are ranked like any other sender.
pub fn most_busy_users(records: &[MessageRecord], config: &AnalysisConfig) -> BusyUsers {
    let counter: FrequencyCounter<&str> = records.iter().map(|r| r.sender.as_str()).collect();
    let total = counter.total();
    let ranked = counter.into_ranked();

    let shares = ranked
        .iter()
        .map(|&(name, n)| UserShare {
            name: name.to_string(),
            percent: round_to(n as f64 * 100.0 / total as f64, config.percent_precision),
        })
        .collect();

    let top = ranked
        .into_iter()
        .take(config.top_users)
        .map(|(name, messages)| UserCount {
            name: name.to_string(),
            messages,
        })
        .collect();

    BusyUsers { top, shares }
}

fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}
