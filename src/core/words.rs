//! Token and emoji frequencies.
//!
//! Tokens are whitespace-split words taken as-is: no case folding, no
//! punctuation stripping. Word tables skip group notifications and media
//! placeholders; the emoji table looks at every selected record.

use serde::{Deserialize, Serialize};

use super::counter::FrequencyCounter;
use super::filter::{UserSelection, select_records};
use crate::config::AnalysisConfig;
use crate::emoji::emojis_in;
use crate::record::MessageRecord;

/// A token and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// A word-cloud entry: raw count plus weight relative to the most frequent token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedWord {
    pub word: String,
    pub count: usize,
    /// `count / max_count`, in `(0, 1]`
    pub weight: f64,
}

/// Weighted token frequencies for a word-cloud renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordCloud {
    /// Every distinct token, most frequent first
    pub words: Vec<WeightedWord>,
}

impl WordCloud {
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }
}

/// An emoji character and how often it occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiCount {
    pub emoji: char,
    pub count: usize,
}

fn word_counter<'a>(
    records: &'a [MessageRecord],
    selection: &'a UserSelection,
    config: &'a AnalysisConfig,
) -> FrequencyCounter<&'a str> {
    select_records(records, selection)
        .filter(|r| !r.is_group_notification() && !r.is_media(&config.media_placeholder))
        .flat_map(MessageRecord::words)
        .collect()
}

/// Builds the word-cloud frequencies for `selection`.
pub fn create_word_cloud(
    records: &[MessageRecord],
    selection: &UserSelection,
    config: &AnalysisConfig,
) -> WordCloud {
    let ranked = word_counter(records, selection, config).into_ranked();
    let Some(&(_, max_count)) = ranked.first() else {
        return WordCloud::default();
    };

    let words = ranked
        .into_iter()
        .map(|(word, count)| WeightedWord {
            word: word.to_string(),
            count,
            weight: count as f64 / max_count as f64,
        })
        .collect();

    WordCloud { words }
}

/// The `config.top_words` most frequent tokens, ties in first-occurrence order.
///
/// ```
/// use chatstat::MessageRecord;
/// use chatstat::config::AnalysisConfig;
/// use chatstat::core::filter::UserSelection;
/// use chatstat::core::words::most_common_words;
///
/// let records = vec![
///     MessageRecord::new("Alice", "hi hi there"),
///     MessageRecord::new("Bob", "Hi there"),
///     MessageRecord::group_notification("hi hi hi"),
/// ];
/// let top = most_common_words(&records, &UserSelection::Overall, &AnalysisConfig::default());
///
/// assert_eq!(top[0].word, "hi");
/// assert_eq!(top[0].count, 2);
/// assert_eq!(top[1].word, "there");
/// assert_eq!(top[2].word, "Hi");
/// ```
pub fn most_common_words(
    records: &[MessageRecord],
    selection: &UserSelection,
    config: &AnalysisConfig,
) -> Vec<WordCount> {
    word_counter(records, selection, config)
        .most_common(config.top_words)
        .into_iter()
        .map(|(word, count)| WordCount {
            word: word.to_string(),
            count,
        })
        .collect()
}

/// Every emoji used by `selection`, most frequent first. Not truncated.
pub fn emoji_helper(records: &[MessageRecord], selection: &UserSelection) -> Vec<EmojiCount> {
    select_records(records, selection)
        .flat_map(|r| emojis_in(&r.body))
        .collect::<FrequencyCounter<char>>()
        .into_ranked()
        .into_iter()
        .map(|(emoji, count)| EmojiCount { emoji, count })
        .collect()
}
