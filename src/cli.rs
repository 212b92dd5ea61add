//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Report format options
//!
//! [`Args::analysis_config`] merges the optional config file with the flag
//! overrides, so the binary and tests build the same configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::core::filter::UserSelection;
use crate::error::ChatstatError;

/// Chat export statistics: timelines, activity heatmaps, word and emoji
/// frequencies for a whole group or a single participant.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstat")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstat chat.txt
    chatstat chat.txt --list-users
    chatstat chat.txt --user Alice
    chatstat chat.txt --format json -o report.json
    chatstat chat.txt --format csv -o tables/ --top-words 50")]
pub struct Args {
    /// Path to the exported chat (.txt)
    pub input: PathBuf,

    /// Analyze a single participant ("Overall" for everyone)
    #[arg(short, long, value_name = "NAME", default_value = "Overall")]
    pub user: String,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Output path (a directory for csv); stdout when omitted for text and json
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print the selectable participants and exit
    #[arg(long)]
    pub list_users: bool,

    /// JSON file with analysis settings
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of senders in the busy-users ranking
    #[arg(long, value_name = "N")]
    pub top_users: Option<usize>,

    /// Number of entries in the common-words table
    #[arg(long, value_name = "N")]
    pub top_words: Option<usize>,

    /// Increase log verbosity (-v, -vv, -vvv); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// The sender selection requested with `--user`.
    pub fn selection(&self) -> UserSelection {
        UserSelection::user(self.user.as_str())
    }

    /// Loads `--config` if given, then applies flag overrides and validates.
    pub fn analysis_config(&self) -> Result<AnalysisConfig, ChatstatError> {
        let mut config = match &self.config {
            Some(path) => AnalysisConfig::from_json_file(path)?,
            None => AnalysisConfig::default(),
        };

        if let Some(n) = self.top_users {
            config = config.with_top_users(n);
        }
        if let Some(n) = self.top_words {
            config = config.with_top_words(n);
        }

        config.validate()?;
        Ok(config)
    }
}

/// Report format options.
///
/// - [`Text`](OutputFormat::Text) - Human-readable summary (default)
/// - [`Json`](OutputFormat::Json) - Whole analysis as one JSON object
/// - [`Csv`](OutputFormat::Csv) - One `;`-delimited table per chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain-text summary
    #[default]
    #[value(alias = "txt")]
    Text,

    /// Pretty-printed JSON
    Json,

    /// Directory of CSV tables
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::format::OutputFormat::from(*self))
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Text => crate::format::OutputFormat::Text,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("chatstat").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["chat.txt"]);
        assert_eq!(args.input, PathBuf::from("chat.txt"));
        assert_eq!(args.format, OutputFormat::Text);
        assert!(args.selection().is_overall());
        assert!(args.output.is_none());
        assert!(!args.list_users);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_flags() {
        let args = parse(&["chat.txt", "-u", "Alice", "-f", "json", "-o", "r.json", "-vv"]);
        assert_eq!(args.selection(), UserSelection::user("Alice"));
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.output, Some(PathBuf::from("r.json")));
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_format_alias_and_rejection() {
        assert_eq!(parse(&["c.txt", "--format", "txt"]).format, OutputFormat::Text);
        assert!(Args::try_parse_from(["chatstat", "c.txt", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_analysis_config_overrides() {
        let config = parse(&["c.txt", "--top-users", "3", "--top-words", "7"])
            .analysis_config()
            .unwrap();
        assert_eq!(config.top_users, 3);
        assert_eq!(config.top_words, 7);
    }

    #[test]
    fn test_analysis_config_file_then_flags() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"top_users": 2, "top_words": 9}}"#).unwrap();
        let path = file.path().to_str().unwrap();

        let config = parse(&["c.txt", "--config", path, "--top-words", "4"])
            .analysis_config()
            .unwrap();
        assert_eq!(config.top_users, 2);
        assert_eq!(config.top_words, 4);
    }

    #[test]
    fn test_analysis_config_rejects_zero() {
        let err = parse(&["c.txt", "--top-words", "0"]).analysis_config().unwrap_err();
        assert!(err.is_invalid_config());
    }

    #[test]
    fn test_format_conversion() {
        let lib: crate::format::OutputFormat = OutputFormat::Csv.into();
        assert_eq!(lib, crate::format::OutputFormat::Csv);
        assert_eq!(OutputFormat::Json.to_string(), "JSON");
    }
}
