//! Report format types for the chatstat library.
//!
//! These types don't depend on clap, so library users can pick a format
//! without enabling the `cli` feature.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "json-output")]
//! # fn example() -> chatstat::Result<()> {
//! use chatstat::config::AnalysisConfig;
//! use chatstat::core::{UserSelection, analyze};
//! use chatstat::format::{OutputFormat, to_format_string};
//! use chatstat::links::UrlExtractor;
//! use chatstat::parser::ChatParser;
//!
//! let records = ChatParser::new().parse_str("1/2/24, 10:00 - Alice: hi\n");
//! let analysis = analyze(&records, &UserSelection::Overall, &UrlExtractor::new(), &AnalysisConfig::default());
//!
//! let format = OutputFormat::from_path("report.json")?;
//! let json = to_format_string(&analysis, format)?;
//! assert!(json.contains("\"messages\": 1"));
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::output::to_text;
use crate::core::report::Analysis;
use crate::error::ChatstatError;

/// Report format.
///
/// - [`Text`](OutputFormat::Text) - Human-readable summary (default)
/// - [`Json`](OutputFormat::Json) - The whole analysis as one JSON object
/// - [`Csv`](OutputFormat::Csv) - One `;`-delimited table per chart, written to a directory
///
/// # Example
///
/// ```rust
/// use chatstat::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("json").unwrap();
/// assert_eq!(format, OutputFormat::Json);
/// assert_eq!(format.extension(), "json");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Plain-text summary
    #[default]
    Text,

    /// Pretty-printed JSON object
    Json,

    /// Directory of CSV tables with semicolon delimiter
    Csv,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "txt", "json", "csv"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Text, OutputFormat::Json, OutputFormat::Csv]
    }

    /// Detects format from an output path.
    ///
    /// A path without extension is taken as a CSV output directory.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatstat::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::from_path("out/report.json").unwrap(), OutputFormat::Json);
    /// assert_eq!(OutputFormat::from_path("out/tables").unwrap(), OutputFormat::Csv);
    /// assert!(OutputFormat::from_path("report.xlsx").is_err());
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ChatstatError> {
        let Some(ext) = path.as_ref().extension() else {
            return Ok(OutputFormat::Csv);
        };
        let ext = ext.to_string_lossy().to_lowercase();

        match ext.as_str() {
            "txt" | "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(ChatstatError::invalid_format(
                "output",
                format!(
                    "Unknown file extension: '.{}'. Expected one of: txt, json, csv",
                    ext
                ),
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "Text"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

#[cfg(not(all(feature = "csv-output", feature = "json-output")))]
fn feature_disabled(format: OutputFormat) -> ChatstatError {
    let feature = match format {
        OutputFormat::Csv => "csv-output",
        OutputFormat::Json | OutputFormat::Text => "json-output",
    };
    ChatstatError::invalid_format(
        "output",
        format!(
            "Output format {} requires the '{}' feature to be enabled",
            format, feature
        ),
    )
}

/// Writes the analysis to `path` in the given format.
///
/// For [`Csv`](OutputFormat::Csv) `path` is a directory that receives one file
/// per table. Returns the files written.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The output cannot be written
pub fn write_to_format(
    analysis: &Analysis,
    path: impl AsRef<Path>,
    format: OutputFormat,
) -> Result<Vec<std::path::PathBuf>, ChatstatError> {
    let path = path.as_ref();
    match format {
        OutputFormat::Text => {
            std::fs::write(path, to_text(analysis))?;
            Ok(vec![path.to_path_buf()])
        }
        #[cfg(feature = "json-output")]
        OutputFormat::Json => {
            crate::core::output::write_json(analysis, path)?;
            Ok(vec![path.to_path_buf()])
        }
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv_tables(analysis, path),
        #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
        _ => Err(feature_disabled(format)),
    }
}

/// Renders the analysis as a string.
///
/// [`Csv`](OutputFormat::Csv) produces every table one after another, each
/// preceded by a `# name` line.
pub fn to_format_string(analysis: &Analysis, format: OutputFormat) -> Result<String, ChatstatError> {
    match format {
        OutputFormat::Text => Ok(to_text(analysis)),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(analysis),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => {
            let mut out = String::new();
            for table in crate::core::output::tables(analysis) {
                out.push_str(&format!("# {}\n", table.name));
                out.push_str(&crate::core::output::table_to_csv(&table)?);
                out.push('\n');
            }
            Ok(out)
        }
        #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
        _ => Err(feature_disabled(format)),
    }
}
