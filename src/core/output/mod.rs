//! Report writers.
//!
//! - [`to_text`] - human-readable summary, always available
//! - [`write_json`] / [`to_json`] - the whole [`Analysis`](crate::core::report::Analysis)
//!   as pretty JSON - requires `json-output` feature
//! - [`write_csv_tables`] / [`table_to_csv`] - one CSV file per table with `;`
//!   delimiter - requires `csv-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatstat::Result<()> {
//! use chatstat::config::AnalysisConfig;
//! use chatstat::core::filter::UserSelection;
//! use chatstat::core::output::{write_csv_tables, write_json};
//! use chatstat::core::report::analyze;
//! use chatstat::links::UrlExtractor;
//! use chatstat::parser::ChatParser;
//!
//! let records = ChatParser::new().parse("chat.txt".as_ref())?;
//! let analysis = analyze(&records, &UserSelection::Overall, &UrlExtractor::new(), &AnalysisConfig::default());
//!
//! write_json(&analysis, "report.json")?;
//! let files = write_csv_tables(&analysis, "report")?;
//! println!("wrote {} tables", files.len());
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
mod text_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{CsvTable, table_to_csv, tables, write_csv_tables};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
pub use text_writer::to_text;
