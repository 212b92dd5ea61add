//! JSON report writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::report::Analysis;
use crate::error::Result;

/// Writes the analysis as a pretty-printed JSON object.
///
/// # Format
/// ```json
/// {
///   "selection": "Overall",
///   "users": ["Overall", "Alice", "Bob"],
///   "stats": {"messages": 2, "words": 3, "media_messages": 0, "links": 0},
///   ...
/// }
/// ```
pub fn write_json(analysis: &Analysis, output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, analysis)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Converts the analysis to a pretty-printed JSON string.
///
/// Same format as [`write_json`], without the trailing newline.
pub fn to_json(analysis: &Analysis) -> Result<String> {
    Ok(serde_json::to_string_pretty(analysis)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalysisConfig;
    use crate::core::filter::UserSelection;
    use crate::core::report::analyze;
    use crate::links::UrlExtractor;
    use crate::parser::ChatParser;
    use tempfile::NamedTempFile;

    fn analysis(selection: &UserSelection) -> Analysis {
        let records = ChatParser::new()
            .parse_str("3/5/24, 14:30 - Alice: Hello 😀\n3/5/24, 14:31 - Bob: hi there\n");
        analyze(&records, selection, &UrlExtractor::new(), &AnalysisConfig::default())
    }

    #[test]
    fn test_to_json_basic() {
        let json = to_json(&analysis(&UserSelection::Overall)).unwrap();

        assert!(json.contains(r#""selection": "Overall""#));
        assert!(json.contains(r#""messages": 2"#));
        assert!(json.contains(r#""14-15""#));
        assert!(json.contains("busy_users"));
    }

    #[test]
    fn test_to_json_user_omits_busy_users() {
        let json = to_json(&analysis(&UserSelection::user("Bob"))).unwrap();
        assert!(json.contains(r#""selection": "Bob""#));
        assert!(!json.contains("busy_users"));
    }

    #[test]
    fn test_write_json_round_trip() {
        let original = analysis(&UserSelection::Overall);
        let temp_file = NamedTempFile::new().unwrap();

        write_json(&original, temp_file.path()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(content.ends_with('\n'));
        let parsed: Analysis = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, original);
    }
}
