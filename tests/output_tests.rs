//! Tests for report writers (text, JSON, CSV tables)

use chatstat::config::AnalysisConfig;
use chatstat::core::output::{table_to_csv, tables, to_json, to_text, write_csv_tables, write_json};
use chatstat::core::{Analysis, UserSelection, analyze};
use chatstat::format::{OutputFormat, to_format_string, write_to_format};
use chatstat::links::UrlExtractor;
use chatstat::parser::ChatParser;
use std::fs;
use tempfile::tempdir;

const EXPORT: &str = "\
1/15/24, 10:30 - Alice: Hello!
1/15/24, 10:31 - Bob: Hi Alice; see www.example.com 😀
1/15/24, 10:32 - Alice: <Media omitted>
1/16/24, 8:05 - Alice added Carol
1/16/24, 8:06 - Carol: \"quoted\" text
";

fn sample(selection: &UserSelection) -> Analysis {
    let records = ChatParser::new().parse_str(EXPORT);
    analyze(&records, selection, &UrlExtractor::new(), &AnalysisConfig::default())
}

// ============================================================================
// JSON Writer Tests
// ============================================================================

mod json_writer_tests {
    use super::*;

    #[test]
    fn test_write_json_structure() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.json");

        write_json(&sample(&UserSelection::Overall), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();

        assert_eq!(value["selection"], "Overall");
        assert_eq!(value["stats"]["messages"], 5);
        assert_eq!(value["stats"]["media_messages"], 1);
        assert_eq!(value["stats"]["links"], 1);
        assert_eq!(value["users"], serde_json::json!(["Overall", "Alice", "Bob", "Carol"]));
        assert_eq!(value["monthly_timeline"][0]["label"], "January-2024");
        assert_eq!(value["daily_timeline"][0]["date"], "2024-01-15");
        assert_eq!(value["heatmap"]["rows"].as_array().unwrap().len(), 7);
        assert_eq!(value["busy_users"]["top"][0]["name"], "Alice");
        assert_eq!(value["emoji"][0]["emoji"], "😀");
    }

    #[test]
    fn test_json_user_selection() {
        let json = to_json(&sample(&UserSelection::user("Bob"))).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["selection"], "Bob");
        assert_eq!(value["stats"]["messages"], 1);
        assert!(value.get("busy_users").is_none());
    }

    #[test]
    fn test_json_round_trip() {
        let original = sample(&UserSelection::Overall);
        let parsed: Analysis = serde_json::from_str(&to_json(&original).unwrap()).unwrap();
        assert_eq!(parsed, original);
    }
}

// ============================================================================
// CSV Writer Tests
// ============================================================================

mod csv_writer_tests {
    use super::*;

    #[test]
    fn test_write_csv_tables_files() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("tables");

        let written = write_csv_tables(&sample(&UserSelection::Overall), &out).unwrap();
        let names: Vec<_> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();

        assert_eq!(
            names,
            [
                "stats.csv",
                "busy_users.csv",
                "monthly_timeline.csv",
                "daily_timeline.csv",
                "week_activity.csv",
                "month_activity.csv",
                "heatmap.csv",
                "word_cloud.csv",
                "common_words.csv",
                "emoji.csv",
            ]
        );

        let stats = fs::read_to_string(out.join("stats.csv")).unwrap();
        assert_eq!(stats, "Messages;Words;Media;Links\n5;13;1;1\n");
    }

    #[test]
    fn test_csv_readable_with_semicolon_delimiter() {
        let dir = tempdir().unwrap();
        write_csv_tables(&sample(&UserSelection::Overall), dir.path()).unwrap();

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .from_path(dir.path().join("busy_users.csv"))
            .unwrap();

        let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(headers, ["Name", "Messages", "Percent"]);

        let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(&rows[0][0], "Alice");
        assert_eq!(&rows[0][2], "40");
    }

    #[test]
    fn test_csv_escapes_delimiter_and_quotes() {
        let analysis = sample(&UserSelection::Overall);
        let tables = tables(&analysis);
        let words = tables.iter().find(|t| t.name == "common_words").unwrap();
        let csv = table_to_csv(words).unwrap();

        assert!(csv.contains("\"Alice;\";1"));
        assert!(csv.contains("\"\"\"quoted\"\"\";1"));
    }

    #[test]
    fn test_heatmap_table_shape() {
        let dir = tempdir().unwrap();
        write_csv_tables(&sample(&UserSelection::Overall), dir.path()).unwrap();

        let content = fs::read_to_string(dir.path().join("heatmap.csv")).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 8);
        assert!(lines[0].starts_with("Day;00-1;1-2;"));
        assert!(lines[0].ends_with(";23-00"));
        assert!(lines[1].starts_with("Monday;"));
        assert_eq!(lines[1].split(';').nth(11), Some("3"));
    }
}

// ============================================================================
// Text and format dispatch
// ============================================================================

mod format_tests {
    use super::*;

    #[test]
    fn test_text_report() {
        let text = to_text(&sample(&UserSelection::Overall));
        assert!(text.contains("Messages:  5"));
        assert!(text.contains("Links:     1"));
        assert!(text.contains("January-2024"));
    }

    #[test]
    fn test_write_to_format_each_format() {
        let dir = tempdir().unwrap();
        let analysis = sample(&UserSelection::Overall);

        let text = write_to_format(&analysis, dir.path().join("r.txt"), OutputFormat::Text).unwrap();
        assert_eq!(text.len(), 1);
        assert!(fs::read_to_string(&text[0]).unwrap().contains("Statistics for Overall"));

        let json = write_to_format(&analysis, dir.path().join("r.json"), OutputFormat::Json).unwrap();
        assert!(fs::read_to_string(&json[0]).unwrap().starts_with('{'));

        let csv = write_to_format(&analysis, dir.path().join("csv"), OutputFormat::Csv).unwrap();
        assert_eq!(csv.len(), 10);
    }

    #[test]
    fn test_to_format_string_csv_sections() {
        let out = to_format_string(&sample(&UserSelection::user("Carol")), OutputFormat::Csv).unwrap();
        assert!(out.starts_with("# stats\nMessages;Words;Media;Links\n1;2;0;0\n"));
        assert!(!out.contains("# busy_users"));
        assert!(out.contains("# emoji\nEmoji;Count\n"));
    }

    #[test]
    fn test_format_from_output_path() {
        let format = OutputFormat::from_path("out/report.json").unwrap();
        let out = to_format_string(&sample(&UserSelection::Overall), format).unwrap();
        assert!(out.contains("\"selection\": \"Overall\""));
    }
}
