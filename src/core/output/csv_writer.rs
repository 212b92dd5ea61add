//! CSV table writer.
//!
//! Each part of an [`Analysis`] becomes its own table so spreadsheet tools can
//! chart it directly. Tables use `;` as the delimiter and UTF-8.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::report::Analysis;
use crate::error::{ChatstatError, Result};

/// One named CSV table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    /// File stem, e.g. `"daily_timeline"`
    pub name: &'static str,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    fn new(name: &'static str, header: &[&str]) -> Self {
        Self {
            name,
            header: header.iter().map(|h| (*h).to_string()).collect(),
            rows: Vec::new(),
        }
    }

    fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }
}

/// Splits an analysis into tables.
///
/// The `busy_users` table is only present for the overall selection.
pub fn tables(analysis: &Analysis) -> Vec<CsvTable> {
    let mut out = Vec::new();

    let mut stats = CsvTable::new("stats", &["Messages", "Words", "Media", "Links"]);
    stats.push(vec![
        analysis.stats.messages.to_string(),
        analysis.stats.words.to_string(),
        analysis.stats.media_messages.to_string(),
        analysis.stats.links.to_string(),
    ]);
    out.push(stats);

    if let Some(busy) = &analysis.busy_users {
        let mut table = CsvTable::new("busy_users", &["Name", "Messages", "Percent"]);
        for (user, share) in busy.top.iter().zip(&busy.shares) {
            table.push(vec![
                user.name.clone(),
                user.messages.to_string(),
                share.percent.to_string(),
            ]);
        }
        out.push(table);
    }

    let mut monthly = CsvTable::new("monthly_timeline", &["Time", "Year", "Month", "Messages"]);
    for point in &analysis.monthly_timeline {
        monthly.push(vec![
            point.label.clone(),
            point.year.to_string(),
            point.month_number.to_string(),
            point.messages.to_string(),
        ]);
    }
    out.push(monthly);

    let mut daily = CsvTable::new("daily_timeline", &["Date", "Messages"]);
    for point in &analysis.daily_timeline {
        daily.push(vec![point.date.to_string(), point.messages.to_string()]);
    }
    out.push(daily);

    for (name, counts) in [
        ("week_activity", &analysis.week_activity),
        ("month_activity", &analysis.month_activity),
    ] {
        let mut table = CsvTable::new(name, &["Name", "Messages"]);
        for count in counts {
            table.push(vec![count.name.clone(), count.messages.to_string()]);
        }
        out.push(table);
    }

    let mut heatmap = CsvTable::new("heatmap", &["Day"]);
    heatmap.header.extend(analysis.heatmap.columns.iter().cloned());
    for (day, cells) in analysis.heatmap.rows.iter().zip(&analysis.heatmap.cells) {
        let mut row = vec![day.clone()];
        row.extend(cells.iter().map(ToString::to_string));
        heatmap.push(row);
    }
    out.push(heatmap);

    let mut cloud = CsvTable::new("word_cloud", &["Word", "Count", "Weight"]);
    for w in &analysis.word_cloud.words {
        cloud.push(vec![w.word.clone(), w.count.to_string(), w.weight.to_string()]);
    }
    out.push(cloud);

    let mut words = CsvTable::new("common_words", &["Word", "Count"]);
    for w in &analysis.common_words {
        words.push(vec![w.word.clone(), w.count.to_string()]);
    }
    out.push(words);

    let mut emoji = CsvTable::new("emoji", &["Emoji", "Count"]);
    for e in &analysis.emoji {
        emoji.push(vec![e.emoji.to_string(), e.count.to_string()]);
    }
    out.push(emoji);

    out
}

/// Renders one table as CSV text.
pub fn table_to_csv(table: &CsvTable) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    writer.write_record(&table.header)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ChatstatError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| ChatstatError::utf8("csv output", e))
}

/// Writes every table of `analysis` as `<dir>/<name>.csv`.
///
/// The directory is created if missing. Returns the written paths in table order.
pub fn write_csv_tables(analysis: &Analysis, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let mut written = Vec::new();
    for table in tables(analysis) {
        let path = dir.join(format!("{}.csv", table.name));
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b';')
            .from_path(&path)?;

        writer.write_record(&table.header)?;
        for row in &table.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;

        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalysisConfig;
    use crate::core::filter::UserSelection;
    use crate::core::report::analyze;
    use crate::links::UrlExtractor;
    use crate::parser::ChatParser;
    use tempfile::TempDir;

    const CHAT: &str = "\
3/5/24, 14:30 - Alice: Hello there 😀
3/5/24, 14:31 - Bob: Hi; how are you?
3/6/24, 9:00 - Alice: fine
";

    fn analysis(selection: &UserSelection) -> Analysis {
        let records = ChatParser::new().parse_str(CHAT);
        analyze(&records, selection, &UrlExtractor::new(), &AnalysisConfig::default())
    }

    fn find<'a>(tables: &'a [CsvTable], name: &str) -> &'a CsvTable {
        tables.iter().find(|t| t.name == name).unwrap()
    }

    #[test]
    fn test_tables_overall() {
        let tables = tables(&analysis(&UserSelection::Overall));
        assert_eq!(tables.len(), 10);

        let busy = find(&tables, "busy_users");
        assert_eq!(busy.rows[0], ["Alice", "2", "66.67"]);

        let heatmap = find(&tables, "heatmap");
        assert_eq!(heatmap.header.len(), 25);
        assert_eq!(heatmap.rows.len(), 7);
        assert_eq!(heatmap.rows[1][0], "Tuesday");
        assert_eq!(heatmap.rows[1][15], "2");
    }

    #[test]
    fn test_tables_user_has_no_busy_users() {
        let tables = tables(&analysis(&UserSelection::user("Alice")));
        assert_eq!(tables.len(), 9);
        assert!(tables.iter().all(|t| t.name != "busy_users"));
    }

    #[test]
    fn test_table_to_csv_semicolon_and_quoting() {
        let tables = tables(&analysis(&UserSelection::Overall));
        let csv = table_to_csv(find(&tables, "common_words")).unwrap();

        assert!(csv.starts_with("Word;Count\n"));
        // the token containing the delimiter is quoted
        assert!(csv.contains("\"Hi;\";1"));

        let daily = table_to_csv(find(&tables, "daily_timeline")).unwrap();
        assert_eq!(daily, "Date;Messages\n2024-03-05;2\n2024-03-06;1\n");
    }

    #[test]
    fn test_write_csv_tables() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("report");

        let written = write_csv_tables(&analysis(&UserSelection::Overall), &out).unwrap();

        assert_eq!(written.len(), 10);
        assert!(written.iter().all(|p| p.exists()));

        let monthly = std::fs::read_to_string(out.join("monthly_timeline.csv")).unwrap();
        assert_eq!(monthly, "Time;Year;Month;Messages\nMarch-2024;2024;3;3\n");
    }
}
