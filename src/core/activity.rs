//! Activity by weekday, month and hour.
//!
//! Only records with a timestamp contribute. The heatmap always has the full
//! 7 x 24 grid so that charts keep a stable shape across selections.

use serde::{Deserialize, Serialize};

use super::counter::FrequencyCounter;
use super::filter::{UserSelection, select_records};
use crate::calendar::{CalendarNames, English, WEEKDAYS};
use crate::record::{MessageRecord, TimeBucket};

/// A named calendar bucket and its message count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityCount {
    pub name: String,
    pub messages: usize,
}

/// Messages per weekday name, busiest first (ties in first-seen order).
pub fn week_activity_map(records: &[MessageRecord], selection: &UserSelection) -> Vec<ActivityCount> {
    ranked(select_records(records, selection).filter_map(MessageRecord::day_name))
}

/// Messages per month name, busiest first (ties in first-seen order).
///
/// Months of different years share a bucket.
pub fn monthly_activity_map(
    records: &[MessageRecord],
    selection: &UserSelection,
) -> Vec<ActivityCount> {
    ranked(select_records(records, selection).filter_map(MessageRecord::month_name))
}

fn ranked<'a>(names: impl Iterator<Item = &'a str>) -> Vec<ActivityCount> {
    names
        .collect::<FrequencyCounter<&str>>()
        .into_ranked()
        .into_iter()
        .map(|(name, messages)| ActivityCount {
            name: name.to_string(),
            messages,
        })
        .collect()
}

/// Weekday x hour-bucket message counts.
///
/// Rows are weekdays Monday to Sunday, columns are the 24 [`TimeBucket`]
/// labels in hour order, unobserved cells are 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heatmap {
    /// Weekday names, one per row
    pub rows: Vec<String>,
    /// Time bucket labels, one per column
    pub columns: Vec<String>,
    /// `cells[row][column]`
    pub cells: Vec<Vec<usize>>,
}

impl Heatmap {
    fn empty(names: &dyn CalendarNames) -> Self {
        Self {
            rows: WEEKDAYS
                .iter()
                .map(|&d| names.weekday_name(d))
                .collect(),
            columns: TimeBucket::all().map(TimeBucket::label).collect(),
            cells: vec![vec![0; 24]; WEEKDAYS.len()],
        }
    }

    /// Count for a weekday name and bucket label, if both exist.
    pub fn get(&self, day_name: &str, bucket_label: &str) -> Option<usize> {
        let row = self.rows.iter().position(|r| r == day_name)?;
        let col = self.columns.iter().position(|c| c == bucket_label)?;
        Some(self.cells[row][col])
    }

    /// Sum of all cells.
    pub fn total(&self) -> usize {
        self.cells.iter().flatten().sum()
    }

    /// Largest cell value, 0 for an empty grid.
    pub fn max(&self) -> usize {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }
}

/// Builds the activity [`Heatmap`] for `selection`, labelled in English.
pub fn activity_heatmap(records: &[MessageRecord], selection: &UserSelection) -> Heatmap {
    activity_heatmap_with_names(records, selection, &English)
}

/// Builds the activity [`Heatmap`] with rows labelled by `names`.
///
/// Pass the names the records were parsed with so that
/// [`Heatmap::get`] accepts [`MessageRecord::day_name`].
pub fn activity_heatmap_with_names(
    records: &[MessageRecord],
    selection: &UserSelection,
    names: &dyn CalendarNames,
) -> Heatmap {
    let mut heatmap = Heatmap::empty(names);

    for cal in select_records(records, selection).filter_map(|r| r.calendar.as_ref()) {
        let row = cal.weekday().num_days_from_monday() as usize;
        let col = cal.time_bucket.hour() as usize;
        heatmap.cells[row][col] += 1;
    }

    heatmap
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ChatParser;

    // 3/4/24 is a Monday, 3/5/24 a Tuesday, 3/10/24 a Sunday.
    const CHAT: &str = "\
3/5/24, 14:30 - Alice: a
3/5/24, 14:45 - Bob: b
3/4/24, 0:10 - Alice: c
3/10/24, 23:59 - Bob: d
4/2/24, 9:00 - Alice: e
2/30/24, 9:00 - Alice: bad date
";

    fn records() -> Vec<MessageRecord> {
        ChatParser::new().parse_str(CHAT)
    }

    #[test]
    fn test_week_activity_map() {
        let map = week_activity_map(&records(), &UserSelection::Overall);
        // 4/2/24 is a Tuesday too
        assert_eq!(map[0], ActivityCount { name: "Tuesday".into(), messages: 3 });
        let names: Vec<_> = map.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["Tuesday", "Monday", "Sunday"]);
    }

    #[test]
    fn test_monthly_activity_map() {
        let map = monthly_activity_map(&records(), &UserSelection::Overall);
        assert_eq!(map[0], ActivityCount { name: "March".into(), messages: 4 });
        assert_eq!(map[1], ActivityCount { name: "April".into(), messages: 1 });
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_heatmap_shape_and_cells() {
        let heatmap = activity_heatmap(&records(), &UserSelection::Overall);

        assert_eq!(heatmap.rows.len(), 7);
        assert_eq!(heatmap.columns.len(), 24);
        assert_eq!(heatmap.rows[0], "Monday");
        assert_eq!(heatmap.rows[6], "Sunday");
        assert_eq!(heatmap.columns[0], "00-1");
        assert_eq!(heatmap.columns[23], "23-00");

        assert_eq!(heatmap.get("Tuesday", "14-15"), Some(2));
        assert_eq!(heatmap.get("Monday", "00-1"), Some(1));
        assert_eq!(heatmap.get("Sunday", "23-00"), Some(1));
        assert_eq!(heatmap.get("Tuesday", "9-10"), Some(1));
        assert_eq!(heatmap.get("Friday", "9-10"), Some(0));
        assert_eq!(heatmap.get("Funday", "9-10"), None);

        assert_eq!(heatmap.total(), 5);
        assert_eq!(heatmap.max(), 2);
    }

    #[test]
    fn test_heatmap_for_user() {
        let heatmap = activity_heatmap(&records(), &UserSelection::user("Bob"));
        assert_eq!(heatmap.total(), 2);
        assert_eq!(heatmap.get("Tuesday", "14-15"), Some(1));
    }

    #[test]
    fn test_empty_inputs() {
        assert!(week_activity_map(&[], &UserSelection::Overall).is_empty());
        assert!(monthly_activity_map(&[], &UserSelection::Overall).is_empty());
        let heatmap = activity_heatmap(&[], &UserSelection::Overall);
        assert_eq!(heatmap.total(), 0);
        assert_eq!(heatmap.rows.len(), 7);
    }

    #[test]
    fn test_heatmap_rows_follow_calendar_names() {
        struct Abbreviated;
        impl CalendarNames for Abbreviated {
            fn month_name(&self, month: u32) -> String {
                English.month_name(month).chars().take(3).collect()
            }
            fn weekday_name(&self, weekday: chrono::Weekday) -> String {
                weekday.to_string()
            }
        }

        let ts = chrono::NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        let record = MessageRecord::new("Alice", "hi").with_timestamp(ts, &Abbreviated);
        let records = [record];

        let heatmap = activity_heatmap_with_names(&records, &UserSelection::Overall, &Abbreviated);
        assert_eq!(heatmap.rows[0], "Mon");
        let day = records[0].day_name().unwrap();
        assert_eq!(day, "Tue");
        assert_eq!(heatmap.get(day, "14-15"), Some(1));

        // English labels don't know the abbreviated day name
        assert_eq!(activity_heatmap(&records, &UserSelection::Overall).get(day, "14-15"), None);
    }
}
