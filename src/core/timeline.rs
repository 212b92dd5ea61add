//! Message counts over calendar time.
//!
//! Records without a timestamp have no calendar position and are left out.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::filter::{UserSelection, select_records};
use crate::record::MessageRecord;

/// Messages in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    pub year: i32,
    pub month_number: u32,
    pub month_name: String,
    pub messages: usize,
    /// `"MonthName-Year"`, e.g. `"March-2024"`
    pub label: String,
}

/// Messages on one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub messages: usize,
}

/// Message counts per calendar month, oldest first.
///
/// ```
/// use chatstat::parser::ChatParser;
/// use chatstat::core::filter::UserSelection;
/// use chatstat::core::timeline::monthly_timeline;
///
/// let records = ChatParser::new().parse_str(
///     "1/31/24, 9:00 - A: x\n2/1/24, 9:00 - B: y\n1/2/24, 9:00 - A: z\n",
/// );
/// let timeline = monthly_timeline(&records, &UserSelection::Overall);
///
/// assert_eq!(timeline[0].label, "January-2024");
/// assert_eq!(timeline[0].messages, 2);
/// assert_eq!(timeline[1].label, "February-2024");
/// ```
pub fn monthly_timeline(records: &[MessageRecord], selection: &UserSelection) -> Vec<MonthlyPoint> {
    let mut months: BTreeMap<(i32, u32), (&str, usize)> = BTreeMap::new();

    for cal in select_records(records, selection).filter_map(|r| r.calendar.as_ref()) {
        months
            .entry((cal.year, cal.month_number))
            .or_insert((cal.month_name.as_str(), 0))
            .1 += 1;
    }

    months
        .into_iter()
        .map(|((year, month_number), (month_name, messages))| MonthlyPoint {
            year,
            month_number,
            month_name: month_name.to_string(),
            messages,
            label: format!("{}-{}", month_name, year),
        })
        .collect()
}

/// Message counts per calendar date, oldest first. Dates without messages are absent.
pub fn daily_timeline(records: &[MessageRecord], selection: &UserSelection) -> Vec<DailyPoint> {
    let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();

    for date in select_records(records, selection).filter_map(MessageRecord::date_only) {
        *days.entry(date).or_default() += 1;
    }

    days.into_iter()
        .map(|(date, messages)| DailyPoint { date, messages })
        .collect()
}
