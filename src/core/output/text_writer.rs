//! Plain-text report.

use std::fmt::Write;

use crate::core::report::Analysis;

/// Rows shown per ranked section.
const SECTION_ROWS: usize = 10;

/// Renders a human-readable summary of `analysis`.
///
/// Ranked sections show at most ten rows; the heatmap is reduced to the
/// busiest cell.
pub fn to_text(analysis: &Analysis) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_report(&mut out, analysis);
    out
}

fn write_report(out: &mut String, a: &Analysis) -> std::fmt::Result {
    writeln!(out, "📊 Statistics for {}", a.selection)?;
    writeln!(out, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;
    writeln!(out, "   Messages:  {}", a.stats.messages)?;
    writeln!(out, "   Words:     {}", a.stats.words)?;
    writeln!(out, "   Media:     {}", a.stats.media_messages)?;
    writeln!(out, "   Links:     {}", a.stats.links)?;

    if let Some(busy) = &a.busy_users {
        writeln!(out)?;
        writeln!(out, "👥 Most busy users:")?;
        for (user, share) in busy.top.iter().zip(&busy.shares) {
            writeln!(
                out,
                "   {:<24} {:>6}  ({}%)",
                user.name, user.messages, share.percent
            )?;
        }
    }

    if !a.monthly_timeline.is_empty() {
        writeln!(out)?;
        writeln!(out, "📅 Monthly timeline:")?;
        for point in &a.monthly_timeline {
            writeln!(out, "   {:<24} {:>6}", point.label, point.messages)?;
        }
    }

    if let (Some(first), Some(last)) = (a.daily_timeline.first(), a.daily_timeline.last()) {
        writeln!(out)?;
        writeln!(
            out,
            "📆 Active days: {} ({} to {})",
            a.daily_timeline.len(),
            first.date,
            last.date
        )?;
    }

    if let Some(day) = a.week_activity.first() {
        writeln!(out, "   Busiest day:    {} ({})", day.name, day.messages)?;
    }
    if let Some(month) = a.month_activity.first() {
        writeln!(out, "   Busiest month:  {} ({})", month.name, month.messages)?;
    }

    let peak = a.heatmap.max();
    if peak > 0 {
        let cell = a.heatmap.rows.iter().enumerate().find_map(|(r, day)| {
            let c = a.heatmap.cells[r].iter().position(|&n| n == peak)?;
            Some((day, &a.heatmap.columns[c]))
        });
        if let Some((day, bucket)) = cell {
            writeln!(out, "   Busiest slot:   {day} {bucket} ({peak})")?;
        }
    }

    if !a.common_words.is_empty() {
        writeln!(out)?;
        writeln!(out, "💬 Most common words:")?;
        for w in a.common_words.iter().take(SECTION_ROWS) {
            writeln!(out, "   {:<24} {:>6}", w.word, w.count)?;
        }
    }

    if let Some(top) = a.top_emoji() {
        writeln!(out)?;
        writeln!(out, "😀 Emoji ({} distinct, most used {}):", a.emoji.len(), top.emoji)?;
        for e in a.emoji.iter().take(SECTION_ROWS) {
            writeln!(out, "   {}  {}", e.emoji, e.count)?;
        }
    }

    Ok(())
}
