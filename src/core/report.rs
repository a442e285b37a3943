// Auto Pulse - core/report.rs
//
// Pulse text rendering. The caller supplies the report date so this layer
// stays clock-free and deterministic under test.

use crate::core::model::{ReportOptions, TaskEntry};
use crate::util::constants;
use chrono::NaiveDate;

/// Render the pulse report for the given entries and date.
///
/// Layout: fixed label line, author line, `<Weekday> <DD/MM/YYYY>`, a blank
/// line, then the numbered task list. When `opts.include_total` is set a
/// task-total footer follows, separated from a non-empty list by one blank
/// line. Empty entries produce a header-only report (total 0 if enabled).
pub fn render_pulse(entries: &[TaskEntry], date: NaiveDate, opts: &ReportOptions) -> String {
    let mut out = String::new();

    out.push_str(constants::REPORT_LABEL);
    out.push('\n');
    out.push_str(&opts.author);
    out.push('\n');
    out.push_str(&format!(
        "{} {}\n\n",
        date.format(constants::WEEKDAY_FORMAT),
        date.format(constants::DATE_FORMAT)
    ));

    for (idx, entry) in entries.iter().enumerate() {
        out.push_str(&format!(
            "{}. {} ({})\n",
            idx + 1,
            entry.label,
            format_duration(entry.occurrences)
        ));
    }

    if opts.include_total {
        if !entries.is_empty() {
            out.push('\n');
        }
        out.push_str(&format!("{}: {}\n", constants::TOTAL_LABEL, entries.len()));
    }

    out
}

/// Format an accumulated duration for display.
///
/// Whole hours keep one decimal so a duration always reads as an hour
/// figure; fractional quarters use the shortest float form.
fn format_duration(occurrences: u32) -> String {
    if occurrences % constants::SLOTS_PER_HOUR == 0 {
        format!("{}.0", occurrences / constants::SLOTS_PER_HOUR)
    } else {
        format!("{}", f64::from(occurrences) * constants::SLOT_HOURS)
    }
}
