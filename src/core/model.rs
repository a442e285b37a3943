// Auto Pulse - core/model.rs
//
// Value types shared across the tally, report, and export paths.

use crate::util::constants;

/// One distinct schedule line with its accumulated occurrence count.
///
/// Identity is the exact untrimmed line text. The trim check only decides
/// whether a line participates at all, so "Task" and "  Task" are distinct
/// entries and keep their original spelling in the output.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct TaskEntry {
    /// Original line text, untrimmed.
    pub label: String,

    /// Number of times the line appeared in the schedule.
    pub occurrences: u32,
}

impl TaskEntry {
    /// Accumulated duration in hours: one quarter-hour per occurrence.
    /// Quarter multiples are exact in binary floating point.
    pub fn duration_hours(&self) -> f64 {
        f64::from(self.occurrences) * constants::SLOT_HOURS
    }
}

/// User-tunable report settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Name printed on the second header line.
    pub author: String,

    /// Whether to append the task-total footer.
    pub include_total: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            author: constants::DEFAULT_REPORT_AUTHOR.to_string(),
            include_total: true,
        }
    }
}
