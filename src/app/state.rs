// Auto Pulse - app/state.rs
//
// Application state management. Holds the schedule text, the most recent
// generated pulse, report options, and status for the status bar.
// Owned by the eframe::App implementation.

use crate::core::model::{ReportOptions, TaskEntry};
use crate::core::report::render_pulse;
use crate::core::tally::tally_schedule;
use chrono::NaiveDate;

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Raw schedule text in the editor.
    pub input_text: String,

    /// Most recently generated pulse text (empty until first Generate).
    pub output_text: String,

    /// Current report options (author, total footer).
    pub options: ReportOptions,

    /// Task count from the most recent Generate, if any.
    pub last_task_count: Option<usize>,

    /// Status message for the status bar.
    pub status_message: String,

    /// Non-fatal warnings from startup (config validation).
    pub warnings: Vec<String>,

    /// Whether to show the About dialog.
    pub show_about: bool,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state with the given report options.
    pub fn new(options: ReportOptions, debug_mode: bool) -> Self {
        Self {
            input_text: String::new(),
            output_text: String::new(),
            options,
            last_task_count: None,
            status_message: "Ready. Enter a schedule and press Generate.".to_string(),
            warnings: Vec::new(),
            show_about: false,
            debug_mode,
        }
    }

    /// Tally the current schedule text.
    ///
    /// Always recomputed from the editor contents; nothing is cached between
    /// invocations.
    pub fn entries(&self) -> Vec<TaskEntry> {
        tally_schedule(&self.input_text)
    }

    /// Generate the pulse for the given date into the output buffer.
    pub fn generate(&mut self, date: NaiveDate) {
        let entries = self.entries();
        self.output_text = render_pulse(&entries, date, &self.options);
        self.last_task_count = Some(entries.len());
        self.status_message = format!(
            "Generated pulse with {} task{}.",
            entries.len(),
            if entries.len() == 1 { "" } else { "s" }
        );
        tracing::info!(tasks = entries.len(), "Pulse generated");
    }

    /// Whether a pulse has been generated and is available to copy/export.
    pub fn has_pulse(&self) -> bool {
        !self.output_text.is_empty()
    }

    /// Clear the schedule editor only.
    pub fn clear_input(&mut self) {
        self.input_text.clear();
        self.status_message = "Schedule cleared.".to_string();
    }

    /// Clear all buffers and reset to initial state.
    pub fn clear_all(&mut self) {
        self.input_text.clear();
        self.output_text.clear();
        self.last_task_count = None;
        self.status_message = "Ready.".to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn generate_fills_output_and_status() {
        let mut state = AppState::new(ReportOptions::default(), false);
        state.input_text = "Call client\nCall client\nEmail report".to_string();
        state.generate(fixed_date());

        assert!(state.has_pulse());
        assert_eq!(state.last_task_count, Some(2));
        assert!(state.output_text.contains("1. Call client (0.5)"));
        assert_eq!(state.status_message, "Generated pulse with 2 tasks.");
    }

    #[test]
    fn generate_on_empty_input_reports_zero_tasks() {
        let mut state = AppState::new(ReportOptions::default(), false);
        state.generate(fixed_date());

        assert_eq!(state.last_task_count, Some(0));
        assert!(state.output_text.contains("Total Tasks Scheduled: 0"));
        assert_eq!(state.status_message, "Generated pulse with 0 tasks.");
    }

    #[test]
    fn clear_all_resets_buffers() {
        let mut state = AppState::new(ReportOptions::default(), false);
        state.input_text = "Standup".to_string();
        state.generate(fixed_date());
        state.clear_all();

        assert!(state.input_text.is_empty());
        assert!(!state.has_pulse());
        assert_eq!(state.last_task_count, None);
    }

    #[test]
    fn regenerating_reflects_edited_input() {
        let mut state = AppState::new(ReportOptions::default(), false);
        state.input_text = "A".to_string();
        state.generate(fixed_date());
        assert_eq!(state.last_task_count, Some(1));

        state.input_text.push_str("\nA\nB");
        state.generate(fixed_date());
        assert_eq!(state.last_task_count, Some(2));
        assert!(state.output_text.contains("1. A (0.5)"));
    }
}
