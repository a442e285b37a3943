// Auto Pulse - core/tally.rs
//
// Single-pass schedule tally. Any string input is valid; there are no
// error conditions on this path.

use crate::core::model::TaskEntry;
use std::collections::HashMap;

/// Tally the schedule text into distinct task entries in first-seen order.
///
/// Lines whose trimmed form is empty are skipped entirely. All other lines
/// count under their exact untrimmed text; repeats increment the existing
/// entry rather than appending a new one.
pub fn tally_schedule(input: &str) -> Vec<TaskEntry> {
    let mut entries: Vec<TaskEntry> = Vec::new();
    // Index into `entries` keyed by the exact line text.
    let mut seen: HashMap<String, usize> = HashMap::new();

    for line in input.lines() {
        if line.trim().is_empty() {
            continue;
        }
        match seen.get(line) {
            Some(&idx) => entries[idx].occurrences += 1,
            None => {
                seen.insert(line.to_string(), entries.len());
                entries.push(TaskEntry {
                    label: line.to_string(),
                    occurrences: 1,
                });
            }
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_no_entries() {
        assert!(tally_schedule("").is_empty());
    }

    #[test]
    fn whitespace_only_lines_are_skipped() {
        assert!(tally_schedule("\n   \n\t\n  \t  \n").is_empty());
    }

    #[test]
    fn distinct_lines_keep_first_seen_order() {
        let entries = tally_schedule("Standup\nCode review\nStandup\nEmail");
        let labels: Vec<_> = entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Standup", "Code review", "Email"]);
    }

    #[test]
    fn repeats_accumulate_occurrences() {
        let entries = tally_schedule("Call client\nCall client\nEmail report");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].occurrences, 2);
        assert_eq!(entries[0].duration_hours(), 0.5);
        assert_eq!(entries[1].occurrences, 1);
        assert_eq!(entries[1].duration_hours(), 0.25);
    }

    #[test]
    fn blank_lines_between_tasks_do_not_affect_counts() {
        let entries = tally_schedule("A\n\nA\n   \nB\n");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].occurrences, 2);
        assert_eq!(entries[1].occurrences, 1);
    }

    #[test]
    fn identity_is_the_untrimmed_line() {
        let entries = tally_schedule("Task\n  Task\nTask  ");
        let labels: Vec<_> = entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Task", "  Task", "Task  "]);
        assert!(entries.iter().all(|e| e.occurrences == 1));
    }

    #[test]
    fn crlf_input_is_split_like_lf() {
        let entries = tally_schedule("One\r\nOne\r\nTwo\r\n");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].label, "One");
        assert_eq!(entries[0].occurrences, 2);
    }
}
