// Auto Pulse - ui/panels/editor.rs
//
// Schedule editor: the input half of the window, with the report
// options strip above the text area.

use crate::app::state::AppState;
use crate::util::constants;

/// Render the schedule editor into the given Ui.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.strong("Schedule");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.checkbox(&mut state.options.include_total, "Append task total");
            ui.separator();
            ui.add(
                egui::TextEdit::singleline(&mut state.options.author)
                    .desired_width(120.0)
                    .char_limit(constants::MAX_AUTHOR_LEN),
            );
            ui.label("Name:");
        });
    });
    ui.add_space(4.0);

    egui::ScrollArea::vertical()
        .id_salt("schedule_editor")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::multiline(&mut state.input_text)
                    .hint_text("Enter schedule \u{2014} one task per line")
                    .font(egui::TextStyle::Monospace)
                    .desired_rows(constants::EDITOR_MIN_ROWS)
                    .desired_width(f32::INFINITY),
            );
        });
}
