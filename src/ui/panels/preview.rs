// Auto Pulse - ui/panels/preview.rs
//
// Pulse preview: the output half of the window. Read-only but selectable,
// so partial copies work without going through the clipboard button.

use crate::app::state::AppState;
use crate::util::constants;

/// Render the pulse preview into the given Ui.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.strong("Pulse");
        if let Some(count) = state.last_task_count {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.weak(format!(
                    "{count} task{}",
                    if count == 1 { "" } else { "s" }
                ));
            });
        }
    });
    ui.add_space(4.0);

    egui::ScrollArea::vertical()
        .id_salt("pulse_preview")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            // An immutable &str keeps the widget read-only while still
            // allowing selection.
            ui.add(
                egui::TextEdit::multiline(&mut state.output_text.as_str())
                    .hint_text("Output")
                    .font(egui::TextStyle::Monospace)
                    .desired_rows(constants::EDITOR_MIN_ROWS)
                    .desired_width(f32::INFINITY),
            );
        });
}
