// Auto Pulse - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the menu bar, editor/preview split, action row, and
// status bar. All work happens synchronously on the UI thread; the tally
// is a single pass over the editor contents.

use crate::app::state::AppState;
use crate::core::export;
use crate::ui;
use crate::util::constants;
use crate::util::error::AutoPulseError;
use std::path::Path;

/// The Auto Pulse application.
pub struct AutoPulseApp {
    pub state: AppState,
}

impl AutoPulseApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Replace the editor contents with a schedule read from disk.
    ///
    /// Oversized files are refused with a status warning; the tally itself
    /// accepts any string, the bound only guards the render/clipboard path.
    fn open_schedule(&mut self, path: std::path::PathBuf) {
        match read_schedule(&path) {
            Ok(content) if content.len() > constants::MAX_INPUT_BYTES => {
                self.state.status_message = format!(
                    "'{}' is {} bytes; the schedule limit is {} bytes.",
                    path.display(),
                    content.len(),
                    constants::MAX_INPUT_BYTES
                );
                tracing::warn!(path = %path.display(), bytes = content.len(), "Schedule file too large");
            }
            Ok(content) => {
                let lines = content.lines().count();
                self.state.input_text = content;
                self.state.status_message =
                    format!("Loaded '{}' ({lines} lines).", path.display());
                tracing::info!(path = %path.display(), lines, "Schedule loaded");
            }
            Err(e) => {
                self.state.status_message = e.to_string();
                tracing::warn!(error = %e, "Failed to read schedule");
            }
        }
    }

    /// Run one export flow: ask for a destination, create the file, hand it
    /// to the given writer, and surface the outcome in the status bar.
    fn export_with<F>(&mut self, filter_name: &str, extension: &str, default_name: &str, write: F)
    where
        F: FnOnce(&AppState, std::fs::File, &std::path::Path) -> Result<usize, crate::util::error::ExportError>,
    {
        let Some(dest) = rfd::FileDialog::new()
            .add_filter(filter_name, &[extension])
            .set_file_name(default_name)
            .save_file()
        else {
            return;
        };
        match std::fs::File::create(&dest) {
            Ok(f) => match write(&self.state, f, &dest) {
                Ok(n) => {
                    self.state.status_message =
                        format!("Exported to '{}' ({n} {}).", dest.display(),
                            if extension == "txt" { "bytes" } else { "tasks" });
                    tracing::info!(path = %dest.display(), "Export complete");
                }
                Err(e) => {
                    self.state.status_message = format!("Export failed: {e}");
                    tracing::warn!(error = %e, "Export failed");
                }
            },
            Err(e) => {
                self.state.status_message = format!("Cannot create file: {e}");
            }
        }
    }
}

/// Read a schedule file, keeping the path and operation in the error chain.
fn read_schedule(path: &Path) -> crate::util::error::Result<String> {
    std::fs::read_to_string(path).map_err(|e| AutoPulseError::Io {
        path: path.to_path_buf(),
        operation: "read",
        source: e,
    })
}

impl eframe::App for AutoPulseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Schedule\u{2026}").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Text files", &["txt"])
                            .pick_file()
                        {
                            self.open_schedule(path);
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    // Export sub-menu -- enabled only once a pulse exists
                    let has_pulse = self.state.has_pulse();
                    ui.add_enabled_ui(has_pulse, |ui| {
                        ui.menu_button("Export", |ui| {
                            if ui.button("Report (.txt)\u{2026}").clicked() {
                                self.export_with("Text", "txt", "pulse.txt", |state, f, dest| {
                                    export::export_text(&state.output_text, f, dest)
                                });
                                ui.close_menu();
                            }
                            if ui.button("Tally (.csv)\u{2026}").clicked() {
                                self.export_with("CSV", "csv", "tally.csv", |state, f, dest| {
                                    export::export_csv(&state.entries(), f, dest)
                                });
                                ui.close_menu();
                            }
                            if ui.button("Tally (.json)\u{2026}").clicked() {
                                self.export_with("JSON", "json", "tally.json", |state, f, dest| {
                                    export::export_json(&state.entries(), f, dest)
                                });
                                ui.close_menu();
                            }
                        });
                    });
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("Edit", |ui| {
                    if ui.button("Clear Input").clicked() {
                        self.state.clear_input();
                        ui.close_menu();
                    }
                    if ui.button("Clear All").clicked() {
                        self.state.clear_all();
                        ui.close_menu();
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.state.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(count) = self.state.last_task_count {
                        ui.label(format!(
                            "{count} task{} scheduled",
                            if count == 1 { "" } else { "s" }
                        ));
                    }
                    if !self.state.warnings.is_empty() {
                        ui.colored_label(
                            ui::theme::WARNING_TEXT,
                            format!("\u{26a0} {} config warning(s)", self.state.warnings.len()),
                        )
                        .on_hover_text(self.state.warnings.join("\n"));
                        ui.separator();
                    }
                });
            });
        });

        // Action row: Generate and Copy, centred under the text areas.
        egui::TopBottomPanel::bottom("action_row")
            .exact_height(ui::theme::ACTION_ROW_HEIGHT)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui::theme::PANEL_GAP);
                    ui.horizontal(|ui| {
                        // Centre the pair of buttons manually.
                        let button_width = ui::theme::ACTION_BUTTON_SIZE[0];
                        let total = button_width * 2.0 + ui::theme::PANEL_GAP;
                        let pad = (ui.available_width() - total).max(0.0) / 2.0;
                        ui.add_space(pad);

                        let generate = egui::Button::new(
                            egui::RichText::new("Generate").size(16.0).strong(),
                        )
                        .fill(ui::theme::ACCENT);
                        if ui
                            .add_sized(ui::theme::ACTION_BUTTON_SIZE, generate)
                            .clicked()
                        {
                            self.state.generate(chrono::Local::now().date_naive());
                        }

                        ui.add_space(ui::theme::PANEL_GAP);

                        ui.add_enabled_ui(self.state.has_pulse(), |ui| {
                            if ui
                                .add_sized(
                                    ui::theme::ACTION_BUTTON_SIZE,
                                    egui::Button::new("Copy to Clipboard"),
                                )
                                .clicked()
                            {
                                ctx.copy_text(self.state.output_text.clone());
                                self.state.status_message =
                                    "Pulse copied to clipboard.".to_string();
                                tracing::debug!("Pulse copied to clipboard");
                            }
                        });
                    });
                });
            });

        // Central area: schedule editor and pulse preview side by side.
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |columns| {
                ui::panels::editor::render(&mut columns[0], &mut self.state);
                ui::panels::preview::render(&mut columns[1], &mut self.state);
            });
        });

        // About dialog (modal-ish)
        ui::panels::about::render(ctx, &mut self.state);
    }
}
