// Auto Pulse - ui/theme.rs
//
// Layout constants and status colours.
// No dependencies on app state or business logic.

use egui::Color32;

/// Accent colour for the Generate button and the task-count badge.
pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246); // Blue 500

/// Colour for startup warnings shown in the status bar.
pub const WARNING_TEXT: Color32 = Color32::from_rgb(253, 186, 116); // Orange 300

/// Layout constants.
pub const PANEL_GAP: f32 = 8.0;
pub const ACTION_ROW_HEIGHT: f32 = 56.0;
pub const ACTION_BUTTON_SIZE: [f32; 2] = [200.0, 36.0];
