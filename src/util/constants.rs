// Auto Pulse - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "Auto Pulse";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "AutoPulse";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Report
// =============================================================================

/// Fixed first line of every generated pulse.
pub const REPORT_LABEL: &str = "PULSE TEXT: Start Of Day";

/// Default author name printed on the second header line.
pub const DEFAULT_REPORT_AUTHOR: &str = "Ben";

/// Label for the optional task-total footer.
pub const TOTAL_LABEL: &str = "Total Tasks Scheduled";

/// Hours credited per occurrence of a task line.
pub const SLOT_HOURS: f64 = 0.25;

/// Occurrences per whole hour; durations are exact multiples of a quarter.
pub const SLOTS_PER_HOUR: u32 = 4;

/// Header date format, e.g. `07/08/2026`.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Header weekday format: full English weekday name.
pub const WEEKDAY_FORMAT: &str = "%A";

// =============================================================================
// Input limits
// =============================================================================

/// Maximum accepted schedule size in bytes. Opened files beyond this are
/// refused with a status warning rather than processed.
pub const MAX_INPUT_BYTES: usize = 1024 * 1024; // 1 MiB

/// Maximum length of the configurable author name.
pub const MAX_AUTHOR_LEN: usize = 64;

// =============================================================================
// UI defaults
// =============================================================================

/// Default window size.
pub const WINDOW_WIDTH: f32 = 1200.0;
pub const WINDOW_HEIGHT: f32 = 600.0;

/// Minimum window size before the side-by-side text areas become unusable.
pub const MIN_WINDOW_WIDTH: f32 = 800.0;
pub const MIN_WINDOW_HEIGHT: f32 = 500.0;

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

/// Minimum visible rows in the schedule editor and pulse preview.
pub const EDITOR_MIN_ROWS: usize = 18;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
