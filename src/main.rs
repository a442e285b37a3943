// Auto Pulse - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. config.toml loading and validation
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::core::...` etc.
pub use autopulse::app;
pub use autopulse::core;
pub use autopulse::platform;
pub use autopulse::ui;
pub use autopulse::util;

use clap::Parser;
use util::constants;

/// Compile-time-embedded icon PNG bytes.
///
/// Using `include_bytes!` ensures the asset is baked into the binary so the
/// icon is always available regardless of the working directory at runtime.
static ICON_PNG: &[u8] = include_bytes!("../assets/icon.png");

/// Decode the embedded PNG and return an `eframe`-compatible `IconData`.
///
/// Falls back to a transparent 1x1 placeholder if decoding fails so the
/// application always launches rather than panicking on a bad asset.
fn load_icon() -> egui::IconData {
    match image::load_from_memory(ICON_PNG) {
        Ok(img) => {
            let rgba = img.into_rgba8();
            let (width, height) = rgba.dimensions();
            egui::IconData {
                rgba: rgba.into_raw(),
                width,
                height,
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to decode icon PNG; using placeholder");
            egui::IconData {
                rgba: vec![0u8; 4],
                width: 1,
                height: 1,
            }
        }
    }
}

/// Scale the egui text styles to the configured body size.
///
/// Headings sit a step above the body size, small text a step below; the
/// relative steps match the egui defaults.
fn apply_font_size(ctx: &egui::Context, size: f32) {
    ctx.style_mut(|style| {
        for (text_style, font_id) in style.text_styles.iter_mut() {
            font_id.size = match text_style {
                egui::TextStyle::Heading => size + 4.0,
                egui::TextStyle::Small => (size - 2.5).max(8.0),
                _ => size,
            };
        }
    });
}

/// Auto Pulse - start-of-day schedule pulse generator.
///
/// Paste a schedule (one task per line), press Generate, and get a numbered
/// pulse report with per-task durations in quarter-hour units.
#[derive(Parser, Debug)]
#[command(name = "Auto Pulse", version, about)]
struct Cli {
    /// Report author name for this run (overrides config).
    #[arg(short = 'n', long = "name")]
    name: Option<String>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Resolve platform paths and load config before logging so the
    // configured level can take effect. Config I/O problems are carried as
    // warnings and reported once tracing is up.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);

    // Initialise logging subsystem
    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = constants::APP_VERSION,
        debug = cli.debug,
        "Auto Pulse starting"
    );

    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config validation warning");
    }

    // CLI --name overrides the configured author for this run.
    let options = core::model::ReportOptions {
        author: cli.name.unwrap_or_else(|| config.author.clone()),
        include_total: config.show_total,
    };

    let mut state = app::state::AppState::new(options, cli.debug);
    state.warnings = config_warnings;

    // The icon is applied at two levels:
    //   1. OS-level (Windows EXE resource) -- embedded by build.rs via winres.
    //      This covers the taskbar, Alt+Tab, title bar, and Explorer.
    //   2. Runtime (eframe viewport) -- loaded here from the PNG asset.
    //      This covers the eframe-managed window icon on all platforms and
    //      acts as the canonical source on Linux/macOS.
    let icon_data = load_icon();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                constants::APP_NAME,
                constants::APP_VERSION
            ))
            .with_inner_size([constants::WINDOW_WIDTH, constants::WINDOW_HEIGHT])
            .with_min_inner_size([constants::MIN_WINDOW_WIDTH, constants::MIN_WINDOW_HEIGHT])
            .with_icon(icon_data),
        ..Default::default()
    };

    let dark_mode = config.dark_mode;
    let font_size = config.font_size;

    let result = eframe::run_native(
        constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(if dark_mode {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            });
            apply_font_size(&cc.egui_ctx, font_size);
            Ok(Box::new(gui::AutoPulseApp::new(state)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch Auto Pulse GUI: {e}");
        std::process::exit(1);
    }
}
