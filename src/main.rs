// ChatScribe - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Configuration loading and logging initialisation
// 3. Session restore (last-opened directory)
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::core::...` etc.
pub use chatscribe::app;
pub use chatscribe::core;
pub use chatscribe::platform;
pub use chatscribe::ui;
pub use chatscribe::util;

use clap::Parser;
use std::path::PathBuf;

/// ChatScribe - League of Legends game-log chat viewer.
///
/// Drop a client log (r3dlog.txt) onto the window to extract the in-game
/// chat as a plain-text transcript you can copy or save.
#[derive(Parser, Debug)]
#[command(name = "ChatScribe", version, about)]
struct Cli {
    /// Log file to load at startup (opens the drop zone if omitted).
    path: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Resolve platform paths and load config before logging init so the
    // configured level can take effect from the first real log line.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "ChatScribe starting"
    );

    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config validation warning");
    }

    // Create application state and restore the previous session.
    let mut state = app::state::AppState::new(platform_paths.data_dir.clone());
    state.restore_session();

    // A path given on the CLI is queued as if it had been dropped.
    if let Some(path) = cli.path {
        state.pending_file = Some(path);
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([560.0, 420.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| Ok(Box::new(gui::ChatScribeApp::new(cc, state, &config)))),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch ChatScribe GUI: {e}");
        std::process::exit(1);
    }
}
