//! # Group Draw
//!
//! A desktop board that draws participants from a CSV roster into four colored
//! groups (red, yellow, blue, purple) of two or three, shows the result over a
//! background image, and clears itself ten minutes after the last draw.
//!
//! ## Features
//! - Fair sampling without replacement, with uniformly random group placement
//! - Aspect-preserving mapping from a fixed design canvas to any window size,
//!   shared by rendering and hit testing
//! - A small state machine with a single restartable auto-clear timer
//! - Roster reload from a native file picker (Cmd/Ctrl+O)

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod roster;
pub mod sampler;
pub mod timer;
mod types;
mod ui;
pub mod viewport;

// Re-export public types and functions
pub use config::LaunchConfig;
pub use controller::{DrawController, DrawFeedback, PointerOutcome};
pub use error::{AppError, DrawError, LoadError};
pub use roster::RosterStore;
pub use types::*;
pub use ui::DrawApp;

use constants::{INITIAL_WINDOW_SIZE, MIN_WINDOW_SIZE, WINDOW_TITLE};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ui::{UiSettings, SETTINGS_KEY};

/// Runs the group draw application.
///
/// The roster is loaded before the window opens; if it cannot be read the
/// application does not start. A tokio runtime is entered for the lifetime of
/// the window so file pickers can run without blocking the UI.
///
/// # Returns
///
/// Returns `Ok(())` when the window is closed, or an `AppError` if startup or the
/// UI backend fails.
///
/// # Example
///
/// ```no_run
/// use group_draw::{run_app, AppError, LaunchConfig};
///
/// fn main() -> Result<(), AppError> {
///     run_app(LaunchConfig::from_env())
/// }
/// ```
pub fn run_app(config: LaunchConfig) -> Result<(), AppError> {
    let mut roster = RosterStore::new();
    roster.load_from_path(&config.roster_path)?;

    let runtime = tokio::runtime::Runtime::new().map_err(AppError::Runtime)?;
    let _guard = runtime.enter();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([INITIAL_WINDOW_SIZE.0, INITIAL_WINDOW_SIZE.1])
            .with_min_inner_size([MIN_WINDOW_SIZE.0, MIN_WINDOW_SIZE.1]),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| {
            let settings = cc
                .storage
                .and_then(|storage| storage.get_string(SETTINGS_KEY))
                .and_then(|json| UiSettings::from_json(&json).ok())
                .unwrap_or_default();
            let app = DrawApp::new(roster, StdRng::from_os_rng(), config.background_path)
                .with_roster_path(config.roster_path)
                .with_settings(settings);
            Ok(Box::new(app))
        }),
    )?;
    Ok(())
}
