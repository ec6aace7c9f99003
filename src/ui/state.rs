//! Application state management structures.
//!
//! This module contains the main `DrawApp` and the smaller state structures it
//! is built from: the background image, the error dialog, pending file
//! operations, and the settings persisted between sessions.

use crate::controller::DrawController;
use crate::roster::RosterStore;
use crate::timer::TimerQueue;
use eframe::egui;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};

/// The controller type driven by the UI.
pub type AppController = DrawController<StdRng, TimerQueue>;

/// State of the background image shown behind the board.
pub struct BackgroundState {
    /// Image file to load
    pub path: PathBuf,
    /// Uploaded texture, once loaded
    pub texture: Option<egui::TextureHandle>,
    /// Whether loading has been attempted; failures are not retried every frame
    pub attempted: bool,
}

impl BackgroundState {
    /// Creates a background that will be loaded from `path` on the first frame.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            texture: None,
            attempted: false,
        }
    }
}

/// A modal message shown to the user until acknowledged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDialog {
    /// Window title
    pub title: String,
    /// Body text
    pub message: String,
}

/// Messages sent from async file operations back to the main app.
#[derive(Debug)]
pub enum FileOperationResult {
    /// The user picked a roster file to load
    RosterChosen(PathBuf),
    /// The user closed the picker without choosing
    Cancelled,
}

/// State related to file operations.
pub struct FileState {
    /// Roster file most recently loaded
    pub roster_path: Option<PathBuf>,
    /// Whether a file picker is currently open
    pub dialog_open: bool,
    /// Channel for receiving file operation results from async contexts
    pub file_operation_sender: Sender<FileOperationResult>,
    /// Receiving end of the file operation channel, drained every frame
    pub file_operation_receiver: Receiver<FileOperationResult>,
}

impl Default for FileState {
    fn default() -> Self {
        let (sender, receiver) = channel();
        Self {
            roster_path: None,
            dialog_open: false,
            file_operation_sender: sender,
            file_operation_receiver: receiver,
        }
    }
}

/// Settings persisted between sessions.
///
/// Only window geometry is kept; drawn groups are never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Last known window inner size in logical points
    pub window_inner_size: Option<(f32, f32)>,
}

impl UiSettings {
    /// Serializes the settings to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes settings from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// The main application structure.
///
/// Implements `eframe::App`; all draw logic lives in the controller and this
/// struct only adapts egui input and painting to it.
pub struct DrawApp {
    /// The interaction state machine
    pub controller: AppController,
    /// Background image state
    pub background: BackgroundState,
    /// Error dialog currently shown, if any
    pub dialog: Option<ErrorDialog>,
    /// File operations state
    pub file: FileState,
    /// Persisted settings
    pub settings: UiSettings,
    /// Whether the stored window geometry has been applied this session
    pub applied_viewport_restore: bool,
}

impl DrawApp {
    /// Creates the app around an already loaded roster.
    ///
    /// # Arguments
    ///
    /// * `roster` - Roster loaded at startup
    /// * `rng` - Random number generator used for draws
    /// * `background_path` - Background image to show behind the board
    pub fn new(roster: RosterStore, rng: StdRng, background_path: PathBuf) -> Self {
        Self {
            controller: DrawController::new(roster, rng, TimerQueue::new()),
            background: BackgroundState::new(background_path),
            dialog: None,
            file: FileState::default(),
            settings: UiSettings::default(),
            applied_viewport_restore: false,
        }
    }

    /// Applies settings restored from a previous session.
    pub fn with_settings(mut self, settings: UiSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Records the startup roster path; the reload picker opens in its directory.
    pub fn with_roster_path(mut self, path: PathBuf) -> Self {
        self.file.roster_path = Some(path);
        self
    }
}
