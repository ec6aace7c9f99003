//! Launch configuration: where the roster and background are read from.
//!
//! Both files default to sitting next to the executable (`gamer.csv` and
//! `background.png`). Either can be redirected with an environment variable.

use std::env;
use std::path::{Path, PathBuf};

/// Environment variable overriding the roster path.
pub const ROSTER_ENV: &str = "GROUP_DRAW_ROSTER";
/// Environment variable overriding the background image path.
pub const BACKGROUND_ENV: &str = "GROUP_DRAW_BACKGROUND";

const DEFAULT_ROSTER_FILE: &str = "gamer.csv";
const DEFAULT_BACKGROUND_FILE: &str = "background.png";

/// Paths the application reads at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
    /// CSV roster loaded before the window opens
    pub roster_path: PathBuf,
    /// Background image, PNG or SVG
    pub background_path: PathBuf,
}

impl LaunchConfig {
    /// Default paths inside `base_dir`.
    pub fn in_dir(base_dir: &Path) -> Self {
        Self {
            roster_path: base_dir.join(DEFAULT_ROSTER_FILE),
            background_path: base_dir.join(DEFAULT_BACKGROUND_FILE),
        }
    }

    /// Resolves the configuration from the environment.
    ///
    /// The base directory is the directory of the running executable, falling back
    /// to the working directory when it cannot be determined.
    pub fn from_env() -> Self {
        let base_dir = env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));
        Self::in_dir(&base_dir).with_overrides(|key| env::var_os(key).map(PathBuf::from))
    }

    /// Applies overrides looked up by environment variable name.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<PathBuf>) -> Self {
        if let Some(path) = lookup(ROSTER_ENV) {
            self.roster_path = path;
        }
        if let Some(path) = lookup(BACKGROUND_ENV) {
            self.background_path = path;
        }
        self
    }
}
