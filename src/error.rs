//! Error types for roster loading, drawing and application startup.

use std::path::PathBuf;

/// Failure to read a roster source as a whole.
///
/// Individual malformed rows never produce this error; they are skipped.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The roster file could not be opened
    #[error("failed to open roster {}: {source}", .path.display())]
    Open {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The roster source failed while being read
    #[error("failed to read roster: {0}")]
    Read(#[from] csv::Error),
}

/// Failure to draw a set of groups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DrawError {
    /// The requested group size is not one of the supported sizes
    #[error("group size {0} is not supported; only 2 or 3 per group")]
    InvalidGroupSize(usize),

    /// The roster holds fewer participants than the draw needs
    #[error("not enough players: at least {required} needed, {available} loaded")]
    InsufficientRoster {
        /// Participants needed for four groups of the requested size
        required: usize,
        /// Participants currently in the roster
        available: usize,
    },
}

/// Top-level error returned when the application cannot start or exits abnormally.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The roster could not be loaded at startup
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The async runtime backing file dialogs could not be created
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),

    /// The window or rendering backend failed
    #[error("user interface error: {0}")]
    Ui(#[from] eframe::Error),
}
