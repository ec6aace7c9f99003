//! File operations for reloading the roster.
//!
//! The native file picker runs on the tokio runtime so the UI keeps painting;
//! the chosen path comes back over a channel and is loaded on the UI thread.

use super::state::{DrawApp, ErrorDialog, FileOperationResult};
use eframe::egui;
use std::path::Path;

impl DrawApp {
    /// Opens a native file picker for a new roster CSV.
    ///
    /// Does nothing if a picker is already open.
    pub fn open_roster_dialog(&mut self, ctx: &egui::Context) {
        if self.file.dialog_open {
            return;
        }
        self.file.dialog_open = true;

        let ctx = ctx.clone();
        let sender = self.file.file_operation_sender.clone();
        let start_dir = self
            .file
            .roster_path
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf);

        tokio::spawn(async move {
            let mut dialog = rfd::AsyncFileDialog::new().add_filter("CSV", &["csv"]);
            if let Some(dir) = start_dir {
                dialog = dialog.set_directory(dir);
            }
            match dialog.pick_file().await {
                Some(handle) => {
                    let _ = sender.send(FileOperationResult::RosterChosen(
                        handle.path().to_path_buf(),
                    ));
                }
                None => {
                    log::debug!("Roster dialog cancelled");
                    let _ = sender.send(FileOperationResult::Cancelled);
                }
            }
            ctx.request_repaint();
        });
    }

    /// Processes completed file operations.
    ///
    /// A chosen roster replaces the current one. If it cannot be read the current
    /// roster stays in place and an error dialog is shown.
    pub fn handle_pending_operations(&mut self) {
        while let Ok(result) = self.file.file_operation_receiver.try_recv() {
            self.file.dialog_open = false;
            match result {
                FileOperationResult::RosterChosen(path) => self.reload_roster(&path),
                FileOperationResult::Cancelled => {}
            }
        }
    }

    /// Loads the roster at `path`, reporting failures in a dialog.
    pub fn reload_roster(&mut self, path: &Path) {
        match self.controller.reload_roster(path) {
            Ok(count) => {
                self.file.roster_path = Some(path.to_path_buf());
                log::info!("Roster reloaded with {} participants", count);
            }
            Err(err) => {
                log::error!("Roster reload failed: {}", err);
                let kept = self.controller.roster().count();
                self.dialog = Some(ErrorDialog {
                    title: "Roster reload failed".to_string(),
                    message: format!("{err}\nThe current roster of {kept} players is kept."),
                });
            }
        }
    }
}
