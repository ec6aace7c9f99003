//! User interface for the group draw.
//!
//! This module hosts the eframe application: it feeds window size, pointer
//! presses and the frame clock into the draw controller, paints the board, and
//! presents errors in a modal dialog.
//!
//! # Module Organization
//!
//! - `state` - Application state structures and the main DrawApp
//! - `canvas` - Board input handling and timer polling
//! - `rendering` - Drawing the background and the drawn groups
//! - `background` - Decoding PNG/SVG backgrounds
//! - `file_ops` - Roster reload through a native file picker

mod background;
mod canvas;
mod file_ops;
mod rendering;
mod state;

pub use state::{DrawApp, ErrorDialog, UiSettings};

use eframe::egui;

/// Storage key for persisted UI settings.
pub const SETTINGS_KEY: &str = "app_state";

impl eframe::App for DrawApp {
    /// Persist window geometry between restarts.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        match self.settings.to_json() {
            Ok(json) => {
                storage.set_string(SETTINGS_KEY, json);
            }
            Err(err) => {
                log::warn!("Failed to serialize app settings: {err}");
            }
        }
    }

    /// Main update function called by egui for each frame.
    ///
    /// Processes finished file operations and shortcuts, fires due timers, then
    /// draws the board and any open dialog.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_pending_operations();
        self.handle_shortcuts(ctx);
        self.poll_timers(ctx);

        // Restore native window size once per session
        if !self.applied_viewport_restore {
            if let Some((w, h)) = self.settings.window_inner_size {
                ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::vec2(w, h)));
            }
            self.applied_viewport_restore = true;
        }
        // Capture current window inner size to persist on save
        let size = ctx.input(|i| i.screen_rect().size());
        self.settings.window_inner_size = Some((size.x, size.y));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::WHITE))
            .show(ctx, |ui| {
                self.draw_board(ui);
            });

        self.draw_error_dialog(ctx);
    }
}

impl DrawApp {
    /// Handles Cmd/Ctrl+O (reload roster) and Escape/Enter (dismiss dialog).
    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let (open, dismiss) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::O) && i.modifiers.command,
                i.key_pressed(egui::Key::Escape) || i.key_pressed(egui::Key::Enter),
            )
        });
        if dismiss {
            self.dialog = None;
        }
        if open {
            self.open_roster_dialog(ctx);
        }
    }

    /// Shows the pending error, if any, until the user acknowledges it.
    fn draw_error_dialog(&mut self, ctx: &egui::Context) {
        let Some(dialog) = &self.dialog else {
            return;
        };
        let mut acknowledged = false;
        egui::Window::new(dialog.title.as_str())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(dialog.message.as_str());
                if ui.button("OK").clicked() {
                    acknowledged = true;
                }
            });
        if acknowledged {
            self.dialog = None;
        }
    }
}

#[cfg(test)]
mod tests;
