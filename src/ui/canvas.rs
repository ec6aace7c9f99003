//! Board interaction.
//!
//! This module turns egui input into controller events: the panel size becomes
//! the viewport, primary presses become pointer-down events in viewport
//! coordinates, and the egui clock drives the auto-clear timer.

use super::state::{DrawApp, ErrorDialog};
use crate::controller::{DrawFeedback, PointerOutcome};
use crate::error::DrawError;
use crate::types::{GroupAssignment, Point};
use eframe::egui;
use std::time::Duration;

/// Bridges controller feedback to egui: repaint on change, dialog on failure.
pub struct UiFeedback<'a> {
    /// Context to request repaints on
    pub ctx: &'a egui::Context,
    /// Slot the error dialog is written to
    pub dialog: &'a mut Option<ErrorDialog>,
}

impl DrawFeedback for UiFeedback<'_> {
    fn assignment_changed(&mut self, _assignment: &GroupAssignment) {
        self.ctx.request_repaint();
    }

    fn draw_failed(&mut self, error: &DrawError) {
        *self.dialog = Some(ErrorDialog {
            title: "Draw failed".to_string(),
            message: error.to_string(),
        });
        self.ctx.request_repaint();
    }
}

impl DrawApp {
    /// Fires any due auto-clear timers against the egui clock.
    ///
    /// Also schedules a repaint for when the next timer is due, so the board
    /// clears on time even if no input arrives.
    pub fn poll_timers(&mut self, ctx: &egui::Context) {
        let now = Duration::from_secs_f64(ctx.input(|i| i.time).max(0.0));
        let fired = self.controller.scheduler_mut().advance(now);
        let mut feedback = UiFeedback {
            ctx,
            dialog: &mut self.dialog,
        };
        for handle in fired {
            self.controller.timer_fired(handle, &mut feedback);
        }

        if let Some(wait) = self.controller.scheduler().time_until_next() {
            ctx.request_repaint_after(wait);
        }
    }

    /// Draws the board filling the available space and handles its input.
    ///
    /// # Arguments
    ///
    /// * `ui` - The egui UI to allocate the board in
    pub fn draw_board(&mut self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::click());
        let board_rect = response.rect;

        self.controller.resize(board_rect.width(), board_rect.height());
        self.handle_board_press(ui, board_rect);

        self.ensure_background_loaded(ui.ctx());
        self.render_board(&painter, board_rect);
    }

    /// Forwards a primary press inside the board to the controller.
    fn handle_board_press(&mut self, ui: &egui::Ui, board_rect: egui::Rect) {
        // While a dialog is open the board does not react to presses
        if self.dialog.is_some() {
            return;
        }

        let press = ui.input(|i| {
            if i.pointer.primary_pressed() {
                i.pointer.press_origin()
            } else {
                None
            }
        });
        let Some(pos) = press else {
            return;
        };
        if !board_rect.contains(pos) {
            return;
        }

        let local = pos - board_rect.min;
        let mut feedback = UiFeedback {
            ctx: ui.ctx(),
            dialog: &mut self.dialog,
        };
        match self
            .controller
            .pointer_down(Point::new(local.x, local.y), &mut feedback)
        {
            PointerOutcome::Consumed(button) => {
                log::debug!("Draw button {:?} pressed", button);
            }
            PointerOutcome::PassThrough => {}
        }
    }
}
