//! Board rendering: the scaled background and the drawn groups.
//!
//! Everything is positioned through the controller's viewport mapper, the same
//! transform used for hit testing.

use super::background::load_background;
use super::state::DrawApp;
use crate::constants::{MIN_RESULT_FONT_SIZE, RESULT_FONT_RATIO, RESULT_REGIONS};
use crate::types::Rect;
use eframe::egui;

/// Converts a viewport rectangle to screen space inside `board`.
fn to_screen(rect: Rect, board: egui::Rect) -> egui::Rect {
    egui::Rect::from_min_size(
        board.min + egui::vec2(rect.x, rect.y),
        egui::vec2(rect.w, rect.h),
    )
}

/// Font size for result text in a region of the given screen height.
pub fn result_font_size(region_height: f32) -> f32 {
    (region_height * RESULT_FONT_RATIO).max(MIN_RESULT_FONT_SIZE)
}

impl DrawApp {
    /// Loads and uploads the background texture on first use.
    pub fn ensure_background_loaded(&mut self, ctx: &egui::Context) {
        if self.background.attempted {
            return;
        }
        self.background.attempted = true;

        let max_side = ctx.input(|i| i.max_texture_side);
        match load_background(&self.background.path, max_side) {
            Ok(image) => {
                log::info!(
                    "Loaded background {} ({}x{})",
                    self.background.path.display(),
                    image.size[0],
                    image.size[1]
                );
                self.background.texture =
                    Some(ctx.load_texture("background", image, egui::TextureOptions::LINEAR));
            }
            Err(err) => {
                log::warn!("No background shown: {}", err);
            }
        }
    }

    /// Paints the background and every non-empty group.
    ///
    /// # Arguments
    ///
    /// * `painter` - The painter for the board area
    /// * `board` - Screen rectangle of the board
    pub fn render_board(&self, painter: &egui::Painter, board: egui::Rect) {
        let mapper = self.controller.mapper();

        if let Some(texture) = &self.background.texture {
            let target = to_screen(mapper.canvas_rect(), board);
            let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
            painter.image(texture.id(), target, uv, egui::Color32::WHITE);
        }

        let assignment = self.controller.assignment();
        for (label, region) in RESULT_REGIONS {
            if assignment.group(label).is_empty() {
                continue;
            }
            let screen_rect = to_screen(mapper.map_rect(region), board);
            let font = egui::FontId::proportional(result_font_size(screen_rect.height()));
            painter.text(
                screen_rect.center(),
                egui::Align2::CENTER_CENTER,
                assignment.display_text(label),
                font,
                egui::Color32::BLACK,
            );
        }
    }
}
