//! Mapping between the fixed design canvas and the physical viewport.
//!
//! All regions are authored on a fixed design canvas. The canvas is fitted into
//! the viewport with a uniform scale ("contain" fit) and centered, leaving
//! letterbox or pillarbox margins on the unused axis.

use crate::constants::{DESIGN_HEIGHT, DESIGN_WIDTH};
use crate::types::Rect;

/// Scale and offset taking design coordinates to viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportTransform {
    /// Horizontal scale, always equal to `scale_y`
    pub scale_x: f32,
    /// Vertical scale, always equal to `scale_x`
    pub scale_y: f32,
    /// Left margin in viewport pixels
    pub offset_x: f32,
    /// Top margin in viewport pixels
    pub offset_y: f32,
}

impl ViewportTransform {
    /// Unit scale, no offset.
    pub const IDENTITY: Self = Self {
        scale_x: 1.0,
        scale_y: 1.0,
        offset_x: 0.0,
        offset_y: 0.0,
    };
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Fits the design canvas into the current viewport and maps rectangles across.
#[derive(Debug, Clone)]
pub struct ViewportMapper {
    design_width: f32,
    design_height: f32,
    viewport: (f32, f32),
    transform: ViewportTransform,
}

impl Default for ViewportMapper {
    fn default() -> Self {
        Self::new(DESIGN_WIDTH, DESIGN_HEIGHT)
    }
}

impl ViewportMapper {
    /// Creates a mapper for a design canvas of the given size.
    ///
    /// The transform starts as identity until the first [`Self::update_viewport`].
    pub fn new(design_width: f32, design_height: f32) -> Self {
        Self {
            design_width,
            design_height,
            viewport: (0.0, 0.0),
            transform: ViewportTransform::IDENTITY,
        }
    }

    /// Recomputes the transform for a viewport of `width` by `height` pixels.
    ///
    /// If the viewport is wider than the design ratio the fit is limited by height,
    /// otherwise by width. A single scale factor is computed and stored for both
    /// axes so they can never drift apart. A non-positive or non-finite size falls
    /// back to the identity transform.
    ///
    /// # Arguments
    ///
    /// * `width` - Viewport width in pixels
    /// * `height` - Viewport height in pixels
    pub fn update_viewport(&mut self, width: f32, height: f32) {
        self.viewport = (width, height);

        let usable = width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0;
        if !usable {
            self.transform = ViewportTransform::IDENTITY;
            return;
        }

        let design_ratio = self.design_width / self.design_height;
        let viewport_ratio = width / height;
        let scale = if viewport_ratio > design_ratio {
            // Height-constrained: pillarbox
            height / self.design_height
        } else {
            // Width-constrained: letterbox
            width / self.design_width
        };

        let scaled_width = self.design_width * scale;
        let scaled_height = self.design_height * scale;
        self.transform = ViewportTransform {
            scale_x: scale,
            scale_y: scale,
            offset_x: (width - scaled_width) / 2.0,
            offset_y: (height - scaled_height) / 2.0,
        };
    }

    /// Maps a design-space rectangle into viewport space.
    pub fn map_rect(&self, rect: Rect) -> Rect {
        let t = &self.transform;
        Rect::new(
            t.offset_x + rect.x * t.scale_x,
            t.offset_y + rect.y * t.scale_y,
            rect.w * t.scale_x,
            rect.h * t.scale_y,
        )
    }

    /// The whole design canvas mapped into viewport space.
    ///
    /// This is where the background image is drawn.
    pub fn canvas_rect(&self) -> Rect {
        self.map_rect(Rect::new(0.0, 0.0, self.design_width, self.design_height))
    }

    /// The current transform.
    pub fn transform(&self) -> ViewportTransform {
        self.transform
    }

    /// The last viewport size passed to [`Self::update_viewport`].
    pub fn viewport_size(&self) -> (f32, f32) {
        self.viewport
    }

    /// The design canvas size.
    pub fn design_size(&self) -> (f32, f32) {
        (self.design_width, self.design_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() <= 1e-3 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn test_starts_as_identity() {
        let mapper = ViewportMapper::default();
        assert_eq!(mapper.transform(), ViewportTransform::IDENTITY);
        let rect = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(mapper.map_rect(rect), rect);
    }

    #[test]
    fn test_degenerate_viewport_falls_back_to_identity() {
        let mut mapper = ViewportMapper::default();
        mapper.update_viewport(1360.0, 765.0);
        for (w, h) in [(0.0, 765.0), (1360.0, 0.0), (-5.0, 100.0), (f32::NAN, 10.0)] {
            mapper.update_viewport(w, h);
            assert_eq!(mapper.transform(), ViewportTransform::IDENTITY);
        }
    }

    #[test]
    fn test_wide_viewport_is_pillarboxed() {
        let mut mapper = ViewportMapper::new(200.0, 100.0);
        mapper.update_viewport(400.0, 50.0);
        let t = mapper.transform();
        assert_eq!(t.scale_x, 0.5);
        assert_eq!(t.scale_y, 0.5);
        assert_eq!(t.offset_x, 150.0);
        assert_eq!(t.offset_y, 0.0);
    }

    #[test]
    fn test_tall_viewport_is_letterboxed() {
        let mut mapper = ViewportMapper::new(200.0, 100.0);
        mapper.update_viewport(100.0, 400.0);
        let t = mapper.transform();
        assert_eq!(t.scale_x, 0.5);
        assert_eq!(t.offset_x, 0.0);
        assert_eq!(t.offset_y, 175.0);
    }

    #[test]
    fn test_map_rect_applies_scale_and_offset() {
        let mut mapper = ViewportMapper::new(200.0, 100.0);
        mapper.update_viewport(400.0, 50.0);
        let mapped = mapper.map_rect(Rect::new(20.0, 40.0, 100.0, 10.0));
        assert_eq!(mapped, Rect::new(160.0, 20.0, 50.0, 5.0));
    }

    #[test]
    fn test_default_window_fits_design_canvas() {
        let mut mapper = ViewportMapper::default();
        mapper.update_viewport(1360.0, 765.0);
        let canvas = mapper.canvas_rect();
        assert!(canvas.x >= 0.0 && canvas.y >= 0.0);
        assert!(canvas.x + canvas.w <= 1360.0 + 1e-3);
        assert!(canvas.y + canvas.h <= 765.0 + 1e-3);
        // One axis is filled exactly.
        assert!(approx_eq(canvas.w, 1360.0) || approx_eq(canvas.h, 765.0));
    }

    proptest! {
        #[test]
        fn prop_scale_is_uniform_and_ratio_preserved(
            width in 1.0f32..10_000.0,
            height in 1.0f32..10_000.0,
        ) {
            let mut mapper = ViewportMapper::default();
            mapper.update_viewport(width, height);
            let t = mapper.transform();
            prop_assert_eq!(t.scale_x, t.scale_y);

            let canvas = mapper.canvas_rect();
            let ratio = canvas.w / canvas.h;
            prop_assert!(approx_eq(ratio, DESIGN_WIDTH / DESIGN_HEIGHT));
            prop_assert!(canvas.w <= width * 1.0001);
            prop_assert!(canvas.h <= height * 1.0001);
            prop_assert!(t.offset_x >= -1e-2 && t.offset_y >= -1e-2);
        }
    }
}
