//! Shared application-wide constants.
//! Centralizes the fixed layout of the draw board and the timing of the auto-clear.

use crate::types::{ButtonLabel, GroupLabel, Rect};
use std::time::Duration;

// Design canvas
/// Width of the logical design canvas in design units.
pub const DESIGN_WIDTH: f32 = 6826.0;
/// Height of the logical design canvas in design units.
pub const DESIGN_HEIGHT: f32 = 3840.0;

// Regions
/// Result regions in declared label order (red, yellow, blue, purple).
pub const RESULT_REGIONS: [(GroupLabel, Rect); 4] = [
    (GroupLabel::Red, Rect::new(1705.0, 651.0, 1595.0, 768.0)),
    (GroupLabel::Yellow, Rect::new(3555.0, 651.0, 1595.0, 768.0)),
    (GroupLabel::Blue, Rect::new(1705.0, 1711.0, 1595.0, 768.0)),
    (GroupLabel::Purple, Rect::new(3555.0, 1711.0, 1595.0, 768.0)),
];
/// Button regions in hit-test order: "two" is tested before "three".
pub const BUTTON_REGIONS: [(ButtonLabel, Rect); 2] = [
    (ButtonLabel::Two, Rect::new(1942.0, 2743.0, 1386.0, 274.0)),
    (ButtonLabel::Three, Rect::new(3514.0, 2743.0, 1386.0, 274.0)),
];

// Drawing
/// Group sizes the sampler accepts.
pub const SUPPORTED_GROUP_SIZES: [usize; 2] = [2, 3];
/// How long a draw stays on screen before the board is cleared.
pub const AUTO_CLEAR_DURATION: Duration = Duration::from_millis(600_000);

// Window
/// Window title.
pub const WINDOW_TITLE: &str = "Random Group Draw";
/// Initial window inner size in logical points.
pub const INITIAL_WINDOW_SIZE: (f32, f32) = (1360.0, 765.0);
/// Minimum window inner size in logical points.
pub const MIN_WINDOW_SIZE: (f32, f32) = (800.0, 450.0);

// Text
/// Result text height as a fraction of the mapped result region height.
pub const RESULT_FONT_RATIO: f32 = 0.35;
/// Smallest font size used for result text, in points.
pub const MIN_RESULT_FONT_SIZE: f32 = 10.0;
