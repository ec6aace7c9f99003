//! Background image loading.
//!
//! PNG files are decoded with tiny-skia; SVG files are rasterised with resvg.
//! Images larger than the GPU texture limit are scaled down before upload.

use eframe::egui;
use std::path::Path;
use std::sync::Arc;
use tiny_skia::{FilterQuality, Pixmap, PixmapPaint, Transform};

/// Longest side, in pixels, an SVG background is rasterised at.
const SVG_RASTER_SIDE: f32 = 2048.0;

/// Failure to turn a background file into an image.
#[derive(Debug, thiserror::Error)]
pub enum BackgroundError {
    /// The file could not be read
    #[error("failed to read background: {0}")]
    Read(#[from] std::io::Error),

    /// The PNG data could not be decoded
    #[error("failed to decode PNG background: {0}")]
    Png(String),

    /// The SVG document could not be parsed
    #[error("failed to parse SVG background: {0}")]
    Svg(#[from] usvg::Error),

    /// A pixel buffer of the given size could not be allocated
    #[error("cannot allocate {0}x{1} background")]
    Allocate(u32, u32),
}

/// Loads the background at `path` as an egui image no larger than `max_side`.
pub fn load_background(
    path: &Path,
    max_side: usize,
) -> Result<egui::ColorImage, BackgroundError> {
    let data = std::fs::read(path)?;
    let is_svg = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

    let pixmap = if is_svg {
        rasterize_svg(&data)?
    } else {
        Pixmap::decode_png(&data).map_err(|e| BackgroundError::Png(e.to_string()))?
    };
    let pixmap = fit_within(pixmap, max_side as u32)?;

    Ok(egui::ColorImage::from_rgba_premultiplied(
        [pixmap.width() as usize, pixmap.height() as usize],
        pixmap.data(),
    ))
}

fn rasterize_svg(data: &[u8]) -> Result<Pixmap, BackgroundError> {
    let mut opt = usvg::Options::default();
    let mut db = fontdb::Database::new();
    db.load_system_fonts();
    opt.fontdb = Arc::new(db);

    let tree = usvg::Tree::from_data(data, &opt)?;
    let size = tree.size();
    let scale = SVG_RASTER_SIDE / size.width().max(size.height());
    let width = (size.width() * scale).round().max(1.0) as u32;
    let height = (size.height() * scale).round().max(1.0) as u32;

    let mut pixmap = Pixmap::new(width, height).ok_or(BackgroundError::Allocate(width, height))?;
    resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());
    Ok(pixmap)
}

/// Scales `pixmap` down so neither side exceeds `max_side`.
fn fit_within(pixmap: Pixmap, max_side: u32) -> Result<Pixmap, BackgroundError> {
    let longest = pixmap.width().max(pixmap.height());
    if max_side == 0 || longest <= max_side {
        return Ok(pixmap);
    }

    let scale = max_side as f32 / longest as f32;
    let width = ((pixmap.width() as f32 * scale).floor() as u32).max(1);
    let height = ((pixmap.height() as f32 * scale).floor() as u32).max(1);
    let mut scaled = Pixmap::new(width, height).ok_or(BackgroundError::Allocate(width, height))?;
    let paint = PixmapPaint {
        quality: FilterQuality::Bicubic,
        ..PixmapPaint::default()
    };
    scaled.draw_pixmap(
        0,
        0,
        pixmap.as_ref(),
        &paint,
        Transform::from_scale(scale, scale),
        None,
    );
    log::debug!(
        "Scaled background from {}x{} to {}x{}",
        pixmap.width(),
        pixmap.height(),
        width,
        height
    );
    Ok(scaled)
}
