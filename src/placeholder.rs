//! Placeholder icon synthesis
//!
//! Each icon is a solid square with a single centered label drawn on top.

use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};
use log::debug;

use crate::backend::IconBackend;
use crate::text::{FontResolver, GlyphPlacement};
use crate::{IconConfig, Result};

/// Render the placeholder for one size without touching the filesystem
pub fn render_placeholder(size: u32, config: &IconConfig) -> RgbImage {
    let bg = config.background;
    let mut canvas = RgbImage::from_pixel(size, size, Rgb([bg.r, bg.g, bg.b]));

    let font = FontResolver::new(config.font_candidates.clone()).resolve(config.font_px(size));
    let bounds = font.measure(&config.label);
    let placement = GlyphPlacement::centered(size, bounds);
    debug!(
        "{}px: label {:?} bounds {:?} placed at ({}, {}) with {:?}",
        size, config.label, bounds, placement.x, placement.y, font
    );

    font.draw(&mut canvas, placement, &config.label, config.foreground);
    canvas
}

/// Backend that draws placeholders instead of reading a source image
#[derive(Debug, Clone)]
pub struct PlaceholderBackend {
    config: IconConfig,
}

impl PlaceholderBackend {
    pub fn new(config: IconConfig) -> Self {
        Self { config }
    }
}

impl IconBackend for PlaceholderBackend {
    fn name(&self) -> &'static str {
        "placeholder"
    }

    fn write_icon(&self, size: u32, path: &Path) -> Result<()> {
        let canvas = render_placeholder(size, &self.config);
        canvas.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn builtin_only() -> IconConfig {
        IconConfig {
            font_candidates: vec![PathBuf::from("/nonexistent/font.ttf")],
            ..Default::default()
        }
    }

    #[test]
    fn canvas_has_requested_dimensions() {
        let cfg = builtin_only();
        for size in [1, 16, 48, 128] {
            let img = render_placeholder(size, &cfg);
            assert_eq!(img.dimensions(), (size, size));
        }
    }

    #[test]
    fn corners_keep_background_and_label_is_drawn() {
        let cfg = builtin_only();
        let img = render_placeholder(48, &cfg);
        assert_eq!(img.get_pixel(0, 0).0, [90, 127, 184]);
        assert_eq!(img.get_pixel(47, 47).0, [90, 127, 184]);
        let lit = img.pixels().filter(|p| p.0 == [255, 255, 255]).count();
        assert!(lit > 0);
    }

    #[test]
    fn builtin_label_is_horizontally_centered() {
        let cfg = builtin_only();
        for size in [16u32, 48, 128] {
            let img = render_placeholder(size, &cfg);
            let ink_cols: Vec<u32> = (0..size)
                .filter(|&x| (0..size).any(|y| img.get_pixel(x, y).0 != [90, 127, 184]))
                .collect();
            let first = *ink_cols.first().unwrap();
            let last = *ink_cols.last().unwrap();
            let gap_left = first as i64;
            let gap_right = size as i64 - 1 - last as i64;
            assert!((gap_left - gap_right).abs() <= 1, "size {}: {} vs {}", size, gap_left, gap_right);
        }
    }
}
