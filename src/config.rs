//! Run configuration

use std::path::{Path, PathBuf};

use crate::{Error, Result, ICON_SIZES};

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Mix `self` towards `other` by `coverage` (0.0 keeps `self`).
    pub fn blend(self, other: Color, coverage: f32) -> Color {
        let t = coverage.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Color::rgb(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

/// Configuration for an icon generation run
///
/// The defaults reproduce the stock behaviour: three square icons
/// (`icon16.png`, `icon48.png`, `icon128.png`) with a white "S" on a
/// blue-grey background.
///
/// # Examples
///
/// ```
/// let cfg = iconsmith::IconConfig::default();
/// assert_eq!(cfg.sizes, vec![16, 48, 128]);
/// assert!(cfg.icon_path(48).ends_with("icon48.png"));
/// ```
#[derive(Debug, Clone)]
pub struct IconConfig {
    /// Pixel sizes to generate, in order
    pub sizes: Vec<u32>,
    /// Directory the icons are written to
    pub output_dir: PathBuf,
    /// Vector source used by the rasterizing backend
    pub svg_path: PathBuf,
    /// Canvas fill color for placeholders
    pub background: Color,
    /// Glyph color for placeholders
    pub foreground: Color,
    /// Text drawn on placeholders
    pub label: String,
    /// Font pixel size as a fraction of the canvas size
    pub font_scale: f32,
    /// Scalable fonts to try before the built-in bitmap font.
    ///
    /// Entries with a directory component are opened as-is; bare file names
    /// are searched for in the working directory and the platform font
    /// directories.
    pub font_candidates: Vec<PathBuf>,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            sizes: ICON_SIZES.to_vec(),
            output_dir: PathBuf::from("."),
            svg_path: PathBuf::from("icon.svg"),
            background: Color::rgb(90, 127, 184),
            foreground: Color::rgb(255, 255, 255),
            label: "S".to_string(),
            font_scale: 0.6,
            font_candidates: vec![
                PathBuf::from("/System/Library/Fonts/Helvetica.ttc"),
                PathBuf::from("arial.ttf"),
            ],
        }
    }
}

impl IconConfig {
    /// Output file for a given size: `<output_dir>/icon<size>.png`
    pub fn icon_path(&self, size: u32) -> PathBuf {
        icon_path_in(&self.output_dir, size)
    }

    /// Font pixel size used for a canvas of `size` pixels
    pub fn font_px(&self, size: u32) -> u32 {
        ((size as f32 * self.font_scale) as u32).max(1)
    }

    /// Reject configurations that cannot produce a valid icon
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(Error::ConfigError("no icon sizes requested".into()));
        }
        if let Some(zero) = self.sizes.iter().position(|&s| s == 0) {
            return Err(Error::ConfigError(format!("size #{} is zero", zero)));
        }
        if self.label.is_empty() {
            return Err(Error::ConfigError("label must not be empty".into()));
        }
        if !self.font_scale.is_finite() || self.font_scale <= 0.0 {
            return Err(Error::ConfigError(format!(
                "font scale must be positive, got {}",
                self.font_scale
            )));
        }
        Ok(())
    }
}

pub(crate) fn icon_path_in(dir: &Path, size: u32) -> PathBuf {
    dir.join(format!("icon{}.png", size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_stock_run() {
        let cfg = IconConfig::default();
        assert_eq!(cfg.sizes, vec![16, 48, 128]);
        assert_eq!(cfg.background, Color::rgb(90, 127, 184));
        assert_eq!(cfg.foreground, Color::rgb(255, 255, 255));
        assert_eq!(cfg.label, "S");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn icon_paths_embed_size() {
        let cfg = IconConfig {
            output_dir: PathBuf::from("icons"),
            ..Default::default()
        };
        assert_eq!(cfg.icon_path(16), PathBuf::from("icons/icon16.png"));
        assert_eq!(cfg.icon_path(128), PathBuf::from("icons/icon128.png"));
    }

    #[test]
    fn font_px_is_sixty_percent_floored() {
        let cfg = IconConfig::default();
        assert_eq!(cfg.font_px(16), 9);
        assert_eq!(cfg.font_px(48), 28);
        assert_eq!(cfg.font_px(128), 76);
        assert_eq!(cfg.font_px(1), 1);
    }

    #[test]
    fn validate_rejects_bad_input() {
        let zero = IconConfig { sizes: vec![16, 0], ..Default::default() };
        assert!(matches!(zero.validate(), Err(Error::ConfigError(_))));

        let empty = IconConfig { sizes: vec![], ..Default::default() };
        assert!(empty.validate().is_err());

        let no_label = IconConfig { label: String::new(), ..Default::default() };
        assert!(no_label.validate().is_err());

        let bad_scale = IconConfig { font_scale: f32::NAN, ..Default::default() };
        assert!(bad_scale.validate().is_err());
    }

    #[test]
    fn blend_interpolates_channels() {
        let bg = Color::rgb(0, 100, 200);
        let fg = Color::rgb(255, 255, 255);
        assert_eq!(bg.blend(fg, 0.0), bg);
        assert_eq!(bg.blend(fg, 1.0), fg);
        assert_eq!(bg.blend(fg, 0.5), Color::rgb(128, 178, 228));
    }
}
