//! Font resolution and glyph drawing
//!
//! `FontResolver` walks an ordered list of scalable font candidates and
//! settles on the first one that loads. When none does, the built-in bitmap
//! font is used, so resolution itself never fails.

use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};
use log::debug;
use rusttype::{point, Font, PositionedGlyph, Scale};
use walkdir::WalkDir;

use super::{BuiltinFont, GlyphPlacement, TextBounds};
use crate::{Color, Error, Result};

/// A font ready to measure and draw labels
pub enum LabelFont {
    /// A TrueType/OpenType face rendered at a fixed pixel size
    Scalable {
        font: Font<'static>,
        scale: Scale,
        source: PathBuf,
    },
    /// The fixed-size bitmap font
    Builtin(BuiltinFont),
}

impl std::fmt::Debug for LabelFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LabelFont::Scalable { scale, source, .. } => f
                .debug_struct("Scalable")
                .field("source", source)
                .field("px", &scale.y)
                .finish(),
            LabelFont::Builtin(_) => f.write_str("Builtin"),
        }
    }
}

impl LabelFont {
    /// Load a scalable face from `path` at `px` pixels.
    ///
    /// Font collections (`.ttc`) use their first face.
    pub fn from_file(path: &Path, px: u32) -> Result<Self> {
        let data = std::fs::read(path)
            .map_err(|e| Error::FontError(format!("{}: {}", path.display(), e)))?;
        let font = Font::try_from_vec_and_index(data, 0).ok_or_else(|| {
            Error::FontError(format!("{}: not a usable TrueType/OpenType font", path.display()))
        })?;
        Ok(LabelFont::Scalable {
            font,
            scale: Scale::uniform(px as f32),
            source: path.to_path_buf(),
        })
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, LabelFont::Builtin(_))
    }

    /// Tight pixel bounding box of `text` drawn with its pen at the origin
    pub fn measure(&self, text: &str) -> TextBounds {
        match self {
            LabelFont::Scalable { font, scale, .. } => {
                layout(font, *scale, text, 0, 0)
                    .iter()
                    .filter_map(|g| g.pixel_bounding_box())
                    .fold(TextBounds::default(), |acc, bb| {
                        acc.union(TextBounds {
                            left: bb.min.x,
                            top: bb.min.y,
                            right: bb.max.x,
                            bottom: bb.max.y,
                        })
                    })
            }
            LabelFont::Builtin(builtin) => builtin.measure(text),
        }
    }

    /// Draw `text` onto `canvas` with its pen at `at`, clipping at the edges
    pub fn draw(&self, canvas: &mut RgbImage, at: GlyphPlacement, text: &str, color: Color) {
        match self {
            LabelFont::Scalable { font, scale, .. } => {
                for glyph in layout(font, *scale, text, at.x, at.y) {
                    let Some(bb) = glyph.pixel_bounding_box() else {
                        continue;
                    };
                    glyph.draw(|gx, gy, coverage| {
                        let x = bb.min.x + gx as i32;
                        let y = bb.min.y + gy as i32;
                        blend_pixel(canvas, x, y, color, coverage);
                    });
                }
            }
            LabelFont::Builtin(builtin) => {
                for (x, y) in builtin.pixels(text) {
                    blend_pixel(canvas, at.x + x, at.y + y, color, 1.0);
                }
            }
        }
    }
}

// Pen coordinates put the ascender line at `y`, so the baseline sits one
// ascent lower. Measuring and drawing share this, keeping the subpixel
// phase identical between the two.
fn layout(font: &Font<'static>, scale: Scale, text: &str, x: i32, y: i32) -> Vec<PositionedGlyph<'static>> {
    let ascent = font.v_metrics(scale).ascent;
    font.layout(text, scale, point(x as f32, y as f32 + ascent))
        .collect()
}

fn blend_pixel(canvas: &mut RgbImage, x: i32, y: i32, color: Color, coverage: f32) {
    if x < 0 || y < 0 || x >= canvas.width() as i32 || y >= canvas.height() as i32 {
        return;
    }
    let px = canvas.get_pixel_mut(x as u32, y as u32);
    let [r, g, b] = px.0;
    let mixed = Color::rgb(r, g, b).blend(color, coverage);
    *px = Rgb([mixed.r, mixed.g, mixed.b]);
}

/// Ordered font fallback chain ending in the built-in font
#[derive(Debug, Clone)]
pub struct FontResolver {
    candidates: Vec<PathBuf>,
    search_dirs: Vec<PathBuf>,
}

impl FontResolver {
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self {
            candidates,
            search_dirs: platform_font_dirs(),
        }
    }

    /// Replace the directories searched for bare font file names
    pub fn with_search_dirs(mut self, dirs: Vec<PathBuf>) -> Self {
        self.search_dirs = dirs;
        self
    }

    /// First candidate that loads at `px` pixels, else the built-in font
    pub fn resolve(&self, px: u32) -> LabelFont {
        for candidate in &self.candidates {
            match self.load(candidate, px) {
                Ok(font) => {
                    debug!("using font {} at {}px", candidate.display(), px);
                    return font;
                }
                Err(e) => debug!("font candidate {} unavailable: {}", candidate.display(), e),
            }
        }
        debug!("falling back to the built-in bitmap font");
        LabelFont::Builtin(BuiltinFont)
    }

    fn load(&self, candidate: &Path, px: u32) -> Result<LabelFont> {
        let path = self
            .locate(candidate)
            .ok_or_else(|| Error::FontError("not found".into()))?;
        LabelFont::from_file(&path, px)
    }

    fn locate(&self, candidate: &Path) -> Option<PathBuf> {
        let bare = candidate.parent().map_or(true, |p| p.as_os_str().is_empty());
        if !bare || candidate.exists() {
            return Some(candidate.to_path_buf());
        }
        let name = candidate.file_name()?.to_string_lossy().to_lowercase();
        self.search_dirs.iter().find_map(|dir| {
            WalkDir::new(dir)
                .follow_links(true)
                .into_iter()
                .filter_map(|entry| entry.ok())
                .find(|entry| {
                    entry.file_type().is_file()
                        && entry.file_name().to_string_lossy().to_lowercase() == name
                })
                .map(|entry| entry.into_path())
        })
    }
}

/// Directories searched for bare font names on this platform
pub fn platform_font_dirs() -> Vec<PathBuf> {
    let home = std::env::var_os("HOME").map(PathBuf::from);
    let mut dirs = Vec::new();
    if cfg!(windows) {
        let windir = std::env::var_os("WINDIR").unwrap_or_else(|| "C:\\Windows".into());
        dirs.push(PathBuf::from(windir).join("Fonts"));
    } else if cfg!(target_os = "macos") {
        dirs.push(PathBuf::from("/Library/Fonts"));
        dirs.push(PathBuf::from("/System/Library/Fonts"));
        if let Some(home) = &home {
            dirs.push(home.join("Library/Fonts"));
        }
    } else {
        let data_home = std::env::var_os("XDG_DATA_HOME")
            .map(PathBuf::from)
            .or_else(|| home.as_ref().map(|h| h.join(".local/share")));
        if let Some(data_home) = data_home {
            dirs.push(data_home.join("fonts"));
        }
        let data_dirs = std::env::var("XDG_DATA_DIRS")
            .unwrap_or_else(|_| "/usr/local/share:/usr/share".to_string());
        dirs.extend(
            data_dirs
                .split(':')
                .filter(|d| !d.is_empty())
                .map(|d| PathBuf::from(d).join("fonts")),
        );
        if let Some(home) = &home {
            dirs.push(home.join(".fonts"));
        }
    }
    dirs
}
