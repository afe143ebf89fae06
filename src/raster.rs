//! SVG rasterization backend

use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::debug;
use resvg::{tiny_skia, usvg};

use crate::backend::IconBackend;
use crate::{Error, Result};

/// A parsed vector icon
pub struct SvgIcon {
    tree: usvg::Tree,
    source: PathBuf,
}

impl std::fmt::Debug for SvgIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SvgIcon")
            .field("source", &self.source)
            .field("width", &self.tree.size().width())
            .field("height", &self.tree.size().height())
            .finish()
    }
}

impl SvgIcon {
    /// Read and parse the SVG at `path`.
    ///
    /// Relative references inside the document resolve against its
    /// directory, and system fonts are loaded so `<text>` renders.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::MissingInput(path.to_path_buf()));
        }
        let data = std::fs::read(path)?;

        let mut opt = usvg::Options::default();
        opt.resources_dir = std::fs::canonicalize(path)
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()));
        Arc::make_mut(&mut opt.fontdb).load_system_fonts();

        let tree = usvg::Tree::from_data(&data, &opt)
            .map_err(|e| Error::RenderError(format!("{}: {}", path.display(), e)))?;
        debug!(
            "parsed {} ({}x{})",
            path.display(),
            tree.size().width(),
            tree.size().height()
        );
        Ok(Self {
            tree,
            source: path.to_path_buf(),
        })
    }

    /// Rasterize to exactly `size`×`size` pixels, stretching if the
    /// document is not square.
    pub fn render(&self, size: u32) -> Result<tiny_skia::Pixmap> {
        let mut pixmap = tiny_skia::Pixmap::new(size, size)
            .ok_or_else(|| Error::RenderError(format!("cannot allocate {}x{} pixmap", size, size)))?;
        let doc = self.tree.size();
        let transform =
            tiny_skia::Transform::from_scale(size as f32 / doc.width(), size as f32 / doc.height());
        resvg::render(&self.tree, transform, &mut pixmap.as_mut());
        Ok(pixmap)
    }
}

/// Backend that rasterizes a vector icon at each size
#[derive(Debug)]
pub struct SvgBackend {
    icon: SvgIcon,
}

impl SvgBackend {
    pub fn new(icon: SvgIcon) -> Self {
        Self { icon }
    }

    /// Load the vector icon, failing fast when it is missing
    pub fn open(path: &Path) -> Result<Self> {
        SvgIcon::load(path).map(Self::new)
    }
}

impl IconBackend for SvgBackend {
    fn name(&self) -> &'static str {
        "svg"
    }

    fn write_icon(&self, size: u32, path: &Path) -> Result<()> {
        let pixmap = self.icon.render(size)?;
        pixmap
            .save_png(path)
            .map_err(|e| Error::RenderError(format!("PNG encoding failed: {}", e)))
    }
}
