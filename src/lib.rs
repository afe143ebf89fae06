//! iconsmith
//!
//! Generates the square PNG icons a browser extension ships with
//! (`icon16.png`, `icon48.png`, `icon128.png`), either by rasterizing an SVG
//! or by drawing a single-letter placeholder.
//!
//! # Features
//!
//! - **`draw`** (default): placeholder drawing via `image` + `rusttype`
//! - **`svg`** (default): SVG rasterization via `resvg`
//!
//! Backends are chosen at runtime from an ordered list of capabilities, see
//! [`resolve_backend`].
//!
//! # Example
//!
//! ```no_run
//! use iconsmith::{generate_icons, resolve_backend, Capability, IconConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = IconConfig {
//!     output_dir: "icons".into(),
//!     ..Default::default()
//! };
//! let backend = resolve_backend(&[Capability::Draw, Capability::Svg], &config)?;
//! generate_icons(backend.as_ref(), &config, |icon| {
//!     println!("wrote {}", icon.path.display());
//! })?;
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use log::info;

pub mod backend;
pub mod config;
pub mod error;
pub mod logging;
pub mod text;

#[cfg(feature = "draw")]
pub mod placeholder;

#[cfg(feature = "svg")]
pub mod raster;

pub use backend::{resolve_backend, Capability, IconBackend};
pub use config::{Color, IconConfig};
pub use error::{Error, Result};

/// Icon sizes a browser extension manifest expects
pub const ICON_SIZES: [u32; 3] = [16, 48, 128];

/// An icon written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub size: u32,
    pub path: PathBuf,
}

/// Write one icon per configured size using `backend`.
///
/// Sizes are processed in order and `report` is called after each file is
/// written. The first failure aborts the run; icons written before it are
/// left in place.
pub fn generate_icons<F>(
    backend: &dyn IconBackend,
    config: &IconConfig,
    mut report: F,
) -> Result<Vec<GeneratedIcon>>
where
    F: FnMut(&GeneratedIcon),
{
    config.validate()?;
    std::fs::create_dir_all(&config.output_dir)?;

    let mut written = Vec::with_capacity(config.sizes.len());
    for &size in &config.sizes {
        let path = config.icon_path(size);
        backend
            .write_icon(size, &path)
            .map_err(|e| Error::SizeFailed {
                size,
                path: path.clone(),
                source: Box::new(e),
            })?;
        info!("{}: wrote {} ({}x{})", backend.name(), path.display(), size, size);

        let icon = GeneratedIcon { size, path };
        report(&icon);
        written.push(icon);
    }
    Ok(written)
}
