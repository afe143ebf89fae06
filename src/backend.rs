//! Rendering backends and the capability probe that picks one
//!
//! Which backends exist depends on the cargo features the crate was built
//! with. A caller lists the capabilities it accepts in order of preference;
//! the first one that was compiled in is initialized and used for the whole
//! run.

use std::fmt;
use std::path::Path;

use log::{debug, warn};

use crate::{Error, IconConfig, Result};

/// Something that can produce a square icon file of a given size
pub trait IconBackend {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Render one `size`×`size` icon and write it as PNG to `path`
    fn write_icon(&self, size: u32, path: &Path) -> Result<()>;
}

/// A rendering capability that may or may not be compiled in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Draw a labelled placeholder (feature `draw`)
    Draw,
    /// Rasterize the configured SVG (feature `svg`)
    Svg,
}

impl Capability {
    /// Cargo feature that provides this capability
    pub fn feature(self) -> &'static str {
        match self {
            Capability::Draw => "draw",
            Capability::Svg => "svg",
        }
    }

    /// Initialize the backend, or `None` when the capability is not compiled in
    #[cfg_attr(not(any(feature = "draw", feature = "svg")), allow(unused_variables))]
    pub fn probe(self, config: &IconConfig) -> Option<Result<Box<dyn IconBackend>>> {
        match self {
            #[cfg(feature = "draw")]
            Capability::Draw => Some(Ok(Box::new(crate::placeholder::PlaceholderBackend::new(
                config.clone(),
            )))),
            #[cfg(feature = "svg")]
            Capability::Svg => Some(
                crate::raster::SvgBackend::open(&config.svg_path)
                    .map(|b| Box::new(b) as Box<dyn IconBackend>),
            ),
            #[cfg(not(all(feature = "draw", feature = "svg")))]
            _ => None,
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.feature())
    }
}

/// Pick the first compiled-in capability from `order`.
///
/// Capabilities that are not compiled in are skipped. Once one is found its
/// initialization result is final: a missing SVG input is reported as an
/// error rather than falling through to the next capability.
pub fn resolve_backend(order: &[Capability], config: &IconConfig) -> Result<Box<dyn IconBackend>> {
    for (i, cap) in order.iter().enumerate() {
        match cap.probe(config) {
            Some(backend) => {
                let backend = backend?;
                if i > 0 {
                    warn!("preferred capability `{}` unavailable, using `{}`", order[0], cap);
                }
                debug!("using {} backend", backend.name());
                return Ok(backend);
            }
            None => debug!("capability `{}` not compiled in", cap),
        }
    }

    let tried: Vec<String> = order.iter().map(|c| c.to_string()).collect();
    let flags: Vec<String> = order
        .iter()
        .map(|c| format!("`--features {}`", c.feature()))
        .collect();
    let hint = if flags.is_empty() {
        "no capability was requested".to_string()
    } else {
        format!("rebuild with {}", flags.join(" or "))
    };
    Err(Error::MissingCapability {
        tried: tried.join(", "),
        hint,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_order_is_missing_capability() {
        let cfg = IconConfig::default();
        let err = resolve_backend(&[], &cfg).err().unwrap();
        assert!(matches!(err, Error::MissingCapability { .. }));
    }

    #[test]
    fn features_name_capabilities() {
        assert_eq!(Capability::Draw.to_string(), "draw");
        assert_eq!(Capability::Svg.feature(), "svg");
    }

    #[cfg(feature = "draw")]
    #[test]
    fn draw_is_preferred_when_compiled_in() {
        let cfg = IconConfig {
            svg_path: "/missing/icon.svg".into(),
            ..Default::default()
        };
        let backend = resolve_backend(&[Capability::Draw, Capability::Svg], &cfg).unwrap();
        assert_eq!(backend.name(), "placeholder");
    }

    #[cfg(feature = "svg")]
    #[test]
    fn svg_missing_input_is_fatal() {
        let cfg = IconConfig {
            svg_path: "/missing/icon.svg".into(),
            ..Default::default()
        };
        let err = resolve_backend(&[Capability::Svg], &cfg).err().unwrap();
        assert!(matches!(err, Error::MissingInput(_)));
    }

    #[cfg(not(feature = "svg"))]
    #[test]
    fn svg_alone_without_feature_reports_hint() {
        let cfg = IconConfig::default();
        let err = resolve_backend(&[Capability::Svg], &cfg).err().unwrap();
        assert!(err.to_string().contains("--features svg"));
    }
}
