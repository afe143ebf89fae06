//! Error types for icon generation

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for icon generation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating icons
#[derive(Error, Debug)]
pub enum Error {
    /// None of the requested rendering capabilities were compiled in
    #[error("no rendering capability available (tried: {tried}); {hint}")]
    MissingCapability { tried: String, hint: String },

    /// The vector source file does not exist
    #[error("input file not found: {}", .0.display())]
    MissingInput(PathBuf),

    /// Rendering or writing a single icon size failed
    #[error("failed to generate {} ({size}x{size})", .path.display())]
    SizeFailed {
        size: u32,
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },

    /// Failed to render or encode a bitmap
    #[error("Rendering failed: {0}")]
    RenderError(String),

    /// Failed to load a font
    #[error("Font error: {0}")]
    FontError(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Filesystem error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(feature = "draw")]
impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(e) => Error::Io(e),
            other => Error::RenderError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_failure_names_size_and_path() {
        let err = Error::SizeFailed {
            size: 48,
            path: PathBuf::from("out/icon48.png"),
            source: Box::new(Error::RenderError("boom".into())),
        };
        let msg = err.to_string();
        assert!(msg.contains("48x48"));
        assert!(msg.contains("out/icon48.png"));
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "Rendering failed: boom");
    }

    #[test]
    fn missing_input_names_path() {
        let err = Error::MissingInput(PathBuf::from("icon.svg"));
        assert_eq!(err.to_string(), "input file not found: icon.svg");
    }
}
