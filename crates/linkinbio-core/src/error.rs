//! Error types for the link-in-bio core
//!
//! Rendering itself never fails; only loading documents from disk does.

use thiserror::Error;

/// Problems found while validating a theme document
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ThemeError {
    /// The document root is not a JSON object
    #[error("Theme root must be an object, found {0}")]
    NotAnObject(&'static str),

    /// An attribute has the wrong type or an unsupported value
    #[error("Invalid theme attribute at {path}: {reason}")]
    InvalidAttribute { path: String, reason: String },

    /// `ThemeConfig::install` was called twice
    #[error("Theme already installed for this process")]
    AlreadyInstalled,
}

/// Main error type for link-in-bio operations
#[derive(Error, Debug)]
pub enum LinkInBioError {
    /// Theme document failed validation
    #[error("Theme error: {0}")]
    Theme(#[from] ThemeError),

    /// Malformed JSON or a document that doesn't match the expected shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A document file could not be read
    #[error("Failed to load {path}: {source}")]
    Load {
        path: String,
        #[source]
        source: Box<LinkInBioError>,
    },
}

impl LinkInBioError {
    /// Attach the path of the document being loaded
    pub fn at_path(self, path: impl AsRef<std::path::Path>) -> Self {
        LinkInBioError::Load {
            path: path.as_ref().display().to_string(),
            source: Box::new(self),
        }
    }
}

/// Result type alias using LinkInBioError
pub type Result<T> = std::result::Result<T, LinkInBioError>;
