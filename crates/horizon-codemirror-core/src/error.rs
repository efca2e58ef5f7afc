//! Error types for Horizon CodeMirror.
//!
//! The adapter lifecycle itself never fails: a missing widget turns every
//! operation into a no-op. These errors surface only from the explicitly
//! fallible entry points (`try_mount`, widget factories, configuration
//! loading).

use std::path::PathBuf;

/// Result type alias for Horizon CodeMirror operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in Horizon CodeMirror.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Mount was requested while a widget is already mounted.
    #[error("A widget is already mounted")]
    AlreadyMounted,

    /// The placeholder element is not attached to a live tree.
    #[error("Placeholder '{name}' is not attached")]
    PlaceholderDetached { name: String },

    /// The widget factory failed to construct a widget.
    #[error("Failed to create widget: {message}")]
    WidgetCreation { message: String },

    /// Configuration could not be parsed.
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    /// File I/O error while loading configuration.
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a detached-placeholder error.
    pub fn placeholder_detached(name: impl Into<String>) -> Self {
        Self::PlaceholderDetached { name: name.into() }
    }

    /// Create a widget creation error.
    pub fn widget_creation(message: impl Into<String>) -> Self {
        Self::WidgetCreation {
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
