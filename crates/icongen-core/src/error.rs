//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Catalog Errors
    // ─────────────────────────────────────────────────────────────
    #[error("unknown icon: {name}")]
    UnknownIcon { name: String },

    #[error("icon {name} is declared more than once")]
    DuplicateIcon { name: String },

    #[error("icon {name} is not valid base64: {source}")]
    MalformedEncoding {
        name: String,
        source: base64::DecodeError,
    },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ─────────────────────────────────────────────────────────────
    // Discovery/Generation Errors
    // ─────────────────────────────────────────────────────────────
    #[error("No icon source files found in: {searched_path}")]
    NoSourceFiles { searched_path: PathBuf },

    #[error("File watcher error: {message}")]
    Watcher { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn unknown_icon(name: impl Into<String>) -> Self {
        Self::UnknownIcon { name: name.into() }
    }

    pub fn duplicate_icon(name: impl Into<String>) -> Self {
        Self::DuplicateIcon { name: name.into() }
    }

    pub fn malformed_encoding(name: impl Into<String>, source: base64::DecodeError) -> Self {
        Self::MalformedEncoding {
            name: name.into(),
            source,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn no_source_files(path: impl Into<PathBuf>) -> Self {
        Self::NoSourceFiles {
            searched_path: path.into(),
        }
    }

    pub fn watcher(message: impl Into<String>) -> Self {
        Self::Watcher {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    ///
    /// Recoverable errors affect a single lookup or a single source file;
    /// the catalog (and a running watch loop) stays usable.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::UnknownIcon { .. } | Error::MalformedEncoding { .. } | Error::Watcher { .. }
        )
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::Config { .. } | Error::NoSourceFiles { .. } | Error::DuplicateIcon { .. }
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}
