use std::path::PathBuf;

/// Result alias used throughout the crate.
pub type ClipmarkResult<T> = Result<T, ClipmarkError>;

/// Errors surfaced by label rendering.
#[derive(thiserror::Error, Debug)]
pub enum ClipmarkError {
    /// Malformed input: color strings, style names, numeric arguments, canvas limits.
    #[error("config error: {0}")]
    Config(String),

    /// A font candidate could not be loaded. Absorbed by font resolution.
    #[error("font unavailable: {0}")]
    Font(String),

    /// Reading or writing a file failed.
    #[error("io error: '{}': {source}", path.display())]
    Io {
        /// Path involved in the failed operation.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// Anything else (encoder failures and similar).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ClipmarkError {
    /// Build a [`ClipmarkError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`ClipmarkError::Font`].
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`ClipmarkError::Io`] for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
