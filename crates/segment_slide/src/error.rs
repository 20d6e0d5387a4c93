//! # Switcher Error Types
//!
//! Config loading fails loudly. Visual operations never do: they turn these
//! errors into a `warn!` and skip the frame.

use thiserror::Error;

/// Errors that can occur in the switcher.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SwitcherError {
    /// A config value is out of its allowed range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The config text is not valid TOML for a switcher config.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// The config file could not be read.
    #[error("cannot read config {path}: {reason}")]
    ConfigRead {
        /// Path that was requested.
        path: String,
        /// Underlying I/O failure.
        reason: String,
    },

    /// An item index outside `[0, count)`.
    #[error("index {index} out of range for {count} items")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Current item count.
        count: usize,
    },

    /// Geometry was requested before the view had a nonzero size.
    #[error("layout not ready: view has no size yet")]
    LayoutNotReady,
}

impl From<toml::de::Error> for SwitcherError {
    fn from(err: toml::de::Error) -> Self {
        Self::ConfigParse(err.to_string())
    }
}

/// Result type for switcher operations.
pub type SwitcherResult<T> = Result<T, SwitcherError>;
