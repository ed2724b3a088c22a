//! Error types for box generation.

use gridbox_ansi::AnsiError;
use thiserror::Error;

/// Errors that abort a `generate` call.
#[derive(Debug, Error)]
pub enum BoxError {
    /// A configured color is not an integer, a hex string or a rainbow keyword.
    #[error("unsupported color for {target}")]
    Configuration {
        /// The option holding the color: `grid`, `text`, `title` or `subtitle`.
        target: &'static str,
        source: AnsiError,
    },

    /// The maximum width cannot hold the template's sector count.
    #[error(
        "max width {max_width} does not allow {sectors} sectors; minimum width required: {minimum}"
    )]
    Layout {
        max_width: usize,
        sectors: usize,
        minimum: usize,
    },

    /// A text primitive rejected its arguments.
    #[error(transparent)]
    Argument(#[from] AnsiError),

    /// An options or template document failed to deserialize.
    #[error("parse error: {0}")]
    Parse(String),
}

impl BoxError {
    pub(crate) fn configuration(target: &'static str, source: AnsiError) -> Self {
        Self::Configuration { target, source }
    }
}

impl From<serde_json::Error> for BoxError {
    fn from(err: serde_json::Error) -> Self {
        BoxError::Parse(err.to_string())
    }
}

impl From<serde_yaml::Error> for BoxError {
    fn from(err: serde_yaml::Error) -> Self {
        BoxError::Parse(err.to_string())
    }
}

/// Result type for gridbox operations.
pub type Result<T> = std::result::Result<T, BoxError>;
