//! Error types for color parsing and text primitives.

use thiserror::Error;

/// Errors raised by the color and text primitives.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnsiError {
    /// The value is not a 24-bit integer, a 3/6 digit hex string or a rainbow keyword.
    #[error("unsupported color: {value}")]
    UnsupportedColor { value: String },

    /// Chunk bounds that cannot produce a chunk.
    #[error("invalid chunk bounds: min {min}, max {max} (max must be at least 1 and not below min)")]
    InvalidBounds { min: usize, max: usize },
}

impl AnsiError {
    pub(crate) fn unsupported(value: impl Into<String>) -> Self {
        Self::UnsupportedColor {
            value: value.into(),
        }
    }
}

/// Result type for gridbox-ansi operations.
pub type Result<T> = std::result::Result<T, AnsiError>;
