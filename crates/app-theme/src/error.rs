//! Theme engine error types

use thiserror::Error;

/// Errors raised by the theme engine
///
/// None of these are fatal to the store: invalid colors are rejected before
/// any mutation, corrupt records fall back to the default theme, and failed
/// writes are reported alongside the (still applied) new theme.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// A color did not match the `#rrggbb` hex encoding
    #[error("Invalid color format: {value:?} (expected #rrggbb)")]
    InvalidColorFormat {
        /// The rejected input
        value: String,
    },

    /// The persisted theme record exists but could not be decoded
    #[error("Persisted theme is corrupt: {0}")]
    PersistenceReadCorrupt(String),

    /// The theme could not be written to (or removed from) storage
    #[error("Failed to persist theme: {0}")]
    PersistenceWriteFailed(String),
}

impl ThemeError {
    pub(crate) fn invalid_color(value: impl Into<String>) -> Self {
        ThemeError::InvalidColorFormat { value: value.into() }
    }
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
