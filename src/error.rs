//! Error handling module for the showcase
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Disallowed user transitions (a gated wizard step, a carousel key past the
//! end) are not errors: views reject them silently. These types cover API
//! misuse, bad static data, invalid configuration and IO failures.

use thiserror::Error;

/// Main error type for the showcase
#[derive(Error, Debug)]
pub enum ShowcaseError {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration value out of bounds
    #[error("Configuration error: {0}")]
    Config(String),

    /// Static catalog data violates an invariant (duplicate id, bad discount)
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Price range with `min > max`
    #[error("Invalid price range: min {min} exceeds max {max}")]
    InvalidPriceRange { min: u32, max: u32 },

    /// Cursor position requested outside `[0, len)`
    #[error("Position {index} out of range for {len} slides")]
    OutOfRange { index: usize, len: usize },

    /// Cursor constructed with zero positions
    #[error("A cursor needs at least one position")]
    EmptyCursor,
}

/// Result type alias for showcase operations
pub type Result<T> = std::result::Result<T, ShowcaseError>;

// Convenient error constructors
impl ShowcaseError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a catalog error
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }
}
