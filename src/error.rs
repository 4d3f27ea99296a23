// error.rs - Error types for table construction and data loading.
//
// Lookups that find nothing are not errors: searches return `None` and
// canonicalization falls back to the queried character.

use thiserror::Error;

/// Convenience alias for results carrying a [`HomoglyphError`].
pub type Result<T, E = HomoglyphError> = std::result::Result<T, E>;

/// Error type for building tables, loading group data, and nullable input.
#[derive(Debug, Error)]
pub enum HomoglyphError {
    /// An argument was absent where the operation requires a value.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Strict construction found `b` confusable with `a` but not the reverse.
    #[error("asymmetric confusables: {b:?} is listed for {a:?} but not the reverse")]
    Asymmetric { a: char, b: char },

    /// A named resource could not be located.
    #[error("resource not found: {0}")]
    ResourceNotFound(String),

    /// Reading group data failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl HomoglyphError {
    /// A stable label for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            HomoglyphError::InvalidArgument(_) => "invalid_argument",
            HomoglyphError::Asymmetric { .. } => "asymmetric",
            HomoglyphError::ResourceNotFound(_) => "resource_not_found",
            HomoglyphError::Io(_) => "io",
        }
    }
}
