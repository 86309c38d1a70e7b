//! Error types for catalog operations and the persistence boundary.

use thiserror::Error;

/// Errors raised by catalog mutations and queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Year cannot be negative: {0}")]
    InvalidYear(i32),

    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("A game titled '{0}' already exists")]
    DuplicateKey(String),

    #[error("No game titled '{0}'")]
    NotFound(String),

    #[error("Invalid year range: minimum {min} is greater than maximum {max}")]
    InvalidRange { min: i32, max: i32 },
}

impl CatalogError {
    pub fn duplicate_key(title: impl Into<String>) -> Self {
        Self::DuplicateKey(title.into())
    }

    pub fn not_found(title: impl Into<String>) -> Self {
        Self::NotFound(title.into())
    }
}

/// Failures while reading or writing a catalog file.
///
/// A failed load never hands back a partial catalog, so callers can keep
/// their current one untouched.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("I/O error accessing {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("JSON error in {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: ::csv::Error },

    #[error("Invalid record in {path}: {source}")]
    InvalidRecord { path: String, source: CatalogError },

    #[error("Unrecognized catalog file format: {0}")]
    UnknownFormat(String),
}
