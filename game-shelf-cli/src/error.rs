use game_shelf_catalog::{CatalogError, PersistenceError};
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error on the terminal
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Catalog operation rejected
    #[error("{0}")]
    Catalog(#[from] CatalogError),

    /// Reading or writing a catalog file failed
    #[error("{0}")]
    Persistence(#[from] PersistenceError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// User input could not be parsed
    #[error("Invalid input: {0}")]
    Input(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }
}
