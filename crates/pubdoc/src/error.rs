//! CLI error types.

use std::path::PathBuf;

use pubdoc_config::ConfigError;
use pubdoc_confluence::{ConfluenceError, DocumentError};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Document(#[from] DocumentError),

    #[error("{0}")]
    Confluence(#[from] ConfluenceError),

    #[error("cannot derive a page title from {}; pass --title", .0.display())]
    EmptyTitle(PathBuf),
}
