//! Errors returned by [`Multiconf::load`](crate::config::Multiconf::load).
//!
//! Missing or unreadable files are not errors: they are skipped. Everything
//! here aborts the load.

use crate::config::{ParseError, TemplateError};
use crate::paths::DirectoryError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to resolve platform directories: {0}")]
    DirectoryResolution(#[from] DirectoryError),

    #[error("invalid path template #{index} '{template}': {source}")]
    TemplateExpansion {
        index: usize,
        template: String,
        #[source]
        source: TemplateError,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

impl LoadError {
    /// File that triggered the error, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            LoadError::Parse { path, .. } => Some(path.as_path()),
            _ => None,
        }
    }
}

/// Result type for load operations.
pub type LoadResult<T> = std::result::Result<T, LoadError>;
