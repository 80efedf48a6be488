use std::path::PathBuf;

use thiserror::Error;

/// Failure of a tree operation.
///
/// Always recoverable: the tree it was called on is untouched, so callers
/// either retry against a fresh tree or drop the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The target or anchor is not in the tree, or no ancestor split runs
    /// along the requested resize axis.
    #[error("node not found in split tree")]
    NodeNotFound,
}

pub type Result<T> = std::result::Result<T, LayoutError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read layout config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid layout config: {0}")]
    Parse(#[from] serde_json::Error),
}
