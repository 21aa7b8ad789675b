//! Error and notice types.
//!
//! - [`StoreError`] - failures raised by a [`ToDoStore`](crate::traits::ToDoStore)
//! - [`Notice`] - the non-fatal condition the controller records after a store
//!   failure so the status line can tell the user something went wrong

use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by persistence backends.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem read/write failed.
    #[error("IO error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stored data could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Backend refused the operation.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// A store failure the UI should surface without interrupting the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Reading the list failed; the view shows an empty list.
    LoadFailed(String),
    /// Adding or updating an item failed.
    SaveFailed(String),
    /// Deleting an item failed.
    DeleteFailed(String),
}

impl Notice {
    /// Short message for the status line.
    pub fn message(&self) -> String {
        match self {
            Notice::LoadFailed(reason) => format!("Load failed: {}", reason),
            Notice::SaveFailed(reason) => format!("Save failed: {}", reason),
            Notice::DeleteFailed(reason) => format!("Delete failed: {}", reason),
        }
    }
}
