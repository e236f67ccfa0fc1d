use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for the sc2winjupos crate.
///
/// Every variant is fatal for a run. Files that simply do not match are skipped
/// and never produce an error.
#[derive(Error, Debug)]
pub enum RenameError {
    #[error("{reason}: {}", .path.display())]
    InvalidDirectory { path: PathBuf, reason: &'static str },

    #[error("Invalid filename pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Directory traversal failed: {0}")]
    Walk(#[from] walkdir::Error),

    // --- Custom Module Errors ---
    #[error("Failed to read capture settings {}: {source}", .file.display())]
    Session {
        file: PathBuf,
        #[source]
        source: crate::session::error::SessionError,
    },

    #[error("Cannot determine time of {} (session {session_key}): {source}", .file.display())]
    Time {
        file: PathBuf,
        session_key: String,
        #[source]
        source: crate::time::error::TimeError,
    },

    #[error(transparent)]
    Validation(#[from] crate::naming::error::ValidationError),

    // --- Output Errors ---
    #[error("Failed to {operation} {} -> {}: {source}", .from.display(), .to.display())]
    Transfer {
        operation: crate::renamer::TransferMode,
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
