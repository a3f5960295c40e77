//! Error types for the depmap CLI
//!
//! Layout inference itself is total (bad filesystem state degrades to empty
//! or false answers); these errors cover the interactive and I/O boundary.

use thiserror::Error;

/// Errors that can occur while running a depmap command
#[derive(Debug, Error)]
pub enum DepmapError {
    /// Underlying filesystem operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An interactive prompt failed or was cancelled by the user
    #[error("Prompt aborted: {0}")]
    Prompt(#[from] inquire::InquireError),

    /// Serializing the wizard's answers failed
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for depmap operations
pub type Result<T> = std::result::Result<T, DepmapError>;
