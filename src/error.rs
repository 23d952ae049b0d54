//! Error types for profile operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by store, codec and edit operations.
///
/// A candidate profile that does not exist is never an error during
/// discovery; it only becomes [`ShenvError::ProfileNotFound`] when a command
/// names it explicitly.
#[derive(Error, Debug)]
pub enum ShenvError {
    #[error("Profile '{0}' not found")]
    ProfileNotFound(String),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed import document: {0}")]
    MalformedDocument(#[from] serde_json::Error),

    #[error("Invalid profile name '{0}': must be a file name relative to the home directory")]
    InvalidProfileName(String),

    #[error("Invalid config file at {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

impl ShenvError {
    /// Process exit code for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            ShenvError::MalformedDocument(_) | ShenvError::InvalidProfileName(_) => 2,
            ShenvError::WriteFailure { .. } => 3,
            ShenvError::ProfileNotFound(_)
            | ShenvError::FileNotFound(_)
            | ShenvError::UnreadableFile { .. }
            | ShenvError::Config { .. } => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, ShenvError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ShenvError::ProfileNotFound(".zshrc".into()).exit_code(), 1);
        assert_eq!(
            ShenvError::WriteFailure {
                path: PathBuf::from("/x"),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            }
            .exit_code(),
            3
        );
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(ShenvError::from(json_err).exit_code(), 2);
        assert_eq!(ShenvError::InvalidProfileName("../x".into()).exit_code(), 2);
    }

    #[test]
    fn test_messages_name_the_path() {
        let err = ShenvError::FileNotFound(PathBuf::from("/home/u/.zshrc"));
        assert_eq!(err.to_string(), "File not found: /home/u/.zshrc");
    }
}
