//! Error types for bosun operations.
//!
//! This module defines [`BosunError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Runtime command failures are data: they come back as an
//!   [`ExecResult`](crate::shell::ExecResult) with `success == false` so
//!   calling code can branch on them. Only check mode converts a non-zero
//!   exit into an error.
//! - Misuse of the API (empty command, conditional call with no open chain,
//!   unrecognized mode strings) is an error raised immediately.
//! - Use `anyhow::Error` (via `BosunError::Other`) for unexpected errors.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for bosun operations.
#[derive(Debug, Error)]
pub enum BosunError {
    /// A command run in check mode exited non-zero (or failed to launch).
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed {
        command: String,
        code: Option<i32>,
        output: String,
    },

    /// An empty (or whitespace-only) command line was submitted.
    #[error("Command is empty")]
    EmptyCommand,

    /// A working-directory override points at a directory that does not exist.
    #[error("Working directory does not exist: {path}")]
    WorkingDirNotFound { path: PathBuf },

    /// `elif_condition` or `else_condition` was called with no open chain.
    #[error("{call} called without a preceding if_condition")]
    ConditionalState { call: &'static str },

    /// Unrecognized file-write mode string.
    #[error("Invalid write mode '{mode}' (expected 'w' or 'a')")]
    InvalidWriteMode { mode: String },

    /// Unrecognized archive format name.
    #[error("Unsupported archive format '{name}'")]
    UnknownArchiveFormat { name: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for bosun operations.
pub type Result<T> = std::result::Result<T, BosunError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = BosunError::CommandFailed {
            command: "apt install -y nginx".into(),
            code: Some(100),
            output: String::new(),
        };
        let msg = err.to_string();
        assert!(msg.contains("apt install -y nginx"));
        assert!(msg.contains("100"));
    }

    #[test]
    fn command_failed_without_code_displays_none() {
        let err = BosunError::CommandFailed {
            command: "ls".into(),
            code: None,
            output: "no such shell".into(),
        };
        assert!(err.to_string().contains("None"));
    }

    #[test]
    fn working_dir_not_found_displays_path() {
        let err = BosunError::WorkingDirNotFound {
            path: PathBuf::from("/var/www/missing"),
        };
        assert!(err.to_string().contains("/var/www/missing"));
    }

    #[test]
    fn conditional_state_names_the_call() {
        let err = BosunError::ConditionalState {
            call: "elif_condition",
        };
        let msg = err.to_string();
        assert!(msg.contains("elif_condition"));
        assert!(msg.contains("without a preceding"));
    }

    #[test]
    fn invalid_write_mode_displays_mode() {
        let err = BosunError::InvalidWriteMode { mode: "x".into() };
        assert!(err.to_string().contains("'x'"));
    }

    #[test]
    fn unknown_archive_format_displays_name() {
        let err = BosunError::UnknownArchiveFormat { name: "rar".into() };
        assert!(err.to_string().contains("rar"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: BosunError = io_err.into();
        assert!(matches!(err, BosunError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(BosunError::EmptyCommand)
        }
        assert!(returns_error().is_err());
    }
}
