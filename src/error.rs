//! Error types for Belay operations.
//!
//! This module defines [`BelayError`], the primary error type used throughout
//! the launcher, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every variant is terminal for the launcher; nothing is retried.
//! - All errors should provide actionable messages for users; the
//!   toolchain variant in particular must tell the user how to install it.
//! - A nonzero exit from the supervised server is *not* an error value:
//!   it is mirrored as the launcher's own exit code.

use std::path::PathBuf;
use thiserror::Error;

use crate::toolchain::SyncError;

/// Core error type for Belay operations.
#[derive(Debug, Error)]
pub enum BelayError {
    /// The server artifact is missing from the installation root.
    #[error("Server file not found: {path}")]
    MissingArtifact { path: PathBuf },

    /// The toolchain executable could not be found or did not respond.
    #[error("'{tool}' is not installed. Install it first: {hint}")]
    ToolchainUnavailable { tool: String, hint: String },

    /// Dependency sync ran but did not complete successfully.
    #[error("Failed to install dependencies: {0}")]
    SyncFailed(#[from] SyncError),

    /// The server process could not be spawned at all.
    #[error("Failed to start server ({command}): {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Belay operations.
pub type Result<T> = std::result::Result<T, BelayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_artifact_displays_path() {
        let err = BelayError::MissingArtifact {
            path: PathBuf::from("/opt/pkg/src/server.py"),
        };
        assert!(err.to_string().contains("/opt/pkg/src/server.py"));
    }

    #[test]
    fn toolchain_unavailable_displays_tool_and_hint() {
        let err = BelayError::ToolchainUnavailable {
            tool: "uv".into(),
            hint: "pip install uv".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("uv"));
        assert!(msg.contains("pip install uv"));
    }

    #[test]
    fn sync_failed_displays_exit_code() {
        let err = BelayError::SyncFailed(SyncError::ExitCode {
            command: "uv sync".into(),
            code: 2,
        });
        let msg = err.to_string();
        assert!(msg.contains("uv sync"));
        assert!(msg.contains("2"));
    }

    #[test]
    fn spawn_failed_displays_command() {
        let err = BelayError::SpawnFailed {
            command: "uv run python server.py".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("uv run python server.py"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: BelayError = io_err.into();
        assert!(matches!(err, BelayError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(BelayError::MissingArtifact {
                path: PathBuf::from("missing"),
            })
        }
        assert!(returns_error().is_err());
    }
}
