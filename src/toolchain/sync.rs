//! Dependency synchronization via `uv sync`.
//!
//! Runs in the installation root before the server is spawned, with all
//! three standard streams inherited so the user watches installer progress
//! live, with no capture or buffering. Sync can take minutes on a cold
//! cache and is intentionally unbounded in time.
//!
//! One attempt per invocation. Retry policy, if anyone wants one, belongs
//! to the caller.

use std::path::Path;
use std::process::{Command, Stdio};

use thiserror::Error;

use super::Toolchain;

/// Failure modes of a dependency sync attempt.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The sync subprocess ran and exited nonzero.
    #[error("'{command}' exited with code {code}")]
    ExitCode { command: String, code: i32 },

    /// The sync subprocess was killed before producing an exit code.
    #[error("'{command}' was terminated by a signal")]
    Terminated { command: String },

    /// The sync subprocess could not be started at all.
    #[error("could not run '{command}': {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

impl Toolchain {
    /// Materialize the server's dependencies in `root`.
    ///
    /// Blocks until the sync subprocess exits. Succeeds iff it exits zero.
    pub fn sync(&self, root: &Path) -> Result<(), SyncError> {
        let command = format!("{} sync", self.program());
        tracing::debug!(cwd = %root.display(), %command, "running dependency sync");

        let status = Command::new(self.program())
            .arg("sync")
            .current_dir(root)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| SyncError::Launch {
                command: command.clone(),
                source,
            })?;

        if status.success() {
            return Ok(());
        }

        match status.code() {
            Some(code) => Err(SyncError::ExitCode { command, code }),
            None => Err(SyncError::Terminated { command }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[cfg(unix)]
    fn fake_toolchain(temp: &TempDir, script: &str) -> Toolchain {
        use std::os::unix::fs::PermissionsExt;
        let tool = temp.path().join("uv");
        fs::write(&tool, script).unwrap();
        fs::set_permissions(&tool, fs::Permissions::from_mode(0o755)).unwrap();
        Toolchain::with_program(tool.to_string_lossy())
    }

    #[cfg(unix)]
    #[test]
    fn sync_succeeds_on_zero_exit() {
        let temp = TempDir::new().unwrap();
        let toolchain = fake_toolchain(&temp, "#!/bin/sh\nexit 0\n");

        assert!(toolchain.sync(temp.path()).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn sync_reports_nonzero_exit_code() {
        let temp = TempDir::new().unwrap();
        let toolchain = fake_toolchain(&temp, "#!/bin/sh\nexit 3\n");

        let err = toolchain.sync(temp.path()).unwrap_err();
        match err {
            SyncError::ExitCode { code, .. } => assert_eq!(code, 3),
            other => panic!("expected ExitCode, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn sync_runs_in_the_given_directory() {
        let temp = TempDir::new().unwrap();
        let workdir = TempDir::new().unwrap();
        let toolchain = fake_toolchain(&temp, "#!/bin/sh\ntouch synced-here\nexit 0\n");

        toolchain.sync(workdir.path()).unwrap();
        assert!(workdir.path().join("synced-here").exists());
    }

    #[test]
    fn sync_reports_launch_failure_for_missing_program() {
        let temp = TempDir::new().unwrap();
        let toolchain = Toolchain::with_program("/nonexistent/path/to/uv");

        let err = toolchain.sync(temp.path()).unwrap_err();
        match err {
            SyncError::Launch { command, .. } => assert!(command.contains("sync")),
            other => panic!("expected Launch, got {:?}", other),
        }
    }

    #[test]
    fn exit_code_error_message_contains_code() {
        let err = SyncError::ExitCode {
            command: "uv sync".into(),
            code: 2,
        };
        assert!(err.to_string().contains('2'));
    }
}
