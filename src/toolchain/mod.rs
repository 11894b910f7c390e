//! Toolchain detection for the `uv` dependency manager.
//!
//! The server's Python dependencies are managed by `uv`; the launcher
//! refuses to start without it. Availability is determined by actually
//! running the version subcommand rather than scanning PATH: a binary
//! that exists but cannot execute (wrong architecture, broken install,
//! permission denied) counts as unavailable.
//!
//! The probe is infallible by contract: every failure mode collapses to
//! `false`, and the caller decides what to tell the user.

pub mod sync;

pub use sync::SyncError;

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Guidance shown when the toolchain is missing.
pub const INSTALL_HINT: &str = "pip install uv";

/// Descriptor for the external dependency manager.
#[derive(Debug, Clone)]
pub struct Toolchain {
    program: String,
}

impl Toolchain {
    /// The `uv` toolchain as found on PATH.
    pub fn uv() -> Self {
        Self {
            program: "uv".to_string(),
        }
    }

    /// A toolchain invoked via an arbitrary program path.
    ///
    /// Used by tests to point at shim executables without touching PATH.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The program name or path this toolchain is invoked as.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Whether the toolchain responds to its version query.
    ///
    /// Runs `<program> --version` with all stdio suppressed and returns
    /// true iff the process starts and exits zero. Never errors.
    pub fn is_available(&self) -> bool {
        Command::new(&self.program)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    /// Resolve the toolchain binary by iterating over PATH entries.
    ///
    /// Purely informational (used by `belay status`); execution always
    /// goes through the program name so the OS lookup stays authoritative.
    pub fn locate(&self) -> Option<PathBuf> {
        self.locate_in(&parse_system_path())
    }

    /// Resolve the toolchain binary against an explicit list of directories.
    pub fn locate_in(&self, path_entries: &[PathBuf]) -> Option<PathBuf> {
        // An explicit path bypasses the PATH scan entirely.
        let direct = Path::new(&self.program);
        if direct.components().count() > 1 {
            return direct.is_file().then(|| direct.to_path_buf());
        }

        path_entries.iter().find_map(|dir| {
            let candidate = dir.join(&self.program);
            (candidate.is_file() && is_executable(&candidate)).then_some(candidate)
        })
    }
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
fn is_executable(_path: &Path) -> bool {
    true
}
