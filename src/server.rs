//! Server artifact location and presence checks.
//!
//! The launcher ships alongside the Python server it supervises. The
//! installation root is resolved once at startup, and the server file must
//! exist under it before anything else runs. A missing artifact fails
//! fast, before the toolchain is probed or dependencies are synced.

use std::path::{Path, PathBuf};

use crate::error::{BelayError, Result};

/// Server entry point, relative to the installation root.
pub const SERVER_RELATIVE_PATH: &str = "src/task_orchectrator_mcp/server.py";

/// Environment variable overriding the installation root.
pub const HOME_ENV_VAR: &str = "TASK_ORCHESTRATOR_HOME";

/// Resolve the installation root.
///
/// Precedence: an explicit path (from `--home` or [`HOME_ENV_VAR`], both
/// handled by the CLI layer), then the directory containing the launcher
/// executable, then the current directory.
pub fn resolve_install_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// The supervised server's on-disk entry point.
#[derive(Debug, Clone)]
pub struct ServerArtifact {
    root: PathBuf,
    path: PathBuf,
}

impl ServerArtifact {
    /// Locate the server file under an installation root.
    pub fn locate(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            path: root.join(SERVER_RELATIVE_PATH),
        }
    }

    /// The installation root the server runs in.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute-or-relative path to the server file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the server file exists.
    pub fn is_present(&self) -> bool {
        self.path.is_file()
    }

    /// Fail with [`BelayError::MissingArtifact`] unless the file exists.
    pub fn verify(&self) -> Result<()> {
        if self.is_present() {
            Ok(())
        } else {
            Err(BelayError::MissingArtifact {
                path: self.path.clone(),
            })
        }
    }
}
