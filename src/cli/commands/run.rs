//! Run command implementation.
//!
//! `belay run` (or bare `belay`) drives the launch pipeline: verify the
//! server artifact, probe the toolchain, sync dependencies, then hand the
//! terminal to the supervised server until it exits. Each stage's failure
//! is terminal; there is no retry and no fallback across stages.

use std::path::{Path, PathBuf};

use crate::env::EnvironmentView;
use crate::error::{BelayError, Result};
use crate::server::ServerArtifact;
use crate::supervisor::{ChildSpec, ProcessSupervisor};
use crate::toolchain::{Toolchain, INSTALL_HINT};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    install_root: PathBuf,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(install_root: &Path) -> Self {
        Self {
            install_root: install_root.to_path_buf(),
        }
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        tracing::debug!(root = %self.install_root.display(), "resolved installation root");

        // Stage 1: the artifact check runs before anything is spawned.
        let artifact = ServerArtifact::locate(&self.install_root);
        artifact.verify()?;

        // Stage 2: toolchain probe.
        let toolchain = Toolchain::uv();
        if !toolchain.is_available() {
            return Err(BelayError::ToolchainUnavailable {
                tool: toolchain.program().to_string(),
                hint: INSTALL_HINT.to_string(),
            });
        }

        // Stage 3: dependency sync, streaming straight to the terminal.
        ui.message("Installing Python dependencies...");
        toolchain.sync(artifact.root())?;
        ui.success("Dependencies installed");

        // Stage 4: snapshot the forwarded configuration. Existence only;
        // values are never rendered.
        let env = EnvironmentView::capture();
        for (name, set) in env.entries() {
            tracing::debug!(name, set, "forwarded environment variable");
            if ui.output_mode().shows_detail() {
                ui.status_row(name, if set { "SET" } else { "NOT SET" });
            }
        }

        ui.message("Starting Task Orchestrator MCP server...");

        // The server runs as a direct file execution, never as a module,
        // so its own imports resolve against the package directory.
        let spec = ChildSpec {
            program: toolchain.program().to_string(),
            args: vec![
                "run".into(),
                "python".into(),
                artifact.path().as_os_str().to_os_string(),
            ],
            cwd: artifact.root().to_path_buf(),
            env,
        };

        let mut supervisor = ProcessSupervisor::new();
        let code = supervisor.run(&spec)?;

        if code == 0 {
            Ok(CommandResult::success())
        } else {
            ui.error(&format!("Server exited with code {}", code));
            Ok(CommandResult::failure(code))
        }
    }
}
