//! Setup command implementation.
//!
//! `belay setup` is the best-effort preflight: probe the toolchain and
//! sync dependencies so the first real launch starts instantly. Unlike
//! `run`, nothing here is fatal. A missing toolchain or a failed sync
//! produces guidance, not a nonzero exit, because setup typically runs
//! unattended right after installation.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::server::ServerArtifact;
use crate::toolchain::{Toolchain, INSTALL_HINT};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The setup command implementation.
pub struct SetupCommand {
    install_root: PathBuf,
}

impl SetupCommand {
    /// Create a new setup command.
    pub fn new(install_root: &Path) -> Self {
        Self {
            install_root: install_root.to_path_buf(),
        }
    }
}

impl Command for SetupCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.message("Setting up Task Orchestrator MCP server...");

        let artifact = ServerArtifact::locate(&self.install_root);
        if !artifact.is_present() {
            ui.warning(&format!(
                "Server file not found: {}",
                artifact.path().display()
            ));
            return Ok(CommandResult::success());
        }

        let toolchain = Toolchain::uv();
        if !toolchain.is_available() {
            ui.warning(&format!(
                "{} not found. Install it first: {}",
                toolchain.program(),
                INSTALL_HINT
            ));
            ui.message(&format!(
                "After installing {}, run: belay setup",
                toolchain.program()
            ));
            return Ok(CommandResult::success());
        }

        ui.message("Installing Python dependencies...");
        match toolchain.sync(artifact.root()) {
            Ok(()) => ui.success("Setup complete"),
            Err(err) => {
                ui.warning(&format!(
                    "Could not install dependencies: {}. You may need to run '{} sync' manually.",
                    err,
                    toolchain.program()
                ));
            }
        }

        Ok(CommandResult::success())
    }
}
