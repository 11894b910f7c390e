//! Status command implementation.
//!
//! `belay status` reports launch readiness without launching anything:
//! installation root, server artifact presence, toolchain availability,
//! and the forwarded configuration keys. Configuration values are
//! secrets; the report carries existence only, never content.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::args::StatusArgs;
use crate::env::EnvironmentView;
use crate::error::Result;
use crate::server::ServerArtifact;
use crate::toolchain::{Toolchain, INSTALL_HINT};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The status command implementation.
pub struct StatusCommand {
    install_root: PathBuf,
    args: StatusArgs,
}

/// Launch readiness report.
#[derive(Debug, Serialize)]
struct StatusReport {
    home: PathBuf,
    artifact: ArtifactStatus,
    toolchain: ToolchainStatus,
    environment: Vec<EnvVarStatus>,
}

#[derive(Debug, Serialize)]
struct ArtifactStatus {
    path: PathBuf,
    present: bool,
}

#[derive(Debug, Serialize)]
struct ToolchainStatus {
    program: String,
    available: bool,
    path: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct EnvVarStatus {
    name: String,
    set: bool,
}

impl StatusReport {
    fn gather(install_root: &Path) -> Self {
        let artifact = ServerArtifact::locate(install_root);
        let toolchain = Toolchain::uv();
        let env = EnvironmentView::capture();

        Self {
            home: install_root.to_path_buf(),
            artifact: ArtifactStatus {
                present: artifact.is_present(),
                path: artifact.path().to_path_buf(),
            },
            toolchain: ToolchainStatus {
                program: toolchain.program().to_string(),
                available: toolchain.is_available(),
                path: toolchain.locate(),
            },
            environment: env
                .entries()
                .map(|(name, set)| EnvVarStatus {
                    name: name.to_string(),
                    set,
                })
                .collect(),
        }
    }

    /// Ready means a bare `belay` would get past every pre-run check.
    fn ready(&self) -> bool {
        self.artifact.present && self.toolchain.available
    }
}

impl StatusCommand {
    /// Create a new status command.
    pub fn new(install_root: &Path, args: StatusArgs) -> Self {
        Self {
            install_root: install_root.to_path_buf(),
            args,
        }
    }

    fn render_human(report: &StatusReport, ui: &mut dyn UserInterface) {
        ui.show_header("Task Orchestrator launch status");

        ui.status_row("Installation root", &report.home.display().to_string());
        ui.status_row(
            "Server file",
            &if report.artifact.present {
                format!("{} (present)", report.artifact.path.display())
            } else {
                format!("{} (MISSING)", report.artifact.path.display())
            },
        );
        let toolchain_value = if !report.toolchain.available {
            format!("{} (NOT FOUND)", report.toolchain.program)
        } else if let Some(path) = &report.toolchain.path {
            format!("{} ({})", report.toolchain.program, path.display())
        } else {
            report.toolchain.program.clone()
        };
        ui.status_row("Toolchain", &toolchain_value);
        for var in &report.environment {
            ui.status_row(&var.name, if var.set { "SET" } else { "NOT SET" });
        }

        if report.ready() {
            ui.success("Ready to launch");
        } else if !report.artifact.present {
            ui.error("Server file is missing; reinstall the package");
        } else {
            ui.error(&format!(
                "{} is not installed. Install it first: {}",
                report.toolchain.program, INSTALL_HINT
            ));
        }
    }
}

impl Command for StatusCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let report = StatusReport::gather(&self.install_root);

        if self.args.json {
            let rendered = serde_json::to_string_pretty(&report)
                .map_err(|e| anyhow::anyhow!("failed to serialize status report: {e}"))?;
            ui.message(&rendered);
        } else {
            Self::render_human(&report, ui);
        }

        if report.ready() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
