//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// Returns a [`CommandResult`] carrying the exit code the process
    /// should terminate with.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success; for `run`, the supervised
    /// server's own exit code).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    install_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given installation root.
    pub fn new(install_root: PathBuf) -> Self {
        Self { install_root }
    }

    /// Get the installation root path.
    pub fn install_root(&self) -> &Path {
        &self.install_root
    }

    /// Dispatch and execute a command.
    ///
    /// A bare invocation runs the launch pipeline.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            None | Some(Commands::Run) => {
                let cmd = super::run::RunCommand::new(&self.install_root);
                cmd.execute(ui)
            }
            Some(Commands::Setup) => {
                let cmd = super::setup::SetupCommand::new(&self.install_root);
                cmd.execute(ui)
            }
            Some(Commands::Status(args)) => {
                let cmd = super::status::StatusCommand::new(&self.install_root, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_result_success_is_zero() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure_keeps_code() {
        let result = CommandResult::failure(137);
        assert!(!result.success);
        assert_eq!(result.exit_code, 137);
    }

    #[test]
    fn dispatcher_exposes_install_root() {
        let dispatcher = CommandDispatcher::new(PathBuf::from("/opt/orchestrator"));
        assert_eq!(
            dispatcher.install_root(),
            Path::new("/opt/orchestrator")
        );
    }
}
