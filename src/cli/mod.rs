//! Command-line interface for Belay.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, StatusArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
