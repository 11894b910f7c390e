//! Belay - Launcher and supervisor for the Task Orchestrator MCP server.
//!
//! Belay bootstraps the Python Task Orchestrator server on behalf of the
//! user: it verifies the server artifact and the `uv` toolchain, syncs
//! the server's dependencies, then spawns and supervises the server with
//! inherited stdio, forwarding interrupt/termination signals and
//! mirroring the server's exit code.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`env`] - Allow-listed environment forwarding
//! - [`error`] - Error types and result aliases
//! - [`server`] - Server artifact location and presence checks
//! - [`supervisor`] - Child process supervision and signal forwarding
//! - [`toolchain`] - `uv` detection and dependency sync
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use belay::env::EnvironmentView;
//!
//! // Snapshot the forwarded configuration; only existence is reportable.
//! let view = EnvironmentView::capture();
//! for (name, set) in view.entries() {
//!     println!("{}: {}", name, if set { "SET" } else { "NOT SET" });
//! }
//! ```

pub mod cli;
pub mod env;
pub mod error;
pub mod server;
pub mod supervisor;
pub mod toolchain;
pub mod ui;

pub use error::{BelayError, Result};
