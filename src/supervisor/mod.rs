//! Child process supervision.
//!
//! The supervisor owns the single in-flight server process for the whole
//! launcher lifetime: it spawns the child with fully inherited stdio (the
//! server's console I/O is indistinguishable from a directly-invoked
//! process), re-asserts the forwarded environment, registers the child for
//! signal forwarding, and blocks until the child exits.
//!
//! The parent's exit code mirrors the child's. There is no restart policy
//! and no force-kill timer; a second Ctrl+C is the user's escalation
//! path, handled by the OS.

pub mod signals;

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

use crate::env::EnvironmentView;
use crate::error::{BelayError, Result};

/// What to spawn and under which environment.
#[derive(Debug)]
pub struct ChildSpec {
    /// Program name or path, resolved by the OS.
    pub program: String,
    /// Arguments, in order.
    pub args: Vec<OsString>,
    /// Working directory for the child.
    pub cwd: PathBuf,
    /// Allow-listed environment snapshot to re-assert.
    pub env: EnvironmentView,
}

impl ChildSpec {
    /// Human-readable command line for error messages.
    pub fn display_command(&self) -> String {
        let mut rendered = self.program.clone();
        for arg in &self.args {
            rendered.push(' ');
            rendered.push_str(&arg.to_string_lossy());
        }
        rendered
    }
}

/// Lifecycle of the supervised child.
///
/// `Running -> Running` on signal forwarding; `Exited` and `SpawnFailed`
/// are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupervisorState {
    NotStarted,
    Spawning,
    Running,
    Exited(i32),
    SpawnFailed,
}

/// Spawns and supervises exactly one child process.
#[derive(Debug)]
pub struct ProcessSupervisor {
    state: SupervisorState,
}

impl Default for ProcessSupervisor {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessSupervisor {
    /// Create a supervisor in the `NotStarted` state.
    pub fn new() -> Self {
        Self {
            state: SupervisorState::NotStarted,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SupervisorState {
        self.state
    }

    /// Spawn the child and block until it exits.
    ///
    /// Returns the exit code the parent should terminate with: the child's
    /// own code, or `128 + signal` when the child died to a signal. A
    /// spawn failure yields [`BelayError::SpawnFailed`] without ever
    /// entering `Running`.
    pub fn run(&mut self, spec: &ChildSpec) -> Result<i32> {
        self.state = SupervisorState::Spawning;

        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args)
            .current_dir(&spec.cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        spec.env.apply(&mut cmd);

        let mut child = match cmd.spawn() {
            Ok(child) => child,
            Err(source) => {
                self.state = SupervisorState::SpawnFailed;
                return Err(BelayError::SpawnFailed {
                    command: spec.display_command(),
                    source,
                });
            }
        };

        // Signal handlers can only reach the child through process-scoped
        // state; register before installing so a handler never fires with
        // nothing to forward to.
        signals::register_child(child.id());
        signals::install_forwarding();
        self.state = SupervisorState::Running;
        tracing::debug!(pid = child.id(), "server process started");

        let waited = child.wait();
        signals::clear_child();
        let status = waited?;

        let code = exit_code_of(status);
        self.state = SupervisorState::Exited(code);
        tracing::debug!(code, "server process exited");
        Ok(code)
    }
}

/// Map an exit status to the code the parent should propagate.
fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    // No code means the child was killed by a signal.
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
