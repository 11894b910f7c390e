//! Forwarded environment configuration for the supervised server.
//!
//! The server reads its Trello credentials and target board from the
//! environment. The launcher passes its full ambient environment through,
//! but re-asserts the allow-listed keys explicitly so the result is stable
//! no matter how the child's environment map was assembled: a key set in
//! the parent is set to the same value in the child, and a key absent in
//! the parent is absent in the child, never coerced to an empty string.
//!
//! Values are secrets. [`EnvironmentView`] never exposes them for display;
//! only existence (`SET` / `NOT SET`) is reportable.

use std::env::VarError;
use std::fmt;
use std::process::Command;

/// Configuration keys forwarded to the server.
pub const FORWARDED_VARS: [&str; 3] = [
    "TRELLO_API_KEY",
    "TRELLO_TOKEN",
    "TRELLO_WORKING_BOARD_ID",
];

/// Snapshot of the allow-listed configuration keys, taken from the
/// parent's ambient environment.
#[derive(Clone)]
pub struct EnvironmentView {
    entries: Vec<(String, Option<String>)>,
}

impl EnvironmentView {
    /// Capture the forwarded keys from the process environment.
    pub fn capture() -> Self {
        Self::capture_with(&FORWARDED_VARS, |key| std::env::var(key))
    }

    /// Capture the given keys with a custom env var lookup function.
    ///
    /// This allows testing without modifying actual environment variables.
    pub fn capture_with<F>(keys: &[&str], env_fn: F) -> Self
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let entries = keys
            .iter()
            .map(|key| (key.to_string(), env_fn(key).ok()))
            .collect();
        Self { entries }
    }

    /// An empty view that forwards nothing explicitly.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Re-assert the snapshot on a command about to be spawned.
    ///
    /// Set keys are written with their captured values; absent keys are
    /// removed, which wins over any earlier `env` call for the same key
    /// and over inheritance from the parent.
    pub fn apply(&self, cmd: &mut Command) {
        for (key, value) in &self.entries {
            match value {
                Some(v) => {
                    cmd.env(key, v);
                }
                None => {
                    cmd.env_remove(key);
                }
            }
        }
    }

    /// Whether the given key was set when the snapshot was taken.
    pub fn is_set(&self, key: &str) -> bool {
        self.entries
            .iter()
            .any(|(k, v)| k == key && v.is_some())
    }

    /// Iterate existence-only status for each captured key.
    pub fn entries(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.is_some()))
    }
}

// Values must not leak into logs or panic messages.
impl fmt::Debug for EnvironmentView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (key, set) in self.entries() {
            map.entry(&key, if set { &"SET" } else { &"NOT SET" });
        }
        map.finish()
    }
}
