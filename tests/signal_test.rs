//! Signal forwarding integration tests.
//!
//! These drive the real binary: a fake `uv run` traps a signal and exits
//! with a distinctive code, the test signals the launcher, and the
//! launcher's own exit code must mirror whatever the server reported.
#![cfg(unix)]
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use belay::server::SERVER_RELATIVE_PATH;
use std::fs;
use std::io::{BufRead, BufReader};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};
use tempfile::TempDir;

fn setup_home() -> TempDir {
    let temp = TempDir::new().unwrap();
    let artifact = temp.path().join(SERVER_RELATIVE_PATH);
    fs::create_dir_all(artifact.parent().unwrap()).unwrap();
    fs::write(artifact, "print('server')\n").unwrap();
    temp
}

/// Fake `uv` whose `run` branch traps the given signal and exits `code`.
fn trapping_uv(signal: &str, code: i32) -> TempDir {
    use std::os::unix::fs::PermissionsExt;
    let bin = TempDir::new().unwrap();
    let script = format!(
        "#!/bin/sh\ncase \"$1\" in\n  --version) exit 0 ;;\n  sync) exit 0 ;;\n  run)\n    trap 'exit {code}' {signal}\n    echo SERVER_READY\n    while :; do sleep 0.05; done ;;\nesac\n"
    );
    let path = bin.path().join("uv");
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    bin
}

fn spawn_belay(home: &TempDir, uv_bin: &TempDir) -> std::process::Child {
    let path = format!(
        "{}:{}",
        uv_bin.path().display(),
        std::env::var("PATH").unwrap_or_default()
    );
    Command::new(cargo_bin("belay"))
        .env("TASK_ORCHESTRATOR_HOME", home.path())
        .env("PATH", path)
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap()
}

/// Block until the supervised server announces itself on stdout.
fn wait_for_ready(child: &mut std::process::Child) {
    let stdout = child.stdout.take().unwrap();
    let reader = BufReader::new(stdout);
    for line in reader.lines().map_while(std::result::Result::ok) {
        if line.contains("SERVER_READY") {
            return;
        }
    }
    panic!("server never became ready");
}

fn wait_with_timeout(child: &mut std::process::Child, limit: Duration) -> std::process::ExitStatus {
    let start = Instant::now();
    loop {
        if let Some(status) = child.try_wait().unwrap() {
            return status;
        }
        if start.elapsed() > limit {
            let _ = child.kill();
            panic!("launcher did not exit after signal");
        }
        std::thread::sleep(Duration::from_millis(20));
    }
}

#[test]
fn sigterm_is_forwarded_and_exit_code_mirrored() {
    let home = setup_home();
    let uv_bin = trapping_uv("TERM", 42);

    let mut belay = spawn_belay(&home, &uv_bin);
    wait_for_ready(&mut belay);

    unsafe {
        libc::kill(belay.id() as i32, libc::SIGTERM);
    }

    let status = wait_with_timeout(&mut belay, Duration::from_secs(10));
    assert_eq!(status.code(), Some(42));
}

#[test]
fn sigint_is_forwarded_and_exit_code_mirrored() {
    let home = setup_home();
    let uv_bin = trapping_uv("INT", 33);

    let mut belay = spawn_belay(&home, &uv_bin);
    wait_for_ready(&mut belay);

    unsafe {
        libc::kill(belay.id() as i32, libc::SIGINT);
    }

    let status = wait_with_timeout(&mut belay, Duration::from_secs(10));
    assert_eq!(status.code(), Some(33));
}
