//! Interrupt/termination forwarding to the supervised child.
//!
//! Unix signal handlers cannot carry instance data, so the child PID lives
//! in a process-global atomic that the handler reads. The handler itself
//! is restricted to async-signal-safe calls: `write(2)` for the shutdown
//! notice and `kill(2)` to relay the identical signal. The parent then
//! keeps waiting; the child's reaction to the forwarded signal decides
//! the final exit code through the normal wait path.
//!
//! Exactly one child exists at a time, registered by the supervisor right
//! after spawn and cleared once `wait` returns.

#[cfg(unix)]
mod imp {
    use std::sync::atomic::{AtomicI32, Ordering};

    static CHILD_PID: AtomicI32 = AtomicI32::new(0);

    const NOTICE: &[u8] = b"\nShutting down server...\n";

    /// Record the PID signals should be forwarded to.
    pub fn register_child(pid: u32) {
        CHILD_PID.store(pid as i32, Ordering::SeqCst);
    }

    /// Stop forwarding; the child is gone.
    pub fn clear_child() {
        CHILD_PID.store(0, Ordering::SeqCst);
    }

    extern "C" fn forward_signal(sig: libc::c_int) {
        let pid = CHILD_PID.load(Ordering::SeqCst);
        if pid > 0 {
            // SAFETY: write() and kill() are async-signal-safe.
            unsafe {
                let _ = libc::write(
                    libc::STDERR_FILENO,
                    NOTICE.as_ptr() as *const libc::c_void,
                    NOTICE.len(),
                );
                libc::kill(pid, sig);
            }
        }
    }

    /// Install forwarding handlers for SIGINT and SIGTERM.
    ///
    /// Idempotent; call after the child PID is registered.
    pub fn install_forwarding() {
        let handler = forward_signal as extern "C" fn(libc::c_int);
        // SAFETY: the handler only touches an atomic and async-signal-safe
        // syscalls.
        unsafe {
            libc::signal(libc::SIGINT, handler as libc::sighandler_t);
            libc::signal(libc::SIGTERM, handler as libc::sighandler_t);
        }
    }
}

#[cfg(not(unix))]
mod imp {
    /// Signal forwarding is not supported off Unix; Ctrl+C reaches the
    /// whole console process group directly.
    pub fn register_child(_pid: u32) {}

    pub fn clear_child() {}

    pub fn install_forwarding() {}
}

pub use imp::{clear_child, install_forwarding, register_child};
