//! Restarting the resolver service after the file changes.
//!
//! When this crate replaces a file that `systemd-resolved` was managing,
//! resolved only picks up the change on restart. That restart is advisory:
//! the resolver file is already correct, so nothing here can fail the
//! caller.

use std::io;
use std::process::{Command, Stdio};

/// Unit name of the resolver daemon that gets restarted.
pub const RESOLVED_SERVICE: &str = "systemd-resolved.service";

/// Queries and restarts system services.
pub trait ServiceControl {
    /// Returns `true` if `unit` is running.
    fn is_active(&self, unit: &str) -> bool;

    /// Restarts `unit`.
    ///
    /// # Errors
    ///
    /// Returns an error if the restart could not be performed.
    fn restart(&self, unit: &str) -> io::Result<()>;
}

/// [`ServiceControl`] through the `systemctl` binary.
///
/// On non-Linux targets, or when `systemctl` is not on `PATH`, every unit
/// is reported inactive.
#[derive(Debug, Clone, Copy, Default)]
pub struct Systemctl;

impl ServiceControl for Systemctl {
    fn is_active(&self, unit: &str) -> bool {
        if !cfg!(target_os = "linux") || which::which("systemctl").is_err() {
            return false;
        }
        // `is-active` exits 3 for an inactive unit.
        Command::new("systemctl")
            .args(["is-active", "--quiet", unit])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok_and(|s| s.success())
    }

    fn restart(&self, unit: &str) -> io::Result<()> {
        let status = Command::new("systemctl")
            .args(["restart", unit])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()?;
        if status.success() {
            Ok(())
        } else {
            Err(io::Error::other(format!(
                "systemctl restart {unit} exited with {status}"
            )))
        }
    }
}

/// [`ServiceControl`] that sees no running services and restarts nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoServiceControl;

impl ServiceControl for NoServiceControl {
    fn is_active(&self, _unit: &str) -> bool {
        false
    }

    fn restart(&self, _unit: &str) -> io::Result<()> {
        Ok(())
    }
}

impl<T: ServiceControl + ?Sized> ServiceControl for Box<T> {
    fn is_active(&self, unit: &str) -> bool {
        (**self).is_active(unit)
    }

    fn restart(&self, unit: &str) -> io::Result<()> {
        (**self).restart(unit)
    }
}

/// Restarts `unit` if it is running. Fire-and-forget: returns nothing, and
/// a failed restart is only logged.
pub fn restart_best_effort(control: &impl ServiceControl, unit: &str) {
    if !control.is_active(unit) {
        tracing::trace!(unit, "Service not active, no restart needed");
        return;
    }
    match control.restart(unit) {
        Ok(()) => tracing::debug!(unit, "Restarted service"),
        Err(e) => tracing::debug!(unit, error = %e, "Best-effort service restart failed"),
    }
}
