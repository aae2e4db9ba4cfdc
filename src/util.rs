//! Internal utilities.

use std::ffi::OsStr;

/// Reports whether this process looks like a regular user's desktop
/// session.
///
/// Restarting a system service from such a session makes polkit pop up an
/// authentication dialog, so best-effort restarts are skipped there.
#[must_use]
pub fn running_as_gui_desktop_user() -> bool {
    // SAFETY: `getuid` has no preconditions and cannot fail.
    let uid = unsafe { libc::getuid() };
    is_gui_desktop_user(uid, std::env::var_os("DISPLAY").as_deref())
}

/// Non-root with a display set.
#[must_use]
pub fn is_gui_desktop_user(uid: u32, display: Option<&OsStr>) -> bool {
    uid != 0 && display.is_some_and(|d| !d.is_empty())
}
