//! Who wrote the current resolver file?

use std::fmt;

/// A DNS-management subsystem known to write `/etc/resolv.conf`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolvOwner {
    /// `systemd-resolved`, usually through its stub file.
    SystemdResolved,
    /// `NetworkManager` in its default `dns=default` mode.
    NetworkManager,
    /// Debian's `resolvconf` or openresolv.
    Resolvconf,
}

impl ResolvOwner {
    /// The name the subsystem signs its files with.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SystemdResolved => "systemd-resolved",
            Self::NetworkManager => "NetworkManager",
            Self::Resolvconf => "resolvconf",
        }
    }

    /// Lookup order when a comment names more than one subsystem.
    const PRIORITY: [Self; 3] = [Self::SystemdResolved, Self::NetworkManager, Self::Resolvconf];
}

impl fmt::Display for ResolvOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns `true` if `contents` carries the marker written for `app`.
///
/// The marker must end at whitespace or end of line, so a file generated
/// by `myapp-dev` is not mistaken for one generated by `myapp`.
#[must_use]
pub fn is_managed(contents: &[u8], app: &str) -> bool {
    let marker = crate::resolv_conf::marker(app);
    String::from_utf8_lossy(contents).lines().any(|line| {
        line.match_indices(marker.as_str()).any(|(at, _)| {
            line[at + marker.len()..]
                .chars()
                .next()
                .is_none_or(char::is_whitespace)
        })
    })
}

/// Detects the subsystem that generated `contents` from its leading
/// comment block.
///
/// Scanning stops at the first non-blank line that is not a comment, so an
/// owner is only recognised when it signs the header.
#[must_use]
pub fn detect_owner(contents: &[u8]) -> Option<ResolvOwner> {
    let text = String::from_utf8_lossy(contents);
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if !line.starts_with('#') {
            return None;
        }
        if let Some(owner) = ResolvOwner::PRIORITY
            .into_iter()
            .find(|o| line.contains(o.as_str()))
        {
            return Some(owner);
        }
    }
    None
}
