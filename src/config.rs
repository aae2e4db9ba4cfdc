//! Target DNS configuration and file locations.

use crate::fqdn::Fqdn;
use std::net::IpAddr;
use std::path::{Path, PathBuf};

/// The system resolver file.
pub const RESOLV_CONF: &str = "/etc/resolv.conf";

/// The DNS configuration the host should use.
///
/// The default value, with both lists empty, is the "zero" configuration:
/// applying it hands control of the resolver file back to whoever owned it
/// before.
///
/// # Example
///
/// ```
/// use direct_resolver::{Fqdn, OsConfig};
///
/// let config = OsConfig::new()
///     .with_nameserver("100.100.100.100".parse().unwrap())
///     .with_search_domain("corp.example.com".parse::<Fqdn>().unwrap());
///
/// assert!(!config.is_zero());
/// assert!(OsConfig::default().is_zero());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OsConfig {
    /// Nameservers, in the order resolvers should try them.
    pub nameservers: Vec<IpAddr>,

    /// Search domains, in order.
    pub search_domains: Vec<Fqdn>,
}

impl OsConfig {
    /// Creates an empty (zero) configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nameservers: Vec::new(),
            search_domains: Vec::new(),
        }
    }

    /// Appends a nameserver.
    #[must_use]
    pub fn with_nameserver(mut self, ip: IpAddr) -> Self {
        self.nameservers.push(ip);
        self
    }

    /// Appends a search domain.
    #[must_use]
    pub fn with_search_domain(mut self, domain: Fqdn) -> Self {
        self.search_domains.push(domain);
        self
    }

    /// Returns `true` if this is the zero configuration.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.nameservers.is_empty() && self.search_domains.is_empty()
    }
}

/// Locations of the files the manager touches.
///
/// All paths are absolute; see [`DirectFs::with_root`](crate::DirectFs::with_root)
/// for running against a sandbox directory.
///
/// # Example
///
/// ```
/// use direct_resolver::ResolvPaths;
///
/// let paths = ResolvPaths::for_app("myapp");
/// assert_eq!(paths.resolv().to_str(), Some("/etc/resolv.conf"));
/// assert_eq!(paths.backup().to_str(), Some("/etc/resolv.pre-myapp-backup.conf"));
/// assert_eq!(paths.legacy().to_str(), Some("/etc/resolv.myapp.conf"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvPaths {
    resolv: PathBuf,
    backup: PathBuf,
    legacy: PathBuf,
}

impl ResolvPaths {
    /// Standard locations for `app`.
    #[must_use]
    pub fn for_app(app: &str) -> Self {
        Self {
            resolv: PathBuf::from(RESOLV_CONF),
            backup: PathBuf::from(format!("/etc/resolv.pre-{app}-backup.conf")),
            legacy: PathBuf::from(format!("/etc/resolv.{app}.conf")),
        }
    }

    /// Overrides the live resolver file.
    #[must_use]
    pub fn with_resolv(mut self, path: impl Into<PathBuf>) -> Self {
        self.resolv = path.into();
        self
    }

    /// Overrides the backup file.
    #[must_use]
    pub fn with_backup(mut self, path: impl Into<PathBuf>) -> Self {
        self.backup = path.into();
        self
    }

    /// Overrides the legacy file removed on close.
    #[must_use]
    pub fn with_legacy(mut self, path: impl Into<PathBuf>) -> Self {
        self.legacy = path.into();
        self
    }

    /// The live resolver file.
    #[must_use]
    pub fn resolv(&self) -> &Path {
        &self.resolv
    }

    /// Where the pre-takeover file is kept.
    #[must_use]
    pub fn backup(&self) -> &Path {
        &self.backup
    }

    /// Left over by an older symlink-based layout.
    #[must_use]
    pub fn legacy(&self) -> &Path {
        &self.legacy
    }
}
