//! The interface DNS orchestrators program against.

use crate::config::OsConfig;
use crate::error::Result;

/// A strategy for applying DNS configuration to the host.
///
/// Implementations are interchangeable from the orchestrator's point of
/// view. [`DirectManager`](crate::DirectManager) is the one that rewrites
/// `/etc/resolv.conf` itself.
pub trait OsConfigurator {
    /// Applies `config`. The zero configuration removes ours.
    ///
    /// # Errors
    ///
    /// Returns an error if the host configuration could not be changed.
    fn set_dns(&self, config: &OsConfig) -> Result<()>;

    /// Returns the configuration the host would use without us.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration could not be read or parsed.
    fn get_base_config(&self) -> Result<OsConfig>;

    /// Whether per-domain nameservers can be configured.
    fn supports_split_dns(&self) -> bool;

    /// Undoes every change. Must be called before the process exits.
    ///
    /// # Errors
    ///
    /// Returns an error if the original configuration could not be put back.
    fn close(&self) -> Result<()>;
}
