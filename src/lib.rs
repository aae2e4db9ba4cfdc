//! # direct-resolver
//!
//! Take over `/etc/resolv.conf` directly and give it back safely.
//!
//! On hosts without a cooperating resolver daemon (no systemd-resolved, no
//! NetworkManager DNS plugin), the only way to point the system at your
//! nameservers is to rewrite `/etc/resolv.conf`. This crate does that while
//! keeping exactly one backup of the previous file and restoring it on
//! shutdown, without clobbering changes other tools made in the meantime.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use direct_resolver::{DirectManager, OsConfig};
//!
//! let manager = DirectManager::new("myapp");
//!
//! // Take over (requires root).
//! manager.set_dns(
//!     &OsConfig::new()
//!         .with_nameserver("100.100.100.100".parse()?)
//!         .with_search_domain("corp.example.com".parse()?),
//! )?;
//!
//! // What would the host use without us?
//! let base = manager.get_base_config()?;
//!
//! // Give it back on shutdown.
//! manager.close()?;
//! ```
//!
//! ## File states
//!
//! | live file | backup | meaning |
//! |-----------|--------|---------|
//! | absent or foreign | none | not managing |
//! | ours | present | took over a foreign file |
//! | ours | none | took over an empty slot |
//! | foreign | present | someone replaced our file; the backup is stale |
//!
//! Ours means the file contains `generated by <app>`. See [`state`] for the
//! transition table.
//!
//! ## Crash recovery
//!
//! Nothing reverts the file if the process dies. Call
//! [`DirectManager::close`] on every exit path; on the next start the
//! manager recognises its own file and keeps the original backup.
//!
//! ## Testing
//!
//! The manager only touches files through [`WholeFileFs`]. Use [`MemFs`] for
//! in-memory tests or [`DirectFs::with_root`] to work inside a temporary
//! directory.
//!
//! ## Permissions
//!
//! Writing to `/etc` requires root. The caller is responsible for privilege
//! elevation.

#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod atomic;
pub mod config;
pub mod configurator;
pub mod direct_manager;
pub mod error;
pub mod fqdn;
pub mod fs;
pub mod owner;
pub mod resolv_conf;
pub mod service;
pub mod state;
pub mod util;

pub use atomic::atomic_write;
pub use config::{OsConfig, RESOLV_CONF, ResolvPaths};
pub use configurator::OsConfigurator;
pub use direct_manager::DirectManager;
pub use error::{FqdnError, ResolverError, Result};
pub use fqdn::Fqdn;
pub use fs::{DirectFs, FsOp, MemFs, WholeFileFs};
pub use owner::{ResolvOwner, detect_owner, is_managed};
pub use resolv_conf::{format_resolv_conf, parse_resolv_conf};
pub use service::{NoServiceControl, ServiceControl, Systemctl};
pub use state::FileState;
