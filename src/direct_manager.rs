//! Direct management of `/etc/resolv.conf`.
//!
//! The live file is replaced wholesale. Whatever was there before is moved
//! to a backup path and moved back when the configuration is cleared or the
//! manager is closed. Every file written here carries the marker
//! `generated by <app>`, which is how a later run tells our file from one
//! that another tool put in place.

use crate::atomic::atomic_write;
use crate::config::{OsConfig, ResolvPaths};
use crate::configurator::OsConfigurator;
use crate::error::Result;
use crate::fs::{self, DirectFs, WholeFileFs};
use crate::owner::{ResolvOwner, detect_owner, is_managed};
use crate::resolv_conf::{format_resolv_conf, parse_resolv_conf};
use crate::service::{self, RESOLVED_SERVICE, ServiceControl, Systemctl};
use crate::state::{BackupStep, FileState, LiveFile, RestoreStep};
use crate::util::running_as_gui_desktop_user;
use std::io;

/// Permissions of the generated resolver file.
const RESOLV_CONF_MODE: u32 = 0o644;

/// Takes over `/etc/resolv.conf` and restores it afterwards.
///
/// # Lifecycle
///
/// 1. [`set_dns`](Self::set_dns) with a non-zero config moves the existing
///    file to the backup path (first time only) and writes ours.
/// 2. Further `set_dns` calls rewrite our file in place; the backup is
///    left untouched.
/// 3. [`set_dns`](Self::set_dns) with the zero config, or
///    [`close`](Self::close), moves the backup back. If there was no file
///    before the takeover, ours is deleted instead.
///
/// If another tool rewrites the live file while we hold a backup, restoring
/// would destroy its newer content, so the backup is deleted instead.
///
/// # Crash recovery
///
/// Nothing reacts to the process going away. If it exits without calling
/// [`close`](Self::close), the host keeps pointing at our nameservers. The
/// next run picks up where it left off: our file is recognised by its
/// marker and the backup is still in place for the eventual restore.
///
/// # Races
///
/// Other processes may rewrite the file between our `stat` and our write.
/// This mode is only chosen when no resolver daemon is managing the file,
/// so that window is accepted.
///
/// # Example
///
/// ```rust,ignore
/// use direct_resolver::{DirectManager, OsConfig};
///
/// let manager = DirectManager::new("myapp");
/// manager.set_dns(&OsConfig::new().with_nameserver("100.100.100.100".parse()?))?;
/// // ...
/// manager.close()?;
/// ```
#[derive(Debug)]
pub struct DirectManager<F = DirectFs, S = Systemctl> {
    app: String,
    paths: ResolvPaths,
    fs: F,
    service: S,
}

impl DirectManager {
    /// Creates a manager for `app` on the real filesystem.
    #[must_use]
    pub fn new(app: impl Into<String>) -> Self {
        let app = app.into();
        Self {
            paths: ResolvPaths::for_app(&app),
            app,
            fs: DirectFs::new(),
            service: Systemctl,
        }
    }
}

impl<F, S> DirectManager<F, S> {
    /// Replaces the filesystem (useful for testing).
    #[must_use]
    pub fn fs<G>(self, fs: G) -> DirectManager<G, S> {
        DirectManager {
            app: self.app,
            paths: self.paths,
            fs,
            service: self.service,
        }
    }

    /// Replaces the service controller used for resolver restarts.
    #[must_use]
    pub fn service<T>(self, service: T) -> DirectManager<F, T> {
        DirectManager {
            app: self.app,
            paths: self.paths,
            fs: self.fs,
            service,
        }
    }

    /// Overrides the file locations.
    #[must_use]
    pub fn paths(mut self, paths: ResolvPaths) -> Self {
        self.paths = paths;
        self
    }

    /// The application name written into the marker.
    #[must_use]
    pub fn app(&self) -> &str {
        &self.app
    }

    /// The file locations in use.
    #[must_use]
    pub const fn resolv_paths(&self) -> &ResolvPaths {
        &self.paths
    }
}

impl<F: WholeFileFs, S: ServiceControl> DirectManager<F, S> {
    /// Observes the live file and the backup.
    ///
    /// # Errors
    ///
    /// Returns [`ResolverError::Io`](crate::ResolverError::Io) if either
    /// path cannot be inspected.
    pub fn snapshot(&self) -> Result<FileState> {
        Ok(self.observe()?.0)
    }

    /// Returns `true` if the live file is one we wrote.
    ///
    /// A missing or non-regular file is not ours.
    ///
    /// # Errors
    ///
    /// Returns [`ResolverError::Io`](crate::ResolverError::Io) on I/O failure.
    pub fn is_owned(&self) -> Result<bool> {
        Ok(self.live_state()?.0 == LiveFile::Managed)
    }

    /// Returns the subsystem that appears to manage the live file.
    ///
    /// # Errors
    ///
    /// Returns [`ResolverError::Io`](crate::ResolverError::Io) on I/O failure.
    pub fn foreign_owner(&self) -> Result<Option<ResolvOwner>> {
        Ok(self.live_state()?.1.as_deref().and_then(detect_owner))
    }

    /// Moves a foreign live file to the backup path.
    ///
    /// Our own file is never backed up. With no live file at all, any
    /// backup left from an earlier takeover is deleted so it cannot be
    /// restored later over a host that has moved on.
    ///
    /// # Errors
    ///
    /// Returns [`ResolverError::Io`](crate::ResolverError::Io) on I/O failure.
    pub fn backup_config(&self) -> Result<()> {
        let (state, contents) = self.observe()?;
        let resolv = self.paths.resolv();
        let backup = self.paths.backup();

        match state.backup_step() {
            BackupStep::Nothing => {
                tracing::debug!(?state, "No backup needed");
            }
            BackupStep::DropStaleBackup => {
                fs::remove_if_exists(&self.fs, backup)?;
                tracing::info!(
                    path = %backup.display(),
                    "No resolver file present, removed stale backup"
                );
            }
            BackupStep::MoveAside => {
                if let Some(owner) = contents.as_deref().and_then(detect_owner) {
                    tracing::warn!(
                        owner = %owner,
                        path = %resolv.display(),
                        "Taking over resolver file managed by another service"
                    );
                }
                self.fs.rename(resolv, backup)?;
                tracing::info!(
                    from = %resolv.display(),
                    to = %backup.display(),
                    "Backed up resolver file"
                );
            }
        }
        Ok(())
    }

    /// Puts the backup back in place, or drops it if the live file has
    /// since been replaced by someone else.
    ///
    /// Without a backup, our own file is deleted (there was nothing before
    /// it); a foreign file is left alone.
    ///
    /// # Errors
    ///
    /// Returns [`ResolverError::Io`](crate::ResolverError::Io) on I/O failure.
    pub fn restore_backup(&self) -> Result<()> {
        let state = self.snapshot()?;
        let resolv = self.paths.resolv();
        let backup = self.paths.backup();

        match state.restore_step() {
            RestoreStep::Nothing => {
                tracing::debug!("No resolver backup, nothing to restore");
            }
            RestoreStep::RemoveOurs => {
                fs::remove_if_exists(&self.fs, resolv)?;
                tracing::info!(
                    path = %resolv.display(),
                    "No resolver file existed before us, removed ours"
                );
            }
            RestoreStep::DiscardBackup => {
                fs::remove_if_exists(&self.fs, backup)?;
                tracing::info!(
                    path = %resolv.display(),
                    "Resolver file replaced by another tool, discarded backup"
                );
            }
            RestoreStep::Restore => {
                self.fs.rename(backup, resolv)?;
                tracing::info!(path = %resolv.display(), "Restored resolver file from backup");
            }
        }
        Ok(())
    }

    /// Applies `config`, or hands the file back if it is zero.
    ///
    /// Calling this again with the same config rewrites the same bytes and
    /// leaves the backup alone.
    ///
    /// # Errors
    ///
    /// Returns [`ResolverError::Io`](crate::ResolverError::Io) on I/O
    /// failure, or [`ResolverError::RandomSource`](crate::ResolverError::RandomSource)
    /// if no temporary file name could be generated.
    pub fn set_dns(&self, config: &OsConfig) -> Result<()> {
        if config.is_zero() {
            self.restore_backup()?;
        } else {
            self.backup_config()?;
            let text = format_resolv_conf(&self.app, &config.nameservers, &config.search_domains);
            atomic_write(&self.fs, self.paths.resolv(), text.as_bytes(), RESOLV_CONF_MODE)?;
            tracing::info!(
                nameservers = ?config.nameservers,
                search_domains = config.search_domains.len(),
                "Wrote resolver file"
            );
        }
        self.notify_resolver_service();
        Ok(())
    }

    /// Returns the configuration in effect without us: the backup while we
    /// own the live file, the live file otherwise.
    ///
    /// A missing file reads as the zero config.
    ///
    /// # Errors
    ///
    /// Returns [`ResolverError::Io`](crate::ResolverError::Io) on I/O failure,
    /// or a parse error if the file content is malformed.
    pub fn get_base_config(&self) -> Result<OsConfig> {
        let path = if self.is_owned()? {
            self.paths.backup()
        } else {
            self.paths.resolv()
        };
        match self.fs.read_file(path) {
            Ok(bytes) => parse_resolv_conf(&String::from_utf8_lossy(&bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(OsConfig::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Undoes every change. Safe to call more than once.
    ///
    /// # Errors
    ///
    /// Returns [`ResolverError::Io`](crate::ResolverError::Io) if the backup
    /// could not be restored or discarded.
    pub fn close(&self) -> Result<()> {
        let legacy = self.paths.legacy();
        match fs::remove_if_exists(&self.fs, legacy) {
            Ok(true) => tracing::info!(path = %legacy.display(), "Removed legacy resolver file"),
            Ok(false) => {}
            Err(e) => tracing::debug!(
                path = %legacy.display(),
                error = %e,
                "Failed to remove legacy resolver file"
            ),
        }

        self.restore_backup()?;
        self.notify_resolver_service();
        Ok(())
    }

    /// Restarts systemd-resolved so it notices the file changed.
    ///
    /// We should not be in direct mode when resolved is running, but if
    /// detection got it wrong, a restart brings resolved back in line with
    /// the file.
    fn notify_resolver_service(&self) {
        if running_as_gui_desktop_user() {
            tracing::debug!("Desktop session, not restarting resolver service");
            return;
        }
        service::restart_best_effort(&self.service, RESOLVED_SERVICE);
    }

    fn observe(&self) -> Result<(FileState, Option<Vec<u8>>)> {
        let (live, contents) = self.live_state()?;
        let backup = fs::probe(&self.fs, self.paths.backup())?.is_some();
        Ok((FileState::new(live, backup), contents))
    }

    fn live_state(&self) -> Result<(LiveFile, Option<Vec<u8>>)> {
        let resolv = self.paths.resolv();
        match fs::probe(&self.fs, resolv)? {
            None => Ok((LiveFile::Absent, None)),
            Some(false) => Ok((LiveFile::Foreign, None)),
            Some(true) => match self.fs.read_file(resolv) {
                Ok(bytes) if is_managed(&bytes, &self.app) => Ok((LiveFile::Managed, Some(bytes))),
                Ok(bytes) => Ok((LiveFile::Foreign, Some(bytes))),
                Err(e) if e.kind() == io::ErrorKind::NotFound => Ok((LiveFile::Absent, None)),
                Err(e) => Err(e.into()),
            },
        }
    }
}

impl<F: WholeFileFs, S: ServiceControl> OsConfigurator for DirectManager<F, S> {
    fn set_dns(&self, config: &OsConfig) -> Result<()> {
        Self::set_dns(self, config)
    }

    fn get_base_config(&self) -> Result<OsConfig> {
        Self::get_base_config(self)
    }

    fn supports_split_dns(&self) -> bool {
        false
    }

    fn close(&self) -> Result<()> {
        Self::close(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResolverError;
    use crate::fqdn::Fqdn;
    use crate::fs::{FsOp, MemFs};
    use std::cell::Cell;
    use std::path::Path;

    const RESOLV: &str = "/etc/resolv.conf";
    const BACKUP: &str = "/etc/resolv.pre-testapp-backup.conf";
    const LEGACY: &str = "/etc/resolv.testapp.conf";
    const FOREIGN: &str = "nameserver 8.8.8.8\n";

    #[derive(Debug, Default)]
    struct FakeResolved {
        active: bool,
        restarts: Cell<usize>,
    }

    impl ServiceControl for FakeResolved {
        fn is_active(&self, _unit: &str) -> bool {
            self.active
        }

        fn restart(&self, _unit: &str) -> io::Result<()> {
            self.restarts.set(self.restarts.get() + 1);
            Err(io::Error::other("restart refused"))
        }
    }

    fn manager(fs: &MemFs) -> DirectManager<&MemFs, FakeResolved> {
        DirectManager::new("testapp")
            .fs(fs)
            .service(FakeResolved::default())
    }

    fn cloudflare() -> OsConfig {
        OsConfig::new().with_nameserver("1.1.1.1".parse().unwrap())
    }

    fn ours(config: &OsConfig) -> String {
        format_resolv_conf("testapp", &config.nameservers, &config.search_domains)
    }

    #[test]
    fn empty_fs_set_then_clear() {
        let fs = MemFs::new();
        let m = manager(&fs);

        m.set_dns(&cloudflare()).unwrap();
        let text = fs.contents_str(RESOLV).unwrap();
        assert!(text.starts_with("# resolv.conf(5) file generated by testapp\n"));
        assert!(text.contains("nameserver 1.1.1.1\n"));
        assert_eq!(fs.mode(RESOLV), Some(0o644));
        assert!(!fs.exists(BACKUP));

        m.set_dns(&OsConfig::new()).unwrap();
        assert!(fs.paths().is_empty());
    }

    #[test]
    fn foreign_file_backed_up_and_restored_on_close() {
        let fs = MemFs::new();
        fs.insert(RESOLV, FOREIGN);
        let m = manager(&fs);

        m.set_dns(&cloudflare()).unwrap();
        assert_eq!(fs.contents_str(BACKUP).as_deref(), Some(FOREIGN));
        assert_eq!(fs.contents_str(RESOLV), Some(ours(&cloudflare())));

        m.close().unwrap();
        assert_eq!(fs.contents_str(RESOLV).as_deref(), Some(FOREIGN));
        assert!(!fs.exists(BACKUP));
    }

    #[test]
    fn set_dns_is_idempotent() {
        let fs = MemFs::new();
        fs.insert(RESOLV, FOREIGN);
        let m = manager(&fs);

        m.set_dns(&cloudflare()).unwrap();
        let first = fs.contents(RESOLV);
        m.set_dns(&cloudflare()).unwrap();

        assert_eq!(fs.contents(RESOLV), first);
        assert_eq!(fs.contents_str(BACKUP).as_deref(), Some(FOREIGN));
        assert_eq!(
            fs.paths(),
            vec![Path::new(RESOLV).to_path_buf(), Path::new(BACKUP).to_path_buf()]
        );
    }

    #[test]
    fn backup_never_holds_our_content() {
        let fs = MemFs::new();
        fs.insert(RESOLV, ours(&cloudflare()));
        let m = manager(&fs);

        m.backup_config().unwrap();
        assert!(!fs.exists(BACKUP));
        assert!(fs.exists(RESOLV));
    }

    #[test]
    fn backup_drops_stale_backup_when_no_live_file() {
        let fs = MemFs::new();
        fs.insert(BACKUP, FOREIGN);
        let m = manager(&fs);

        m.backup_config().unwrap();
        assert!(fs.paths().is_empty());
    }

    #[test]
    fn restore_discards_backup_when_foreign_took_over() {
        let fs = MemFs::new();
        fs.insert(RESOLV, FOREIGN);
        let m = manager(&fs);
        m.set_dns(&cloudflare()).unwrap();

        // NetworkManager rewrites the file behind our back.
        let newer = "# Generated by NetworkManager\nnameserver 192.168.1.1\n";
        fs.insert(RESOLV, newer);

        m.set_dns(&OsConfig::new()).unwrap();
        assert_eq!(fs.contents_str(RESOLV).as_deref(), Some(newer));
        assert!(!fs.exists(BACKUP));
    }

    #[test]
    fn restore_recreates_deleted_live_file() {
        let fs = MemFs::new();
        fs.insert(RESOLV, FOREIGN);
        let m = manager(&fs);
        m.set_dns(&cloudflare()).unwrap();
        fs.remove(Path::new(RESOLV)).unwrap();

        m.restore_backup().unwrap();
        assert_eq!(fs.contents_str(RESOLV).as_deref(), Some(FOREIGN));
        assert!(!fs.exists(BACKUP));
    }

    #[test]
    fn restore_without_backup_is_noop() {
        let fs = MemFs::new();
        fs.insert(RESOLV, FOREIGN);
        manager(&fs).restore_backup().unwrap();
        assert_eq!(fs.contents_str(RESOLV).as_deref(), Some(FOREIGN));
    }

    #[test]
    fn second_run_after_crash_keeps_original_backup() {
        let fs = MemFs::new();
        fs.insert(RESOLV, FOREIGN);
        manager(&fs).set_dns(&cloudflare()).unwrap();

        // New process, different config, no close in between.
        let quad9 = OsConfig::new().with_nameserver("9.9.9.9".parse().unwrap());
        let m = manager(&fs);
        m.set_dns(&quad9).unwrap();
        assert_eq!(fs.contents_str(RESOLV), Some(ours(&quad9)));
        assert_eq!(fs.contents_str(BACKUP).as_deref(), Some(FOREIGN));

        m.close().unwrap();
        assert_eq!(fs.contents_str(RESOLV).as_deref(), Some(FOREIGN));
    }

    #[test]
    fn non_regular_live_file_is_moved_aside() {
        let fs = MemFs::new();
        fs.insert_dir(RESOLV);
        let m = manager(&fs);

        assert!(!m.is_owned().unwrap());
        m.set_dns(&cloudflare()).unwrap();
        assert!(fs.exists(BACKUP));
        assert!(m.is_owned().unwrap());
    }

    #[test]
    fn close_removes_legacy_file_and_is_idempotent() {
        let fs = MemFs::new();
        fs.insert(RESOLV, FOREIGN);
        fs.insert(LEGACY, "nameserver 100.100.100.100\n");
        let m = manager(&fs);
        m.set_dns(&cloudflare()).unwrap();

        m.close().unwrap();
        m.close().unwrap();
        assert_eq!(fs.paths(), vec![Path::new(RESOLV).to_path_buf()]);
        assert_eq!(fs.contents_str(RESOLV).as_deref(), Some(FOREIGN));
    }

    #[test]
    fn close_ignores_legacy_removal_failure() {
        let fs = MemFs::new();
        fs.insert(RESOLV, FOREIGN);
        let m = manager(&fs);
        m.set_dns(&cloudflare()).unwrap();

        fs.fail_next(FsOp::Remove);
        m.close().unwrap();
        assert_eq!(fs.contents_str(RESOLV).as_deref(), Some(FOREIGN));
    }

    #[test]
    fn io_errors_propagate() {
        let fs = MemFs::new();
        fs.insert(RESOLV, FOREIGN);
        let m = manager(&fs);

        fs.fail_next(FsOp::Stat);
        assert!(m.set_dns(&cloudflare()).is_err());
        assert_eq!(fs.contents_str(RESOLV).as_deref(), Some(FOREIGN));

        fs.fail_next(FsOp::Rename);
        assert!(m.set_dns(&cloudflare()).is_err());
        assert_eq!(fs.contents_str(RESOLV).as_deref(), Some(FOREIGN));
        assert!(!fs.exists(BACKUP));
    }

    #[test]
    fn close_propagates_restore_failure() {
        let fs = MemFs::new();
        fs.insert(RESOLV, FOREIGN);
        let m = DirectManager::new("testapp").fs(&fs).service(FakeResolved {
            active: true,
            ..FakeResolved::default()
        });
        m.set_dns(&cloudflare()).unwrap();
        let restarts = m.service.restarts.get();

        fs.fail_next(FsOp::Rename);
        assert!(matches!(m.close(), Err(ResolverError::Io(_))));
        assert_eq!(fs.contents_str(RESOLV), Some(ours(&cloudflare())));
        assert_eq!(fs.contents_str(BACKUP).as_deref(), Some(FOREIGN));
        assert_eq!(m.service.restarts.get(), restarts);

        m.close().unwrap();
        assert_eq!(fs.contents_str(RESOLV).as_deref(), Some(FOREIGN));
        assert!(!fs.exists(BACKUP));
    }

    #[test]
    fn file_of_app_sharing_a_name_prefix_is_foreign() {
        let fs = MemFs::new();
        let theirs = "# resolv.conf(5) file generated by testapp-dev
nameserver 10.9.9.9
";
        fs.insert(RESOLV, theirs);
        let m = manager(&fs);

        assert!(!m.is_owned().unwrap());
        m.set_dns(&cloudflare()).unwrap();
        assert_eq!(fs.contents_str(BACKUP).as_deref(), Some(theirs));
        assert!(m.is_owned().unwrap());

        m.close().unwrap();
        assert_eq!(fs.contents_str(RESOLV).as_deref(), Some(theirs));
        assert!(!fs.exists(BACKUP));
    }

    #[test]
    fn debug_shows_app_and_paths() {
        let fs = MemFs::new();
        let shown = format!("{:?}", manager(&fs));
        assert!(shown.contains("testapp"));
        assert!(shown.contains("resolv.pre-testapp-backup.conf"));
    }

    #[test]
    fn failed_write_after_backup_is_recoverable() {
        let fs = MemFs::new();
        fs.insert(RESOLV, FOREIGN);
        let m = manager(&fs);

        fs.fail_next(FsOp::Write);
        assert!(m.set_dns(&cloudflare()).is_err());
        // The original is safe in the backup and nothing partial is live.
        assert!(!fs.exists(RESOLV));
        assert_eq!(fs.contents_str(BACKUP).as_deref(), Some(FOREIGN));

        m.close().unwrap();
        assert_eq!(fs.contents_str(RESOLV).as_deref(), Some(FOREIGN));
    }

    #[test]
    fn base_config_reads_backup_while_owned() {
        let fs = MemFs::new();
        fs.insert(RESOLV, "nameserver 8.8.8.8\nsearch home.arpa\n");
        let m = manager(&fs);

        let base = m.get_base_config().unwrap();
        assert_eq!(base.nameservers, vec!["8.8.8.8".parse::<std::net::IpAddr>().unwrap()]);

        m.set_dns(&cloudflare()).unwrap();
        assert_eq!(m.get_base_config().unwrap(), base);
        assert_eq!(base.search_domains, vec![Fqdn::new("home.arpa").unwrap()]);
    }

    #[test]
    fn base_config_of_missing_files_is_zero() {
        let fs = MemFs::new();
        let m = manager(&fs);
        assert!(m.get_base_config().unwrap().is_zero());

        m.set_dns(&cloudflare()).unwrap();
        assert!(m.get_base_config().unwrap().is_zero());
    }

    #[test]
    fn base_config_parse_error_propagates() {
        let fs = MemFs::new();
        fs.insert(RESOLV, "nameserver not-an-ip\n");
        assert!(manager(&fs).get_base_config().unwrap_err().is_parse_error());
    }

    #[test]
    fn foreign_owner_detection() {
        let fs = MemFs::new();
        let m = manager(&fs);
        assert_eq!(m.foreign_owner().unwrap(), None);

        fs.insert(
            RESOLV,
            "# managed by man:systemd-resolved(8).\nnameserver 127.0.0.53\n",
        );
        assert_eq!(
            m.foreign_owner().unwrap(),
            Some(ResolvOwner::SystemdResolved)
        );
    }

    #[test]
    fn snapshot_reflects_files() {
        let fs = MemFs::new();
        let m = manager(&fs);
        assert_eq!(m.snapshot().unwrap(), FileState::new(LiveFile::Absent, false));

        fs.insert(RESOLV, FOREIGN);
        m.set_dns(&cloudflare()).unwrap();
        assert_eq!(m.snapshot().unwrap(), FileState::new(LiveFile::Managed, true));
    }

    #[test]
    fn restart_is_attempted_only_when_resolved_active() {
        let fs = MemFs::new();
        let expected = usize::from(!running_as_gui_desktop_user());

        let m = manager(&fs);
        m.set_dns(&cloudflare()).unwrap();
        assert_eq!(m.service.restarts.get(), 0);

        let m = DirectManager::new("testapp").fs(&fs).service(FakeResolved {
            active: true,
            ..FakeResolved::default()
        });
        // The restart fails, which must not fail the call.
        m.set_dns(&cloudflare()).unwrap();
        assert_eq!(m.service.restarts.get(), expected);
        m.close().unwrap();
        assert_eq!(m.service.restarts.get(), expected * 2);
    }

    #[test]
    fn never_supports_split_dns() {
        let fs = MemFs::new();
        let m: &dyn OsConfigurator = &manager(&fs);
        assert!(!m.supports_split_dns());
    }
}
