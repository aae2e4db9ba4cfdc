//! Ownership state of the resolver file and its backup.
//!
//! The manager observes a [`FileState`] once per operation and then acts on
//! the step the transition function returns, instead of interleaving
//! `stat` calls with decisions.
//!
//! | live file | backup | [`backup_step`](FileState::backup_step) | [`restore_step`](FileState::restore_step) |
//! |-----------|--------|-------------------|------------------|
//! | absent    | no     | nothing           | nothing          |
//! | absent    | yes    | drop stale backup | restore          |
//! | foreign   | no     | move aside        | nothing          |
//! | foreign   | yes    | move aside        | discard backup   |
//! | managed   | no     | nothing           | remove ours      |
//! | managed   | yes    | nothing           | restore          |

/// What currently sits at the live resolver path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveFile {
    /// Nothing exists at the path.
    Absent,
    /// Content without our marker, or a non-regular entry.
    Foreign,
    /// Content we generated.
    Managed,
}

/// Combined state of the live file and the backup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileState {
    /// State of the live resolver file.
    pub live: LiveFile,
    /// Whether a backup file exists.
    pub backup: bool,
}

/// Action taken before writing our configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackupStep {
    /// Leave both files alone.
    Nothing,
    /// No live file to protect; delete the old backup so it is never
    /// restored over a host that has since dropped its config.
    DropStaleBackup,
    /// Rename the foreign live file to the backup path.
    MoveAside,
}

/// Action taken when handing the file back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreStep {
    /// No backup exists and the live file is not ours.
    Nothing,
    /// We created the live file from nothing; delete it.
    RemoveOurs,
    /// Someone else rewrote the live file; keep theirs, delete the backup.
    DiscardBackup,
    /// Rename the backup over the live path.
    Restore,
}

impl FileState {
    /// Creates a state.
    #[must_use]
    pub const fn new(live: LiveFile, backup: bool) -> Self {
        Self { live, backup }
    }

    /// Decides how to protect the current file before a takeover.
    ///
    /// A managed live file is never moved: the backup must only ever hold
    /// foreign content.
    #[must_use]
    pub const fn backup_step(self) -> BackupStep {
        match self.live {
            LiveFile::Absent if self.backup => BackupStep::DropStaleBackup,
            LiveFile::Absent | LiveFile::Managed => BackupStep::Nothing,
            LiveFile::Foreign => BackupStep::MoveAside,
        }
    }

    /// Decides how to hand the file back.
    #[must_use]
    pub const fn restore_step(self) -> RestoreStep {
        match (self.live, self.backup) {
            (LiveFile::Managed, false) => RestoreStep::RemoveOurs,
            (_, false) => RestoreStep::Nothing,
            (LiveFile::Foreign, true) => RestoreStep::DiscardBackup,
            (LiveFile::Absent | LiveFile::Managed, true) => RestoreStep::Restore,
        }
    }

    /// State after [`backup_step`](Self::backup_step) has been carried out.
    #[must_use]
    pub const fn after_backup(self) -> Self {
        match self.backup_step() {
            BackupStep::Nothing => self,
            BackupStep::DropStaleBackup => Self::new(LiveFile::Absent, false),
            BackupStep::MoveAside => Self::new(LiveFile::Absent, true),
        }
    }

    /// State after [`restore_step`](Self::restore_step) has been carried
    /// out. The restored live file is foreign by construction.
    #[must_use]
    pub const fn after_restore(self) -> Self {
        match self.restore_step() {
            RestoreStep::Nothing => self,
            RestoreStep::RemoveOurs => Self::new(LiveFile::Absent, false),
            RestoreStep::DiscardBackup | RestoreStep::Restore => {
                Self::new(LiveFile::Foreign, false)
            }
        }
    }
}
