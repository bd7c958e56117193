use crate::models::config::{
    Config, BACKUP_FILE_PREFIX, BACKUP_TIMESTAMP_FORMAT, MAX_BACKUP_FILES,
};
use crate::models::dry_run_mode::DryRunMode;
use crate::models::error::{BackupError, PathKind, Result};
use crate::models::run_outcome::RunOutcome;
use crate::service::compare::files_identical;
use crate::utils::clock::{Clock, LocalClock};
use crate::utils::directory::get_prefixed_files_newest_first;
use log::{debug, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Keeps a bounded, newest-first set of copies of the bookmarks file
pub struct BackupRotator<C: Clock = LocalClock> {
    config: Config,
    clock: C,
    dry_run_mode: DryRunMode,
}

impl BackupRotator<LocalClock> {
    pub fn new(config: Config, dry_run_mode: DryRunMode) -> Self {
        Self::with_clock(config, dry_run_mode, LocalClock)
    }
}

impl<C: Clock> BackupRotator<C> {
    pub fn with_clock(config: Config, dry_run_mode: DryRunMode, clock: C) -> Self {
        Self {
            config,
            clock,
            dry_run_mode,
        }
    }

    /// Checks that both folders and the bookmarks file exist
    pub fn validate(&self) -> Result<()> {
        if !self.config.backup_dir.exists() {
            return Err(BackupError::PathNotFound {
                kind: PathKind::Backup,
                path: self.config.backup_dir.clone(),
            });
        }
        if !self.config.bookmarks_dir.exists() {
            return Err(BackupError::PathNotFound {
                kind: PathKind::Bookmarks,
                path: self.config.bookmarks_dir.clone(),
            });
        }
        let bookmarks_file = self.config.bookmarks_file();
        if !bookmarks_file.exists() {
            return Err(BackupError::SourceFileMissing {
                path: bookmarks_file,
            });
        }
        Ok(())
    }

    /// Backup file names in the backup folder, newest first
    pub fn list_backups(&self) -> Result<Vec<String>> {
        let backups = get_prefixed_files_newest_first(&self.config.backup_dir, BACKUP_FILE_PREFIX)?;
        debug!(
            "Found {} existing backups in {}",
            backups.len(),
            self.config.backup_dir.display()
        );
        Ok(backups)
    }

    /// Backs up the bookmarks file if it changed since the newest backup, then
    /// removes at most one old backup to respect the retention cap
    pub fn run(&self) -> Result<RunOutcome> {
        self.validate()?;
        let prefix = self.dry_run_mode.log_prefix();
        let bookmarks_file = self.config.bookmarks_file();

        let existing = self.list_backups()?;
        if let Some(newest) = existing.first() {
            let latest_backup = self.config.backup_path(newest);
            if files_identical(&latest_backup, &bookmarks_file)? {
                info!(
                    "{}Bookmarks unchanged since {}, nothing to back up",
                    prefix, newest
                );
                return Ok(RunOutcome::Unchanged { latest_backup });
            }
            debug!("Bookmarks differ from {}", newest);
        } else {
            debug!("No existing backups, creating the first one");
        }

        let backup = self.config.backup_path(&self.next_backup_name());
        if self.dry_run_mode.should_copy_files() {
            copy_new_file(&bookmarks_file, &backup)?;
        } else if backup.exists() {
            return Err(BackupError::BackupCollision { path: backup });
        }
        info!("{}Created backup {}", prefix, backup.display());

        // Only the single oldest backup goes, even if more have piled up
        let mut removed = None;
        if existing.len() + 1 > MAX_BACKUP_FILES {
            if let Some(oldest) = existing.last() {
                let oldest = self.config.backup_path(oldest);
                if self.dry_run_mode.should_remove_files() {
                    fs::remove_file(&oldest).map_err(|cause| BackupError::FileRemove {
                        path: oldest.clone(),
                        cause,
                    })?;
                }
                info!("{}Removed oldest backup {}", prefix, oldest.display());
                removed = Some(oldest);
            }
        }

        Ok(RunOutcome::Created { backup, removed })
    }

    fn next_backup_name(&self) -> String {
        format!(
            "{}{}",
            BACKUP_FILE_PREFIX,
            self.clock.now().format(BACKUP_TIMESTAMP_FORMAT)
        )
    }
}

/// Copies `from` into a file that must not exist yet
fn copy_new_file(from: &Path, to: &Path) -> Result<u64> {
    let copy_error = |cause: io::Error| BackupError::FileCopy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        cause,
    };

    let mut source = fs::File::open(from).map_err(copy_error)?;
    let mut target = match fs::OpenOptions::new().write(true).create_new(true).open(to) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            return Err(BackupError::BackupCollision {
                path: PathBuf::from(to),
            });
        }
        Err(e) => return Err(copy_error(e)),
    };
    let bytes = io::copy(&mut source, &mut target).map_err(copy_error)?;
    target.sync_all().map_err(copy_error)?;
    debug!("Copied {} bytes to {}", bytes, to.display());
    Ok(bytes)
}
