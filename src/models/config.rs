use crate::models::error::{BackupError, Result};
use log::{debug, info};
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const BOOKMARKS_FILE_NAME: &str = "Bookmarks";
pub const BACKUP_FILE_PREFIX: &str = "chrome_backup_";
/// Fixed width and zero padded, so lexicographic order is chronological order
pub const BACKUP_TIMESTAMP_FORMAT: &str = "%Y_%m_%d_%H_%M_%S";
pub const MAX_BACKUP_FILES: usize = 5;

#[cfg(windows)]
const HOME_VAR: &str = "USERPROFILE";
#[cfg(not(windows))]
const HOME_VAR: &str = "HOME";

/// Resolved paths for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub backup_dir: PathBuf,
    pub bookmarks_dir: PathBuf,
}

impl Config {
    pub fn new(backup_dir: PathBuf, bookmarks_dir: PathBuf) -> Self {
        Self {
            backup_dir,
            bookmarks_dir,
        }
    }

    /// Builds the config from CLI values, falling back to the platform
    /// bookmarks folder when none was given
    pub fn from_args(backup_dir: PathBuf, bookmarks_dir: Option<PathBuf>) -> Result<Self> {
        let bookmarks_dir = match bookmarks_dir {
            Some(dir) => dir,
            None => {
                let dir = resolve_default_bookmarks_dir()?;
                info!("Using default Chrome bookmarks folder: {}", dir.display());
                dir
            }
        };
        Ok(Self::new(backup_dir, bookmarks_dir))
    }

    pub fn bookmarks_file(&self) -> PathBuf {
        self.bookmarks_dir.join(BOOKMARKS_FILE_NAME)
    }

    pub fn backup_path(&self, file_name: &str) -> PathBuf {
        self.backup_dir.join(file_name)
    }
}

/// Reads the home directory from the environment and derives the default
/// bookmarks folder for the current platform
pub fn resolve_default_bookmarks_dir() -> Result<PathBuf> {
    let home = env::var_os(HOME_VAR);
    debug!("{} = {:?}", HOME_VAR, home);
    default_bookmarks_dir(home, env::consts::OS)
}

/// Default Chrome profile folder for `os` (as in `std::env::consts::OS`)
/// under the given home directory
pub fn default_bookmarks_dir(home: Option<OsString>, os: &str) -> Result<PathBuf> {
    let home = match home {
        Some(home) if !home.is_empty() => PathBuf::from(home),
        _ => return Err(BackupError::HomeDirNotSet { var: HOME_VAR }),
    };
    Ok(bookmarks_dir_under(&home, os))
}

fn bookmarks_dir_under(home: &Path, os: &str) -> PathBuf {
    let relative: &[&str] = match os {
        "macos" => &["Library", "Application Support", "Google", "Chrome", "Default"],
        "windows" => &["AppData", "Local", "Google", "Chrome", "User Data", "Default"],
        _ => &[".config", "google-chrome", "Default"],
    };
    relative
        .iter()
        .fold(home.to_path_buf(), |path, part| path.join(part))
}
