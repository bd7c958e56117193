use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackupError {
    #[error("Provided {kind} folder does not exist: '{}'", .path.display())]
    PathNotFound { kind: PathKind, path: PathBuf },

    #[error("Chrome bookmarks file does not exist: '{}'", .path.display())]
    SourceFileMissing { path: PathBuf },

    #[error("Backup file '{}' already exists, refusing to overwrite it", .path.display())]
    BackupCollision { path: PathBuf },

    #[error("Cannot resolve the default Chrome bookmarks folder: {var} is not set. Pass --chrome_bookmarks_folder explicitly")]
    HomeDirNotSet { var: &'static str },

    #[error("Failed to read backup folder '{}': {cause}", .path.display())]
    DirectoryRead { path: PathBuf, cause: walkdir::Error },

    #[error("Failed to compare '{}' with '{}': {cause}", .left.display(), .right.display())]
    FileCompare {
        left: PathBuf,
        right: PathBuf,
        cause: io::Error,
    },

    #[error("Failed to copy file from '{}' to '{}': {cause}", .from.display(), .to.display())]
    FileCopy {
        from: PathBuf,
        to: PathBuf,
        cause: io::Error,
    },

    #[error("Failed to remove old backup '{}': {cause}", .path.display())]
    FileRemove { path: PathBuf, cause: io::Error },
}

/// Which of the two configured folders a path check refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    Backup,
    Bookmarks,
}

impl std::fmt::Display for PathKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathKind::Backup => write!(f, "backup"),
            PathKind::Bookmarks => write!(f, "Chrome bookmarks"),
        }
    }
}

pub type Result<T> = std::result::Result<T, BackupError>;
