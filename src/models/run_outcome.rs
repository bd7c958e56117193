use std::path::PathBuf;

/// What a single rotation run did (or, in dry-run mode, would have done)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The newest backup already matches the bookmarks file
    Unchanged { latest_backup: PathBuf },

    /// A new backup was written, optionally pushing the oldest one out
    Created {
        backup: PathBuf,
        removed: Option<PathBuf>,
    },
}

impl RunOutcome {
    pub fn created_backup(&self) -> Option<&PathBuf> {
        match self {
            RunOutcome::Created { backup, .. } => Some(backup),
            RunOutcome::Unchanged { .. } => None,
        }
    }

    pub fn removed_backup(&self) -> Option<&PathBuf> {
        match self {
            RunOutcome::Created { removed, .. } => removed.as_ref(),
            RunOutcome::Unchanged { .. } => None,
        }
    }
}
