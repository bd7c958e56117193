/// Defines the dry-run behavior mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DryRunMode {
    /// Normal operation - actually copy the bookmarks file and remove old backups
    #[default]
    None,

    /// Full simulation - list and compare as usual but skip file copy and removal
    /// Reports exactly what would happen in a real run
    Simulate,
}

impl DryRunMode {
    pub fn from_flag(dry_run: bool) -> Self {
        if dry_run {
            DryRunMode::Simulate
        } else {
            DryRunMode::None
        }
    }

    /// Returns true if this is a dry-run mode
    pub fn is_dry_run(&self) -> bool {
        matches!(self, DryRunMode::Simulate)
    }

    /// Returns true if the bookmarks file should actually be copied
    pub fn should_copy_files(&self) -> bool {
        matches!(self, DryRunMode::None)
    }

    /// Returns true if old backups should actually be removed
    pub fn should_remove_files(&self) -> bool {
        matches!(self, DryRunMode::None)
    }

    /// Prefix for log lines describing planned actions
    pub fn log_prefix(&self) -> &'static str {
        match self {
            DryRunMode::None => "",
            DryRunMode::Simulate => "[DRY RUN] ",
        }
    }
}
