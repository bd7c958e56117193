use crate::models::error::{BackupError, Result};
use std::path::Path;
use walkdir::WalkDir;

/// Names of the regular files directly inside `dir` that start with `prefix`,
/// newest first.
///
/// Sub-directories, symlinks and names that are not valid UTF-8 are skipped.
pub fn get_prefixed_files_newest_first(dir: &Path, prefix: &str) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|cause| BackupError::DirectoryRead {
            path: dir.to_path_buf(),
            cause,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if name.starts_with(prefix) {
                names.push(name.to_string());
            }
        }
    }
    names.sort_unstable_by(|a, b| b.cmp(a));
    Ok(names)
}
