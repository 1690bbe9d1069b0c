use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::debug;

pub const BACKUP_EXTENSION: &str = "json";

#[derive(Debug, Error)]
pub enum BackupError {
    #[error("Failed to list backup directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read metadata for {}: {source}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupFile {
    pub path: PathBuf,
    pub modified: SystemTime,
}

impl BackupFile {
    pub fn modified_rfc3339(&self) -> String {
        let modified: DateTime<Utc> = self.modified.into();
        modified.to_rfc3339()
    }

    fn file_name(&self) -> &std::ffi::OsStr {
        self.path.file_name().unwrap_or_default()
    }
}

pub fn is_backup_path(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext == BACKUP_EXTENSION)
        .unwrap_or(false)
}

/// Newest `*.json` file in `dir` by modification time.
///
/// Equal timestamps fall back to the greater file name.
pub fn find_latest_backup(dir: &Path) -> Result<Option<BackupFile>, BackupError> {
    let read_dir = fs::read_dir(dir).map_err(|source| BackupError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut latest: Option<BackupFile> = None;
    for entry in read_dir {
        let entry = entry.map_err(|source| BackupError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !is_backup_path(&path) {
            continue;
        }
        let metadata = fs::metadata(&path).map_err(|source| BackupError::Metadata {
            path: path.clone(),
            source,
        })?;
        if !metadata.is_file() {
            continue;
        }
        let modified = metadata
            .modified()
            .map_err(|source| BackupError::Metadata {
                path: path.clone(),
                source,
            })?;
        let candidate = BackupFile { path, modified };
        let newer = match &latest {
            None => true,
            Some(current) => {
                (candidate.modified, candidate.file_name())
                    > (current.modified, current.file_name())
            }
        };
        if newer {
            latest = Some(candidate);
        }
    }
    Ok(latest)
}

/// Like [`find_latest_backup`], but any file-system failure reads as "no backup".
pub fn locate_latest_backup(dir: &Path) -> Option<BackupFile> {
    match find_latest_backup(dir) {
        Ok(Some(backup)) => {
            debug!(
                path = %backup.path.display(),
                modified = %backup.modified_rfc3339(),
                "selected latest backup"
            );
            Some(backup)
        }
        Ok(None) => {
            debug!(dir = %dir.display(), "no backups found");
            None
        }
        Err(err) => {
            debug!(error = %err, "backup lookup failed; treating as no backup");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};
    use tempfile::TempDir;

    #[test]
    fn is_backup_path_requires_json_extension() {
        assert!(is_backup_path(Path::new("sp-2024-01-01.json")));
        assert!(!is_backup_path(Path::new("notes.txt")));
        assert!(!is_backup_path(Path::new("json")));
        assert!(!is_backup_path(Path::new("backup.JSON")));
    }

    #[test]
    fn modified_rfc3339_is_utc() {
        let backup = BackupFile {
            path: PathBuf::from("a.json"),
            modified: UNIX_EPOCH + Duration::from_secs(86_400),
        };
        assert_eq!(backup.modified_rfc3339(), "1970-01-02T00:00:00+00:00");
    }

    #[test]
    fn missing_directory_is_an_error_but_locates_nothing() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("nope");
        assert!(matches!(
            find_latest_backup(&missing),
            Err(BackupError::ReadDir { .. })
        ));
        assert!(locate_latest_backup(&missing).is_none());
    }

    #[test]
    fn directories_named_like_backups_are_ignored() {
        let temp = TempDir::new().expect("tempdir");
        std::fs::create_dir(temp.path().join("folder.json")).expect("mkdir");
        assert!(find_latest_backup(temp.path()).expect("find").is_none());
    }
}
