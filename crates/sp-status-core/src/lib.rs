//! Core logic for reporting the active Super Productivity task.

use std::path::Path;

pub mod backup;
pub mod config;
pub mod current_task;
pub mod report;

use crate::backup::locate_latest_backup;
use crate::current_task::{read_current_task, CurrentTask};

/// Resolve the current task from the newest backup in `backup_dir`.
///
/// `None` means the directory could not be determined; it is handled the same
/// way as a directory without backups.
pub fn current_status(backup_dir: Option<&Path>) -> CurrentTask {
    let latest = backup_dir.and_then(locate_latest_backup);
    read_current_task(latest.as_ref().map(|backup| backup.path.as_path()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn current_status_without_directory_is_idle() {
        let status = current_status(None);
        assert_eq!(status, CurrentTask::idle());
    }

    #[test]
    fn current_status_reads_newest_backup() {
        let temp = TempDir::new().expect("tempdir");
        std::fs::write(
            temp.path().join("only.json"),
            r#"{"task":{"currentTaskId":"t1","entities":{"t1":{"title":"Write report"}}}}"#,
        )
        .expect("write");

        let status = current_status(Some(temp.path()));
        assert_eq!(status.title, "Write report");
        assert_eq!(status.id.as_deref(), Some("t1"));
    }
}
