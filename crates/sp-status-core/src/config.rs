use std::path::{Path, PathBuf};

/// Directory under `~/.config` owned by the Super Productivity desktop app.
pub const APP_CONFIG_DIR_NAME: &str = "superProductivity";
pub const BACKUP_DIR_NAME: &str = "backups";

pub fn resolve_user_home_dir() -> Option<PathBuf> {
    for key in ["HOME", "USERPROFILE"] {
        if let Ok(value) = std::env::var(key) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
    }
    None
}

pub fn backup_dir_under(home: &Path) -> PathBuf {
    home.join(".config")
        .join(APP_CONFIG_DIR_NAME)
        .join(BACKUP_DIR_NAME)
}

pub fn default_backup_dir() -> Option<PathBuf> {
    resolve_user_home_dir().map(|home| backup_dir_under(&home))
}

/// An explicit directory wins over the per-user default.
pub fn resolve_backup_dir(override_dir: Option<&Path>) -> Option<PathBuf> {
    match override_dir {
        Some(dir) => Some(dir.to_path_buf()),
        None => default_backup_dir(),
    }
}
