//! Per-user data locations.
//!
//! - macOS: ~/Library/Application Support/userdesk/{storage,logs}
//! - Linux: $XDG_DATA_HOME/userdesk/{storage,logs} (default ~/.local/share)
//! - Windows: %APPDATA%\userdesk\{storage,logs}

use std::io;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "userdesk";
const STORAGE_DIR: &str = "storage";
const LOG_DIR: &str = "logs";

fn get_app_data_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        std::env::var("HOME").ok().map(|home| {
            PathBuf::from(home)
                .join("Library/Application Support")
                .join(APP_NAME)
        })
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
            Some(PathBuf::from(xdg).join(APP_NAME))
        } else {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".local/share").join(APP_NAME))
        }
    }

    #[cfg(target_os = "windows")]
    {
        std::env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_NAME))
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

pub fn get_storage_dir() -> Option<PathBuf> {
    get_app_data_dir().map(|p| p.join(STORAGE_DIR))
}

pub fn get_log_dir() -> Option<PathBuf> {
    get_app_data_dir().map(|p| p.join(LOG_DIR))
}

pub fn ensure_dir(dir: Option<PathBuf>, what: &str) -> io::Result<PathBuf> {
    let dir = dir.ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("Cannot determine {what} directory"),
        )
    })?;
    create_if_missing(&dir)?;
    Ok(dir)
}

pub fn ensure_storage_dir() -> io::Result<PathBuf> {
    ensure_dir(get_storage_dir(), "storage")
}

pub fn ensure_log_dir() -> io::Result<PathBuf> {
    ensure_dir(get_log_dir(), "log")
}

fn create_if_missing(dir: &Path) -> io::Result<()> {
    if !dir.exists() {
        std::fs::create_dir_all(dir)?;
    }
    Ok(())
}
