//! Centralized configuration paths for sidepanel
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/sidepanel/`
//! - Windows: `%APPDATA%\sidepanel\`

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::errors::PanelError;

const APP_DIR: &str = "sidepanel";

/// Base config directory
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/sidepanel`
///   - Else: `~/.config/sidepanel`
///
/// Windows:
///   - `%APPDATA%\sidepanel`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/sidepanel/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/sidepanel/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

fn ensure_dir(path: &Path) -> Result<(), PanelError> {
    fs::create_dir_all(path).map_err(|source| PanelError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Ensure logs dir exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf, PanelError> {
    let logs = logs_dir().ok_or(PanelError::NoConfigDir)?;
    ensure_dir(&logs)?;
    Ok(logs)
}
