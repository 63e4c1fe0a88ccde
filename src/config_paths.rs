//! Where tally keeps its settings and logs.
//!
//! ```text
//! <config root>/tally/
//!     config.yaml     EditorConfig (tab size, trace macro, ...)
//!     logs/           daily tally.log files
//! ```
//!
//! The config root is `%APPDATA%` on Windows and `$XDG_CONFIG_HOME` or
//! `~/.config` elsewhere. Every function returns `None` when no root can
//! be found, and callers fall back to defaults.

use std::{env, path::PathBuf};

const APP_DIR: &str = "tally";
const CONFIG_FILE: &str = "config.yaml";
const LOGS_DIR: &str = "logs";

fn config_root() -> Option<PathBuf> {
    if cfg!(target_os = "windows") {
        env::var_os("APPDATA").map(PathBuf::from)
    } else {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
    }
}

/// The `tally` directory under the config root
pub fn config_dir() -> Option<PathBuf> {
    config_root().map(|root| root.join(APP_DIR))
}

/// Read by [`crate::config::EditorConfig::load`]
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(LOGS_DIR))
}

/// Create the logs directory if needed and return it
pub fn ensure_logs_dir() -> std::io::Result<PathBuf> {
    let dir = logs_dir().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "no config directory")
    })?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
