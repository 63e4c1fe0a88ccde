//! Editor configuration persistence
//!
//! Stores user preferences in `~/.config/tally/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::tab_stop::MAX_TAB_SIZE;

/// Settings read by the editor commands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Width of a tab stop in columns
    pub tab_size: usize,
    /// Indent width; trace lines are indented by twice this
    pub indent_size: usize,
    /// Lines kept visible above a previous-function match (0 disables)
    pub function_scroll_context: usize,
    /// Macro inserted at the top of each function body
    pub trace_macro: String,
    /// Other trace macros removed along with `trace_macro`
    pub trace_companions: Vec<String>,
    /// A document containing this marker has its trace lines removed
    pub no_trace_marker: String,
    /// File name fragments that always get trace lines removed
    pub header_extensions: Vec<String>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_size: 4,
            indent_size: 4,
            function_scroll_context: 2,
            trace_macro: "TRACEFUNC".to_string(),
            trace_companions: vec!["TRACEADD".to_string()],
            no_trace_marker: "/*NoTrace*/".to_string(),
            header_extensions: vec![".hxx".to_string(), ".hpp".to_string()],
        }
    }
}

/// Errors from reading or writing a config file
#[derive(Debug, Clone)]
pub enum ConfigError {
    NoConfigDir,
    IoError(String),
    ParseError(String),
    InvalidValue(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NoConfigDir => write!(f, "No config directory available"),
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::InvalidValue(e) => write!(f, "Invalid value: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl EditorConfig {
    /// Load config from the user config directory, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_or_default(&path)
    }

    /// Load config from `path`, falling back to defaults on any failure
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Read and parse a config file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        Self::from_yaml(&content)
    }

    /// Parse config from YAML. Missing fields take their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject widths outside `1..=MAX_TAB_SIZE` and a blank trace macro
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [("tab_size", self.tab_size), ("indent_size", self.indent_size)] {
            if !(1..=MAX_TAB_SIZE).contains(&value) {
                return Err(ConfigError::InvalidValue(format!(
                    "{key} must be between 1 and {MAX_TAB_SIZE}, got {value}"
                )));
            }
        }
        if self.trace_macro.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "trace_macro must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Save config to the user config directory
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = crate::config_paths::config_file().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating the parent directory if needed
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
        }

        let content =
            serde_yaml::to_string(self).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Every macro name whose lines are removed by the trace toggle.
    /// Blank names are skipped, since they would match every line.
    pub fn trace_names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.trace_macro.as_str())
            .chain(self.trace_companions.iter().map(String::as_str))
            .filter(|name| !name.trim().is_empty())
    }
}
