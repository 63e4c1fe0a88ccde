//! Command-line argument parsing
//!
//! Runs one editor command against a file:
//!
//! ```text
//! tally camel-case-forward src/main.cpp --line 12 --column 4
//! tally toggle-trace src/main.cpp --write
//! tally --list
//! ```

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Command;
use crate::config::EditorConfig;
use crate::source::Position;
use crate::tab_stop::MAX_TAB_SIZE;

/// Run caret navigation and editing commands on a file
#[derive(Parser, Debug)]
#[command(name = "tally", version, about = "Camel-case, function and tab-stop editor commands")]
pub struct CliArgs {
    /// Command to run (e.g. camel-case-forward, function-next, tab-stop)
    #[arg(value_name = "COMMAND", required_unless_present = "list")]
    pub command: Option<String>,

    /// File to operate on
    #[arg(value_name = "FILE", required_unless_present = "list")]
    pub file: Option<PathBuf>,

    /// Caret line, 1-indexed
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub line: usize,

    /// Caret column, 1-indexed
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub column: usize,

    /// Override the configured tab size (1-256)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..=MAX_TAB_SIZE as i64))]
    pub tab_size: Option<u16>,

    /// Use this config file instead of the user config
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write edits back to FILE
    #[arg(short = 'w', long)]
    pub write: bool,

    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,

    /// List available commands and exit
    #[arg(long)]
    pub list: bool,
}

/// A fully resolved invocation
#[derive(Debug, Clone)]
pub struct Invocation {
    pub command: Command,
    pub file: PathBuf,
    /// 0-indexed caret
    pub caret: Position,
    pub config: EditorConfig,
    pub write: bool,
    pub json: bool,
}

impl CliArgs {
    /// Resolve the command name, caret and config. `None` when only `--list`
    /// was requested.
    pub fn into_invocation(self) -> Result<Option<Invocation>, String> {
        let (Some(name), Some(file)) = (self.command, self.file) else {
            return Ok(None);
        };
        let command = name.parse::<Command>().map_err(|e| e.to_string())?;

        let mut config = match &self.config {
            Some(path) => EditorConfig::load_from(path).map_err(|e| e.to_string())?,
            None => EditorConfig::load(),
        };
        if let Some(tab_size) = self.tab_size {
            config.tab_size = usize::from(tab_size);
        }

        // Convert from 1-indexed (user input) to 0-indexed (internal)
        let caret = Position::new(self.line.saturating_sub(1), self.column.saturating_sub(1));

        Ok(Some(Invocation {
            command,
            file,
            caret,
            config,
            write: self.write,
            json: self.json,
        }))
    }
}
