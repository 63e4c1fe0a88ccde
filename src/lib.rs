//! Tally - camel-case, function and tab-stop editor commands
//!
//! The core is a token-boundary scanner that runs over any `LineSource`.
//! Commands are dispatched through one table and operate on an injected
//! `EditorContext`, so they are independent of the host editor.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod document;
pub mod outcome;
pub mod scan;
pub mod source;
pub mod tab_stop;
pub mod template;
pub mod trace;
pub mod tracing;

// Re-export commonly used types
pub use commands::{execute, Command};
pub use config::EditorConfig;
pub use document::RopeDocument;
pub use outcome::Outcome;
pub use scan::Scanner;
pub use source::{EditorContext, LineSource, Position};
