//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use tally::config::EditorConfig;
use tally::document::RopeDocument;
use tally::outcome::Outcome;
use tally::source::{LineSource, Position};
use tally::Command;

/// Create a document with given text and caret position
pub fn test_doc(text: &str, line: usize, column: usize) -> RopeDocument {
    let mut doc = RopeDocument::from_text(text);
    doc.set_caret(Position::new(line, column));
    doc
}

/// Run a command with the default config
pub fn run(doc: &mut RopeDocument, command: Command) -> Outcome {
    tally::execute(command, doc, &EditorConfig::default())
}

/// Caret as a (line, column) tuple
pub fn caret(doc: &RopeDocument) -> (usize, usize) {
    let pos = doc.caret();
    (pos.line, pos.column)
}
