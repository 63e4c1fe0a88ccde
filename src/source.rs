//! Line source and editor context traits.
//!
//! The scanner never talks to a concrete editor. Every command receives an
//! `EditorContext` and reads lines, moves the caret and applies edits through
//! it, so the same code runs against a host editor or a `RopeDocument`.

use std::path::Path;

use serde::Serialize;

/// A position in the text (line and column, both 0-indexed).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    pub const fn zero() -> Self {
        Self { line: 0, column: 0 }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Line-addressed read/write access to the host text buffer plus caret control.
///
/// Columns are character offsets. A column equal to the line length is the
/// end-of-line position.
pub trait LineSource {
    /// Number of lines (always >= 1)
    fn line_count(&self) -> usize;

    /// Length of a line in characters, excluding the line terminator
    fn line_length(&self, line: usize) -> usize;

    /// Text of `line` in the column range `[start, end)`, clamped to the line
    fn line_text(&self, line: usize, start: usize, end: usize) -> String;

    fn caret(&self) -> Position;

    fn set_caret(&mut self, pos: Position);

    /// Replace columns `[start, end)` of `line` with `text`
    fn replace_range(&mut self, line: usize, start: usize, end: usize, text: &str);

    /// Scroll so that lines `start_line..=end_line` are visible
    fn ensure_visible(&mut self, start_line: usize, end_line: usize);

    /// Whole text of a line
    fn full_line(&self, line: usize) -> String {
        self.line_text(line, 0, self.line_length(line))
    }
}

/// Editor context injected into every command.
///
/// Extends `LineSource` with the whole-line edits needed by the trace toggle
/// and the class template.
pub trait EditorContext: LineSource {
    /// Path of the document being edited, if it has one
    fn file_path(&self) -> Option<&Path> {
        None
    }

    /// Insert `text` as a new line so that it becomes line `at`.
    /// `at == line_count()` appends.
    fn insert_line(&mut self, at: usize, text: &str);

    /// Delete line `at` including its terminator
    fn remove_line(&mut self, at: usize);
}
