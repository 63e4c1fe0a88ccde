//! In-process editor context backed by `ropey::Rope`.
//!
//! Used by the CLI, the integration tests and the benches. A host editor
//! integration provides its own `EditorContext` instead.

use std::path::{Path, PathBuf};

use ropey::Rope;

use crate::source::{EditorContext, LineSource, Position};

/// Visible window of the document, in lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub top_line: usize,
    pub visible_lines: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            top_line: 0,
            visible_lines: 25,
        }
    }
}

/// A rope-backed document with a single caret and a viewport.
#[derive(Debug, Clone)]
pub struct RopeDocument {
    rope: Rope,
    caret: Position,
    pub viewport: Viewport,
    path: Option<PathBuf>,
}

impl RopeDocument {
    pub fn new() -> Self {
        Self::from_text("")
    }

    pub fn from_text(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
            caret: Position::zero(),
            viewport: Viewport::default(),
            path: None,
        }
    }

    /// Load a document from disk, remembering its path
    pub fn from_file(path: &Path) -> std::io::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let mut doc = Self::from_text(&text);
        doc.path = Some(path.to_path_buf());
        Ok(doc)
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_visible_lines(mut self, visible_lines: usize) -> Self {
        self.viewport.visible_lines = visible_lines.max(1);
        self
    }

    /// Write the current content to `path`
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        self.rope.write_to(std::io::BufWriter::new(file))
    }

    pub fn content(&self) -> String {
        self.rope.to_string()
    }

    /// All lines without terminators
    pub fn lines(&self) -> Vec<String> {
        (0..self.line_count()).map(|i| self.full_line(i)).collect()
    }

    fn line_start(&self, line: usize) -> usize {
        self.rope.line_to_char(line.min(self.rope.len_lines()))
    }

    /// Number of characters in the terminator of `line` (0, 1 or 2)
    fn terminator_len(&self, line: usize) -> usize {
        let slice = self.rope.line(line);
        let len = slice.len_chars();
        if len > 0 && slice.char(len - 1) == '\n' {
            if len > 1 && slice.char(len - 2) == '\r' {
                2
            } else {
                1
            }
        } else {
            0
        }
    }

    /// Line ending used by `line`, or by the line above when `line` has
    /// none. Defaults to `\n`.
    fn line_ending_near(&self, line: usize) -> &'static str {
        let candidates = [Some(line), line.checked_sub(1)];
        let terminator = candidates
            .into_iter()
            .flatten()
            .filter(|&l| l < self.rope.len_lines())
            .map(|l| self.terminator_len(l))
            .find(|&len| len > 0);
        match terminator {
            Some(2) => "\r\n",
            _ => "\n",
        }
    }

    fn clamp_caret(&mut self) {
        let line = self.caret.line.min(self.line_count() - 1);
        let column = self.caret.column.min(self.line_length(line));
        self.caret = Position::new(line, column);
    }
}

impl Default for RopeDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for RopeDocument {
    fn line_count(&self) -> usize {
        self.rope.len_lines().max(1)
    }

    fn line_length(&self, line: usize) -> usize {
        if line >= self.rope.len_lines() {
            return 0;
        }
        self.rope.line(line).len_chars() - self.terminator_len(line)
    }

    fn line_text(&self, line: usize, start: usize, end: usize) -> String {
        let len = self.line_length(line);
        let end = end.min(len);
        let start = start.min(end);
        if start == end {
            return String::new();
        }
        self.rope.line(line).slice(start..end).to_string()
    }

    fn caret(&self) -> Position {
        self.caret
    }

    fn set_caret(&mut self, pos: Position) {
        self.caret = pos;
        self.clamp_caret();
    }

    fn replace_range(&mut self, line: usize, start: usize, end: usize, text: &str) {
        if line >= self.line_count() {
            return;
        }
        let len = self.line_length(line);
        let end = end.min(len);
        let start = start.min(end);
        let base = self.line_start(line);
        if start < end {
            self.rope.remove(base + start..base + end);
        }
        self.rope.insert(base + start, text);
    }

    fn ensure_visible(&mut self, start_line: usize, end_line: usize) {
        let last = self.line_count() - 1;
        let start = start_line.min(last);
        let end = end_line.min(last).max(start);
        let vp = &mut self.viewport;

        if end - start + 1 >= vp.visible_lines || start < vp.top_line {
            vp.top_line = start;
        } else if end >= vp.top_line + vp.visible_lines {
            vp.top_line = end + 1 - vp.visible_lines;
        }
        tracing::trace!(top_line = vp.top_line, start, end, "ensure_visible");
    }
}

impl EditorContext for RopeDocument {
    fn file_path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn insert_line(&mut self, at: usize, text: &str) {
        let lines = self.rope.len_lines();
        if at < lines {
            let ending = self.line_ending_near(at);
            let offset = self.line_start(at);
            self.rope.insert(offset, &format!("{}{}", text, ending));
        } else {
            let ending = self.line_ending_near(lines.saturating_sub(1));
            let end = self.rope.len_chars();
            self.rope.insert(end, &format!("{}{}", ending, text));
        }
        if self.caret.line >= at {
            self.caret.line += 1;
        }
        self.clamp_caret();
    }

    fn remove_line(&mut self, at: usize) {
        let lines = self.rope.len_lines();
        if at >= lines {
            return;
        }
        let start = self.line_start(at);
        let end = if at + 1 < lines {
            self.line_start(at + 1)
        } else {
            self.rope.len_chars()
        };

        if at + 1 >= lines && at > 0 {
            // Last line: drop the terminator of the line above instead
            let prev_terminator = self.terminator_len(at - 1);
            self.rope.remove(start - prev_terminator..end);
        } else if start < end {
            self.rope.remove(start..end);
        }

        if self.caret.line > at {
            self.caret.line -= 1;
        }
        self.clamp_caret();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_length_excludes_terminators() {
        let doc = RopeDocument::from_text("abc\r\nde\nf");
        assert_eq!(doc.line_count(), 3);
        assert_eq!(doc.line_length(0), 3);
        assert_eq!(doc.line_length(1), 2);
        assert_eq!(doc.line_length(2), 1);
        assert_eq!(doc.line_length(9), 0);
    }

    #[test]
    fn test_line_text_clamps_range() {
        let doc = RopeDocument::from_text("hello\nworld");
        assert_eq!(doc.line_text(0, 1, 3), "el");
        assert_eq!(doc.line_text(1, 2, 100), "rld");
        assert_eq!(doc.line_text(1, 8, 100), "");
    }

    #[test]
    fn test_replace_range_inserts_and_replaces() {
        let mut doc = RopeDocument::from_text("hello\nworld");
        doc.replace_range(0, 5, 5, "   ");
        assert_eq!(doc.content(), "hello   \nworld");
        doc.replace_range(1, 0, 3, "W");
        assert_eq!(doc.content(), "hello   \nWld");
    }

    #[test]
    fn test_set_caret_clamps() {
        let mut doc = RopeDocument::from_text("ab\ncd");
        doc.set_caret(Position::new(7, 9));
        assert_eq!(doc.caret(), Position::new(1, 2));
    }

    #[test]
    fn test_insert_line_middle_and_end() {
        let mut doc = RopeDocument::from_text("a\nb");
        doc.insert_line(1, "x");
        assert_eq!(doc.lines(), vec!["a", "x", "b"]);
        doc.insert_line(3, "y");
        assert_eq!(doc.lines(), vec!["a", "x", "b", "y"]);
    }

    #[test]
    fn test_insert_line_reuses_crlf() {
        let mut doc = RopeDocument::from_text("a\r\nb");
        doc.insert_line(1, "x");
        assert_eq!(doc.content(), "a\r\nx\r\nb");
        doc.insert_line(3, "y");
        assert_eq!(doc.content(), "a\r\nx\r\nb\r\ny");
        assert_eq!(doc.lines(), vec!["a", "x", "b", "y"]);
    }

    #[test]
    fn test_insert_line_shifts_caret() {
        let mut doc = RopeDocument::from_text("a\nb");
        doc.set_caret(Position::new(1, 1));
        doc.insert_line(0, "x");
        assert_eq!(doc.caret(), Position::new(2, 1));
    }

    #[test]
    fn test_remove_line() {
        let mut doc = RopeDocument::from_text("a\nb\nc");
        doc.remove_line(1);
        assert_eq!(doc.content(), "a\nc");
        doc.remove_line(1);
        assert_eq!(doc.content(), "a");
        doc.remove_line(0);
        assert_eq!(doc.content(), "");
    }

    #[test]
    fn test_ensure_visible_scrolls_down() {
        let mut doc = RopeDocument::from_text(&"x\n".repeat(50)).with_visible_lines(10);
        doc.ensure_visible(30, 32);
        assert_eq!(doc.viewport.top_line, 23);
        doc.ensure_visible(5, 6);
        assert_eq!(doc.viewport.top_line, 5);
    }
}
