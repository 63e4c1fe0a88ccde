//! Result of running one editor command

use serde::Serialize;

use crate::source::Position;

/// What a command did to the editor.
///
/// "No boundary found" is not an error: it is reported as `Unchanged`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// Caret moved, text untouched
    Moved { to: Position },
    /// Viewport scrolled to show the lines, caret untouched
    Revealed { start_line: usize, end_line: usize },
    /// Text changed; `lines` is the number of lines inserted, removed or padded
    Edited { lines: usize, caret: Position },
    Unchanged,
}

impl Outcome {
    pub fn moved(line: usize, column: usize) -> Self {
        Outcome::Moved {
            to: Position::new(line, column),
        }
    }

    pub fn is_unchanged(&self) -> bool {
        matches!(self, Outcome::Unchanged)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Moved { to } => write!(f, "moved to {}", to),
            Outcome::Revealed {
                start_line,
                end_line,
            } => write!(f, "revealed lines {}..={}", start_line, end_line),
            Outcome::Edited { lines, caret } => {
                write!(f, "edited {} line(s), caret at {}", lines, caret)
            }
            Outcome::Unchanged => write!(f, "unchanged"),
        }
    }
}
