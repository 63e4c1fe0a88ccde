//! Cross-line boundary walker.

use super::class::ClassSet;
use super::tokenizer::tokenize;
use super::ScanDirection;
use crate::source::{LineSource, Position};

/// A boundary search: direction plus the classes used on each kind of line.
///
/// The caret line is scanned from the caret in the scan direction and only
/// tokens that do not start at the caret count. Lines reached by wrapping
/// take their first token in reading order. Zero-length lines are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scanner {
    pub direction: ScanDirection,
    /// Classes for the caret line; `None` starts on the neighbouring line
    pub caret_line: Option<ClassSet>,
    /// Classes for every line reached by wrapping
    pub wrap: ClassSet,
}

impl Scanner {
    /// Camel-case word skip to the right
    pub const WORD_FORWARD: Scanner = Scanner {
        direction: ScanDirection::Forward,
        caret_line: Some(ClassSet::WORD),
        wrap: ClassSet::LINE_FETCH,
    };

    /// Camel-case word skip to the left
    pub const WORD_BACKWARD: Scanner = Scanner {
        direction: ScanDirection::Backward,
        caret_line: Some(ClassSet::WORD),
        wrap: ClassSet::LINE_FETCH,
    };

    /// Next line opening a function body
    pub const FUNCTION_NEXT: Scanner = Scanner {
        direction: ScanDirection::Forward,
        caret_line: None,
        wrap: ClassSet::FUNCTION_START,
    };

    /// Previous line closing a function body
    pub const FUNCTION_PREVIOUS: Scanner = Scanner {
        direction: ScanDirection::Backward,
        caret_line: None,
        wrap: ClassSet::FUNCTION_END,
    };

    /// Find the next boundary from `from`. `None` means no boundary exists
    /// before the end (or start) of the document.
    pub fn find<S: LineSource + ?Sized>(&self, src: &S, from: Position) -> Option<Position> {
        let line_count = src.line_count();
        if line_count == 0 {
            return None;
        }
        let line = from.line.min(line_count - 1);
        let column = from.column.min(src.line_length(line));

        if let Some(set) = self.caret_line {
            if let Some(target) = self.find_on_caret_line(src, set, line, column) {
                tracing::debug!(%target, direction = ?self.direction, "boundary on caret line");
                return Some(target);
            }
        }

        let found = match self.direction {
            ScanDirection::Forward => self.find_wrapped(src, line + 1..line_count),
            ScanDirection::Backward => self.find_wrapped(src, (0..line).rev()),
        };
        match found {
            Some(target) => tracing::debug!(%target, direction = ?self.direction, "boundary after wrap"),
            None => tracing::debug!(line, direction = ?self.direction, "no boundary found"),
        }
        found
    }

    fn find_on_caret_line<S: LineSource + ?Sized>(
        &self,
        src: &S,
        set: ClassSet,
        line: usize,
        column: usize,
    ) -> Option<Position> {
        match self.direction {
            ScanDirection::Forward => {
                let rest: Vec<char> = src
                    .line_text(line, column, src.line_length(line))
                    .chars()
                    .collect();
                let token = tokenize(&rest, set, ScanDirection::Forward).find(|t| t.start > 0)?;
                // A lone space is stepped over so the caret lands on the next word
                let skip = usize::from(token.is_single_space(&rest));
                Some(Position::new(line, column + token.start + skip))
            }
            ScanDirection::Backward => {
                let head: Vec<char> = src.line_text(line, 0, column).chars().collect();
                let token = tokenize(&head, set, ScanDirection::Backward).find(|t| t.start > 0)?;
                Some(Position::new(line, token.start))
            }
        }
    }

    fn find_wrapped<S, I>(&self, src: &S, lines: I) -> Option<Position>
    where
        S: LineSource + ?Sized,
        I: IntoIterator<Item = usize>,
    {
        lines.into_iter().find_map(|line| {
            if src.line_length(line) == 0 {
                return None;
            }
            let chars: Vec<char> = src.full_line(line).chars().collect();
            tokenize(&chars, self.wrap, self.direction)
                .next()
                .map(|token| Position::new(line, token.start))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::RopeDocument;

    fn find(scanner: Scanner, text: &str, line: usize, column: usize) -> Option<(usize, usize)> {
        let doc = RopeDocument::from_text(text);
        scanner
            .find(&doc, Position::new(line, column))
            .map(|p| (p.line, p.column))
    }

    #[test]
    fn test_forward_camel_case_steps() {
        assert_eq!(find(Scanner::WORD_FORWARD, "fooBarBaz", 0, 0), Some((0, 3)));
        assert_eq!(find(Scanner::WORD_FORWARD, "fooBarBaz", 0, 3), Some((0, 6)));
    }

    #[test]
    fn test_forward_skips_single_space() {
        assert_eq!(find(Scanner::WORD_FORWARD, "foo bar", 0, 0), Some((0, 4)));
    }

    #[test]
    fn test_forward_lands_on_start_of_space_run() {
        assert_eq!(find(Scanner::WORD_FORWARD, "foo   bar", 0, 0), Some((0, 3)));
    }

    #[test]
    fn test_forward_token_at_caret_is_ignored() {
        // Caret sits on "B"; the next boundary is the following run
        assert_eq!(find(Scanner::WORD_FORWARD, "aB_c", 0, 1), Some((0, 2)));
    }

    #[test]
    fn test_forward_wraps_to_next_line() {
        assert_eq!(find(Scanner::WORD_FORWARD, "abc\n  def", 0, 0), Some((1, 2)));
    }

    #[test]
    fn test_forward_skips_empty_and_blank_lines() {
        assert_eq!(find(Scanner::WORD_FORWARD, "abc\n\n   \nxyz", 0, 3), Some((3, 0)));
    }

    #[test]
    fn test_forward_no_op_at_document_end() {
        assert_eq!(find(Scanner::WORD_FORWARD, "abc\nlast", 1, 0), None);
    }

    #[test]
    fn test_backward_camel_case_steps() {
        assert_eq!(find(Scanner::WORD_BACKWARD, "fooBarBaz", 0, 9), Some((0, 6)));
        assert_eq!(find(Scanner::WORD_BACKWARD, "fooBarBaz", 0, 6), Some((0, 3)));
    }

    #[test]
    fn test_backward_does_not_adjust_for_space() {
        assert_eq!(find(Scanner::WORD_BACKWARD, "foo bar", 0, 7), Some((0, 3)));
    }

    #[test]
    fn test_backward_wraps_to_rightmost_token_of_previous_line() {
        assert_eq!(find(Scanner::WORD_BACKWARD, "int x = y;\n\nfoo", 2, 3), Some((0, 9)));
    }

    #[test]
    fn test_backward_ignores_token_at_column_zero() {
        assert_eq!(find(Scanner::WORD_BACKWARD, "abc\nFoo", 1, 3), Some((0, 0)));
    }

    #[test]
    fn test_backward_no_op_at_document_start() {
        assert_eq!(find(Scanner::WORD_BACKWARD, "fooBar", 0, 3), None);
    }

    #[test]
    fn test_function_next_and_previous() {
        let text = "int f()\n{\n  x=1;\n}\nint g()\n{\n}";
        assert_eq!(find(Scanner::FUNCTION_NEXT, text, 0, 4), Some((1, 0)));
        assert_eq!(find(Scanner::FUNCTION_NEXT, text, 1, 0), Some((5, 0)));
        assert_eq!(find(Scanner::FUNCTION_PREVIOUS, text, 6, 0), Some((3, 0)));
        assert_eq!(find(Scanner::FUNCTION_PREVIOUS, text, 3, 0), None);
    }

    #[test]
    fn test_function_previous_reaches_first_line() {
        assert_eq!(find(Scanner::FUNCTION_PREVIOUS, "}\nint x;", 1, 0), Some((0, 0)));
    }

    #[test]
    fn test_out_of_range_caret_is_clamped() {
        assert_eq!(find(Scanner::WORD_FORWARD, "aBc", 9, 99), None);
        assert_eq!(find(Scanner::WORD_BACKWARD, "aBc", 0, 99), Some((0, 1)));
    }
}
