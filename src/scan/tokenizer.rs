//! Maximal-run tokenizer over a single line.
//!
//! Scanning is greedy and non-overlapping. Characters outside every class in
//! the active set are skipped. Backward scans walk from the end of the line
//! and extend each run leftwards, so the first token yielded is the rightmost.

use super::class::{ClassSet, TokenClass};
use super::ScanDirection;

/// A maximal run of one class on one line: columns `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub class: TokenClass,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// True when the token's text is exactly one space character
    pub fn is_single_space(&self, chars: &[char]) -> bool {
        self.len() == 1 && chars.get(self.start) == Some(&' ')
    }
}

/// Lazy token sequence for one line. Create a new one per scan.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    chars: &'a [char],
    set: ClassSet,
    direction: ScanDirection,
    /// Forward: next column to inspect. Backward: exclusive end of the
    /// unscanned prefix.
    pos: usize,
}

/// Tokenize `chars` with `set`, in the reading order of `direction`
pub fn tokenize(chars: &[char], set: ClassSet, direction: ScanDirection) -> Tokens<'_> {
    let pos = match direction {
        ScanDirection::Forward => 0,
        ScanDirection::Backward => chars.len(),
    };
    Tokens {
        chars,
        set,
        direction,
        pos,
    }
}

impl Tokens<'_> {
    fn next_anchored(&mut self) -> Option<Token> {
        // A single candidate at column 0; consume the line either way
        let first = *self.chars.first()?;
        let done = match self.direction {
            ScanDirection::Forward => self.chars.len(),
            ScanDirection::Backward => 0,
        };
        if self.pos == done {
            return None;
        }
        self.pos = done;
        let class = self.set.classify(first)?;
        Some(Token {
            class,
            start: 0,
            end: 1,
        })
    }

    fn next_forward(&mut self) -> Option<Token> {
        let len = self.chars.len();
        while self.pos < len {
            let start = self.pos;
            let Some(class) = self.set.classify(self.chars[start]) else {
                self.pos += 1;
                continue;
            };
            let mut end = start + 1;
            while end < len && class.contains(self.chars[end]) {
                end += 1;
            }
            self.pos = end;
            return Some(Token { class, start, end });
        }
        None
    }

    fn next_backward(&mut self) -> Option<Token> {
        while self.pos > 0 {
            let end = self.pos;
            let Some(class) = self.set.classify(self.chars[end - 1]) else {
                self.pos -= 1;
                continue;
            };
            let mut start = end - 1;
            while start > 0 && class.contains(self.chars[start - 1]) {
                start -= 1;
            }
            self.pos = start;
            return Some(Token { class, start, end });
        }
        None
    }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.set.is_anchored() {
            return self.next_anchored();
        }
        match self.direction {
            ScanDirection::Forward => self.next_forward(),
            ScanDirection::Backward => self.next_backward(),
        }
    }
}
