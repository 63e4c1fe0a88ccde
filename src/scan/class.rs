//! Character classes for word-boundary tokenization.

/// Check if a character belongs to the boundary punctuation set `_*=!|&();{}<>`
pub fn is_boundary_punctuation(ch: char) -> bool {
    matches!(
        ch,
        '_' | '*' | '=' | '!' | '|' | '&' | '(' | ')' | ';' | '{' | '}' | '<' | '>'
    )
}

/// Check if a character is a line terminator character
pub fn is_newline(ch: char) -> bool {
    matches!(ch, '\n' | '\r')
}

/// Category of a maximal run of characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// `A-Z`
    Uppercase,
    /// `A-Z` or `a-z`
    Letter,
    /// `0-9`
    Digit,
    Whitespace,
    /// See [`is_boundary_punctuation`]
    Punctuation,
    /// `\n` or `\r`
    Newline,
    /// `{` at column 0
    OpenBrace,
    /// `}` at column 0
    CloseBrace,
}

impl TokenClass {
    /// Whether `ch` can be part of a run of this class
    pub fn contains(self, ch: char) -> bool {
        match self {
            TokenClass::Uppercase => ch.is_ascii_uppercase(),
            TokenClass::Letter => ch.is_ascii_alphabetic(),
            TokenClass::Digit => ch.is_ascii_digit(),
            TokenClass::Whitespace => ch.is_whitespace(),
            TokenClass::Punctuation => is_boundary_punctuation(ch),
            TokenClass::Newline => is_newline(ch),
            TokenClass::OpenBrace => ch == '{',
            TokenClass::CloseBrace => ch == '}',
        }
    }

    /// Anchored classes only match a single character at column 0
    pub fn is_anchored(self) -> bool {
        matches!(self, TokenClass::OpenBrace | TokenClass::CloseBrace)
    }
}

/// An ordered set of token classes active for one scan.
///
/// When more than one class accepts a character the first listed wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassSet {
    classes: &'static [TokenClass],
}

impl ClassSet {
    /// Word boundaries within a line: case transitions, digit runs,
    /// whitespace runs and punctuation runs.
    pub const WORD: ClassSet = ClassSet {
        classes: &[
            TokenClass::Uppercase,
            TokenClass::Digit,
            TokenClass::Whitespace,
            TokenClass::Punctuation,
        ],
    };

    /// First token on a line reached by wrapping: any letter run, digits,
    /// punctuation or line terminators. Whitespace is never a target here.
    pub const LINE_FETCH: ClassSet = ClassSet {
        classes: &[
            TokenClass::Letter,
            TokenClass::Digit,
            TokenClass::Punctuation,
            TokenClass::Newline,
        ],
    };

    /// Start of a function body
    pub const FUNCTION_START: ClassSet = ClassSet {
        classes: &[TokenClass::OpenBrace],
    };

    /// End of a function body
    pub const FUNCTION_END: ClassSet = ClassSet {
        classes: &[TokenClass::CloseBrace],
    };

    /// The class a character starts a run of, if any
    pub fn classify(&self, ch: char) -> Option<TokenClass> {
        self.classes.iter().copied().find(|class| class.contains(ch))
    }

    /// True when every class in the set is anchored at column 0
    pub fn is_anchored(&self) -> bool {
        !self.classes.is_empty() && self.classes.iter().all(|c| c.is_anchored())
    }
}
