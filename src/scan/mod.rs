//! Token boundary scanning
//!
//! ```text
//! LineSource → tokenize() → Scanner::find() → command adapters
//! ```
//!
//! The tokenizer splits one line into maximal runs of a `ClassSet`. The
//! `Scanner` applies it to the caret line and, when that yields nothing,
//! walks adjacent lines until a token turns up or the document ends.

pub mod class;
pub mod tokenizer;
pub mod walker;

pub use class::{is_boundary_punctuation, is_newline, ClassSet, TokenClass};
pub use tokenizer::{tokenize, Token, Tokens};
pub use walker::Scanner;

/// Traversal order within a line and which neighbouring line is consulted next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanDirection {
    Forward,
    Backward,
}
