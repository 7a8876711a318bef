//! Hand-written scanner for Sel.
//!
//! Turns source text into a flat token stream with zero heap allocation per
//! token: each [`Token`] is a kind plus a byte span, and callers slice the
//! source when they need the literal text.
//!
//! Token classes follow the surface grammar:
//!
//! ```text
//! number : -?[0-9]+
//! symbol : [a-zA-Z0-9_+\-*/\\=<>!&]+
//! punct  : ( ) { }
//! ```
//!
//! Whitespace separates tokens. A `-` immediately followed by a digit starts
//! a number; anywhere else it is ordinary symbol material. Any byte outside
//! the grammar is a [`LexError`].

mod cursor;
mod scanner;

use std::fmt;

use scanner::Scanner;
use sel_ir::Token;

/// Error produced while scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A character outside the surface grammar.
    UnexpectedChar { ch: char, offset: u32 },
    /// Input longer than spans can address.
    SourceTooLarge { len: usize },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnexpectedChar { ch, offset } => {
                write!(f, "unexpected character '{}' at byte {}", ch.escape_default(), offset)
            }
            LexError::SourceTooLarge { len } => {
                write!(f, "source is {len} bytes; the limit is {} bytes", u32::MAX)
            }
        }
    }
}

impl std::error::Error for LexError {}

/// Scan `source` into a token stream.
///
/// On success the stream is non-empty and always ends with a single
/// [`sel_ir::TokenKind::Eof`] token.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    if u32::try_from(source.len()).is_err() {
        return Err(LexError::SourceTooLarge { len: source.len() });
    }

    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token()?;
        let done = token.kind == sel_ir::TokenKind::Eof;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}
