//! Token scanner: dispatch on the current byte, one focused method per
//! token class.

use crate::cursor::Cursor;
use crate::LexError;
use sel_ir::{Span, Token, TokenKind};

/// Byte classes accepted inside a symbol.
fn is_symbol_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
        || matches!(
            byte,
            b'_' | b'+' | b'-' | b'*' | b'/' | b'\\' | b'=' | b'<' | b'>' | b'!' | b'&'
        )
}

pub(crate) struct Scanner<'a> {
    source: &'a str,
    cursor: Cursor<'a>,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Scanner {
            source,
            cursor: Cursor::new(source),
        }
    }

    /// Produce the next token, skipping leading whitespace.
    pub(crate) fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 if self.cursor.is_eof() => Ok(Token::new(TokenKind::Eof, Span::new(start, start))),
            b'(' => Ok(self.single(start, TokenKind::LParen)),
            b')' => Ok(self.single(start, TokenKind::RParen)),
            b'{' => Ok(self.single(start, TokenKind::LBrace)),
            b'}' => Ok(self.single(start, TokenKind::RBrace)),
            b'0'..=b'9' => Ok(self.number(start)),
            b'-' if self.cursor.peek().is_ascii_digit() => Ok(self.number(start)),
            byte if is_symbol_byte(byte) => Ok(self.symbol(start)),
            _ => Err(self.unexpected(start)),
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.cursor.current(), b' ' | b'\t' | b'\r' | b'\n') {
            self.cursor.advance();
        }
    }

    fn single(&mut self, start: u32, kind: TokenKind) -> Token {
        self.cursor.advance();
        Token::new(kind, Span::new(start, self.cursor.pos()))
    }

    /// `-?[0-9]+`. The caller guarantees the current byte is a digit, or a
    /// `-` directly followed by one.
    fn number(&mut self, start: u32) -> Token {
        if self.cursor.current() == b'-' {
            self.cursor.advance();
        }
        while self.cursor.current().is_ascii_digit() {
            self.cursor.advance();
        }
        Token::new(TokenKind::Number, Span::new(start, self.cursor.pos()))
    }

    /// Maximal run of symbol bytes.
    fn symbol(&mut self, start: u32) -> Token {
        while is_symbol_byte(self.cursor.current()) {
            self.cursor.advance();
        }
        Token::new(TokenKind::Symbol, Span::new(start, self.cursor.pos()))
    }

    fn unexpected(&self, start: u32) -> LexError {
        // The cursor only stops at char boundaries, so decoding here is safe.
        let ch = self.source[start as usize..]
            .chars()
            .next()
            .unwrap_or('\u{FFFD}');
        LexError::UnexpectedChar { ch, offset: start }
    }
}
