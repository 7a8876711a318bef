//! Token cursor for navigating the token stream.

use sel_ir::{Span, Token, TokenKind};

/// Cursor over a lexed token stream.
///
/// Invariant: the stream ends with an `Eof` token (guaranteed by
/// `sel_lexer::lex`), so `current` is always valid - the cursor never
/// advances past `Eof`.
pub struct Cursor<'a> {
    source: &'a str,
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of the stream.
    pub fn new(source: &'a str, tokens: &'a [Token]) -> Self {
        debug_assert!(
            matches!(tokens.last(), Some(t) if t.kind == TokenKind::Eof),
            "token stream must end with Eof"
        );
        Cursor {
            source,
            tokens,
            pos: 0,
        }
    }

    /// Total number of tokens in the stream.
    #[inline]
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// The current token.
    #[inline]
    pub fn current(&self) -> Token {
        self.tokens
            .get(self.pos)
            .copied()
            .unwrap_or(Token::new(TokenKind::Eof, Span::DUMMY))
    }

    /// Kind of the current token.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.current().kind
    }

    /// Span of the current token.
    #[inline]
    pub fn span(&self) -> Span {
        self.current().span
    }

    /// Source text of the current token.
    #[inline]
    pub fn text(&self) -> &'a str {
        let span = self.span();
        &self.source[span.start as usize..span.end as usize]
    }

    /// Whether the cursor sits on the `Eof` token.
    #[inline]
    pub fn at_eof(&self) -> bool {
        self.kind() == TokenKind::Eof
    }

    /// Consume and return the current token. Does not move past `Eof`.
    #[inline]
    pub fn advance(&mut self) -> Token {
        let token = self.current();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }
}
