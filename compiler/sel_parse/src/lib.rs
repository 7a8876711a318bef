//! Recursive descent parser for Sel.
//!
//! Produces the [`SyntaxNode`] tree consumed by the evaluator's reader:
//!
//! ```text
//! root  : expr* EOF
//! expr  : NUMBER | SYMBOL | '(' expr* ')' | '{' expr* '}'
//! ```
//!
//! Group nodes keep their delimiter tokens as `Punct` leaf children, in
//! source order; the reader skips them. The implicit root node carries no
//! delimiters and reads as an S-expression.
//!
//! Recursion depth equals input nesting depth; every recursive call runs
//! under [`sel_stack::with_headroom`], so nesting is bounded by memory, not
//! by the thread's stack size.

mod cursor;
mod error;

pub use cursor::Cursor;
pub use error::ParseError;

use sel_ir::{NodeTag, Span, SyntaxNode, Token, TokenKind};
use tracing::{debug, trace};

/// Parse a lexed token stream into a syntax tree rooted at a `Root` node.
///
/// `source` must be the text the tokens were lexed from; leaf nodes copy
/// their literal text out of it.
pub fn parse(source: &str, tokens: &[Token]) -> Result<SyntaxNode, ParseError> {
    Parser::new(source, tokens).parse_program()
}

/// Parser state.
struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str, tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(source, tokens),
        }
    }

    fn parse_program(mut self) -> Result<SyntaxNode, ParseError> {
        debug!(tokens = self.cursor.token_count(), "parse start");

        let mut children = Vec::new();
        while !self.cursor.at_eof() {
            children.push(self.parse_expr()?);
        }

        let span = match (children.first(), children.last()) {
            (Some(first), Some(last)) => first.span.merge(last.span),
            _ => Span::DUMMY,
        };
        Ok(SyntaxNode::branch(NodeTag::Root, span, children))
    }

    fn parse_expr(&mut self) -> Result<SyntaxNode, ParseError> {
        sel_stack::with_headroom(|| match self.cursor.kind() {
            TokenKind::Number => Ok(self.leaf(NodeTag::Number)),
            TokenKind::Symbol => Ok(self.leaf(NodeTag::Symbol)),
            TokenKind::LParen => self.group(NodeTag::Sexpr, TokenKind::RParen, '('),
            TokenKind::LBrace => self.group(NodeTag::Qexpr, TokenKind::RBrace, '{'),
            found => Err(ParseError::UnexpectedToken {
                found,
                span: self.cursor.span(),
                expected: "an expression",
            }),
        })
    }

    /// Consume the current token as a leaf node with its literal text.
    fn leaf(&mut self, tag: NodeTag) -> SyntaxNode {
        let text = self.cursor.text();
        let token = self.cursor.advance();
        SyntaxNode::leaf(tag, text, token.span)
    }

    /// `'(' expr* ')'` or `'{' expr* '}'`. The opening token is current.
    fn group(
        &mut self,
        tag: NodeTag,
        close: TokenKind,
        open_char: char,
    ) -> Result<SyntaxNode, ParseError> {
        trace!(?tag, "parse group");
        let open = self.cursor.text();
        let open_token = self.cursor.advance();

        let mut children = vec![SyntaxNode::leaf(NodeTag::Punct, open, open_token.span)];
        while self.cursor.kind() != close {
            if self.cursor.at_eof() {
                return Err(ParseError::UnclosedDelimiter {
                    open: open_char,
                    span: open_token.span,
                });
            }
            children.push(self.parse_expr()?);
        }

        let close_text = self.cursor.text();
        let close_token = self.cursor.advance();
        children.push(SyntaxNode::leaf(NodeTag::Punct, close_text, close_token.span));

        Ok(SyntaxNode::branch(
            tag,
            open_token.span.merge(close_token.span),
            children,
        ))
    }
}
