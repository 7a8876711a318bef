//! Sel IR - shared syntax types for the Sel interpreter.
//!
//! This crate defines the data that flows between the pipeline stages:
//!
//! ```text
//! source text
//!     │
//!     ▼
//! lex ──► Vec<Token>
//!     │
//!     ▼
//! parse ──► SyntaxNode tree
//!     │
//!     ▼
//! read ──► Value (in sel_eval)
//! ```
//!
//! It is deliberately standalone: no `sel_*` dependencies, so external tools
//! can consume tokens and syntax trees without linking the evaluator.

mod span;
mod syntax;
mod token;

pub use span::Span;
pub use syntax::{NodeTag, SyntaxNode};
pub use token::{Token, TokenKind};
