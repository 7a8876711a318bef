//! Sel - a small interactive S-expression evaluator.
//!
//! # Pipeline
//!
//! ```text
//! source text (one REPL line, or a script)
//!     │
//!     ▼
//! sel_lexer::lex ──► Vec<Token>
//!     │
//!     ▼
//! sel_parse::parse ──► SyntaxNode tree
//!     │
//!     ▼
//! sel_eval::read ──► Value
//!     │
//!     ▼
//! sel_eval::eval ──► Value (rendered, one per input)
//! ```
//!
//! [`Session`] owns the environment and runs that pipeline; the `commands`
//! module holds the CLI entry points (`repl`, `run`, `parse`, `lex`).

pub mod commands;
mod session;

pub use session::{Session, SessionError};
