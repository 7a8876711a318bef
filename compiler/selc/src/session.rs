//! An interpreter session: one environment, fed one input at a time.

use std::fmt;

use sel_eval::{eval, read, Environment, Value};
use sel_lexer::LexError;
use sel_parse::ParseError;

/// Frontend failure: the input never reached evaluation.
///
/// Evaluation itself cannot fail this way - runtime problems are
/// [`Value::Error`] results, printed and carried on like any other value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    Lex(LexError),
    Parse(ParseError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Lex(err) => write!(f, "{err}"),
            SessionError::Parse(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Lex(err) => Some(err),
            SessionError::Parse(err) => Some(err),
        }
    }
}

impl From<LexError> for SessionError {
    fn from(err: LexError) -> Self {
        SessionError::Lex(err)
    }
}

impl From<ParseError> for SessionError {
    fn from(err: ParseError) -> Self {
        SessionError::Parse(err)
    }
}

/// A session: the environment plus the lex → parse → read → eval pipeline.
///
/// Bindings made by `def` persist across calls for the session's lifetime.
pub struct Session {
    env: Environment,
}

impl Session {
    /// Create a session with the builtin catalogue bound.
    pub fn new() -> Self {
        Session {
            env: Environment::with_builtins(),
        }
    }

    /// Evaluate one line of input as an implicit S-expression.
    ///
    /// `+ 1 2` reads as `(+ 1 2)`: the line's forms become the cells of one
    /// application. This is the interactive behavior - a lone literal
    /// evaluates to itself, a leading symbol applies.
    pub fn eval_line(&mut self, line: &str) -> Result<Value, SessionError> {
        let tokens = sel_lexer::lex(line)?;
        let root = sel_parse::parse(line, &tokens)?;
        tracing::debug!(bytes = line.len(), "evaluating line");
        Ok(eval(&mut self.env, read(&root)))
    }

    /// Evaluate a script: each top-level form is one input.
    ///
    /// Results come back in form order. Evaluation stops after the first
    /// form whose result is an error value; that error is the final element.
    pub fn eval_script(&mut self, source: &str) -> Result<Vec<Value>, SessionError> {
        let tokens = sel_lexer::lex(source)?;
        let root = sel_parse::parse(source, &tokens)?;
        let forms = match read(&root) {
            Value::Sexpr(forms) => forms,
            other => vec![other],
        };
        tracing::debug!(forms = forms.len(), "evaluating script");

        let mut results = Vec::with_capacity(forms.len());
        for form in forms {
            let value = eval(&mut self.env, form);
            let failed = value.is_error();
            results.push(value);
            if failed {
                break;
            }
        }
        Ok(results)
    }

    /// The session's environment.
    pub fn environment(&self) -> &Environment {
        &self.env
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
