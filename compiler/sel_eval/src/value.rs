//! Runtime values.

use std::fmt;

use crate::builtins::Builtin;

/// Why an [`Value::Error`] was produced.
///
/// Carried alongside the rendered message so callers can branch on the
/// failure class without string matching.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Integer literal outside the representable range.
    BadNumber,
    /// Symbol with no binding in the environment.
    UnboundSymbol,
    /// Argument (or callee) of the wrong type.
    WrongType,
    /// Wrong number of arguments.
    WrongArity,
    /// A list operation applied to `{}`.
    EmptyList,
    /// Zero divisor in `/`.
    DivByZero,
}

/// A runtime value.
///
/// Composite variants exclusively own their children; `Clone` is a full
/// structural copy, so no two live trees ever share a mutable child.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Value {
    /// Integer.
    Number(i64),
    /// First-class failure value, propagated by data flow.
    Error { message: String, kind: ErrorKind },
    /// Unresolved identifier.
    Symbol(String),
    /// Reference to one entry of the builtin catalogue. No captured state.
    Function(Builtin),
    /// Expression list: reduced as a function application when evaluated.
    Sexpr(Vec<Value>),
    /// Literal list: never auto-evaluated.
    Qexpr(Vec<Value>),
}

impl Value {
    /// Create a number value.
    #[inline]
    pub fn number(n: i64) -> Self {
        Value::Number(n)
    }

    /// Create a symbol value.
    #[inline]
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    /// Create an error value.
    #[inline]
    pub fn error(kind: ErrorKind, message: impl Into<String>) -> Self {
        Value::Error {
            message: message.into(),
            kind,
        }
    }

    /// Create a function value referencing a catalogue entry.
    #[inline]
    pub fn function(builtin: Builtin) -> Self {
        Value::Function(builtin)
    }

    /// Create an S-expression from its cells.
    #[inline]
    pub fn sexpr(cells: Vec<Value>) -> Self {
        Value::Sexpr(cells)
    }

    /// Create a Q-expression from its cells.
    #[inline]
    pub fn qexpr(cells: Vec<Value>) -> Self {
        Value::Qexpr(cells)
    }

    /// The empty S-expression, used as the unit result (`def` returns it).
    #[inline]
    pub fn unit() -> Self {
        Value::Sexpr(Vec::new())
    }

    /// Whether this is the empty S-expression.
    #[inline]
    pub fn is_unit(&self) -> bool {
        matches!(self, Value::Sexpr(cells) if cells.is_empty())
    }

    /// Whether this is an error value.
    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error { .. })
    }

    /// The error kind, if this is an error value.
    #[inline]
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Value::Error { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Display name of the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "Number",
            Value::Error { .. } => "Error",
            Value::Symbol(_) => "Symbol",
            Value::Function(_) => "Function",
            Value::Sexpr(_) => "S-Expression",
            Value::Qexpr(_) => "Q-Expression",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Error { message, .. } => write!(f, "Error: {message}"),
            Value::Symbol(name) => f.write_str(name),
            Value::Function(builtin) => write!(f, "<builtin {}>", builtin.name()),
            Value::Sexpr(cells) => write_cells(f, cells, '(', ')'),
            Value::Qexpr(cells) => write_cells(f, cells, '{', '}'),
        }
    }
}

/// Space-separated children between delimiters.
fn write_cells(f: &mut fmt::Formatter<'_>, cells: &[Value], open: char, close: char) -> fmt::Result {
    write!(f, "{open}")?;
    for (index, cell) in cells.iter().enumerate() {
        if index > 0 {
            write!(f, " ")?;
        }
        write!(f, "{cell}")?;
    }
    write!(f, "{close}")
}
