//! Centralized constructors for error values.
//!
//! Every failure the evaluator or a builtin can produce is built here, so
//! message wording lives in one place.

use crate::value::{ErrorKind, Value};

/// Integer literal outside the `i64` range.
pub fn invalid_number() -> Value {
    Value::error(ErrorKind::BadNumber, "Invalid number")
}

/// Symbol lookup failed.
pub fn unbound_symbol() -> Value {
    Value::error(ErrorKind::UnboundSymbol, "Unbound symbol")
}

/// Zero divisor reached during a `/` fold.
pub fn division_by_zero() -> Value {
    Value::error(ErrorKind::DivByZero, "Division by zero!")
}

/// Builtin called with the wrong number of arguments.
pub fn wrong_arg_count(func: &str, got: usize, expected: usize) -> Value {
    Value::error(
        ErrorKind::WrongArity,
        format!(
            "Function '{func}' passed incorrect number of arguments. \
             Got {got}, Expected {expected}."
        ),
    )
}

/// Builtin called with an argument of the wrong type.
pub fn wrong_arg_type(func: &str, index: usize, got: &str, expected: &str) -> Value {
    Value::error(
        ErrorKind::WrongType,
        format!(
            "Function '{func}' passed incorrect type for argument {index}. \
             Got {got}, Expected {expected}."
        ),
    )
}

/// Builtin given `{}` where a non-empty list is required.
pub fn empty_list_arg(func: &str, index: usize) -> Value {
    Value::error(
        ErrorKind::EmptyList,
        format!("Function '{func}' passed {{}} for argument {index}."),
    )
}

/// The head of an S-expression evaluated to something other than a function.
pub fn non_function_callee(got: &str) -> Value {
    Value::error(
        ErrorKind::WrongType,
        format!("S-expression starts with incorrect type. Got {got}, Expected Function."),
    )
}

/// `def` given a non-symbol inside its binding list.
pub fn def_non_symbol(got: &str) -> Value {
    Value::error(
        ErrorKind::WrongType,
        format!("Function 'def' cannot define non-symbol. Got {got}, Expected Symbol."),
    )
}

/// `def` given unequal numbers of symbols and values.
pub fn def_count_mismatch(symbols: usize, values: usize) -> Value {
    Value::error(
        ErrorKind::WrongArity,
        format!(
            "Function 'def' passed mismatched symbol and value counts. \
             Got {values}, Expected {symbols}."
        ),
    )
}
