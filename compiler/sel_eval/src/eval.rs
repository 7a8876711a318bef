//! The tree-walking evaluator.

use tracing::trace;

use crate::environment::Environment;
use crate::errors;
use crate::value::Value;

/// Reduce a value to its final form.
///
/// Symbols resolve through the environment (an unbound name resolves to an
/// error value); S-expressions reduce as applications; everything else -
/// numbers, errors, Q-expressions, functions - is self-evaluating.
///
/// Recursion depth equals the input's nesting depth and runs under
/// [`sel_stack::with_headroom`], so deeply nested input evaluates instead of
/// overflowing the stack.
pub fn eval(env: &mut Environment, value: Value) -> Value {
    match value {
        Value::Symbol(name) => {
            let resolved = env.get(&name);
            trace!(symbol = %name, resolved = %resolved, "resolve");
            resolved
        }
        Value::Sexpr(cells) => sel_stack::with_headroom(|| eval_sexpr(env, cells)),
        other => other,
    }
}

/// Reduce an S-expression's cells to a single value.
fn eval_sexpr(env: &mut Environment, cells: Vec<Value>) -> Value {
    // Evaluate every cell, left to right.
    let mut evaluated = Vec::with_capacity(cells.len());
    for cell in cells {
        evaluated.push(eval(env, cell));
    }

    // First error by position wins; the rest of the expression is discarded.
    if let Some(index) = evaluated.iter().position(Value::is_error) {
        return evaluated.swap_remove(index);
    }

    // Empty expression is the unit value; a singleton unwraps.
    if evaluated.len() <= 1 {
        return evaluated.pop().unwrap_or_else(Value::unit);
    }

    // Application: the head must have evaluated to a function.
    let callee = evaluated.remove(0);
    match callee {
        Value::Function(builtin) => builtin.call(env, evaluated),
        other => errors::non_function_callee(other.type_name()),
    }
}
