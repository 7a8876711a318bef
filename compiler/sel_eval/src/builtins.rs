//! The builtin catalogue: the fixed set of primitives an S-expression head
//! can resolve to.
//!
//! Every builtin receives the already-evaluated argument cells and returns a
//! value; validation failures return an error *value*. Internally the
//! implementations use `Result<Value, Value>` so the shared checks compose
//! with `?` - [`Builtin::call`] collapses both sides back into one value.

use crate::environment::Environment;
use crate::errors;
use crate::eval;
use crate::value::Value;

/// One entry of the builtin catalogue.
///
/// Fieldless and `Copy`: a `Value::Function` is a bare reference to an entry
/// here, with no captured state.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Builtin {
    List,
    Head,
    Tail,
    Eval,
    Join,
    Def,
    Add,
    Sub,
    Mul,
    Div,
}

impl Builtin {
    /// Every catalogue entry, in the order the environment binds them.
    pub const CATALOGUE: [Builtin; 10] = [
        Builtin::Def,
        Builtin::List,
        Builtin::Head,
        Builtin::Tail,
        Builtin::Eval,
        Builtin::Join,
        Builtin::Add,
        Builtin::Sub,
        Builtin::Mul,
        Builtin::Div,
    ];

    /// The name this entry is bound to in the environment.
    pub fn name(self) -> &'static str {
        match self {
            Builtin::List => "list",
            Builtin::Head => "head",
            Builtin::Tail => "tail",
            Builtin::Eval => "eval",
            Builtin::Join => "join",
            Builtin::Def => "def",
            Builtin::Add => "+",
            Builtin::Sub => "-",
            Builtin::Mul => "*",
            Builtin::Div => "/",
        }
    }

    /// Invoke this builtin on evaluated argument cells.
    pub fn call(self, env: &mut Environment, args: Vec<Value>) -> Value {
        let result = match self {
            Builtin::List => Ok(Value::qexpr(args)),
            Builtin::Head => head(args),
            Builtin::Tail => tail(args),
            Builtin::Eval => eval_quoted(env, args),
            Builtin::Join => join(args),
            Builtin::Def => def(env, args),
            Builtin::Add | Builtin::Sub | Builtin::Mul | Builtin::Div => arithmetic(self, args),
        };
        result.unwrap_or_else(|error| error)
    }
}

// Shared validation. Each check either passes the data through or produces
// the error value the caller returns verbatim.

fn expect_arity(func: &str, args: &[Value], expected: usize) -> Result<(), Value> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(errors::wrong_arg_count(func, args.len(), expected))
    }
}

/// Type check doubling as extraction: a Q-expression argument gives up its
/// cells, anything else is a type error.
fn qexpr_cells(func: &str, index: usize, arg: Value) -> Result<Vec<Value>, Value> {
    match arg {
        Value::Qexpr(cells) => Ok(cells),
        other => Err(errors::wrong_arg_type(
            func,
            index,
            other.type_name(),
            "Q-Expression",
        )),
    }
}

fn non_empty(func: &str, index: usize, cells: Vec<Value>) -> Result<Vec<Value>, Value> {
    if cells.is_empty() {
        Err(errors::empty_list_arg(func, index))
    } else {
        Ok(cells)
    }
}

/// `head {1 2 3}` -> `{1}`
fn head(mut args: Vec<Value>) -> Result<Value, Value> {
    expect_arity("head", &args, 1)?;
    let cells = qexpr_cells("head", 0, args.swap_remove(0))?;
    let mut cells = non_empty("head", 0, cells)?;
    cells.truncate(1);
    Ok(Value::qexpr(cells))
}

/// `tail {1 2 3}` -> `{2 3}`
fn tail(mut args: Vec<Value>) -> Result<Value, Value> {
    expect_arity("tail", &args, 1)?;
    let cells = qexpr_cells("tail", 0, args.swap_remove(0))?;
    let mut cells = non_empty("tail", 0, cells)?;
    cells.remove(0);
    Ok(Value::qexpr(cells))
}

/// `eval {+ 1 2}` -> retag as an S-expression and reduce it.
fn eval_quoted(env: &mut Environment, mut args: Vec<Value>) -> Result<Value, Value> {
    expect_arity("eval", &args, 1)?;
    let cells = qexpr_cells("eval", 0, args.swap_remove(0))?;
    Ok(eval::eval(env, Value::sexpr(cells)))
}

/// `join {1 2} {3}` -> `{1 2 3}`
fn join(args: Vec<Value>) -> Result<Value, Value> {
    let mut joined = Vec::new();
    for (index, arg) in args.into_iter().enumerate() {
        joined.extend(qexpr_cells("join", index, arg)?);
    }
    Ok(Value::qexpr(joined))
}

/// `def {x y} 1 2` binds x and y; returns the unit value.
fn def(env: &mut Environment, mut args: Vec<Value>) -> Result<Value, Value> {
    if args.is_empty() {
        return Err(errors::wrong_arg_count("def", 0, 1));
    }
    let symbols = qexpr_cells("def", 0, args.remove(0))?;

    let mut names = Vec::with_capacity(symbols.len());
    for symbol in &symbols {
        match symbol {
            Value::Symbol(name) => names.push(name.clone()),
            other => return Err(errors::def_non_symbol(other.type_name())),
        }
    }
    if names.len() != args.len() {
        return Err(errors::def_count_mismatch(names.len(), args.len()));
    }

    for (name, value) in names.iter().zip(args) {
        env.put(name, value);
    }
    Ok(Value::unit())
}

/// Left fold over `Number` arguments with wrapping `i64` semantics.
///
/// A lone argument to `-` negates; `/` aborts the fold at the first zero
/// divisor. `wrapping_div` truncates toward zero and absorbs the one
/// overflowing case, `i64::MIN / -1`.
fn arithmetic(op: Builtin, args: Vec<Value>) -> Result<Value, Value> {
    let mut numbers = Vec::with_capacity(args.len());
    for (index, arg) in args.iter().enumerate() {
        match arg {
            Value::Number(n) => numbers.push(*n),
            other => {
                return Err(errors::wrong_arg_type(
                    op.name(),
                    index,
                    other.type_name(),
                    "Number",
                ))
            }
        }
    }

    let Some((&first, rest)) = numbers.split_first() else {
        return Err(errors::wrong_arg_count(op.name(), 0, 1));
    };

    if op == Builtin::Sub && rest.is_empty() {
        return Ok(Value::number(first.wrapping_neg()));
    }

    let mut acc = first;
    for &n in rest {
        acc = match op {
            Builtin::Add => acc.wrapping_add(n),
            Builtin::Sub => acc.wrapping_sub(n),
            Builtin::Mul => acc.wrapping_mul(n),
            Builtin::Div => {
                if n == 0 {
                    return Err(errors::division_by_zero());
                }
                acc.wrapping_div(n)
            }
            _ => unreachable!("arithmetic dispatched with a non-arithmetic builtin"),
        };
    }
    Ok(Value::number(acc))
}
