//! End-to-end pipeline tests: source text through lex, parse, read, eval.

use pretty_assertions::assert_eq;
use sel_eval::{ErrorKind, Value};
use selc::{Session, SessionError};

fn eval_one(line: &str) -> Value {
    match Session::new().eval_line(line) {
        Ok(value) => value,
        Err(err) => panic!("frontend error for '{line}': {err}"),
    }
}

fn render_one(line: &str) -> String {
    eval_one(line).to_string()
}

#[test]
fn test_literal_evaluates_to_itself() {
    assert_eq!(eval_one("42"), Value::number(42));
    assert_eq!(eval_one("-17"), Value::number(-17));
    assert_eq!(eval_one(&i64::MAX.to_string()), Value::number(i64::MAX));
}

#[test]
fn test_out_of_range_literal_is_bad_number() {
    assert_eq!(
        eval_one("9223372036854775808").error_kind(),
        Some(ErrorKind::BadNumber)
    );
}

#[test]
fn test_arithmetic() {
    assert_eq!(eval_one("+ 1 2 3"), Value::number(6));
    assert_eq!(eval_one("- 5"), Value::number(-5));
    assert_eq!(eval_one("* 2 3 4"), Value::number(24));
    assert_eq!(eval_one("/ 10 2"), Value::number(5));
}

#[test]
fn test_division_by_zero() {
    let result = eval_one("/ 10 0");
    assert_eq!(result.error_kind(), Some(ErrorKind::DivByZero));
    assert_eq!(result.to_string(), "Error: Division by zero!");
}

#[test]
fn test_list_operations() {
    assert_eq!(render_one("head {1 2 3}"), "{1}");
    assert_eq!(render_one("tail {1 2 3}"), "{2 3}");
    assert_eq!(render_one("join {1 2} {3}"), "{1 2 3}");
    assert_eq!(render_one("list 1 2 3"), "{1 2 3}");
    assert_eq!(render_one("eval {+ 1 2}"), "3");
}

#[test]
fn test_nested_expressions() {
    assert_eq!(eval_one("+ 1 (* 2 3)"), Value::number(7));
    assert_eq!(eval_one("head (tail {1 2 3})"), Value::qexpr(vec![Value::number(2)]));
}

#[test]
fn test_qexpr_is_literal() {
    assert_eq!(render_one("{+ 1 2}"), "{+ 1 2}");
    assert_eq!(render_one("{foo bar}"), "{foo bar}");
}

#[test]
fn test_empty_inputs_are_unit() {
    assert_eq!(eval_one(""), Value::unit());
    assert_eq!(render_one("()"), "()");
}

#[test]
fn test_def_persists_across_lines() {
    let mut session = Session::new();
    assert_eq!(session.eval_line("def {x} 10"), Ok(Value::unit()));
    assert_eq!(session.eval_line("+ x 1"), Ok(Value::number(11)));

    // Rebinding takes effect immediately.
    assert_eq!(session.eval_line("def {x} 20"), Ok(Value::unit()));
    assert_eq!(session.eval_line("+ x 1"), Ok(Value::number(21)));
}

#[test]
fn test_def_multiple_bindings() {
    let mut session = Session::new();
    assert_eq!(session.eval_line("def {a b} 1 2"), Ok(Value::unit()));
    assert_eq!(session.eval_line("+ a b"), Ok(Value::number(3)));
}

#[test]
fn test_def_through_eval_builtin() {
    let mut session = Session::new();
    assert_eq!(session.eval_line("eval {def {y} 4}"), Ok(Value::unit()));
    assert_eq!(session.eval_line("* y y"), Ok(Value::number(16)));
}

#[test]
fn test_unbound_symbol_in_application() {
    let result = eval_one("(+ 1 foo)");
    assert_eq!(result.error_kind(), Some(ErrorKind::UnboundSymbol));
    assert_eq!(result.to_string(), "Error: Unbound symbol");
}

#[test]
fn test_earlier_error_takes_precedence() {
    // The division error is at an earlier position than the unbound symbol.
    let result = eval_one("+ (/ 1 0) foo");
    assert_eq!(result.error_kind(), Some(ErrorKind::DivByZero));
}

#[test]
fn test_sexpr_starting_with_a_number_is_wrong_type() {
    let result = eval_one("1 2 3");
    assert_eq!(result.error_kind(), Some(ErrorKind::WrongType));
}

#[test]
fn test_builtin_renders_as_placeholder() {
    assert_eq!(render_one("head"), "<builtin head>");
}

#[test]
fn test_lex_error_surfaces() {
    assert!(matches!(
        Session::new().eval_line("1 @ 2"),
        Err(SessionError::Lex(_))
    ));
}

#[test]
fn test_parse_error_surfaces() {
    assert!(matches!(
        Session::new().eval_line("(+ 1"),
        Err(SessionError::Parse(_))
    ));
    assert!(matches!(
        Session::new().eval_line("{1 2"),
        Err(SessionError::Parse(_))
    ));
}

#[test]
fn test_script_evaluates_forms_in_order() {
    let mut session = Session::new();
    let results = match session.eval_script("(def {x} 5) (+ x 2) (* x x)") {
        Ok(results) => results,
        Err(err) => panic!("frontend error: {err}"),
    };
    assert_eq!(
        results,
        vec![Value::unit(), Value::number(7), Value::number(25)]
    );
}

#[test]
fn test_script_stops_at_the_first_error_result() {
    let mut session = Session::new();
    let results = match session.eval_script("(/ 1 0) (def {x} 1) 2") {
        Ok(results) => results,
        Err(err) => panic!("frontend error: {err}"),
    };
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].error_kind(), Some(ErrorKind::DivByZero));

    // The form after the error never ran.
    assert_eq!(
        session.environment().get("x").error_kind(),
        Some(ErrorKind::UnboundSymbol)
    );
}

#[test]
fn test_deeply_nested_input_round_trips() {
    let depth = 10_000;
    let mut source = String::with_capacity(depth * 8);
    for _ in 0..depth {
        source.push_str("(+ 1 ");
    }
    source.push('0');
    for _ in 0..depth {
        source.push(')');
    }

    let depth_i64 = i64::try_from(depth).unwrap_or(i64::MAX);
    assert_eq!(eval_one(&source), Value::number(depth_i64));
}
