use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::{Builtin, ErrorKind, Value};

#[test]
fn test_render_scalars() {
    assert_eq!(Value::number(42).to_string(), "42");
    assert_eq!(Value::number(-7).to_string(), "-7");
    assert_eq!(Value::symbol("foo").to_string(), "foo");
    assert_eq!(
        Value::error(ErrorKind::DivByZero, "Division by zero!").to_string(),
        "Error: Division by zero!"
    );
    assert_eq!(Value::function(Builtin::Head).to_string(), "<builtin head>");
}

#[test]
fn test_render_lists() {
    let sexpr = Value::sexpr(vec![
        Value::symbol("+"),
        Value::number(1),
        Value::sexpr(vec![Value::symbol("x")]),
    ]);
    assert_eq!(sexpr.to_string(), "(+ 1 (x))");

    let qexpr = Value::qexpr(vec![Value::number(1), Value::number(2)]);
    assert_eq!(qexpr.to_string(), "{1 2}");

    assert_eq!(Value::unit().to_string(), "()");
    assert_eq!(Value::qexpr(vec![]).to_string(), "{}");
}

#[test]
fn test_type_names() {
    assert_eq!(Value::number(0).type_name(), "Number");
    assert_eq!(Value::symbol("x").type_name(), "Symbol");
    assert_eq!(Value::function(Builtin::Add).type_name(), "Function");
    assert_eq!(Value::unit().type_name(), "S-Expression");
    assert_eq!(Value::qexpr(vec![]).type_name(), "Q-Expression");
    assert_eq!(
        Value::error(ErrorKind::WrongType, "x").type_name(),
        "Error"
    );
}

#[test]
fn test_unit_and_error_predicates() {
    assert!(Value::unit().is_unit());
    assert!(!Value::sexpr(vec![Value::number(1)]).is_unit());
    assert!(!Value::qexpr(vec![]).is_unit());

    let err = Value::error(ErrorKind::EmptyList, "x");
    assert!(err.is_error());
    assert_eq!(err.error_kind(), Some(ErrorKind::EmptyList));
    assert_eq!(Value::number(1).error_kind(), None);
}

/// Arbitrary value trees for the clone property below.
fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        any::<i64>().prop_map(Value::number),
        "[a-z+*/-]{1,8}".prop_map(Value::symbol),
        Just(Value::function(Builtin::Join)),
    ];
    leaf.prop_recursive(4, 64, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Value::sexpr),
            prop::collection::vec(inner, 0..5).prop_map(Value::qexpr),
        ]
    })
}

proptest! {
    /// clone(clone(v)) is structurally equal to clone(v): cloning never
    /// shares or loses children.
    #[test]
    fn test_clone_is_structural(value in arb_value()) {
        let once = value.clone();
        let twice = once.clone();
        prop_assert_eq!(once, twice);
    }
}
