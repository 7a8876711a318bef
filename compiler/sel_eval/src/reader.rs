//! Bridge from the parser's syntax tree to values.

use sel_ir::{NodeTag, SyntaxNode};

use crate::errors;
use crate::value::Value;

/// Convert a syntax tree node into a value.
///
/// - number leaves parse as base-10 `i64`; out-of-range literals become a
///   `BadNumber` error *value*, not a fault
/// - symbol leaves carry their text verbatim
/// - the root and parenthesized groups read as S-expressions, braced groups
///   as Q-expressions, with delimiter children skipped
///
/// # Panics
///
/// Panics when called directly on a `Punct` node; delimiters only occur as
/// children of a group, where this function skips them.
pub fn read(node: &SyntaxNode) -> Value {
    match node.tag {
        NodeTag::Number => read_number(&node.contents),
        NodeTag::Symbol => Value::symbol(node.contents.clone()),
        NodeTag::Root | NodeTag::Sexpr => Value::sexpr(read_cells(node)),
        NodeTag::Qexpr => Value::qexpr(read_cells(node)),
        NodeTag::Punct => unreachable!("delimiter nodes are skipped by their parent"),
    }
}

fn read_cells(node: &SyntaxNode) -> Vec<Value> {
    node.children
        .iter()
        .filter(|child| child.tag != NodeTag::Punct)
        .map(read)
        .collect()
}

fn read_number(text: &str) -> Value {
    text.parse::<i64>()
        .map_or_else(|_| errors::invalid_number(), Value::number)
}
