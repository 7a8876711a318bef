//! The `parse` command: display the syntax tree of a file.

use sel_ir::SyntaxNode;

use super::read_file;

/// Parse `path` and print its syntax tree, one node per line.
pub fn parse_file(path: &str) {
    let source = read_file(path);
    let tokens = match sel_lexer::lex(&source) {
        Ok(tokens) => tokens,
        Err(err) => {
            eprintln!("error: {path}: {err}");
            std::process::exit(1);
        }
    };
    match sel_parse::parse(&source, &tokens) {
        Ok(root) => print_node(&root, 0),
        Err(err) => {
            eprintln!("error: {path}: {err}");
            std::process::exit(1);
        }
    }
}

fn print_node(node: &SyntaxNode, depth: usize) {
    let indent = "  ".repeat(depth);
    if node.contents.is_empty() {
        println!("{indent}{:?} @ {}", node.tag, node.span);
    } else {
        println!("{indent}{:?} '{}' @ {}", node.tag, node.contents, node.span);
    }
    for child in &node.children {
        print_node(child, depth + 1);
    }
}
