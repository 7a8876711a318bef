//! The `lex` command: display the token stream of a file.

use super::read_file;

/// Tokenize `path` and print one token per line with its span and text.
pub fn lex_file(path: &str) {
    let source = read_file(path);
    match sel_lexer::lex(&source) {
        Ok(tokens) => {
            for token in &tokens {
                let text = &source[token.span.start as usize..token.span.end as usize];
                println!("{:?} @ {} '{}'", token.kind, token.span, text);
            }
        }
        Err(err) => {
            eprintln!("error: {path}: {err}");
            std::process::exit(1);
        }
    }
}
