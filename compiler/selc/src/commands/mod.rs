//! CLI commands.

mod lex;
mod parse;
mod repl;
mod run;

pub use lex::lex_file;
pub use parse::parse_file;
pub use repl::repl;
pub use run::run_file;

/// Read a source file or exit with a diagnostic.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            eprintln!("error: cannot read '{path}': {err}");
            std::process::exit(1);
        }
    }
}
