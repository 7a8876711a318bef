//! The `run` command: evaluate a script file.

use super::read_file;
use crate::Session;

/// Evaluate each top-level form of `path` in order against a fresh session.
///
/// Non-unit results print one per line. The first error result renders to
/// stderr and exits 1; forms after it are not evaluated.
pub fn run_file(path: &str) {
    let source = read_file(path);
    let mut session = Session::new();

    let results = match session.eval_script(&source) {
        Ok(results) => results,
        Err(err) => {
            eprintln!("error: {path}: {err}");
            std::process::exit(1);
        }
    };

    for value in results {
        if value.is_error() {
            eprintln!("{value}");
            std::process::exit(1);
        }
        if !value.is_unit() {
            println!("{value}");
        }
    }
}
