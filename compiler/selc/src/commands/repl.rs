//! Interactive read-eval-print loop.

use std::io::{self, BufRead, Write};

use crate::Session;

/// Start the REPL. Returns when the user quits or stdin closes.
pub fn repl() {
    println!("Sel {}", env!("CARGO_PKG_VERSION"));
    println!("Type :help for commands, :quit to exit");

    let mut session = Session::new();
    let stdin = io::stdin();

    loop {
        print!("sel> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let input = line.trim();

        match input {
            "" => {}
            ":quit" | ":q" => break,
            ":help" | ":h" => print_help(),
            ":env" => {
                for (name, value) in session.environment().bindings() {
                    println!("{name} = {value}");
                }
            }
            _ => match session.eval_line(input) {
                // Error values render like any other result; the loop
                // always continues.
                Ok(value) => println!("{value}"),
                Err(err) => eprintln!("error: {err}"),
            },
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  :quit, :q   Exit the REPL");
    println!("  :help, :h   Show this help");
    println!("  :env        List bindings in definition order");
}
