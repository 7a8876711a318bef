//! Sel CLI
//!
//! Dispatches to the REPL by default; `run`, `parse`, and `lex` operate on
//! script files.

use selc::commands::{lex_file, parse_file, repl, run_file};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    let Some(command) = args.get(1) else {
        repl();
        return;
    };

    match command.as_str() {
        "repl" => repl(),
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: sel run <file.sel>");
                std::process::exit(1);
            }
            run_file(&args[2]);
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: sel parse <file.sel>");
                std::process::exit(1);
            }
            parse_file(&args[2]);
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: sel lex <file.sel>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-v" => {
            println!("Sel {}", env!("CARGO_PKG_VERSION"));
        }
        other => {
            // If it looks like a script path, run it
            if std::path::Path::new(other)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("sel"))
            {
                run_file(other);
            } else {
                eprintln!("Unknown command: {other}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

/// Install a stderr subscriber when `SEL_LOG` is set (e.g. `SEL_LOG=trace`).
/// Without it, tracing calls throughout the pipeline are no-ops.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let Ok(filter) = EnvFilter::try_from_env("SEL_LOG") else {
        return;
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_usage() {
    println!("Sel - a small S-expression evaluator");
    println!();
    println!("Usage: sel [command] [options]");
    println!();
    println!("Commands:");
    println!("  repl                 Start the interactive REPL (the default)");
    println!("  run <file.sel>       Evaluate a script file");
    println!("  parse <file.sel>     Parse and display the syntax tree");
    println!("  lex <file.sel>       Tokenize and display the tokens");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Environment:");
    println!("  SEL_LOG=<filter>     Enable pipeline tracing (e.g. trace, sel_eval=debug)");
    println!();
    println!("Examples:");
    println!("  sel");
    println!("  sel run demos/intro.sel");
    println!("  sel parse demos/intro.sel");
    println!("  SEL_LOG=trace sel run demos/intro.sel");
}
