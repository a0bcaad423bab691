//! The minilang interpreter CLI.
//!
//! This binary provides `minilang run` and `minilang repl` commands. It
//! is a thin shell: file loading and the interactive loop live here,
//! while everything observable about the language lives in the library.

use clap::{Parser, Subcommand};

mod diagnostics;
mod repl;

/// Command-line interface for the minilang interpreter.
#[derive(Parser)]
#[command(name = "minilang")]
#[command(about = "The minilang interpreter", long_about = None)]
struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Available CLI subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Interpret a minilang source file.
    Run {
        /// The source file to run (e.g. `fib.mini`).
        file: String,
    },
    /// Start an interactive session.
    Repl,
}

/// Entry point for the minilang interpreter.
fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { file } => run_file(&file),
        Commands::Repl => repl::run(),
    }
}

/// Reads a source file, interprets it, and prints each output entry on
/// its own line. Errors render as diagnostics on stderr and exit 1.
fn run_file(path: &str) {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Error: failed to read '{}': {}", path, error);
            std::process::exit(1);
        }
    };

    let mut session = minilang::driver::Session::new();
    match session.interpret(&source) {
        Ok(output) => {
            for entry in output {
                println!("{}", entry);
            }
        }
        Err(error) => {
            diagnostics::report_error(path, &source, &error);
            std::process::exit(1);
        }
    }
}
