//! The interactive read-eval loop.
//!
//! A thin shell over [`Session`]: lines accumulate until a blank line
//! submits the buffer, the output (or the one-line error) prints, and
//! the loop repeats. The session persists, so definitions - including
//! closures - carry across inputs. An empty buffer or end of input ends
//! the session.

use std::io::{self, BufRead, Write};

use minilang::driver::Session;

/// Runs the interactive loop on stdin/stdout until end of input.
pub(crate) fn run() {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut session = Session::new();

    loop {
        let Some(source) = read_source(&mut input) else {
            break;
        };
        if source.trim().is_empty() {
            break;
        }

        match session.interpret(&source) {
            Ok(output) => {
                for entry in output {
                    println!("{}", entry);
                }
            }
            Err(error) => println!("Error: {}", error.message()),
        }
    }
}

/// Reads lines until a blank line or end of input.
///
/// Returns `None` when the input is exhausted before any line arrived.
fn read_source(input: &mut impl BufRead) -> Option<String> {
    let mut source = String::new();

    loop {
        print!(": ");
        io::stdout().flush().ok();

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) => {
                if source.is_empty() {
                    return None;
                }
                return Some(source);
            }
            Ok(_) => {
                if line.trim().is_empty() {
                    return Some(source);
                }
                source.push_str(&line);
            }
            Err(_) => return None,
        }
    }
}
