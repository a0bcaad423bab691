//! Common test utilities for minilang integration tests.
//!
//! This module provides shared helper functions used across the
//! integration test files.

// Each test file is compiled as a separate crate, so not all functions
// are used in every test file. This is expected behavior.
#![allow(dead_code)]

use minilang::driver;

/// Interprets a source text on a fresh session and returns its printed
/// output.
pub fn run(source: &str) -> Result<Vec<String>, String> {
    driver::interpret(source).map_err(|e| e.message().to_string())
}

/// Interprets a source text that must succeed.
pub fn run_ok(source: &str) -> Vec<String> {
    match run(source) {
        Ok(output) => output,
        Err(message) => panic!("Evaluation failed for input {:?}: {}", source, message),
    }
}

/// Interprets a source text that must fail and returns the one-line
/// diagnostic.
pub fn run_error(source: &str) -> String {
    match run(source) {
        Ok(output) => panic!(
            "Expected evaluation to fail for input {:?}, but it printed {:?}",
            source, output
        ),
        Err(message) => message,
    }
}

/// Returns the path to the minilang binary built by cargo.
///
/// Used by tests that drive the CLI as a subprocess.
pub fn minilang_binary() -> String {
    env!("CARGO_BIN_EXE_minilang").to_string()
}
