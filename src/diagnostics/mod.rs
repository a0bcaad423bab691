//! Terminal error reporting for the CLI.
//!
//! Renders an [`InterpretError`] as an [`ariadne`] report pointing at
//! the offending span, with a plain-text fallback when the report
//! cannot be written. The label text is the language's one-line
//! diagnostic message, untouched.

use std::ops::Range;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use minilang::driver::InterpretError;

/// Renders `error` to stderr.
pub(crate) fn report_error(filename: &str, source: &str, error: &InterpretError) {
    let range = error
        .span()
        .map(|span| span.start..span.end)
        .unwrap_or_else(|| end_of_source_range(source));

    if let Err(report_err) = print_range_report(
        filename,
        source,
        range,
        short_message(error),
        error.message(),
    ) {
        eprintln!("Error: {}", error.message());
        eprintln!("(Failed to display detailed error report: {})", report_err);
    }
}

/// A phase label for the report headline.
fn short_message(error: &InterpretError) -> &'static str {
    match error {
        InterpretError::Lex(_) => "Lex error",
        InterpretError::Parse(_) => "Syntax error",
        InterpretError::Runtime(_) => "Runtime error",
    }
}

fn print_range_report(
    filename: &str,
    source: &str,
    span_range: Range<usize>,
    short_message: &str,
    label_message: &str,
) -> std::io::Result<()> {
    Report::build(ReportKind::Error, (filename, span_range.clone()))
        .with_config(Config::default().with_index_type(IndexType::Byte))
        .with_message(short_message)
        .with_label(
            Label::new((filename, span_range))
                .with_message(label_message)
                .with_color(Color::Red),
        )
        .finish()
        .eprint((filename, Source::from(source)))
}

/// Points at the last byte of the source when an error has no span.
fn end_of_source_range(source: &str) -> Range<usize> {
    if source.is_empty() {
        0..0
    } else {
        let end = source.len().saturating_sub(1);
        end..source.len()
    }
}
