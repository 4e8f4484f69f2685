//! Debug commands: `lex` and `parse` for inspecting the front end.

use std::fmt::Write;
use std::path::Path;

use tern_diagnostic::emitter::ColorMode;
use tern_diagnostic::Diagnostic;
use tern_lexer::LexError;
use tern_parse::ParseError;

use super::{read_file, report};
use crate::CliError;

/// One line per token: kind, lexeme and span.
pub fn token_listing(source: &str) -> (String, Vec<Diagnostic>) {
    let output = tern_lexer::tokenize(source);
    let mut listing = String::new();
    for token in &output.tokens {
        let _ = writeln!(
            listing,
            "{:?} {:?} @ {}",
            token.kind,
            token.lexeme.as_str(),
            token.span
        );
    }
    let diagnostics = output.errors.iter().map(LexError::to_diagnostic).collect();
    (listing, diagnostics)
}

/// The parsed program in its canonical, fully parenthesised form.
pub fn ast_listing(source: &str) -> (String, Vec<Diagnostic>) {
    let output = tern_parse::parse_source(source);
    let diagnostics = output
        .lex_errors
        .iter()
        .map(LexError::to_diagnostic)
        .chain(output.errors.iter().map(ParseError::to_diagnostic))
        .collect();
    (output.program.to_string(), diagnostics)
}

pub fn lex_file(path: &Path, color: ColorMode) -> Result<(), CliError> {
    let source = read_file(path)?;
    let (listing, diagnostics) = token_listing(&source);
    print!("{listing}");
    finish(&source, &diagnostics, color)
}

pub fn parse_file(path: &Path, color: ColorMode) -> Result<(), CliError> {
    let source = read_file(path)?;
    let (listing, diagnostics) = ast_listing(&source);
    if !listing.is_empty() {
        println!("{listing}");
    }
    finish(&source, &diagnostics, color)
}

fn finish(source: &str, diagnostics: &[Diagnostic], color: ColorMode) -> Result<(), CliError> {
    if diagnostics.is_empty() {
        Ok(())
    } else {
        Err(report(source, diagnostics, color))
    }
}
