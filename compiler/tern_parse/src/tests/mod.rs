//! Parser tests.
//!
//! - `expressions`: precedence, associativity and every prefix/infix rule
//! - `statements`: statement forms and their stringification
//! - `errors`: diagnostics and recovery

mod expressions;
mod statements;

use crate::{parse_source, ParseOutput};

/// Parse `source` and fail the test on any diagnostic.
fn parse_ok(source: &str) -> ParseOutput {
    let output = parse_source(source);
    assert!(
        !output.has_errors(),
        "unexpected errors for {source:?}: {:?} {:?}",
        output.lex_errors,
        output.errors
    );
    output
}

/// Stringify the single expression statement in `source`.
fn expr_str(source: &str) -> String {
    let output = parse_ok(source);
    assert_eq!(output.program.stmts.len(), 1, "{source:?}");
    let text = output.program.stmts[0].to_string();
    text.strip_suffix(';').unwrap_or(&text).to_string()
}

/// Stringify the whole program in `source`.
fn program_str(source: &str) -> String {
    parse_ok(source).program.to_string()
}
