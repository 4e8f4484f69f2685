//! Source text through every stage.
//!
//! Each stage keeps its own error list. The pipeline stops at the first
//! stage that reports anything and returns all of that stage's diagnostics,
//! so a run never mixes, say, parse errors with resolve errors caused by
//! them.

use tern_diagnostic::Diagnostic;
use tern_eval::{Interpreter, Value};
use tern_ir::Program;
use tern_lexer::LexError;
use tern_parse::ParseError;
use tern_resolve::ResolveError;

/// Lex, parse and resolve `source` into a program ready to evaluate.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn compile_source(source: &str) -> Result<Program, Vec<Diagnostic>> {
    let mut output = tern_parse::parse_source(source);
    if !output.lex_errors.is_empty() {
        return Err(output.lex_errors.iter().map(LexError::to_diagnostic).collect());
    }
    if !output.errors.is_empty() {
        return Err(output.errors.iter().map(ParseError::to_diagnostic).collect());
    }

    let errors = tern_resolve::resolve(&mut output.program);
    if !errors.is_empty() {
        return Err(errors.iter().map(ResolveError::to_diagnostic).collect());
    }
    Ok(output.program)
}

/// Everything that stops `source` from running, short of runtime errors.
pub fn check_source(source: &str) -> Vec<Diagnostic> {
    compile_source(source).err().unwrap_or_default()
}

/// Compile `source` and evaluate it on `interpreter`.
///
/// A runtime error comes back as a single diagnostic. Output printed before
/// the error has already gone to the interpreter's print handler.
pub fn run_source(source: &str, interpreter: &mut Interpreter) -> Result<Value, Vec<Diagnostic>> {
    let program = compile_source(source)?;
    interpreter
        .eval_program(&program)
        .map_err(|err| vec![err.to_diagnostic()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tern_diagnostic::ErrorCode;
    use tern_eval::buffer_handler;

    fn codes(diagnostics: &[Diagnostic]) -> Vec<ErrorCode> {
        diagnostics.iter().map(|d| d.code).collect()
    }

    #[test]
    fn lexer_errors_stop_the_pipeline() {
        // The stray `@` would also confuse the parser; only the lexer reports.
        assert_eq!(codes(&check_source("let x = @")), vec![ErrorCode::E0001]);
    }

    #[test]
    fn parse_errors_are_all_reported() {
        let diagnostics = check_source("let = 1\nlet y = )");
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics.iter().all(|d| d.code.is_parser_error()));
    }

    #[test]
    fn resolver_errors_after_clean_parse() {
        let diagnostics = check_source("let f = fn() {\n    let a = 1\n    let a = 2\n}");
        assert_eq!(codes(&diagnostics), vec![ErrorCode::E2001]);
    }

    #[test]
    fn clean_source_checks_empty() {
        assert!(check_source("let x = 1\nprint x").is_empty());
    }

    #[test]
    fn runtime_error_becomes_one_diagnostic() {
        let mut interpreter = Interpreter::new().with_print_handler(buffer_handler());
        let Err(diagnostics) = run_source("print 1\n1 + nil", &mut interpreter) else {
            panic!("expected a runtime error");
        };
        assert_eq!(codes(&diagnostics), vec![ErrorCode::E6002]);
        assert_eq!(interpreter.print_handler().get_output(), "1\n");
    }
}
