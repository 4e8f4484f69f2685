//! Whole-program tests: source text in, printed output and result out.

mod control_tests;

use tern_ir::Program;

use crate::{buffer_handler, EvalError, EvalErrorKind, Interpreter, Value};

/// Parse and resolve `source`, failing the test on any diagnostic.
pub(crate) fn compile(source: &str) -> Program {
    let mut output = tern_parse::parse_source(source);
    assert!(
        !output.has_errors(),
        "lex errors: {:?}\nparse errors: {:?}",
        output.lex_errors,
        output.errors
    );
    let errors = tern_resolve::resolve(&mut output.program);
    assert!(errors.is_empty(), "resolve errors: {errors:?}");
    output.program
}

/// Run a compiled program on a fresh interpreter that captures output.
pub(crate) fn run_program(program: &Program) -> (Result<Value, EvalError>, String) {
    let handler = buffer_handler();
    let mut interpreter = Interpreter::new().with_print_handler(handler.clone());
    let result = interpreter.eval_program(program);
    (result, handler.get_output())
}

pub(crate) fn run(source: &str) -> (Result<Value, EvalError>, String) {
    run_program(&compile(source))
}

/// Everything `source` prints; the program must succeed.
pub(crate) fn output_of(source: &str) -> String {
    match run(source) {
        (Ok(_), output) => output,
        (Err(err), output) => panic!("runtime error: {err}\noutput so far:\n{output}"),
    }
}

/// The value of the program's last statement; the program must succeed.
pub(crate) fn value_of(source: &str) -> Value {
    match run(source).0 {
        Ok(value) => value,
        Err(err) => panic!("runtime error: {err}"),
    }
}

/// The runtime error `source` fails with.
pub(crate) fn error_of(source: &str) -> EvalError {
    match run(source).0 {
        Ok(value) => panic!("expected a runtime error, got {value:?}"),
        Err(err) => err,
    }
}

pub(crate) fn error_kind(source: &str) -> EvalErrorKind {
    error_of(source).kind
}
