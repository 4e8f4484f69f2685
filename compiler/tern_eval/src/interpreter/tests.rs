use pretty_assertions::assert_eq;
use tern_ir::Span;

use super::*;
use crate::errors::EvalErrorKind;
use crate::print_handler::buffer_handler;
use crate::tests::compile;

#[test]
fn call_stack_enforces_its_limit() {
    let span = Span::new(0, 1);
    let mut stack = CallStack::new(2);
    assert!(stack.push(span).is_ok());
    assert!(stack.push(span).is_ok());
    let Err(err) = stack.push(span) else {
        panic!("third push should overflow");
    };
    assert_eq!(err.kind, EvalErrorKind::StackOverflow);
    assert_eq!(err.span, Some(span));
    assert_eq!(stack.depth(), 2);

    stack.pop();
    stack.pop();
    stack.pop();
    assert_eq!(stack.depth(), 0);
}

#[test]
fn runaway_recursion_overflows() {
    let mut interpreter = Interpreter::new()
        .with_print_handler(buffer_handler())
        .with_max_call_depth(64);
    let program = compile("let down = fn(n) { down(n + 1) }\ndown(0)");
    let Err(err) = interpreter.eval_program(&program) else {
        panic!("recursion should hit the depth limit");
    };
    assert_eq!(err.kind, EvalErrorKind::StackOverflow);
}

#[test]
fn depth_recovers_after_an_error() {
    let mut interpreter = Interpreter::new()
        .with_print_handler(buffer_handler())
        .with_max_call_depth(8);
    let failing = compile("let boom = fn(n) { if n == 0 { nil + 1 } else { boom(n - 1) } }\nboom(5)");
    assert!(interpreter.eval_program(&failing).is_err());
    assert_eq!(interpreter.call_stack.depth(), 0);

    // All eight levels are available again.
    let deep = compile("let count = fn(n) { if n == 0 { 0 } else { 1 + count(n - 1) } }\ncount(7)");
    assert_eq!(interpreter.eval_program(&deep), Ok(Value::Number(7.0)));
}

#[test]
fn default_depth_allows_deep_recursion() {
    let mut interpreter = Interpreter::new().with_print_handler(buffer_handler());
    let program = compile("let sum = fn(n) { if n == 0 { 0 } else { n + sum(n - 1) } }\nsum(5000)");
    assert_eq!(interpreter.eval_program(&program), Ok(Value::Number(12_502_500.0)));
}

#[test]
fn print_goes_to_the_installed_handler() {
    let handler = buffer_handler();
    let mut interpreter = Interpreter::new().with_print_handler(handler.clone());
    let program = compile("print \"to buffer\"");
    assert_eq!(interpreter.eval_program(&program), Ok(Value::Nil));
    assert_eq!(interpreter.print_handler().get_output(), "to buffer\n");
    handler.clear();
    assert_eq!(interpreter.print_handler().get_output(), "");
}

#[test]
fn empty_program_is_nil() {
    let mut interpreter = Interpreter::default().with_print_handler(buffer_handler());
    assert_eq!(interpreter.eval_program(&compile("")), Ok(Value::Nil));
}
