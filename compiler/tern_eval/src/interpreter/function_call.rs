//! Calling builtins and closures.

use tern_ir::Span;

use super::Interpreter;
use crate::errors::{not_callable, wrong_argument_count, ControlFlow, EvalResult};
use crate::value::{Closure, Value};

impl Interpreter {
    /// Call `callee` with already-evaluated `args`. Errors without a span of
    /// their own are reported at `call_span`.
    pub(super) fn call_value(&mut self, callee: &Value, args: &[Value], call_span: Span) -> EvalResult {
        match callee {
            Value::Builtin(builtin) => {
                tracing::trace!(name = builtin.name, args = args.len(), "call builtin");
                (builtin.func)(args, &self.print_handler).map_err(|err| err.or_span(call_span))
            }
            Value::Function(closure) => self.call_closure(closure, args, call_span),
            other => Err(not_callable(other).with_span(call_span)),
        }
    }

    /// Bind parameters in a fresh child of the closure's defining frame and
    /// run the body there. The result is the `return` payload, or the value
    /// of the last statement if the body runs off the end.
    fn call_closure(&mut self, closure: &Closure, args: &[Value], call_span: Span) -> EvalResult {
        let params = &closure.func.params;
        if params.len() != args.len() {
            return Err(wrong_argument_count(
                &closure.signature(),
                &params.len().to_string(),
                args.len(),
            )
            .with_span(call_span));
        }

        self.call_stack.push(call_span)?;
        let frame = closure.env.child();
        let mut result = Ok(Value::Nil);
        for (param, arg) in params.iter().zip(args) {
            if let Err(err) = frame.declare(param.name.clone(), arg.clone()) {
                result = Err(ControlFlow::Error(err.with_span(param.span)));
                break;
            }
        }
        if result.is_ok() {
            result = self.exec_stmts(&closure.func.body.stmts, &frame);
        }
        self.call_stack.pop();

        match result {
            Ok(value) | Err(ControlFlow::Return(value)) => Ok(value),
            Err(ControlFlow::Error(err)) => Err(err.or_span(call_span)),
        }
    }
}
