//! Tree-walking interpreter.
//!
//! The interpreter owns the global frame, so a REPL can feed it one program
//! per line and keep every binding. Execution threads the active frame
//! through as an [`Environment`] argument; frames created along the way are
//! dropped when control leaves their construct unless a closure kept them.
//!
//! Runtime frames line up one-to-one with the resolver's scopes:
//! - a block gets a frame
//! - a call gets one frame holding the parameters, and the body's
//!   statements run directly in it
//! - every loop iteration gets a frame (holding the `each` binding), and the
//!   body block gets its own frame beneath it

mod call_stack;
mod exec;
mod expr;
mod function_call;
mod index;

use tern_ir::Program;

use crate::environment::Environment;
use crate::errors::{ControlFlow, EvalResult};
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::value::Value;

pub use call_stack::{CallStack, DEFAULT_MAX_CALL_DEPTH};

pub struct Interpreter {
    globals: Environment,
    print_handler: SharedPrintHandler,
    call_stack: CallStack,
}

impl Interpreter {
    /// An interpreter printing to stdout.
    pub fn new() -> Self {
        Interpreter {
            globals: Environment::global(),
            print_handler: stdout_handler(),
            call_stack: CallStack::new(DEFAULT_MAX_CALL_DEPTH),
        }
    }

    #[must_use]
    pub fn with_print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = handler;
        self
    }

    #[must_use]
    pub fn with_max_call_depth(mut self, max_depth: usize) -> Self {
        self.call_stack = CallStack::new(max_depth);
        self
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// The global frame. Bindings made by earlier programs stay visible.
    pub fn globals(&self) -> &Environment {
        &self.globals
    }

    /// Run a resolved program in the global frame.
    ///
    /// Returns the value of the last statement; expression statements
    /// produce their value, everything else produces nil.
    #[tracing::instrument(level = "debug", skip_all, fields(stmts = program.stmts.len()))]
    pub fn eval_program(&mut self, program: &Program) -> EvalResult {
        let globals = self.globals.clone();
        let mut last = Value::Nil;
        for stmt in &program.stmts {
            match self.exec_stmt(stmt, &globals) {
                Ok(value) => last = value,
                Err(ControlFlow::Error(err)) => {
                    tracing::debug!(%err, "runtime error");
                    return Err(err.or_span(stmt.span));
                }
                // `return` at call depth zero already fails in `exec_stmt`.
                Err(ControlFlow::Return(value)) => {
                    tracing::warn!(?value, "return escaped to the global frame");
                    return Err(crate::errors::illegal_return().with_span(stmt.span));
                }
            }
        }
        Ok(last)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
