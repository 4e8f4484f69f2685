//! Tern Eval - tree-walking evaluator and runtime value model.
//!
//! # Architecture
//!
//! - [`Value`]: the closed set of runtime values. Lists, maps and iterators
//!   are shared handles; everything else is a plain value.
//! - [`Environment`]: a chain of scope frames from the innermost scope out to
//!   the global frame.
//! - [`Interpreter`]: executes a resolved [`tern_ir::Program`], using the
//!   resolution depth stored on each identifier to find its frame.
//! - [`errors`]: classified runtime errors, plus [`ControlFlow`] for
//!   unwinding a `return` through nested statements.
//! - [`builtins`] and [`modules`]: native functions, either global or behind
//!   `import`.
//!
//! Output from `print` goes through a [`PrintHandlerImpl`], so tests can
//! capture it.

pub mod builtins;
pub mod environment;
pub mod errors;
mod interpreter;
pub mod modules;
mod operators;
mod print_handler;
pub mod value;

pub use environment::{Environment, LocalScope, Scope};
pub use errors::{ControlFlow, EvalError, EvalErrorKind, EvalResult, ExecResult};
pub use interpreter::{CallStack, Interpreter, DEFAULT_MAX_CALL_DEPTH};
pub use operators::{evaluate_binary, evaluate_unary};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use value::{HashKey, IteratorValue, MapValue, Value};

#[cfg(test)]
mod tests;
