//! Tern driver.
//!
//! Runs source text through the lexer, parser, resolver and evaluator, and
//! reports whatever goes wrong as [`Diagnostic`](tern_diagnostic::Diagnostic)s.
//! The `tern` binary is a thin argument parser over [`commands`]; the
//! [`repl`] keeps one interpreter alive across lines.

pub mod commands;
mod error;
mod pipeline;
pub mod repl;
pub mod tracing_setup;

pub use error::CliError;
pub use pipeline::{check_source, compile_source, run_source};
