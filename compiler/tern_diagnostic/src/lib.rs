//! Diagnostics for the Tern interpreter.
//!
//! The lexer, parser and resolver each collect their own errors and convert
//! them into [`Diagnostic`]s. Runtime errors convert too, so the CLI reports
//! every stage the same way: an [`ErrorCode`], a message, and a primary span
//! rendered as `[line:column]`.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
pub use span_utils::LineOffsetTable;
