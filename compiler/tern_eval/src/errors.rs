//! Runtime errors and non-local control flow.
//!
//! `EvalErrorKind` classifies every runtime failure; its `Display` is the
//! fixed headline of the message and decides the `E6xxx` code. Factory
//! functions fill in the detail text, so call sites never format messages
//! themselves.

use std::fmt;

use tern_diagnostic::{Diagnostic, ErrorCode};
use tern_ir::{BinaryOp, Span, UnaryOp};

use crate::value::Value;

/// Result of evaluating an expression.
pub type EvalResult = Result<Value, EvalError>;

/// Result of executing a statement: a value, or something unwinding.
pub type ExecResult = Result<Value, ControlFlow>;

/// Signals that unwind through statement execution.
///
/// `Return` stops at the nearest call boundary. `Error` stops nowhere and
/// reaches the caller of `eval_program`.
#[derive(Clone, Debug)]
pub enum ControlFlow {
    Return(Value),
    Error(EvalError),
}

impl From<EvalError> for ControlFlow {
    #[inline]
    fn from(err: EvalError) -> Self {
        ControlFlow::Error(err)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EvalErrorKind {
    TypeMismatch,
    IllegalOperation,
    UseOfUndeclared,
    IllegalIndexType,
    IndexOutOfBounds,
    NonIntegralIndex,
    IllegalAssignment,
    WrongArgumentCount,
    IllegalReturn,
    IllegalDeclaration,
    NotIterable,
    NotCallable,
    StackOverflow,
}

impl EvalErrorKind {
    pub fn error_code(self) -> ErrorCode {
        match self {
            Self::TypeMismatch => ErrorCode::E6001,
            Self::IllegalOperation => ErrorCode::E6002,
            Self::UseOfUndeclared => ErrorCode::E6003,
            Self::IllegalIndexType => ErrorCode::E6004,
            Self::IndexOutOfBounds => ErrorCode::E6005,
            Self::NonIntegralIndex => ErrorCode::E6006,
            Self::IllegalAssignment => ErrorCode::E6007,
            Self::WrongArgumentCount => ErrorCode::E6008,
            Self::IllegalReturn => ErrorCode::E6009,
            Self::IllegalDeclaration => ErrorCode::E6010,
            Self::NotIterable => ErrorCode::E6011,
            Self::NotCallable => ErrorCode::E6012,
            Self::StackOverflow => ErrorCode::E6013,
        }
    }
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::TypeMismatch => "unexpected type",
            Self::IllegalOperation => "illegal operation",
            Self::UseOfUndeclared => "use of undeclared variable",
            Self::IllegalIndexType => "illegal index type",
            Self::IndexOutOfBounds => "index out of bounds",
            Self::NonIntegralIndex => "can't use decimal as index",
            Self::IllegalAssignment => "illegal assignment",
            Self::WrongArgumentCount => "wrong number of arguments",
            Self::IllegalReturn => "illegal return in global scope",
            Self::IllegalDeclaration => "illegal declaration",
            Self::NotIterable => "value is not iterable",
            Self::NotCallable => "value is not callable",
            Self::StackOverflow => "maximum call depth exceeded",
        })
    }
}

/// A classified runtime error.
///
/// `span` is filled by the most specific construct that knows it: the
/// expression that failed if it sets one, otherwise the nearest enclosing
/// call site (see [`EvalError::or_span`]).
#[derive(Clone, Debug, PartialEq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Detail after the headline; may be empty.
    pub message: String,
    pub span: Option<Span>,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind, message: impl Into<String>) -> Self {
        EvalError {
            kind,
            message: message.into(),
            span: None,
        }
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Attach `span` unless a more specific one is already set.
    #[must_use]
    pub fn or_span(mut self, span: Span) -> Self {
        self.span.get_or_insert(span);
        self
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.kind.error_code()).with_message(self.to_string());
        match self.span {
            Some(span) => diag.with_label(span, self.kind.to_string()),
            None => diag,
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}: {}", self.kind, self.message)
        }
    }
}

impl std::error::Error for EvalError {}

// Factories

#[cold]
pub fn type_mismatch(expected: &str, got: &Value) -> EvalError {
    EvalError::new(
        EvalErrorKind::TypeMismatch,
        format!("expected {expected}, got {}", got.type_name()),
    )
}

#[cold]
pub fn illegal_binary_op(left: &Value, op: BinaryOp, right: &Value) -> EvalError {
    EvalError::new(
        EvalErrorKind::IllegalOperation,
        format!("{} {op} {}", left.repr(), right.repr()),
    )
}

#[cold]
pub fn illegal_unary_op(op: UnaryOp, operand: &Value) -> EvalError {
    EvalError::new(
        EvalErrorKind::IllegalOperation,
        format!("{op}{}", operand.repr()),
    )
}

#[cold]
pub fn undeclared(name: &str) -> EvalError {
    EvalError::new(EvalErrorKind::UseOfUndeclared, format!("`{name}`"))
}

#[cold]
pub fn undeclared_member(module: &str, member: &str) -> EvalError {
    EvalError::new(
        EvalErrorKind::UseOfUndeclared,
        format!("module `{module}` has no member `{member}`"),
    )
}

#[cold]
pub fn unknown_module(path: &str) -> EvalError {
    EvalError::new(
        EvalErrorKind::UseOfUndeclared,
        format!("no module found at \"{path}\""),
    )
}

#[cold]
pub fn illegal_index_type(target: &Value, index: &Value) -> EvalError {
    EvalError::new(
        EvalErrorKind::IllegalIndexType,
        format!("cannot index {} with {}", target.type_name(), index.type_name()),
    )
}

#[cold]
pub fn index_out_of_bounds(index: f64, len: usize) -> EvalError {
    EvalError::new(
        EvalErrorKind::IndexOutOfBounds,
        format!("index {index} with length {len}"),
    )
}

#[cold]
pub fn non_integral_index(index: f64) -> EvalError {
    EvalError::new(EvalErrorKind::NonIntegralIndex, format!("{index}"))
}

#[cold]
pub fn unhashable_key(key: &Value) -> EvalError {
    EvalError::new(
        EvalErrorKind::IllegalIndexType,
        format!("{} cannot be used as a map key", key.type_name()),
    )
}

/// `what` names the target: a value type or an expression kind.
#[cold]
pub fn illegal_assignment(what: &str) -> EvalError {
    EvalError::new(
        EvalErrorKind::IllegalAssignment,
        format!("cannot assign to {what}"),
    )
}

#[cold]
pub fn wrong_argument_count(name: &str, expected: &str, got: usize) -> EvalError {
    EvalError::new(
        EvalErrorKind::WrongArgumentCount,
        format!("`{name}` expects {expected}, got {got}"),
    )
}

#[cold]
pub fn illegal_return() -> EvalError {
    EvalError::new(EvalErrorKind::IllegalReturn, "")
}

#[cold]
pub fn illegal_declaration(name: &str) -> EvalError {
    EvalError::new(
        EvalErrorKind::IllegalDeclaration,
        format!("`{name}` is already declared in this scope"),
    )
}

#[cold]
pub fn not_iterable(value: &Value) -> EvalError {
    EvalError::new(EvalErrorKind::NotIterable, value.type_name())
}

#[cold]
pub fn not_callable(value: &Value) -> EvalError {
    EvalError::new(EvalErrorKind::NotCallable, value.type_name())
}

#[cold]
pub fn stack_overflow(limit: usize) -> EvalError {
    EvalError::new(EvalErrorKind::StackOverflow, format!("limit is {limit}"))
}
