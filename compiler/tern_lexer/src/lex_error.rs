//! Lexer error types.
//!
//! The lexer never aborts: each problem is recorded as a [`LexError`] and an
//! `Illegal` token (or the best-effort token) is emitted in its place.

use tern_diagnostic::{Diagnostic, ErrorCode};
use tern_ir::Span;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    pub span: Span,
    pub kind: LexErrorKind,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// A character that starts no token.
    UnexpectedCharacter { ch: char },
    /// String literal missing its closing quote.
    UnterminatedString,
    /// `12.` with no digit after the dot.
    TrailingDot,
    /// `\q` and friends inside a string literal.
    UnknownEscape { escape: char },
}

impl LexError {
    #[cold]
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        LexError { span, kind }
    }

    pub fn error_code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnexpectedCharacter { .. } => ErrorCode::E0001,
            LexErrorKind::UnterminatedString => ErrorCode::E0002,
            LexErrorKind::TrailingDot => ErrorCode::E0003,
            LexErrorKind::UnknownEscape { .. } => ErrorCode::E0004,
        }
    }

    pub fn message(&self) -> String {
        match &self.kind {
            LexErrorKind::UnexpectedCharacter { ch } => format!("unexpected character `{ch}`"),
            LexErrorKind::UnterminatedString => "unterminated string literal".to_string(),
            LexErrorKind::TrailingDot => {
                "number literal ends with `.`; expected a digit after the decimal point"
                    .to_string()
            }
            LexErrorKind::UnknownEscape { escape } => {
                format!("unknown escape sequence `\\{escape}`")
            }
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.error_code())
            .with_message(self.message())
            .with_label(self.span, "here");
        match self.kind {
            LexErrorKind::TrailingDot => diag.with_note("write `1.0` or `1` instead of `1.`"),
            LexErrorKind::UnterminatedString => {
                diag.with_note("string literals must close on the line they start")
            }
            _ => diag,
        }
    }
}
