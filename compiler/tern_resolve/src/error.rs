//! Resolver diagnostics.

use tern_diagnostic::{Diagnostic, ErrorCode};
use tern_ir::{Name, Span};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolveError {
    pub kind: ResolveErrorKind,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolveErrorKind {
    /// Second `let` (or parameter) of the same name in one local scope.
    DuplicateDeclaration { name: Name, first: Span },
    /// `let x = ... x ...` reading the binding being initialized.
    SelfReference { name: Name },
    ReturnOutsideFunction,
    ImportNotGlobal { name: Name },
}

impl ResolveError {
    #[cold]
    pub fn new(kind: ResolveErrorKind, span: Span) -> Self {
        ResolveError { kind, span }
    }

    pub fn error_code(&self) -> ErrorCode {
        match self.kind {
            ResolveErrorKind::DuplicateDeclaration { .. } => ErrorCode::E2001,
            ResolveErrorKind::SelfReference { .. } => ErrorCode::E2002,
            ResolveErrorKind::ReturnOutsideFunction => ErrorCode::E2003,
            ResolveErrorKind::ImportNotGlobal { .. } => ErrorCode::E2004,
        }
    }

    pub fn message(&self) -> String {
        match &self.kind {
            ResolveErrorKind::DuplicateDeclaration { name, .. } => {
                format!("`{name}` is already declared in this scope")
            }
            ResolveErrorKind::SelfReference { name } => {
                format!("can't read `{name}` in its own initializer")
            }
            ResolveErrorKind::ReturnOutsideFunction => {
                "can't return outside a function body".to_string()
            }
            ResolveErrorKind::ImportNotGlobal { name } => {
                format!("`import {name}` is only allowed at the top level")
            }
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.error_code())
            .with_message(self.message())
            .with_label(self.span, "here");
        match self.kind {
            ResolveErrorKind::DuplicateDeclaration { first, .. } => diag
                .with_secondary_label(first, "first declared here")
                .with_note("use assignment (`name = value`) to change an existing binding"),
            ResolveErrorKind::SelfReference { .. } => {
                diag.with_note("only function literals may refer to the name they are bound to")
            }
            _ => diag,
        }
    }
}
