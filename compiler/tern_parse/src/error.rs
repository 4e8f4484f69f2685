//! Parse error types.
//!
//! Errors are plain data: an [`ErrorCode`], a message, the offending span
//! and, when known, an [`ErrorContext`] naming the construct being parsed
//! ("while parsing a map literal").

use tern_diagnostic::{Diagnostic, ErrorCode};
use tern_ir::{Span, Token, TokenKind};

/// What was being parsed when an error occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    LetStatement,
    IfStatement,
    Block,
    EachLoop,
    WhileLoop,
    PrintStatement,
    ImportStatement,
    FunctionLiteral,
    CallArguments,
    ListLiteral,
    MapLiteral,
    IndexExpression,
    Grouping,
    MemberAccess,
}

impl ErrorContext {
    /// Phrase suitable for "while parsing {description}".
    pub fn description(self) -> &'static str {
        match self {
            Self::LetStatement => "a let statement",
            Self::IfStatement => "an if statement",
            Self::Block => "a block",
            Self::EachLoop => "an each loop",
            Self::WhileLoop => "a while loop",
            Self::PrintStatement => "a print statement",
            Self::ImportStatement => "an import statement",
            Self::FunctionLiteral => "a function literal",
            Self::CallArguments => "call arguments",
            Self::ListLiteral => "a list literal",
            Self::MapLiteral => "a map literal",
            Self::IndexExpression => "an index expression",
            Self::Grouping => "a parenthesized expression",
            Self::MemberAccess => "a member access",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub code: ErrorCode,
    pub message: String,
    pub span: Span,
    /// Innermost construct being parsed, set by the first enclosing rule
    /// that sees the error.
    pub context: Option<ErrorContext>,
}

impl ParseError {
    #[cold]
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            code,
            message: message.into(),
            span,
            context: None,
        }
    }

    /// "expected X, found Y".
    #[cold]
    pub fn expected(expected: &str, found: &Token) -> Self {
        Self::new(
            ErrorCode::E1001,
            format!("expected {expected}, found {}", describe(found)),
            found.span,
        )
    }

    /// A token that cannot start an expression.
    #[cold]
    pub fn no_prefix_rule(found: &Token) -> Self {
        Self::new(
            ErrorCode::E1002,
            format!("no parse rule for {}", describe(found)),
            found.span,
        )
    }

    #[cold]
    pub fn invalid_assign_target(target: &str, span: Span) -> Self {
        Self::new(
            ErrorCode::E1003,
            format!("invalid assignment target: cannot assign to {target}"),
            span,
        )
    }

    #[cold]
    pub fn invalid_number(lexeme: &str, span: Span) -> Self {
        Self::new(
            ErrorCode::E1004,
            format!("could not parse `{lexeme}` as a number"),
            span,
        )
    }

    /// Attach `context` unless an inner rule already did.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context.get_or_insert(context);
        self
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code)
            .with_message(self.message.clone())
            .with_label(self.span, "here");
        match self.context {
            Some(context) => diag.with_note(format!("while parsing {}", context.description())),
            None => diag,
        }
    }
}

/// How a token is named in "found ..." messages.
pub(crate) fn describe(token: &Token) -> String {
    if token.is_implicit_terminator() {
        return "end of line".to_string();
    }
    match token.kind {
        TokenKind::Ident | TokenKind::Number => {
            format!("{} `{}`", token.kind.display_name(), token.lexeme)
        }
        TokenKind::String => format!("string {:?}", token.lexeme.as_str()),
        TokenKind::Illegal => format!("`{}`", token.lexeme),
        kind => kind.display_name().to_string(),
    }
}
