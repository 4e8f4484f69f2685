//! Pratt parser for Tern.
//!
//! Expressions use precedence climbing: every token that can start an
//! expression has a prefix rule, every token that can continue one has an
//! infix rule and a binding power. Statements are recursive descent,
//! dispatched on the leading keyword.
//!
//! The parser never aborts. A failed statement records a [`ParseError`] and
//! the parser skips to the next statement boundary, so one run reports as
//! many independent problems as possible. The tree produced past the first
//! error is not meant to be evaluated.

mod cursor;
mod error;
mod grammar;
mod recovery;
mod series;

pub use cursor::Cursor;
pub use error::{ErrorContext, ParseError};
pub use recovery::{synchronize, TokenSet, STMT_BOUNDARY};

use tern_ir::{Program, Span, Stmt, Token, TokenKind};
use tern_lexer::LexError;

/// Result of parsing.
#[derive(Clone, Debug, Default)]
pub struct ParseOutput {
    pub program: Program,
    pub errors: Vec<ParseError>,
    /// Tokenizer diagnostics, filled only by [`parse_source`].
    pub lex_errors: Vec<LexError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty() || !self.lex_errors.is_empty()
    }
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    /// `tokens` must end in `Eof`; [`parse`] takes care of that.
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            errors: Vec::new(),
        }
    }

    // Cursor delegation.

    #[inline]
    fn current(&self) -> &'a Token {
        self.cursor.current()
    }

    #[inline]
    fn current_kind(&self) -> TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn previous_span(&self) -> Span {
        self.cursor.previous_span()
    }

    #[inline]
    fn check(&self, kind: TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    #[inline]
    fn advance(&mut self) -> &'a Token {
        self.cursor.advance()
    }

    #[inline]
    fn eat(&mut self, kind: TokenKind) -> bool {
        self.cursor.eat(kind)
    }

    #[inline]
    fn expect(&mut self, kind: TokenKind) -> Result<&'a Token, ParseError> {
        self.cursor.expect(kind)
    }

    /// Run `f`, tagging any error it returns with `context`.
    fn in_error_context<T>(
        &mut self,
        context: ErrorContext,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        f(self).map_err(|e| e.with_context(context))
    }

    /// Parse statements until `Eof`.
    pub fn parse_program(mut self) -> ParseOutput {
        let mut stmts = Vec::new();
        while !self.is_at_end() {
            if let Some(stmt) = self.parse_stmt_recovering() {
                stmts.push(stmt);
            }
        }
        ParseOutput {
            program: Program { stmts },
            errors: self.errors,
            lex_errors: Vec::new(),
        }
    }

    /// Parse one statement, or record the error and skip past it.
    ///
    /// Always consumes at least one token so callers looping on this make
    /// progress.
    fn parse_stmt_recovering(&mut self) -> Option<Stmt> {
        // Stray terminators are empty statements.
        if self.eat(TokenKind::Semicolon) {
            return None;
        }
        let start = self.cursor.position();
        match self.parse_stmt() {
            Ok(stmt) => Some(stmt),
            Err(error) => {
                tracing::debug!(code = %error.code, message = %error.message, "parse error");
                self.errors.push(error);
                synchronize(&mut self.cursor);
                if self.cursor.position() == start {
                    self.advance();
                }
                None
            }
        }
    }
}

/// Parse a token stream into a program.
///
/// A missing trailing `Eof` is supplied.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse(tokens: &[Token]) -> ParseOutput {
    if tokens.last().is_some_and(|t| t.kind == TokenKind::Eof) {
        return Parser::new(tokens).parse_program();
    }
    let end = tokens.last().map_or(Span::DUMMY, |t| Span::point(t.span.end));
    let mut owned = tokens.to_vec();
    owned.push(Token::new(TokenKind::Eof, "", end));
    Parser::new(&owned).parse_program()
}

/// Tokenize and parse `source`, keeping lexer and parser errors apart.
pub fn parse_source(source: &str) -> ParseOutput {
    let lexed = tern_lexer::tokenize(source);
    let mut output = parse(&lexed.tokens);
    output.lex_errors = lexed.errors;
    output
}

#[cfg(test)]
mod tests;
