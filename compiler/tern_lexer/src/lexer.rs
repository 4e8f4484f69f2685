//! Lazy tokenizer with automatic statement termination.

use logos::Logos;
use tern_ir::{Name, Span, Token, TokenKind};

use crate::escape::unescape_string;
use crate::lex_error::{LexError, LexErrorKind};
use crate::raw_token::RawToken;

/// Lexeme of an implicit terminator.
const IMPLICIT_TERMINATOR: &str = "\n";

/// Produces one [`Token`] per [`next_token`](Lexer::next_token) call.
///
/// Scanning is a single forward pass. A newline becomes an implicit
/// `Semicolon` token when the previous token can end a statement (see
/// [`TokenKind::ends_statement`]); end of input follows the same rule before
/// `Eof` is produced. Once `Eof` has been returned every further call
/// returns `Eof` again.
pub struct Lexer<'src> {
    source: &'src str,
    raw: logos::Lexer<'src, RawToken>,
    /// Kind of the last token handed out.
    prev: Option<TokenKind>,
    errors: Vec<LexError>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Lexer {
            source,
            raw: RawToken::lexer(source),
            prev: None,
            errors: Vec::new(),
        }
    }

    pub fn into_errors(self) -> Vec<LexError> {
        self.errors
    }

    fn prev_ends_statement(&self) -> bool {
        self.prev.is_some_and(TokenKind::ends_statement)
    }

    fn emit(&mut self, token: Token) -> Token {
        self.prev = Some(token.kind);
        token
    }

    pub fn next_token(&mut self) -> Token {
        loop {
            let Some(result) = self.raw.next() else {
                let end = Span::from_range(self.source.len()..self.source.len());
                if self.prev_ends_statement() {
                    return self.emit(Token::new(TokenKind::Semicolon, IMPLICIT_TERMINATOR, end));
                }
                return self.emit(Token::new(TokenKind::Eof, "", end));
            };

            let span = Span::from_range(self.raw.span());
            let slice = self.raw.slice();

            let raw = match result {
                Ok(raw) => raw,
                Err(()) => {
                    let ch = slice.chars().next().unwrap_or('\u{fffd}');
                    self.errors
                        .push(LexError::new(LexErrorKind::UnexpectedCharacter { ch }, span));
                    return self.emit(Token::new(TokenKind::Illegal, slice, span));
                }
            };

            match raw {
                RawToken::LineComment => {}
                RawToken::Newline => {
                    if self.prev_ends_statement() {
                        return self.emit(Token::new(
                            TokenKind::Semicolon,
                            IMPLICIT_TERMINATOR,
                            span,
                        ));
                    }
                }
                _ => {
                    let token = self.convert(raw, slice, span);
                    tracing::trace!(?token, "lexed");
                    return self.emit(token);
                }
            }
        }
    }

    fn convert(&mut self, raw: RawToken, slice: &str, span: Span) -> Token {
        let kind = match raw {
            RawToken::Ident => TokenKind::keyword(slice).unwrap_or(TokenKind::Ident),
            RawToken::Number => TokenKind::Number,
            RawToken::TrailingDot => {
                self.errors
                    .push(LexError::new(LexErrorKind::TrailingDot, span));
                return Token::new(TokenKind::Number, &slice[..slice.len() - 1], span);
            }
            RawToken::String => {
                let content = &slice[1..slice.len() - 1];
                return Token::new(TokenKind::String, self.cook_string(content, span), span);
            }
            RawToken::UnterminatedString => {
                self.errors
                    .push(LexError::new(LexErrorKind::UnterminatedString, span));
                return Token::new(TokenKind::String, self.cook_string(&slice[1..], span), span);
            }
            RawToken::EqEq => TokenKind::EqEq,
            RawToken::NotEq => TokenKind::NotEq,
            RawToken::LtEq => TokenKind::LtEq,
            RawToken::GtEq => TokenKind::GtEq,
            RawToken::Assign => TokenKind::Assign,
            RawToken::Bang => TokenKind::Bang,
            RawToken::Lt => TokenKind::Lt,
            RawToken::Gt => TokenKind::Gt,
            RawToken::Plus => TokenKind::Plus,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Star => TokenKind::Star,
            RawToken::Slash => TokenKind::Slash,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Dot => TokenKind::Dot,
            RawToken::Colon => TokenKind::Colon,
            RawToken::Semicolon => TokenKind::Semicolon,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::LBrace => TokenKind::LBrace,
            RawToken::RBrace => TokenKind::RBrace,
            RawToken::LBracket => TokenKind::LBracket,
            RawToken::RBracket => TokenKind::RBracket,
            RawToken::LineComment | RawToken::Newline => TokenKind::Illegal,
        };
        Token::new(kind, slice, span)
    }

    /// Unescape a string literal body, recording unknown escapes.
    fn cook_string(&mut self, content: &str, span: Span) -> Name {
        // Content starts one byte after the opening quote.
        let base = span.start + 1;
        let errors = &mut self.errors;
        let cooked = unescape_string(content, |offset, escape| {
            let start = base + u32::try_from(offset).unwrap_or(0);
            errors.push(LexError::new(
                LexErrorKind::UnknownEscape { escape },
                Span::new(start, start + 2),
            ));
        });
        Name::from(cooked)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields tokens up to and including the first `Eof`.
    fn next(&mut self) -> Option<Token> {
        if self.prev == Some(TokenKind::Eof) {
            return None;
        }
        Some(self.next_token())
    }
}
