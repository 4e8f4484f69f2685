//! Token cursor for navigating the token stream.

use crate::ParseError;
use tern_ir::{Ident, Span, Token, TokenKind};

/// Position in a token slice that always ends in `Eof`.
///
/// The cursor never moves past the final `Eof`, so `current()` is always
/// valid once constructed.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        debug_assert!(
            tokens.last().is_some_and(|t| t.kind == TokenKind::Eof),
            "token stream must end in Eof"
        );
        Cursor { tokens, pos: 0 }
    }

    /// Current index, used to detect whether a parse step made progress.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn current(&self) -> &'a Token {
        &self.tokens[self.pos]
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    pub fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span
        } else {
            Span::DUMMY
        }
    }

    /// Kind of the token after the current one (`Eof` at the end).
    pub fn peek_next_kind(&self) -> TokenKind {
        self.tokens
            .get(self.pos + 1)
            .map_or(TokenKind::Eof, |t| t.kind)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Consume the current token and return it. Stays put on `Eof`.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it has the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skip terminators inserted by the lexer at line ends.
    ///
    /// Used inside bracketed lists, where a line break after an item must
    /// not end anything.
    pub fn skip_implicit_terminators(&mut self) {
        while self.current().is_implicit_terminator() {
            self.advance();
        }
    }

    pub fn expect(&mut self, kind: TokenKind) -> Result<&'a Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::expected(kind.display_name(), self.current()))
        }
    }

    pub fn expect_ident(&mut self) -> Result<Ident, ParseError> {
        let token = self.expect(TokenKind::Ident)?;
        Ok(Ident::new(token.lexeme.clone(), token.span))
    }

    /// Name after `.`: an identifier, or a reserved word used as a member
    /// name (`fmt.print`).
    pub fn expect_member_name(&mut self) -> Result<Ident, ParseError> {
        let token = self.current();
        if token.kind != TokenKind::Ident && TokenKind::keyword(&token.lexeme).is_some() {
            let token = self.advance();
            return Ok(Ident::new(token.lexeme.clone(), token.span));
        }
        self.expect_ident()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tern_lexer::tokenize;

    #[test]
    fn advance_stops_at_eof() {
        let tokens = tokenize("a").tokens;
        let mut cursor = Cursor::new(&tokens);
        assert_eq!(cursor.advance().kind, TokenKind::Ident);
        assert_eq!(cursor.advance().kind, TokenKind::Semicolon);
        assert_eq!(cursor.advance().kind, TokenKind::Eof);
        assert_eq!(cursor.advance().kind, TokenKind::Eof);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn peek_and_eat() {
        let tokens = tokenize("x: 1").tokens;
        let mut cursor = Cursor::new(&tokens);
        assert_eq!(cursor.peek_next_kind(), TokenKind::Colon);
        assert!(!cursor.eat(TokenKind::Colon));
        assert!(cursor.eat(TokenKind::Ident));
        assert!(cursor.eat(TokenKind::Colon));
        assert_eq!(cursor.previous_span(), Span::new(1, 2));
    }

    #[test]
    fn skip_implicit_terminators_leaves_explicit_ones() {
        let tokens = tokenize("a\n;").tokens;
        let mut cursor = Cursor::new(&tokens);
        cursor.advance();
        cursor.skip_implicit_terminators();
        assert!(cursor.check(TokenKind::Semicolon));
        assert!(!cursor.current().is_implicit_terminator());
    }

    #[test]
    fn expect_reports_what_was_found() {
        let tokens = tokenize("let").tokens;
        let mut cursor = Cursor::new(&tokens);
        let err = cursor.expect(TokenKind::Ident).err();
        assert_eq!(
            err.map(|e| e.message),
            Some("expected identifier, found `let`".to_string())
        );
    }
}
