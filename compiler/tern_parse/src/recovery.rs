//! Error recovery for the parser.
//!
//! After a failed statement the parser skips ahead to a statement boundary
//! so later errors are still discovered.

use crate::cursor::Cursor;
use tern_ir::TokenKind;

/// A set of token kinds as a bitset over the `TokenKind` discriminant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TokenSet(u64);

impl TokenSet {
    pub const fn new() -> Self {
        Self(0)
    }

    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u64 << kind as u8))
    }

    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        (self.0 & (1u64 << kind as u8)) != 0
    }
}

/// Keywords that begin a statement.
pub const STMT_START: TokenSet = TokenSet::new()
    .with(TokenKind::Let)
    .with(TokenKind::If)
    .with(TokenKind::Return)
    .with(TokenKind::Each)
    .with(TokenKind::While)
    .with(TokenKind::Print)
    .with(TokenKind::Import);

/// Where statement-level recovery stops.
pub const STMT_BOUNDARY: TokenSet = STMT_START
    .with(TokenKind::Semicolon)
    .with(TokenKind::RBrace)
    .with(TokenKind::Eof);

/// Skip to the next statement boundary. A terminator at the boundary is
/// consumed; `}` and statement keywords are left for the caller.
pub fn synchronize(cursor: &mut Cursor<'_>) {
    while !STMT_BOUNDARY.contains(cursor.current_kind()) {
        cursor.advance();
    }
    cursor.eat(TokenKind::Semicolon);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tern_lexer::tokenize;

    #[test]
    fn token_kinds_fit_in_the_bitset() {
        assert!((TokenKind::Eof as u8) < 64);
    }

    #[test]
    fn boundary_membership() {
        assert!(STMT_BOUNDARY.contains(TokenKind::Let));
        assert!(STMT_BOUNDARY.contains(TokenKind::RBrace));
        assert!(STMT_BOUNDARY.contains(TokenKind::Eof));
        assert!(!STMT_BOUNDARY.contains(TokenKind::Plus));
        assert!(!STMT_START.contains(TokenKind::Semicolon));
    }

    #[test]
    fn every_statement_keyword_starts_a_statement() {
        let keywords = tokenize("let if return each while print import").tokens;
        let starts: Vec<_> = keywords
            .iter()
            .map(|t| t.kind)
            .filter(|kind| !matches!(kind, TokenKind::Semicolon | TokenKind::Eof))
            .collect();
        assert_eq!(starts.len(), 7);
        assert!(starts.iter().all(|kind| STMT_START.contains(*kind)));
        for kind in [TokenKind::Fn, TokenKind::Else, TokenKind::Ident, TokenKind::LBrace] {
            assert!(!STMT_START.contains(kind), "{kind:?}");
        }
    }

    #[test]
    fn synchronize_consumes_terminator() {
        let tokens = tokenize("1 + + 2\nprint 3").tokens;
        let mut cursor = Cursor::new(&tokens);
        cursor.advance();
        synchronize(&mut cursor);
        assert!(cursor.check(TokenKind::Print));
    }

    #[test]
    fn synchronize_stops_before_keyword_and_brace() {
        let tokens = tokenize("a b let c").tokens;
        let mut cursor = Cursor::new(&tokens);
        synchronize(&mut cursor);
        assert!(cursor.check(TokenKind::Let));

        let tokens = tokenize("a b }").tokens;
        let mut cursor = Cursor::new(&tokens);
        synchronize(&mut cursor);
        assert!(cursor.check(TokenKind::RBrace));
    }

    #[test]
    fn synchronize_reaches_eof() {
        let tokens = tokenize("a b c").tokens;
        let mut cursor = Cursor::new(&tokens);
        synchronize(&mut cursor);
        // The trailing implicit terminator is consumed on the way.
        assert!(cursor.is_at_end());
    }
}
