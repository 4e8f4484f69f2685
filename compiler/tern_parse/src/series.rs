//! Comma-separated lists.
//!
//! One helper serves call arguments, parameter lists, list literals and map
//! literals. Line breaks inside the delimiters are ignored and a trailing
//! comma before the closing delimiter is accepted.

use crate::{ParseError, Parser};
use tern_ir::TokenKind;

impl Parser<'_> {
    /// Parse `item (, item)* ,?` followed by `close`.
    ///
    /// The opening delimiter must already be consumed; `close` is consumed
    /// on success.
    pub(crate) fn comma_series<T>(
        &mut self,
        close: TokenKind,
        mut item: impl FnMut(&mut Self) -> Result<T, ParseError>,
    ) -> Result<Vec<T>, ParseError> {
        let mut items = Vec::new();
        loop {
            self.cursor.skip_implicit_terminators();
            if self.check(close) {
                break;
            }
            items.push(item(self)?);
            self.cursor.skip_implicit_terminators();
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        if !self.check(close) {
            let expected = format!("`,` or {}", close.display_name());
            return Err(ParseError::expected(&expected, self.current()));
        }
        self.advance();
        Ok(items)
    }
}
