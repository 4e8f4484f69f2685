//! Tokenizer for Tern.
//!
//! Scanning is done by a logos-derived [`RawToken`](raw_token::RawToken)
//! automaton; [`Lexer`] wraps it to cook string literals, resolve keywords
//! and insert implicit statement terminators at line ends.
//!
//! The lexer never fails. Problems are collected as [`LexError`]s next to a
//! best-effort token stream that always ends in exactly one `Eof`.

mod escape;
mod lex_error;
mod lexer;
mod raw_token;

pub use lex_error::{LexError, LexErrorKind};
pub use lexer::Lexer;

use tern_ir::{Token, TokenKind};

/// Result of tokenizing a whole source text.
#[derive(Clone, Debug, Default)]
pub struct LexOutput {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Tokenize `source` eagerly, up to and including `Eof`.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn tokenize(source: &str) -> LexOutput {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::with_capacity(source.len() / 3 + 1);
    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            break;
        }
    }
    let errors = lexer.into_errors();
    tracing::debug!(tokens = tokens.len(), errors = errors.len(), "tokenized");
    LexOutput { tokens, errors }
}
