//! Raw token definition.
//!
//! `RawToken` is the logos-derived scanner output. Keywords are not listed
//! here: identifiers are matched once and checked against the keyword table
//! during conversion.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r]+")]
pub(crate) enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("\n")]
    Newline,

    // Operators
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("=")]
    Assign,
    #[token("!")]
    Bang,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,

    // Delimiters
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,

    // Literals
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,

    /// Digits followed by a `.` with no fractional digits.
    #[regex(r"[0-9]+\.")]
    TrailingDot,

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    String,

    /// A string that reaches end of line or end of input before its
    /// closing quote.
    #[regex(r#""([^"\\\n]|\\.)*"#)]
    UnterminatedString,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}
