//! Token types produced by the lexer.

use crate::{Name, Span};
use std::fmt;

/// A single lexical token.
///
/// `lexeme` is the source text of the token, except for string literals
/// where it holds the unescaped contents without quotes. Implicit
/// statement terminators carry the lexeme `"\n"`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: Name,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, lexeme: impl Into<Name>, span: Span) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    /// Whether this terminator was inserted by the lexer at a newline or at
    /// end of input rather than written as `;`.
    pub fn is_implicit_terminator(&self) -> bool {
        self.kind == TokenKind::Semicolon && &*self.lexeme == "\n"
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?}) @ {}", self.kind, self.lexeme, self.span)
    }
}

/// Token classification.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Literals
    Ident,
    Number,
    String,

    // Keywords
    Let,
    Fn,
    If,
    Else,
    Return,
    Each,
    While,
    Print,
    Import,
    True,
    False,
    Nil,
    And,
    Or,

    // Operators
    Assign,
    Plus,
    Minus,
    Star,
    Slash,
    Bang,
    EqEq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,

    // Delimiters
    Comma,
    Dot,
    Colon,
    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,

    Illegal,
    Eof,
}

impl TokenKind {
    /// Look up a reserved word.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        let kind = match text {
            "let" => TokenKind::Let,
            "fn" => TokenKind::Fn,
            "if" => TokenKind::If,
            "else" => TokenKind::Else,
            "return" => TokenKind::Return,
            "each" => TokenKind::Each,
            "while" => TokenKind::While,
            "print" => TokenKind::Print,
            "import" => TokenKind::Import,
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "nil" => TokenKind::Nil,
            "and" => TokenKind::And,
            "or" => TokenKind::Or,
            _ => return None,
        };
        Some(kind)
    }

    /// Whether a newline directly after this token terminates the statement.
    pub fn ends_statement(self) -> bool {
        matches!(
            self,
            TokenKind::Ident
                | TokenKind::Number
                | TokenKind::String
                | TokenKind::RParen
                | TokenKind::RBracket
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Nil
                | TokenKind::Return
        )
    }

    /// Human-readable name for diagnostics.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Ident => "identifier",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Let => "`let`",
            TokenKind::Fn => "`fn`",
            TokenKind::If => "`if`",
            TokenKind::Else => "`else`",
            TokenKind::Return => "`return`",
            TokenKind::Each => "`each`",
            TokenKind::While => "`while`",
            TokenKind::Print => "`print`",
            TokenKind::Import => "`import`",
            TokenKind::True => "`true`",
            TokenKind::False => "`false`",
            TokenKind::Nil => "`nil`",
            TokenKind::And => "`and`",
            TokenKind::Or => "`or`",
            TokenKind::Assign => "`=`",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Star => "`*`",
            TokenKind::Slash => "`/`",
            TokenKind::Bang => "`!`",
            TokenKind::EqEq => "`==`",
            TokenKind::NotEq => "`!=`",
            TokenKind::Lt => "`<`",
            TokenKind::Gt => "`>`",
            TokenKind::LtEq => "`<=`",
            TokenKind::GtEq => "`>=`",
            TokenKind::Comma => "`,`",
            TokenKind::Dot => "`.`",
            TokenKind::Colon => "`:`",
            TokenKind::Semicolon => "`;`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::LBracket => "`[`",
            TokenKind::RBracket => "`]`",
            TokenKind::Illegal => "illegal token",
            TokenKind::Eof => "end of file",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
