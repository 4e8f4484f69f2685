//! Tern IR - tokens, spans and the syntax tree.
//!
//! Shared by every stage of the interpreter pipeline:
//! - [`Span`] for byte-offset source locations
//! - [`Name`] for cheaply shared identifier text
//! - [`Token`] / [`TokenKind`] produced by the lexer
//! - [`ast`] nodes produced by the parser, annotated by the resolver and
//!   walked by the evaluator

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod name;
mod span;
mod token;

pub use ast::{
    BinaryOp, Block, Expr, ExprKind, FunctionLit, Ident, LogicalOp, LoopSource, Program, Stmt,
    StmtKind, UnaryOp,
};
pub use name::Name;
pub use span::Span;
pub use token::{Token, TokenKind};
