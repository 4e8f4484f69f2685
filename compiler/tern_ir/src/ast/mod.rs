//! Syntax tree.
//!
//! Two closed families, [`StmtKind`] and [`ExprKind`], matched exhaustively
//! by every pass. Each node carries the span of the token(s) it came from.
//!
//! `Display` renders expressions fully parenthesised (`(1 + (2 * 3))`),
//! which is what the parser tests and `tern parse` compare against.

mod display;
mod expr;
mod operators;
mod stmt;

pub use display::write_quoted;
pub use expr::{Expr, ExprKind, FunctionLit, Ident};
pub use operators::{BinaryOp, LogicalOp, UnaryOp};
pub use stmt::{Block, LoopSource, Program, Stmt, StmtKind};
