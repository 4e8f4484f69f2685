//! Statement nodes.

use super::{Expr, Ident};
use crate::{Name, Span};

#[derive(Clone, Debug, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    #[inline]
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }

    /// `let name = fn(...) { ... }`, the only statements hoisted to the top
    /// of a program.
    pub fn is_function_binding(&self) -> bool {
        matches!(
            &self.kind,
            StmtKind::Let {
                value: Expr {
                    kind: super::ExprKind::Function(_),
                    ..
                },
                ..
            }
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum StmtKind {
    Let {
        name: Ident,
        value: Expr,
    },
    Expr(Expr),
    If {
        condition: Expr,
        then_branch: Block,
        /// Either a `Block` statement or a nested `If` (`else if`).
        else_branch: Option<Box<Stmt>>,
    },
    Block(Block),
    Return(Option<Expr>),
    Each {
        binding: Option<Ident>,
        source: LoopSource,
        body: Block,
    },
    While {
        condition: Option<Expr>,
        body: Block,
    },
    Print(Vec<Expr>),
    Import {
        name: Ident,
        path: Name,
    },
}

impl StmtKind {
    pub fn name(&self) -> &'static str {
        match self {
            StmtKind::Let { .. } => "let",
            StmtKind::Expr(_) => "expression",
            StmtKind::If { .. } => "if",
            StmtKind::Block(_) => "block",
            StmtKind::Return(_) => "return",
            StmtKind::Each { .. } => "each",
            StmtKind::While { .. } => "while",
            StmtKind::Print(_) => "print",
            StmtKind::Import { .. } => "import",
        }
    }
}

/// What an `each` loop draws its elements from.
#[derive(Clone, Debug, PartialEq)]
pub enum LoopSource {
    Iterable(Expr),
    /// `each { ... }` with no iterable: runs until a `return` or an error.
    Forever,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    pub stmts: Vec<Stmt>,
    pub span: Span,
}

impl Block {
    pub fn new(stmts: Vec<Stmt>, span: Span) -> Self {
        Block { stmts, span }
    }
}

/// A parsed source file or REPL line.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Program {
    pub stmts: Vec<Stmt>,
}
