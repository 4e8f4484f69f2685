//! Expression nodes.

use std::cell::Cell;
use std::rc::Rc;

use super::{BinaryOp, Block, LogicalOp, UnaryOp};
use crate::{Name, Span};

/// An expression together with the span of its originating token(s).
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    Ident(Ident),
    Number(f64),
    String(Name),
    Bool(bool),
    Nil,
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Logical {
        op: LogicalOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// `target = value`; the parser only accepts identifiers and index
    /// expressions as targets.
    Assign {
        target: Box<Expr>,
        value: Box<Expr>,
    },
    Grouping(Box<Expr>),
    /// Function literal. Shared so closures can hold the body without
    /// cloning the tree.
    Function(Rc<FunctionLit>),
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    List(Vec<Expr>),
    Map(Vec<(Expr, Expr)>),
    Index {
        target: Box<Expr>,
        index: Box<Expr>,
    },
    /// `object.name`, namespaced lookup into a module.
    Member {
        object: Box<Expr>,
        name: Name,
    },
}

impl ExprKind {
    /// Variant name, used in trace output and internal errors.
    pub fn name(&self) -> &'static str {
        match self {
            ExprKind::Ident(_) => "identifier",
            ExprKind::Number(_) => "number",
            ExprKind::String(_) => "string",
            ExprKind::Bool(_) => "boolean",
            ExprKind::Nil => "nil",
            ExprKind::Unary { .. } => "unary",
            ExprKind::Binary { .. } => "binary",
            ExprKind::Logical { .. } => "logical",
            ExprKind::Assign { .. } => "assignment",
            ExprKind::Grouping(_) => "grouping",
            ExprKind::Function(_) => "function",
            ExprKind::Call { .. } => "call",
            ExprKind::List(_) => "list",
            ExprKind::Map(_) => "map",
            ExprKind::Index { .. } => "index",
            ExprKind::Member { .. } => "member",
        }
    }
}

/// A reference to a named binding.
///
/// `depth` is the number of scope frames between the use site and the
/// declaring frame. It starts unresolved and is written once by the
/// resolver; an identifier left unresolved is looked up among globals and
/// builtins at run time.
#[derive(Clone, Debug, PartialEq)]
pub struct Ident {
    pub name: Name,
    pub span: Span,
    depth: Cell<Option<u32>>,
}

impl Ident {
    pub fn new(name: impl Into<Name>, span: Span) -> Self {
        Ident {
            name: name.into(),
            span,
            depth: Cell::new(None),
        }
    }

    #[inline]
    pub fn depth(&self) -> Option<u32> {
        self.depth.get()
    }

    pub fn set_depth(&self, depth: u32) {
        debug_assert!(
            self.depth.get().is_none(),
            "resolution depth of `{}` written twice",
            self.name
        );
        self.depth.set(Some(depth));
    }
}

/// `fn(params) { body }`
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionLit {
    pub params: Vec<Ident>,
    pub body: Block,
    pub span: Span,
}
