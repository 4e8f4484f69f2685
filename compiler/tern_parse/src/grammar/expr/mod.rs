//! Expression parsing.
//!
//! - `mod.rs`: entry point (`parse_expr`) and the precedence-climbing loop
//! - `operators.rs`: binding powers and operator matching
//! - `primary.rs`: prefix rules (literals, identifiers, grouping, `fn`, `[`, `{`)
//! - `postfix.rs`: call, index and member access

mod operators;
mod postfix;
mod primary;

use crate::{ParseError, Parser};
use operators::{match_binary_op, match_logical_op, Precedence};
use tern_ir::{Expr, ExprKind, TokenKind};
use tern_stack::ensure_sufficient_stack;

impl Parser<'_> {
    /// Parse a full expression, assignment included.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_expr_bp(Precedence::Lowest)
    }

    /// Parse a prefix expression, then keep folding infix operators whose
    /// binding power exceeds `min`.
    ///
    /// Wrapped in `ensure_sufficient_stack` since nesting depth is
    /// controlled by the input.
    pub(crate) fn parse_expr_bp(&mut self, min: Precedence) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| {
            let mut left = self.parse_prefix()?;
            while let Some(prec) = Precedence::of_infix(self.current_kind()) {
                if prec <= min {
                    break;
                }
                left = self.parse_infix(left, prec)?;
            }
            Ok(left)
        })
    }

    /// Dispatch the infix rule for the current token.
    fn parse_infix(&mut self, left: Expr, prec: Precedence) -> Result<Expr, ParseError> {
        let kind = self.current_kind();
        if let Some(op) = match_binary_op(kind) {
            self.advance();
            let right = self.parse_expr_bp(prec)?;
            let span = left.span.merge(right.span);
            return Ok(Expr::new(
                ExprKind::Binary {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                span,
            ));
        }
        if let Some(op) = match_logical_op(kind) {
            self.advance();
            let right = self.parse_expr_bp(prec)?;
            let span = left.span.merge(right.span);
            return Ok(Expr::new(
                ExprKind::Logical {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                span,
            ));
        }
        match kind {
            TokenKind::Assign => self.parse_assign(left),
            TokenKind::LParen => self.parse_call(left),
            TokenKind::LBracket => self.parse_index(left),
            TokenKind::Dot => self.parse_member(left),
            _ => Err(ParseError::no_prefix_rule(self.current())),
        }
    }

    /// `target = value`, right-associative.
    fn parse_assign(&mut self, target: Expr) -> Result<Expr, ParseError> {
        self.advance();
        // Parsing at `Lowest` rather than `Assign` makes `a = b = c`
        // group as `a = (b = c)`.
        let value = self.parse_expr_bp(Precedence::Lowest)?;
        if !matches!(target.kind, ExprKind::Ident(_) | ExprKind::Index { .. }) {
            return Err(ParseError::invalid_assign_target(
                target.kind.name(),
                target.span,
            ));
        }
        let span = target.span.merge(value.span);
        Ok(Expr::new(
            ExprKind::Assign {
                target: Box::new(target),
                value: Box::new(value),
            },
            span,
        ))
    }
}
