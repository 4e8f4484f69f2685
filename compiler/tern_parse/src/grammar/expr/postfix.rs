//! Postfix infix rules: call, index and member access.

use crate::{ErrorContext, ParseError, Parser};
use tern_ir::{Expr, ExprKind, TokenKind};

impl Parser<'_> {
    /// `callee ( args )`
    pub(super) fn parse_call(&mut self, callee: Expr) -> Result<Expr, ParseError> {
        self.in_error_context(ErrorContext::CallArguments, |p| {
            p.advance();
            let args = p.comma_series(TokenKind::RParen, Self::parse_expr)?;
            let span = callee.span.merge(p.previous_span());
            Ok(Expr::new(
                ExprKind::Call {
                    callee: Box::new(callee),
                    args,
                },
                span,
            ))
        })
    }

    /// `target [ index ]`
    pub(super) fn parse_index(&mut self, target: Expr) -> Result<Expr, ParseError> {
        self.in_error_context(ErrorContext::IndexExpression, |p| {
            p.advance();
            let index = p.parse_expr()?;
            p.expect(TokenKind::RBracket)?;
            let span = target.span.merge(p.previous_span());
            Ok(Expr::new(
                ExprKind::Index {
                    target: Box::new(target),
                    index: Box::new(index),
                },
                span,
            ))
        })
    }

    /// `object . name`
    pub(super) fn parse_member(&mut self, object: Expr) -> Result<Expr, ParseError> {
        self.in_error_context(ErrorContext::MemberAccess, |p| {
            p.advance();
            let name = p.cursor.expect_member_name()?;
            let span = object.span.merge(name.span);
            Ok(Expr::new(
                ExprKind::Member {
                    object: Box::new(object),
                    name: name.name,
                },
                span,
            ))
        })
    }
}
