//! Prefix rules: everything that can start an expression.

use std::rc::Rc;

use super::operators::{match_unary_op, Precedence};
use crate::{ErrorContext, ParseError, Parser};
use tern_ir::{Expr, ExprKind, FunctionLit, Ident, TokenKind};

impl Parser<'_> {
    pub(super) fn parse_prefix(&mut self) -> Result<Expr, ParseError> {
        let token = self.current();
        let span = token.span;

        if let Some(op) = match_unary_op(token.kind) {
            self.advance();
            let operand = self.parse_expr_bp(Precedence::Prefix)?;
            let span = span.merge(operand.span);
            return Ok(Expr::new(
                ExprKind::Unary {
                    op,
                    operand: Box::new(operand),
                },
                span,
            ));
        }

        let kind = match token.kind {
            TokenKind::Ident => ExprKind::Ident(Ident::new(token.lexeme.clone(), span)),
            TokenKind::Number => match token.lexeme.parse::<f64>() {
                Ok(value) => ExprKind::Number(value),
                Err(_) => return Err(ParseError::invalid_number(&token.lexeme, span)),
            },
            TokenKind::String => ExprKind::String(token.lexeme.clone()),
            TokenKind::True => ExprKind::Bool(true),
            TokenKind::False => ExprKind::Bool(false),
            TokenKind::Nil => ExprKind::Nil,
            TokenKind::LParen => return self.parse_grouping(),
            TokenKind::Fn => return self.parse_function_literal(),
            TokenKind::LBracket => return self.parse_list_literal(),
            TokenKind::LBrace => return self.parse_map_literal(),
            _ => return Err(ParseError::no_prefix_rule(token)),
        };
        self.advance();
        Ok(Expr::new(kind, span))
    }

    /// `( expr )`
    fn parse_grouping(&mut self) -> Result<Expr, ParseError> {
        self.in_error_context(ErrorContext::Grouping, |p| {
            let start = p.advance().span;
            let inner = p.parse_expr()?;
            p.expect(TokenKind::RParen)?;
            let span = start.merge(p.previous_span());
            Ok(Expr::new(ExprKind::Grouping(Box::new(inner)), span))
        })
    }

    /// `fn ( params ) { body }`
    fn parse_function_literal(&mut self) -> Result<Expr, ParseError> {
        self.in_error_context(ErrorContext::FunctionLiteral, |p| {
            let start = p.advance().span;
            p.expect(TokenKind::LParen)?;
            let params: Vec<Ident> =
                p.comma_series(TokenKind::RParen, |p| p.cursor.expect_ident())?;
            let body = p.parse_block()?;
            let span = start.merge(body.span);
            Ok(Expr::new(
                ExprKind::Function(Rc::new(FunctionLit { params, body, span })),
                span,
            ))
        })
    }

    /// `[ a, b, ... ]`
    fn parse_list_literal(&mut self) -> Result<Expr, ParseError> {
        self.in_error_context(ErrorContext::ListLiteral, |p| {
            let start = p.advance().span;
            let items = p.comma_series(TokenKind::RBracket, Self::parse_expr)?;
            let span = start.merge(p.previous_span());
            Ok(Expr::new(ExprKind::List(items), span))
        })
    }

    /// `{ key: value, ... }`; only reached in expression position.
    fn parse_map_literal(&mut self) -> Result<Expr, ParseError> {
        self.in_error_context(ErrorContext::MapLiteral, |p| {
            let start = p.advance().span;
            let pairs = p.comma_series(TokenKind::RBrace, |p| {
                let key = p.parse_expr()?;
                p.expect(TokenKind::Colon)?;
                let value = p.parse_expr()?;
                Ok((key, value))
            })?;
            let span = start.merge(p.previous_span());
            Ok(Expr::new(ExprKind::Map(pairs), span))
        })
    }
}
