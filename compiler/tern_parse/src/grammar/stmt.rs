//! Statement parsing.
//!
//! Dispatch is on the leading keyword; anything else is an expression
//! statement. Simple statements consume one optional trailing terminator.

use crate::{ErrorContext, ParseError, Parser};
use tern_ir::{Block, Expr, LoopSource, Span, Stmt, StmtKind, TokenKind};

impl Parser<'_> {
    pub(crate) fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        match self.current_kind() {
            TokenKind::Let => self.parse_let(),
            TokenKind::If => self.parse_if(),
            TokenKind::LBrace => {
                let block = self.parse_block()?;
                let span = block.span;
                Ok(Stmt::new(StmtKind::Block(block), span))
            }
            TokenKind::Return => self.parse_return(),
            TokenKind::Each => self.parse_each(),
            TokenKind::While => self.parse_while(),
            TokenKind::Print => self.parse_print(),
            TokenKind::Import => self.parse_import(),
            _ => {
                let expr = self.parse_expr()?;
                let span = expr.span;
                self.eat(TokenKind::Semicolon);
                Ok(Stmt::new(StmtKind::Expr(expr), span))
            }
        }
    }

    /// Span from `start` to the last consumed token.
    fn span_from(&self, start: Span) -> Span {
        start.merge(self.previous_span())
    }

    /// `let name = value`
    fn parse_let(&mut self) -> Result<Stmt, ParseError> {
        self.in_error_context(ErrorContext::LetStatement, |p| {
            let start = p.advance().span;
            let name = p.cursor.expect_ident()?;
            p.expect(TokenKind::Assign)?;
            let value = p.parse_expr()?;
            let span = p.span_from(start);
            p.eat(TokenKind::Semicolon);
            Ok(Stmt::new(StmtKind::Let { name, value }, span))
        })
    }

    /// `if cond { ... } [else if ... | else { ... }]`
    fn parse_if(&mut self) -> Result<Stmt, ParseError> {
        self.in_error_context(ErrorContext::IfStatement, |p| {
            let start = p.advance().span;
            let condition = p.parse_expr()?;
            let then_branch = p.parse_block()?;
            let else_branch = if p.eat(TokenKind::Else) {
                let branch = if p.check(TokenKind::If) {
                    p.parse_if()?
                } else {
                    let block = p.parse_block()?;
                    let span = block.span;
                    Stmt::new(StmtKind::Block(block), span)
                };
                Some(Box::new(branch))
            } else {
                None
            };
            Ok(Stmt::new(
                StmtKind::If {
                    condition,
                    then_branch,
                    else_branch,
                },
                p.span_from(start),
            ))
        })
    }

    /// `{ stmt* }`
    ///
    /// Errors inside the block are recorded and skipped; only a missing
    /// opening brace fails the block itself.
    pub(crate) fn parse_block(&mut self) -> Result<Block, ParseError> {
        let open = self
            .expect(TokenKind::LBrace)
            .map_err(|e| e.with_context(ErrorContext::Block))?;
        let mut stmts = Vec::new();
        while !self.check(TokenKind::RBrace) && !self.is_at_end() {
            if let Some(stmt) = self.parse_stmt_recovering() {
                stmts.push(stmt);
            }
        }
        self.expect(TokenKind::RBrace)
            .map_err(|e| e.with_context(ErrorContext::Block))?;
        Ok(Block::new(stmts, open.span.merge(self.previous_span())))
    }

    /// `return [value]`
    fn parse_return(&mut self) -> Result<Stmt, ParseError> {
        let start = self.advance().span;
        let value = if matches!(
            self.current_kind(),
            TokenKind::Semicolon | TokenKind::RBrace | TokenKind::Eof
        ) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        let span = self.span_from(start);
        self.eat(TokenKind::Semicolon);
        Ok(Stmt::new(StmtKind::Return(value), span))
    }

    /// `each [name :] [iterable] { ... }`
    fn parse_each(&mut self) -> Result<Stmt, ParseError> {
        self.in_error_context(ErrorContext::EachLoop, |p| {
            let start = p.advance().span;
            let binding = if p.check(TokenKind::Ident) && p.cursor.peek_next_kind() == TokenKind::Colon
            {
                let name = p.cursor.expect_ident()?;
                p.advance();
                Some(name)
            } else {
                None
            };
            let source = match p.parse_optional_header()? {
                Some(iterable) => LoopSource::Iterable(iterable),
                None => LoopSource::Forever,
            };
            let body = p.parse_block()?;
            Ok(Stmt::new(
                StmtKind::Each {
                    binding,
                    source,
                    body,
                },
                p.span_from(start),
            ))
        })
    }

    /// `while [cond] { ... }`
    fn parse_while(&mut self) -> Result<Stmt, ParseError> {
        self.in_error_context(ErrorContext::WhileLoop, |p| {
            let start = p.advance().span;
            let condition = p.parse_optional_header()?;
            let body = p.parse_block()?;
            Ok(Stmt::new(
                StmtKind::While { condition, body },
                p.span_from(start),
            ))
        })
    }

    /// Loop header expression, absent when the body's `{` follows directly.
    fn parse_optional_header(&mut self) -> Result<Option<Expr>, ParseError> {
        if self.check(TokenKind::LBrace) {
            Ok(None)
        } else {
            self.parse_expr().map(Some)
        }
    }

    /// `print a, b, ...`
    fn parse_print(&mut self) -> Result<Stmt, ParseError> {
        self.in_error_context(ErrorContext::PrintStatement, |p| {
            let start = p.advance().span;
            let mut exprs = vec![p.parse_expr()?];
            while p.eat(TokenKind::Comma) {
                exprs.push(p.parse_expr()?);
            }
            let span = p.span_from(start);
            p.eat(TokenKind::Semicolon);
            Ok(Stmt::new(StmtKind::Print(exprs), span))
        })
    }

    /// `import name "path"`
    fn parse_import(&mut self) -> Result<Stmt, ParseError> {
        self.in_error_context(ErrorContext::ImportStatement, |p| {
            let start = p.advance().span;
            let name = p.cursor.expect_ident()?;
            let path = p.expect(TokenKind::String)?.lexeme.clone();
            let span = p.span_from(start);
            p.eat(TokenKind::Semicolon);
            Ok(Stmt::new(StmtKind::Import { name, path }, span))
        })
    }
}
