//! Statement execution.

use tern_ir::{Block, Expr, Ident, LoopSource, Stmt, StmtKind};

use super::Interpreter;
use crate::environment::Environment;
use crate::errors::{illegal_return, type_mismatch, unknown_module, ControlFlow, ExecResult};
use crate::modules;
use crate::value::{iterate, Value};

impl Interpreter {
    pub(super) fn exec_stmt(&mut self, stmt: &Stmt, env: &Environment) -> ExecResult {
        match &stmt.kind {
            StmtKind::Let { name, value } => {
                let value = self.eval_expr(value, env)?;
                env.declare(name.name.clone(), value)
                    .map_err(|err| err.with_span(name.span))?;
                Ok(Value::Nil)
            }
            StmtKind::Expr(expr) => Ok(self.eval_expr(expr, env)?),
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.eval_condition(condition, env)? {
                    self.exec_block(then_branch, env)
                } else if let Some(else_branch) = else_branch {
                    self.exec_stmt(else_branch, env)
                } else {
                    Ok(Value::Nil)
                }
            }
            StmtKind::Block(block) => self.exec_block(block, env),
            StmtKind::Return(value) => {
                if self.call_stack.depth() == 0 {
                    return Err(illegal_return().with_span(stmt.span).into());
                }
                let value = match value {
                    Some(expr) => self.eval_expr(expr, env)?,
                    None => Value::Nil,
                };
                Err(ControlFlow::Return(value))
            }
            StmtKind::Each {
                binding,
                source,
                body,
            } => self.exec_each(binding.as_ref(), source, body, env),
            StmtKind::While { condition, body } => {
                loop {
                    if let Some(condition) = condition {
                        if !self.eval_condition(condition, env)? {
                            break;
                        }
                    }
                    self.exec_block(body, &env.child())?;
                }
                Ok(Value::Nil)
            }
            StmtKind::Print(exprs) => {
                let mut line = String::new();
                for (i, expr) in exprs.iter().enumerate() {
                    if i > 0 {
                        line.push_str(", ");
                    }
                    line.push_str(&self.eval_expr(expr, env)?.to_string());
                }
                self.print_handler.println(&line);
                Ok(Value::Nil)
            }
            StmtKind::Import { name, path } => {
                let module =
                    modules::load(path).ok_or_else(|| unknown_module(path).with_span(stmt.span))?;
                tracing::debug!(%path, name = %name.name, "import");
                env.declare(name.name.clone(), module)
                    .map_err(|err| err.with_span(name.span))?;
                Ok(Value::Nil)
            }
        }
    }

    /// Run `stmts` in `env` itself, yielding the last statement's value.
    pub(super) fn exec_stmts(&mut self, stmts: &[Stmt], env: &Environment) -> ExecResult {
        let mut last = Value::Nil;
        for stmt in stmts {
            last = self.exec_stmt(stmt, env)?;
        }
        Ok(last)
    }

    /// Run a block in a fresh child of `env`.
    fn exec_block(&mut self, block: &Block, env: &Environment) -> ExecResult {
        self.exec_stmts(&block.stmts, &env.child())
    }

    /// Evaluate an `if`/`while` condition, which must be a boolean.
    fn eval_condition(&mut self, condition: &Expr, env: &Environment) -> Result<bool, ControlFlow> {
        let value = self.eval_expr(condition, env)?;
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(type_mismatch("bool", &other)
                .with_span(condition.span)
                .into()),
        }
    }

    /// `each [name :] [iterable] { body }`.
    ///
    /// Each pass runs in a fresh iteration frame holding the binding, so a
    /// closure made in the body captures that pass's value. Without an
    /// iterable the loop runs until `return` or an error, binding the pass
    /// number if a name is given.
    fn exec_each(
        &mut self,
        binding: Option<&Ident>,
        source: &LoopSource,
        body: &Block,
        env: &Environment,
    ) -> ExecResult {
        let iter = match source {
            LoopSource::Iterable(expr) => {
                let iterable = self.eval_expr(expr, env)?;
                Some(iterate(&iterable).map_err(|err| err.or_span(expr.span))?)
            }
            LoopSource::Forever => None,
        };

        let mut pass = 0.0;
        loop {
            let item = match &iter {
                Some(iter) => match iter.borrow_mut().next_value() {
                    Some(item) => item,
                    None => break,
                },
                None => Value::Number(pass),
            };
            pass += 1.0;

            let frame = env.child();
            if let Some(binding) = binding {
                frame
                    .declare(binding.name.clone(), item)
                    .map_err(|err| err.with_span(binding.span))?;
            }
            self.exec_block(body, &frame)?;
        }
        Ok(Value::Nil)
    }
}
