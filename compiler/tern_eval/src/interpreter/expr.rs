//! Expression evaluation.

use std::rc::Rc;

use smallvec::SmallVec;
use tern_ir::{Expr, ExprKind, Ident, LogicalOp};
use tern_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::builtins;
use crate::environment::Environment;
use crate::errors::{
    illegal_assignment, type_mismatch, undeclared, undeclared_member, unhashable_key, EvalError,
    EvalResult,
};
use crate::operators::{evaluate_binary, evaluate_unary};
use crate::value::{HashKey, MapValue, Value};

impl Interpreter {
    pub(super) fn eval_expr(&mut self, expr: &Expr, env: &Environment) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expr_inner(expr, env))
    }

    fn eval_expr_inner(&mut self, expr: &Expr, env: &Environment) -> EvalResult {
        match &expr.kind {
            ExprKind::Ident(ident) => self.lookup(ident, env),
            ExprKind::Number(n) => Ok(Value::Number(*n)),
            ExprKind::String(s) => Ok(Value::string(s)),
            ExprKind::Bool(b) => Ok(Value::Bool(*b)),
            ExprKind::Nil => Ok(Value::Nil),
            ExprKind::Unary { op, operand } => {
                let operand = self.eval_expr(operand, env)?;
                evaluate_unary(*op, &operand).map_err(|err| err.with_span(expr.span))
            }
            ExprKind::Binary { op, left, right } => {
                let left = self.eval_expr(left, env)?;
                let right = self.eval_expr(right, env)?;
                evaluate_binary(&left, &right, *op).map_err(|err| err.with_span(expr.span))
            }
            ExprKind::Logical { op, left, right } => self.eval_logical(*op, left, right, env),
            ExprKind::Assign { target, value } => self.eval_assign(target, value, env),
            ExprKind::Grouping(inner) => self.eval_expr(inner, env),
            ExprKind::Function(func) => Ok(Value::closure(Rc::clone(func), env.clone())),
            ExprKind::Call { callee, args } => {
                let callee = self.eval_expr(callee, env)?;
                let args = args
                    .iter()
                    .map(|arg| self.eval_expr(arg, env))
                    .collect::<Result<SmallVec<[Value; 4]>, _>>()?;
                self.call_value(&callee, &args, expr.span)
            }
            ExprKind::List(items) => {
                let items = items
                    .iter()
                    .map(|item| self.eval_expr(item, env))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Value::list(items))
            }
            ExprKind::Map(entries) => {
                let mut map = MapValue::new();
                for (key_expr, value_expr) in entries {
                    let key = self.eval_expr(key_expr, env)?;
                    let hash =
                        HashKey::of(&key).ok_or_else(|| unhashable_key(&key).with_span(key_expr.span))?;
                    let value = self.eval_expr(value_expr, env)?;
                    map.insert(hash, key, value);
                }
                Ok(Value::map(map))
            }
            ExprKind::Index { target, index } => {
                let target = self.eval_expr(target, env)?;
                let index = self.eval_expr(index, env)?;
                Self::index_value(&target, &index).map_err(|err| err.or_span(expr.span))
            }
            ExprKind::Member { object, name } => {
                let object = self.eval_expr(object, env)?;
                match &object {
                    Value::Module(module) => module
                        .exports
                        .get(name)
                        .cloned()
                        .ok_or_else(|| undeclared_member(&module.name, name).with_span(expr.span)),
                    other => Err(type_mismatch("module", other).with_span(expr.span)),
                }
            }
        }
    }

    /// Resolved names walk their recorded depth; unresolved names are
    /// globals or builtins.
    fn lookup(&self, ident: &Ident, env: &Environment) -> EvalResult {
        let found = match ident.depth() {
            Some(depth) => env.get_at(depth, &ident.name),
            None => self
                .globals
                .borrow()
                .get(&ident.name)
                .or_else(|| builtins::lookup(&ident.name)),
        };
        found.ok_or_else(|| undeclared(&ident.name).with_span(ident.span))
    }

    fn eval_logical(
        &mut self,
        op: LogicalOp,
        left: &Expr,
        right: &Expr,
        env: &Environment,
    ) -> EvalResult {
        let lhs = self.eval_boolean(left, env)?;
        match (op, lhs) {
            (LogicalOp::And, false) => Ok(Value::Bool(false)),
            (LogicalOp::Or, true) => Ok(Value::Bool(true)),
            _ => Ok(Value::Bool(self.eval_boolean(right, env)?)),
        }
    }

    fn eval_boolean(&mut self, expr: &Expr, env: &Environment) -> Result<bool, EvalError> {
        match self.eval_expr(expr, env)? {
            Value::Bool(b) => Ok(b),
            other => Err(type_mismatch("bool", &other).with_span(expr.span)),
        }
    }

    /// `name = value` or `target[index] = value`. The value is evaluated
    /// first and is also the result of the expression.
    fn eval_assign(&mut self, target: &Expr, value: &Expr, env: &Environment) -> EvalResult {
        let value = self.eval_expr(value, env)?;
        match &target.kind {
            ExprKind::Ident(ident) => {
                let assigned = match ident.depth() {
                    Some(depth) => env.assign_at(depth, &ident.name, value.clone()),
                    None => self.globals.borrow_mut().set(&ident.name, value.clone()),
                };
                if assigned {
                    Ok(value)
                } else {
                    Err(undeclared(&ident.name).with_span(ident.span))
                }
            }
            ExprKind::Index {
                target: container,
                index,
            } => {
                let container = self.eval_expr(container, env)?;
                let index = self.eval_expr(index, env)?;
                Self::assign_index(&container, &index, value.clone())
                    .map_err(|err| err.or_span(target.span))?;
                Ok(value)
            }
            other => Err(illegal_assignment(other.name()).with_span(target.span)),
        }
    }
}
