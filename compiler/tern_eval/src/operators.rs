//! Unary and binary operators.
//!
//! Direct enum dispatch on the operand pair. Arithmetic and ordering need
//! two numbers; strings support `+` and equality only; `==` and `!=` fall
//! back to language equality for every other pair.

use tern_ir::{BinaryOp, UnaryOp};

use crate::errors::{illegal_binary_op, illegal_unary_op, EvalResult};
use crate::value::Value;

pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(eval_number_binary(*a, *b, op)),
        (Value::Str(a), Value::Str(b)) => match op {
            BinaryOp::Add => {
                let mut joined = String::with_capacity(a.len() + b.len());
                joined.push_str(a);
                joined.push_str(b);
                Ok(Value::Str(joined.into()))
            }
            BinaryOp::Eq => Ok(Value::Bool(a == b)),
            BinaryOp::NotEq => Ok(Value::Bool(a != b)),
            _ => Err(illegal_binary_op(left, op, right)),
        },
        _ => eval_equality(left, right, op),
    }
}

fn eval_number_binary(a: f64, b: f64, op: BinaryOp) -> Value {
    match op {
        BinaryOp::Add => Value::Number(a + b),
        BinaryOp::Sub => Value::Number(a - b),
        BinaryOp::Mul => Value::Number(a * b),
        BinaryOp::Div => Value::Number(a / b),
        BinaryOp::Eq => Value::Bool(a == b),
        BinaryOp::NotEq => Value::Bool(a != b),
        BinaryOp::Lt => Value::Bool(a < b),
        BinaryOp::Gt => Value::Bool(a > b),
        BinaryOp::LtEq => Value::Bool(a <= b),
        BinaryOp::GtEq => Value::Bool(a >= b),
    }
}

fn eval_equality(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Eq => Ok(Value::Bool(left == right)),
        BinaryOp::NotEq => Ok(Value::Bool(left != right)),
        _ => Err(illegal_binary_op(left, op, right)),
    }
}

pub fn evaluate_unary(op: UnaryOp, operand: &Value) -> EvalResult {
    match (op, operand) {
        (UnaryOp::Neg, Value::Number(n)) => Ok(Value::Number(-n)),
        (UnaryOp::Not, Value::Bool(b)) => Ok(Value::Bool(!b)),
        _ => Err(illegal_unary_op(op, operand)),
    }
}
