//! Native functions available without an import.
//!
//! Builtins are consulted only after a name misses every frame. Each one
//! checks its own arity and argument types.

use crate::errors::{type_mismatch, wrong_argument_count, EvalError, EvalErrorKind};
use crate::print_handler::PrintHandlerImpl;
use crate::value::{iterate, Builtin, IteratorValue, Value};

const BUILTINS: &[Builtin] = &[
    Builtin {
        name: "len",
        func: builtin_len,
    },
    Builtin {
        name: "push",
        func: builtin_push,
    },
    Builtin {
        name: "pop",
        func: builtin_pop,
    },
    Builtin {
        name: "str",
        func: builtin_str,
    },
    Builtin {
        name: "range",
        func: builtin_range,
    },
    Builtin {
        name: "iter",
        func: builtin_iter,
    },
];

pub fn lookup(name: &str) -> Option<Value> {
    BUILTINS
        .iter()
        .find(|b| b.name == name)
        .map(|b| Value::Builtin(*b))
}

/// Names of every builtin, in registration order.
pub fn names() -> impl Iterator<Item = &'static str> {
    BUILTINS.iter().map(|b| b.name)
}

fn expect_args(name: &str, args: &[Value], expected: usize) -> Result<(), EvalError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(wrong_argument_count(name, &expected.to_string(), args.len()))
    }
}

fn expect_number(value: &Value) -> Result<f64, EvalError> {
    value.as_number().ok_or_else(|| type_mismatch("number", value))
}

#[expect(
    clippy::cast_precision_loss,
    reason = "collection sizes are far below 2^53"
)]
fn builtin_len(args: &[Value], _: &PrintHandlerImpl) -> Result<Value, EvalError> {
    expect_args("len", args, 1)?;
    let len = match &args[0] {
        Value::Str(s) => s.chars().count(),
        Value::List(list) => list.borrow().len(),
        Value::Map(map) => map.borrow().len(),
        other => return Err(type_mismatch("string, list or map", other)),
    };
    Ok(Value::Number(len as f64))
}

/// `push(list, items...)` appends in order and returns the list itself.
fn builtin_push(args: &[Value], _: &PrintHandlerImpl) -> Result<Value, EvalError> {
    let [target, items @ ..] = args else {
        return Err(wrong_argument_count("push", "at least 2", 0));
    };
    if items.is_empty() {
        return Err(wrong_argument_count("push", "at least 2", args.len()));
    }
    let Value::List(list) = target else {
        return Err(type_mismatch("list", target));
    };
    list.borrow_mut().extend(items.iter().cloned());
    Ok(target.clone())
}

/// `pop(list)` removes and returns the last element; nil when empty.
fn builtin_pop(args: &[Value], _: &PrintHandlerImpl) -> Result<Value, EvalError> {
    expect_args("pop", args, 1)?;
    let Value::List(list) = &args[0] else {
        return Err(type_mismatch("list", &args[0]));
    };
    Ok(list.borrow_mut().pop().unwrap_or(Value::Nil))
}

fn builtin_str(args: &[Value], _: &PrintHandlerImpl) -> Result<Value, EvalError> {
    expect_args("str", args, 1)?;
    Ok(Value::string(&args[0].to_string()))
}

/// `range(end)`, `range(start, end)` or `range(start, end, step)`.
///
/// Without a step the range counts towards `end` by one in whichever
/// direction that is. With a step pointing away from `end` it is empty.
/// Every bound must be finite.
fn builtin_range(args: &[Value], _: &PrintHandlerImpl) -> Result<Value, EvalError> {
    let numbers = args
        .iter()
        .map(expect_number)
        .collect::<Result<Vec<_>, _>>()?;
    let (start, end, step) = match numbers[..] {
        [end] => (0.0, end, if end < 0.0 { -1.0 } else { 1.0 }),
        [start, end] => (start, end, if end < start { -1.0 } else { 1.0 }),
        [start, end, step] => (start, end, step),
        _ => return Err(wrong_argument_count("range", "1 to 3", args.len())),
    };
    if let Some(bad) = [start, end, step].into_iter().find(|n| !n.is_finite()) {
        return Err(EvalError::new(
            EvalErrorKind::IllegalOperation,
            format!("range bounds must be finite, got {}", Value::Number(bad)),
        ));
    }
    if step == 0.0 {
        return Err(EvalError::new(
            EvalErrorKind::IllegalOperation,
            "range step cannot be zero",
        ));
    }
    Ok(Value::iterator(IteratorValue::range(start, end, step)))
}

fn builtin_iter(args: &[Value], _: &PrintHandlerImpl) -> Result<Value, EvalError> {
    expect_args("iter", args, 1)?;
    iterate(&args[0]).map(Value::Iterator)
}
