//! Runtime values.
//!
//! `Number`, `Str`, `Bool` and `Nil` behave as plain values. `List`, `Map`
//! and `Iterator` live behind a [`Heap`] handle, so assignment, argument
//! passing and return alias the same storage. Heap values are created only
//! through the factory methods on [`Value`].

mod hash_key;
mod heap;
mod iterator;
mod map;

use std::fmt::{self, Write};
use std::rc::Rc;

use rustc_hash::FxHashMap;
use tern_ir::ast::write_quoted;
use tern_ir::{FunctionLit, Name};

use crate::environment::Environment;
use crate::errors::EvalError;
use crate::print_handler::PrintHandlerImpl;

pub use hash_key::{fnv1a_64, HashKey, KeyKind};
pub use heap::Heap;
pub use iterator::{iterate, IteratorValue};
pub use map::MapValue;

/// Native function signature. Receives the evaluated arguments and the
/// active print handler.
pub type BuiltinFn = fn(&[Value], &PrintHandlerImpl) -> Result<Value, EvalError>;

/// A native function together with the name it is registered under.
#[derive(Copy, Clone)]
pub struct Builtin {
    pub name: &'static str,
    pub func: BuiltinFn,
}

/// A function literal paired with the frame it was evaluated in.
///
/// Calls run in a child of `env`, never of the caller's frame.
pub struct Closure {
    pub func: Rc<FunctionLit>,
    pub env: Environment,
}

impl Closure {
    /// `fn(a, b)`
    pub fn signature(&self) -> String {
        let params: Vec<&str> = self.func.params.iter().map(|p| p.name.as_str()).collect();
        format!("fn({})", params.join(", "))
    }
}

/// A named namespace of exports, bound by `import`.
pub struct Module {
    pub name: Name,
    pub exports: FxHashMap<Name, Value>,
}

#[derive(Clone)]
pub enum Value {
    Number(f64),
    Str(Rc<str>),
    Bool(bool),
    Nil,
    Function(Rc<Closure>),
    List(Heap<Vec<Value>>),
    Map(Heap<MapValue>),
    Iterator(Heap<IteratorValue>),
    Module(Rc<Module>),
    Builtin(Builtin),
}

// Factories

impl Value {
    #[inline]
    pub fn string(s: &str) -> Self {
        Value::Str(Rc::from(s))
    }

    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    #[inline]
    pub fn map(map: MapValue) -> Self {
        Value::Map(Heap::new(map))
    }

    #[inline]
    pub fn iterator(iter: IteratorValue) -> Self {
        Value::Iterator(Heap::new(iter))
    }

    pub fn closure(func: Rc<FunctionLit>, env: Environment) -> Self {
        Value::Function(Rc::new(Closure { func, env }))
    }

    pub fn module(name: Name, exports: FxHashMap<Name, Value>) -> Self {
        Value::Module(Rc::new(Module { name, exports }))
    }

    pub fn builtin(name: &'static str, func: BuiltinFn) -> Self {
        Value::Builtin(Builtin { name, func })
    }
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Bool(_) => "bool",
            Value::Nil => "nil",
            Value::Function(_) => "function",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Iterator(_) => "iterator",
            Value::Module(_) => "module",
            Value::Builtin(_) => "builtin",
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Rendering used inside collections and error messages: like
    /// `Display`, but strings are quoted.
    pub fn repr(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = write_value(&mut out, self, true, &mut Vec::new());
        out
    }
}

/// Language equality.
///
/// Numbers, strings, booleans and nil compare by value. Everything else
/// compares by identity: two lists are equal only if they are the same list.
/// Values of different types are never equal.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Nil, Value::Nil) => true,
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::List(a), Value::List(b)) => a.ptr_eq(b),
            (Value::Map(a), Value::Map(b)) => a.ptr_eq(b),
            (Value::Iterator(a), Value::Iterator(b)) => a.ptr_eq(b),
            (Value::Module(a), Value::Module(b)) => Rc::ptr_eq(a, b),
            (Value::Builtin(a), Value::Builtin(b)) => a.name == b.name,
            _ => false,
        }
    }
}

/// Write `value`; `nested` quotes strings. `seen` holds the containers
/// currently being written so a list that contains itself prints `[...]`.
fn write_value(
    out: &mut impl Write,
    value: &Value,
    nested: bool,
    seen: &mut Vec<*const ()>,
) -> fmt::Result {
    match value {
        Value::Number(n) => write!(out, "{n}"),
        Value::Str(s) if nested => write_quoted(out, s),
        Value::Str(s) => out.write_str(s),
        Value::Bool(b) => write!(out, "{b}"),
        Value::Nil => out.write_str("nil"),
        Value::Function(closure) => out.write_str(&closure.signature()),
        Value::List(list) => {
            let ptr = list.as_ptr();
            if seen.contains(&ptr) {
                return out.write_str("[...]");
            }
            seen.push(ptr);
            out.write_char('[')?;
            for (i, item) in list.borrow().iter().enumerate() {
                if i > 0 {
                    out.write_str(", ")?;
                }
                write_value(out, item, true, seen)?;
            }
            seen.pop();
            out.write_char(']')
        }
        Value::Map(map) => {
            let ptr = map.as_ptr();
            if seen.contains(&ptr) {
                return out.write_str("{...}");
            }
            seen.push(ptr);
            out.write_char('{')?;
            for (i, (key, item)) in map.borrow().iter().enumerate() {
                if i > 0 {
                    out.write_str(", ")?;
                }
                write_value(out, key, true, seen)?;
                out.write_str(": ")?;
                write_value(out, item, true, seen)?;
            }
            seen.pop();
            out.write_char('}')
        }
        Value::Iterator(_) => out.write_str("iterator"),
        Value::Module(module) => write!(out, "module {}", module.name),
        Value::Builtin(builtin) => write!(out, "builtin {}", builtin.name),
    }
}

/// Rendering used by `print` and `str`: strings appear raw at the top level
/// and quoted inside collections.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self, false, &mut Vec::new())
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.type_name(), self.repr())
    }
}
