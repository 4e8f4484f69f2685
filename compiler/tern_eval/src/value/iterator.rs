//! Iterator protocol.
//!
//! An iterator answers two questions: [`is_done`](IteratorValue::is_done)
//! and [`next_value`](IteratorValue::next_value). Collections are
//! snapshotted when the iterator is created, so a loop body that pushes to
//! the list it walks does not extend its own iteration.

use std::rc::Rc;

use super::{Heap, Value};
use crate::errors::{not_iterable, EvalError, EvalErrorKind};

#[derive(Clone, Debug)]
pub enum IteratorValue {
    /// Arithmetic sequence from `current` towards `end` (exclusive).
    /// `step` is never zero; its sign gives the direction.
    Range { current: f64, end: f64, step: f64 },
    /// Elements of a list, or keys of a map, captured at creation.
    Items { items: Rc<[Value]>, pos: usize },
    /// Code points of a string.
    Chars { text: Rc<str>, byte_pos: usize },
}

impl IteratorValue {
    /// `0, 1, ..., n - 1`.
    pub fn count(n: f64) -> Self {
        IteratorValue::Range {
            current: 0.0,
            end: n,
            step: 1.0,
        }
    }

    pub fn range(start: f64, end: f64, step: f64) -> Self {
        debug_assert!(step != 0.0, "range step must be non-zero");
        IteratorValue::Range {
            current: start,
            end,
            step,
        }
    }

    pub fn items(items: impl Into<Rc<[Value]>>) -> Self {
        IteratorValue::Items {
            items: items.into(),
            pos: 0,
        }
    }

    pub fn chars(text: Rc<str>) -> Self {
        IteratorValue::Chars { text, byte_pos: 0 }
    }

    pub fn is_done(&self) -> bool {
        match self {
            IteratorValue::Range { current, end, step } => {
                if current.is_nan() || end.is_nan() {
                    true
                } else if *step > 0.0 {
                    current >= end
                } else {
                    current <= end
                }
            }
            IteratorValue::Items { items, pos } => *pos >= items.len(),
            IteratorValue::Chars { text, byte_pos } => *byte_pos >= text.len(),
        }
    }

    /// Produce the next element, or `None` once exhausted.
    pub fn next_value(&mut self) -> Option<Value> {
        if self.is_done() {
            return None;
        }
        match self {
            IteratorValue::Range { current, step, .. } => {
                let value = *current;
                *current += *step;
                Some(Value::Number(value))
            }
            IteratorValue::Items { items, pos } => {
                let value = items[*pos].clone();
                *pos += 1;
                Some(value)
            }
            IteratorValue::Chars { text, byte_pos } => {
                let c = text[*byte_pos..].chars().next()?;
                *byte_pos += c.len_utf8();
                Some(Value::string(c.encode_utf8(&mut [0; 4])))
            }
        }
    }
}

/// Obtain an iterator over `value`.
///
/// A number `n` counts `0..n` and must be a whole number. An iterator
/// yields itself, sharing its position with every other alias.
pub fn iterate(value: &Value) -> Result<Heap<IteratorValue>, EvalError> {
    let iter = match value {
        Value::Number(n) if n.fract() == 0.0 => IteratorValue::count(*n),
        Value::Number(n) => {
            return Err(EvalError::new(
                EvalErrorKind::NotIterable,
                format!("cannot count to {n}, expected a whole number"),
            ))
        }
        Value::Str(s) => IteratorValue::chars(Rc::clone(s)),
        Value::List(list) => IteratorValue::items(list.borrow().as_slice()),
        Value::Map(map) => IteratorValue::items(map.borrow().keys().cloned().collect::<Vec<_>>()),
        Value::Iterator(iter) => return Ok(iter.clone()),
        _ => return Err(not_iterable(value)),
    };
    Ok(Heap::new(iter))
}
