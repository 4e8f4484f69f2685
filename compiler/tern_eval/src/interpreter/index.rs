//! Indexing and index assignment.

use super::Interpreter;
use crate::errors::{
    illegal_assignment, illegal_index_type, index_out_of_bounds, non_integral_index,
    unhashable_key, EvalError, EvalResult,
};
use crate::value::{HashKey, Value};

/// Convert a numeric index into a position in a sequence of `len` items.
///
/// Non-integral and out-of-range indices are distinct errors.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    reason = "index is checked integral and within 0..len before the cast"
)]
fn checked_position(index: f64, len: usize) -> Result<usize, EvalError> {
    if index.fract() != 0.0 {
        return Err(non_integral_index(index));
    }
    if index < 0.0 || index >= len as f64 {
        return Err(index_out_of_bounds(index, len));
    }
    Ok(index as usize)
}

impl Interpreter {
    /// `target[index]`.
    ///
    /// Lists need an integral in-range index; strings are indexed by code
    /// point; a missing map key reads as nil.
    pub(super) fn index_value(target: &Value, index: &Value) -> EvalResult {
        match (target, index) {
            (Value::List(list), Value::Number(n)) => {
                let list = list.borrow();
                let pos = checked_position(*n, list.len())?;
                Ok(list[pos].clone())
            }
            (Value::Str(s), Value::Number(n)) => {
                let pos = checked_position(*n, s.chars().count())?;
                let c = s.chars().nth(pos).unwrap_or_default();
                Ok(Value::string(c.encode_utf8(&mut [0; 4])))
            }
            (Value::Map(map), key) => {
                let hash = HashKey::of(key).ok_or_else(|| unhashable_key(key))?;
                Ok(map.borrow().get(hash, key).unwrap_or(Value::Nil))
            }
            _ => Err(illegal_index_type(target, index)),
        }
    }

    /// `target[index] = value`: lists need an integral in-range index, maps
    /// insert or overwrite.
    pub(super) fn assign_index(target: &Value, index: &Value, value: Value) -> Result<(), EvalError> {
        match (target, index) {
            (Value::List(list), Value::Number(n)) => {
                let mut list = list.borrow_mut();
                let pos = checked_position(*n, list.len())?;
                list[pos] = value;
                Ok(())
            }
            (Value::List(_), _) => Err(illegal_index_type(target, index)),
            (Value::Map(map), key) => {
                let hash = HashKey::of(key).ok_or_else(|| unhashable_key(key))?;
                map.borrow_mut().insert(hash, key.clone(), value);
                Ok(())
            }
            _ => Err(illegal_assignment(target.type_name())),
        }
    }
}
