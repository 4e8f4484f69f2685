//! Map-key hashing.

use super::Value;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// 64-bit FNV-1a over `bytes`.
pub fn fnv1a_64(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, &byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Which kind of value produced a [`HashKey`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum KeyKind {
    Number,
    Str,
    Bool,
}

/// Derived key used to bucket map entries.
///
/// Values equal under language equality always produce equal keys. The
/// converse does not hold (two strings can collide), so maps compare the
/// stored key values inside a bucket.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct HashKey {
    pub kind: KeyKind,
    pub hash: u64,
}

impl HashKey {
    /// Key for `value`, or `None` if the value cannot be a map key.
    pub fn of(value: &Value) -> Option<HashKey> {
        let (kind, hash) = match value {
            // `-0 == 0`, so both must land in the same bucket.
            Value::Number(n) if *n == 0.0 => (KeyKind::Number, 0.0f64.to_bits()),
            Value::Number(n) => (KeyKind::Number, n.to_bits()),
            Value::Str(s) => (KeyKind::Str, fnv1a_64(s.as_bytes())),
            Value::Bool(b) => (KeyKind::Bool, u64::from(*b)),
            _ => return None,
        };
        Some(HashKey { kind, hash })
    }
}
