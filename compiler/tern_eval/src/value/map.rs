//! Insertion-ordered map storage.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::{HashKey, Value};

/// Entries in insertion order plus a hash index into them.
///
/// Entries are never removed, so indices stay valid for the lifetime of the
/// map. Each bucket holds the indices of every entry whose key hashed to it.
#[derive(Clone, Debug, Default)]
pub struct MapValue {
    entries: Vec<(Value, Value)>,
    index: FxHashMap<HashKey, SmallVec<[usize; 1]>>,
}

impl MapValue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, hash: HashKey, key: &Value) -> Option<usize> {
        self.index
            .get(&hash)?
            .iter()
            .copied()
            .find(|&i| self.entries[i].0 == *key)
    }

    /// Value stored under `key`, if any. `hash` must be `HashKey::of(key)`.
    pub fn get(&self, hash: HashKey, key: &Value) -> Option<Value> {
        self.position(hash, key).map(|i| self.entries[i].1.clone())
    }

    /// Insert or overwrite. An overwritten entry keeps its original position.
    pub fn insert(&mut self, hash: HashKey, key: Value, value: Value) {
        if let Some(i) = self.position(hash, &key) {
            self.entries[i].1 = value;
            return;
        }
        self.index.entry(hash).or_default().push(self.entries.len());
        self.entries.push((key, value));
    }

    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}
