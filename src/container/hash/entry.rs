use std::fmt;

use serde::Serialize;

use crate::common::{KeyType, ValueType};

/// Immutable key-value pair held in a bucket. The pair never changes after
/// construction; updating a key means delete followed by insert.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry<K: KeyType, V: ValueType> {
    key: K,
    value: V,
}

impl<K: KeyType, V: ValueType> Entry<K, V> {
    pub fn new(key: K, value: V) -> Entry<K, V> {
        Entry { key, value }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }
}

impl<K: KeyType, V: ValueType> fmt::Display for Entry<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key.to_string())
    }
}
