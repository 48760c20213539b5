use std::error::Error;
use std::fmt;

use serde::Serialize;

pub mod hash;

/// Capabilities a key must offer: a stable string form (the hash is computed
/// from it) and equality (lookup within a bucket).
pub trait KeyType: Clone + Eq + ToString + Serialize {}
impl<T: Clone + Eq + ToString + Serialize> KeyType for T {}

pub trait ValueType: Clone + Serialize {}
impl<T: Clone + Serialize> ValueType for T {}

/// Errors a table operation can report. Every variant is detected before any
/// mutation, so a failed operation leaves the table untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashTableError {
    /// The key's string form exceeds the table's maximum key length.
    InvalidKey(String),

    /// Insert was called with a key already present in the table.
    DuplicateKey(String),
}

impl fmt::Display for HashTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashTableError::InvalidKey(reason) => {
                write!(f, "invalid key: {}", reason)
            }
            HashTableError::DuplicateKey(key) => {
                write!(
                    f,
                    "the hash table already contains an element with the key {}, keys must be unique",
                    key
                )
            }
        }
    }
}

impl Error for HashTableError {}
