use crate::common::{HashTableError, KeyType, ValueType};
#[cfg(test)]
use mockall::{automock, predicate::*};

/// Contract shared by the hash table variants: keys are unique table-wide,
/// a missing key is a normal outcome for delete and search, and no failed
/// operation mutates the table.
///
/// Implementations are not safe for concurrent mutation; a multi-threaded
/// host must serialize access externally.
#[cfg_attr(test, automock)]
pub trait HashTable<K: KeyType + 'static, V: ValueType + 'static> {
    fn insert(&mut self, key: K, value: V) -> Result<(), HashTableError>;

    fn delete(&mut self, key: &K) -> Result<(), HashTableError>;

    fn search(&self, key: &K) -> Result<Option<V>, HashTableError>;
}

/// Feeds a batch of pairs into a table, stopping at the first error.
/// Returns how many pairs went in.
pub fn insert_all<K, V, T>(table: &mut T, pairs: Vec<(K, V)>) -> Result<usize, HashTableError>
where
    K: KeyType + 'static,
    V: ValueType + 'static,
    T: HashTable<K, V> + ?Sized,
{
    let mut inserted = 0;
    for (key, value) in pairs {
        table.insert(key, value)?;
        inserted += 1;
    }

    Ok(inserted)
}
