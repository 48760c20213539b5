use crate::common::hash::{hash_of, MAX_KEY_LENGTH};
use crate::common::{HashTableError, KeyType, ValueType};
use crate::container::hash::entry::Entry;
use crate::container::hash::hash_table::HashTable;
use crate::container::hash::FindEntryResult;

/// Hash table resolving collisions by chaining (open hashing): every key
/// hashes to the character length of its string form, and all entries sharing
/// a length live in one bucket, in insertion order.
///
/// The hash range is `[0, max_key_length]` and known up front, so buckets sit
/// in a dense array indexed by hash code; `None` marks a bucket no live entry
/// hashes to. The table never resizes.
pub struct ChainedHashTable<K: KeyType, V: ValueType> {
    buckets: Vec<Option<Vec<Entry<K, V>>>>,
    max_key_length: usize,
    len: usize,
}

impl<K: KeyType, V: ValueType> ChainedHashTable<K, V> {
    pub fn new() -> ChainedHashTable<K, V> {
        ChainedHashTable::with_max_key_length(MAX_KEY_LENGTH)
    }

    pub fn with_max_key_length(max_key_length: usize) -> ChainedHashTable<K, V> {
        ChainedHashTable {
            buckets: (0..=max_key_length).map(|_| None).collect(),
            max_key_length,
            len: 0,
        }
    }

    pub fn max_key_length(&self) -> usize {
        self.max_key_length
    }

    /// Number of live entries across all buckets.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Lazy read-only view of the occupied buckets as (hash code, entries)
    /// pairs. Buckets come out in ascending hash code order; entries within a
    /// bucket keep insertion order. Mutating the table invalidates the view.
    pub fn enumerate(&self) -> impl Iterator<Item = (usize, &[Entry<K, V>])> {
        self.buckets
            .iter()
            .enumerate()
            .filter_map(|(hash, bucket)| bucket.as_ref().map(|entries| (hash, entries.as_slice())))
    }

    fn find_entry(bucket: &[Entry<K, V>], key: &K) -> FindEntryResult<usize> {
        for (idx, entry) in bucket.iter().enumerate() {
            if entry.key() == key {
                return FindEntryResult::Found(idx);
            }
        }

        FindEntryResult::NotFound
    }
}

impl<K, V> HashTable<K, V> for ChainedHashTable<K, V>
where
    K: KeyType + 'static,
    V: ValueType + 'static,
{
    /// chained hash table insert:
    /// 1. bucket_index = character length of the key, bounded by max_key_length
    /// 2. if no bucket exists there, create one holding the single new entry, done.
    ///    else scan the bucket for an equal key; a hit is a duplicate, reject
    /// 3. otherwise append the entry at the bucket's end
    ///
    /// Scanning only the target bucket is enough for table-wide uniqueness:
    /// the hash is a pure function of the key, so an equal key cannot sit
    /// anywhere else.
    fn insert(&mut self, key: K, value: V) -> Result<(), HashTableError> {
        let h = hash_of(&key, self.max_key_length)?;

        let bucket = self.buckets[h].get_or_insert_with(Vec::new);
        if Self::find_entry(bucket, &key).found() {
            return Err(HashTableError::DuplicateKey(key.to_string()));
        }

        bucket.push(Entry::new(key, value));
        self.len += 1;
        Ok(())
    }

    /// Deleting a key that is not in the table is a successful no-op. A bucket
    /// emptied by the removal is pruned back to absent, which no public
    /// operation can distinguish from retaining it empty.
    fn delete(&mut self, key: &K) -> Result<(), HashTableError> {
        let h = hash_of(key, self.max_key_length)?;

        let emptied = match self.buckets[h].as_mut() {
            Some(bucket) => match Self::find_entry(bucket, key) {
                FindEntryResult::Found(idx) => {
                    bucket.remove(idx);
                    self.len -= 1;
                    bucket.is_empty()
                }
                FindEntryResult::NotFound => false,
            },
            None => false,
        };

        if emptied {
            self.buckets[h] = None;
        }

        Ok(())
    }

    /// A missing key yields `Ok(None)`, never an error. A hit hands back a
    /// clone of the stored value; writing to it does not touch the table.
    fn search(&self, key: &K) -> Result<Option<V>, HashTableError> {
        let h = hash_of(key, self.max_key_length)?;

        Ok(self.buckets[h].as_ref().and_then(|bucket| {
            match Self::find_entry(bucket, key) {
                FindEntryResult::Found(idx) => Some(bucket[idx].value().clone()),
                FindEntryResult::NotFound => None,
            }
        }))
    }
}
