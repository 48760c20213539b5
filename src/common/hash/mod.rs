use crate::common::{HashTableError, KeyType};

/// Default upper bound on the character length of a key's string form.
pub const MAX_KEY_LENGTH: usize = 255;

/// Length-of-string hash: the bucket index of a key is the character count of
/// its string form, so every equal-length pair of keys collides. The hash is
/// deliberately poor; the container must stay correct regardless of it.
///
/// Fails with `InvalidKey` when the key's string form is longer than
/// `max_key_length`, which bounds the hash range to `[0, max_key_length]`.
pub fn hash_of<K: KeyType>(key: &K, max_key_length: usize) -> Result<usize, HashTableError> {
    let length = key.to_string().chars().count();
    if length > max_key_length {
        return Err(HashTableError::InvalidKey(format!(
            "the maximum key length is {} characters",
            max_key_length
        )));
    }

    Ok(length)
}
