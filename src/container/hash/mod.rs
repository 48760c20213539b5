use crate::container::hash::FindEntryResult::Found;

pub mod chained_hash_table;
pub mod entry;
pub mod hash_table;

/// Outcome of probing a bucket for a key. Insert reads `Found` as a duplicate,
/// search and delete read it as a hit.
pub enum FindEntryResult<T> {
    NotFound,

    Found(T),
}

impl<T> FindEntryResult<T> {
    pub fn not_found(&self) -> bool {
        matches!(self, FindEntryResult::NotFound)
    }

    pub fn found(&self) -> bool {
        matches!(self, FindEntryResult::Found(_))
    }

    pub fn unwrap(self) -> T {
        match self {
            Found(val) => val,
            _ => panic!("FindEntryResult cannot get available value"),
        }
    }
}
