//! Name index: maps each lower-cased name to the ids of the entries carrying it.

use std::collections::BTreeMap;
use std::ops::Bound;

use crate::types::{Entry, EntryId, NameField};

/// Sorted mapping from lower-cased name to the ids sharing that name.
///
/// Buckets are kept in ascending id order, which is the order entries were inserted.
/// Empty buckets are dropped eagerly.
#[derive(Debug, Clone)]
pub struct NameIndex {
    field: NameField,
    index: BTreeMap<String, Vec<EntryId>>,
}

impl NameIndex {
    /// Create a new, empty index keyed by `field`.
    pub fn new(field: NameField) -> Self {
        Self {
            field,
            index: BTreeMap::new(),
        }
    }

    /// The name this index is keyed by.
    pub fn field(&self) -> NameField {
        self.field
    }

    /// Get all ids filed under an exact (already lower-cased) key.
    pub fn get(&self, key: &str) -> &[EntryId] {
        self.index.get(key).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// The bucket `entry` belongs to.
    pub fn bucket_for(&self, entry: &Entry) -> &[EntryId] {
        self.get(&self.field.key(entry))
    }

    /// All ids in ascending key order, ties in insertion order.
    pub fn iter_ids(&self) -> impl Iterator<Item = EntryId> + '_ {
        self.index.values().flat_map(|ids| ids.iter().copied())
    }

    /// Ids whose key starts with `prefix` (already lower-cased), in ascending key order.
    ///
    /// Only the contiguous key range sharing the prefix is visited.
    pub fn prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = EntryId> + 'a {
        self.index
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(move |(key, _)| key.starts_with(prefix))
            .flat_map(|(_, ids)| ids.iter().copied())
    }

    /// Rebuild the entire index from `(id, entry)` pairs.
    pub fn rebuild<'a, I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (EntryId, &'a Entry)>,
    {
        self.index.clear();
        for (id, entry) in entries {
            self.index.entry(self.field.key(entry)).or_default().push(id);
        }
        for list in self.index.values_mut() {
            list.sort_unstable();
        }
    }

    /// Incrementally add an entry.
    pub fn add_entry(&mut self, id: EntryId, entry: &Entry) {
        let list = self.index.entry(self.field.key(entry)).or_default();
        let pos = list.binary_search(&id).unwrap_or_else(|p| p);
        list.insert(pos, id);
    }

    /// Remove an entry. Returns whether the id was present in its bucket.
    pub fn remove_entry(&mut self, id: EntryId, entry: &Entry) -> bool {
        let key = self.field.key(entry);
        let Some(list) = self.index.get_mut(&key) else {
            return false;
        };
        let removed = match list.binary_search(&id) {
            Ok(pos) => {
                list.remove(pos);
                true
            }
            Err(_) => false,
        };
        if list.is_empty() {
            self.index.remove(&key);
        }
        removed
    }

    /// Clear the index.
    pub fn clear(&mut self) {
        self.index.clear();
    }

    /// Number of distinct keys.
    pub fn bucket_count(&self) -> usize {
        self.index.len()
    }

    /// Number of total ids across all buckets.
    pub fn len(&self) -> usize {
        self.index.values().map(|v| v.len()).sum()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn bucket_mut(&mut self, key: &str) -> Option<&mut Vec<EntryId>> {
        self.index.get_mut(key)
    }

    /// Get a reference to the underlying map.
    pub fn inner(&self) -> &BTreeMap<String, Vec<EntryId>> {
        &self.index
    }
}
