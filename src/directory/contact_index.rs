//! Core directory structure: stored entries plus first/last name orderings.

use std::collections::{BTreeMap, HashSet};

use crate::index::NameIndex;
use crate::types::{fold_case, ContactError, ContactResult, Entry, EntryId, NameField};

/// In-memory contact directory, addressable by first and last name.
///
/// Every stored entry is filed in exactly one bucket of each ordering, keyed by its
/// own lower-cased name. Mutation goes through [`ContactIndex::add`] and
/// [`ContactIndex::remove`], which keep both orderings in step with the store.
#[derive(Debug, Clone)]
pub struct ContactIndex {
    /// All entries, keyed by id. Ascending id is insertion order.
    entries: BTreeMap<EntryId, Entry>,
    /// Next id to hand out.
    next_id: EntryId,
    /// Ordering by lower-cased first name.
    by_first: NameIndex,
    /// Ordering by lower-cased last name.
    by_last: NameIndex,
}

impl ContactIndex {
    /// Create a new empty index.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            next_id: 0,
            by_first: NameIndex::new(NameField::First),
            by_last: NameIndex::new(NameField::Last),
        }
    }

    /// Create from an already-validated store. Both orderings are rebuilt once.
    pub(crate) fn from_parts(entries: BTreeMap<EntryId, Entry>, next_id: EntryId) -> Self {
        let mut index = Self {
            entries,
            next_id,
            by_first: NameIndex::new(NameField::First),
            by_last: NameIndex::new(NameField::Last),
        };
        index.rebuild_indexes();
        index
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get an entry by id.
    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.get(&id)
    }

    /// All entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.entries.values()
    }

    /// All `(id, entry)` pairs in insertion order.
    pub fn iter_with_ids(&self) -> impl Iterator<Item = (EntryId, &Entry)> + '_ {
        self.entries.iter().map(|(id, entry)| (*id, entry))
    }

    /// Find the id of a structurally equal stored entry.
    ///
    /// Checks the first-name bucket, then the last-name bucket.
    pub fn lookup(&self, entry: &Entry) -> Option<EntryId> {
        self.scan_bucket(&self.by_first, entry)
            .or_else(|| self.scan_bucket(&self.by_last, entry))
    }

    /// Whether a structurally equal entry is stored.
    pub fn contains(&self, entry: &Entry) -> bool {
        self.lookup(entry).is_some()
    }

    fn scan_bucket(&self, index: &NameIndex, entry: &Entry) -> Option<EntryId> {
        index
            .bucket_for(entry)
            .iter()
            .copied()
            .find(|id| self.entries.get(id) == Some(entry))
    }

    /// Add an entry, returning its assigned id.
    pub fn add(&mut self, entry: Entry) -> ContactResult<EntryId> {
        entry.validate()?;
        if self.contains(&entry) {
            return Err(ContactError::Duplicate(entry));
        }

        let id = self.next_id;
        self.next_id += 1;

        self.by_first.add_entry(id, &entry);
        self.by_last.add_entry(id, &entry);
        log::debug!("Added entry {} ({})", id, entry);
        self.entries.insert(id, entry);

        Ok(id)
    }

    /// Remove a structurally equal entry, returning the stored copy.
    pub fn remove(&mut self, entry: &Entry) -> ContactResult<Entry> {
        let id = self
            .lookup(entry)
            .ok_or_else(|| ContactError::NotFound(entry.clone()))?;
        let removed = self
            .entries
            .remove(&id)
            .ok_or_else(|| ContactError::NotFound(entry.clone()))?;

        self.by_first.remove_entry(id, &removed);
        self.by_last.remove_entry(id, &removed);
        log::debug!("Removed entry {} ({})", id, removed);

        Ok(removed)
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.by_first.clear();
        self.by_last.clear();
    }

    /// All entries by ascending lower-cased first name, ties in insertion order.
    pub fn sorted_by_first_name(&self) -> Vec<&Entry> {
        self.resolve(self.by_first.iter_ids())
    }

    /// All entries by ascending lower-cased last name, ties in insertion order.
    pub fn sorted_by_last_name(&self) -> Vec<&Entry> {
        self.resolve(self.by_last.iter_ids())
    }

    /// All entries ordered by `field`.
    pub fn sorted_by(&self, field: NameField) -> Vec<&Entry> {
        match field {
            NameField::First => self.sorted_by_first_name(),
            NameField::Last => self.sorted_by_last_name(),
        }
    }

    /// Case-insensitive prefix search over first and last names.
    ///
    /// First-name matches come first in first-name order, followed by entries that
    /// match only on last name in last-name order. An empty query matches everything.
    pub fn find(&self, query: &str) -> Vec<&Entry> {
        let prefix = fold_case(query);
        let mut seen: HashSet<EntryId> = HashSet::new();
        let mut results = Vec::new();

        for id in self.by_first.prefix(&prefix) {
            if let Some(entry) = self.entries.get(&id) {
                seen.insert(id);
                results.push(entry);
            }
        }
        for id in self.by_last.prefix(&prefix) {
            if seen.contains(&id) {
                continue;
            }
            if let Some(entry) = self.entries.get(&id) {
                results.push(entry);
            }
        }

        results
    }

    fn resolve(&self, ids: impl Iterator<Item = EntryId>) -> Vec<&Entry> {
        ids.filter_map(|id| self.entries.get(&id)).collect()
    }

    /// Rebuild both orderings from the store.
    pub(crate) fn rebuild_indexes(&mut self) {
        self.by_first
            .rebuild(self.entries.iter().map(|(id, entry)| (*id, entry)));
        self.by_last
            .rebuild(self.entries.iter().map(|(id, entry)| (*id, entry)));
    }

    /// Check that the store and both orderings agree.
    ///
    /// Holds iff no stored entry is degenerate or duplicated, each stored id sits in
    /// exactly one bucket of each ordering under its own key, every bucket is in
    /// ascending id order, and no bucket holds an id missing from the store.
    pub fn is_consistent(&self) -> bool {
        let mut distinct: HashSet<&Entry> = HashSet::with_capacity(self.entries.len());
        for entry in self.entries.values() {
            if !entry.is_valid() || !distinct.insert(entry) {
                return false;
            }
        }

        [&self.by_first, &self.by_last].iter().all(|index| {
            index.len() == self.entries.len()
                && index.inner().iter().all(|(key, ids)| {
                    ids.windows(2).all(|w| w[0] < w[1])
                        && ids.iter().all(|id| {
                            self.entries
                                .get(id)
                                .is_some_and(|entry| index.field().key(entry) == *key)
                        })
                })
                && self
                    .entries
                    .iter()
                    .all(|(id, entry)| index.bucket_for(entry).binary_search(id).is_ok())
        })
    }

    /// Get the first-name ordering.
    pub fn first_name_index(&self) -> &NameIndex {
        &self.by_first
    }

    /// Get the last-name ordering.
    pub fn last_name_index(&self) -> &NameIndex {
        &self.by_last
    }

    /// The id the next successful `add` will assign.
    pub(crate) fn next_id(&self) -> EntryId {
        self.next_id
    }

    pub(crate) fn stored(&self) -> &BTreeMap<EntryId, Entry> {
        &self.entries
    }
}

impl Default for ContactIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// Indexes are equal when they hold the same entries in the same insertion order.
impl PartialEq for ContactIndex {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for ContactIndex {}
