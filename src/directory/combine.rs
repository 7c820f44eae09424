//! Set-style combination of two directories.
//!
//! Combining overlapping directories routinely produces duplicate or missing entries.
//! These are expected outcomes here, so nothing in this module returns an error.

use std::collections::BTreeMap;

use crate::types::{Entry, EntryId};

use super::ContactIndex;

impl ContactIndex {
    /// A new index holding every entry of `self` followed by every entry of `other`.
    ///
    /// Degenerate entries and entries already present are skipped; on overlap the
    /// receiver's copy is the one kept. Neither input is modified.
    pub fn merge(&self, other: &ContactIndex) -> ContactIndex {
        let mut merged = self.clone();
        let skipped = merged.absorb(other.iter().cloned());
        log::debug!(
            "Merged {} + {} entries into {} ({} skipped)",
            self.len(),
            other.len(),
            merged.len(),
            skipped
        );
        merged
    }

    /// A new index holding the entries of `self` that are not in `other`.
    ///
    /// Entries of `other` absent from `self` are ignored. The orderings of the result
    /// are built once from the surviving entries.
    pub fn difference(&self, other: &ContactIndex) -> ContactIndex {
        let retained: BTreeMap<EntryId, Entry> = self
            .stored()
            .iter()
            .filter(|(_, entry)| !other.contains(entry))
            .map(|(id, entry)| (*id, entry.clone()))
            .collect();
        log::debug!(
            "Difference removed {} of {} entries",
            self.len() - retained.len(),
            self.len()
        );
        ContactIndex::from_parts(retained, self.next_id())
    }

    /// Add every entry that can be stored, returning how many were skipped.
    fn absorb<I: IntoIterator<Item = Entry>>(&mut self, entries: I) -> usize {
        let mut skipped = 0;
        for entry in entries {
            if let Err(e) = self.add(entry) {
                log::trace!("Skipping entry: {}", e);
                skipped += 1;
            }
        }
        skipped
    }
}

impl Extend<Entry> for ContactIndex {
    /// Lenient bulk insertion: invalid and duplicate entries are dropped.
    fn extend<I: IntoIterator<Item = Entry>>(&mut self, iter: I) {
        self.absorb(iter);
    }
}

impl FromIterator<Entry> for ContactIndex {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        let mut index = ContactIndex::new();
        index.extend(iter);
        index
    }
}
