use crate::models::MappedItem;
use crate::types::CandidateList;
use log::debug;

/// In-memory ordered list of original↔encoded pairs for exceptional item
/// names (names whose canonicalization is lossy).
///
/// Lookup scans entries in insertion order and returns the first match, so
/// precedence between colliding encodings is FIFO: once a name's encoding is
/// recorded, a later name that canonicalizes to an overlapping token can no
/// longer be reached by reverse lookup.
pub struct MappingCache {
    entries: Vec<MappedItem>,
}

impl MappingCache {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Records a new entry. A no-op when an entry with the same
    /// (case-sensitive) `item_name` already exists, keeping insertion
    /// idempotent.
    pub fn record(&mut self, item_name: &str, candidates: CandidateList) {
        if self.entries.iter().any(|e| e.item_name == item_name) {
            debug!("Cache already holds an entry for {:?}; skipping", item_name);
            return;
        }

        self.entries.push(MappedItem::new(item_name, candidates));
    }

    /// Finds the first entry whose `item_name` or any candidate equals
    /// `query`, compared case-insensitively.
    pub fn find(&self, query: &str) -> Option<&MappedItem> {
        if query.is_empty() {
            return None;
        }

        let lowered = query.to_lowercase();

        self.entries.iter().find(|entry| {
            entry.item_name.to_lowercase() == lowered
                || entry
                    .candidates
                    .iter()
                    .any(|candidate| candidate.to_lowercase() == lowered)
        })
    }

    pub fn entries(&self) -> &[MappedItem] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replaces the cache contents wholesale, e.g. with records loaded from
    /// a persisted map file.
    pub fn restore(&mut self, entries: Vec<MappedItem>) {
        self.entries = entries;
    }
}

impl Default for MappingCache {
    fn default() -> Self {
        Self::new()
    }
}
