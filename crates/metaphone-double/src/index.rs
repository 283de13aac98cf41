// In-memory phonetic index for deduplication and search

use hashbrown::{HashMap, HashSet};

use metaphone_core::{MatchStrength, PhoneticCodes};

use crate::handle::MetaphoneHandle;

struct Entry<V> {
    key: String,
    value: V,
    codes: PhoneticCodes,
}

/// Multimap from phonetic code to the entries filed under it.
///
/// Each entry is filed under its primary code and, if present, its
/// secondary code. Keys are encoded with the index's own
/// [`MetaphoneHandle`], so a length cap set on the handle applies to both
/// inserts and lookups.
pub struct PhoneticIndex<V> {
    handle: MetaphoneHandle,
    entries: Vec<Entry<V>>,
    buckets: HashMap<String, Vec<usize>>,
}

impl<V> Default for PhoneticIndex<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> PhoneticIndex<V> {
    pub fn new() -> Self {
        Self::with_handle(MetaphoneHandle::new())
    }

    /// Build an index that encodes with `handle`.
    pub fn with_handle(handle: MetaphoneHandle) -> Self {
        Self {
            handle,
            entries: Vec::new(),
            buckets: HashMap::new(),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add an entry. Keys without any code (empty or non-Latin text) are
    /// stored but can never be found.
    pub fn insert(&mut self, key: &str, value: V) {
        let codes = self.handle.encode(key);
        let id = self.entries.len();
        for code in codes.codes() {
            self.buckets.entry(code.to_string()).or_default().push(id);
        }
        self.entries.push(Entry {
            key: key.to_string(),
            value,
            codes,
        });
    }

    /// Every entry sharing a code with `query`, strongest match first.
    ///
    /// Each entry appears once; entries of equal strength keep insertion
    /// order.
    pub fn lookup(&self, query: &str) -> Vec<(&str, &V, MatchStrength)> {
        let query_codes = self.handle.encode(query);

        let mut seen = HashSet::new();
        let mut hits: Vec<(usize, MatchStrength)> = Vec::new();
        for code in query_codes.codes() {
            let Some(ids) = self.buckets.get(code) else {
                continue;
            };
            for &id in ids {
                if !seen.insert(id) {
                    continue;
                }
                if let Some(strength) = query_codes.match_strength(&self.entries[id].codes) {
                    hits.push((id, strength));
                }
            }
        }
        hits.sort_by_key(|&(id, strength)| (strength, id));

        hits.into_iter()
            .map(|(id, strength)| {
                let entry = &self.entries[id];
                (entry.key.as_str(), &entry.value, strength)
            })
            .collect()
    }

    /// Keys grouped by primary code, skipping codes held by a single key.
    ///
    /// Groups are ordered by their first member's insertion; keys inside a
    /// group keep insertion order.
    pub fn groups(&self) -> Vec<Vec<&str>> {
        let mut slot_of: HashMap<&str, usize> = HashMap::new();
        let mut groups: Vec<Vec<&str>> = Vec::new();
        for entry in &self.entries {
            let primary = entry.codes.primary();
            if primary.is_empty() {
                continue;
            }
            let slot = *slot_of.entry(primary).or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[slot].push(entry.key.as_str());
        }
        groups.retain(|g| g.len() > 1);
        groups
    }
}
