// Bounded result cache for MetaphoneHandle

use hashbrown::HashMap;

use metaphone_core::PhoneticCodes;

/// Default number of entries kept by a new handle.
pub const DEFAULT_CACHE_CAPACITY: usize = 4096;

/// Cache of encoded results keyed by the raw input bytes.
///
/// Text and byte inputs share one key space: `encode(s)` and
/// `encode_bytes(s.as_bytes())` always agree, so they can share entries.
///
/// There is no eviction policy. When the cache is full it is cleared before
/// the next insert. A capacity of 0 disables caching entirely.
#[derive(Debug, Clone, Default)]
pub struct CodeCache {
    capacity: usize,
    entries: HashMap<Box<[u8]>, PhoneticCodes>,
}

impl CodeCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &[u8]) -> Option<&PhoneticCodes> {
        self.entries.get(key)
    }

    /// Store a result. Does nothing when caching is disabled.
    pub fn insert(&mut self, key: &[u8], codes: PhoneticCodes) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() >= self.capacity && !self.entries.contains_key(key) {
            log::debug!("code cache full ({} entries), clearing", self.entries.len());
            self.entries.clear();
        }
        self.entries.insert(key.into(), codes);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
