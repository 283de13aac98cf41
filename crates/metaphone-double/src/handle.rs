// MetaphoneHandle: reusable encoder with options and a result cache.
//
// The pure entry points in the crate root are enough for one-off calls. The
// handle is for long-lived callers (CLI loops, FFI and WASM bindings) that
// want a code length cap, strict decoding, or to avoid re-encoding the same
// names over and over.

use std::cell::RefCell;

use metaphone_core::{DecodePolicy, MetaphoneError, PhoneticCodes};

use crate::cache::{CodeCache, DEFAULT_CACHE_CAPACITY};
use crate::encoder;
use crate::normalizer::NormalizedWord;

/// Options applied by [`MetaphoneHandle`].
///
/// The default reproduces the reference algorithm exactly: lossy decoding
/// and no length cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncoderOptions {
    /// How invalid UTF-8 in byte input is treated.
    pub decode_policy: DecodePolicy,
    /// Truncate each code to at most this many characters.
    pub max_code_length: Option<usize>,
}

impl EncoderOptions {
    /// Apply the length cap to a freshly encoded result.
    fn finish(&self, mut codes: PhoneticCodes) -> PhoneticCodes {
        if let Some(max) = self.max_code_length {
            codes.truncate(max);
        }
        codes
    }
}

/// Reusable encoder handle.
///
/// Holds options and a bounded cache. The cache uses interior mutability, so
/// the handle is `Send` but not `Sync`.
pub struct MetaphoneHandle {
    options: EncoderOptions,
    /// Wrapped in `RefCell` so `&self` encode calls can fill it.
    cache: RefCell<CodeCache>,
}

impl Default for MetaphoneHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl MetaphoneHandle {
    /// Create a handle with default options and cache size.
    pub fn new() -> Self {
        Self::with_options(EncoderOptions::default())
    }

    pub fn with_options(options: EncoderOptions) -> Self {
        Self {
            options,
            cache: RefCell::new(CodeCache::new(DEFAULT_CACHE_CAPACITY)),
        }
    }

    pub fn options(&self) -> &EncoderOptions {
        &self.options
    }

    // =========================================================================
    // Encoding
    // =========================================================================

    /// Encode text. Never fails: `&str` is already valid UTF-8.
    pub fn encode(&self, text: &str) -> PhoneticCodes {
        if let Some(hit) = self.cached(text.as_bytes()) {
            return hit;
        }
        let codes = self.options.finish(encoder::encode(&NormalizedWord::new(text)));
        self.store(text.as_bytes(), &codes);
        codes
    }

    /// Encode raw bytes according to the handle's decode policy.
    ///
    /// Fails only under [`DecodePolicy::Strict`] when `bytes` is not valid
    /// UTF-8.
    pub fn encode_bytes(&self, bytes: &[u8]) -> Result<PhoneticCodes, MetaphoneError> {
        if let Some(hit) = self.cached(bytes) {
            return Ok(hit);
        }
        let word = NormalizedWord::with_policy(bytes, self.options.decode_policy)?;
        let codes = self.options.finish(encoder::encode(&word));
        self.store(bytes, &codes);
        Ok(codes)
    }

    fn cached(&self, key: &[u8]) -> Option<PhoneticCodes> {
        self.cache.borrow().get(key).cloned()
    }

    fn store(&self, key: &[u8], codes: &PhoneticCodes) {
        self.cache.borrow_mut().insert(key, codes.clone());
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    /// Cap both codes at `max` characters, or remove the cap with `None`.
    ///
    /// A cap of zero is rejected.
    pub fn set_max_code_length(&mut self, max: Option<usize>) -> Result<(), MetaphoneError> {
        if max == Some(0) {
            return Err(MetaphoneError::InvalidOption(
                "max_code_length must be at least 1".to_string(),
            ));
        }
        if self.options.max_code_length != max {
            log::debug!("max_code_length {:?} -> {:?}", self.options.max_code_length, max);
            self.options.max_code_length = max;
            self.cache.get_mut().clear();
        }
        Ok(())
    }

    pub fn set_decode_policy(&mut self, policy: DecodePolicy) {
        if self.options.decode_policy != policy {
            log::debug!("decode_policy {:?} -> {:?}", self.options.decode_policy, policy);
            self.options.decode_policy = policy;
            self.cache.get_mut().clear();
        }
    }

    /// Resize the cache, dropping its contents. Zero disables caching.
    pub fn set_cache_capacity(&mut self, capacity: usize) {
        log::debug!("cache capacity -> {capacity}");
        self.cache = RefCell::new(CodeCache::new(capacity));
    }

    /// Number of results currently cached.
    pub fn cached_len(&self) -> usize {
        self.cache.borrow().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_handle_matches_pure_entry_point() {
        let handle = MetaphoneHandle::new();
        for word in ["richard", "Jose", "cambrillo", "garçon", ""] {
            assert_eq!(handle.encode(word), crate::double_metaphone(word));
        }
    }

    #[test]
    fn cache_is_filled_and_reused() {
        let handle = MetaphoneHandle::new();
        assert_eq!(handle.cached_len(), 0);
        let first = handle.encode("schmidt");
        assert_eq!(handle.cached_len(), 1);
        let second = handle.encode("schmidt");
        assert_eq!(first, second);
        assert_eq!(handle.cached_len(), 1);

        // bytes share the text key
        assert_eq!(handle.encode_bytes(b"schmidt").unwrap(), first);
        assert_eq!(handle.cached_len(), 1);
    }

    #[test]
    fn max_code_length_truncates_and_recollapses() {
        let mut handle = MetaphoneHandle::new();
        handle.set_max_code_length(Some(2)).unwrap();
        let codes = handle.encode("richard");
        assert_eq!(codes.primary(), "RX");
        assert_eq!(codes.secondary(), "RK");

        // KMPRL / KMPR collapse once both are cut to four
        handle.set_max_code_length(Some(4)).unwrap();
        let codes = handle.encode("cambrillo");
        assert_eq!(codes.primary(), "KMPR");
        assert_eq!(codes.secondary(), "");
    }

    #[test]
    fn zero_max_code_length_is_rejected() {
        let mut handle = MetaphoneHandle::new();
        let err = handle.set_max_code_length(Some(0)).unwrap_err();
        assert!(matches!(err, MetaphoneError::InvalidOption(_)));
        assert_eq!(handle.options().max_code_length, None);
    }

    #[test]
    fn changing_options_clears_cache() {
        let mut handle = MetaphoneHandle::new();
        handle.encode("richard");
        assert_eq!(handle.cached_len(), 1);
        handle.set_max_code_length(Some(3)).unwrap();
        assert_eq!(handle.cached_len(), 0);
        assert_eq!(handle.encode("richard").primary(), "RXR");

        handle.set_decode_policy(DecodePolicy::Strict);
        assert_eq!(handle.cached_len(), 0);
    }

    #[test]
    fn strict_policy_rejects_invalid_bytes() {
        let mut handle = MetaphoneHandle::new();
        assert_eq!(handle.encode_bytes(b"ma\xffry").unwrap().primary(), "MR");

        handle.set_decode_policy(DecodePolicy::Strict);
        let err = handle.encode_bytes(b"ma\xffry").unwrap_err();
        assert_eq!(err, MetaphoneError::InvalidUtf8 { valid_up_to: 2 });
        assert_eq!(handle.encode_bytes(b"mary").unwrap().primary(), "MR");
    }

    #[test]
    fn disabled_cache_still_encodes() {
        let mut handle = MetaphoneHandle::new();
        handle.set_cache_capacity(0);
        assert_eq!(handle.encode("bob").primary(), "PP");
        assert_eq!(handle.cached_len(), 0);
    }
}
