//! Double Metaphone phonetic encoder.
//!
//! Encodes a name or word into a primary and an optional secondary phonetic
//! code, so that spellings which sound alike can be matched.
//!
//! # Architecture
//!
//! - [`normalizer`] -- raw text or bytes to a padded, diacritic-free buffer
//! - [`encoder`] -- cursor-driven rule engine over that buffer
//! - [`matching`] -- comparing words and phrases by their codes
//! - [`handle`] -- reusable encoder with options and a result cache
//! - [`index`] -- in-memory phonetic multimap for search and deduplication
//!
//! ```
//! let (primary, secondary) = metaphone_double::phonetic_codes("richard");
//! assert_eq!(primary, "RXRT");
//! assert_eq!(secondary, "RKRT");
//! ```

pub mod encoder;
pub mod matching;
pub mod normalizer;

#[cfg(feature = "handle")]
pub mod cache;
#[cfg(feature = "handle")]
pub mod handle;
#[cfg(feature = "index")]
pub mod index;

pub use metaphone_core::{DecodePolicy, MatchStrength, MetaphoneError, PhoneticCodes};
pub use normalizer::NormalizedWord;

#[cfg(feature = "handle")]
pub use handle::{EncoderOptions, MetaphoneHandle};
#[cfg(feature = "index")]
pub use index::PhoneticIndex;
pub use matching::{phonetic_match, phrase_codes, phrase_similarity};

/// Encode `text` into `(primary, secondary)`.
///
/// The secondary code is empty when it would equal the primary one. Empty or
/// whitespace-only input gives `("", "")`.
pub fn phonetic_codes(text: &str) -> (String, String) {
    double_metaphone(text).into_pair()
}

/// Encode `text` into a [`PhoneticCodes`] pair.
pub fn double_metaphone(text: &str) -> PhoneticCodes {
    encoder::encode(&NormalizedWord::new(text))
}

/// Encode raw bytes, dropping any sequence that is not valid UTF-8.
pub fn double_metaphone_bytes(bytes: &[u8]) -> PhoneticCodes {
    encoder::encode(&NormalizedWord::from_bytes(bytes))
}
