// Input normalization: raw text or bytes -> padded upper-case letter buffer
//
// The encoder never looks at the caller's text directly. It reads a buffer
// of upper-case base letters framed by placeholder characters, so every rule
// can peek a few positions behind or ahead of the cursor without a bounds
// check of its own.

use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use metaphone_core::MetaphoneError;
use metaphone_core::character::{
    LEADING_PADDING, PADDING, TRAILING_PADDING, is_cedilla, is_slavo_germanic,
};
use metaphone_core::enums::DecodePolicy;

/// A word prepared for encoding.
///
/// Every intermediate stage is kept so callers can inspect what the encoder
/// actually saw. The value is immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedWord {
    original: Vec<u8>,
    decoded: String,
    normalized: String,
    upper: String,
    /// `upper` as characters, framed by placeholders.
    buffer: Vec<char>,
    /// Number of characters in `upper`.
    len: usize,
    slavo_germanic: bool,
}

impl NormalizedWord {
    /// Normalize text that is already valid UTF-8.
    pub fn new(text: &str) -> Self {
        Self::build(text.as_bytes().to_vec(), text.to_owned())
    }

    /// Normalize raw bytes, silently dropping any sequence that is not valid
    /// UTF-8.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let decoded = decode_lossy(bytes).into_owned();
        Self::build(bytes.to_vec(), decoded)
    }

    /// Normalize raw bytes according to `policy`.
    ///
    /// Only [`DecodePolicy::Strict`] can fail, and only on invalid UTF-8.
    pub fn with_policy(bytes: &[u8], policy: DecodePolicy) -> Result<Self, MetaphoneError> {
        match policy {
            DecodePolicy::Lossy => Ok(Self::from_bytes(bytes)),
            DecodePolicy::Strict => match std::str::from_utf8(bytes) {
                Ok(text) => Ok(Self::new(text)),
                Err(e) => Err(MetaphoneError::InvalidUtf8 {
                    valid_up_to: e.valid_up_to(),
                }),
            },
        }
    }

    fn build(original: Vec<u8>, decoded: String) -> Self {
        let normalized = strip_diacritics(&decoded);
        let upper = normalized.to_uppercase();

        let mut buffer = Vec::with_capacity(upper.len() + LEADING_PADDING + TRAILING_PADDING);
        buffer.extend(std::iter::repeat_n(PADDING, LEADING_PADDING));
        buffer.extend(upper.chars());
        let len = buffer.len() - LEADING_PADDING;
        buffer.extend(std::iter::repeat_n(PADDING, TRAILING_PADDING));

        let slavo_germanic = is_slavo_germanic(&upper);

        Self {
            original,
            decoded,
            normalized,
            upper,
            buffer,
            len,
            slavo_germanic,
        }
    }

    // =========================================================================
    // Stages
    // =========================================================================

    /// The input exactly as given.
    pub fn original(&self) -> &[u8] {
        &self.original
    }

    /// The input decoded as text.
    pub fn decoded(&self) -> &str {
        &self.decoded
    }

    /// Decoded text with cedillas rewritten and diacritics removed.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Normalized text in upper case.
    pub fn upper(&self) -> &str {
        &self.upper
    }

    /// The padded buffer as a string, e.g. `--NAIVE------`.
    pub fn buffer(&self) -> String {
        self.buffer.iter().collect()
    }

    /// The padded buffer as characters.
    pub fn buffer_chars(&self) -> &[char] {
        &self.buffer
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Number of letters (characters of [`upper`](Self::upper)).
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when there are no letters at all.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Buffer position of the first letter.
    pub fn start_index(&self) -> usize {
        LEADING_PADDING
    }

    /// Buffer position of the last letter, or `None` for an empty word.
    pub fn end_index(&self) -> Option<usize> {
        (self.len > 0).then(|| LEADING_PADDING + self.len - 1)
    }

    /// Whether the word looks Slavic or Germanic (contains `W`, `K`, `CZ` or
    /// `WITZ`).
    pub fn is_slavo_germanic(&self) -> bool {
        self.slavo_germanic
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Character at an absolute buffer position. Positions past either end of
    /// the buffer read as the placeholder.
    #[inline]
    pub fn char_at(&self, index: usize) -> char {
        self.buffer.get(index).copied().unwrap_or(PADDING)
    }

    /// True if `literal` occurs in the buffer starting at absolute `index`.
    pub fn matches_at(&self, index: usize, literal: &str) -> bool {
        literal
            .chars()
            .enumerate()
            .all(|(i, c)| index.checked_add(i).is_some_and(|j| self.char_at(j) == c))
    }

    /// `length` characters starting `offset` letters after the first letter.
    ///
    /// Reads that run past the word return placeholders, so the result
    /// always has exactly `length` characters.
    pub fn letters(&self, offset: usize, length: usize) -> String {
        let start = LEADING_PADDING + offset;
        (start..start + length).map(|i| self.char_at(i)).collect()
    }

    /// The letter `offset` positions after the first letter.
    pub fn letter(&self, offset: usize) -> char {
        self.char_at(LEADING_PADDING + offset)
    }
}

/// Decode bytes as UTF-8, dropping (not replacing) invalid sequences.
pub fn decode_lossy(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => Cow::Owned(bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()),
    }
}

/// Rewrite cedillas to `s`, then decompose and drop all combining marks,
/// spacing and enclosing ones included.
fn strip_diacritics(text: &str) -> String {
    text.chars()
        .map(|c| if is_cedilla(c) { 's' } else { c })
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_word_stages() {
        let w = NormalizedWord::new("stupendous");
        assert_eq!(w.original(), b"stupendous");
        assert_eq!(w.decoded(), "stupendous");
        assert_eq!(w.normalized(), "stupendous");
        assert_eq!(w.upper(), "STUPENDOUS");
        assert_eq!(w.len(), 10);
        assert_eq!(w.buffer(), "--STUPENDOUS------");
        assert_eq!(w.start_index(), 2);
        assert_eq!(w.end_index(), Some(11));
    }

    #[test]
    fn precomposed_diaeresis_is_stripped() {
        let w = NormalizedWord::new("na\u{00EF}ve");
        assert_eq!(w.original(), "naïve".as_bytes());
        assert_eq!(w.decoded(), "na\u{00EF}ve");
        assert_eq!(w.normalized(), "naive");
        assert_eq!(w.upper(), "NAIVE");
        assert_eq!(w.len(), 5);
        assert_eq!(w.buffer(), "--NAIVE------");
    }

    #[test]
    fn combining_diaeresis_matches_plain() {
        let combining = NormalizedWord::new("nai\u{0308}ve");
        let plain = NormalizedWord::new("naive");
        assert_eq!(combining.buffer(), plain.buffer());
        assert_eq!(combining.len(), 5);
    }

    #[test]
    fn spacing_and_enclosing_marks_are_dropped() {
        let spacing = NormalizedWord::new("arnow\u{093e}");
        assert_eq!(spacing.upper(), "ARNOW");
        assert_eq!(spacing.end_index(), Some(6));

        let enclosing = NormalizedWord::new("bo\u{20dd}b");
        assert_eq!(enclosing.buffer(), NormalizedWord::new("bob").buffer());
    }

    #[test]
    fn cedilla_becomes_s() {
        assert_eq!(NormalizedWord::new("garçon").upper(), "GARSON");
        assert_eq!(NormalizedWord::new("GARÇON").upper(), "GARSON");
        assert_eq!(NormalizedWord::new("Ça").normalized(), "sa");
    }

    #[test]
    fn other_diacritics_fall_back_to_base_letter() {
        assert_eq!(NormalizedWord::new("andestādītu").upper(), "ANDESTADITU");
        assert_eq!(NormalizedWord::new("Bartoš").upper(), "BARTOS");
        assert_eq!(NormalizedWord::new("Müller").upper(), "MULLER");
    }

    #[test]
    fn sharp_s_uppercases_to_two_letters() {
        let w = NormalizedWord::new("straße");
        assert_eq!(w.upper(), "STRASSE");
        assert_eq!(w.len(), 7);
    }

    #[test]
    fn empty_word() {
        let w = NormalizedWord::new("");
        assert!(w.is_empty());
        assert_eq!(w.end_index(), None);
        assert_eq!(w.buffer(), "--------");
        assert_eq!(w.letters(0, 2), "--");
    }

    #[test]
    fn invalid_bytes_are_dropped() {
        let w = NormalizedWord::from_bytes(b"ma\xffr\xc3y");
        assert_eq!(w.decoded(), "mary");
        assert_eq!(w.original(), b"ma\xffr\xc3y");
    }

    #[test]
    fn valid_bytes_decode_unchanged() {
        let w = NormalizedWord::from_bytes("français".as_bytes());
        assert_eq!(w.decoded(), "français");
        assert_eq!(w.upper(), "FRANSAIS");
    }

    #[test]
    fn strict_policy_rejects_invalid_bytes() {
        let err = NormalizedWord::with_policy(b"ab\xffc", DecodePolicy::Strict).unwrap_err();
        assert_eq!(err, MetaphoneError::InvalidUtf8 { valid_up_to: 2 });

        let ok = NormalizedWord::with_policy(b"abc", DecodePolicy::Strict).unwrap();
        assert_eq!(ok.upper(), "ABC");

        let lossy = NormalizedWord::with_policy(b"ab\xffc", DecodePolicy::Lossy).unwrap();
        assert_eq!(lossy.upper(), "ABC");
    }

    #[test]
    fn slavo_germanic_flag() {
        assert!(NormalizedWord::new("Berkowitz").is_slavo_germanic());
        assert!(NormalizedWord::new("Czeck").is_slavo_germanic());
        assert!(!NormalizedWord::new("Bob").is_slavo_germanic());
    }

    #[test]
    fn letter_accessors() {
        let w = NormalizedWord::new("naïve");
        assert_eq!(w.letter(0), 'N');
        assert_eq!(w.letters(0, 1), "N");
        assert_eq!(w.letters(0, 2), "NA");
        assert_eq!(w.letters(0, 3), "NAI");
        assert_eq!(w.letter(3), 'V');
    }

    #[test]
    fn reads_beyond_buffer_return_padding() {
        let w = NormalizedWord::new("ab");
        assert_eq!(w.char_at(0), PADDING);
        assert_eq!(w.char_at(w.buffer_chars().len() + 100), PADDING);
        assert_eq!(w.letters(1, 10), "B---------");
        assert!(!w.matches_at(usize::MAX, "AB"));
    }

    #[test]
    fn matches_at_reads_literals() {
        let w = NormalizedWord::new("van dyke");
        assert!(w.matches_at(w.start_index(), "VAN "));
        assert!(!w.matches_at(w.start_index(), "VON "));
    }
}
