// Phonetic comparison of words and phrases

use metaphone_core::{MatchStrength, PhoneticCodes};

use crate::double_metaphone;

/// How strongly two words match phonetically, or `None` if they share no
/// code.
pub fn phonetic_match(a: &str, b: &str) -> Option<MatchStrength> {
    double_metaphone(a).match_strength(&double_metaphone(b))
}

/// Encode each whitespace separated word of `text`.
pub fn phrase_codes(text: &str) -> Vec<PhoneticCodes> {
    text.split_whitespace().map(double_metaphone).collect()
}

/// Similarity of two phrases in `[0, 1]`.
///
/// A word of `a` counts as matched when it shares a code with any word of
/// `b`. The score is the number of matched words over the longer phrase's
/// word count, so extra words on either side lower it.
pub fn phrase_similarity(a: &str, b: &str) -> f32 {
    similarity(&phrase_codes(a), &phrase_codes(b))
}

/// [`phrase_similarity`] over already encoded phrases.
pub fn similarity(a: &[PhoneticCodes], b: &[PhoneticCodes]) -> f32 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let matched = a
        .iter()
        .filter(|word| b.iter().any(|other| word.intersects(other)))
        .count();
    matched as f32 / a.len().max(b.len()) as f32
}
