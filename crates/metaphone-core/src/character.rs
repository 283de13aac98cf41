// Character classification for the phonetic rule tables.
//
// Rule code works on upper-cased, diacritic-stripped text, so every helper
// here expects upper-case input and compares against plain ASCII letters.

/// Letters treated as vowels by the rule tables. `Y` counts as a vowel.
pub const VOWELS: &[char] = &['A', 'E', 'I', 'O', 'U', 'Y'];

/// Placeholder written around a word so that rule lookups never leave the
/// buffer. No rule compares against it.
pub const PADDING: char = '-';

/// Number of placeholders before the first letter.
pub const LEADING_PADDING: usize = 2;

/// Number of placeholders after the last letter.
pub const TRAILING_PADDING: usize = 6;

/// Word-initial two-letter clusters whose first letter is silent.
pub const SILENT_STARTERS: &[&str] = &["GN", "KN", "PN", "WR", "PS"];

/// Check whether an upper-case character is a vowel (`A E I O U Y`).
#[inline]
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// Cedilla letters are rewritten before decomposition: `ç` is pronounced
/// like `s`, and stripping the cedilla would leave a hard `c`.
#[inline]
pub fn is_cedilla(c: char) -> bool {
    matches!(c, '\u{00E7}' | '\u{00C7}')
}

/// Heuristic for Slavic or Germanic origin.
///
/// True when the upper-cased word contains `W`, `K`, `CZ` or `WITZ`.
pub fn is_slavo_germanic(upper: &str) -> bool {
    upper.contains('W') || upper.contains('K') || upper.contains("CZ") || upper.contains("WITZ")
}

/// Coarse category of a buffer character, used to dispatch to a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterClass {
    /// One of `A E I O U Y`.
    Vowel,
    /// A consonant letter with its own rule cascade.
    Consonant(char),
    /// A space separating the parts of a compound name.
    Space,
    /// Anything else: digits, punctuation, padding, non-Latin letters.
    Other,
}

/// Classify one upper-case buffer character.
pub fn classify(c: char) -> LetterClass {
    match c {
        'A' | 'E' | 'I' | 'O' | 'U' | 'Y' => LetterClass::Vowel,
        'B' | 'C' | 'D' | 'F' | 'G' | 'H' | 'J' | 'K' | 'L' | 'M' | 'N' | 'P' | 'Q' | 'R'
        | 'S' | 'T' | 'V' | 'W' | 'X' | 'Z' => LetterClass::Consonant(c),
        ' ' => LetterClass::Space,
        _ => LetterClass::Other,
    }
}
