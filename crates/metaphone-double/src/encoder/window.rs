// Context window around the cursor
//
// Rules address letters relative to the cursor (`-2` is two letters back,
// `+3` three ahead). The deepest reads are four back (Parker's rule for GH)
// and five ahead (`HARAC` after a word-initial C). Any position outside the
// buffer reads as the placeholder, which no literal contains, so a rule
// looking off the edge of the word simply does not match.

use metaphone_core::character::{PADDING, is_vowel};

use crate::normalizer::NormalizedWord;

/// Read-only view of a word positioned at one cursor location.
pub struct Window<'a> {
    word: &'a NormalizedWord,
    cursor: usize,
    start: usize,
    end: usize,
}

impl<'a> Window<'a> {
    /// Position a window over `word`. The word must have at least one letter.
    pub fn new(word: &'a NormalizedWord, cursor: usize) -> Self {
        let start = word.start_index();
        let end = word.end_index().unwrap_or(start);
        Self {
            word,
            cursor,
            start,
            end,
        }
    }

    // -- Geometry --------------------------------------------------------------

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// Cursor is on the first letter.
    pub fn at_start(&self) -> bool {
        self.cursor == self.start
    }

    /// Cursor is on the last letter.
    pub fn at_end(&self) -> bool {
        self.cursor == self.end
    }

    /// Cursor is more than `n` letters past the first one.
    pub fn past_start(&self, n: usize) -> bool {
        self.cursor > self.start + n
    }

    pub fn slavo_germanic(&self) -> bool {
        self.word.is_slavo_germanic()
    }

    // -- Reads relative to the cursor -----------------------------------------

    /// The letter `offset` positions from the cursor.
    pub fn at(&self, offset: isize) -> char {
        self.cursor
            .checked_add_signed(offset)
            .map_or(PADDING, |i| self.word.char_at(i))
    }

    pub fn is(&self, offset: isize, c: char) -> bool {
        self.at(offset) == c
    }

    pub fn is_any(&self, offset: isize, set: &[char]) -> bool {
        set.contains(&self.at(offset))
    }

    pub fn is_vowel(&self, offset: isize) -> bool {
        is_vowel(self.at(offset))
    }

    /// True if `literal` starts `offset` positions from the cursor.
    pub fn matches(&self, offset: isize, literal: &str) -> bool {
        literal
            .chars()
            .zip(offset..)
            .all(|(c, at)| self.at(at) == c)
    }

    pub fn matches_any(&self, offset: isize, literals: &[&str]) -> bool {
        literals.iter().any(|lit| self.matches(offset, lit))
    }

    // -- Reads anchored to the word -------------------------------------------

    /// The letter `offset` positions after the first letter.
    pub fn letter(&self, offset: usize) -> char {
        self.word.char_at(self.start + offset)
    }

    pub fn first_letter(&self) -> char {
        self.letter(0)
    }

    pub fn last_letter(&self) -> char {
        self.word.char_at(self.end)
    }

    pub fn word_starts_with(&self, literal: &str) -> bool {
        self.word.matches_at(self.start, literal)
    }

    pub fn word_starts_with_any(&self, literals: &[&str]) -> bool {
        literals.iter().any(|lit| self.word_starts_with(lit))
    }

    /// True if the word ends with one of `literals`.
    pub fn word_ends_with_any(&self, literals: &[&str]) -> bool {
        literals.iter().any(|lit| {
            let len = lit.chars().count();
            (self.end + 1)
                .checked_sub(len)
                .is_some_and(|from| self.word.matches_at(from, lit))
        })
    }
}
