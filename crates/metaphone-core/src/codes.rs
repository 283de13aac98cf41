// Phonetic code pair: the result of encoding one word

use std::fmt;

use crate::enums::MatchStrength;

/// The primary and secondary phonetic codes of a word.
///
/// The secondary code is empty whenever it would equal the primary one, so
/// a non-empty secondary always denotes a genuinely different reading.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PhoneticCodes {
    primary: String,
    secondary: String,
}

impl PhoneticCodes {
    /// Build a code pair, clearing the secondary code if it equals the primary.
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        let primary = primary.into();
        let mut secondary = secondary.into();
        if primary == secondary {
            secondary.clear();
        }
        Self { primary, secondary }
    }

    /// The primary code.
    pub fn primary(&self) -> &str {
        &self.primary
    }

    /// The secondary code, or `""` when there is no distinct secondary reading.
    pub fn secondary(&self) -> &str {
        &self.secondary
    }

    /// The secondary code if there is one.
    pub fn alternate(&self) -> Option<&str> {
        if self.secondary.is_empty() {
            None
        } else {
            Some(&self.secondary)
        }
    }

    /// True when neither code has any symbols (e.g. empty or non-Latin input).
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.secondary.is_empty()
    }

    /// Iterate over the non-empty codes, primary first.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        [self.primary.as_str(), self.secondary.as_str()]
            .into_iter()
            .filter(|c| !c.is_empty())
    }

    /// Codes present in both pairs, in this pair's order.
    pub fn shared_codes<'a>(&'a self, other: &PhoneticCodes) -> Vec<&'a str> {
        self.codes().filter(|c| other.codes().any(|o| o == *c)).collect()
    }

    /// True when the two pairs have at least one code in common.
    pub fn intersects(&self, other: &PhoneticCodes) -> bool {
        self.codes().any(|c| other.codes().any(|o| o == c))
    }

    /// Classify how the two pairs agree, or `None` if they share no code.
    pub fn match_strength(&self, other: &PhoneticCodes) -> Option<MatchStrength> {
        if !self.primary.is_empty() && self.primary == other.primary {
            return Some(MatchStrength::Strong);
        }
        if (!self.primary.is_empty() && self.primary == other.secondary)
            || (!other.primary.is_empty() && other.primary == self.secondary)
        {
            return Some(MatchStrength::Normal);
        }
        if !self.secondary.is_empty() && self.secondary == other.secondary {
            return Some(MatchStrength::Weak);
        }
        None
    }

    /// Cap both codes at `max_len` characters, collapsing the secondary code
    /// again if the shortened codes coincide.
    pub fn truncate(&mut self, max_len: usize) {
        truncate_chars(&mut self.primary, max_len);
        truncate_chars(&mut self.secondary, max_len);
        if self.primary == self.secondary {
            self.secondary.clear();
        }
    }

    /// Consume the pair into `(primary, secondary)`.
    pub fn into_pair(self) -> (String, String) {
        (self.primary, self.secondary)
    }
}

impl From<PhoneticCodes> for (String, String) {
    fn from(codes: PhoneticCodes) -> Self {
        codes.into_pair()
    }
}

impl fmt::Display for PhoneticCodes {
    /// `PRIMARY` or `PRIMARY/SECONDARY`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.secondary.is_empty() {
            f.write_str(&self.primary)
        } else {
            write!(f, "{}/{}", self.primary, self.secondary)
        }
    }
}

fn truncate_chars(s: &mut String, max_len: usize) {
    if let Some((idx, _)) = s.char_indices().nth(max_len) {
        s.truncate(idx);
    }
}
