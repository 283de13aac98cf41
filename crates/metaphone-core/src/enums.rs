// Shared enums: decode policy and match strength

/// How raw input bytes are turned into text before encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DecodePolicy {
    /// Drop byte sequences that are not valid UTF-8 and keep the rest.
    /// This is the behavior codes have always been computed with.
    #[default]
    Lossy,
    /// Reject input that is not valid UTF-8.
    Strict,
}

/// How closely two pairs of phonetic codes agree.
///
/// Variants are ordered from strongest to weakest, so sorting a list of
/// strengths puts the best matches first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchStrength {
    /// Primary codes are equal.
    Strong,
    /// The primary code of one equals the secondary code of the other.
    Normal,
    /// Only the secondary codes are equal.
    Weak,
}

impl MatchStrength {
    /// Short tag used by the command-line tools (`S`, `N`, `W`).
    pub fn tag(self) -> char {
        match self {
            MatchStrength::Strong => 'S',
            MatchStrength::Normal => 'N',
            MatchStrength::Weak => 'W',
        }
    }

    /// Lower-case name, as exposed to JavaScript.
    pub fn as_str(self) -> &'static str {
        match self {
            MatchStrength::Strong => "strong",
            MatchStrength::Normal => "normal",
            MatchStrength::Weak => "weak",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_lossy() {
        assert_eq!(DecodePolicy::default(), DecodePolicy::Lossy);
    }

    #[test]
    fn strengths_sort_strongest_first() {
        let mut v = vec![MatchStrength::Weak, MatchStrength::Strong, MatchStrength::Normal];
        v.sort();
        assert_eq!(v, [MatchStrength::Strong, MatchStrength::Normal, MatchStrength::Weak]);
    }

    #[test]
    fn tags() {
        assert_eq!(MatchStrength::Strong.tag(), 'S');
        assert_eq!(MatchStrength::Normal.tag(), 'N');
        assert_eq!(MatchStrength::Weak.tag(), 'W');
        assert_eq!(MatchStrength::Normal.as_str(), "normal");
    }
}
