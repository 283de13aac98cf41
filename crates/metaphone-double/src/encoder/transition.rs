// Transition: what one letter handler decides

/// The outcome of evaluating the rules for the letter under the cursor:
/// which symbols to append and how far to move.
///
/// `advance` is always at least 1, which is what guarantees the encoder
/// terminates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The same symbol (or nothing) goes to both codes.
    Shared {
        symbol: Option<&'static str>,
        advance: usize,
    },
    /// Primary and secondary codes get independent symbols.
    Split {
        primary: Option<&'static str>,
        secondary: Option<&'static str>,
        advance: usize,
    },
}

impl Transition {
    /// Append `symbol` to both codes.
    pub const fn emit(symbol: &'static str, advance: usize) -> Self {
        Transition::Shared {
            symbol: Some(symbol),
            advance,
        }
    }

    /// Emit nothing.
    pub const fn skip(advance: usize) -> Self {
        Transition::Shared {
            symbol: None,
            advance,
        }
    }

    /// Append `primary` and `secondary` to their own codes. An empty string
    /// means that code gets nothing.
    pub const fn split(primary: &'static str, secondary: &'static str, advance: usize) -> Self {
        Transition::Split {
            primary: non_empty(primary),
            secondary: non_empty(secondary),
            advance,
        }
    }

    /// Number of buffer positions the cursor moves.
    pub const fn advance(&self) -> usize {
        match *self {
            Transition::Shared { advance, .. } | Transition::Split { advance, .. } => advance,
        }
    }

    /// Symbol appended to the primary code, if any.
    pub const fn primary(&self) -> Option<&'static str> {
        match *self {
            Transition::Shared { symbol, .. } => symbol,
            Transition::Split { primary, .. } => primary,
        }
    }

    /// Symbol appended to the secondary code, if any.
    pub const fn secondary(&self) -> Option<&'static str> {
        match *self {
            Transition::Shared { symbol, .. } => symbol,
            Transition::Split { secondary, .. } => secondary,
        }
    }
}

const fn non_empty(symbol: &'static str) -> Option<&'static str> {
    if symbol.is_empty() { None } else { Some(symbol) }
}
