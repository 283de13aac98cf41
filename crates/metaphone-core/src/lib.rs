//! Shared types for Double Metaphone phonetic encoding.
//!
//! This crate holds everything the encoder, its bindings and its command-line
//! tools agree on, without depending on the rule engine itself.
//!
//! - [`character`] -- letter classification and the buffer padding sentinel
//! - [`codes`] -- the [`PhoneticCodes`] result pair and code comparison
//! - [`enums`] -- decode policy and match strength

pub mod character;
pub mod codes;
pub mod enums;

pub use codes::PhoneticCodes;
pub use enums::{DecodePolicy, MatchStrength};

/// Error type shared by the encoder surfaces.
///
/// The encoder itself is total over text input; these errors only arise from
/// options that ask for stricter behavior than the reference algorithm.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetaphoneError {
    /// Input bytes were not valid UTF-8 and the strict decode policy is active.
    #[error("input is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidUtf8 { valid_up_to: usize },
    /// An option value was rejected.
    #[error("invalid option: {0}")]
    InvalidOption(String),
}
