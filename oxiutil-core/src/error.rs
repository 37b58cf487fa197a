//! Error types for OxiUtil operations.
//!
//! Every malformed-input condition detected by the codecs gets its own
//! variant so callers (and tests) can tell the causes apart while still
//! handling a single error type at the boundary.

use thiserror::Error;

/// Malformed encoded text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A character outside the accepted alphabet.
    #[error("Invalid character {ch:?} at position {position}")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
        /// Byte offset of the character in the input.
        position: usize,
    },

    /// The zero-group shorthand appeared inside a group.
    #[error("'z' at position {position} is only allowed at the start of a group")]
    MisplacedZeroGroup {
        /// Byte offset of the shorthand character.
        position: usize,
    },

    /// A group decodes to a value greater than `u32::MAX`.
    #[error("The group ending at position {position} decodes to a value greater than u32::MAX")]
    Overflow {
        /// Byte offset at which the overflow was detected.
        position: usize,
    },

    /// The final group holds a single character, which encodes no bytes.
    #[error("The final Ascii85 group must contain more than one character")]
    TruncatedGroup,

    /// The escape introducer is the last character of the input.
    #[error("'~' cannot be the last character of the encoded string")]
    DanglingEscape,

    /// The escape introducer is followed by a character outside `a`..=`j`.
    #[error("Unexpected character following '~': {ch:?} at position {position}")]
    UnexpectedEscape {
        /// The character found after the escape introducer.
        ch: char,
        /// Byte offset of that character.
        position: usize,
    },
}

/// Result type alias for OxiUtil operations.
pub type Result<T> = std::result::Result<T, FormatError>;

impl FormatError {
    /// Create an invalid character error.
    pub fn invalid_character(ch: char, position: usize) -> Self {
        Self::InvalidCharacter { ch, position }
    }

    /// Create a misplaced zero-group error.
    pub fn misplaced_zero_group(position: usize) -> Self {
        Self::MisplacedZeroGroup { position }
    }

    /// Create an overflow error.
    pub fn overflow(position: usize) -> Self {
        Self::Overflow { position }
    }

    /// Create an unexpected escape error.
    pub fn unexpected_escape(ch: char, position: usize) -> Self {
        Self::UnexpectedEscape { ch, position }
    }
}
