//! HTTP-header-safe escaping of Ascii85 text.
//!
//! RFC 2616 section 2.2 forbids the separators `()<>@,;:\"/[]?={}` in header
//! tokens. Ascii85 uses fifteen of them. Five are replaced by printable
//! characters Ascii85 never produces (`v w x y |`); the other ten become `~`
//! followed by a letter in `a`..=`j`. Whitespace and `z` pass through in both
//! directions.
//!
//! ```text
//!   ( ) < > @        ->  v w x y |
//!   , ; : \ " / [ ] ? =  ->  ~a ~b ~c ~d ~e ~f ~g ~h ~i ~j
//! ```
//!
//! The tables are `const` arrays; both directions are derived from the same
//! pairs, so the mapping is a bijection by construction.

use crate::{FIRST_CHAR, LAST_CHAR, ZERO_GROUP};
use oxiutil_core::{FormatError, Result};

/// Character that introduces a two-character escape sequence.
pub const ESCAPE_CHAR: char = '~';

/// Separators replaced one-for-one: (Ascii85 character, substitute).
const SUBSTITUTIONS: [(char, char); 5] = [
    ('(', 'v'),
    (')', 'w'),
    ('<', 'x'),
    ('>', 'y'),
    ('@', '|'),
];

/// Separators replaced by `~` + letter: (Ascii85 character, letter).
const ESCAPES: [(char, char); 10] = [
    (',', 'a'),
    (';', 'b'),
    (':', 'c'),
    ('\\', 'd'),
    ('"', 'e'),
    ('/', 'f'),
    ('[', 'g'),
    (']', 'h'),
    ('?', 'i'),
    ('=', 'j'),
];

/// Characters copied unchanged even though they are outside `!`..=`u`.
const PASSTHROUGH: [char; 5] = [' ', '\n', '\r', '\t', ZERO_GROUP];

/// Escape an Ascii85 string for use in an HTTP header.
///
/// # Errors
///
/// [`FormatError::InvalidCharacter`] for a character that is neither in the
/// Ascii85 alphabet nor whitespace or `z`.
///
/// # Example
///
/// ```rust
/// use oxiutil_ascii85::header;
///
/// assert_eq!(header::encode("(,z").unwrap(), "v~az");
/// ```
pub fn encode(ascii85: &str) -> Result<String> {
    let mut output = String::with_capacity(ascii85.len() * 2);

    for (position, ch) in ascii85.char_indices() {
        if let Some(substitute) = lookup(&SUBSTITUTIONS, ch) {
            output.push(substitute);
        } else if let Some(letter) = lookup(&ESCAPES, ch) {
            output.push(ESCAPE_CHAR);
            output.push(letter);
        } else if PASSTHROUGH.contains(&ch) || (FIRST_CHAR..=LAST_CHAR).contains(&ch) {
            output.push(ch);
        } else {
            return Err(FormatError::invalid_character(ch, position));
        }
    }

    Ok(output)
}

/// Reverse [`encode`], producing the original Ascii85 string.
///
/// Characters that are not substitutes pass through unchanged; validating
/// the Ascii85 alphabet is left to [`crate::decode`].
///
/// # Errors
///
/// - [`FormatError::DanglingEscape`] when `~` ends the input
/// - [`FormatError::UnexpectedEscape`] when `~` is followed by anything but `a`..=`j`
pub fn decode(escaped: &str) -> Result<String> {
    let mut output = String::with_capacity(escaped.len());
    let mut chars = escaped.char_indices();

    while let Some((_, ch)) = chars.next() {
        if ch == ESCAPE_CHAR {
            let (position, letter) = chars.next().ok_or(FormatError::DanglingEscape)?;
            let original = reverse_lookup(&ESCAPES, letter)
                .ok_or(FormatError::unexpected_escape(letter, position))?;
            output.push(original);
        } else {
            output.push(reverse_lookup(&SUBSTITUTIONS, ch).unwrap_or(ch));
        }
    }

    Ok(output)
}

/// Encode bytes straight to header-safe text.
pub fn encode_bytes(bytes: &[u8]) -> String {
    let ascii85 = crate::encode(bytes);
    let mut output = String::with_capacity(ascii85.len() * 2);

    // The encoder only emits `!`..=`u` and `z`, so every character maps
    for ch in ascii85.chars() {
        if let Some(substitute) = lookup(&SUBSTITUTIONS, ch) {
            output.push(substitute);
        } else if let Some(letter) = lookup(&ESCAPES, ch) {
            output.push(ESCAPE_CHAR);
            output.push(letter);
        } else {
            output.push(ch);
        }
    }

    output
}

/// Decode header-safe text straight to bytes.
pub fn decode_bytes(escaped: &str) -> Result<Vec<u8>> {
    crate::decode(&decode(escaped)?)
}

fn lookup(table: &[(char, char)], ch: char) -> Option<char> {
    table
        .iter()
        .find(|&&(plain, _)| plain == ch)
        .map(|&(_, replacement)| replacement)
}

fn reverse_lookup(table: &[(char, char)], ch: char) -> Option<char> {
    table
        .iter()
        .find(|&&(_, replacement)| replacement == ch)
        .map(|&(plain, _)| plain)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every separator RFC 2616 disallows that falls inside the Ascii85 alphabet.
    const FORBIDDEN: &str = "()<>@,;:\\\"/[]?=";

    #[test]
    fn test_tables_cover_forbidden_set() {
        assert_eq!(SUBSTITUTIONS.len() + ESCAPES.len(), FORBIDDEN.chars().count());
        for ch in FORBIDDEN.chars() {
            assert!(lookup(&SUBSTITUTIONS, ch).is_some() || lookup(&ESCAPES, ch).is_some());
        }
    }

    #[test]
    fn test_substitutes_are_unused_by_ascii85() {
        for &(_, substitute) in &SUBSTITUTIONS {
            assert!(!(FIRST_CHAR..=LAST_CHAR).contains(&substitute));
            assert_ne!(substitute, ZERO_GROUP);
        }
        assert!(!(FIRST_CHAR..=LAST_CHAR).contains(&ESCAPE_CHAR));
    }

    #[test]
    fn test_encode_single_characters() {
        assert_eq!(encode("(").unwrap(), "v");
        assert_eq!(encode("@").unwrap(), "|");
        assert_eq!(encode(",").unwrap(), "~a");
        assert_eq!(encode("=").unwrap(), "~j");
        assert_eq!(encode("").unwrap(), "");
    }

    #[test]
    fn test_passthrough() {
        let text = " \r\n\t!01234567890ABCabcz-*";
        assert_eq!(encode(text).unwrap(), text);
        assert_eq!(decode(text).unwrap(), text);
    }

    #[test]
    fn test_encode_rejects_out_of_range() {
        assert_eq!(encode("\u{b}"), Err(FormatError::invalid_character('\u{b}', 0)));
        assert_eq!(encode("ab€"), Err(FormatError::invalid_character('€', 2)));
        assert_eq!(encode("v"), Err(FormatError::invalid_character('v', 0)));
        assert_eq!(encode("~"), Err(FormatError::invalid_character('~', 0)));
    }

    #[test]
    fn test_decode_dangling_escape() {
        assert_eq!(decode("~"), Err(FormatError::DanglingEscape));
        assert_eq!(decode("ab~"), Err(FormatError::DanglingEscape));
    }

    #[test]
    fn test_decode_unexpected_escape() {
        assert_eq!(decode("a~z"), Err(FormatError::unexpected_escape('z', 2)));
        assert_eq!(decode("~k"), Err(FormatError::unexpected_escape('k', 1)));
    }

    #[test]
    fn test_decode_is_lenient() {
        assert_eq!(decode("{}").unwrap(), "{}");
    }

    #[test]
    fn test_encode_bytes_matches_layers() {
        let data: Vec<u8> = (0..=255).collect();
        let layered = encode(&crate::encode(&data)).unwrap();
        assert_eq!(encode_bytes(&data), layered);
        assert_eq!(decode_bytes(&layered).unwrap(), data);
    }
}
