//! Ascii85 decoder.

use crate::{FIRST_CHAR, LAST_CHAR, ZERO_GROUP};
use oxiutil_core::{FormatError, Result};

/// Weight of each character position within a five-character group.
const POWERS_OF_85: [u32; 5] = [85 * 85 * 85 * 85, 85 * 85 * 85, 85 * 85, 85, 1];

/// Digit used to pad a short final group.
const PAD_DIGIT: u32 = 84;

/// Decode an Ascii85 string.
///
/// `z` is accepted only as the first character of a group and expands to
/// four zero bytes. A final group of `L` characters (2..=4) is padded with
/// `u` digits and yields `L - 1` bytes.
///
/// # Errors
///
/// - [`FormatError::InvalidCharacter`] for anything outside `!`..=`u`
/// - [`FormatError::MisplacedZeroGroup`] for `z` inside a group
/// - [`FormatError::Overflow`] when a group exceeds `u32::MAX`
/// - [`FormatError::TruncatedGroup`] when the final group has one character
///
/// # Example
///
/// ```rust
/// use oxiutil_ascii85::decode;
///
/// assert_eq!(decode("s8W-!").unwrap(), vec![255, 255, 255, 255]);
/// assert_eq!(decode("z!!").unwrap(), vec![0, 0, 0, 0, 0]);
/// assert!(decode("a").is_err());
/// ```
pub fn decode(encoded: &str) -> Result<Vec<u8>> {
    let mut output = Vec::with_capacity(encoded.len() * 4 / 5);
    let mut count = 0;
    let mut value: u32 = 0;

    for (position, ch) in encoded.char_indices() {
        if ch == ZERO_GROUP {
            if count != 0 {
                return Err(FormatError::misplaced_zero_group(position));
            }
            output.extend_from_slice(&[0; 4]);
            continue;
        }

        let digit = digit_value(ch).ok_or(FormatError::invalid_character(ch, position))?;
        value = accumulate(value, digit, count).ok_or(FormatError::overflow(position))?;
        count += 1;

        if count == 5 {
            output.extend_from_slice(&value.to_be_bytes());
            count = 0;
            value = 0;
        }
    }

    match count {
        0 => {}
        1 => return Err(FormatError::TruncatedGroup),
        _ => {
            for padding in count..5 {
                value = accumulate(value, PAD_DIGIT, padding)
                    .ok_or(FormatError::overflow(encoded.len()))?;
            }
            output.extend_from_slice(&value.to_be_bytes()[..count - 1]);
        }
    }

    Ok(output)
}

fn digit_value(ch: char) -> Option<u32> {
    (FIRST_CHAR..=LAST_CHAR)
        .contains(&ch)
        .then(|| ch as u32 - FIRST_CHAR as u32)
}

/// Add `digit` at group position `index`, or `None` past `u32::MAX`.
fn accumulate(value: u32, digit: u32, index: usize) -> Option<u32> {
    POWERS_OF_85[index]
        .checked_mul(digit)
        .and_then(|weighted| value.checked_add(weighted))
}
