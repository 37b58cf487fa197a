//! Ascii85 encoder.

use crate::{FIRST_CHAR, ZERO_GROUP};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Input chunk size for [`encode_parallel`]; a multiple of the 4-byte group.
#[cfg(feature = "parallel")]
const PARALLEL_CHUNK_SIZE: usize = 64 * 1024;

/// Upper bound on the encoded length of `byte_len` input bytes.
pub fn encoded_len(byte_len: usize) -> usize {
    byte_len / 4 * 5 + match byte_len % 4 {
        0 => 0,
        rem => rem + 1,
    }
}

/// Encode bytes as Ascii85.
///
/// Bytes are taken in big-endian groups of four. A group that is entirely
/// zero becomes `z`; every other full group becomes five characters. A final
/// partial group of `n` bytes is padded with zeros, encoded, and truncated to
/// `n + 1` characters (never `z`).
///
/// # Example
///
/// ```rust
/// use oxiutil_ascii85::encode;
///
/// assert_eq!(encode(&[0, 0, 0, 0]), "z");
/// assert_eq!(encode(&[255, 255, 255, 255]), "s8W-!");
/// assert_eq!(encode(&[0]), "!!");
/// ```
pub fn encode(bytes: &[u8]) -> String {
    let mut output = String::with_capacity(encoded_len(bytes.len()));
    encode_into(bytes, &mut output);
    output
}

/// Encode bytes in parallel (requires `parallel` feature).
///
/// The input is split at group-aligned boundaries and each chunk is encoded
/// on the rayon pool. Output is identical to [`encode`].
#[cfg(feature = "parallel")]
pub fn encode_parallel(bytes: &[u8]) -> String {
    if bytes.len() <= PARALLEL_CHUNK_SIZE {
        return encode(bytes);
    }

    let encoded_chunks: Vec<String> = bytes
        .par_chunks(PARALLEL_CHUNK_SIZE)
        .map(encode)
        .collect();

    let mut output = String::with_capacity(encoded_len(bytes.len()));
    for chunk in &encoded_chunks {
        output.push_str(chunk);
    }
    output
}

fn encode_into(bytes: &[u8], output: &mut String) {
    let mut groups = bytes.chunks_exact(4);
    for group in &mut groups {
        let value = u32::from_be_bytes([group[0], group[1], group[2], group[3]]);
        if value == 0 {
            output.push(ZERO_GROUP);
        } else {
            push_group(output, value, 5);
        }
    }

    // Missing low-order bytes of the last group count as zero
    let remainder = groups.remainder();
    if !remainder.is_empty() {
        let mut padded = [0u8; 4];
        padded[..remainder.len()].copy_from_slice(remainder);
        push_group(output, u32::from_be_bytes(padded), remainder.len() + 1);
    }
}

/// Append the first `count` base-85 digits of `value`, most significant first.
fn push_group(output: &mut String, mut value: u32, count: usize) {
    let mut digits = [0u8; 5];
    for digit in digits.iter_mut().rev() {
        *digit = (value % 85) as u8;
        value /= 85;
    }

    for &digit in &digits[..count] {
        output.push(char::from(FIRST_CHAR as u8 + digit));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode(&[]), "");
    }

    #[test]
    fn test_zero_group_shorthand() {
        assert_eq!(encode(&[0, 0, 0, 0]), "z");
        assert_eq!(encode(&[0; 8]), "zz");
    }

    #[test]
    fn test_partial_zero_group_is_not_shortened() {
        assert_eq!(encode(&[0]), "!!");
        assert_eq!(encode(&[0, 0]), "!!!");
        assert_eq!(encode(&[0, 0, 0]), "!!!!");
        assert_eq!(encode(&[0, 0, 0, 0, 0]), "z!!");
    }

    #[test]
    fn test_max_group() {
        assert_eq!(encode(&[255, 255, 255, 255]), "s8W-!");
    }

    #[test]
    fn test_partial_groups() {
        assert_eq!(encode(&[1]), "!<");
        assert_eq!(encode(&[1, 1]), "!<E");
        assert_eq!(encode(&[1, 1, 1]), "!<E3");
        assert_eq!(encode(&[1, 1, 1, 1]), "!<E3%");
    }

    #[test]
    fn test_encoded_len() {
        assert_eq!(encoded_len(0), 0);
        assert_eq!(encoded_len(1), 2);
        assert_eq!(encoded_len(3), 4);
        assert_eq!(encoded_len(4), 5);
        assert_eq!(encoded_len(9), 12);
    }

    #[test]
    fn test_output_stays_in_alphabet() {
        let data: Vec<u8> = (0..=255).cycle().take(1021).collect();
        let encoded = encode(&data);
        assert!(
            encoded
                .chars()
                .all(|ch| ch == ZERO_GROUP || (FIRST_CHAR..=crate::LAST_CHAR).contains(&ch))
        );
    }

    #[test]
    #[cfg(feature = "parallel")]
    fn test_parallel_matches_serial() {
        let mut data = Vec::new();
        for i in 0..300_001u32 {
            data.push((i.wrapping_mul(2_654_435_761) >> 24) as u8);
        }
        data.extend_from_slice(&[0; 64]);
        assert_eq!(encode_parallel(&data), encode(&data));
    }
}
