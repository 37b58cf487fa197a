//! # OxiUtil-Ascii85: Pure Rust Ascii85 Encoding
//!
//! Converts between binary data and Ascii85 text, plus an escaping layer that
//! makes Ascii85 text legal inside HTTP header values.
//!
//! ## Format
//!
//! - **Groups**: 4 input bytes, read big-endian, become 5 characters
//! - **Alphabet**: `!` (33) through `u` (117), digit value = code point - 33
//! - **Zero groups**: a full group of four zero bytes encodes as `z`
//! - **Final group**: 1-3 trailing bytes encode as 2-4 characters
//! - **No framing**: no `<~`/`~>` delimiters, no `y` shorthand, no whitespace
//!
//! ## Example
//!
//! ```rust
//! use oxiutil_ascii85::{decode, encode, header};
//!
//! let data = b"Hello, World!";
//! let text = encode(data);
//! assert_eq!(text, "87cURD_*#4DfTZ)+T");
//! assert_eq!(decode(&text).unwrap(), data);
//!
//! // Header-safe: no separators such as ( ) < > @ , ; : survive
//! let safe = header::encode(&text).unwrap();
//! assert_eq!(safe, "87cURD_*#4DfTZw+T");
//! assert_eq!(header::decode(&safe).unwrap(), text);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod decode;
mod encode;
pub mod header;

pub use decode::decode;
pub use encode::{encode, encoded_len};

#[cfg(feature = "parallel")]
pub use encode::encode_parallel;

use oxiutil_core::{Result, TextEncoding};

/// First character of the Ascii85 alphabet (digit 0).
pub const FIRST_CHAR: char = '!';

/// Last character of the Ascii85 alphabet (digit 84).
pub const LAST_CHAR: char = 'u';

/// Shorthand for a group of four zero bytes.
pub const ZERO_GROUP: char = 'z';

/// Plain Ascii85.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ascii85;

impl TextEncoding for Ascii85 {
    fn name(&self) -> &'static str {
        "ascii85"
    }

    fn encode(&self, bytes: &[u8]) -> Result<String> {
        Ok(encode(bytes))
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>> {
        decode(text)
    }
}

/// Ascii85 passed through the HTTP header escaping layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderSafeAscii85;

impl TextEncoding for HeaderSafeAscii85 {
    fn name(&self) -> &'static str {
        "ascii85-http-header"
    }

    fn encode(&self, bytes: &[u8]) -> Result<String> {
        Ok(header::encode_bytes(bytes))
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>> {
        header::decode_bytes(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxiutil_core::FormatError;

    #[test]
    fn test_roundtrip_all_lengths() {
        for len in 0..=16 {
            let data: Vec<u8> = (0..len).map(|i| (i * 37 + 11) as u8).collect();
            assert_eq!(decode(&encode(&data)).unwrap(), data, "length {len}");
        }
    }

    #[test]
    fn test_text_encoding_impls() {
        let data = b"\x00\x00\x00\x00<>@,;:";
        for encoding in [&Ascii85 as &dyn TextEncoding, &HeaderSafeAscii85] {
            assert!(encoding.verify_roundtrip(data).unwrap(), "{}", encoding.name());
        }
    }

    #[test]
    fn test_header_safe_rejects_plain_separator() {
        // A raw '~' can never be produced by the escaper.
        assert_eq!(
            HeaderSafeAscii85.decode("~"),
            Err(FormatError::DanglingEscape)
        );
    }
}
