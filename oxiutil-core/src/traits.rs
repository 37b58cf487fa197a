//! Core traits for binary-to-text encodings.
//!
//! Each concrete alphabet (plain Ascii85, header-safe Ascii85) implements
//! [`TextEncoding`] so front ends can pick one at runtime.

use crate::error::Result;

/// A binary-to-text encoding.
pub trait TextEncoding {
    /// Short lowercase name of the encoding (e.g. `"ascii85"`).
    fn name(&self) -> &'static str;

    /// Encode bytes into text.
    ///
    /// # Arguments
    ///
    /// * `bytes` - Raw input data
    ///
    /// # Returns
    ///
    /// The encoded text.
    fn encode(&self, bytes: &[u8]) -> Result<String>;

    /// Decode text back into bytes.
    ///
    /// # Arguments
    ///
    /// * `text` - Encoded input
    ///
    /// # Returns
    ///
    /// The decoded bytes, or the [`FormatError`](crate::FormatError) describing
    /// why the input is malformed.
    fn decode(&self, text: &str) -> Result<Vec<u8>>;

    /// Encode and decode `bytes`, returning whether the data survived unchanged.
    fn verify_roundtrip(&self, bytes: &[u8]) -> Result<bool> {
        let encoded = self.encode(bytes)?;
        Ok(self.decode(&encoded)? == bytes)
    }
}
